//! Launch request model and its fluent builder.

use std::collections::BTreeMap;

/// Everything the launcher needs to know about one invocation.
///
/// Optional string fields treat `None` and `""` the same way: the matching flag is left out.
/// Operation arguments live in a `BTreeMap`, so they are always emitted sorted by key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LaunchRequest {
    pub artifact_path: String,
    pub operation: Option<String>,
    pub output_file: Option<String>,
    pub log_level: Option<String>,
    pub operation_args: BTreeMap<String, String>,
    pub runtime_args: Vec<String>,
    pub app_args: Vec<String>,
}

impl LaunchRequest {
    /// Request for `artifact_path` with no optional fields set.
    pub fn new(artifact_path: impl Into<String>) -> Self {
        Self {
            artifact_path: artifact_path.into(),
            ..Self::default()
        }
    }

    pub fn builder(artifact_path: impl Into<String>) -> LaunchRequestBuilder {
        LaunchRequestBuilder {
            request: Self::new(artifact_path),
        }
    }

    pub fn operation(&self) -> Option<&str> {
        non_empty(self.operation.as_deref())
    }

    pub fn output_file(&self) -> Option<&str> {
        non_empty(self.output_file.as_deref())
    }

    pub fn log_level(&self) -> Option<&str> {
        non_empty(self.log_level.as_deref())
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Fluent construction of a [`LaunchRequest`].
#[derive(Debug, Clone)]
pub struct LaunchRequestBuilder {
    request: LaunchRequest,
}

impl LaunchRequestBuilder {
    pub fn operation(mut self, operation: Option<impl Into<String>>) -> Self {
        self.request.operation = operation.map(Into::into);
        self
    }

    pub fn output_file(mut self, output_file: Option<impl Into<String>>) -> Self {
        self.request.output_file = output_file.map(Into::into);
        self
    }

    pub fn log_level(mut self, log_level: Option<impl Into<String>>) -> Self {
        self.request.log_level = log_level.map(Into::into);
        self
    }

    /// Replace all operation arguments.
    pub fn operation_args<K, V>(mut self, args: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.request.operation_args = args
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect();
        self
    }

    /// Add a single operation argument; a repeated key keeps the last value.
    pub fn operation_arg(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.request
            .operation_args
            .insert(key.into(), value.into());
        self
    }

    pub fn runtime_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.request.runtime_args = args.into_iter().map(Into::into).collect();
        self
    }

    pub fn app_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.request.app_args = args.into_iter().map(Into::into).collect();
        self
    }

    pub fn build(self) -> LaunchRequest {
        self.request
    }
}
