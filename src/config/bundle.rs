use std::path::Path;

use serde::Deserialize;

use crate::{launch::DEFAULT_ENTRY_POINT, lib::errors::ConfigError};

/// Settings for flat bundles launched through `-cp`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleSection {
    pub entry_point: String,
}

impl Default for BundleSection {
    fn default() -> Self {
        Self {
            entry_point: DEFAULT_ENTRY_POINT.to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct RawBundleSection {
    pub entry_point: Option<String>,
}

pub fn parse_bundle_section(
    raw: Option<RawBundleSection>,
    path: &Path,
) -> Result<BundleSection, ConfigError> {
    let raw = raw.unwrap_or_default();
    let Some(entry_point) = raw.entry_point else {
        return Ok(BundleSection::default());
    };
    validate_entry_point(&entry_point, path)?;
    Ok(BundleSection { entry_point })
}

/// Entry points are fully qualified class names: dot-separated Java identifiers.
fn validate_entry_point(entry_point: &str, path: &Path) -> Result<(), ConfigError> {
    if entry_point.is_empty() {
        return Err(ConfigError::invalid_field(
            path,
            "bundle.entry_point",
            "Set a fully qualified class name or remove the key",
        ));
    }

    let valid = entry_point.split('.').all(|segment| {
        let mut chars = segment.chars();
        matches!(chars.next(), Some(c) if c.is_alphabetic() || c == '_' || c == '$')
            && chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
    });
    if valid {
        return Ok(());
    }

    Err(ConfigError::invalid_field(
        path,
        "bundle.entry_point",
        format!("`{entry_point}` is not a fully qualified class name"),
    ))
}
