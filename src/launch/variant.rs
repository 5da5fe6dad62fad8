use clap::ValueEnum;
use serde::Serialize;

/// Packaging layout of the artifact being launched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    /// Bundle started through its own runtime-management entry point (`-jar`).
    #[value(alias = "spring-boot")]
    ManagedRuntimeBundle,
    /// Flat bundle started from the classpath with an explicit entry-point class (`-cp`).
    #[value(alias = "plain-uber")]
    FlatExecutableBundle,
}

impl Variant {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Variant::ManagedRuntimeBundle => "managed-runtime-bundle",
            Variant::FlatExecutableBundle => "flat-executable-bundle",
        }
    }
}
