//! JVM launch planning: request model, command construction, and passthrough checks.
pub mod command;
pub mod passthrough;
pub mod request;
pub mod variant;

pub use command::{Launcher, DEFAULT_ENTRY_POINT, MANAGED_FRAMEWORK_PREFIX};
pub use passthrough::{
    reserved_prefix_for, validate_app_args, PassthroughError, ReservedKind, ReservedPrefix,
    RESERVED_APP_ARG_PREFIXES,
};
pub use request::{LaunchRequest, LaunchRequestBuilder};
pub use variant::Variant;
