//! Deep-link URI scheme resolution over app manifest snapshots.

pub mod error;
pub mod manifest;
pub mod platform;
mod resolver;
pub mod warning;

pub use error::{
    LINKING_GUIDE_URL, ManifestError, ManifestResult, MissingSchemeReason, SchemeError,
    SchemeErrorKind,
};
pub use manifest::{
    JsonObject, ManifestSources, load_constants_from_bytes, load_constants_from_path,
    load_manifest_from_bytes, load_manifest_from_path,
};
pub use platform::{
    ExecutionEnvironment, ParseFlagError, Platform, PlatformProfile, STORE_CLIENT_DEFAULT_SCHEME,
};
pub use resolver::{ResolveProps, ResolvedScheme, RuntimeContext, SchemeResolver};
pub use warning::{SchemeWarning, TracingSink, WarningSink};

#[cfg(test)]
mod tests;
