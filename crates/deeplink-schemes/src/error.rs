use std::{fmt, io, path::PathBuf};

use thiserror::Error;

/// Guide linked from every scheme diagnostic.
pub const LINKING_GUIDE_URL: &str = "https://docs.expo.io/guides/linking/";

pub type ManifestResult<T> = Result<T, ManifestError>;

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("I/O error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("manifest JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{label} must be a JSON object, found {found}")]
    NotAnObject {
        label: &'static str,
        found: &'static str,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemeErrorKind {
    ConfigurationMissing,
    SchemeMissing,
}

/// Which check found no usable scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingSchemeReason {
    /// The manifest declares no scheme at all.
    NoCustomScheme,
    /// No primary scheme remained after override and fallback checks.
    NoPrimaryScheme,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SchemeError {
    #[error(
        "deep linking needs access to the app manifest (app.json or app.config.js) to determine which URI scheme to use; set up the manifest and rebuild"
    )]
    ConfigurationMissing,
    #[error("{reason}")]
    SchemeMissing { reason: MissingSchemeReason },
}

impl SchemeError {
    pub fn kind(&self) -> SchemeErrorKind {
        match self {
            SchemeError::ConfigurationMissing => SchemeErrorKind::ConfigurationMissing,
            SchemeError::SchemeMissing { .. } => SchemeErrorKind::SchemeMissing,
        }
    }
}

impl fmt::Display for MissingSchemeReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MissingSchemeReason::NoCustomScheme => f.write_str(
                "cannot make a deep link into a standalone app with no custom scheme defined",
            ),
            MissingSchemeReason::NoPrimaryScheme => write!(
                f,
                "linking requires a build-time `scheme` setting in the app config (app.config.js or app.json) for bare or production apps; passing a scheme explicitly avoids this error. Learn more: {LINKING_GUIDE_URL}"
            ),
        }
    }
}
