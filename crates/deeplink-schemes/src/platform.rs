//! Target platforms, execution environments, and the per-platform data
//! tables the resolver consults.

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseFlagError {
    #[error("unknown execution environment '{value}': expected bare, standalone, or storeClient")]
    ExecutionEnvironment { value: String },
    #[error("unknown platform '{value}': expected ios, android, or web")]
    Platform { value: String },
}

/// How the hosting app was produced and distributed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ExecutionEnvironment {
    /// Natively built project that owns its Info.plist / AndroidManifest.
    Bare,
    /// Managed app compiled into its own binary.
    Standalone,
    /// Running inside the shared store client app.
    StoreClient,
}

impl ExecutionEnvironment {
    pub fn as_str(self) -> &'static str {
        match self {
            ExecutionEnvironment::Bare => "bare",
            ExecutionEnvironment::Standalone => "standalone",
            ExecutionEnvironment::StoreClient => "storeClient",
        }
    }
}

impl fmt::Display for ExecutionEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExecutionEnvironment {
    type Err = ParseFlagError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bare" => Ok(ExecutionEnvironment::Bare),
            "standalone" => Ok(ExecutionEnvironment::Standalone),
            "storeclient" | "store-client" | "store_client" => Ok(ExecutionEnvironment::StoreClient),
            _ => Err(ParseFlagError::ExecutionEnvironment { value: s.to_string() }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Ios,
    Android,
    Web,
}

impl Platform {
    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Ios => "ios",
            Platform::Android => "android",
            Platform::Web => "web",
        }
    }

    pub fn profile(self) -> &'static PlatformProfile {
        match self {
            Platform::Ios => &IOS_PROFILE,
            Platform::Android => &ANDROID_PROFILE,
            Platform::Web => &WEB_PROFILE,
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = ParseFlagError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ios" => Ok(Platform::Ios),
            "android" => Ok(Platform::Android),
            "web" => Ok(Platform::Web),
            _ => Err(ParseFlagError::Platform { value: s.to_string() }),
        }
    }
}

/// Static per-platform lookup data.
#[derive(Debug)]
pub struct PlatformProfile {
    /// Key of the platform sub-object in the manifest (`ios`, `android`).
    /// `None` when the platform has no manifest section.
    pub manifest_key: Option<&'static str>,
    /// Field inside the platform sub-object holding the native app id.
    pub bundle_id_field: Option<&'static str>,
    /// Schemes the store client registers natively; only these may be
    /// requested while running inside it.
    pub store_client_schemes: &'static [&'static str],
}

impl PlatformProfile {
    pub fn allows_store_client_scheme(&self, scheme: &str) -> bool {
        self.store_client_schemes.contains(&scheme)
    }
}

/// Scheme used whenever the store client cannot honor a requested one.
pub const STORE_CLIENT_DEFAULT_SCHEME: &str = "exp";

static IOS_PROFILE: PlatformProfile = PlatformProfile {
    manifest_key: Some("ios"),
    bundle_id_field: Some("bundleIdentifier"),
    // From the store client's Info.plist URL types.
    store_client_schemes: &[
        "exp",
        "exps",
        "fb1696089354000816",
        "host.exp.exponent",
        "com.googleusercontent.apps.603386649315-vp4revvrcgrcjme51ebuhbkbspl048l9",
    ],
};

static ANDROID_PROFILE: PlatformProfile = PlatformProfile {
    manifest_key: Some("android"),
    // May move to applicationId eventually.
    bundle_id_field: Some("package"),
    store_client_schemes: &["exp", "exps"],
};

static WEB_PROFILE: PlatformProfile = PlatformProfile {
    manifest_key: None,
    bundle_id_field: None,
    store_client_schemes: &[],
};
