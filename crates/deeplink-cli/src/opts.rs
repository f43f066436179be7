//! Global CLI options and manifest loading.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use deeplink_schemes::{
    ExecutionEnvironment, ManifestSources, Platform, RuntimeContext, load_constants_from_path,
    load_manifest_from_path,
};

/// Global options for CLI commands.
///
/// Each option can also be set through its `DEEPLINK_*` environment variable.
#[derive(Args, Debug, Clone)]
pub struct GlobalOpts {
    /// Legacy manifest JSON (env: DEEPLINK_MANIFEST)
    #[arg(long, global = true, env = "DEEPLINK_MANIFEST")]
    pub manifest: Option<PathBuf>,

    /// New-format manifest JSON, app config under extra.expoClient (env: DEEPLINK_MANIFEST2)
    #[arg(long, global = true, env = "DEEPLINK_MANIFEST2")]
    pub manifest2: Option<PathBuf>,

    /// Combined constants JSON with `manifest` and `manifest2` keys (env: DEEPLINK_CONSTANTS)
    #[arg(
        long,
        global = true,
        env = "DEEPLINK_CONSTANTS",
        conflicts_with_all = ["manifest", "manifest2"]
    )]
    pub constants: Option<PathBuf>,

    /// Execution environment: bare, standalone, store-client (env: DEEPLINK_EXECUTION_ENV)
    #[arg(
        long = "env",
        value_name = "ENV",
        global = true,
        default_value = "bare",
        env = "DEEPLINK_EXECUTION_ENV"
    )]
    pub environment: ExecutionEnvironment,

    /// Target platform: ios, android, web (env: DEEPLINK_PLATFORM)
    #[arg(long, global = true, default_value = "android", env = "DEEPLINK_PLATFORM")]
    pub platform: Platform,

    /// Development mode; some failures become warnings (env: DEEPLINK_DEV)
    #[arg(long, global = true, env = "DEEPLINK_DEV")]
    pub dev: bool,

    /// JSON output envelope
    #[arg(long, global = true)]
    pub json: bool,

    /// Pretty-print JSON output (implies --json)
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Suppress warnings
    #[arg(long, global = true)]
    pub quiet: bool,
}

impl GlobalOpts {
    pub fn context(&self) -> RuntimeContext {
        RuntimeContext {
            environment: self.environment,
            platform: self.platform,
            is_dev: self.dev,
        }
    }

    /// Load the manifest snapshot named by the options. Missing options
    /// yield an empty snapshot.
    pub fn load_sources(&self) -> Result<ManifestSources> {
        if let Some(path) = &self.constants {
            tracing::debug!(path = %path.display(), "loading constants");
            return load_constants_from_path(path)
                .with_context(|| format!("load constants from {}", path.display()));
        }

        let legacy = match &self.manifest {
            Some(path) => {
                tracing::debug!(path = %path.display(), "loading legacy manifest");
                Some(
                    load_manifest_from_path(path)
                        .with_context(|| format!("load manifest from {}", path.display()))?,
                )
            }
            None => None,
        };
        let modern = match &self.manifest2 {
            Some(path) => {
                tracing::debug!(path = %path.display(), "loading new-format manifest");
                Some(
                    load_manifest_from_path(path)
                        .with_context(|| format!("load manifest2 from {}", path.display()))?,
                )
            }
            None => None,
        };
        Ok(ManifestSources::new(legacy, modern))
    }
}
