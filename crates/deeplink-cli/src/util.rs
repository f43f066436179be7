//! Process setup shared by all commands.

use std::path::Path;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

/// Load `.env` from `dir` without overriding existing environment variables.
pub fn load_dotenv(dir: &Path) -> Result<()> {
    let env_path = dir.join(".env");
    if env_path.exists() {
        for item in dotenvy::from_path_iter(&env_path).context("load .env")? {
            let (key, val) = item?;
            if std::env::var_os(&key).is_none() {
                // Single-threaded at this point; nothing else reads the environment yet.
                unsafe {
                    std::env::set_var(&key, &val);
                }
            }
        }
    }
    Ok(())
}

/// Log to stderr. `RUST_LOG` wins; otherwise warnings, or errors only with `--quiet`.
pub fn setup_logging(quiet: bool) {
    let default = if quiet { "error" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .init();
}
