use serde_json::Value;

use crate::{ExecutionEnvironment, ManifestSources, Platform, RuntimeContext};

mod manifest;

pub(crate) fn legacy(manifest: Value) -> ManifestSources {
    ManifestSources::from_values(Some(manifest), None).expect("legacy manifest")
}

pub(crate) fn modern(manifest2: Value) -> ManifestSources {
    ManifestSources::from_values(None, Some(manifest2)).expect("new-format manifest")
}

pub(crate) fn ctx(
    environment: ExecutionEnvironment,
    platform: Platform,
    is_dev: bool,
) -> RuntimeContext {
    RuntimeContext {
        environment,
        platform,
        is_dev,
    }
}
