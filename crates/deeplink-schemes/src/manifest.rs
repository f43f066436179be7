//! Manifest snapshots and the legacy-then-new-format field lookup.

use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::error::{ManifestError, ManifestResult};

pub type JsonObject = Map<String, Value>;

/// Path from the new-format manifest root to the embedded app config.
const MODERN_CONFIG_PATH: &[&str] = &["extra", "expoClient"];

/// The two manifest representations an app may carry.
///
/// `legacy` holds app config fields at its root. `modern` nests them under
/// `extra.expoClient`. Either may be absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ManifestSources {
    legacy: Option<JsonObject>,
    modern: Option<JsonObject>,
}

impl ManifestSources {
    pub fn new(legacy: Option<JsonObject>, modern: Option<JsonObject>) -> Self {
        Self { legacy, modern }
    }

    /// Build from arbitrary JSON values; `null` counts as absent.
    pub fn from_values(legacy: Option<Value>, modern: Option<Value>) -> ManifestResult<Self> {
        Ok(Self {
            legacy: into_object(legacy, "manifest")?,
            modern: into_object(modern, "manifest2")?,
        })
    }

    pub fn legacy(&self) -> Option<&JsonObject> {
        self.legacy.as_ref()
    }

    pub fn modern(&self) -> Option<&JsonObject> {
        self.modern.as_ref()
    }

    /// True when at least one representation has a key.
    pub fn has_any_keys(&self) -> bool {
        [&self.legacy, &self.modern]
            .into_iter()
            .any(|m| m.as_ref().is_some_and(|m| !m.is_empty()))
    }

    /// Look up `path`, trying the legacy manifest first and then the
    /// new-format app config. JSON `null` is treated as missing.
    pub fn field(&self, path: &[&str]) -> Option<&Value> {
        self.legacy_field(path).or_else(|| self.modern_field(path))
    }

    pub fn legacy_field(&self, path: &[&str]) -> Option<&Value> {
        walk(self.legacy.as_ref()?, path)
    }

    pub fn modern_field(&self, path: &[&str]) -> Option<&Value> {
        let config = walk(self.modern.as_ref()?, MODERN_CONFIG_PATH)?.as_object()?;
        walk(config, path)
    }

    pub fn str_field(&self, path: &[&str]) -> Option<&str> {
        self.field(path).and_then(Value::as_str)
    }
}

fn walk<'a>(root: &'a JsonObject, path: &[&str]) -> Option<&'a Value> {
    let (first, rest) = path.split_first()?;
    let mut current = root.get(*first)?;
    for key in rest {
        current = current.as_object()?.get(*key)?;
    }
    (!current.is_null()).then_some(current)
}

fn into_object(value: Option<Value>, label: &'static str) -> ManifestResult<Option<JsonObject>> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Object(map)) => Ok(Some(map)),
        Some(other) => Err(ManifestError::NotAnObject {
            label,
            found: json_kind(&other),
        }),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

pub fn load_manifest_from_path(path: impl AsRef<Path>) -> ManifestResult<JsonObject> {
    let path_ref = path.as_ref();
    let bytes = std::fs::read(path_ref).map_err(|e| io_error(path_ref, e))?;
    load_manifest_from_bytes(&bytes)
}

pub fn load_manifest_from_bytes(bytes: &[u8]) -> ManifestResult<JsonObject> {
    let value: Value = serde_json::from_slice(bytes)?;
    match into_object(Some(value), "manifest")? {
        Some(map) => Ok(map),
        None => Err(ManifestError::NotAnObject {
            label: "manifest",
            found: "null",
        }),
    }
}

/// Load a combined constants document of the form
/// `{ "manifest": {...}, "manifest2": {...} }`.
pub fn load_constants_from_path(path: impl AsRef<Path>) -> ManifestResult<ManifestSources> {
    let path_ref = path.as_ref();
    let bytes = std::fs::read(path_ref).map_err(|e| io_error(path_ref, e))?;
    load_constants_from_bytes(&bytes)
}

pub fn load_constants_from_bytes(bytes: &[u8]) -> ManifestResult<ManifestSources> {
    let value: Value = serde_json::from_slice(bytes)?;
    let Value::Object(mut root) = value else {
        return Err(ManifestError::NotAnObject {
            label: "constants",
            found: json_kind(&value),
        });
    };
    ManifestSources::from_values(root.remove("manifest"), root.remove("manifest2"))
}

fn io_error(path: impl Into<PathBuf>, err: std::io::Error) -> ManifestError {
    ManifestError::Io {
        path: path.into(),
        source: err,
    }
}
