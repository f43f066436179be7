//! Scheme selection for deep links.
//!
//! Candidates are gathered from the manifest in a fixed order:
//!
//! - iOS: `scheme` -> `detach.scheme` -> `ios.scheme` (native id: `ios.bundleIdentifier`)
//! - Android: `scheme` -> `detach.scheme` -> `android.scheme` (native id: `android.package`)
//!
//! The first candidate is the primary scheme. Everything else is either a
//! warning or, when nothing usable remains, a [`SchemeError`].

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{MissingSchemeReason, SchemeError};
use crate::manifest::ManifestSources;
use crate::platform::{
    ExecutionEnvironment, Platform, PlatformProfile, STORE_CLIENT_DEFAULT_SCHEME,
};
use crate::warning::{SchemeWarning, TracingSink, WarningSink};

pub type ResolvedScheme = String;

/// Host-supplied flags that stay fixed for a process run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuntimeContext {
    pub environment: ExecutionEnvironment,
    pub platform: Platform,
    pub is_dev: bool,
}

impl Default for RuntimeContext {
    fn default() -> Self {
        Self {
            environment: ExecutionEnvironment::Bare,
            platform: Platform::Android,
            is_dev: false,
        }
    }
}

/// Per-call caller input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolveProps {
    /// Explicit scheme requested by the caller.
    #[serde(default)]
    pub scheme: Option<String>,
    /// Suppresses warnings. Errors are still returned.
    #[serde(default)]
    pub is_silent: bool,
}

impl ResolveProps {
    pub fn with_scheme(scheme: impl Into<String>) -> Self {
        Self {
            scheme: Some(scheme.into()),
            is_silent: false,
        }
    }

    pub fn silent(mut self) -> Self {
        self.is_silent = true;
        self
    }

    fn requested_scheme(&self) -> Option<&str> {
        self.scheme.as_deref().filter(|s| !s.is_empty())
    }
}

/// How a reported situation escalates.
enum Severity {
    /// Warn unless silenced.
    Advisory,
    /// Warn in development mode unless silenced.
    DevAdvisory,
    /// Warn in development mode unless silenced; otherwise fail, except
    /// inside the store client during development.
    DevOrFatal(SchemeError),
}

#[derive(Debug, Clone)]
pub struct SchemeResolver<'a> {
    sources: &'a ManifestSources,
    context: RuntimeContext,
    profile: &'static PlatformProfile,
}

impl<'a> SchemeResolver<'a> {
    pub fn new(sources: &'a ManifestSources, context: RuntimeContext) -> Self {
        Self {
            sources,
            context,
            profile: context.platform.profile(),
        }
    }

    pub fn context(&self) -> RuntimeContext {
        self.context
    }

    /// Whether the app was shipped with any manifest data at all.
    pub fn has_constants_manifest(&self) -> bool {
        self.sources.has_any_keys()
    }

    /// Whether the running app answers to a scheme of its own rather than
    /// the store client's default.
    pub fn has_custom_scheme(&self) -> bool {
        match self.context.environment {
            ExecutionEnvironment::Bare => true,
            ExecutionEnvironment::Standalone => !self.collect_manifest_schemes().is_empty(),
            ExecutionEnvironment::StoreClient => false,
        }
    }

    /// Every scheme the manifest declares, primary first.
    pub fn collect_manifest_schemes(&self) -> Vec<String> {
        let mut schemes = scheme_list(self.sources.field(&["scheme"]));

        // ExpoKit detached scheme, from either representation.
        let detached = [
            self.sources.legacy_field(&["detach", "scheme"]),
            self.sources.modern_field(&["detach", "scheme"]),
        ];
        schemes.extend(
            detached
                .into_iter()
                .flatten()
                .filter_map(Value::as_str)
                .filter(|s| !s.is_empty())
                .map(str::to_owned),
        );

        if let Some(key) = self.profile.manifest_key {
            schemes.extend(scheme_list(self.sources.field(&[key, "scheme"])));
        }
        schemes
    }

    /// Bundle identifier (iOS) or package name (Android).
    pub fn native_app_id(&self) -> Option<String> {
        let key = self.profile.manifest_key?;
        let field = self.profile.bundle_id_field?;
        self.sources
            .str_field(&[key, field])
            .filter(|id| !id.is_empty())
            .map(str::to_owned)
    }

    /// Resolve the scheme, logging warnings through `tracing`.
    pub fn resolve_scheme(&self, props: &ResolveProps) -> Result<ResolvedScheme, SchemeError> {
        self.resolve_scheme_with(props, TracingSink)
    }

    pub fn resolve_scheme_with(
        &self,
        props: &ResolveProps,
        mut sink: impl WarningSink,
    ) -> Result<ResolvedScheme, SchemeError> {
        let environment = self.context.environment;
        if environment != ExecutionEnvironment::StoreClient && !self.has_constants_manifest() {
            return Err(SchemeError::ConfigurationMissing);
        }

        let manifest_schemes = self.collect_manifest_schemes();
        let native_app_id = self.native_app_id();

        if manifest_schemes.is_empty() {
            self.report(
                props,
                &mut sink,
                Severity::DevOrFatal(SchemeError::SchemeMissing {
                    reason: MissingSchemeReason::NoCustomScheme,
                }),
                SchemeWarning::SchemeNotConfigured,
            )?;
        }

        if environment == ExecutionEnvironment::StoreClient {
            return Ok(self.store_client_scheme(props));
        }

        if let Some(requested) = props.requested_scheme() {
            let candidates: Vec<String> = manifest_schemes
                .iter()
                .chain(native_app_id.iter())
                .filter(|s| !s.is_empty())
                .cloned()
                .collect();
            if !candidates.iter().any(|c| c == requested) {
                self.report(
                    props,
                    &mut sink,
                    Severity::DevAdvisory,
                    SchemeWarning::OverrideNotListed {
                        scheme: requested.to_string(),
                        expected: candidates,
                    },
                )?;
            }
            return Ok(requested.to_string());
        }

        if manifest_schemes.is_empty()
            && let Some(native_app_id) = native_app_id
        {
            self.report(
                props,
                &mut sink,
                Severity::Advisory,
                SchemeWarning::NativeAppIdFallback {
                    native_app_id: native_app_id.clone(),
                },
            )?;
            return Ok(native_app_id);
        }

        let mut schemes = manifest_schemes.into_iter();
        let primary = schemes
            .next()
            .filter(|s| !s.is_empty())
            .ok_or(SchemeError::SchemeMissing {
                reason: MissingSchemeReason::NoPrimaryScheme,
            })?;

        // The native app id alone does not count as a competing scheme.
        let extra: Vec<String> = schemes.filter(|s| !s.is_empty()).collect();
        if !extra.is_empty() {
            let ignored = extra.into_iter().chain(native_app_id).collect();
            self.report(
                props,
                &mut sink,
                Severity::Advisory,
                SchemeWarning::MultipleSchemes {
                    primary: primary.clone(),
                    ignored,
                },
            )?;
        }
        Ok(primary)
    }

    fn store_client_scheme(&self, props: &ResolveProps) -> ResolvedScheme {
        match props.requested_scheme() {
            Some(requested) if self.profile.allows_store_client_scheme(requested) => {
                requested.to_string()
            }
            Some(requested) => {
                tracing::debug!(
                    target: "deeplink_schemes",
                    scheme = requested,
                    "store client does not register requested scheme; using default"
                );
                STORE_CLIENT_DEFAULT_SCHEME.to_string()
            }
            None => STORE_CLIENT_DEFAULT_SCHEME.to_string(),
        }
    }

    fn report(
        &self,
        props: &ResolveProps,
        sink: &mut impl WarningSink,
        severity: Severity,
        warning: SchemeWarning,
    ) -> Result<(), SchemeError> {
        let is_dev = self.context.is_dev;
        let audible = !props.is_silent;
        match severity {
            Severity::Advisory => {
                if audible {
                    sink.warn(warning);
                }
            }
            Severity::DevAdvisory => {
                if is_dev && audible {
                    sink.warn(warning);
                }
            }
            Severity::DevOrFatal(error) => {
                if is_dev && audible {
                    sink.warn(warning);
                } else if !is_dev
                    || self.context.environment != ExecutionEnvironment::StoreClient
                {
                    return Err(error);
                }
            }
        }
        Ok(())
    }
}

/// Flatten a `scheme` field: a string, or an array whose string entries are kept.
fn scheme_list(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::String(s)) => vec![s.clone()],
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_owned)
            .collect(),
        _ => Vec::new(),
    }
}
