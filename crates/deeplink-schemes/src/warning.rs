//! Non-fatal scheme diagnostics and where they go.

use std::fmt;

use crate::error::LINKING_GUIDE_URL;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemeWarning {
    /// The manifest declares no scheme; production builds will fail to link.
    SchemeNotConfigured,
    /// A caller-supplied scheme does not match anything the manifest declares.
    OverrideNotListed { scheme: String, expected: Vec<String> },
    /// The native app id stands in for a missing manifest scheme.
    NativeAppIdFallback { native_app_id: String },
    /// Several schemes were declared; only the first is used.
    MultipleSchemes { primary: String, ignored: Vec<String> },
}

impl fmt::Display for SchemeWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemeWarning::SchemeNotConfigured => write!(
                f,
                "linking requires a build-time `scheme` setting in the app config (app.config.js or app.json) for production apps; \
                 without it a production build may fail to open deep links. The scheme is not used during development in the store client, \
                 but add it as soon as you start working with linking. Learn more: {LINKING_GUIDE_URL}"
            ),
            SchemeWarning::OverrideNotListed { scheme, expected } => {
                let expected = expected
                    .iter()
                    .map(|s| format!("'{s}'"))
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(
                    f,
                    "the provided linking scheme '{scheme}' does not appear in the list of possible URI schemes in the app config. Expected one of: {expected}"
                )
            }
            SchemeWarning::NativeAppIdFallback { native_app_id } => write!(
                f,
                "linking requires a build-time `scheme` setting in the app config (app.config.js or app.json) for bare or production apps; \
                 passing a scheme explicitly avoids this warning. Using native app identifier as the scheme '{native_app_id}'. Learn more: {LINKING_GUIDE_URL}"
            ),
            SchemeWarning::MultipleSchemes { primary, ignored } => write!(
                f,
                "linking found multiple possible URI schemes in the app config.\nUsing '{primary}'. Ignoring: {}.\nPlease supply the preferred URI scheme to the linking API.",
                ignored.join(", ")
            ),
        }
    }
}

/// Receives warnings emitted during resolution.
pub trait WarningSink {
    fn warn(&mut self, warning: SchemeWarning);
}

/// Forwards warnings to `tracing` at WARN level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl WarningSink for TracingSink {
    fn warn(&mut self, warning: SchemeWarning) {
        tracing::warn!(target: "deeplink_schemes", "{warning}");
    }
}

/// Collects warnings for callers that want to inspect or re-emit them.
impl WarningSink for Vec<SchemeWarning> {
    fn warn(&mut self, warning: SchemeWarning) {
        self.push(warning);
    }
}

impl<S: WarningSink + ?Sized> WarningSink for &mut S {
    fn warn(&mut self, warning: SchemeWarning) {
        (**self).warn(warning);
    }
}
