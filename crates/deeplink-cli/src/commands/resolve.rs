//! `deeplink resolve` command.

use anyhow::Result;
use clap::Args;
use deeplink_schemes::{ResolveProps, SchemeResolver, SchemeWarning};
use serde_json::json;

use crate::opts::GlobalOpts;
use crate::output::print_success;

#[derive(Args, Debug)]
pub struct ResolveArgs {
    /// Scheme requested by the caller
    #[arg(long)]
    pub scheme: Option<String>,

    /// Suppress resolver warnings (errors are still reported)
    #[arg(long)]
    pub silent: bool,
}

pub fn cmd_resolve(opts: &GlobalOpts, args: &ResolveArgs) -> Result<()> {
    let sources = opts.load_sources()?;
    let resolver = SchemeResolver::new(&sources, opts.context());
    let props = ResolveProps {
        scheme: args.scheme.clone(),
        is_silent: args.silent,
    };

    let mut warnings: Vec<SchemeWarning> = Vec::new();
    let scheme = resolver.resolve_scheme_with(&props, &mut warnings)?;
    tracing::debug!(%scheme, warnings = warnings.len(), "resolved scheme");

    let warnings = warnings.iter().map(ToString::to_string).collect();
    if opts.json || opts.pretty {
        print_success(opts, json!({ "scheme": scheme }), warnings)
    } else {
        print_success(opts, json!(scheme), warnings)
    }
}
