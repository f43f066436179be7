//! `deeplink check` command.

use anyhow::Result;
use deeplink_schemes::SchemeResolver;
use serde_json::json;

use crate::opts::GlobalOpts;
use crate::output::print_success;

pub fn cmd_check(opts: &GlobalOpts) -> Result<()> {
    let sources = opts.load_sources()?;
    let resolver = SchemeResolver::new(&sources, opts.context());
    let context = resolver.context();

    let data = json!({
        "environment": context.environment,
        "platform": context.platform,
        "has_custom_scheme": resolver.has_custom_scheme(),
        "has_constants_manifest": resolver.has_constants_manifest(),
    });
    print_success(opts, data, Vec::new())
}
