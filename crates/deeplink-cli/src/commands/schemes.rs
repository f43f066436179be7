//! `deeplink schemes` command.

use anyhow::Result;
use deeplink_schemes::SchemeResolver;
use serde_json::json;

use crate::opts::GlobalOpts;
use crate::output::print_success;

pub fn cmd_schemes(opts: &GlobalOpts) -> Result<()> {
    let sources = opts.load_sources()?;
    let resolver = SchemeResolver::new(&sources, opts.context());

    let schemes = resolver.collect_manifest_schemes();
    let mut data = json!({ "schemes": schemes });
    if let Some(id) = resolver.native_app_id() {
        data["native_app_id"] = json!(id);
    }
    print_success(opts, data, Vec::new())
}
