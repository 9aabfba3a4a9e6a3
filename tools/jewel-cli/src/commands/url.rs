//! Normalize a listing link.

use anyhow::Result;
use jewel_catalog::search::FilterState;
use jewel_catalog::url::{from_query_string, listing_url, param_name, to_query_string};
use serde::Serialize;

use super::UrlArgs;
use crate::context::Context;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct UrlReport {
    filters: FilterState,
    query: String,
    url: String,
}

/// Run the url command.
pub fn run(args: UrlArgs, ctx: &Context) -> Result<()> {
    let section = ctx.section(args.section.as_deref())?;
    let state = from_query_string(&args.query);
    let query = to_query_string(&state);
    let url = ctx.link(&listing_url(section.route(), &state));

    if ctx.output.is_json() {
        ctx.output.json(&UrlReport {
            filters: state,
            query,
            url,
        });
        return Ok(());
    }

    ctx.output.header("Filters");
    if state.is_empty() {
        ctx.output.info("No active filters");
    }
    for (key, value) in state.active() {
        ctx.output
            .kv(&format!("{} ({})", key.label(), param_name(key)), value);
    }

    ctx.output.header("Canonical");
    ctx.output.kv("query", &query);
    ctx.output.kv("url", &url);

    Ok(())
}
