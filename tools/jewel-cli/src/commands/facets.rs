//! Facet counts for a listing.

use anyhow::{bail, Result};
use jewel_catalog::search::{FacetSummary, RangePreset};
use jewel_data::{ListingSession, LoadStatus};

use super::FacetsArgs;
use crate::context::Context;

/// Run the facets command.
pub fn run(args: FacetsArgs, ctx: &Context) -> Result<()> {
    let section = ctx.section(args.section.as_deref())?;
    let source = ctx.source(args.data.as_deref());

    let mut session = ListingSession::from_url(section, &args.query);
    session.reload(&source);
    if let LoadStatus::Failed(message) = session.status() {
        bail!("Failed to load {}: {}", section, message);
    }

    let summary =
        FacetSummary::from_products(session.products(), session.state(), section.filter_keys());

    if ctx.output.is_json() {
        ctx.output.json(&summary);
        return Ok(());
    }

    for facet in &summary.facets {
        if facet.values.is_empty() {
            continue;
        }
        ctx.output.header(&facet.name);
        for value in &facet.values {
            ctx.output
                .list_item(&entry(&value.value, value.count, value.selected));
        }
    }
    print_presets("Carat", &summary.carat, ctx);
    print_presets("Price", &summary.price, ctx);

    ctx.output.info("");
    ctx.output.info(&format!(
        "{} product(s) match {}",
        session.products().len(),
        session.url()
    ));

    Ok(())
}

fn print_presets(title: &str, presets: &[RangePreset], ctx: &Context) {
    ctx.output.header(title);
    for preset in presets {
        ctx.output
            .list_item(&entry(&preset.label, preset.count, preset.selected));
    }
}

fn entry(label: &str, count: usize, selected: bool) -> String {
    let marker = if selected { " *" } else { "" };
    format!("{} ({}){}", label, count, marker)
}
