//! Print a refined listing.

use anyhow::{bail, Result};
use jewel_catalog::catalog::{resolve, Attribute, Product};
use jewel_catalog::search::{FilterKey, SortOption};
use jewel_data::{ListingSession, LoadStatus, Section};
use serde::Serialize;

use super::ListArgs;
use crate::context::Context;
use crate::output::{format_price, truncate};

#[derive(Serialize)]
struct ListingReport<'a> {
    section: Section,
    url: String,
    total: usize,
    products: &'a [Product],
}

/// Run the list command.
pub fn run(args: ListArgs, ctx: &Context) -> Result<()> {
    let section = ctx.section(args.section.as_deref())?;
    let source = ctx.source(args.data.as_deref());

    let mut session = ListingSession::from_url(section, &args.query);
    if let Some(sort) = args.sort.as_deref() {
        let sort: SortOption = sort.parse()?;
        session.set_filter(FilterKey::SortBy, sort.as_str());
    } else if !session.state().is_active(FilterKey::SortBy) {
        session.set_filter(FilterKey::SortBy, ctx.config.catalog.default_sort.as_str());
    }
    ctx.output.debug(&format!(
        "Loading {} from {}",
        section,
        source.file_for(section).display()
    ));

    session.reload(&source);
    if let LoadStatus::Failed(message) = session.status() {
        bail!("Failed to load {}: {}", section, message);
    }

    let limit = args.limit.unwrap_or(ctx.config.output.limit);
    let shown = &session.products()[..session.products().len().min(limit)];
    let url = ctx.link(session.url());

    if ctx.output.is_json() {
        ctx.output.json(&ListingReport {
            section,
            url,
            total: session.products().len(),
            products: shown,
        });
        return Ok(());
    }

    ctx.output.header(&format!(
        "{} ({} of {}, {})",
        section,
        shown.len(),
        session.products().len(),
        session.state().sort().display_name()
    ));
    if shown.is_empty() {
        ctx.output.warn("No products match these filters");
    } else {
        print_table(shown, section, ctx);
    }

    if session.products().len() > shown.len() {
        ctx.output.info(&format!(
            "{} more not shown (use --limit)",
            session.products().len() - shown.len()
        ));
    }
    ctx.output.kv("url", &url);

    Ok(())
}

const WIDTHS: [usize; 5] = [14, 32, 12, 7, 16];

fn print_table(products: &[Product], section: Section, ctx: &Context) {
    let kind_column = match section {
        Section::Jewelry => Attribute::Category,
        Section::NaturalDiamonds | Section::LabGrownDiamonds => Attribute::Shape,
    };
    let kind_heading = kind_column.as_str().to_uppercase();

    ctx.output
        .table_row(&["ID", "NAME", "PRICE", "CARAT", &kind_heading], &WIDTHS);

    let symbol = &ctx.config.output.currency_symbol;
    for product in products {
        let price = match product.price {
            Some(_) => format_price(product.price_value(), symbol),
            None => "-".to_string(),
        };
        let carat = match product.carat_value() {
            c if c > 0.0 => format!("{:.2}", c),
            _ => "-".to_string(),
        };
        let kind = resolve(product, kind_column)
            .map(|value| value.as_text().into_owned())
            .unwrap_or_default();

        ctx.output.table_row(
            &[
                &truncate(product.id.as_str(), WIDTHS[0]),
                &truncate(&product.name, WIDTHS[1]),
                &price,
                &carat,
                &truncate(&kind, WIDTHS[4]),
            ],
            &WIDTHS,
        );
    }
}
