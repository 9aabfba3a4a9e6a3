//! Jewel CLI - Command line tool for exploring storefront listings.
//!
//! Commands:
//! - `jewel list` - Filter and sort a section's products
//! - `jewel url` - Normalize a listing query string
//! - `jewel facets` - Show facet counts for a listing
//! - `jewel config` - Manage configuration

mod commands;
mod config;
mod context;
mod logging;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{ConfigArgs, FacetsArgs, ListArgs, UrlArgs};

/// Jewel CLI - Explore storefront listings offline
#[derive(Parser)]
#[command(name = "jewel")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Filter and sort a section's products
    List(ListArgs),

    /// Parse a listing query string and print its canonical form
    Url(UrlArgs),

    /// Show facet counts and range buckets for a listing
    Facets(FacetsArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let ctx = match context::Context::load(cli.config.as_deref(), output.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };
    logging::init(&ctx.config.logging, ctx.output.is_verbose());
    tracing::debug!(config = ?ctx.config_path, cwd = %ctx.cwd.display(), "context loaded");

    // Execute command
    let result = match cli.command {
        Commands::List(args) => commands::list::run(args, &ctx),
        Commands::Url(args) => commands::url::run(args, &ctx),
        Commands::Facets(args) => commands::facets::run(args, &ctx),
        Commands::Config(args) => commands::config::run(args, &ctx),
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
