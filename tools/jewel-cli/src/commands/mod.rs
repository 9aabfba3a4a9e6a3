//! CLI command implementations.

pub mod config;
pub mod facets;
pub mod list;
pub mod url;

use clap::{Args, Subcommand};

/// Arguments for the list command.
#[derive(Args)]
pub struct ListArgs {
    /// Section to list (natural-diamonds, lab-grown-diamonds, jewelry).
    #[arg(short, long)]
    pub section: Option<String>,

    /// Listing file or directory (default: catalog.data_path).
    #[arg(short, long)]
    pub data: Option<String>,

    /// Filters as a listing query string, e.g. "shape=round&price=1000-3000".
    #[arg(short, long, default_value = "")]
    pub query: String,

    /// Sort order, overriding the query.
    #[arg(long)]
    pub sort: Option<String>,

    /// Show at most N products.
    #[arg(short, long)]
    pub limit: Option<usize>,
}

/// Arguments for the url command.
#[derive(Args)]
pub struct UrlArgs {
    /// Query string or full listing URL.
    pub query: String,

    /// Section whose route the canonical link uses.
    #[arg(short, long)]
    pub section: Option<String>,
}

/// Arguments for the facets command.
#[derive(Args)]
pub struct FacetsArgs {
    /// Section to summarize.
    #[arg(short, long)]
    pub section: Option<String>,

    /// Listing file or directory (default: catalog.data_path).
    #[arg(short, long)]
    pub data: Option<String>,

    /// Filters as a listing query string; counts cover the filtered listing.
    #[arg(short, long, default_value = "")]
    pub query: String,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Get a config value.
    Get {
        /// Config key (dot-separated).
        key: String,
    },
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
}
