//! CLI configuration.

use std::path::Path;

use anyhow::{Context, Result};
use jewel_catalog::search::SortOption;
use jewel_data::Section;
use serde::{Deserialize, Serialize};

/// Config file names, in lookup order.
pub const CONFIG_NAMES: [&str; 3] = ["jewel.toml", ".jewel.toml", "jewel.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// Where listings come from.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Listing output.
    #[serde(default)]
    pub output: OutputConfig,

    /// Diagnostics.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl CliConfig {
    /// Load config from a file. `.json` files are JSON, anything else TOML.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::parse(&content, is_json(path))
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    fn parse(content: &str, json: bool) -> Result<Self> {
        if json {
            Ok(serde_json::from_str(content)?)
        } else {
            Ok(toml::from_str(content)?)
        }
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "json")
}

/// Listing source configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Directory of `<section>.json` files, or a single listing file.
    #[serde(default = "default_data_path")]
    pub data_path: String,

    /// Section used when `--section` is omitted.
    #[serde(default = "default_section")]
    pub default_section: Section,

    /// Sort used when neither the query nor `--sort` picks one.
    #[serde(default)]
    pub default_sort: SortOption,

    /// Storefront origin prepended to shareable links.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_base_url: Option<String>,
}

fn default_data_path() -> String {
    "data".to_string()
}

fn default_section() -> Section {
    Section::NaturalDiamonds
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            data_path: default_data_path(),
            default_section: default_section(),
            default_sort: SortOption::default(),
            api_base_url: None,
        }
    }
}

/// Output configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Maximum rows printed by `list`.
    #[serde(default = "default_limit")]
    pub limit: usize,

    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

fn default_limit() -> usize {
    25
}

fn default_currency_symbol() -> String {
    "$".to_string()
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            limit: default_limit(),
            currency_symbol: default_currency_symbol(),
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Human,
    Json,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive, overridden by `RUST_LOG`.
    #[serde(default = "default_level")]
    pub level: String,

    #[serde(default)]
    pub format: LogFormat,
}

fn default_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: LogFormat::default(),
        }
    }
}

/// Generate a default jewel.toml config file.
pub fn generate_default_config() -> String {
    r#"# Storefront listing configuration

[catalog]
data_path = "data"
default_section = "natural-diamonds"
default_sort = "latest"
# api_base_url = "https://shop.example.com"

[output]
limit = 25
currency_symbol = "$"

[logging]
level = "warn"
format = "human"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_generated_config_parses_to_defaults() {
        let config = CliConfig::parse(&generate_default_config(), false).unwrap();
        assert_eq!(config.catalog.data_path, "data");
        assert_eq!(config.catalog.default_section, Section::NaturalDiamonds);
        assert_eq!(config.catalog.default_sort, SortOption::Latest);
        assert_eq!(config.output.limit, 25);
        assert_eq!(config.logging.format, LogFormat::Human);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config = CliConfig::parse(
            "[catalog]\ndefault_section = \"jewelry\"\ndefault_sort = \"price-desc\"\n",
            false,
        )
        .unwrap();
        assert_eq!(config.catalog.default_section, Section::Jewelry);
        assert_eq!(config.catalog.default_sort, SortOption::PriceDesc);
        assert_eq!(config.catalog.data_path, "data");
        assert_eq!(config.output.currency_symbol, "$");
    }

    #[test]
    fn test_load_json_by_extension() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("jewel.json");
        std::fs::write(&path, r#"{"output": {"limit": 5}, "logging": {"format": "json"}}"#)
            .unwrap();

        let config = CliConfig::load(&path).unwrap();
        assert_eq!(config.output.limit, 5);
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_invalid_section_is_rejected() {
        assert!(CliConfig::parse("[catalog]\ndefault_section = \"watches\"\n", false).is_err());
    }
}
