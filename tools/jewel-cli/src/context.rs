//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use jewel_data::{JsonFileSource, Section};

use crate::config::{CliConfig, CONFIG_NAMES};
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// File the config was read from, if any.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from an explicit config file, or the nearest one above
    /// the working directory.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let config_path = match config_path {
            Some(path) => Some(PathBuf::from(path)),
            None => find_config(&cwd),
        };
        let config = match &config_path {
            Some(path) => CliConfig::load(path)?,
            None => CliConfig::default(),
        };

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
        })
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        if Path::new(path).is_absolute() {
            PathBuf::from(path)
        } else {
            self.cwd.join(path)
        }
    }

    /// The listing source, from `--data` or the configured path.
    pub fn source(&self, data: Option<&str>) -> JsonFileSource {
        let path = data.unwrap_or(&self.config.catalog.data_path);
        JsonFileSource::new(self.resolve_path(path))
    }

    /// The section named on the command line, or the configured default.
    pub fn section(&self, section: Option<&str>) -> Result<Section> {
        match section {
            Some(name) => name.parse().map_err(anyhow::Error::msg),
            None => Ok(self.config.catalog.default_section),
        }
    }

    /// A storefront link, absolute when a base URL is configured.
    pub fn link(&self, path_and_query: &str) -> String {
        match &self.config.catalog.api_base_url {
            Some(base) => format!("{}{}", base.trim_end_matches('/'), path_and_query),
            None => path_and_query.to_string(),
        }
    }
}

/// Find the nearest config file in the directory tree.
fn find_config(start: &Path) -> Option<PathBuf> {
    start.ancestors().find_map(|dir| {
        CONFIG_NAMES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.exists())
    })
}
