//! Configuration file loading for automigrate.
//!
//! Discovers and loads `automigrate.toml` from the project root. CLI flags
//! take precedence over config file settings.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use fs_err as fs;
use serde::Deserialize;
use tracing::debug;

/// The config file name to search for.
pub const CONFIG_FILE_NAME: &str = "automigrate.toml";

/// Top-level configuration from automigrate.toml.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AutomigrateConfig {
    /// Output settings.
    pub output: OutputConfig,
}

/// Output section of the config.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Whether to render ANSI colors.
    pub color: bool,

    /// Log file path shown in the summary, overriding the run artifact.
    pub log_file: Option<String>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: true,
            log_file: None,
        }
    }
}

/// Discover the automigrate.toml config file.
///
/// Returns `None` if no config file is found in the project root.
pub fn discover_config(project_root: &Utf8Path) -> Option<Utf8PathBuf> {
    let config_path = project_root.join(CONFIG_FILE_NAME);
    if config_path.exists() {
        debug!("found config file at {}", config_path);
        Some(config_path)
    } else {
        debug!("no config file found at {}", config_path);
        None
    }
}

/// Load and parse an automigrate.toml config file.
pub fn load_config(path: &Utf8Path) -> anyhow::Result<AutomigrateConfig> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("read config file {}", path))?;
    parse_config(&contents).with_context(|| format!("parse config file {}", path))
}

/// Parse a config file from a string.
pub fn parse_config(contents: &str) -> anyhow::Result<AutomigrateConfig> {
    let config: AutomigrateConfig = toml::from_str(contents).context("invalid TOML")?;
    Ok(config)
}

/// Load config from the project root, or return default if not found.
pub fn load_or_default(project_root: &Utf8Path) -> anyhow::Result<AutomigrateConfig> {
    match discover_config(project_root) {
        Some(path) => load_config(&path),
        None => Ok(AutomigrateConfig::default()),
    }
}
