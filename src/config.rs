//! Packaging configuration.
//!
//! Handles loading, validating, and merging `config.toml`. Stock defaults are
//! overridden by an optional `config.toml` in the draft directory; command
//! line flags override both.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [article]
//! format = "html"            # Body file variant: "html" or "markdown"
//! install_root = "/articles" # Repository directory named in README.txt
//!
//! [markdown]
//! tables = true              # GitHub-style pipe tables
//! strikethrough = true       # ~~deleted~~ text
//! tasklists = true           # - [x] checkboxes
//! footnotes = false          # [^1] references
//! ```
//!
//! Config files are sparse: override only the values you care about.
//! Unknown keys are rejected to catch typos early.

use crate::types::BodyFormat;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Packaging configuration loaded from `config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PackConfig {
    /// Archive layout settings.
    pub article: ArticleConfig,
    /// Markdown extensions used when rendering the HTML body.
    pub markdown: MarkdownConfig,
}

impl PackConfig {
    /// Validate config values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let root = &self.article.install_root;
        if !root.starts_with('/') {
            return Err(ConfigError::Validation(
                "article.install_root must start with '/'".into(),
            ));
        }
        if root.len() > 1 && root.ends_with('/') {
            return Err(ConfigError::Validation(
                "article.install_root must not end with '/'".into(),
            ));
        }
        Ok(())
    }
}

/// Archive layout settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ArticleConfig {
    /// Body variant written into the archive.
    pub format: BodyFormat,
    /// Directory in the target repository that holds article folders.
    pub install_root: String,
}

impl Default for ArticleConfig {
    fn default() -> Self {
        Self {
            format: BodyFormat::Html,
            install_root: "/articles".to_string(),
        }
    }
}

/// CommonMark extensions for the HTML body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MarkdownConfig {
    pub tables: bool,
    pub strikethrough: bool,
    pub tasklists: bool,
    pub footnotes: bool,
}

impl Default for MarkdownConfig {
    fn default() -> Self {
        Self {
            tables: true,
            strikethrough: true,
            tasklists: true,
            footnotes: false,
        }
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> Result<toml::Value, ConfigError> {
    toml::Value::try_from(PackConfig::default())
        .map_err(|e| ConfigError::Validation(format!("stock defaults do not serialize: {e}")))
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load a `config.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if no `config.toml` exists in the directory.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = path.join("config.toml");
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<PackConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: PackConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `config.toml` in the given directory, on top of stock defaults.
pub fn load_config(root: &Path) -> Result<PackConfig, ConfigError> {
    let base = stock_defaults_value()?;
    let overlay = load_raw_config(root)?;
    resolve_config(base, overlay)
}

/// Returns a fully-commented stock `config.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Article Pack Configuration
# ==========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
#
# Place this file next to article.toml in the draft directory.
# Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Archive layout
# ---------------------------------------------------------------------------
[article]
# Body file variant:
#   "html"     -> article.html, a standalone page with the rendered body
#   "markdown" -> article.md, the markdown source as written
format = "html"

# Directory in your repository where article folders live.
# README.txt inside the archive tells you to unzip into this directory.
install_root = "/articles"

# ---------------------------------------------------------------------------
# Markdown extensions (html format only)
# ---------------------------------------------------------------------------
[markdown]
tables = true
strikethrough = true
tasklists = true
footnotes = false
"##
}
