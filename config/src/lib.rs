//! Configuration for unistyle.
//!
//! Loads `config.toml` with priority: CLI `--config` override > discovered
//! `<config_dir>/unistyle/config.toml` > the embedded defaults.
//!
//! # Testing
//!
//! Tests use [`Config::load()`] with explicit paths to temporary directories.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use unistyle_style::{Precedence, Rank};

/// Global configuration, loaded from `config.toml`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Which substitution styles win when a combination has no glyphs,
    /// highest first.
    ///
    /// Defaults to `code, double, fraktur, script, bold-italic`.
    pub fallback_order: Vec<Rank>,

    pub insertion: InsertionConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InsertionConfig {
    /// Leave whitespace unstyled when styling inserted text.
    pub skip_whitespace: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fallback_order: Precedence::default().order().to_vec(),
            insertion: InsertionConfig::default(),
        }
    }
}

impl Default for InsertionConfig {
    fn default() -> Self {
        Self {
            skip_whitespace: true,
        }
    }
}

impl Config {
    /// Read, deserialize and validate a TOML config file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        config
            .precedence()
            .with_context(|| format!("Invalid config file: {}", path.display()))?;

        tracing::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Load configuration with priority: CLI override > discovered path > defaults.
    pub fn load_with_overrides(
        cli_override: Option<&Path>,
        discovered_path: Option<&Path>,
    ) -> Result<Self> {
        if let Some(path) = cli_override {
            return Self::load(path);
        }
        if let Some(path) = discovered_path {
            return Self::load(path);
        }
        Self::load_embedded()
    }

    fn load_embedded() -> Result<Self> {
        let source = include_str!("../../config.toml");
        toml::from_str(source).context("Failed to parse embedded config.toml")
    }

    /// The user's `config.toml`, if one exists.
    pub fn discover() -> Option<PathBuf> {
        let path = dirs::config_dir()?.join("unistyle").join("config.toml");
        path.is_file().then_some(path)
    }

    /// The fallback order as a validated [`Precedence`].
    pub fn precedence(&self) -> Result<Precedence> {
        Precedence::new(&self.fallback_order).context("Invalid fallback_order")
    }
}
