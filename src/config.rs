//! Application configuration management.
//!
//! Settings are merged from three layers, later layers winning:
//!
//! 1. Built-in defaults
//! 2. A TOML file (`<config_dir>/xmldupe/config.toml`, or `--config <PATH>`)
//! 3. `XMLDUPE_*` environment variables (nested keys use `__`)
//!
//! CLI flags such as `--output` are applied on top by the caller.
//!
//! ```toml
//! default_threshold = 1
//! output = "text"
//!
//! [class_thresholds]
//! DistanceSensor = 3
//! ConveyorGroup = 3
//! ```
//!
//! Environment keys are lowercased by figment, so class thresholds should be
//! set in the file where class names keep their case.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::Result;
use directories::ProjectDirs;
use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::cli::OutputFormat;
use crate::duplicates::rules::{ThresholdRules, DEFAULT_THRESHOLD};

/// Prefix for environment overrides.
pub const ENV_PREFIX: &str = "XMLDUPE_";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Threshold for classes without an explicit entry.
    pub default_threshold: usize,
    /// Per-class thresholds, keyed by exact `classname`.
    pub class_thresholds: BTreeMap<String, usize>,
    /// Output format used when `--output` is not given.
    pub output: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        let rules = ThresholdRules::default();
        Self {
            default_threshold: DEFAULT_THRESHOLD,
            class_thresholds: rules.classes().clone(),
            output: OutputFormat::Text,
        }
    }
}

impl Config {
    /// Load the configuration from the default platform-specific path.
    ///
    /// Falls back to defaults (with a debug log) if anything goes wrong.
    pub fn load() -> Self {
        match Self::config_path() {
            Ok(path) => Self::load_from_path(path),
            Err(e) => {
                log::debug!("Failed to locate config directory, using defaults: {}", e);
                Self::default()
            }
        }
    }

    /// Load the configuration from an explicit file, falling back to defaults.
    pub fn load_from_path(path: impl AsRef<Path>) -> Self {
        match Self::try_load_from_path(path) {
            Ok(config) => config,
            Err(e) => {
                log::debug!("Failed to load config, using defaults: {}", e);
                Self::default()
            }
        }
    }

    /// Load the configuration from an explicit file, reporting errors.
    ///
    /// A missing file is not an error; the other layers still apply.
    ///
    /// # Errors
    ///
    /// Returns an error if the file or an environment value cannot be parsed.
    pub fn try_load_from_path(path: impl AsRef<Path>) -> Result<Self, figment::Error> {
        Self::figment(path.as_ref()).extract()
    }

    fn figment(path: &Path) -> Figment {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file(path))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Threshold table built from this configuration.
    #[must_use]
    pub fn rules(&self) -> ThresholdRules {
        ThresholdRules::from_parts(self.default_threshold, self.class_thresholds.clone())
    }

    /// Get the default platform-specific configuration path.
    pub fn config_path() -> Result<PathBuf> {
        let project_dirs = ProjectDirs::from("com", "xmldupe", "xmldupe")
            .ok_or_else(|| anyhow::anyhow!("Failed to determine project directories"))?;
        Ok(project_dirs.config_dir().join("config.toml"))
    }
}
