// Configuration loading for the taskboard shell

use crate::ids::IdScheme;
use crate::reorder::ReorderMode;
use eyre::{Context, Result, eyre};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{Level, debug, info};

/// Settings read from `config.yaml`; every field is optional
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct Config {
    /// How drag-and-drop writes back while a filter is active
    pub reorder_mode: ReorderMode,
    pub id_scheme: IdScheme,
    /// Coloured status badges and overdue dates
    pub color: bool,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            reorder_mode: ReorderMode::default(),
            id_scheme: IdScheme::default(),
            color: true,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// `$XDG_CONFIG_HOME/taskboard/config.yaml` or the platform equivalent
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("taskboard").join("config.yaml"))
    }

    /// Load from an explicit path; the file must exist
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content =
            fs::read_to_string(path).with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = Self::parse(&content).with_context(|| format!("Invalid config file {}", path.display()))?;

        info!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    /// Load from `path` if given, else from the default location if present,
    /// else fall back to defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::load_from(path);
        }

        match Self::default_path() {
            Some(default) if default.exists() => Self::load_from(default),
            _ => {
                debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// The configured `log_level` as a tracing level
    pub fn level(&self) -> Result<Level> {
        self.log_level.trim().parse::<Level>().map_err(|_| {
            eyre!(
                "Invalid log_level: {} (expected trace, debug, info, warn or error)",
                self.log_level
            )
        })
    }

    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).context("Failed to parse YAML config")
    }
}
