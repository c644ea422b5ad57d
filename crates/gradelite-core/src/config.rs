//! Global configuration for gradelite (stored in ~/.config/gradelite/config.toml)

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{GradeliteError, Result};

const CONFIG_DIR: &str = "gradelite";
const CONFIG_FILE: &str = "config.toml";
pub const CONFIG_DIR_ENV_VAR: &str = "GRADELITE_CONFIG_DIR";

/// GPA at or above which a result counts as a distinction
pub const DEFAULT_DISTINCTION_THRESHOLD: f64 = 9.0;

/// Decimal places used when printing a GPA for humans
pub const DEFAULT_PRECISION: usize = 2;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Decimal places for human-readable GPA output
    #[serde(default = "default_precision")]
    pub precision: usize,

    /// GPA threshold for the distinction message
    #[serde(default = "default_distinction_threshold")]
    pub distinction_threshold: f64,
}

fn default_precision() -> usize {
    DEFAULT_PRECISION
}

fn default_distinction_threshold() -> f64 {
    DEFAULT_DISTINCTION_THRESHOLD
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            distinction_threshold: DEFAULT_DISTINCTION_THRESHOLD,
        }
    }
}

impl GlobalConfig {
    fn config_path() -> Result<PathBuf> {
        // Allow environment variable override for testing
        let config_dir = if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
            PathBuf::from(env_dir)
        } else {
            dirs::config_dir()
                .ok_or_else(|| {
                    GradeliteError::Other("unable to determine config directory".to_string())
                })?
                .join(CONFIG_DIR)
        };

        Ok(config_dir.join(CONFIG_FILE))
    }

    /// Load the global config, falling back to defaults when no file exists
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| {
            GradeliteError::failed(&format!("read config from {}", path.display()), e)
        })?;

        let config: GlobalConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if !self.distinction_threshold.is_finite() || self.distinction_threshold < 0.0 {
            crate::bail_invalid!("distinction_threshold", self.distinction_threshold);
        }
        if self.precision > 6 {
            crate::bail_invalid!("precision (0-6)", self.precision);
        }
        Ok(())
    }
}
