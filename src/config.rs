//! TOML configuration.
//!
//! Looked up at `$XDG_CONFIG_HOME/keycalc/config.toml` (or the platform
//! equivalent) unless a path is given explicitly. Every field has a default,
//! so a missing file or a partial file is fine.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::calculator::DEFAULT_MIN_MAGNITUDE;
use crate::error::{CalcError, Result};

/// Settings that change how the calculator core displays values.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct CalculatorConfig {
    /// Message shown while in the error state.
    pub error_message: String,
    /// Non-zero magnitudes below this are shown in exponential form.
    pub min_magnitude: f64,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            error_message: "Error".to_string(),
            min_magnitude: DEFAULT_MIN_MAGNITUDE,
        }
    }
}

/// Settings for the terminal front end.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct ReplConfig {
    pub prompt: String,
    /// Prefix the display with the pending operator glyph.
    pub show_operator: bool,
    /// Print the display after every token instead of once per line.
    pub echo_tokens: bool,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            prompt: "> ".to_string(),
            show_operator: true,
            echo_tokens: false,
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub calculator: CalculatorConfig,
    pub repl: ReplConfig,
}

impl Config {
    /// Default location of the config file, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("keycalc").join("config.toml"))
    }

    /// Load configuration.
    ///
    /// An explicit `path` must exist. Without one, the default location is
    /// tried and defaults are used when nothing is there.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => match Self::default_path() {
                Some(path) if path.exists() => path,
                _ => {
                    tracing::debug!("no config file found, using defaults");
                    return Ok(Self::default());
                }
            },
        };

        let contents = std::fs::read_to_string(&path).map_err(|source| CalcError::ConfigRead {
            path: path.clone(),
            source,
        })?;
        let config = Self::parse(&contents, &path)?;
        tracing::info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    fn parse(contents: &str, path: &Path) -> Result<Self> {
        toml::from_str(contents).map_err(|source| CalcError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }
}
