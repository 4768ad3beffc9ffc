use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{ClassifyError, Result};

/// File name looked up in the current directory.
pub const LOCAL_CONFIG_FILE: &str = "ticketclassify.toml";

/// File name looked up in the user config directory.
pub const USER_CONFIG_FILE: &str = ".ticketclassify.toml";

/// Represents the complete configuration for ticket-classify.
///
/// Contains options for how messages are read and how results are shown.
/// Classification itself is not configurable.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub input: InputConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

fn default_true() -> bool {
    true
}

/// Configuration for turning raw input into message lines.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct InputConfig {
    /// Classify only the first line of a multi-line message argument
    #[serde(default = "default_true")]
    pub first_line_only: bool,

    /// Drop messages that are blank after trimming
    #[serde(default = "default_true")]
    pub skip_empty: bool,

    /// Strip surrounding whitespace before classification
    #[serde(default = "default_true")]
    pub trim: bool,
}

impl Default for InputConfig {
    fn default() -> Self {
        InputConfig {
            first_line_only: true,
            skip_empty: true,
            trim: true,
        }
    }
}

/// Configuration for rendering results.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct OutputConfig {
    #[serde(default)]
    pub all_tickets: bool,

    #[serde(default)]
    pub summary: bool,

    #[serde(default = "default_true")]
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            all_tickets: false,
            summary: false,
            color: true,
        }
    }
}

/// Finds the configuration file to load, if any.
///
/// Lookup order:
/// 1. Custom path provided as parameter
/// 2. `ticketclassify.toml` in current directory
/// 3. `.ticketclassify.toml` in user config directory
pub fn locate_config(config_path: Option<&str>) -> Option<PathBuf> {
    if let Some(path) = config_path {
        return Some(PathBuf::from(path));
    }

    let local = Path::new(".").join(LOCAL_CONFIG_FILE);
    if local.exists() {
        return Some(local);
    }

    dirs::config_dir()
        .map(|dir| dir.join(USER_CONFIG_FILE))
        .filter(|path| path.exists())
}

/// Loads configuration from file or returns defaults.
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err(Config)` - If the file cannot be read
/// * `Err(Parse)` - If the file is not valid configuration TOML
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let Some(path) = locate_config(config_path) else {
        debug!("no config file found, using defaults");
        return Ok(Config::default());
    };

    debug!(path = %path.display(), "loading config");
    let config_str = fs::read_to_string(&path)
        .map_err(|e| ClassifyError::config(format!("cannot read {}: {e}", path.display())))?;
    parse_config(&config_str)
}

/// Parses configuration from TOML text.
pub fn parse_config(config_str: &str) -> Result<Config> {
    Ok(toml::from_str(config_str)?)
}
