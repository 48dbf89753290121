//! Configuration module for the descent driver.
//!
//! This module handles loading, saving, and validating `descent.toml`.

use dirs::{config_dir, home_dir};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use descent_par::{ParseLimits, DEFAULT_MAX_DEPTH};

use crate::error::{DriverError, Result};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "descent.toml";

/// Application configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Config {
    /// Global verbose setting.
    #[serde(default)]
    pub verbose: bool,

    /// Parser limits shared by both grammars.
    #[serde(default)]
    pub parser: ParserConfig,

    /// Calculator session text and options.
    #[serde(default)]
    pub calculator: CalculatorConfig,
}

/// Parser configuration options.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ParserConfig {
    /// Maximum recursion depth for either grammar.
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
}

/// Calculator configuration options.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CalculatorConfig {
    /// Printed once when the session starts.
    #[serde(default = "default_banner")]
    pub banner: String,

    /// Printed when input ends.
    #[serde(default = "default_farewell")]
    pub farewell: String,

    /// Printed, without a newline, before every read.
    #[serde(default = "default_prompt")]
    pub prompt: String,

    /// Echo the parsed formula before its value.
    #[serde(default)]
    pub show_tree: bool,
}

fn default_max_depth() -> usize {
    DEFAULT_MAX_DEPTH
}

fn default_banner() -> String {
    "Welcome use our calculator!".to_string()
}

fn default_farewell() -> String {
    "ByeBye~".to_string()
}

fn default_prompt() -> String {
    "> ".to_string()
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_depth: default_max_depth(),
        }
    }
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            banner: default_banner(),
            farewell: default_farewell(),
            prompt: default_prompt(),
            show_tree: false,
        }
    }
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Searches for configuration in the following order:
    /// 1. Current directory
    /// 2. `~/.config/descent/`
    /// 3. System configuration directory
    ///
    /// Returns the default configuration if no config file is found.
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path, which must exist.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(DriverError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a specific path.
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Reject settings no session can run with.
    pub fn validate(&self) -> Result<()> {
        if self.parser.max_depth == 0 {
            return Err(DriverError::Config(
                "parser.max_depth must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Parser limits derived from this configuration.
    pub fn limits(&self) -> ParseLimits {
        ParseLimits::new(self.parser.max_depth)
    }

    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    fn check_home_config() -> Option<PathBuf> {
        home_dir()
            .map(|dir| dir.join(".config").join("descent").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    fn check_system_config() -> Option<PathBuf> {
        config_dir()
            .map(|dir| dir.join("descent").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    fn find_config_file() -> Option<PathBuf> {
        Self::check_current_dir_config()
            .or_else(Self::check_home_config)
            .or_else(Self::check_system_config)
    }
}

/// Writes the default configuration into `dir` and returns the file path.
///
/// Refuses to replace an existing file unless `force` is set.
pub fn write_default_config(dir: &Path, force: bool) -> Result<PathBuf> {
    let path = dir.join(CONFIG_FILE_NAME);
    if path.exists() && !force {
        return Err(DriverError::AlreadyExists(path));
    }
    Config::default().save_to_path(&path)?;
    Ok(path)
}
