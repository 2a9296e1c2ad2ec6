use std::{fmt, path::Path};

use serde::{Deserialize, Serialize};

/// Name of the site configuration file expected at the project root.
pub const CONFIG_FILE: &str = "scribe.toml";

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parsing(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parsing(e) => write!(f, "TOML parse error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        ConfigError::Io(value)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(value: toml::de::Error) -> Self {
        ConfigError::Parsing(value)
    }
}

#[derive(Deserialize, Serialize, Debug, Default, Clone)]
pub struct Config {
    pub content: Option<ContentConfig>,
    pub sessions: Option<SessionsConfig>,
}

impl Config {
    pub fn read<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let data = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&data)?;

        Ok(config)
    }
}

/// Subdirectory names holding JSON content records, relative to the
/// project root.
#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(default)]
pub struct ContentConfig {
    pub discussions: String,
    pub brainstorms: String,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            discussions: "discussions".to_string(),
            brainstorms: "brainstorms".to_string(),
        }
    }
}

/// Session log layout: a root directory with one subdirectory per agent
/// kind. Primary logs are named `<letter>-<date>.md`, secondary logs
/// `<date>.md`.
#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(default)]
pub struct SessionsConfig {
    pub dir: String,
    pub primary: String,
    pub secondary: String,
}

impl Default for SessionsConfig {
    fn default() -> Self {
        Self {
            dir: "docs/sessions".to_string(),
            primary: "primary".to_string(),
            secondary: "secondary".to_string(),
        }
    }
}
