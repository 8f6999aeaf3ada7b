use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("yaml error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid table name: {0:?}")]
    InvalidTable(String),
    #[error("invalid temp_prefix: {0:?} must not contain a path separator")]
    InvalidTempPrefix(String),
    #[error("invalid {name}: have={value} want>0")]
    InvalidWidth { name: &'static str, value: usize },
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    /// Table read by the places query. Spliced into SQL, so it must be a bare
    /// identifier.
    pub table: String,
    pub temp_prefix: String,
    pub temp_dir: Option<PathBuf>,
    pub numeric_width: usize,
    pub text_width: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            table: "moz_places".to_string(),
            temp_prefix: "ffhist".to_string(),
            temp_dir: None,
            numeric_width: 10,
            text_width: 40,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !is_identifier(&self.table) {
            return Err(ConfigError::InvalidTable(self.table.clone()));
        }
        if self.temp_prefix.chars().any(|c| c == '/' || std::path::is_separator(c)) {
            return Err(ConfigError::InvalidTempPrefix(self.temp_prefix.clone()));
        }
        if self.numeric_width == 0 {
            return Err(ConfigError::InvalidWidth {
                name: "numeric_width",
                value: self.numeric_width,
            });
        }
        if self.text_width == 0 {
            return Err(ConfigError::InvalidWidth {
                name: "text_width",
                value: self.text_width,
            });
        }
        Ok(())
    }
}

pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    let bytes: Vec<u8> = if let Some(p) = path {
        std::fs::read(p)?
    } else {
        include_bytes!("../config/default.yml").to_vec()
    };

    let config: Config = serde_yaml::from_slice(&bytes)?;
    config.validate()?;
    Ok(config)
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
