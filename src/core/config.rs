// src/core/config.rs
use std::env;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::str::FromStr;

use log::LevelFilter;
use thiserror::Error;

use crate::store::DEFAULT_CREDENTIALS_FILE;
use crate::strength::{self, StrengthPolicy};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid value for {key}: '{value}'")]
    InvalidValue { key: &'static str, value: String },

    #[error("Invalid password length bounds: min {min}, default {default}, max {max}")]
    InvalidLengthBounds { min: usize, default: usize, max: usize },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

// Configuration for the login tool
#[derive(Debug, Clone)]
pub struct Config {
    // Storage
    pub credentials_file: PathBuf,

    // Strength checking
    pub common_passwords_file: Option<PathBuf>,

    // Password Generation
    pub default_password_length: usize,
    pub min_password_length: usize,
    pub max_password_length: usize,

    // Logging
    pub log_level: LevelFilter,
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            credentials_file: PathBuf::from(DEFAULT_CREDENTIALS_FILE),
            common_passwords_file: None,

            default_password_length: 12,
            min_password_length: 8,
            max_password_length: 20,

            log_level: LevelFilter::Info,
            log_file: None,
        }
    }
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(file) = lookup("CREDENTIALS_FILE") {
            config.credentials_file = PathBuf::from(file);
        }

        if let Some(file) = lookup("COMMON_PASSWORDS_FILE") {
            config.common_passwords_file = Some(PathBuf::from(file));
        }

        if let Some(val) = lookup("DEFAULT_PASSWORD_LENGTH") {
            config.default_password_length = parse_value("DEFAULT_PASSWORD_LENGTH", &val)?;
        }

        if let Some(val) = lookup("MIN_PASSWORD_LENGTH") {
            config.min_password_length = parse_value("MIN_PASSWORD_LENGTH", &val)?;
        }

        if let Some(val) = lookup("MAX_PASSWORD_LENGTH") {
            config.max_password_length = parse_value("MAX_PASSWORD_LENGTH", &val)?;
        }

        if let Some(level) = lookup("LOG_LEVEL") {
            config.log_level = match level.to_lowercase().as_str() {
                "off" => LevelFilter::Off,
                "error" => LevelFilter::Error,
                "warn" => LevelFilter::Warn,
                "info" => LevelFilter::Info,
                "debug" => LevelFilter::Debug,
                "trace" => LevelFilter::Trace,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        key: "LOG_LEVEL",
                        value: level,
                    })
                }
            };
        }

        if let Some(file) = lookup("LOG_FILE") {
            config.log_file = Some(PathBuf::from(file));
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let (min, default, max) = (
            self.min_password_length,
            self.default_password_length,
            self.max_password_length,
        );
        if min == 0 || min > default || default > max {
            return Err(ConfigError::InvalidLengthBounds { min, default, max });
        }
        Ok(())
    }

    pub fn length_in_bounds(&self, length: usize) -> bool {
        (self.min_password_length..=self.max_password_length).contains(&length)
    }

    // Build the scoring policy, merging any extra deny-list file into the defaults
    pub fn strength_policy(&self) -> Result<StrengthPolicy> {
        let policy = StrengthPolicy::default();
        let Some(path) = &self.common_passwords_file else {
            return Ok(policy);
        };

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;
        let extra = strength::parse_deny_list(&content);
        log::debug!("Loaded {} extra common password(s) from {}", extra.len(), path.display());
        Ok(policy.with_denied(extra))
    }
}

fn parse_value<T: FromStr>(key: &'static str, value: &str) -> Result<T> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key,
        value: value.to_string(),
    })
}
