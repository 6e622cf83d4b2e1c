// src/config.rs

use std::{env, fmt, str::FromStr};

use dotenvy::dotenv;

use crate::models::discovery::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE, PageLimits};

#[derive(Debug, Clone)]
pub struct Config {
    pub jwt_secret: String,
    /// JSON quiz catalog to load at startup. Falls back to the bundled sample.
    pub catalog_path: Option<String>,
    pub default_page_size: usize,
    pub max_page_size: usize,
    pub port: u16,
    pub rust_log: String,
}

#[derive(Debug)]
pub enum ConfigError {
    Missing(&'static str),
    Invalid { key: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Missing(key) => write!(f, "{} must be set", key),
            ConfigError::Invalid { key, value } => write!(f, "{} has invalid value '{}'", key, value),
        }
    }
}

impl std::error::Error for ConfigError {}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv().ok();

        let jwt_secret = env::var("JWT_SECRET").map_err(|_| ConfigError::Missing("JWT_SECRET"))?;

        let catalog_path = env::var("CATALOG_PATH").ok().filter(|p| !p.trim().is_empty());

        let rust_log = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            jwt_secret,
            catalog_path,
            default_page_size: parse_or("DEFAULT_PAGE_SIZE", DEFAULT_PAGE_SIZE)?,
            max_page_size: parse_or("MAX_PAGE_SIZE", MAX_PAGE_SIZE)?,
            port: parse_or("PORT", 3000)?,
            rust_log,
        })
    }

    pub fn page_limits(&self) -> PageLimits {
        PageLimits {
            default: self.default_page_size.max(1),
            max: self.max_page_size.max(1),
        }
    }
}

fn parse_or<T: FromStr>(key: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(key) {
        Ok(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value }),
        Err(_) => Ok(default),
    }
}
