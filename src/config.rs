use thiserror::Error;
use tracing::{info, warn};

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";
pub const DEFAULT_PAGE_SIZE: usize = 10;

const BASE_URL_VAR: &str = "SYLLABUS_API_BASE_URL";
const PAGE_SIZE_VAR: &str = "SYLLABUS_PAGE_SIZE";

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("Invalid API base URL '{0}': must be an http(s) URL")]
    InvalidBaseUrl(String),
    #[error("Invalid page size '{0}': must be a positive integer")]
    InvalidPageSize(String),
}

/// Application configuration
/// In debug builds: loads a .env file first, then reads the environment
/// In release builds: reads the environment only
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Root of the syllabus service, without the `/syllabus` path
    pub api_base_url: String,
    /// Rows per result page
    pub page_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Config {
    /// Load configuration based on build mode
    pub fn load() -> Self {
        #[cfg(debug_assertions)]
        {
            if dotenvy::dotenv().is_ok() {
                info!("Config: Dev mode activated - loaded .env file");
            } else {
                info!("Config: No .env file found, using environment only");
            }
        }

        let config = Self::from_lookup(|key| std::env::var(key).ok());
        info!(
            "Config: API base URL {}, page size {}",
            config.api_base_url, config.page_size
        );
        config
    }

    /// Build a config from a variable lookup, falling back to defaults for
    /// anything missing or invalid
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let api_base_url = match lookup(BASE_URL_VAR) {
            Some(raw) => parse_base_url(&raw).unwrap_or_else(|e| {
                warn!("Config: {}, using {}", e, defaults.api_base_url);
                defaults.api_base_url.clone()
            }),
            None => defaults.api_base_url.clone(),
        };

        let page_size = match lookup(PAGE_SIZE_VAR) {
            Some(raw) => parse_page_size(&raw).unwrap_or_else(|e| {
                warn!("Config: {}, using {}", e, defaults.page_size);
                defaults.page_size
            }),
            None => defaults.page_size,
        };

        Self {
            api_base_url,
            page_size,
        }
    }
}

/// Validate a base URL and strip any trailing slash
pub fn parse_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    let url = reqwest::Url::parse(trimmed)
        .map_err(|_| ConfigError::InvalidBaseUrl(raw.to_string()))?;

    match url.scheme() {
        "http" | "https" if url.has_host() => Ok(trimmed.to_string()),
        _ => Err(ConfigError::InvalidBaseUrl(raw.to_string())),
    }
}

fn parse_page_size(raw: &str) -> Result<usize, ConfigError> {
    match raw.trim().parse::<usize>() {
        Ok(size) if size > 0 => Ok(size),
        _ => Err(ConfigError::InvalidPageSize(raw.to_string())),
    }
}
