//! Backend configuration read from the environment.
//!
//! A `.env` file is loaded by the binary before `BackendConfig::from_env`
//! runs, so both real environment variables and `.env` entries apply.

use std::env;
use std::time::Duration;
use url::Url;
use validator::Validate;

use crate::error::AppError;

pub const BACKEND_URL_VAR: &str = "BRAND_INSIGHT_BACKEND_URL";
pub const ANALYZE_TIMEOUT_VAR: &str = "BRAND_INSIGHT_ANALYZE_TIMEOUT_SECS";
pub const MESSAGE_TIMEOUT_VAR: &str = "BRAND_INSIGHT_MESSAGE_TIMEOUT_SECS";

const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";
const DEFAULT_ANALYZE_TIMEOUT_SECS: u64 = 300;
const DEFAULT_MESSAGE_TIMEOUT_SECS: u64 = 120;

/// Where and how to reach the analysis backend.
#[derive(Debug, Clone, Validate)]
pub struct BackendConfig {
    /// Base URL of the backend; endpoints are joined onto it.
    pub base_url: Url,
    /// Timeout for one analysis request, in seconds. Analyses scrape and
    /// run two generation tasks, so this is much longer than a message.
    #[validate(range(min = 1, max = 3600))]
    pub analyze_timeout_secs: u64,
    /// Timeout for one message generation request, in seconds.
    #[validate(range(min = 1, max = 3600))]
    pub message_timeout_secs: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BACKEND_URL).expect("Invalid default backend URL"),
            analyze_timeout_secs: DEFAULT_ANALYZE_TIMEOUT_SECS,
            message_timeout_secs: DEFAULT_MESSAGE_TIMEOUT_SECS,
        }
    }
}

impl BackendConfig {
    pub fn new(base_url: &str) -> Result<Self, AppError> {
        let config = Self {
            base_url: parse_base_url(base_url)?,
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Build the configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Result<Self, AppError> {
        let base_url = match env::var(BACKEND_URL_VAR) {
            Ok(value) => parse_base_url(&value)?,
            Err(_) => Self::default().base_url,
        };

        let config = Self {
            base_url,
            analyze_timeout_secs: read_secs(ANALYZE_TIMEOUT_VAR, DEFAULT_ANALYZE_TIMEOUT_SECS)?,
            message_timeout_secs: read_secs(MESSAGE_TIMEOUT_VAR, DEFAULT_MESSAGE_TIMEOUT_SECS)?,
        };

        config
            .validate()
            .map_err(|e| AppError::Config(format!("Invalid backend configuration: {}", e)))?;
        Ok(config)
    }

    pub fn analyze_timeout(&self) -> Duration {
        Duration::from_secs(self.analyze_timeout_secs)
    }

    pub fn message_timeout(&self) -> Duration {
        Duration::from_secs(self.message_timeout_secs)
    }

    /// Absolute URL of a backend endpoint (e.g. `analyze/`)
    pub fn endpoint(&self, path: &str) -> Result<Url, AppError> {
        Ok(self.base_url.join(path)?)
    }
}

fn parse_base_url(value: &str) -> Result<Url, AppError> {
    let mut url = Url::parse(value.trim())
        .map_err(|e| AppError::Config(format!("{} is not a valid URL: {}", BACKEND_URL_VAR, e)))?;

    // Url::join replaces the last segment unless the path ends with a slash.
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

fn read_secs(var: &str, default: u64) -> Result<u64, AppError> {
    match env::var(var) {
        Ok(value) => value
            .trim()
            .parse()
            .map_err(|e| AppError::Config(format!("{} must be a number of seconds: {}", var, e))),
        Err(_) => Ok(default),
    }
}
