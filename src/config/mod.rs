#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::{Result, ScrapeError};
use crate::utils::validation::{validate_non_empty_string, validate_range, validate_url, Validate};
use std::env;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://github.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

pub const ENV_BASE_URL: &str = "CONTRIB_BASE_URL";
pub const ENV_TIMEOUT_SECS: &str = "CONTRIB_TIMEOUT_SECS";
pub const ENV_USER_AGENT: &str = "CONTRIB_USER_AGENT";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScraperConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl ScraperConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from defaults, overridden by whatever `lookup` returns.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(base_url) = lookup(ENV_BASE_URL) {
            config.base_url = base_url;
        }
        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            let secs = raw
                .trim()
                .parse::<u64>()
                .map_err(|e| ScrapeError::InvalidConfigValueError {
                    field: ENV_TIMEOUT_SECS.to_string(),
                    value: raw.clone(),
                    reason: format!("Expected whole seconds: {}", e),
                })?;
            config.timeout = Duration::from_secs(secs);
        }
        if let Some(user_agent) = lookup(ENV_USER_AGENT) {
            config.user_agent = user_agent;
        }

        Ok(config)
    }
}

impl ConfigProvider for ScraperConfig {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn timeout(&self) -> Duration {
        self.timeout
    }

    fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

impl Validate for ScraperConfig {
    fn validate(&self) -> Result<()> {
        validate_url("base_url", &self.base_url)?;

        // 逾時以毫秒比較，避免次秒設定被截成 0
        validate_range("timeout_ms", self.timeout.as_millis(), 1, 120_000)?;

        validate_non_empty_string("user_agent", &self.user_agent)?;

        tracing::debug!("✅ Scraper configuration validation passed");
        Ok(())
    }
}
