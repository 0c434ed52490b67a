use crate::config::ScraperConfig;
use crate::utils::error::{Result, ScrapeError};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;
use std::time::Duration;

/// On-disk configuration. Every key is optional; missing keys keep the current value.
///
/// ```toml
/// [scraper]
/// base_url = "https://github.com"
/// timeout_secs = 10
/// user_agent = "${CONTRIB_AGENT}"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub scraper: Option<ScraperSection>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScraperSection {
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
    pub user_agent: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ScrapeError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| ScrapeError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${CONTRIB_AGENT})；未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> String {
        static RE: OnceLock<Regex> = OnceLock::new();
        let re = RE.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").unwrap());

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .into_owned()
    }

    /// Layers the file's values over `base`.
    pub fn apply_to(&self, mut base: ScraperConfig) -> ScraperConfig {
        let Some(section) = &self.scraper else {
            return base;
        };

        if let Some(base_url) = &section.base_url {
            base.base_url = base_url.clone();
        }
        if let Some(secs) = section.timeout_secs {
            base.timeout = Duration::from_secs(secs);
        }
        if let Some(user_agent) = &section.user_agent {
            base.user_agent = user_agent.clone();
        }
        base
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_full_section() {
        let config = TomlConfig::from_toml_str(
            r#"
[scraper]
base_url = "http://localhost:8080"
timeout_secs = 4
user_agent = "scraper-test/0.1"
"#,
        )
        .unwrap();

        let merged = config.apply_to(ScraperConfig::default());
        assert_eq!(merged.base_url, "http://localhost:8080");
        assert_eq!(merged.timeout, Duration::from_secs(4));
        assert_eq!(merged.user_agent, "scraper-test/0.1");
    }

    #[test]
    fn test_partial_section_keeps_base() {
        let config = TomlConfig::from_toml_str("[scraper]\ntimeout_secs = 2\n").unwrap();

        let merged = config.apply_to(ScraperConfig::default());
        assert_eq!(merged.timeout, Duration::from_secs(2));
        assert_eq!(merged.base_url, crate::config::DEFAULT_BASE_URL);
    }

    #[test]
    fn test_empty_file_keeps_base() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert_eq!(config.apply_to(ScraperConfig::default()), ScraperConfig::default());
    }

    #[test]
    fn test_unset_env_var_left_verbatim() {
        let config = TomlConfig::from_toml_str(
            "[scraper]\nuser_agent = \"${CONTRIB_SCRAPE_SURELY_UNSET_VAR}\"\n",
        )
        .unwrap();

        let section = config.scraper.unwrap();
        assert_eq!(
            section.user_agent.as_deref(),
            Some("${CONTRIB_SCRAPE_SURELY_UNSET_VAR}")
        );
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = TomlConfig::from_toml_str("[scraper\nbase_url = 1").unwrap_err();
        assert!(matches!(err, ScrapeError::ConfigError { .. }));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[scraper]\nbase_url = \"https://example.com\"").unwrap();

        let config = TomlConfig::from_file(file.path()).unwrap();
        let merged = config.apply_to(ScraperConfig::default());
        assert_eq!(merged.base_url, "https://example.com");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let err = TomlConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ScrapeError::IoError(_)));
    }
}
