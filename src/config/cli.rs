use crate::config::toml_config::TomlConfig;
use crate::config::ScraperConfig;
use crate::utils::error::Result;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Csv,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "contrib-scrape")]
#[command(about = "Scrape a public profile's contribution calendar into JSON")]
pub struct CliConfig {
    #[arg(long, help = "Profile name to look up")]
    pub user: String,

    #[arg(long, help = "TOML file with a [scraper] section")]
    pub config: Option<PathBuf>,

    #[arg(long)]
    pub base_url: Option<String>,

    #[arg(long, help = "Request timeout in seconds")]
    pub timeout_secs: Option<u64>,

    #[arg(long, value_enum, default_value = "json")]
    pub format: OutputFormat,

    #[arg(long, help = "Pretty-print JSON output")]
    pub pretty: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// 優先順序：命令列 > 設定檔 > 環境變數 > 預設值
    pub fn resolve(&self) -> Result<ScraperConfig> {
        let mut config = ScraperConfig::from_env()?;

        if let Some(path) = &self.config {
            tracing::debug!("Loading config file: {}", path.display());
            config = TomlConfig::from_file(path)?.apply_to(config);
        }

        if let Some(base_url) = &self.base_url {
            config.base_url = base_url.clone();
        }
        if let Some(secs) = self.timeout_secs {
            config.timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }
}
