pub mod api;
pub mod config;
pub mod core;
pub mod domain;
pub mod output;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::{CliConfig, OutputFormat};

pub use config::ScraperConfig;
pub use core::{extractor::extract, fetcher::HttpFetcher, service::ContributionService};
pub use domain::model::{ContributionRecord, ContributionReport, ContributionResponse, ErrorResult};
pub use utils::error::{Result, ScrapeError};
