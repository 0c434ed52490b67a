pub mod extractor;
pub mod fetcher;
pub mod service;

pub use crate::domain::model::{ContributionRecord, ContributionReport, ContributionResponse, ErrorResult};
pub use crate::domain::ports::{ConfigProvider, DocumentSource};
pub use crate::utils::error::Result;
