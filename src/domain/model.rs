use crate::utils::error::ScrapeError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One calendar day and how many contributions were made on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributionRecord {
    pub date: NaiveDate,
    pub count: u32,
}

/// Successful scrape: the yearly total plus the records split into weeks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributionReport {
    pub total: u64,
    pub contributions: Vec<Vec<ContributionRecord>>,
}

impl ContributionReport {
    /// Records in date order, ignoring the weekly grouping.
    pub fn records(&self) -> impl Iterator<Item = &ContributionRecord> {
        self.contributions.iter().flatten()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResult {
    pub error: String,
    pub total: u64,
    pub contributions: Vec<Vec<ContributionRecord>>,
}

impl ErrorResult {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            total: 0,
            contributions: Vec::new(),
        }
    }
}

impl From<&ScrapeError> for ErrorResult {
    fn from(err: &ScrapeError) -> Self {
        Self::new(err.to_string())
    }
}

impl From<ScrapeError> for ErrorResult {
    fn from(err: ScrapeError) -> Self {
        Self::from(&err)
    }
}

/// What a caller receives for one identifier: always one of the two shapes, never a mix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ContributionResponse {
    Error(ErrorResult),
    Report(ContributionReport),
}

impl ContributionResponse {
    pub fn is_error(&self) -> bool {
        matches!(self, ContributionResponse::Error(_))
    }

    pub fn total(&self) -> u64 {
        match self {
            ContributionResponse::Report(report) => report.total,
            ContributionResponse::Error(err) => err.total,
        }
    }
}

impl From<ContributionReport> for ContributionResponse {
    fn from(report: ContributionReport) -> Self {
        ContributionResponse::Report(report)
    }
}

impl From<ErrorResult> for ContributionResponse {
    fn from(err: ErrorResult) -> Self {
        ContributionResponse::Error(err)
    }
}
