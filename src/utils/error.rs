use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error("Request failed: {message}")]
    Transport { message: String },

    #[error("HTTP error: {message}")]
    HttpStatus { status: u16, message: String },

    #[error("No contribution data found")]
    NoData,

    #[error("Data processing error: {message}")]
    Processing { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Remote,
    Data,
    Configuration,
    System,
}

impl ScrapeError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ScrapeError::Transport { .. } => ErrorCategory::Network,
            ScrapeError::HttpStatus { .. } => ErrorCategory::Remote,
            ScrapeError::NoData | ScrapeError::Processing { .. } => ErrorCategory::Data,
            ScrapeError::ConfigError { .. }
            | ScrapeError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            ScrapeError::IoError(_)
            | ScrapeError::CsvError(_)
            | ScrapeError::SerializationError(_) => ErrorCategory::System,
        }
    }

    /// 只有網路層錯誤值得呼叫端自行重試，本程式本身從不重試
    pub fn is_retryable(&self) -> bool {
        match self {
            ScrapeError::Transport { .. } => true,
            ScrapeError::HttpStatus { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ScrapeError::Transport { .. } => {
                "Check network connectivity or raise the request timeout"
            }
            ScrapeError::HttpStatus { status: 404, .. } => "Check that the username exists",
            ScrapeError::HttpStatus { .. } => "The remote site rejected the request; try again later",
            ScrapeError::NoData => "The profile page has no contribution calendar markup",
            ScrapeError::Processing { .. } => "The profile page markup changed; the scraper may need an update",
            ScrapeError::IoError(_) => "Check file paths and permissions",
            ScrapeError::CsvError(_) | ScrapeError::SerializationError(_) => {
                "Try a different output format"
            }
            ScrapeError::ConfigError { .. }
            | ScrapeError::InvalidConfigValueError { .. } => "Fix the configuration and run again",
        }
    }
}

pub type Result<T> = std::result::Result<T, ScrapeError>;
