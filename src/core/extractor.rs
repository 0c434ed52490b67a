//! Contribution calendar extraction.
//!
//! The profile page renders one grid cell per day. Each cell carries a
//! `data-date` attribute followed by `data-level`, and a screen-reader span
//! announcing the count ("3 contributions", "No contributions"). Dates and
//! counts are scanned independently and paired by position.

use crate::domain::model::{ContributionRecord, ContributionReport};
use crate::utils::error::{Result, ScrapeError};
use chrono::NaiveDate;
use regex::Regex;
use std::sync::OnceLock;

pub const WEEK_LENGTH: usize = 7;

// ASCII digits only: `\d` is Unicode-aware and would admit tokens `u32::parse` rejects
const DATE_PATTERN: &str = r#"data-date="([0-9-]+)"[^>]*data-level"#;
const COUNT_PATTERN: &str = r#"<span class="sr-only">([0-9]+|No) contribution"#;

fn date_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(DATE_PATTERN).unwrap())
}

fn count_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(COUNT_PATTERN).unwrap())
}

fn scan<'a>(re: &Regex, document: &'a str) -> Vec<&'a str> {
    re.captures_iter(document)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .collect()
}

fn parse_date(token: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(token, "%Y-%m-%d").map_err(|e| ScrapeError::Processing {
        message: format!("invalid date '{}': {}", token, e),
    })
}

fn parse_count(token: &str) -> Result<u32> {
    if token == "No" {
        return Ok(0);
    }
    token.parse().map_err(|e| ScrapeError::Processing {
        message: format!("invalid contribution count '{}': {}", token, e),
    })
}

/// Extracts a report grouped into weeks of seven days.
pub fn extract(document: &str) -> Result<ContributionReport> {
    let dates = scan(date_regex(), document);
    let counts = scan(count_regex(), document);
    tracing::debug!(
        "Matched {} date tokens and {} count tokens",
        dates.len(),
        counts.len()
    );

    if dates.is_empty() || counts.is_empty() {
        return Err(ScrapeError::NoData);
    }

    // 依位置配對；長度不一致時以較短者為準
    if dates.len() != counts.len() {
        tracing::warn!(
            "⚠️ Date/count token mismatch ({} vs {}), pairing the first {}",
            dates.len(),
            counts.len(),
            dates.len().min(counts.len())
        );
    }

    let mut records = dates
        .iter()
        .zip(counts.iter())
        .map(|(date, count)| {
            Ok(ContributionRecord {
                date: parse_date(date)?,
                count: parse_count(count)?,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    records.sort_by_key(|record| record.date);

    let total = records.iter().map(|record| u64::from(record.count)).sum();

    Ok(ContributionReport {
        total,
        contributions: chunk_weeks(&records),
    })
}

/// Consecutive groups of seven; the last group may be shorter.
fn chunk_weeks(records: &[ContributionRecord]) -> Vec<Vec<ContributionRecord>> {
    records
        .chunks(WEEK_LENGTH)
        .map(|week| week.to_vec())
        .collect()
}
