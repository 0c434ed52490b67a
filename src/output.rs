use crate::domain::model::{ContributionReport, ContributionResponse};
use crate::utils::error::{Result, ScrapeError};

pub fn to_json(response: &ContributionResponse, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(response)?
    } else {
        serde_json::to_string(response)?
    };
    Ok(json)
}

/// One `date,count` row per day, in date order. Weekly grouping is dropped.
pub fn to_csv(report: &ContributionReport) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    if report.contributions.is_empty() {
        writer.write_record(["date", "count"])?;
    }
    for record in report.records() {
        writer.serialize(record)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ScrapeError::IoError(e.into_error()))?;
    String::from_utf8(bytes).map_err(|e| ScrapeError::Processing {
        message: format!("CSV output is not UTF-8: {}", e),
    })
}
