use crate::core::extractor;
use crate::core::fetcher::HttpFetcher;
use crate::core::{ConfigProvider, DocumentSource};
use crate::domain::model::{ContributionReport, ContributionResponse, ErrorResult};
use crate::utils::error::Result;

/// Fetch → extract for one identifier. Holds no state between calls.
pub struct ContributionService<S: DocumentSource> {
    source: S,
}

impl<S: DocumentSource> ContributionService<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Runs the scrape and keeps the typed error for callers that want to match on it.
    pub async fn scrape(&self, identifier: &str) -> Result<ContributionReport> {
        tracing::info!("Fetching contributions for '{}'", identifier);
        let document = self.source.fetch(identifier).await?;
        let report = extractor::extract(&document)?;
        tracing::info!(
            "✅ '{}': {} contributions over {} weeks",
            identifier,
            report.total,
            report.contributions.len()
        );
        Ok(report)
    }

    /// Same as [`scrape`](Self::scrape), but every failure becomes an [`ErrorResult`].
    pub async fn get_contributions(&self, identifier: &str) -> ContributionResponse {
        match self.scrape(identifier).await {
            Ok(report) => report.into(),
            Err(e) => {
                tracing::warn!(
                    "❌ Scrape failed for '{}': {} (Category: {:?})",
                    identifier,
                    e,
                    e.category()
                );
                ErrorResult::from(&e).into()
            }
        }
    }
}

impl<C: ConfigProvider> ContributionService<HttpFetcher<C>> {
    pub fn http(config: C) -> Result<Self> {
        Ok(Self::new(HttpFetcher::new(config)?))
    }
}
