use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Where profile documents come from. One call, one outbound request.
#[async_trait]
pub trait DocumentSource: Send + Sync {
    async fn fetch(&self, identifier: &str) -> Result<String>;
}

pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
    fn timeout(&self) -> Duration;
    fn user_agent(&self) -> &str;
}
