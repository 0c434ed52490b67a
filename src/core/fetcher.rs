use crate::core::{ConfigProvider, DocumentSource};
use crate::utils::error::{Result, ScrapeError};
use async_trait::async_trait;
use reqwest::header::USER_AGENT;
use reqwest::Client;
use url::Url;

/// Fetches profile pages over HTTP. Timeout and user agent come from the config.
pub struct HttpFetcher<C: ConfigProvider> {
    config: C,
    client: Client,
}

impl<C: ConfigProvider> HttpFetcher<C> {
    pub fn new(config: C) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| ScrapeError::ConfigError {
                message: format!("Failed to build HTTP client: {}", e),
            })?;

        Ok(Self { config, client })
    }

    pub fn config(&self) -> &C {
        &self.config
    }

    /// `<base_url>/<identifier>`, with the identifier as a single encoded path segment.
    pub fn profile_url(&self, identifier: &str) -> Result<Url> {
        let mut url = Url::parse(self.config.base_url()).map_err(|e| ScrapeError::ConfigError {
            message: format!("Invalid base URL '{}': {}", self.config.base_url(), e),
        })?;

        url.path_segments_mut()
            .map_err(|_| ScrapeError::ConfigError {
                message: format!("Base URL '{}' cannot carry a path", self.config.base_url()),
            })?
            .pop_if_empty()
            .push(identifier);

        Ok(url)
    }
}

fn transport_error(err: reqwest::Error) -> ScrapeError {
    let message = if err.is_timeout() {
        format!("timed out: {}", err)
    } else {
        err.to_string()
    };
    ScrapeError::Transport { message }
}

#[async_trait]
impl<C: ConfigProvider> DocumentSource for HttpFetcher<C> {
    async fn fetch(&self, identifier: &str) -> Result<String> {
        let url = self.profile_url(identifier)?;

        tracing::debug!("Making request to: {}", url);
        let response = self
            .client
            .get(url.clone())
            .header(USER_AGENT, self.config.user_agent())
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        tracing::debug!("Response status: {}", status);

        if !status.is_success() {
            return Err(ScrapeError::HttpStatus {
                status: status.as_u16(),
                message: format!("{} for url {}", status, url),
            });
        }

        let body = response.text().await.map_err(transport_error)?;
        tracing::debug!("Fetched {} bytes", body.len());
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use std::time::Duration;

    struct MockConfig {
        base_url: String,
        timeout: Duration,
        user_agent: String,
    }

    impl MockConfig {
        fn new(base_url: String) -> Self {
            Self {
                base_url,
                timeout: Duration::from_secs(5),
                user_agent: "test-agent/1.0".to_string(),
            }
        }
    }

    impl ConfigProvider for MockConfig {
        fn base_url(&self) -> &str {
            &self.base_url
        }

        fn timeout(&self) -> Duration {
            self.timeout
        }

        fn user_agent(&self) -> &str {
            &self.user_agent
        }
    }

    #[test]
    fn test_profile_url() {
        let fetcher = HttpFetcher::new(MockConfig::new("https://github.com".to_string())).unwrap();
        assert_eq!(
            fetcher.profile_url("octocat").unwrap().as_str(),
            "https://github.com/octocat"
        );

        let fetcher = HttpFetcher::new(MockConfig::new("https://github.com/".to_string())).unwrap();
        assert_eq!(
            fetcher.profile_url("octocat").unwrap().as_str(),
            "https://github.com/octocat"
        );
    }

    #[test]
    fn test_profile_url_encodes_identifier() {
        let fetcher = HttpFetcher::new(MockConfig::new("https://github.com".to_string())).unwrap();
        let url = fetcher.profile_url("../settings?tab=1").unwrap();
        assert_eq!(url.path_segments().unwrap().count(), 1);
        assert_eq!(url.query(), None);
    }

    #[test]
    fn test_profile_url_rejects_bad_base() {
        let fetcher = HttpFetcher::new(MockConfig::new("not a url".to_string())).unwrap();
        assert!(matches!(
            fetcher.profile_url("octocat"),
            Err(ScrapeError::ConfigError { .. })
        ));
    }

    #[tokio::test]
    async fn test_fetch_returns_body_and_sends_user_agent() {
        let server = MockServer::start();
        let page_mock = server.mock(|when, then| {
            when.method(GET)
                .path("/octocat")
                .header("User-Agent", "test-agent/1.0");
            then.status(200)
                .header("Content-Type", "text/html")
                .body("<html>calendar</html>");
        });

        let fetcher = HttpFetcher::new(MockConfig::new(server.url(""))).unwrap();
        let body = fetcher.fetch("octocat").await.unwrap();

        page_mock.assert();
        assert_eq!(body, "<html>calendar</html>");
    }

    #[tokio::test]
    async fn test_fetch_not_found_is_http_status_error() {
        let server = MockServer::start();
        let page_mock = server.mock(|when, then| {
            when.method(GET).path("/ghost");
            then.status(404);
        });

        let fetcher = HttpFetcher::new(MockConfig::new(server.url(""))).unwrap();
        let err = fetcher.fetch("ghost").await.unwrap_err();

        page_mock.assert();
        match err {
            ScrapeError::HttpStatus { status, message } => {
                assert_eq!(status, 404);
                assert!(message.contains("404"));
                assert!(message.contains("/ghost"));
            }
            other => panic!("expected HttpStatus, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_fetch_server_error_is_http_status_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/octocat");
            then.status(503);
        });

        let fetcher = HttpFetcher::new(MockConfig::new(server.url(""))).unwrap();
        let err = fetcher.fetch("octocat").await.unwrap_err();

        assert!(matches!(err, ScrapeError::HttpStatus { status: 503, .. }));
        assert!(err.is_retryable());
    }

    #[tokio::test]
    async fn test_fetch_timeout_is_transport_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/slow");
            then.status(200).delay(Duration::from_secs(3)).body("late");
        });

        let mut config = MockConfig::new(server.url(""));
        config.timeout = Duration::from_millis(200);
        let fetcher = HttpFetcher::new(config).unwrap();

        let err = fetcher.fetch("slow").await.unwrap_err();

        assert!(matches!(err, ScrapeError::Transport { .. }));
        assert!(err.to_string().starts_with("Request failed:"));
    }

    #[tokio::test]
    async fn test_fetch_connection_refused_is_transport_error() {
        // 綁定後立即釋放，確保該埠沒有服務
        let port = std::net::TcpListener::bind("127.0.0.1:0")
            .unwrap()
            .local_addr()
            .unwrap()
            .port();

        let fetcher =
            HttpFetcher::new(MockConfig::new(format!("http://127.0.0.1:{}", port))).unwrap();
        let err = fetcher.fetch("octocat").await.unwrap_err();

        assert!(matches!(err, ScrapeError::Transport { .. }));
    }
}
