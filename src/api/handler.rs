//! Query-string dispatch for `GET /api?user=<name>`.
//!
//! Turns a request target into a status, headers and JSON body. Socket
//! handling belongs to whatever hosts this function.

use crate::core::service::ContributionService;
use crate::core::DocumentSource;
use serde::Serialize;
use url::form_urlencoded;

pub const USER_PARAM: &str = "user";
pub const MISSING_USER_MESSAGE: &str = "Missing 'user' parameter (use ?user=github_username)";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub headers: Vec<(&'static str, String)>,
    pub body: String,
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
}

impl ApiResponse {
    fn json(status: u16, body: String) -> Self {
        Self {
            status,
            headers: vec![
                ("Access-Control-Allow-Origin", "*".to_string()),
                ("Content-Type", "application/json".to_string()),
            ],
            body,
        }
    }

    fn error(status: u16, message: &str) -> Self {
        let body = serde_json::to_string(&ErrorBody { error: message })
            .unwrap_or_else(|_| r#"{"error":"Server error"}"#.to_string());
        Self::json(status, body)
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// First non-empty `user` value from the request target's query, URL-decoded.
pub fn user_param(path_and_query: &str) -> Option<String> {
    let without_fragment = path_and_query.split('#').next().unwrap_or("");
    let query = without_fragment.split_once('?').map(|(_, q)| q)?;

    form_urlencoded::parse(query.as_bytes())
        .find(|(key, value)| key == USER_PARAM && !value.trim().is_empty())
        .map(|(_, value)| value.into_owned())
}

pub async fn handle_request<S: DocumentSource>(
    service: &ContributionService<S>,
    path_and_query: &str,
) -> ApiResponse {
    let Some(user) = user_param(path_and_query) else {
        tracing::debug!("Rejected request without user parameter: {}", path_and_query);
        return ApiResponse::error(400, MISSING_USER_MESSAGE);
    };

    let response = service.get_contributions(&user).await;

    match serde_json::to_string(&response) {
        Ok(body) => ApiResponse::json(200, body),
        Err(e) => {
            tracing::error!("❌ Failed to serialize response: {}", e);
            ApiResponse::error(500, &format!("Server error: {}", e))
        }
    }
}
