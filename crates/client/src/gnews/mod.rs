//! GNews API client.
//!
//! Provides a client for the GNews v4 API with request validation, query
//! sanitization, and response normalization.
//!
//! ### Specification
//!
//! - **Endpoints**: `{base}/search` and `{base}/top-headlines`
//! - **Authentication**: static `apikey` query parameter merged into every
//!   request; absent optional parameters are omitted, never sent empty.
//! - **Failure mapping**: any non-200 response becomes an upstream error
//!   carrying the status code and a 300-character body excerpt. No retries:
//!   a retry here would double-bill the underlying API quota.

pub mod error;
pub mod request;
pub mod response;

pub use error::GNewsError;
pub use request::{DEFAULT_MAX, HeadlinesRequest, MAX_QUERY_LEN, SearchRequest, sanitize_query, validate_max};
pub use response::{Article, NewsResponse, RawNewsResponse};

use std::time::{Duration, Instant};

use reqwest::header;
use serde::Serialize;

/// Default base URL for the GNews API.
const DEFAULT_BASE_URL: &str = "https://gnews.io/api/v4";

/// Default request timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Default user agent.
const DEFAULT_USER_AGENT: &str = "mcp-gnews/0.1";

/// Maximum length of the diagnostic body excerpt on upstream errors.
const BODY_EXCERPT_LEN: usize = 300;

/// GNews API client configuration.
#[derive(Debug, Clone)]
pub struct GNewsConfig {
    /// Static API key sent with every request.
    pub api_key: String,
    /// Base URL (default: https://gnews.io/api/v4).
    pub base_url: String,
    /// Request timeout (default: 10s).
    pub timeout: Duration,
    /// User-agent string (default: mcp-gnews/0.x).
    pub user_agent: String,
}

impl Default for GNewsConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// GNews API client.
#[derive(Debug, Clone)]
pub struct GNewsClient {
    http: reqwest::Client,
    config: GNewsConfig,
}

impl GNewsClient {
    /// Create a new GNews client with the given configuration.
    pub fn new(config: GNewsConfig) -> Result<Self, GNewsError> {
        if config.api_key.is_empty() {
            return Err(GNewsError::MissingApiKey);
        }

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(GNewsError::from)?;

        Ok(Self { http, config })
    }

    /// Execute a search query against the `/search` endpoint.
    pub async fn search(&self, req: &SearchRequest) -> Result<NewsResponse, GNewsError> {
        req.validate()?;
        let raw = self.fetch("search", req).await?;
        Ok(raw.into())
    }

    /// Fetch current headlines from the `/top-headlines` endpoint.
    pub async fn top_headlines(&self, req: &HeadlinesRequest) -> Result<NewsResponse, GNewsError> {
        req.validate()?;
        let raw = self.fetch("top-headlines", req).await?;
        Ok(raw.into())
    }

    /// Issue a single authenticated GET to one endpoint.
    ///
    /// The credential is merged into the serialized parameters; params with
    /// absent values are already dropped by serde at this point.
    async fn fetch<P: Serialize + ?Sized>(&self, endpoint: &str, params: &P) -> Result<RawNewsResponse, GNewsError> {
        let start = Instant::now();
        let url = format!("{}/{}", self.config.base_url, endpoint);

        tracing::debug!("requesting GNews API endpoint: {}", endpoint);

        let http_response = self
            .http
            .get(&url)
            .query(&[("apikey", self.config.api_key.as_str())])
            .query(params)
            .header("Accept", "application/json")
            .header(header::USER_AGENT, &self.config.user_agent)
            .send()
            .await
            .map_err(GNewsError::from)?;

        let status = http_response.status();
        tracing::debug!("GNews API response status: {}", status);

        if status.as_u16() != 200 {
            let body = http_response.text().await.unwrap_or_default();
            return Err(GNewsError::Upstream { status: status.as_u16(), body: excerpt(&body) });
        }

        let bytes = http_response.bytes().await.map_err(GNewsError::from)?;
        let raw: RawNewsResponse = serde_json::from_slice(&bytes).map_err(|e| GNewsError::Parse(e.to_string()))?;

        tracing::debug!("{} completed in {:?}, {} articles", endpoint, start.elapsed(), raw.articles.len());

        Ok(raw)
    }
}

/// Truncate an error body to a diagnostic excerpt.
fn excerpt(body: &str) -> String {
    body.chars().take(BODY_EXCERPT_LEN).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;

    fn client_for(server: &mockito::ServerGuard) -> GNewsClient {
        GNewsClient::new(GNewsConfig {
            api_key: "test-key".into(),
            base_url: server.url(),
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn test_client_new_missing_key() {
        let config = GNewsConfig::default();
        let result = GNewsClient::new(config);
        assert!(matches!(result, Err(GNewsError::MissingApiKey)));
    }

    #[tokio::test]
    async fn test_search_success() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/search")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("apikey".into(), "test-key".into()),
                Matcher::UrlEncoded("q".into(), "rust".into()),
                Matcher::UrlEncoded("max".into(), "10".into()),
            ]))
            .with_status(200)
            .with_body(
                r#"{"totalArticles": 1, "articles": [
                    {"title": "Rust news", "url": "https://example.com", "source": {"name": "Example"}}
                ]}"#,
            )
            .create_async()
            .await;

        let client = client_for(&server);
        let req = SearchRequest { q: "rust".into(), lang: None, country: None, max: 10, in_fields: None };
        let response = client.search(&req).await.unwrap();

        mock.assert_async().await;
        assert_eq!(response.total, 1);
        assert_eq!(response.articles[0].title, "Rust news");
        assert_eq!(response.articles[0].source.as_deref(), Some("Example"));
    }

    #[tokio::test]
    async fn test_top_headlines_success() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/top-headlines")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("apikey".into(), "test-key".into()),
                Matcher::UrlEncoded("lang".into(), "en".into()),
                Matcher::UrlEncoded("max".into(), "5".into()),
            ]))
            .with_status(200)
            .with_body(r#"{"totalArticles": 0, "articles": []}"#)
            .create_async()
            .await;

        let client = client_for(&server);
        let req = HeadlinesRequest { lang: Some("en".into()), country: None, category: None, max: 5 };
        let response = client.top_headlines(&req).await.unwrap();

        mock.assert_async().await;
        assert_eq!(response.total, 0);
        assert!(response.articles.is_empty());
    }

    #[tokio::test]
    async fn test_non_200_maps_to_upstream_error() {
        let mut server = mockito::Server::new_async().await;
        let long_body = "e".repeat(400);
        server
            .mock("GET", "/search")
            .match_query(Matcher::Any)
            .with_status(500)
            .with_body(&long_body)
            .create_async()
            .await;

        let client = client_for(&server);
        let req = SearchRequest { q: "rust".into(), lang: None, country: None, max: 10, in_fields: None };
        let err = client.search(&req).await.unwrap_err();

        match err {
            GNewsError::Upstream { status, body } => {
                assert_eq!(status, 500);
                assert_eq!(body.chars().count(), 300);
            }
            other => panic!("expected upstream error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_validation_fails_before_network() {
        // Unroutable base URL: a validation failure must short-circuit
        // before any connection attempt.
        let client = GNewsClient::new(GNewsConfig {
            api_key: "test-key".into(),
            base_url: "http://127.0.0.1:1".into(),
            ..Default::default()
        })
        .unwrap();

        let req = SearchRequest { q: "rust".into(), lang: None, country: None, max: 0, in_fields: None };
        assert!(matches!(client.search(&req).await, Err(GNewsError::InvalidMax(0))));

        let req = HeadlinesRequest { lang: None, country: None, category: None, max: 101 };
        assert!(matches!(client.top_headlines(&req).await, Err(GNewsError::InvalidMax(101))));
    }

    #[tokio::test]
    async fn test_invalid_json_maps_to_parse_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/search")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body("not json")
            .create_async()
            .await;

        let client = client_for(&server);
        let req = SearchRequest { q: "rust".into(), lang: None, country: None, max: 10, in_fields: None };
        assert!(matches!(client.search(&req).await, Err(GNewsError::Parse(_))));
    }

    #[test]
    fn test_excerpt_truncation() {
        assert_eq!(excerpt("short"), "short");
        assert_eq!(excerpt(&"x".repeat(500)).chars().count(), 300);
    }
}
