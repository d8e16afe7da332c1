//! GNews API response types and normalization.

use serde::{Deserialize, Serialize};

/// Raw response from the GNews API.
///
/// Deserialization is deliberately tolerant: every field the provider might
/// omit defaults instead of failing the whole payload.
#[derive(Debug, Deserialize)]
pub struct RawNewsResponse {
    #[serde(default, rename = "totalArticles")]
    pub total_articles: Option<u64>,
    #[serde(default)]
    pub articles: Vec<RawArticle>,
}

/// Raw article object as returned by the provider.
#[derive(Debug, Deserialize)]
pub struct RawArticle {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub source: Option<RawSource>,
    #[serde(default, rename = "publishedAt")]
    pub published_at: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

/// Nested source object from the provider.
#[derive(Debug, Deserialize)]
pub struct RawSource {
    #[serde(default)]
    pub name: Option<String>,
}

/// Normalized article shape returned to tool callers.
///
/// Immutable once constructed. Absent optional fields are omitted from the
/// serialized output rather than sent as null.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub url: String,
    /// Source name from the provider's nested `source.name`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// ISO-8601 timestamp, passed through unvalidated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Normalized response: provider-reported total plus ordered articles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsResponse {
    pub total: u64,
    pub articles: Vec<Article>,
}

impl From<RawArticle> for Article {
    fn from(raw: RawArticle) -> Self {
        Article {
            title: raw.title.unwrap_or_default(),
            description: raw.description,
            url: raw.url.unwrap_or_default(),
            source: raw.source.and_then(|s| s.name),
            published_at: raw.published_at,
            image: raw.image,
        }
    }
}

impl From<RawNewsResponse> for NewsResponse {
    /// Normalize the raw article list, preserving input order.
    ///
    /// `total` uses the provider's reported count when present, otherwise
    /// the number of normalized articles.
    fn from(raw: RawNewsResponse) -> Self {
        let articles: Vec<Article> = raw.articles.into_iter().map(Into::into).collect();
        let total = raw.total_articles.unwrap_or(articles.len() as u64);
        NewsResponse { total, articles }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE_JSON: &str = r#"{
        "totalArticles": 54904,
        "articles": [
            {
                "title": "Rust 1.80 released",
                "description": "The Rust team has published a new release",
                "url": "https://example.com/rust-1-80",
                "image": "https://example.com/rust.png",
                "publishedAt": "2025-11-17T00:00:00Z",
                "source": {
                    "name": "Example News",
                    "url": "https://example.com"
                }
            },
            {
                "title": "Second story",
                "url": "https://example.com/second",
                "source": {}
            }
        ]
    }"#;

    #[test]
    fn test_deserialize_gnews_response() {
        let raw: RawNewsResponse = serde_json::from_str(FIXTURE_JSON).unwrap();
        assert_eq!(raw.total_articles, Some(54904));
        assert_eq!(raw.articles.len(), 2);
        assert_eq!(raw.articles[0].published_at.as_deref(), Some("2025-11-17T00:00:00Z"));
    }

    #[test]
    fn test_normalize_preserves_order_and_total() {
        let raw: RawNewsResponse = serde_json::from_str(FIXTURE_JSON).unwrap();
        let normalized: NewsResponse = raw.into();

        assert_eq!(normalized.total, 54904);
        assert_eq!(normalized.articles[0].title, "Rust 1.80 released");
        assert_eq!(normalized.articles[0].source.as_deref(), Some("Example News"));
        assert_eq!(normalized.articles[1].title, "Second story");
        assert!(normalized.articles[1].source.is_none());
    }

    #[test]
    fn test_missing_title_and_url_default_to_empty() {
        let json = r#"{"articles": [{"description": "no title or url"}]}"#;
        let raw: RawNewsResponse = serde_json::from_str(json).unwrap();
        let normalized: NewsResponse = raw.into();

        let article = &normalized.articles[0];
        assert_eq!(article.title, "");
        assert_eq!(article.url, "");
        assert_eq!(article.description.as_deref(), Some("no title or url"));
        assert!(article.source.is_none());
        assert!(article.published_at.is_none());
        assert!(article.image.is_none());
    }

    #[test]
    fn test_total_falls_back_to_article_count() {
        let json = r#"{"articles": [{"title": "a", "url": "u"}, {"title": "b", "url": "u"}]}"#;
        let raw: RawNewsResponse = serde_json::from_str(json).unwrap();
        let normalized: NewsResponse = raw.into();

        assert_eq!(normalized.total, 2);
    }

    #[test]
    fn test_absent_fields_skipped_in_output() {
        let article = Article {
            title: "t".into(),
            description: None,
            url: "u".into(),
            source: None,
            published_at: None,
            image: None,
        };
        let value = serde_json::to_value(&article).unwrap();
        let obj = value.as_object().unwrap();

        assert!(obj.contains_key("title"));
        assert!(obj.contains_key("url"));
        assert!(!obj.contains_key("description"));
        assert!(!obj.contains_key("source"));
        assert!(!obj.contains_key("published_at"));
        assert!(!obj.contains_key("image"));
    }

    #[test]
    fn test_response_roundtrip_for_disk_tier() {
        let raw: RawNewsResponse = serde_json::from_str(FIXTURE_JSON).unwrap();
        let normalized: NewsResponse = raw.into();

        let json = serde_json::to_string(&normalized).unwrap();
        let reloaded: NewsResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(reloaded, normalized);
    }
}
