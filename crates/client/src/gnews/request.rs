//! GNews API request types, sanitization and validation.

use serde::Serialize;

use super::GNewsError;

/// Maximum query length, measured after sanitization.
pub const MAX_QUERY_LEN: usize = 300;

/// Default number of articles per request.
pub const DEFAULT_MAX: u32 = 10;

/// Sanitize caller-supplied query text.
///
/// Strips ASCII control characters except common whitespace, trims, and
/// collapses whitespace runs to a single space. Must run before cache-key
/// construction so semantically identical queries share an entry.
///
/// # Errors
///
/// Returns `GNewsError::InvalidQuery` if the result is empty or longer than
/// [`MAX_QUERY_LEN`] characters.
pub fn sanitize_query(raw: &str) -> Result<String, GNewsError> {
    let stripped: String = raw
        .chars()
        .filter(|c| !c.is_ascii_control() || matches!(c, '\t' | '\n' | '\r'))
        .collect();
    let q = stripped.split_whitespace().collect::<Vec<_>>().join(" ");

    if q.is_empty() {
        return Err(GNewsError::InvalidQuery("query must not be empty after sanitization".into()));
    }

    let len = q.chars().count();
    if len > MAX_QUERY_LEN {
        return Err(GNewsError::InvalidQuery(format!("query too long: {} chars (max {})", len, MAX_QUERY_LEN)));
    }

    Ok(q)
}

/// Validate the max-articles parameter.
///
/// # Errors
///
/// Returns `GNewsError::InvalidMax` unless `max` is in [1, 100].
pub fn validate_max(max: u32) -> Result<u32, GNewsError> {
    if !(1..=100).contains(&max) {
        return Err(GNewsError::InvalidMax(max));
    }
    Ok(max)
}

/// Query parameters for the GNews Search endpoint.
///
/// Serialized directly into the request query string; absent options are
/// omitted entirely, never sent as empty values.
#[derive(Debug, Clone, Serialize)]
pub struct SearchRequest {
    /// Sanitized query text.
    pub q: String,

    /// Language code, e.g. "en".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,

    /// 2-letter country code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    /// Number of articles (1-100).
    pub max: u32,

    /// Restrict matching to titles ("title") when set.
    #[serde(rename = "in", skip_serializing_if = "Option::is_none")]
    pub in_fields: Option<String>,
}

/// Query parameters for the GNews Top Headlines endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct HeadlinesRequest {
    /// Language code, e.g. "en".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,

    /// 2-letter country code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    /// Category: general, world, nation, business, technology,
    /// entertainment, sports, science, health.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// Number of articles (1-100).
    pub max: u32,
}

impl SearchRequest {
    /// Validate the request parameters.
    pub fn validate(&self) -> Result<(), GNewsError> {
        if self.q.is_empty() {
            return Err(GNewsError::InvalidQuery("query must not be empty".into()));
        }
        if self.q.chars().count() > MAX_QUERY_LEN {
            return Err(GNewsError::InvalidQuery(format!(
                "query too long: {} chars (max {})",
                self.q.chars().count(),
                MAX_QUERY_LEN
            )));
        }
        validate_max(self.max)?;
        Ok(())
    }

    /// Canonical JSON of the validated parameters, used for cache keys.
    pub fn params_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

impl HeadlinesRequest {
    /// Validate the request parameters.
    pub fn validate(&self) -> Result<(), GNewsError> {
        validate_max(self.max)?;
        Ok(())
    }

    /// Canonical JSON of the validated parameters, used for cache keys.
    pub fn params_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}
