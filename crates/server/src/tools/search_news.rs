//! search_news tool implementation.
//!
//! Searches news articles through the GNews Search endpoint with two-tier
//! caching.

use rmcp::{ErrorData as McpError, model::*};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::service::NewsService;

/// Input parameters for the search_news tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SearchNewsParams {
    /// Search query text (required).
    pub q: String,

    /// Language code, e.g. "en".
    #[serde(default)]
    pub lang: Option<String>,

    /// 2-letter country code.
    #[serde(default)]
    pub country: Option<String>,

    /// Max articles to return (1-100, default 10).
    #[serde(default = "default_max")]
    pub max: u32,

    /// If true, restrict search to article titles.
    #[serde(default)]
    pub in_title: bool,
}

fn default_max() -> u32 {
    10
}

/// Implementation of the search_news tool.
pub async fn search_impl(service: &NewsService, params: SearchNewsParams) -> Result<CallToolResult, McpError> {
    let response = service.search_news(params).await.map_err(McpError::from)?;

    Ok(CallToolResult::success(vec![Content::text(
        serde_json::to_string_pretty(&response).unwrap_or_default(),
    )]))
}
