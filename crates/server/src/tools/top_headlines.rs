//! top_headlines tool implementation.
//!
//! Fetches current headlines through the GNews Top Headlines endpoint with
//! two-tier caching.

use rmcp::{ErrorData as McpError, model::*};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::service::NewsService;

/// Input parameters for the top_headlines tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct TopHeadlinesParams {
    /// Language code, e.g. "en".
    #[serde(default)]
    pub lang: Option<String>,

    /// 2-letter country code.
    #[serde(default)]
    pub country: Option<String>,

    /// Category: general, world, nation, business, technology,
    /// entertainment, sports, science, health.
    #[serde(default)]
    pub category: Option<String>,

    /// Max articles to return (1-100, default 10).
    #[serde(default = "default_max")]
    pub max: u32,
}

fn default_max() -> u32 {
    10
}

/// Implementation of the top_headlines tool.
pub async fn headlines_impl(service: &NewsService, params: TopHeadlinesParams) -> Result<CallToolResult, McpError> {
    let response = service.top_headlines(params).await.map_err(McpError::from)?;

    Ok(CallToolResult::success(vec![Content::text(
        serde_json::to_string_pretty(&response).unwrap_or_default(),
    )]))
}
