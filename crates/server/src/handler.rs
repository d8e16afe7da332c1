//! MCP server handler implementation.
//!
//! This module defines the main server handler that
//! routes tool calls to the appropriate implementations.
use crate::service::NewsService;
use crate::tools::search_news::{SearchNewsParams, search_impl};
use crate::tools::top_headlines::{TopHeadlinesParams, headlines_impl};

use std::sync::Arc;

use rmcp::{
    ErrorData as McpError, ServerHandler,
    handler::server::{
        tool::{ToolCallContext, ToolRouter},
        wrapper::Parameters,
    },
    model::{
        CallToolRequestParam, CallToolResult, Implementation, ListToolsResult, PaginatedRequestParam, ProtocolVersion,
        ServerCapabilities, ServerInfo,
    },
    service::{RequestContext, RoleServer},
    tool, tool_router,
};

/// The main MCP server handler for mcp-gnews.
#[derive(Clone)]
pub struct GNewsServer {
    service: Arc<NewsService>,
    tool_router: ToolRouter<Self>,
}

/// Tool router implementation using the #[tool_router] macro.
///
/// This macro generates the routing logic that maps tool names to handler methods.
#[tool_router]
impl GNewsServer {
    /// Create a new server handler around a service instance.
    pub fn new(service: NewsService) -> Self {
        Self { service: Arc::new(service), tool_router: Self::tool_router() }
    }

    /// Search news articles via the GNews Search endpoint.
    #[tool(
        description = "Search news articles via GNews. Returns the total match count and a normalized article list."
    )]
    async fn search_news(&self, params: Parameters<SearchNewsParams>) -> Result<CallToolResult, McpError> {
        search_impl(&self.service, params.0).await
    }

    /// Fetch current top headlines via the GNews Top Headlines endpoint.
    #[tool(
        description = "Fetch top headlines via GNews, optionally filtered by language, country, and category."
    )]
    async fn top_headlines(&self, params: Parameters<TopHeadlinesParams>) -> Result<CallToolResult, McpError> {
        headlines_impl(&self.service, params.0).await
    }
}

impl ServerHandler for GNewsServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            server_info: Implementation {
                name: "mcp-gnews".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                ..Default::default()
            },
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }

    async fn list_tools(
        &self, _request: Option<PaginatedRequestParam>, _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, rmcp::model::ErrorData> {
        Ok(ListToolsResult { meta: None, tools: self.tool_router.list_all(), next_cursor: None })
    }

    async fn call_tool(
        &self, request: CallToolRequestParam, context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, rmcp::model::ErrorData> {
        self.tool_router
            .call(ToolCallContext::new(self, request, context))
            .await
    }
}
