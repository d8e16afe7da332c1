//! MCP tool implementations.
//!
//! This module contains the two tools exposed by the mcp-gnews server.

pub mod search_news;
pub mod top_headlines;

pub use search_news::SearchNewsParams;
pub use top_headlines::TopHeadlinesParams;
