//! HTTP client for the GNews API.
//!
//! Handles request validation, query sanitization, the authenticated GET to
//! the provider, and normalization of the raw article payload.

pub mod gnews;

pub use gnews::{
    Article, GNewsClient, GNewsConfig, GNewsError, HeadlinesRequest, NewsResponse, SearchRequest, sanitize_query,
    validate_max,
};
