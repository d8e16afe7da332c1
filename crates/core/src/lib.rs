//! Core types and shared functionality for mcp-gnews.
//!
//! This crate provides:
//! - Two-tier cache implementation (in-memory TTL tier + SQLite tier)
//! - Unified error types
//! - Configuration structures

pub mod cache;
pub mod config;
pub mod error;

pub use cache::{CacheDb, MemoryCache};
pub use config::AppConfig;
pub use error::Error;
