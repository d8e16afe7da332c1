//! Two-tier cache for normalized news responses.
//!
//! The memory tier is a bounded moka cache with a fixed time-to-live per
//! cache instance. The persistent tier is SQLite with async access via
//! tokio-rusqlite and supports:
//!
//! - Key-addressed storage using SHA-256 hashing over validated parameters
//! - Automatic schema migrations
//! - WAL mode for concurrent access
//! - Expired-entry purging

pub mod connection;
pub mod hash;
pub mod memory;
pub mod migrations;
pub mod store;

pub use crate::Error;

pub use connection::CacheDb;
pub use memory::MemoryCache;
