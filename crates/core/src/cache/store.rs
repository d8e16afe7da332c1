//! Persistent tier operations for cached news responses.
//!
//! Entries are immutable once stored; freshness is decided by the
//! `expires_at` column, so a lookup never returns an expired row.

use super::connection::CacheDb;
use crate::Error;
use chrono::{Duration, Utc};
use tokio_rusqlite::params;

impl CacheDb {
    /// Get a cached response by key hash, only if it has not expired.
    ///
    /// Returns None for both missing and expired entries.
    pub async fn get_fresh(&self, key_hash: &str) -> Result<Option<String>, Error> {
        let key_hash = key_hash.to_string();
        let now = Utc::now().to_rfc3339();
        self.conn
            .call(move |conn| -> Result<Option<String>, Error> {
                let mut stmt =
                    conn.prepare("SELECT response_json FROM news_cache WHERE key_hash = ?1 AND expires_at > ?2")?;

                let result = stmt.query_row(params![key_hash, now], |row| row.get(0));

                match result {
                    Ok(json) => Ok(Some(json)),
                    Err(tokio_rusqlite::rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                    Err(e) => Err(e.into()),
                }
            })
            .await
            .map_err(Error::from)
    }

    /// Insert or update a cached response.
    ///
    /// Uses UPSERT semantics: inserts if the key doesn't exist, updates all
    /// fields if it does. The expiration deadline is assigned here, at
    /// insertion time.
    pub async fn put(
        &self, key_hash: &str, endpoint: &str, query_json: &str, response_json: &str, ttl_seconds: i64,
    ) -> Result<(), Error> {
        let key_hash = key_hash.to_string();
        let endpoint = endpoint.to_string();
        let query_json = query_json.to_string();
        let response_json = response_json.to_string();

        let fetched_at = Utc::now().to_rfc3339();
        let expires_at = (Utc::now() + Duration::seconds(ttl_seconds)).to_rfc3339();

        self.conn
            .call(move |conn| -> Result<(), Error> {
                conn.execute(
                    "INSERT INTO news_cache (key_hash, endpoint, query_json, response_json, fetched_at, expires_at)
                    VALUES (?1, ?2, ?3, ?4, ?5, ?6)
                    ON CONFLICT(key_hash) DO UPDATE SET
                        endpoint = excluded.endpoint,
                        query_json = excluded.query_json,
                        response_json = excluded.response_json,
                        fetched_at = excluded.fetched_at,
                        expires_at = excluded.expires_at",
                    params![key_hash, endpoint, query_json, response_json, fetched_at, expires_at],
                )?;
                Ok(())
            })
            .await
            .map_err(Error::from)
    }

    /// Delete expired cache entries.
    ///
    /// Returns the number of deleted entries.
    pub async fn purge_expired(&self) -> Result<u64, Error> {
        let now = Utc::now().to_rfc3339();
        self.conn
            .call(move |conn| -> Result<u64, Error> {
                let count = conn.execute("DELETE FROM news_cache WHERE expires_at < ?1", params![now])?;
                Ok(count as u64)
            })
            .await
            .map_err(Error::from)
    }
}
