//! Cache key generation.
//!
//! Keys are derived from the endpoint name plus the canonical JSON of the
//! already-validated request parameters, so two raw inputs that sanitize to
//! the same parameters always map to the same entry.

use sha2::{Digest, Sha256};

/// Compute the cache key for a request against one endpoint.
pub fn cache_key(endpoint: &str, params_json: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(endpoint.as_bytes());
    hasher.update(b"\n");
    hasher.update(params_json.as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_stability() {
        let hash1 = cache_key("search", r#"{"q":"rust","max":10}"#);
        let hash2 = cache_key("search", r#"{"q":"rust","max":10}"#);
        assert_eq!(hash1, hash2);
    }

    #[test]
    fn test_hash_different_endpoint() {
        let search = cache_key("search", r#"{"max":10}"#);
        let headlines = cache_key("top-headlines", r#"{"max":10}"#);
        assert_ne!(search, headlines);
    }

    #[test]
    fn test_hash_different_params() {
        let hash1 = cache_key("search", r#"{"q":"rust","max":10}"#);
        let hash2 = cache_key("search", r#"{"q":"rust","max":20}"#);
        assert_ne!(hash1, hash2);
    }

    #[test]
    fn test_hash_format() {
        let hash = cache_key("search", r#"{"q":"rust"}"#);
        assert_eq!(hash.len(), 64);
        assert!(hash.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
