//! Request orchestration for the news tools.
//!
//! `NewsService` owns the per-tool cache tiers and the configuration, and
//! runs the cache-then-fetch protocol: validate, check memory, check the
//! persistent tier, fetch upstream, normalize, populate both tiers.

use std::future::Future;
use std::path::Path;
use std::time::Duration;

use gnews_client::{
    GNewsClient, GNewsConfig, GNewsError, HeadlinesRequest, NewsResponse, SearchRequest, sanitize_query, validate_max,
};
use gnews_core::cache::hash::cache_key;
use gnews_core::{AppConfig, CacheDb, Error, MemoryCache};

use crate::tools::{SearchNewsParams, TopHeadlinesParams};

const SEARCH_CACHE_CAPACITY: u64 = 256;
const SEARCH_CACHE_TTL: Duration = Duration::from_secs(60);
const SEARCH_DISK_TTL_SECS: i64 = 60;

const HEADLINE_CACHE_CAPACITY: u64 = 64;
const HEADLINE_CACHE_TTL: Duration = Duration::from_secs(30);
const HEADLINE_DISK_TTL_SECS: i64 = 30;

/// Service instance owning the cache tiers for both tools.
///
/// The persistent tier is optional: when the configured directory cannot be
/// opened the service degrades to memory-only caching and keeps serving.
#[derive(Clone)]
pub struct NewsService {
    config: AppConfig,
    db: Option<CacheDb>,
    search_cache: MemoryCache<NewsResponse>,
    headline_cache: MemoryCache<NewsResponse>,
}

impl NewsService {
    /// Build a service from configuration, opening the persistent tier if a
    /// cache directory is configured.
    ///
    /// A persistent-tier failure is a degraded-capability condition, not an
    /// error: it is logged and the service continues memory-only.
    pub async fn new(config: AppConfig) -> Self {
        let db = match &config.cache_dir {
            Some(dir) => match open_disk_cache(dir).await {
                Ok(db) => {
                    tracing::info!("persistent cache enabled at {}", dir.display());
                    Some(db)
                }
                Err(e) => {
                    tracing::warn!("persistent cache unavailable, continuing memory-only: {e}");
                    None
                }
            },
            None => None,
        };

        Self::from_parts(config, db)
    }

    pub(crate) fn from_parts(config: AppConfig, db: Option<CacheDb>) -> Self {
        Self {
            config,
            db,
            search_cache: MemoryCache::new(SEARCH_CACHE_CAPACITY, SEARCH_CACHE_TTL),
            headline_cache: MemoryCache::new(HEADLINE_CACHE_CAPACITY, HEADLINE_CACHE_TTL),
        }
    }

    /// Run the search_news protocol: sanitize, validate, cache-then-fetch.
    pub async fn search_news(&self, params: SearchNewsParams) -> Result<NewsResponse, Error> {
        let q = sanitize_query(&params.q).map_err(map_client_err)?;
        let max = validate_max(params.max).map_err(map_client_err)?;

        let req = SearchRequest {
            q,
            lang: params.lang,
            country: params.country,
            max,
            in_fields: params.in_title.then(|| "title".to_string()),
        };

        let params_json = req.params_json();
        let key = cache_key("search", &params_json);

        self.run_cached(&self.search_cache, "search", &key, SEARCH_DISK_TTL_SECS, params_json, move |client| {
            async move { client.search(&req).await }
        })
        .await
    }

    /// Run the top_headlines protocol: validate, cache-then-fetch.
    pub async fn top_headlines(&self, params: TopHeadlinesParams) -> Result<NewsResponse, Error> {
        let max = validate_max(params.max).map_err(map_client_err)?;

        let req = HeadlinesRequest { lang: params.lang, country: params.country, category: params.category, max };

        let params_json = req.params_json();
        let key = cache_key("top-headlines", &params_json);

        self.run_cached(
            &self.headline_cache,
            "top-headlines",
            &key,
            HEADLINE_DISK_TTL_SECS,
            params_json,
            move |client| async move { client.top_headlines(&req).await },
        )
        .await
    }

    /// Cache-then-fetch for one endpoint.
    ///
    /// Memory tier first, then the persistent tier (repopulating memory on a
    /// hit), then a single upstream fetch whose result populates both tiers.
    /// Persistent-tier failures on this path are logged and ignored.
    async fn run_cached<F, Fut>(
        &self, cache: &MemoryCache<NewsResponse>, endpoint: &str, key: &str, disk_ttl_secs: i64, query_json: String,
        fetch: F,
    ) -> Result<NewsResponse, Error>
    where
        F: FnOnce(GNewsClient) -> Fut,
        Fut: Future<Output = Result<NewsResponse, GNewsError>>,
    {
        if let Some(hit) = cache.get(key).await {
            tracing::debug!("memory cache hit for {endpoint}");
            return Ok(hit);
        }

        if let Some(db) = &self.db {
            match db.get_fresh(key).await {
                Ok(Some(json)) => {
                    if let Ok(response) = serde_json::from_str::<NewsResponse>(&json) {
                        tracing::debug!("persistent cache hit for {endpoint}");
                        cache.insert(key.to_string(), response.clone()).await;
                        return Ok(response);
                    }
                }
                Ok(None) => {}
                Err(e) => tracing::warn!("persistent cache lookup failed: {e}"),
            }
        }

        let client = self.client()?;
        let response = fetch(client).await.map_err(map_client_err)?;

        cache.insert(key.to_string(), response.clone()).await;

        if let Some(db) = &self.db {
            let response_json = serde_json::to_string(&response).unwrap_or_default();
            if let Err(e) = db.put(key, endpoint, &query_json, &response_json, disk_ttl_secs).await {
                tracing::warn!("failed to write persistent cache: {e}");
            }
        }

        Ok(response)
    }

    /// Build an upstream client, resolving the credential at use time.
    fn client(&self) -> Result<GNewsClient, Error> {
        let api_key = self
            .config
            .require_api_key()
            .map_err(|e| Error::MissingCredential(e.to_string()))?;

        GNewsClient::new(GNewsConfig {
            api_key: api_key.to_string(),
            base_url: self.config.base_url.clone(),
            timeout: self.config.timeout(),
            user_agent: self.config.user_agent.clone(),
        })
        .map_err(map_client_err)
    }
}

async fn open_disk_cache(dir: &Path) -> anyhow::Result<CacheDb> {
    tokio::fs::create_dir_all(dir).await?;
    let db = CacheDb::open(dir.join("gnews-cache.sqlite")).await?;

    let purged = db.purge_expired().await?;
    if purged > 0 {
        tracing::debug!("purged {purged} expired persistent cache entries");
    }

    Ok(db)
}

/// Map client-level failures onto the unified error taxonomy.
fn map_client_err(err: GNewsError) -> Error {
    match err {
        GNewsError::MissingApiKey => Error::MissingCredential("GNews API key is not configured".into()),
        GNewsError::InvalidQuery(msg) => Error::InvalidInput(format!("invalid query: {msg}")),
        GNewsError::InvalidMax(v) => {
            Error::InvalidInput(format!("parameter 'max' must be between 1 and 100 inclusive, got {v}"))
        }
        GNewsError::Upstream { status, body } => Error::Upstream(format!("GNews API error {status}: {body}")),
        GNewsError::Timeout => Error::Timeout("upstream request timed out".into()),
        GNewsError::Network(e) => Error::Upstream(format!("network error: {e}")),
        GNewsError::Parse(msg) => Error::Upstream(format!("invalid upstream response: {msg}")),
    }
}
