use std::sync::Arc;

use crate::cache::{CacheStore, MemoryCache};
use crate::config::Config;
use crate::fetch::{DocumentFetcher, ReadmeFetcher};

/// Shared application state. Built once at startup; the cache and fetcher
/// handles are shared by every search call for the life of the process.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub http_client: reqwest::Client,
    pub cache: Arc<dyn CacheStore>,
    pub fetcher: Arc<dyn DocumentFetcher>,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let http_client = reqwest::Client::builder()
            // The catalog API rejects requests without a User-Agent.
            .user_agent(concat!("repo-scout/", env!("CARGO_PKG_VERSION")))
            .connect_timeout(std::time::Duration::from_secs(10))
            .build()?;

        let cache = Arc::new(MemoryCache::new(config.cache_ttl()));
        let fetcher = Arc::new(ReadmeFetcher::new(
            http_client.clone(),
            config.catalog_base_url.clone(),
            config.fetch_timeout(),
        ));

        Ok(Self {
            config,
            http_client,
            cache,
            fetcher,
        })
    }
}
