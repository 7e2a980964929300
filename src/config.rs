use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server bind address
    pub bind_addr: String,
    /// Base URL of the upstream catalog API
    pub catalog_base_url: String,
    /// Account whose repositories are searched
    pub catalog_user: String,
    /// Candidate page size requested from the catalog
    pub per_page: u32,
    /// Attempts per catalog page request before giving up
    pub catalog_retry_attempts: u32,
    /// Per-request timeout for the README fetch, in seconds
    pub fetch_timeout_secs: u64,
    /// Minimum pause before each README fetch, in milliseconds
    pub fetch_delay_ms: u64,
    /// Lifetime of cached records, in seconds
    pub cache_ttl_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:9000".to_string(),
            catalog_base_url: "https://api.github.com".to_string(),
            catalog_user: "octocat".to_string(),
            per_page: 5,
            catalog_retry_attempts: 6,
            fetch_timeout_secs: 10,
            fetch_delay_ms: 1000,
            cache_ttl_secs: 300,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(addr) = std::env::var("REPO_SCOUT_BIND_ADDR") {
            config.bind_addr = addr;
        }
        if let Ok(url) = std::env::var("REPO_SCOUT_CATALOG_URL") {
            config.catalog_base_url = url;
        }
        if let Ok(user) = std::env::var("REPO_SCOUT_CATALOG_USER") {
            config.catalog_user = user;
        }
        if let Ok(val) = std::env::var("REPO_SCOUT_PER_PAGE") {
            if let Ok(v) = val.parse() {
                config.per_page = v;
            }
        }
        if let Ok(val) = std::env::var("REPO_SCOUT_CATALOG_RETRIES") {
            if let Ok(v) = val.parse() {
                config.catalog_retry_attempts = v;
            }
        }
        if let Ok(val) = std::env::var("REPO_SCOUT_FETCH_TIMEOUT_SECS") {
            if let Ok(v) = val.parse() {
                config.fetch_timeout_secs = v;
            }
        }
        if let Ok(val) = std::env::var("REPO_SCOUT_FETCH_DELAY_MS") {
            if let Ok(v) = val.parse() {
                config.fetch_delay_ms = v;
            }
        }
        if let Ok(val) = std::env::var("REPO_SCOUT_CACHE_TTL_SECS") {
            if let Ok(v) = val.parse() {
                config.cache_ttl_secs = v;
            }
        }

        config
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }

    pub fn fetch_delay(&self) -> Duration {
        Duration::from_millis(self.fetch_delay_ms)
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }
}
