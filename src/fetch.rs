//! The expensive per-repository fetch: retrieving a README document.

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::StatusCode;
use std::time::Duration;

/// Placeholder content cached for repositories without a README. A missing
/// README is a valid answer from the catalog, not a failure.
pub const NO_README_SENTINEL: &str = "Sin README";

/// Outcome of a successful document fetch. "Not found" is part of the
/// success space; transport and server errors surface as `Err`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    Content(String),
    NotFound,
}

/// Retrieves the long-form document for one repository.
#[async_trait]
pub trait DocumentFetcher: Send + Sync {
    async fn fetch(&self, full_name: &str) -> Result<FetchOutcome>;
}

/// Fetches rendered READMEs from the catalog API.
pub struct ReadmeFetcher {
    client: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl ReadmeFetcher {
    pub fn new(client: reqwest::Client, base_url: String, timeout: Duration) -> Self {
        Self {
            client,
            base_url,
            timeout,
        }
    }
}

#[async_trait]
impl DocumentFetcher for ReadmeFetcher {
    async fn fetch(&self, full_name: &str) -> Result<FetchOutcome> {
        let url = format!("{}/repos/{}/readme", self.base_url, full_name);

        let resp = self
            .client
            .get(&url)
            .header("Accept", "application/vnd.github.html")
            .timeout(self.timeout)
            .send()
            .await
            .context("Failed to call readme endpoint")?;

        let status = resp.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(FetchOutcome::NotFound);
        }
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            anyhow::bail!("Readme endpoint returned {status}: {body}");
        }

        let content = resp.text().await.context("Failed to read readme body")?;
        Ok(FetchOutcome::Content(content))
    }
}
