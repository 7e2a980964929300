//! Client for the upstream repository catalog.

use anyhow::{Context, Result};

use crate::config::Config;
use crate::models::RepoSummary;

/// Fetch one page of a user's repositories.
///
/// The catalog occasionally answers with transient errors, so the request is
/// retried up to `catalog_retry_attempts` times before the last error is
/// returned. An empty page is a normal outcome, not an error.
pub async fn fetch_page(
    client: &reqwest::Client,
    config: &Config,
    page: u32,
    per_page: u32,
) -> Result<Vec<RepoSummary>> {
    let url = format!(
        "{}/users/{}/repos?page={}&per_page={}",
        config.catalog_base_url, config.catalog_user, page, per_page
    );

    let mut attempts_left = config.catalog_retry_attempts.max(1);
    loop {
        match fetch_page_once(client, &url).await {
            Ok(items) => return Ok(items),
            Err(e) => {
                attempts_left -= 1;
                if attempts_left == 0 {
                    return Err(e);
                }
                tracing::warn!(
                    "Catalog page fetch failed ({} attempts left): {e:#}",
                    attempts_left
                );
            }
        }
    }
}

async fn fetch_page_once(client: &reqwest::Client, url: &str) -> Result<Vec<RepoSummary>> {
    let resp = client
        .get(url)
        .send()
        .await
        .context("Failed to call catalog API")?;

    if !resp.status().is_success() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        anyhow::bail!("Catalog API returned {status}: {body}");
    }

    resp.json::<Vec<RepoSummary>>()
        .await
        .context("Failed to parse catalog page")
}

#[cfg(test)]
mod tests {
    use crate::models::RepoSummary;

    #[test]
    fn test_catalog_row_deserializes_ignoring_extra_fields() {
        let raw = r#"{
            "id": 1296269,
            "full_name": "octocat/hello-world",
            "description": "My first repo",
            "html_url": "https://github.com/octocat/hello-world",
            "fork": false,
            "stargazers_count": 80
        }"#;
        let summary: RepoSummary = serde_json::from_str(raw).unwrap();
        assert_eq!(summary.full_name, "octocat/hello-world");
        assert_eq!(summary.description.as_deref(), Some("My first repo"));
    }

    #[test]
    fn test_catalog_row_accepts_null_description() {
        let raw = r#"{
            "full_name": "octocat/spoon-knife",
            "description": null,
            "html_url": "https://github.com/octocat/spoon-knife"
        }"#;
        let summary: RepoSummary = serde_json::from_str(raw).unwrap();
        assert!(summary.description.is_none());
    }
}
