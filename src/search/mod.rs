//! The search pipeline: fan one enrichment task out per candidate
//! repository, join them in input order, and concatenate the fragments.

use anyhow::Result;
use std::sync::Arc;
use std::time::Duration;

use crate::cache::CacheStore;
use crate::catalog;
use crate::fetch::DocumentFetcher;
use crate::models::RepoSummary;
use crate::state::AppState;

pub mod enrich;
pub mod limiter;

use limiter::FetchPacer;

/// Run one search call: fetch the candidate page from the catalog, then
/// enrich it. Catalog failure is the only error that propagates; everything
/// past the page fetch is fail-soft per repository.
pub async fn run_search(
    state: &AppState,
    query: &str,
    page: u32,
    per_page: u32,
) -> Result<String> {
    let items = catalog::fetch_page(&state.http_client, &state.config, page, per_page).await?;
    tracing::info!(
        "Catalog page {page} returned {} candidates for query {query:?}",
        items.len()
    );

    Ok(enrich_page(
        state.cache.clone(),
        state.fetcher.clone(),
        state.config.fetch_delay(),
        items,
        query,
    )
    .await)
}

/// Enrich a page of candidates concurrently.
///
/// One task per candidate, all sharing a single pacer scoped to this call.
/// Results are collected in spawn order, so the response always lists
/// repositories in catalog order no matter which fetch finishes first. A
/// task that fails or panics contributes nothing; the rest of the page is
/// unaffected.
pub async fn enrich_page(
    cache: Arc<dyn CacheStore>,
    fetcher: Arc<dyn DocumentFetcher>,
    fetch_delay: Duration,
    items: Vec<RepoSummary>,
    query: &str,
) -> String {
    let pacer = Arc::new(FetchPacer::new(fetch_delay));

    let mut handles = Vec::with_capacity(items.len());
    for item in items {
        let cache = cache.clone();
        let fetcher = fetcher.clone();
        let pacer = pacer.clone();
        let query = query.to_string();
        handles.push(tokio::spawn(async move {
            enrich_repo(cache.as_ref(), fetcher.as_ref(), &pacer, &item, &query).await
        }));
    }

    let mut units = Vec::with_capacity(handles.len());
    for handle in handles {
        match handle.await {
            Ok(unit) => units.push(unit),
            Err(e) => {
                tracing::error!("Enrichment task failed: {e}");
                units.push(None);
            }
        }
    }

    units.into_iter().flatten().collect::<Vec<_>>().join("\n")
}

pub use enrich::enrich_repo;
