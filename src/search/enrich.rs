//! Per-repository enrichment: cache probe, self-repair, paced fetch,
//! write-back, render.

use std::collections::BTreeSet;

use crate::cache::CacheStore;
use crate::fetch::{DocumentFetcher, FetchOutcome, NO_README_SENTINEL};
use crate::models::{RepoRecord, RepoSummary};
use crate::render;

use super::limiter::FetchPacer;

/// Cache key of the index set listing every repository believed cached.
pub const INDEX_KEY: &str = "records";

/// Enrich one candidate repository into a rendered fragment.
///
/// Returns `None` both when the repository doesn't match the query and when
/// the fetch fails; a single repository's trouble never aborts the page.
///
/// Cached repositories are returned without reapplying the query filter:
/// once a repository has been surfaced for any query, later searches return
/// it until the cache evicts it. Memoization is keyed on the repository, not
/// on the query.
pub async fn enrich_repo(
    cache: &dyn CacheStore,
    fetcher: &dyn DocumentFetcher,
    pacer: &FetchPacer,
    summary: &RepoSummary,
    query: &str,
) -> Option<String> {
    let key = summary.full_name.as_str();

    // ── Cache-index probe ────────────────────────────────────
    let mut index = read_index(cache).await;
    if index.contains(key) {
        match cache.get(key).await {
            Some(raw) => match RepoRecord::from_cache_value(&raw) {
                Ok(record) => return Some(render::repo_fragment(&record)),
                Err(e) => {
                    tracing::warn!("Cached record for {key} is invalid, dropping it: {e:#}");
                    repair_index(cache, &mut index, key).await;
                }
            },
            None => {
                tracing::warn!("Cache index lists {key} but the record is gone, repairing");
                repair_index(cache, &mut index, key).await;
            }
        }
    }

    // ── Query filter ─────────────────────────────────────────
    if !summary
        .haystack()
        .to_lowercase()
        .contains(&query.to_lowercase())
    {
        return None;
    }

    // ── Paced fetch ──────────────────────────────────────────
    let outcome = {
        let _slot = pacer.acquire().await;
        fetcher.fetch(key).await
    };

    let readme = match outcome {
        Ok(FetchOutcome::Content(text)) => text,
        Ok(FetchOutcome::NotFound) => NO_README_SENTINEL.to_string(),
        Err(e) => {
            tracing::warn!("Readme fetch failed for {key}: {e:#}");
            return None;
        }
    };

    // ── Write-back ───────────────────────────────────────────
    let record = RepoRecord::new(summary, readme);
    match record.to_cache_value() {
        Ok(raw) => {
            // Re-read the index: another task may have grown it since the
            // probe above. Concurrent writers can still race, which the
            // repair path tolerates on a later read.
            let mut index = read_index(cache).await;
            index.insert(key.to_string());
            write_index(cache, &index).await;
            cache.set(key, raw).await;
        }
        Err(e) => {
            tracing::warn!("Could not serialize record for {key}, skipping cache: {e:#}");
        }
    }

    Some(render::repo_fragment(&record))
}

/// Read-or-initialize the index set. An unreadable index value is treated as
/// empty rather than an error; the next write-back repopulates it.
async fn read_index(cache: &dyn CacheStore) -> BTreeSet<String> {
    let raw = cache.get_or_set(INDEX_KEY, "[]".to_string()).await;
    match serde_json::from_str(&raw) {
        Ok(keys) => keys,
        Err(e) => {
            tracing::warn!("Cache index is unreadable, starting empty: {e}");
            BTreeSet::new()
        }
    }
}

async fn write_index(cache: &dyn CacheStore, index: &BTreeSet<String>) {
    match serde_json::to_string(index) {
        Ok(raw) => cache.set(INDEX_KEY, raw).await,
        Err(e) => tracing::warn!("Could not serialize cache index: {e}"),
    }
}

/// Drop a key whose record turned out missing or invalid: persist the
/// corrected index and delete the entry so the caller can treat the
/// repository as uncached.
async fn repair_index(cache: &dyn CacheStore, index: &mut BTreeSet<String>, key: &str) {
    index.remove(key);
    write_index(cache, index).await;
    cache.delete(key).await;
}
