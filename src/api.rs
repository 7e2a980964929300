//! HTTP handlers: the search landing page and the partial-search fragment.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::Html;
use serde::Deserialize;

use crate::search;
use crate::state::AppState;

/// Page size is capped so one request can't fan out across a huge page of
/// paced fetches.
const MAX_PER_PAGE: u32 = 5;

#[derive(Debug, Clone, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
    #[serde(default = "default_page")]
    pub page: u32,
    /// Falls back to the configured page size when absent.
    pub per_page: Option<u32>,
}

fn default_page() -> u32 {
    1
}

/// GET / - Search landing page
pub async fn search_page() -> Html<&'static str> {
    Html(include_str!("../static/index.html"))
}

/// GET /partial-search - Enriched results for one catalog page
pub async fn partial_search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Html<String>, (StatusCode, String)> {
    let query = params.q.trim();
    if query.is_empty() {
        return Ok(Html("Empty query".to_string()));
    }

    let page = params.page.max(1);
    let per_page = params
        .per_page
        .unwrap_or(state.config.per_page)
        .clamp(1, MAX_PER_PAGE);

    let body = search::run_search(&state, query, page, per_page)
        .await
        .map_err(|e| {
            tracing::error!("Search failed: {e:#}");
            (StatusCode::BAD_GATEWAY, format!("Search failed: {e:#}"))
        })?;

    Ok(Html(body))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_params_default_page_and_per_page() {
        let params: SearchParams = serde_json::from_str(r#"{"q":"rust"}"#).unwrap();
        assert_eq!(params.page, 1);
        assert!(params.per_page.is_none());
    }

    #[tokio::test]
    async fn test_blank_query_short_circuits() {
        let state = AppState::new(crate::config::Config::default()).unwrap();
        let params = SearchParams {
            q: "   ".to_string(),
            page: 1,
            per_page: None,
        };
        let Html(body) = partial_search(State(state), Query(params)).await.unwrap();
        assert_eq!(body, "Empty query");
    }
}
