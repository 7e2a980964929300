use axum::routing::get;
use axum::Router;
use tracing_subscriber::EnvFilter;

use repo_scout::api;
use repo_scout::config::Config;
use repo_scout::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env();
    tracing::info!("Catalog: {} (user {})", config.catalog_base_url, config.catalog_user);
    tracing::info!(
        "Fetch pacing: {}ms, cache TTL: {}s",
        config.fetch_delay_ms,
        config.cache_ttl_secs
    );

    let state = AppState::new(config.clone())?;

    let app = Router::new()
        .route("/", get(api::search_page))
        .route("/partial-search", get(api::partial_search))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;
    Ok(())
}
