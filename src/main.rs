use std::sync::Arc;

use axum::response::Html;
use axum::routing::get;
use tracing_subscriber::EnvFilter;

use movie_search::api;
use movie_search::config::Config;
use movie_search::state::AppState;
use movie_search::weaviate::WeaviateClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Fails before any network attempt when credentials are missing
    let config = Config::from_env()?;
    tracing::info!("Weaviate cluster: {}", config.weaviate.url);

    let client = Arc::new(WeaviateClient::connect(&config.weaviate).await?);
    let served = serve(config, Arc::clone(&client)).await;

    // The router owned the only other handle and is gone once serve returns
    match Arc::try_unwrap(client) {
        Ok(client) => client.close(),
        Err(client) => tracing::warn!(
            "Weaviate session to {} still shared at shutdown",
            client.base_url()
        ),
    }
    served
}

async fn serve(config: Config, client: Arc<WeaviateClient>) -> anyhow::Result<()> {
    let state = AppState::new(config.clone(), client);

    let app = api::router(state)
        .route("/", get(serve_index))
        .fallback(get(serve_index));

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}

async fn serve_index() -> Html<&'static str> {
    Html(include_str!("../static/index.html"))
}
