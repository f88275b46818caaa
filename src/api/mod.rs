pub mod extract;
pub mod movies;
pub mod recommend;
pub mod search;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};

use crate::state::AppState;

/// One route per UI panel, plus a health probe.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/search", post(search::search))
        .route("/api/movies/{row}", get(movies::movie_detail))
        .route("/api/recommend", post(recommend::recommend))
        .with_state(state)
}

async fn health() -> StatusCode {
    StatusCode::OK
}
