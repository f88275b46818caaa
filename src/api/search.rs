use axum::Json;
use axum::extract::State;

use crate::api::extract::ApiJson;
use crate::catalog::query::{MovieQuery, RatingRange};
use crate::error::ApiError;
use crate::models::{SearchRequest, SearchResponse};
use crate::render::movie_blocks;
use crate::state::AppState;

/// POST /api/search - Search panel:
///   1. Validate the rating range (always applied, inclusive)
///   2. Empty text lists movies; otherwise vector or hybrid search
///   3. Render up to 5 movies with their synopsis
pub async fn search(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<SearchRequest>,
) -> Result<Json<SearchResponse>, ApiError> {
    let rating = RatingRange::new(req.min_rating, req.max_rating)?;
    let query = MovieQuery::build(&req.query, req.mode, rating)?;

    tracing::info!(
        "Search ({}) rating {}..={}",
        query.retrieval.label(),
        rating.low(),
        rating.high()
    );

    let mut movies = state.catalog.search(&query).await?;
    movies.truncate(query.limit);

    Ok(Json(SearchResponse {
        query: req.query.trim().to_string(),
        mode: query.retrieval.label(),
        blocks: movie_blocks(&movies),
        movies,
    }))
}
