use axum::Json;
use axum::extract::{Path, State};

use crate::catalog::movie_uuid;
use crate::error::ApiError;
use crate::models::MovieDetailResponse;
use crate::render::movie_block;
use crate::state::AppState;

/// GET /api/movies/{row} - Movie detail panel, looked up by dataset row number
pub async fn movie_detail(
    State(state): State<AppState>,
    Path(row): Path<String>,
) -> Result<Json<MovieDetailResponse>, ApiError> {
    let row = parse_row(&row)?;
    let id = movie_uuid(row);
    tracing::info!("Movie detail for row {row} ({id})");

    let movie = state
        .catalog
        .fetch(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("No movie found for row {row}")))?;

    Ok(Json(MovieDetailResponse {
        row,
        blocks: vec![movie_block(&movie)],
        movie,
    }))
}

fn parse_row(raw: &str) -> Result<u32, ApiError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(ApiError::BadRequest("Row id is required".to_string()));
    }
    raw.parse()
        .map_err(|_| ApiError::BadRequest(format!("Row id must be a non-negative integer, got {raw:?}")))
}
