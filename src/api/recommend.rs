use axum::Json;
use axum::extract::State;

use crate::api::extract::ApiJson;
use crate::catalog::query::RecommendQuery;
use crate::error::ApiError;
use crate::models::{RecommendRequest, RecommendResponse};
use crate::render::recommendation_blocks;
use crate::state::AppState;

/// POST /api/recommend - Recommend panel: hybrid retrieval over synopses plus
/// one grouped generation conditioned on the retrieved records.
pub async fn recommend(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<RecommendRequest>,
) -> Result<Json<RecommendResponse>, ApiError> {
    let query = RecommendQuery::build(&req.subject, req.context.as_deref())?;
    tracing::info!(
        "Recommendation requested for '{}' ({})",
        query.subject,
        query.context
    );

    let mut recommendation = state.catalog.recommend(&query).await?;
    if recommendation.sources.is_empty() {
        return Err(ApiError::NotFound(format!(
            "No synopses matched \"{}\"",
            query.subject
        )));
    }
    recommendation.sources.truncate(query.limit);

    Ok(Json(RecommendResponse {
        blocks: recommendation_blocks(&recommendation),
        subject: query.subject,
        context: query.context,
        generated: recommendation.generated,
        sources: recommendation.sources,
    }))
}
