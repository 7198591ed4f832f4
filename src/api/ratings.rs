use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    Extension,
};
use serde::Deserialize;

use super::routes::AppState;
use crate::auth::CurrentUser;
use crate::error::AppError;
use crate::models::{Rating, RatingWithAthlete};

#[derive(Debug, Deserialize)]
pub struct CreateRatingRequest {
    pub trainer_id: i64,
    pub rating: i32,
    pub review: Option<String>,
}

/// POST /api/ratings. The athlete id always comes from the caller's
/// authenticated identity, never the request body.
#[tracing::instrument(skip(state, caller, request))]
pub async fn create_rating(
    State(state): State<AppState>,
    Extension(CurrentUser(caller)): Extension<CurrentUser>,
    Json(request): Json<CreateRatingRequest>,
) -> Result<(StatusCode, Json<Rating>), AppError> {
    let rating = state
        .ratings
        .record(&caller, request.trainer_id, request.rating, request.review)
        .await?;
    Ok((StatusCode::CREATED, Json(rating)))
}

/// GET /api/trainers/:id/ratings
#[tracing::instrument(skip(state))]
pub async fn trainer_ratings(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<RatingWithAthlete>>, AppError> {
    let ratings = state.ratings.for_trainer(id).await?;
    Ok(Json(ratings))
}
