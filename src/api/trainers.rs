use axum::{
    extract::{Path, State},
    response::Json,
    Extension,
};

use super::routes::AppState;
use crate::auth::CurrentUser;
use crate::error::AppError;
use crate::models::{TrainerProfile, TrainerWithProfile, UpdateTrainerProfile};

#[tracing::instrument(skip(state))]
pub async fn list_trainers(
    State(state): State<AppState>,
) -> Result<Json<Vec<TrainerWithProfile>>, AppError> {
    let trainers = state.trainers.list().await?;
    Ok(Json(trainers))
}

#[tracing::instrument(skip(state))]
pub async fn get_trainer(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<TrainerWithProfile>, AppError> {
    let trainer = state.trainers.by_id(id).await?;
    Ok(Json(trainer))
}

#[tracing::instrument(skip(state, caller, request))]
pub async fn create_trainer_profile(
    State(state): State<AppState>,
    Extension(CurrentUser(caller)): Extension<CurrentUser>,
    Json(request): Json<UpdateTrainerProfile>,
) -> Result<(axum::http::StatusCode, Json<TrainerProfile>), AppError> {
    let profile = state.trainers.create_profile(&caller, request).await?;
    Ok((axum::http::StatusCode::CREATED, Json(profile)))
}

#[tracing::instrument(skip(state, caller, request))]
pub async fn update_trainer_profile(
    State(state): State<AppState>,
    Extension(CurrentUser(caller)): Extension<CurrentUser>,
    Json(request): Json<UpdateTrainerProfile>,
) -> Result<Json<TrainerProfile>, AppError> {
    let profile = state.trainers.update_profile(&caller, request).await?;
    Ok(Json(profile))
}
