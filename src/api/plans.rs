use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    Extension,
};

use super::routes::AppState;
use crate::auth::CurrentUser;
use crate::error::AppError;
use crate::models::{
    NewNutritionPlan, NewWorkoutPlan, NutritionPlan, NutritionPlanWithTrainer, WorkoutPlan,
    WorkoutPlanWithTrainer,
};

#[tracing::instrument(skip(state))]
pub async fn list_workout_plans(
    State(state): State<AppState>,
) -> Result<Json<Vec<WorkoutPlanWithTrainer>>, AppError> {
    let plans = state.plans.list_workout_plans().await?;
    Ok(Json(plans))
}

#[tracing::instrument(skip(state))]
pub async fn get_workout_plan(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<WorkoutPlanWithTrainer>, AppError> {
    let plan = state.plans.workout_plan(id).await?;
    Ok(Json(plan))
}

#[tracing::instrument(skip(state))]
pub async fn trainer_workout_plans(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<WorkoutPlan>>, AppError> {
    let plans = state.plans.workout_plans_by_trainer(id).await?;
    Ok(Json(plans))
}

#[tracing::instrument(skip(state))]
pub async fn list_nutrition_plans(
    State(state): State<AppState>,
) -> Result<Json<Vec<NutritionPlanWithTrainer>>, AppError> {
    let plans = state.plans.list_nutrition_plans().await?;
    Ok(Json(plans))
}

#[tracing::instrument(skip(state))]
pub async fn get_nutrition_plan(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<NutritionPlanWithTrainer>, AppError> {
    let plan = state.plans.nutrition_plan(id).await?;
    Ok(Json(plan))
}

#[tracing::instrument(skip(state))]
pub async fn trainer_nutrition_plans(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<NutritionPlan>>, AppError> {
    let plans = state.plans.nutrition_plans_by_trainer(id).await?;
    Ok(Json(plans))
}

/// POST /api/trainer/workout-plans — trainers publish their own plans.
#[tracing::instrument(skip(state, caller, request))]
pub async fn create_workout_plan(
    State(state): State<AppState>,
    Extension(CurrentUser(caller)): Extension<CurrentUser>,
    Json(request): Json<NewWorkoutPlan>,
) -> Result<(StatusCode, Json<WorkoutPlan>), AppError> {
    let plan = state.plans.create_workout_plan(&caller, request).await?;
    Ok((StatusCode::CREATED, Json(plan)))
}

/// POST /api/trainer/nutrition-plans
#[tracing::instrument(skip(state, caller, request))]
pub async fn create_nutrition_plan(
    State(state): State<AppState>,
    Extension(CurrentUser(caller)): Extension<CurrentUser>,
    Json(request): Json<NewNutritionPlan>,
) -> Result<(StatusCode, Json<NutritionPlan>), AppError> {
    let plan = state.plans.create_nutrition_plan(&caller, request).await?;
    Ok((StatusCode::CREATED, Json(plan)))
}
