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
use crate::models::{Connection, ConnectionStatus, ConnectionWithAthlete, ConnectionWithTrainer};

#[derive(Debug, Deserialize)]
pub struct CreateConnectionRequest {
    pub trainer_id: i64,
}

#[derive(Debug, Deserialize)]
pub struct UpdateConnectionRequest {
    pub status: ConnectionStatus,
}

/// POST /api/connections. The athlete id comes from the caller's identity;
/// the status always starts pending.
#[tracing::instrument(skip(state, caller, request))]
pub async fn create_connection(
    State(state): State<AppState>,
    Extension(CurrentUser(caller)): Extension<CurrentUser>,
    Json(request): Json<CreateConnectionRequest>,
) -> Result<(StatusCode, Json<Connection>), AppError> {
    let connection = state
        .connections
        .request(&caller, request.trainer_id)
        .await?;
    Ok((StatusCode::CREATED, Json(connection)))
}

/// PUT /api/connections/:id — the referenced trainer accepts or rejects.
#[tracing::instrument(skip(state, caller, request))]
pub async fn update_connection(
    State(state): State<AppState>,
    Extension(CurrentUser(caller)): Extension<CurrentUser>,
    Path(id): Path<i64>,
    Json(request): Json<UpdateConnectionRequest>,
) -> Result<Json<Connection>, AppError> {
    let connection = state
        .connections
        .respond(&caller, id, request.status)
        .await?;
    Ok(Json(connection))
}

/// GET /api/connections/athlete — the caller's requests, joined with trainers.
#[tracing::instrument(skip(state, caller))]
pub async fn athlete_connections(
    State(state): State<AppState>,
    Extension(CurrentUser(caller)): Extension<CurrentUser>,
) -> Result<Json<Vec<ConnectionWithTrainer>>, AppError> {
    let connections = state.connections.for_athlete(&caller).await?;
    Ok(Json(connections))
}

/// GET /api/connections/trainer — requests addressed to the caller.
#[tracing::instrument(skip(state, caller))]
pub async fn trainer_connections(
    State(state): State<AppState>,
    Extension(CurrentUser(caller)): Extension<CurrentUser>,
) -> Result<Json<Vec<ConnectionWithAthlete>>, AppError> {
    let connections = state.connections.for_trainer(&caller).await?;
    Ok(Json(connections))
}
