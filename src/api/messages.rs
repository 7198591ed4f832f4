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
use crate::models::Message;

#[derive(Debug, Deserialize)]
pub struct SendMessageRequest {
    pub receiver_id: i64,
    pub content: String,
}

/// POST /api/messages. The sender id comes from the caller's identity.
#[tracing::instrument(skip(state, caller, request))]
pub async fn send_message(
    State(state): State<AppState>,
    Extension(CurrentUser(caller)): Extension<CurrentUser>,
    Json(request): Json<SendMessageRequest>,
) -> Result<(StatusCode, Json<Message>), AppError> {
    let message = state
        .messages
        .send(&caller, request.receiver_id, request.content)
        .await?;
    Ok((StatusCode::CREATED, Json(message)))
}

/// GET /api/messages/:user_id — conversation between the caller and that user.
#[tracing::instrument(skip(state, caller))]
pub async fn conversation(
    State(state): State<AppState>,
    Extension(CurrentUser(caller)): Extension<CurrentUser>,
    Path(user_id): Path<i64>,
) -> Result<Json<Vec<Message>>, AppError> {
    let messages = state.messages.conversation(&caller, user_id).await?;
    Ok(Json(messages))
}

/// PUT /api/messages/read/:user_id — marks messages from that user to the
/// caller as read.
#[tracing::instrument(skip(state, caller))]
pub async fn mark_read(
    State(state): State<AppState>,
    Extension(CurrentUser(caller)): Extension<CurrentUser>,
    Path(user_id): Path<i64>,
) -> Result<StatusCode, AppError> {
    state.messages.mark_read(&caller, user_id).await?;
    Ok(StatusCode::OK)
}
