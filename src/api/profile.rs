use axum::{extract::State, response::Json, Extension};

use super::routes::AppState;
use crate::auth::CurrentUser;
use crate::error::AppError;
use crate::models::{UpdateUser, UserPublic};

/// PUT /api/profile — updates the caller's own profile fields. Role, id and
/// credentials are not reachable through this endpoint.
#[tracing::instrument(skip(state, caller, request))]
pub async fn update_profile(
    State(state): State<AppState>,
    Extension(CurrentUser(caller)): Extension<CurrentUser>,
    Json(request): Json<UpdateUser>,
) -> Result<Json<UserPublic>, AppError> {
    let updated = state.users.update_profile(&caller, request).await?;
    Ok(Json(updated))
}
