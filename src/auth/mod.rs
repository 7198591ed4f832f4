// Caller identity resolution.
//
// Credential and session handling live in the fronting auth layer, which
// forwards the authenticated user id in a trusted header. This module turns
// that id back into a full user record and makes it available to handlers;
// role checks happen in the services against the resolved user.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::error::AppError;
use crate::models::User;
use crate::services::UserService;

/// Header carrying the authenticated user id, set by the fronting auth layer.
pub const USER_ID_HEADER: &str = "x-user-id";

/// The resolved caller, stored in request extensions by `identity_middleware`.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

/// Resolves the caller's identity or rejects the request with 401.
pub async fn identity_middleware(
    State(users): State<UserService>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let user_id = request
        .headers()
        .get(USER_ID_HEADER)
        .and_then(|header| header.to_str().ok())
        .and_then(|value| value.parse::<i64>().ok())
        .ok_or(AppError::Unauthorized)?;

    let user = users
        .by_id(user_id)
        .await?
        .ok_or(AppError::Unauthorized)?;

    request.extensions_mut().insert(CurrentUser(user));
    Ok(next.run(request).await)
}
