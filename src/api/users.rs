//! User account endpoints

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use validator::Validate;

use crate::{
    error::AppResult,
    models::user::{CreateUser, User},
};

use super::AuthenticatedUser;

/// Register a new user account. The issued token rides back in the
/// `x-auth-token` response header.
#[utoipa::path(
    post,
    path = "/users",
    tag = "users",
    security(("bearer_auth" = [])),
    request_body = CreateUser,
    responses(
        (status = 201, description = "Account created", body = User),
        (status = 400, description = "Invalid input"),
        (status = 409, description = "Email already registered")
    )
)]
pub async fn create_user(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Json(request): Json<CreateUser>,
) -> AppResult<impl IntoResponse> {
    request.validate()?;

    let (user, token) = state.services.users.register(request).await?;

    Ok((
        StatusCode::CREATED,
        [("x-auth-token", token)],
        Json(user),
    ))
}
