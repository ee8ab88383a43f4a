//! Genre endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::{
    error::AppResult,
    models::genre::{Genre, GenrePayload},
};

use super::AuthenticatedUser;

/// List all genres
#[utoipa::path(
    get,
    path = "/genres",
    tag = "genres",
    responses(
        (status = 200, description = "List of genres", body = Vec<Genre>)
    )
)]
pub async fn list_genres(State(state): State<crate::AppState>) -> AppResult<Json<Vec<Genre>>> {
    let genres = state.services.genres.list().await?;
    Ok(Json(genres))
}

/// Get genre by ID
#[utoipa::path(
    get,
    path = "/genres/{id}",
    tag = "genres",
    params(
        ("id" = i32, Path, description = "Genre ID")
    ),
    responses(
        (status = 200, description = "Genre details", body = Genre),
        (status = 404, description = "Genre not found")
    )
)]
pub async fn get_genre(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Genre>> {
    let genre = state.services.genres.get(id).await?;
    Ok(Json(genre))
}

/// Create a new genre
#[utoipa::path(
    post,
    path = "/genres",
    tag = "genres",
    security(("bearer_auth" = [])),
    request_body = GenrePayload,
    responses(
        (status = 201, description = "Genre created", body = Genre),
        (status = 400, description = "Invalid input"),
        (status = 409, description = "Genre already exists")
    )
)]
pub async fn create_genre(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Json(payload): Json<GenrePayload>,
) -> AppResult<(StatusCode, Json<Genre>)> {
    payload.validate()?;

    let created = state.services.genres.create(payload).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Rename an existing genre
#[utoipa::path(
    put,
    path = "/genres/{id}",
    tag = "genres",
    security(("bearer_auth" = [])),
    params(
        ("id" = i32, Path, description = "Genre ID")
    ),
    request_body = GenrePayload,
    responses(
        (status = 200, description = "Genre updated", body = Genre),
        (status = 404, description = "Genre not found"),
        (status = 409, description = "Name already taken")
    )
)]
pub async fn update_genre(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(id): Path<i32>,
    Json(payload): Json<GenrePayload>,
) -> AppResult<Json<Genre>> {
    payload.validate()?;

    let updated = state.services.genres.update(id, payload).await?;
    Ok(Json(updated))
}

/// Delete a genre (admin only)
#[utoipa::path(
    delete,
    path = "/genres/{id}",
    tag = "genres",
    security(("bearer_auth" = [])),
    params(
        ("id" = i32, Path, description = "Genre ID")
    ),
    responses(
        (status = 200, description = "Genre deleted", body = Genre),
        (status = 403, description = "Admin privileges required"),
        (status = 404, description = "Genre not found")
    )
)]
pub async fn delete_genre(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<i32>,
) -> AppResult<Json<Genre>> {
    claims.require_admin()?;

    let deleted = state.services.genres.delete(id).await?;
    Ok(Json(deleted))
}
