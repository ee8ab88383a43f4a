//! Movie catalog endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::{
    error::AppResult,
    models::movie::{CreateMovie, Movie, MovieQuery, UpdateMovie},
};

use super::AuthenticatedUser;

/// List movies with search filters
#[utoipa::path(
    get,
    path = "/movies",
    tag = "movies",
    params(MovieQuery),
    responses(
        (status = 200, description = "List of movies", body = Vec<Movie>)
    )
)]
pub async fn list_movies(
    State(state): State<crate::AppState>,
    Query(query): Query<MovieQuery>,
) -> AppResult<Json<Vec<Movie>>> {
    let movies = state.services.movies.search(&query).await?;
    Ok(Json(movies))
}

/// Get movie by ID
#[utoipa::path(
    get,
    path = "/movies/{id}",
    tag = "movies",
    params(
        ("id" = i32, Path, description = "Movie ID")
    ),
    responses(
        (status = 200, description = "Movie details", body = Movie),
        (status = 404, description = "Movie not found")
    )
)]
pub async fn get_movie(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Movie>> {
    let movie = state.services.movies.get(id).await?;
    Ok(Json(movie))
}

/// Add a movie to the catalog
#[utoipa::path(
    post,
    path = "/movies",
    tag = "movies",
    security(("bearer_auth" = [])),
    request_body = CreateMovie,
    responses(
        (status = 201, description = "Movie created", body = Movie),
        (status = 400, description = "Invalid input or unknown genre"),
        (status = 409, description = "Movie with the same title and genre exists")
    )
)]
pub async fn create_movie(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Json(request): Json<CreateMovie>,
) -> AppResult<(StatusCode, Json<Movie>)> {
    request.validate()?;

    let created = state.services.movies.create(request).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Update an existing movie
#[utoipa::path(
    put,
    path = "/movies/{id}",
    tag = "movies",
    security(("bearer_auth" = [])),
    params(
        ("id" = i32, Path, description = "Movie ID")
    ),
    request_body = UpdateMovie,
    responses(
        (status = 200, description = "Movie updated", body = Movie),
        (status = 400, description = "Unknown genre"),
        (status = 404, description = "Movie not found"),
        (status = 409, description = "Movie with the same title and genre exists")
    )
)]
pub async fn update_movie(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(id): Path<i32>,
    Json(request): Json<UpdateMovie>,
) -> AppResult<Json<Movie>> {
    request.validate()?;

    let updated = state.services.movies.update(id, request).await?;
    Ok(Json(updated))
}

/// Remove a movie from the catalog (admin only)
#[utoipa::path(
    delete,
    path = "/movies/{id}",
    tag = "movies",
    security(("bearer_auth" = [])),
    params(
        ("id" = i32, Path, description = "Movie ID")
    ),
    responses(
        (status = 200, description = "Movie deleted", body = Movie),
        (status = 403, description = "Admin privileges required"),
        (status = 404, description = "Movie not found")
    )
)]
pub async fn delete_movie(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<i32>,
) -> AppResult<Json<Movie>> {
    claims.require_admin()?;

    let deleted = state.services.movies.delete(id).await?;
    Ok(Json(deleted))
}
