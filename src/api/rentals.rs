//! Rental endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::{
    error::AppResult,
    models::rental::{Rental, RentalRequest},
};

use super::AuthenticatedUser;

/// Rent a movie to a customer
#[utoipa::path(
    post,
    path = "/rentals",
    tag = "rentals",
    security(("bearer_auth" = [])),
    request_body = RentalRequest,
    responses(
        (status = 201, description = "Rental created", body = Rental),
        (status = 400, description = "Invalid input"),
        (status = 404, description = "Customer or movie not found, or out of stock")
    )
)]
pub async fn create_rental(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Json(request): Json<RentalRequest>,
) -> AppResult<(StatusCode, Json<Rental>)> {
    request.validate()?;

    let rental = state
        .services
        .rentals
        .create_rental(request.customer_id, request.movie_id)
        .await?;

    Ok((StatusCode::CREATED, Json(rental)))
}

/// List all rentals, most recent first
#[utoipa::path(
    get,
    path = "/rentals",
    tag = "rentals",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "List of rentals", body = Vec<Rental>),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn list_rentals(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
) -> AppResult<Json<Vec<Rental>>> {
    let rentals = state.services.rentals.list().await?;
    Ok(Json(rentals))
}

/// Get rental by ID
#[utoipa::path(
    get,
    path = "/rentals/{id}",
    tag = "rentals",
    security(("bearer_auth" = [])),
    params(
        ("id" = i32, Path, description = "Rental ID")
    ),
    responses(
        (status = 200, description = "Rental details", body = Rental),
        (status = 404, description = "Rental not found")
    )
)]
pub async fn get_rental(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(id): Path<i32>,
) -> AppResult<Json<Rental>> {
    let rental = state.services.rentals.get(id).await?;
    Ok(Json(rental))
}
