//! Return endpoint: finalizes a rental and restores stock

use axum::{extract::State, Json};
use validator::Validate;

use crate::{
    error::AppResult,
    models::rental::{Rental, RentalRequest},
};

use super::AuthenticatedUser;

/// Return a rented movie. Stamps the return time, computes the fee from the
/// rate snapshotted at rental time, and restores the movie's stock.
#[utoipa::path(
    post,
    path = "/returns",
    tag = "returns",
    security(("bearer_auth" = [])),
    request_body = RentalRequest,
    responses(
        (status = 200, description = "Rental finalized", body = Rental),
        (status = 400, description = "Already finalized, or movie vanished from catalog"),
        (status = 404, description = "No rental for that customer and movie")
    )
)]
pub async fn return_rental(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Json(request): Json<RentalRequest>,
) -> AppResult<Json<Rental>> {
    request.validate()?;

    let rental = state
        .services
        .rentals
        .finalize_return(request.customer_id, request.movie_id)
        .await?;

    Ok(Json(rental))
}
