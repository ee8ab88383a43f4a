//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{auth, customers, genres, health, movies, rentals, returns, users};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Vidrack API",
        version = "0.3.0",
        description = "Video Rental Management System REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Auth
        auth::login,
        auth::me,
        // Users
        users::create_user,
        // Genres
        genres::list_genres,
        genres::get_genre,
        genres::create_genre,
        genres::update_genre,
        genres::delete_genre,
        // Customers
        customers::list_customers,
        customers::get_customer,
        customers::create_customer,
        customers::update_customer,
        customers::delete_customer,
        // Movies
        movies::list_movies,
        movies::get_movie,
        movies::create_movie,
        movies::update_movie,
        movies::delete_movie,
        // Rentals
        rentals::create_rental,
        rentals::list_rentals,
        rentals::get_rental,
        // Returns
        returns::return_rental,
    ),
    components(
        schemas(
            // Auth
            auth::LoginRequest,
            auth::LoginResponse,
            // Users
            crate::models::user::User,
            crate::models::user::CreateUser,
            // Genres
            crate::models::genre::Genre,
            crate::models::genre::GenrePayload,
            // Customers
            crate::models::customer::Customer,
            crate::models::customer::CreateCustomer,
            crate::models::customer::UpdateCustomer,
            // Movies
            crate::models::movie::Movie,
            crate::models::movie::CreateMovie,
            crate::models::movie::UpdateMovie,
            // Rentals
            crate::models::rental::Rental,
            crate::models::rental::MovieSnapshot,
            crate::models::rental::CustomerSnapshot,
            crate::models::rental::RentalRequest,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "auth", description = "Authentication endpoints"),
        (name = "users", description = "User account management"),
        (name = "genres", description = "Genre management"),
        (name = "customers", description = "Customer management"),
        (name = "movies", description = "Movie catalog management"),
        (name = "rentals", description = "Rental creation and lookup"),
        (name = "returns", description = "Return finalization")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new().merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
