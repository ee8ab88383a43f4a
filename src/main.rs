//! Vidrack Server - Video Rental Management System
//!
//! A Rust REST API server for running a video-rental business.

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use vidrack_server::{api, config::AppConfig, repository::Repository, services::Services, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load().expect("Failed to load configuration");

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("vidrack_server={},tower_http=debug", config.logging.level).into()
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Vidrack Server v{}", env!("CARGO_PKG_VERSION"));

    // Create database connection pool
    let pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .min_connections(config.database.min_connections)
        .connect(&config.database.url)
        .await
        .expect("Failed to connect to database");

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run database migrations");

    tracing::info!("Database migrations completed");

    // Save server address before moving config
    let server_host = config.server.host.clone();
    let server_port = config.server.port;

    // Create repository and services
    let repository = Repository::new(pool);
    let services = Services::new(repository, config.auth.clone());

    // Create application state
    let state = AppState {
        config: Arc::new(config),
        services: Arc::new(services),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::new(server_host.parse().expect("Invalid host address"), server_port);

    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes
fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // API v1 routes
    let api_v1 = Router::new()
        // Health check
        .route("/health", get(api::health::health_check))
        .route("/ready", get(api::health::readiness_check))
        // Authentication
        .route("/auth/login", post(api::auth::login))
        .route("/auth/me", get(api::auth::me))
        // Users
        .route("/users", post(api::users::create_user))
        // Genres
        .route("/genres", get(api::genres::list_genres))
        .route("/genres", post(api::genres::create_genre))
        .route("/genres/:id", get(api::genres::get_genre))
        .route("/genres/:id", put(api::genres::update_genre))
        .route("/genres/:id", delete(api::genres::delete_genre))
        // Customers
        .route("/customers", get(api::customers::list_customers))
        .route("/customers", post(api::customers::create_customer))
        .route("/customers/:id", get(api::customers::get_customer))
        .route("/customers/:id", put(api::customers::update_customer))
        .route("/customers/:id", delete(api::customers::delete_customer))
        // Movies
        .route("/movies", get(api::movies::list_movies))
        .route("/movies", post(api::movies::create_movie))
        .route("/movies/:id", get(api::movies::get_movie))
        .route("/movies/:id", put(api::movies::update_movie))
        .route("/movies/:id", delete(api::movies::delete_movie))
        // Rentals
        .route("/rentals", post(api::rentals::create_rental))
        .route("/rentals", get(api::rentals::list_rentals))
        .route("/rentals/:id", get(api::rentals::get_rental))
        // Returns
        .route("/returns", post(api::returns::return_rental))
        .with_state(state.clone());

    // OpenAPI documentation
    let openapi = api::openapi::create_openapi_router();

    Router::new()
        .nest("/api/v1", api_v1)
        .merge(openapi)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
