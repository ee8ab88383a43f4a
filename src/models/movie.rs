//! Movie model and related types

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use super::genre::Genre;

/// Movie catalog entity with its genre embedded by value
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Movie {
    pub id: i32,
    pub title: String,
    pub genre: Genre,
    pub number_in_stock: i32,
    pub daily_rental_rate: f64,
}

/// Internal row structure for movie queries (genre columns flattened by the join)
#[derive(Debug, Clone, FromRow)]
pub struct MovieRow {
    pub id: i32,
    pub title: String,
    pub genre_id: i32,
    pub genre_name: String,
    pub number_in_stock: i32,
    pub daily_rental_rate: f64,
}

impl From<MovieRow> for Movie {
    fn from(row: MovieRow) -> Self {
        Movie {
            id: row.id,
            title: row.title,
            genre: Genre {
                id: row.genre_id,
                name: row.genre_name,
            },
            number_in_stock: row.number_in_stock,
            daily_rental_rate: row.daily_rental_rate,
        }
    }
}

/// Create movie request. The genre is referenced either by id or by name.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateMovie {
    #[validate(length(min = 1, max = 256, message = "Title must not be empty"))]
    pub title: String,
    pub genre_id: Option<i32>,
    pub genre_name: Option<String>,
    #[validate(range(min = 0, message = "Stock cannot be negative"))]
    pub number_in_stock: Option<i32>,
    #[validate(range(min = 0.01, message = "Daily rental rate must be positive"))]
    pub daily_rental_rate: f64,
}

/// Update movie request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateMovie {
    #[validate(length(min = 1, max = 256, message = "Title must not be empty"))]
    pub title: Option<String>,
    pub genre_id: Option<i32>,
    pub genre_name: Option<String>,
    #[validate(range(min = 0, message = "Stock cannot be negative"))]
    pub number_in_stock: Option<i32>,
    #[validate(range(min = 0.01, message = "Daily rental rate must be positive"))]
    pub daily_rental_rate: Option<f64>,
}

/// Movie search filters. Title matches partially unless `exact` is set;
/// both forms are case-insensitive.
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
pub struct MovieQuery {
    pub title: Option<String>,
    pub exact: Option<bool>,
    pub genre: Option<String>,
    pub number_in_stock_min: Option<i32>,
    pub number_in_stock_max: Option<i32>,
    pub daily_rental_rate_min: Option<f64>,
    pub daily_rental_rate_max: Option<f64>,
}
