//! Repository layer for database operations

pub mod customers;
pub mod genres;
pub mod movies;
pub mod rentals;
pub mod users;

use sqlx::{Pool, Postgres};

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
    pub genres: genres::GenresRepository,
    pub customers: customers::CustomersRepository,
    pub movies: movies::MoviesRepository,
    pub rentals: rentals::RentalsRepository,
    pub users: users::UsersRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            genres: genres::GenresRepository::new(pool.clone()),
            customers: customers::CustomersRepository::new(pool.clone()),
            movies: movies::MoviesRepository::new(pool.clone()),
            rentals: rentals::RentalsRepository::new(pool.clone()),
            users: users::UsersRepository::new(pool.clone()),
            pool,
        }
    }
}
