//! Business logic services

pub mod customers;
pub mod genres;
pub mod movies;
pub mod rentals;
pub mod users;

use crate::{config::AuthConfig, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub genres: genres::GenresService,
    pub customers: customers::CustomersService,
    pub movies: movies::MoviesService,
    pub rentals: rentals::RentalsService,
    pub users: users::UsersService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository, auth_config: AuthConfig) -> Self {
        Self {
            genres: genres::GenresService::new(repository.clone()),
            customers: customers::CustomersService::new(repository.clone()),
            movies: movies::MoviesService::new(repository.clone()),
            rentals: rentals::RentalsService::new(repository.clone()),
            users: users::UsersService::new(repository, auth_config),
        }
    }
}
