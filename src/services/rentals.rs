//! Rental lifecycle service: the create/return core

use crate::{
    error::{AppError, AppResult},
    models::rental::Rental,
    repository::Repository,
};

#[derive(Clone)]
pub struct RentalsService {
    repository: Repository,
}

impl RentalsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List all rentals, most recent first
    pub async fn list(&self) -> AppResult<Vec<Rental>> {
        self.repository.rentals.list().await
    }

    /// Get rental by ID
    pub async fn get(&self, id: i32) -> AppResult<Rental> {
        self.repository.rentals.get_by_id(id).await
    }

    /// Rent a movie to a customer. Both records must exist and the movie
    /// must have stock; the ledger insert and the stock decrement commit
    /// together.
    pub async fn create_rental(&self, customer_id: i32, movie_id: i32) -> AppResult<Rental> {
        let movie = self.repository.movies.get_by_id(movie_id).await?;
        let customer = self.repository.customers.get_by_id(customer_id).await?;

        if movie.number_in_stock <= 0 {
            return Err(AppError::OutOfStock(format!(
                "No copies of \"{}\" in stock",
                movie.title
            )));
        }

        let rental = self.repository.rentals.create(&movie, &customer).await?;

        tracing::info!(
            rental_id = rental.id,
            movie_id,
            customer_id,
            "rental created"
        );

        Ok(rental)
    }

    /// Finalize the return for a (customer, movie) pair
    pub async fn finalize_return(&self, customer_id: i32, movie_id: i32) -> AppResult<Rental> {
        let rental = self.repository.rentals.finalize(customer_id, movie_id).await?;

        tracing::info!(
            rental_id = rental.id,
            fee = rental.rental_fee.unwrap_or(0.0),
            "rental returned"
        );

        Ok(rental)
    }
}
