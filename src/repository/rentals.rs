//! Rentals repository: the ledger plus the two stock-moving transactions

use chrono::Utc;
use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::{
        customer::Customer,
        movie::Movie,
        rental::{Rental, RentalRow},
    },
};

const RENTAL_COLUMNS: &str = r#"
    id, movie_id, movie_title, movie_daily_rental_rate,
    customer_id, customer_name, date_out, date_returned, rental_fee
"#;

#[derive(Clone)]
pub struct RentalsRepository {
    pool: Pool<Postgres>,
}

impl RentalsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all rentals, most recent first
    pub async fn list(&self) -> AppResult<Vec<Rental>> {
        let rows = sqlx::query_as::<_, RentalRow>(&format!(
            "SELECT {} FROM rentals ORDER BY date_out DESC",
            RENTAL_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Rental::try_from).collect()
    }

    /// Get rental by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Rental> {
        let row = sqlx::query_as::<_, RentalRow>(&format!(
            "SELECT {} FROM rentals WHERE id = $1",
            RENTAL_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Rental with id {} not found", id)))?;

        Rental::try_from(row)
    }

    /// Create a rental for the given movie and customer, snapshotting both.
    /// The stock decrement and the ledger insert commit together: the
    /// decrement is conditional on remaining stock, and when it matches no
    /// row the transaction rolls back and the shelf is reported empty.
    pub async fn create(&self, movie: &Movie, customer: &Customer) -> AppResult<Rental> {
        let mut tx = self.pool.begin().await?;

        let decremented = sqlx::query(
            "UPDATE movies SET number_in_stock = number_in_stock - 1 \
             WHERE id = $1 AND number_in_stock > 0",
        )
        .bind(movie.id)
        .execute(&mut *tx)
        .await?;

        if decremented.rows_affected() == 0 {
            return Err(AppError::OutOfStock(format!(
                "No copies of \"{}\" in stock",
                movie.title
            )));
        }

        let row = sqlx::query_as::<_, RentalRow>(&format!(
            r#"
            INSERT INTO rentals
                (movie_id, movie_title, movie_daily_rental_rate, customer_id, customer_name)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {}
            "#,
            RENTAL_COLUMNS
        ))
        .bind(movie.id)
        .bind(&movie.title)
        .bind(movie.daily_rental_rate)
        .bind(customer.id)
        .bind(&customer.name)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Rental::try_from(row)
    }

    /// Finalize the return for a (customer, movie) pair: stamp the return
    /// time, compute the fee, and restore the movie's stock, all in one
    /// transaction. The rental row is locked while it is checked so two
    /// concurrent returns cannot both pass the already-finalized gate; if
    /// the movie has vanished from the catalog the whole transaction rolls
    /// back.
    pub async fn finalize(&self, customer_id: i32, movie_id: i32) -> AppResult<Rental> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query_as::<_, RentalRow>(&format!(
            r#"
            SELECT {} FROM rentals
            WHERE customer_id = $1 AND movie_id = $2
            ORDER BY date_out
            LIMIT 1
            FOR UPDATE
            "#,
            RENTAL_COLUMNS
        ))
        .bind(customer_id)
        .bind(movie_id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| {
            AppError::NotFound("No rental found for that customer and movie".to_string())
        })?;

        let mut rental = Rental::try_from(row)?;

        if rental.is_finalized() {
            return Err(AppError::AlreadyFinalized(format!(
                "Rental {} has already been returned",
                rental.id
            )));
        }

        rental.finalize(Utc::now());

        sqlx::query("UPDATE rentals SET date_returned = $1, rental_fee = $2 WHERE id = $3")
            .bind(rental.date_returned)
            .bind(rental.rental_fee)
            .bind(rental.id)
            .execute(&mut *tx)
            .await?;

        let restocked =
            sqlx::query("UPDATE movies SET number_in_stock = number_in_stock + 1 WHERE id = $1")
                .bind(rental.movie.id)
                .execute(&mut *tx)
                .await?;

        if restocked.rows_affected() == 0 {
            return Err(AppError::BadRequest(format!(
                "Movie {} no longer exists in the catalog",
                rental.movie.id
            )));
        }

        tx.commit().await?;

        Ok(rental)
    }
}
