//! Genres repository for database operations

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::genre::Genre,
};

#[derive(Clone)]
pub struct GenresRepository {
    pool: Pool<Postgres>,
}

impl GenresRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all genres sorted by name
    pub async fn list(&self) -> AppResult<Vec<Genre>> {
        let genres = sqlx::query_as::<_, Genre>("SELECT id, name FROM genres ORDER BY name")
            .fetch_all(&self.pool)
            .await?;
        Ok(genres)
    }

    /// Get genre by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Genre> {
        sqlx::query_as::<_, Genre>("SELECT id, name FROM genres WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Genre with id {} not found", id)))
    }

    /// Find genre by name, case-insensitive
    pub async fn find_by_name(&self, name: &str) -> AppResult<Option<Genre>> {
        let genre = sqlx::query_as::<_, Genre>(
            "SELECT id, name FROM genres WHERE LOWER(name) = LOWER($1)",
        )
        .bind(name.trim())
        .fetch_optional(&self.pool)
        .await?;
        Ok(genre)
    }

    /// Create a new genre
    pub async fn create(&self, name: &str) -> AppResult<Genre> {
        let genre =
            sqlx::query_as::<_, Genre>("INSERT INTO genres (name) VALUES ($1) RETURNING id, name")
                .bind(name)
                .fetch_one(&self.pool)
                .await?;
        Ok(genre)
    }

    /// Rename an existing genre
    pub async fn update(&self, id: i32, name: &str) -> AppResult<Genre> {
        sqlx::query_as::<_, Genre>(
            "UPDATE genres SET name = $1 WHERE id = $2 RETURNING id, name",
        )
        .bind(name)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Genre with id {} not found", id)))
    }

    /// Delete a genre, returning the removed record
    pub async fn delete(&self, id: i32) -> AppResult<Genre> {
        sqlx::query_as::<_, Genre>("DELETE FROM genres WHERE id = $1 RETURNING id, name")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Genre with id {} not found", id)))
    }
}
