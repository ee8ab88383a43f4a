//! Genre management service

use crate::{
    error::{AppError, AppResult},
    models::genre::{Genre, GenrePayload},
    repository::Repository,
};

#[derive(Clone)]
pub struct GenresService {
    repository: Repository,
}

impl GenresService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List all genres
    pub async fn list(&self) -> AppResult<Vec<Genre>> {
        self.repository.genres.list().await
    }

    /// Get genre by ID
    pub async fn get(&self, id: i32) -> AppResult<Genre> {
        self.repository.genres.get_by_id(id).await
    }

    /// Create a new genre; names are unique case-insensitively
    pub async fn create(&self, payload: GenrePayload) -> AppResult<Genre> {
        let name = payload.normalized_name();

        if self.repository.genres.find_by_name(&name).await?.is_some() {
            return Err(AppError::Conflict(format!(
                "Genre \"{}\" already exists",
                name
            )));
        }

        self.repository.genres.create(&name).await
    }

    /// Rename a genre, refusing to take another genre's name
    pub async fn update(&self, id: i32, payload: GenrePayload) -> AppResult<Genre> {
        let name = payload.normalized_name();

        if let Some(existing) = self.repository.genres.find_by_name(&name).await? {
            if existing.id != id {
                return Err(AppError::Conflict(format!(
                    "Genre \"{}\" already exists",
                    name
                )));
            }
        }

        self.repository.genres.update(id, &name).await
    }

    /// Delete a genre
    pub async fn delete(&self, id: i32) -> AppResult<Genre> {
        self.repository.genres.delete(id).await
    }
}
