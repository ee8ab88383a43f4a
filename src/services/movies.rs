//! Movie catalog service

use crate::{
    error::{AppError, AppResult},
    models::{
        genre::Genre,
        movie::{CreateMovie, Movie, MovieQuery, UpdateMovie},
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct MoviesService {
    repository: Repository,
}

impl MoviesService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Search movies with filters
    pub async fn search(&self, query: &MovieQuery) -> AppResult<Vec<Movie>> {
        self.repository.movies.search(query).await
    }

    /// Get movie by ID
    pub async fn get(&self, id: i32) -> AppResult<Movie> {
        self.repository.movies.get_by_id(id).await
    }

    /// Create a new movie. The genre must resolve (by id or name), and no
    /// movie with the same title + genre may exist.
    pub async fn create(&self, movie: CreateMovie) -> AppResult<Movie> {
        let genre = self
            .resolve_genre(movie.genre_id, movie.genre_name.as_deref())
            .await?;

        if self
            .repository
            .movies
            .find_duplicate(&movie.title, genre.id)
            .await?
            .is_some()
        {
            return Err(AppError::Conflict(
                "Movie with the same title and genre already exists".to_string(),
            ));
        }

        self.repository
            .movies
            .create(
                &movie.title,
                genre.id,
                movie.number_in_stock.unwrap_or(0),
                movie.daily_rental_rate,
            )
            .await
    }

    /// Update a movie, re-validating the genre and the duplicate guard
    pub async fn update(&self, id: i32, update: UpdateMovie) -> AppResult<Movie> {
        let current = self.repository.movies.get_by_id(id).await?;

        let genre = if update.genre_id.is_some() || update.genre_name.is_some() {
            self.resolve_genre(update.genre_id, update.genre_name.as_deref())
                .await?
        } else {
            current.genre.clone()
        };

        let title = update.title.as_deref().unwrap_or(&current.title);
        if let Some(duplicate) = self.repository.movies.find_duplicate(title, genre.id).await? {
            if duplicate.id != id {
                return Err(AppError::Conflict(
                    "Movie with the same title and genre already exists".to_string(),
                ));
            }
        }

        self.repository
            .movies
            .update(
                id,
                update.title.as_deref(),
                Some(genre.id),
                update.number_in_stock,
                update.daily_rental_rate,
            )
            .await
    }

    /// Delete a movie
    pub async fn delete(&self, id: i32) -> AppResult<Movie> {
        self.repository.movies.delete(id).await
    }

    async fn resolve_genre(
        &self,
        genre_id: Option<i32>,
        genre_name: Option<&str>,
    ) -> AppResult<Genre> {
        if let Some(id) = genre_id {
            return self
                .repository
                .genres
                .get_by_id(id)
                .await
                .map_err(|_| AppError::BadRequest("Genre is invalid".to_string()));
        }
        if let Some(name) = genre_name {
            return self
                .repository
                .genres
                .find_by_name(name)
                .await?
                .ok_or_else(|| AppError::BadRequest("Genre is invalid".to_string()));
        }
        Err(AppError::BadRequest("Genre is required".to_string()))
    }
}
