//! Movies repository for database operations

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::movie::{Movie, MovieQuery, MovieRow},
};

const MOVIE_COLUMNS: &str = r#"
    m.id, m.title, m.number_in_stock, m.daily_rental_rate,
    g.id as genre_id, g.name as genre_name
"#;

#[derive(Clone)]
pub struct MoviesRepository {
    pool: Pool<Postgres>,
}

impl MoviesRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get movie by ID with its genre
    pub async fn get_by_id(&self, id: i32) -> AppResult<Movie> {
        let row = sqlx::query_as::<_, MovieRow>(&format!(
            "SELECT {} FROM movies m JOIN genres g ON m.genre_id = g.id WHERE m.id = $1",
            MOVIE_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Movie with id {} not found", id)))?;
        Ok(row.into())
    }

    /// Search movies with filters, sorted by title
    pub async fn search(&self, query: &MovieQuery) -> AppResult<Vec<Movie>> {
        let mut conditions: Vec<String> = Vec::new();
        let mut binds: Vec<String> = Vec::new();
        let exact = query.exact.unwrap_or(false);

        if let Some(ref title) = query.title {
            if exact {
                binds.push(title.trim().to_string());
                conditions.push(format!("LOWER(m.title) = LOWER(${})", binds.len()));
            } else {
                binds.push(format!("%{}%", title.trim()));
                conditions.push(format!("m.title ILIKE ${}", binds.len()));
            }
        }
        if let Some(ref genre) = query.genre {
            if exact {
                binds.push(genre.trim().to_string());
                conditions.push(format!("LOWER(g.name) = LOWER(${})", binds.len()));
            } else {
                binds.push(format!("%{}%", genre.trim()));
                conditions.push(format!("g.name ILIKE ${}", binds.len()));
            }
        }
        if let Some(min) = query.number_in_stock_min {
            conditions.push(format!("m.number_in_stock >= {}", min));
        }
        if let Some(max) = query.number_in_stock_max {
            conditions.push(format!("m.number_in_stock <= {}", max));
        }
        if let Some(min) = query.daily_rental_rate_min {
            conditions.push(format!("m.daily_rental_rate >= {}", min));
        }
        if let Some(max) = query.daily_rental_rate_max {
            conditions.push(format!("m.daily_rental_rate <= {}", max));
        }

        let where_clause = if conditions.is_empty() {
            "TRUE".to_string()
        } else {
            conditions.join(" AND ")
        };

        let sql = format!(
            "SELECT {} FROM movies m JOIN genres g ON m.genre_id = g.id WHERE {} ORDER BY m.title",
            MOVIE_COLUMNS, where_clause
        );

        let mut select = sqlx::query_as::<_, MovieRow>(&sql);
        for bind in &binds {
            select = select.bind(bind);
        }

        let rows = select.fetch_all(&self.pool).await?;
        Ok(rows.into_iter().map(Movie::from).collect())
    }

    /// Find a movie with the same title (case-insensitive) and genre
    pub async fn find_duplicate(&self, title: &str, genre_id: i32) -> AppResult<Option<Movie>> {
        let row = sqlx::query_as::<_, MovieRow>(&format!(
            r#"
            SELECT {} FROM movies m JOIN genres g ON m.genre_id = g.id
            WHERE LOWER(m.title) = LOWER($1) AND m.genre_id = $2
            "#,
            MOVIE_COLUMNS
        ))
        .bind(title.trim())
        .bind(genre_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(Movie::from))
    }

    /// Create a new movie
    pub async fn create(
        &self,
        title: &str,
        genre_id: i32,
        number_in_stock: i32,
        daily_rental_rate: f64,
    ) -> AppResult<Movie> {
        let id: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO movies (title, genre_id, number_in_stock, daily_rental_rate)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(title.trim())
        .bind(genre_id)
        .bind(number_in_stock)
        .bind(daily_rental_rate)
        .fetch_one(&self.pool)
        .await?;

        self.get_by_id(id).await
    }

    /// Update an existing movie, keeping unspecified fields
    pub async fn update(
        &self,
        id: i32,
        title: Option<&str>,
        genre_id: Option<i32>,
        number_in_stock: Option<i32>,
        daily_rental_rate: Option<f64>,
    ) -> AppResult<Movie> {
        let updated = sqlx::query(
            r#"
            UPDATE movies
            SET title = COALESCE($1, title),
                genre_id = COALESCE($2, genre_id),
                number_in_stock = COALESCE($3, number_in_stock),
                daily_rental_rate = COALESCE($4, daily_rental_rate)
            WHERE id = $5
            "#,
        )
        .bind(title.map(str::trim))
        .bind(genre_id)
        .bind(number_in_stock)
        .bind(daily_rental_rate)
        .bind(id)
        .execute(&self.pool)
        .await?;

        if updated.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Movie with id {} not found", id)));
        }

        self.get_by_id(id).await
    }

    /// Delete a movie, returning the removed record
    pub async fn delete(&self, id: i32) -> AppResult<Movie> {
        let movie = self.get_by_id(id).await?;

        sqlx::query("DELETE FROM movies WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(movie)
    }
}
