use super::model::{Movie, MovieChanges, MovieDetails, MovieDetailsRow, NewMovie};
use crate::infrastructure::db::error::StoreResult;
use async_trait::async_trait;
use sqlx::PgPool;

/// Persistence operations the movie handlers rely on.
///
/// Title comparisons are case-insensitive. Inserting or updating to a title that
/// already exists in another case fails with `StoreError::UniqueViolation`.
#[async_trait]
pub trait MovieRepository: Send + Sync {
    /// All movies with their genre and language, ordered by title.
    async fn list(&self) -> StoreResult<Vec<MovieDetails>>;

    async fn list_by_genre_name(&self, genre_name: &str) -> StoreResult<Vec<MovieDetails>>;

    async fn find_details(&self, id: i32) -> StoreResult<Option<MovieDetails>>;

    async fn find_by_id(&self, id: i32) -> StoreResult<Option<Movie>>;

    async fn find_by_title(&self, title: &str) -> StoreResult<Option<Movie>>;

    async fn create(&self, movie: &NewMovie) -> StoreResult<Movie>;

    /// Returns `None` when no row has this id.
    async fn update(&self, id: i32, changes: &MovieChanges) -> StoreResult<Option<Movie>>;

    /// Returns whether a row was removed.
    async fn delete(&self, id: i32) -> StoreResult<bool>;
}

pub struct PgMovieRepository {
    pool: PgPool,
}

impl PgMovieRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MovieRepository for PgMovieRepository {
    async fn list(&self) -> StoreResult<Vec<MovieDetails>> {
        let rows = sqlx::query_as::<_, MovieDetailsRow>(
            r#"
            SELECT m.id, m.title, m.genre_id, m.language_id, m.oscar_count, m.release_date,
                   g.name AS genre_name, l.name AS language_name
            FROM movies m
            JOIN genres g ON g.id = m.genre_id
            JOIN languages l ON l.id = m.language_id
            ORDER BY m.title ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(MovieDetails::from).collect())
    }

    async fn list_by_genre_name(&self, genre_name: &str) -> StoreResult<Vec<MovieDetails>> {
        let rows = sqlx::query_as::<_, MovieDetailsRow>(
            r#"
            SELECT m.id, m.title, m.genre_id, m.language_id, m.oscar_count, m.release_date,
                   g.name AS genre_name, l.name AS language_name
            FROM movies m
            JOIN genres g ON g.id = m.genre_id
            JOIN languages l ON l.id = m.language_id
            WHERE LOWER(g.name) = LOWER($1)
            ORDER BY m.title ASC
            "#,
        )
        .bind(genre_name)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(MovieDetails::from).collect())
    }

    async fn find_details(&self, id: i32) -> StoreResult<Option<MovieDetails>> {
        let row = sqlx::query_as::<_, MovieDetailsRow>(
            r#"
            SELECT m.id, m.title, m.genre_id, m.language_id, m.oscar_count, m.release_date,
                   g.name AS genre_name, l.name AS language_name
            FROM movies m
            JOIN genres g ON g.id = m.genre_id
            JOIN languages l ON l.id = m.language_id
            WHERE m.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(MovieDetails::from))
    }

    async fn find_by_id(&self, id: i32) -> StoreResult<Option<Movie>> {
        let movie = sqlx::query_as::<_, Movie>(
            r#"
            SELECT id, title, genre_id, language_id, oscar_count, release_date
            FROM movies
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(movie)
    }

    async fn find_by_title(&self, title: &str) -> StoreResult<Option<Movie>> {
        let movie = sqlx::query_as::<_, Movie>(
            r#"
            SELECT id, title, genre_id, language_id, oscar_count, release_date
            FROM movies
            WHERE LOWER(title) = LOWER($1)
            LIMIT 1
            "#,
        )
        .bind(title)
        .fetch_optional(&self.pool)
        .await?;

        Ok(movie)
    }

    async fn create(&self, movie: &NewMovie) -> StoreResult<Movie> {
        let movie = sqlx::query_as::<_, Movie>(
            r#"
            INSERT INTO movies (title, genre_id, language_id, oscar_count, release_date)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, title, genre_id, language_id, oscar_count, release_date
            "#,
        )
        .bind(&movie.title)
        .bind(movie.genre_id)
        .bind(movie.language_id)
        .bind(movie.oscar_count)
        .bind(movie.release_date)
        .fetch_one(&self.pool)
        .await?;

        Ok(movie)
    }

    async fn update(&self, id: i32, changes: &MovieChanges) -> StoreResult<Option<Movie>> {
        let movie = sqlx::query_as::<_, Movie>(
            r#"
            UPDATE movies
            SET
                title = COALESCE($1, title),
                genre_id = COALESCE($2, genre_id),
                language_id = COALESCE($3, language_id),
                oscar_count = COALESCE($4, oscar_count),
                release_date = COALESCE($5, release_date)
            WHERE id = $6
            RETURNING id, title, genre_id, language_id, oscar_count, release_date
            "#,
        )
        .bind(changes.title.as_deref())
        .bind(changes.genre_id)
        .bind(changes.language_id)
        .bind(changes.oscar_count)
        .bind(changes.release_date)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(movie)
    }

    async fn delete(&self, id: i32) -> StoreResult<bool> {
        let result = sqlx::query("DELETE FROM movies WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
