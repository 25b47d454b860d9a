use super::model::Genre;
use crate::infrastructure::db::error::StoreResult;
use async_trait::async_trait;
use sqlx::PgPool;

/// Read access to the genre reference table.
#[async_trait]
pub trait GenreRepository: Send + Sync {
    async fn find_all(&self) -> StoreResult<Vec<Genre>>;
}

pub struct PgGenreRepository {
    pool: PgPool,
}

impl PgGenreRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GenreRepository for PgGenreRepository {
    async fn find_all(&self) -> StoreResult<Vec<Genre>> {
        let genres = sqlx::query_as::<_, Genre>(
            r#"
            SELECT id, name
            FROM genres
            ORDER BY name ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(genres)
    }
}
