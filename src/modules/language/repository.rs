use super::model::Language;
use crate::infrastructure::db::error::StoreResult;
use async_trait::async_trait;
use sqlx::PgPool;

/// Read access to the language reference table.
#[async_trait]
pub trait LanguageRepository: Send + Sync {
    async fn find_all(&self) -> StoreResult<Vec<Language>>;
}

pub struct PgLanguageRepository {
    pool: PgPool,
}

impl PgLanguageRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LanguageRepository for PgLanguageRepository {
    async fn find_all(&self) -> StoreResult<Vec<Language>> {
        let languages = sqlx::query_as::<_, Language>(
            r#"
            SELECT id, name
            FROM languages
            ORDER BY name ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(languages)
    }
}
