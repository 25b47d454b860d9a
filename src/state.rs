use std::sync::Arc;

use crate::infrastructure::db::pool::DbPool;
use crate::modules::genre::repository::{GenreRepository, PgGenreRepository};
use crate::modules::language::repository::{LanguageRepository, PgLanguageRepository};
use crate::modules::movie::repository::{MovieRepository, PgMovieRepository};

#[derive(Clone)]
pub struct AppState {
    pub movies: Arc<dyn MovieRepository>,
    pub genres: Arc<dyn GenreRepository>,
    pub languages: Arc<dyn LanguageRepository>,
}

impl AppState {
    pub fn new(
        movies: Arc<dyn MovieRepository>,
        genres: Arc<dyn GenreRepository>,
        languages: Arc<dyn LanguageRepository>,
    ) -> Self {
        Self {
            movies,
            genres,
            languages,
        }
    }

    /// State backed by PostgreSQL repositories sharing one pool.
    pub fn from_pool(db: DbPool) -> Self {
        Self::new(
            Arc::new(PgMovieRepository::new(db.clone())),
            Arc::new(PgGenreRepository::new(db.clone())),
            Arc::new(PgLanguageRepository::new(db)),
        )
    }
}
