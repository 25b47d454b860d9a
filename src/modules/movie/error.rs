use axum::http::StatusCode;
use tracing::{debug, error};

use crate::common::response::ApiError;
use crate::infrastructure::db::error::StoreError;

#[derive(Debug, thiserror::Error)]
pub enum MovieError {
    #[error("movie not found")]
    NotFound,

    #[error("a movie with this title already exists")]
    DuplicateTitle,

    #[error("invalid release date: {0}")]
    InvalidReleaseDate(String),

    #[error(transparent)]
    Store(StoreError),
}

impl From<StoreError> for MovieError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::UniqueViolation { .. } => MovieError::DuplicateTitle,
            other => MovieError::Store(other),
        }
    }
}

/// The operation a handler performs; picks the message for store failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovieAction {
    List,
    Fetch,
    Register,
    Update,
    Remove,
    FilterByGenre,
}

impl MovieAction {
    pub fn failure_message(self) -> &'static str {
        match self {
            MovieAction::List => "failed to list movies",
            MovieAction::Fetch => "failed to fetch movie",
            MovieAction::Register => "failed to register movie",
            MovieAction::Update => "failed to update movie record",
            MovieAction::Remove => "failed to remove movie",
            MovieAction::FilterByGenre => "failed to filter movies by genre",
        }
    }
}

impl MovieError {
    pub fn into_api_error(self, action: MovieAction) -> ApiError {
        match self {
            MovieError::NotFound => {
                debug!(?action, "movie not found");
                ApiError(self.to_string(), StatusCode::NOT_FOUND)
            }
            MovieError::DuplicateTitle => {
                debug!(?action, "duplicate movie title");
                ApiError(self.to_string(), StatusCode::CONFLICT)
            }
            MovieError::InvalidReleaseDate(_) => ApiError(self.to_string(), StatusCode::BAD_REQUEST),
            MovieError::Store(e) => {
                error!(?action, error = %e, "movie store failure");
                ApiError(
                    action.failure_message().to_string(),
                    StatusCode::INTERNAL_SERVER_ERROR,
                )
            }
        }
    }
}
