use super::dto::{CreateMovieRequest, UpdateMovieRequest};
use super::error::MovieError;
use super::model::{MovieChanges, MovieDetails, NewMovie};
use crate::state::AppState;
use tracing::info;

pub struct MovieService;

impl MovieService {
    pub async fn list(state: AppState) -> Result<Vec<MovieDetails>, MovieError> {
        Ok(state.movies.list().await?)
    }

    pub async fn get(state: AppState, id: i32) -> Result<MovieDetails, MovieError> {
        state
            .movies
            .find_details(id)
            .await?
            .ok_or(MovieError::NotFound)
    }

    pub async fn create(state: AppState, req: CreateMovieRequest) -> Result<(), MovieError> {
        // The unique index still guards concurrent creates; this keeps the usual path off it.
        if state.movies.find_by_title(&req.title).await?.is_some() {
            return Err(MovieError::DuplicateTitle);
        }

        let new_movie = NewMovie::try_from(req)?;

        let movie = state.movies.create(&new_movie).await?;
        info!(id = movie.id, title = %movie.title, "movie registered");
        Ok(())
    }

    pub async fn update(state: AppState, id: i32, req: UpdateMovieRequest) -> Result<(), MovieError> {
        if state.movies.find_by_id(id).await?.is_none() {
            return Err(MovieError::NotFound);
        }

        let changes = MovieChanges::try_from(req)?;

        state
            .movies
            .update(id, &changes)
            .await?
            .ok_or(MovieError::NotFound)?;

        info!(id, "movie updated");
        Ok(())
    }

    pub async fn delete(state: AppState, id: i32) -> Result<(), MovieError> {
        if state.movies.find_by_id(id).await?.is_none() {
            return Err(MovieError::NotFound);
        }

        if !state.movies.delete(id).await? {
            return Err(MovieError::NotFound);
        }

        info!(id, "movie removed");
        Ok(())
    }

    pub async fn list_by_genre(state: AppState, genre_name: &str) -> Result<Vec<MovieDetails>, MovieError> {
        Ok(state.movies.list_by_genre_name(genre_name).await?)
    }
}
