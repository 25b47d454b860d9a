use super::dto::{CreateMovieRequest, UpdateMovieRequest};
use super::error::MovieAction;
use super::model::MovieDetails;
use super::service::MovieService;
use crate::common::response::{ApiEmpty, ApiError, ApiSuccess, MessageResponse};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use axum_extra::extract::WithRejection;

/// List all movies ordered by title
#[utoipa::path(
    get,
    path = "/movies",
    responses(
        (status = 200, description = "Movies with genre and language", body = Vec<MovieDetails>),
        (status = 500, description = "Store failure", body = MessageResponse)
    ),
    tag = "Movies"
)]
pub async fn list_movies(State(state): State<AppState>) -> impl IntoResponse {
    match MovieService::list(state).await {
        Ok(movies) => ApiSuccess(movies, StatusCode::OK).into_response(),
        Err(e) => e.into_api_error(MovieAction::List).into_response(),
    }
}

/// Register a movie
#[utoipa::path(
    post,
    path = "/movies",
    request_body = CreateMovieRequest,
    responses(
        (status = 201, description = "Movie registered"),
        (status = 400, description = "Malformed body or release date", body = MessageResponse),
        (status = 409, description = "A movie with this title already exists", body = MessageResponse),
        (status = 500, description = "Store failure", body = MessageResponse)
    ),
    tag = "Movies"
)]
pub async fn create_movie(
    State(state): State<AppState>,
    WithRejection(Json(req), _): WithRejection<Json<CreateMovieRequest>, ApiError>,
) -> impl IntoResponse {
    match MovieService::create(state, req).await {
        Ok(()) => ApiEmpty(StatusCode::CREATED).into_response(),
        Err(e) => e.into_api_error(MovieAction::Register).into_response(),
    }
}

/// Get a movie by id
#[utoipa::path(
    get,
    path = "/movies/{id}",
    params(
        ("id" = i32, Path, description = "Movie ID")
    ),
    responses(
        (status = 200, description = "Movie with genre and language", body = MovieDetails),
        (status = 404, description = "Movie not found", body = MessageResponse),
        (status = 500, description = "Store failure", body = MessageResponse)
    ),
    tag = "Movies"
)]
pub async fn get_movie(
    State(state): State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<i32>, ApiError>,
) -> impl IntoResponse {
    match MovieService::get(state, id).await {
        Ok(movie) => ApiSuccess(movie, StatusCode::OK).into_response(),
        Err(e) => e.into_api_error(MovieAction::Fetch).into_response(),
    }
}

/// Update some fields of a movie
#[utoipa::path(
    put,
    path = "/movies/{id}",
    params(
        ("id" = i32, Path, description = "Movie ID")
    ),
    request_body = UpdateMovieRequest,
    responses(
        (status = 200, description = "Movie updated"),
        (status = 400, description = "Malformed body or release date", body = MessageResponse),
        (status = 404, description = "Movie not found", body = MessageResponse),
        (status = 409, description = "A movie with this title already exists", body = MessageResponse),
        (status = 500, description = "Store failure", body = MessageResponse)
    ),
    tag = "Movies"
)]
pub async fn update_movie(
    State(state): State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<i32>, ApiError>,
    WithRejection(Json(req), _): WithRejection<Json<UpdateMovieRequest>, ApiError>,
) -> impl IntoResponse {
    match MovieService::update(state, id, req).await {
        Ok(()) => ApiEmpty(StatusCode::OK).into_response(),
        Err(e) => e.into_api_error(MovieAction::Update).into_response(),
    }
}

/// Delete a movie
#[utoipa::path(
    delete,
    path = "/movies/{id}",
    params(
        ("id" = i32, Path, description = "Movie ID")
    ),
    responses(
        (status = 200, description = "Movie removed"),
        (status = 404, description = "Movie not found", body = MessageResponse),
        (status = 500, description = "Store failure", body = MessageResponse)
    ),
    tag = "Movies"
)]
pub async fn delete_movie(
    State(state): State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<i32>, ApiError>,
) -> impl IntoResponse {
    match MovieService::delete(state, id).await {
        Ok(()) => ApiEmpty(StatusCode::OK).into_response(),
        Err(e) => e.into_api_error(MovieAction::Remove).into_response(),
    }
}

/// List the movies of a genre, matched by name ignoring case
#[utoipa::path(
    get,
    path = "/movies/genre/{genre_name}",
    params(
        ("genre_name" = String, Path, description = "Genre name")
    ),
    responses(
        (status = 200, description = "Movies of the genre", body = Vec<MovieDetails>),
        (status = 500, description = "Store failure", body = MessageResponse)
    ),
    tag = "Movies"
)]
pub async fn list_movies_by_genre(
    State(state): State<AppState>,
    WithRejection(Path(genre_name), _): WithRejection<Path<String>, ApiError>,
) -> impl IntoResponse {
    match MovieService::list_by_genre(state, &genre_name).await {
        Ok(movies) => ApiSuccess(movies, StatusCode::OK).into_response(),
        Err(e) => e.into_api_error(MovieAction::FilterByGenre).into_response(),
    }
}
