use super::model::Genre;
use crate::common::response::{ApiError, ApiSuccess, MessageResponse};
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse};
use tracing::error;

/// List all genres
#[utoipa::path(
    get,
    path = "/genres",
    responses(
        (status = 200, description = "List of genres", body = Vec<Genre>),
        (status = 500, description = "Store failure", body = MessageResponse)
    ),
    tag = "Catalog"
)]
pub async fn list_genres(State(state): State<AppState>) -> impl IntoResponse {
    match state.genres.find_all().await {
        Ok(genres) => ApiSuccess(genres, StatusCode::OK).into_response(),
        Err(e) => {
            error!(error = %e, "failed to list genres");
            ApiError("failed to list genres".to_string(), StatusCode::INTERNAL_SERVER_ERROR)
                .into_response()
        }
    }
}
