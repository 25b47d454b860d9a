use super::model::Language;
use crate::common::response::{ApiError, ApiSuccess, MessageResponse};
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse};
use tracing::error;

/// List all languages
#[utoipa::path(
    get,
    path = "/languages",
    responses(
        (status = 200, description = "List of languages", body = Vec<Language>),
        (status = 500, description = "Store failure", body = MessageResponse)
    ),
    tag = "Catalog"
)]
pub async fn list_languages(State(state): State<AppState>) -> impl IntoResponse {
    match state.languages.find_all().await {
        Ok(languages) => ApiSuccess(languages, StatusCode::OK).into_response(),
        Err(e) => {
            error!(error = %e, "failed to list languages");
            ApiError("failed to list languages".to_string(), StatusCode::INTERNAL_SERVER_ERROR)
                .into_response()
        }
    }
}
