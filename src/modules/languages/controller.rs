use axum::Json;
use axum::extract::State;
use tracing::instrument;

use crate::state::AppState;
use crate::utils::errors::AppError;

use super::model::Language;
use super::service::LanguageService;

/// List the selectable LV2 languages for the registration form
#[utoipa::path(
    get,
    path = "/api/languages",
    responses(
        (status = 200, description = "All languages", body = [Language]),
        (status = 500, description = "Internal server error")
    ),
    tag = "Reference data"
)]
#[instrument(skip_all)]
pub async fn list_languages(
    State(state): State<AppState>,
) -> Result<Json<Vec<Language>>, AppError> {
    let languages = LanguageService::find_all(&state.db).await?;
    Ok(Json(languages))
}
