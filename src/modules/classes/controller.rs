use axum::Json;
use axum::extract::State;
use tracing::instrument;

use crate::state::AppState;
use crate::utils::errors::AppError;

use super::model::Classe;
use super::service::ClasseService;

/// List the selectable classes for the registration form
#[utoipa::path(
    get,
    path = "/api/classes",
    responses(
        (status = 200, description = "All classes", body = [Classe]),
        (status = 500, description = "Internal server error")
    ),
    tag = "Reference data"
)]
#[instrument(skip_all)]
pub async fn list_classes(State(state): State<AppState>) -> Result<Json<Vec<Classe>>, AppError> {
    let classes = ClasseService::find_all(&state.db).await?;
    Ok(Json(classes))
}
