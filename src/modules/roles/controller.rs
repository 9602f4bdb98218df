use axum::Json;
use axum::extract::State;
use tracing::instrument;

use crate::state::AppState;
use crate::utils::errors::AppError;

use super::model::Role;
use super::service::RoleService;

/// List the selectable roles for the registration form
#[utoipa::path(
    get,
    path = "/api/roles",
    responses(
        (status = 200, description = "All roles", body = [Role]),
        (status = 500, description = "Internal server error")
    ),
    tag = "Reference data"
)]
#[instrument(skip_all)]
pub async fn list_roles(State(state): State<AppState>) -> Result<Json<Vec<Role>>, AppError> {
    let roles = RoleService::find_all(&state.db).await?;
    Ok(Json(roles))
}
