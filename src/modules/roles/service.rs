use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::modules::roles::model::Role;
use crate::utils::errors::AppError;

pub struct RoleService;

impl RoleService {
    #[instrument(skip(db))]
    pub async fn find_all(db: &PgPool) -> Result<Vec<Role>, AppError> {
        let roles = sqlx::query_as::<_, Role>("SELECT id, name FROM roles ORDER BY id")
            .fetch_all(db)
            .await?;

        Ok(roles)
    }

    #[instrument(skip(db))]
    pub async fn find_by_id(db: &PgPool, role_id: Uuid) -> Result<Option<Role>, AppError> {
        let role = sqlx::query_as::<_, Role>("SELECT id, name FROM roles WHERE id = $1")
            .bind(role_id)
            .fetch_optional(db)
            .await?;

        Ok(role)
    }
}
