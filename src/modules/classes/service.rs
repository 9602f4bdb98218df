use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::modules::classes::model::Classe;
use crate::utils::errors::AppError;

pub struct ClasseService;

impl ClasseService {
    #[instrument(skip(db))]
    pub async fn find_all(db: &PgPool) -> Result<Vec<Classe>, AppError> {
        let classes = sqlx::query_as::<_, Classe>("SELECT id, level FROM classes ORDER BY level")
            .fetch_all(db)
            .await?;

        Ok(classes)
    }

    #[instrument(skip(db))]
    pub async fn find_by_id(db: &PgPool, class_id: Uuid) -> Result<Option<Classe>, AppError> {
        let classe = sqlx::query_as::<_, Classe>("SELECT id, level FROM classes WHERE id = $1")
            .bind(class_id)
            .fetch_optional(db)
            .await?;

        Ok(classe)
    }

    #[instrument(skip(db))]
    pub async fn find_by_level(db: &PgPool, level: &str) -> Result<Option<Classe>, AppError> {
        let classe = sqlx::query_as::<_, Classe>("SELECT id, level FROM classes WHERE level = $1")
            .bind(level)
            .fetch_optional(db)
            .await?;

        Ok(classe)
    }

    #[instrument(skip(db))]
    pub async fn create(db: &PgPool, level: &str) -> Result<Classe, AppError> {
        let classe = sqlx::query_as::<_, Classe>(
            "INSERT INTO classes (level) VALUES ($1) RETURNING id, level",
        )
        .bind(level)
        .fetch_one(db)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e
                && db_err.is_unique_violation()
            {
                return AppError::bad_request(anyhow::anyhow!(
                    "Une classe avec ce niveau existe déjà"
                ));
            }
            AppError::from(e)
        })?;

        Ok(classe)
    }

    /// Looks the class up by level, creating it when absent. Used by the
    /// lesson-creation flow, which accepts free-form class levels.
    #[instrument(skip(db))]
    pub async fn find_or_create_by_level(db: &PgPool, level: &str) -> Result<Classe, AppError> {
        if let Some(classe) = Self::find_by_level(db, level).await? {
            return Ok(classe);
        }

        Self::create(db, level).await
    }
}
