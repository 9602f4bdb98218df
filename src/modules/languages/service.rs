use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::modules::languages::model::Language;
use crate::utils::errors::AppError;

pub struct LanguageService;

impl LanguageService {
    #[instrument(skip(db))]
    pub async fn find_all(db: &PgPool) -> Result<Vec<Language>, AppError> {
        let languages = sqlx::query_as::<_, Language>("SELECT id, name FROM languages ORDER BY name")
            .fetch_all(db)
            .await?;

        Ok(languages)
    }

    #[instrument(skip(db))]
    pub async fn find_by_id(db: &PgPool, language_id: Uuid) -> Result<Option<Language>, AppError> {
        let language = sqlx::query_as::<_, Language>("SELECT id, name FROM languages WHERE id = $1")
            .bind(language_id)
            .fetch_optional(db)
            .await?;

        Ok(language)
    }
}
