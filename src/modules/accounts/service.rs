use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::modules::accounts::model::{
    AccountKind, AccountRecord, BaseAccountRow, CollegianRow, NewAccount, ReferentRow,
};
use crate::utils::errors::AppError;

pub struct AccountService;

impl AccountService {
    /// Looks a credential up across all four role tables.
    ///
    /// Table precedence is fixed: principals, teacher_referents, teachers,
    /// collegians; the first match wins. The order only matters if one
    /// email ever ends up in two tables, but leaving it undefined would
    /// make login behavior nondeterministic in exactly that case.
    #[instrument(skip(db))]
    pub async fn find_by_email(
        db: &PgPool,
        email: &str,
    ) -> Result<Option<AccountRecord>, AppError> {
        let principal = sqlx::query_as::<_, BaseAccountRow>(
            "SELECT id, first_name, last_name, email, password, role_id
             FROM principals WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(db)
        .await?;

        if let Some(row) = principal {
            return Ok(Some(row.into_record(AccountKind::Principal)));
        }

        let referent = sqlx::query_as::<_, ReferentRow>(
            "SELECT id, first_name, last_name, email, password, class_id, role_id
             FROM teacher_referents WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(db)
        .await?;

        if let Some(row) = referent {
            return Ok(Some(row.into()));
        }

        let teacher = sqlx::query_as::<_, BaseAccountRow>(
            "SELECT id, first_name, last_name, email, password, role_id
             FROM teachers WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(db)
        .await?;

        if let Some(row) = teacher {
            return Ok(Some(row.into_record(AccountKind::Professeur)));
        }

        let collegian = sqlx::query_as::<_, CollegianRow>(
            "SELECT id, first_name, last_name, email, password, class_id, language_id, role_id
             FROM collegians WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(db)
        .await?;

        Ok(collegian.map(Into::into))
    }

    /// Whether an email is already registered in ANY of the four role
    /// tables. One email gets one account on the platform, whatever the
    /// role. Checked in fixed order: principals, teachers,
    /// teacher_referents, collegians.
    #[instrument(skip(db))]
    pub async fn email_exists(db: &PgPool, email: &str) -> Result<bool, AppError> {
        for table in ["principals", "teachers", "teacher_referents", "collegians"] {
            let exists = sqlx::query_scalar::<_, bool>(&format!(
                "SELECT EXISTS(SELECT 1 FROM {} WHERE email = $1)",
                table
            ))
            .bind(email)
            .fetch_one(db)
            .await?;

            if exists {
                return Ok(true);
            }
        }

        Ok(false)
    }

    #[instrument(skip(db, account))]
    pub async fn create_principal(db: &PgPool, account: &NewAccount) -> Result<Uuid, AppError> {
        let id = sqlx::query_scalar::<_, Uuid>(
            "INSERT INTO principals (first_name, last_name, email, password, role_id)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING id",
        )
        .bind(&account.first_name)
        .bind(&account.last_name)
        .bind(&account.email)
        .bind(&account.password_hash)
        .bind(account.role_id)
        .fetch_one(db)
        .await?;

        Ok(id)
    }

    #[instrument(skip(db, account))]
    pub async fn create_teacher(db: &PgPool, account: &NewAccount) -> Result<Uuid, AppError> {
        let id = sqlx::query_scalar::<_, Uuid>(
            "INSERT INTO teachers (first_name, last_name, email, password, role_id)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING id",
        )
        .bind(&account.first_name)
        .bind(&account.last_name)
        .bind(&account.email)
        .bind(&account.password_hash)
        .bind(account.role_id)
        .fetch_one(db)
        .await?;

        Ok(id)
    }

    #[instrument(skip(db, account))]
    pub async fn create_teacher_referent(
        db: &PgPool,
        account: &NewAccount,
        class_id: Uuid,
    ) -> Result<Uuid, AppError> {
        let id = sqlx::query_scalar::<_, Uuid>(
            "INSERT INTO teacher_referents (first_name, last_name, email, password, class_id, role_id)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING id",
        )
        .bind(&account.first_name)
        .bind(&account.last_name)
        .bind(&account.email)
        .bind(&account.password_hash)
        .bind(class_id)
        .bind(account.role_id)
        .fetch_one(db)
        .await?;

        Ok(id)
    }

    #[instrument(skip(db, account))]
    pub async fn create_collegian(
        db: &PgPool,
        account: &NewAccount,
        class_id: Uuid,
        language_id: Option<Uuid>,
    ) -> Result<Uuid, AppError> {
        let id = sqlx::query_scalar::<_, Uuid>(
            "INSERT INTO collegians (first_name, last_name, email, password, class_id, language_id, role_id)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING id",
        )
        .bind(&account.first_name)
        .bind(&account.last_name)
        .bind(&account.email)
        .bind(&account.password_hash)
        .bind(class_id)
        .bind(language_id)
        .bind(account.role_id)
        .fetch_one(db)
        .await?;

        Ok(id)
    }
}
