pub mod seeder;

use sqlx::PgPool;

use crate::modules::roles::model::role_ids;
use crate::utils::password::{hash_password, is_acceptable};

/// Creates a Principal account directly, bypassing the public
/// registration endpoint. This is the bootstrap path for a fresh
/// deployment.
pub async fn create_principal(
    db: &PgPool,
    first_name: &str,
    last_name: &str,
    email: &str,
    password: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    if !is_acceptable(password) {
        return Err(
            "Le mot de passe doit contenir au moins 8 caractères, un chiffre, \
             une lettre en majuscule, une lettre en minuscule et un caractère spécial."
                .into(),
        );
    }

    let hashed_password =
        hash_password(password).map_err(|e| format!("Failed to hash password: {}", e.error))?;

    let result = sqlx::query(
        "INSERT INTO principals (first_name, last_name, email, password, role_id)
         VALUES ($1, $2, $3, $4, $5)
         ON CONFLICT (email) DO NOTHING",
    )
    .bind(first_name)
    .bind(last_name)
    .bind(email)
    .bind(hashed_password)
    .bind(role_ids::PRINCIPAL)
    .execute(db)
    .await?;

    if result.rows_affected() == 0 {
        return Err("Un compte avec cet email existe déjà".into());
    }

    Ok(())
}
