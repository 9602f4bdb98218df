use sqlx::PgPool;
use tracing::{debug, error, instrument};
use uuid::Uuid;

use crate::config::email::EmailConfig;
use crate::middleware::auth::SessionIdentity;
use crate::modules::accounts::model::NewAccount;
use crate::modules::accounts::service::AccountService;
use crate::modules::classes::model::Classe;
use crate::modules::classes::service::ClasseService;
use crate::modules::languages::service::LanguageService;
use crate::modules::roles::model::RoleName;
use crate::modules::roles::service::RoleService;
use crate::utils::email::EmailService;
use crate::utils::password::{hash_password, is_acceptable, verify_password};
use crate::utils::sanitize::escape_html;

use super::model::{LoginError, LoginFailure, RegisterDto, RegisterError, RegisterFailure};

pub struct AuthService;

impl AuthService {
    /// Runs the registration workflow: ordered validation with early-exit
    /// failure branches, then the role-specific insert, then the
    /// confirmation email. No partial account is ever created; a failed
    /// email send is reported but does not roll the account back.
    #[instrument(skip(db, email_config, dto))]
    pub async fn register(
        db: &PgPool,
        email_config: &EmailConfig,
        dto: RegisterDto,
    ) -> Result<(), RegisterError> {
        if dto.password != dto.confirm_password {
            return Err(RegisterFailure::PasswordMismatch.into());
        }

        if !is_acceptable(&dto.password) {
            return Err(RegisterFailure::WeakPassword.into());
        }

        if !dto.email.contains('@') || dto.email.starts_with('@') || dto.email.ends_with('@') {
            return Err(RegisterFailure::InvalidEmail.into());
        }

        let role_id = dto
            .id_role
            .as_deref()
            .filter(|raw| !raw.is_empty())
            .ok_or(RegisterFailure::RoleNotSelected)?
            .parse::<Uuid>()
            .map_err(|_| RegisterFailure::RoleNotFound)?;

        let role = RoleService::find_by_id(db, role_id)
            .await?
            .ok_or(RegisterFailure::RoleNotFound)?;

        let role_name = RoleName::from_name(&role.name).ok_or(RegisterFailure::RoleNotFound)?;

        // One email, one account, across all four role tables.
        if AccountService::email_exists(db, &dto.email).await? {
            return Err(RegisterFailure::AccountExists.into());
        }

        let account = NewAccount {
            first_name: escape_html(dto.first_name.trim()),
            last_name: escape_html(dto.last_name.trim()),
            email: dto.email.trim().to_string(),
            password_hash: hash_password(&dto.password)?,
            role_id,
        };

        match role_name {
            RoleName::Principal => {
                AccountService::create_principal(db, &account).await?;
            }
            RoleName::Professeur => {
                AccountService::create_teacher(db, &account).await?;
            }
            RoleName::ProfesseurReferent => {
                let classe = Self::resolve_class(db, dto.id_class.as_deref()).await?;
                AccountService::create_teacher_referent(db, &account, classe.id).await?;
            }
            RoleName::Collegien => {
                let classe = Self::resolve_class(db, dto.id_class.as_deref()).await?;

                // The entry level carries no LV2 track; any submitted
                // language is ignored for it.
                let language_id = if classe.requires_language() {
                    Some(Self::resolve_language(db, dto.id_language.as_deref()).await?)
                } else {
                    None
                };

                AccountService::create_collegian(db, &account, classe.id, language_id).await?;
            }
        }

        if role_name.receives_confirmation_email() {
            let mailer = EmailService::new(email_config.clone());
            if let Err(e) = mailer
                .send_account_confirmation(&account.email, &account.first_name)
                .await
            {
                error!(error = %e.error, email = %account.email, "Account confirmation email failed");
                return Err(RegisterFailure::NotificationFailed.into());
            }
        }

        Ok(())
    }

    async fn resolve_class(
        db: &PgPool,
        id_class: Option<&str>,
    ) -> Result<Classe, RegisterError> {
        let class_id = id_class
            .filter(|raw| !raw.is_empty())
            .ok_or(RegisterFailure::ClassNotSelected)?
            .parse::<Uuid>()
            .map_err(|_| RegisterFailure::ClassNotFound)?;

        ClasseService::find_by_id(db, class_id)
            .await?
            .ok_or_else(|| RegisterFailure::ClassNotFound.into())
    }

    async fn resolve_language(
        db: &PgPool,
        id_language: Option<&str>,
    ) -> Result<Uuid, RegisterError> {
        let language_id = id_language
            .filter(|raw| !raw.is_empty())
            .ok_or(RegisterFailure::LanguageNotSelected)?
            .parse::<Uuid>()
            .map_err(|_| RegisterFailure::LanguageNotFound)?;

        LanguageService::find_by_id(db, language_id)
            .await?
            .map(|language| language.id)
            .ok_or_else(|| RegisterFailure::LanguageNotFound.into())
    }

    /// Runs the login workflow: cross-table lookup in fixed precedence
    /// order, password verification, role resolution. Returns the session
    /// identity the controller establishes.
    #[instrument(skip(db, password))]
    pub async fn login(
        db: &PgPool,
        email: &str,
        password: &str,
    ) -> Result<SessionIdentity, LoginError> {
        let account = AccountService::find_by_email(db, email)
            .await?
            .ok_or(LoginFailure::AccountNotFound)?;

        debug!(kind = ?account.kind, "Credential matched");

        if !verify_password(password, &account.password)? {
            return Err(LoginFailure::InvalidPassword.into());
        }

        let role = RoleService::find_by_id(db, account.role_id)
            .await?
            .ok_or(LoginFailure::RoleNotHandled)?;

        let role_name = RoleName::from_name(&role.name).ok_or(LoginFailure::RoleNotHandled)?;

        // Only collegians carry their class in the session; lesson scoping
        // reads it from there.
        let class_id = match role_name {
            RoleName::Collegien => account.class_id,
            _ => None,
        };

        Ok(SessionIdentity {
            account_id: account.id,
            role: role_name,
            class_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::roles::model::role_ids;

    fn email_config_disabled() -> EmailConfig {
        EmailConfig {
            enabled: false,
            smtp_host: "localhost".to_string(),
            smtp_port: 1025,
            smtp_username: "".to_string(),
            smtp_password: "".to_string(),
            from_email: "noreply@college-en-ligne.fr".to_string(),
            from_name: "Collège en ligne".to_string(),
            frontend_url: "http://localhost:3000".to_string(),
        }
    }

    async fn create_class(pool: &PgPool, level: &str) -> Uuid {
        sqlx::query_scalar::<_, Uuid>("INSERT INTO classes (level) VALUES ($1) RETURNING id")
            .bind(level)
            .fetch_one(pool)
            .await
            .unwrap()
    }

    async fn create_language(pool: &PgPool, name: &str) -> Uuid {
        sqlx::query_scalar::<_, Uuid>("INSERT INTO languages (name) VALUES ($1) RETURNING id")
            .bind(name)
            .fetch_one(pool)
            .await
            .unwrap()
    }

    fn dto(email: &str, role_id: Uuid) -> RegisterDto {
        RegisterDto {
            first_name: "Rosa".to_string(),
            last_name: "Angembang".to_string(),
            email: email.to_string(),
            password: "MamanRosa1.&".to_string(),
            confirm_password: "MamanRosa1.&".to_string(),
            id_role: Some(role_id.to_string()),
            id_class: None,
            id_language: None,
        }
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_register_principal(pool: PgPool) {
        let result =
            AuthService::register(&pool, &email_config_disabled(), dto("principal@test.fr", role_ids::PRINCIPAL))
                .await;

        assert!(result.is_ok());

        let identity = AuthService::login(&pool, "principal@test.fr", "MamanRosa1.&")
            .await
            .unwrap();
        assert_eq!(identity.role, RoleName::Principal);
        assert!(identity.class_id.is_none());
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_register_collegian_entry_level_without_language(pool: PgPool) {
        let class_id = create_class(&pool, "6ème").await;

        let mut dto = dto("eleve6@test.fr", role_ids::COLLEGIEN);
        dto.id_class = Some(class_id.to_string());

        let result = AuthService::register(&pool, &email_config_disabled(), dto).await;
        assert!(result.is_ok());

        let stored_language = sqlx::query_scalar::<_, Option<Uuid>>(
            "SELECT language_id FROM collegians WHERE email = $1",
        )
        .bind("eleve6@test.fr")
        .fetch_one(&pool)
        .await
        .unwrap();
        assert!(stored_language.is_none());
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_register_collegian_upper_level_requires_language(pool: PgPool) {
        let class_id = create_class(&pool, "5ème").await;

        let mut dto = dto("eleve5@test.fr", role_ids::COLLEGIEN);
        dto.id_class = Some(class_id.to_string());

        let err = AuthService::register(&pool, &email_config_disabled(), dto)
            .await
            .unwrap_err();
        assert_eq!(err.failure(), Some(RegisterFailure::LanguageNotSelected));
        assert_eq!(
            err.failure().unwrap().message(),
            "Veuillez sélectionner une langue"
        );

        // No partial account was created.
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM collegians WHERE email = $1)",
        )
        .bind("eleve5@test.fr")
        .fetch_one(&pool)
        .await
        .unwrap();
        assert!(!exists);
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_register_collegian_with_language(pool: PgPool) {
        let class_id = create_class(&pool, "4ème").await;
        let language_id = create_language(&pool, "Espagnol").await;

        let mut dto = dto("eleve4@test.fr", role_ids::COLLEGIEN);
        dto.id_class = Some(class_id.to_string());
        dto.id_language = Some(language_id.to_string());

        let result = AuthService::register(&pool, &email_config_disabled(), dto).await;
        assert!(result.is_ok());

        let stored_language = sqlx::query_scalar::<_, Option<Uuid>>(
            "SELECT language_id FROM collegians WHERE email = $1",
        )
        .bind("eleve4@test.fr")
        .fetch_one(&pool)
        .await
        .unwrap();
        assert_eq!(stored_language, Some(language_id));
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_register_rejects_password_mismatch(pool: PgPool) {
        let mut dto = dto("mismatch@test.fr", role_ids::PROFESSEUR);
        dto.confirm_password = "Autre1.&xyz".to_string();

        let err = AuthService::register(&pool, &email_config_disabled(), dto)
            .await
            .unwrap_err();
        assert_eq!(err.failure(), Some(RegisterFailure::PasswordMismatch));
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_register_rejects_weak_password(pool: PgPool) {
        let mut dto = dto("weak@test.fr", role_ids::PROFESSEUR);
        dto.password = "alllowercase1!".to_string();
        dto.confirm_password = "alllowercase1!".to_string();

        let err = AuthService::register(&pool, &email_config_disabled(), dto)
            .await
            .unwrap_err();
        assert_eq!(err.failure(), Some(RegisterFailure::WeakPassword));
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_register_mismatch_reported_before_weakness(pool: PgPool) {
        // Both checks would fail; the mismatch must win, matching the
        // order a user fills the form.
        let mut dto = dto("order@test.fr", role_ids::PROFESSEUR);
        dto.password = "weak".to_string();
        dto.confirm_password = "different".to_string();

        let err = AuthService::register(&pool, &email_config_disabled(), dto)
            .await
            .unwrap_err();
        assert_eq!(err.failure(), Some(RegisterFailure::PasswordMismatch));
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_register_requires_role(pool: PgPool) {
        let mut dto = dto("norole@test.fr", role_ids::PROFESSEUR);
        dto.id_role = None;

        let err = AuthService::register(&pool, &email_config_disabled(), dto)
            .await
            .unwrap_err();
        assert_eq!(err.failure(), Some(RegisterFailure::RoleNotSelected));
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_register_rejects_unknown_role(pool: PgPool) {
        let mut dto = dto("ghostrole@test.fr", role_ids::PROFESSEUR);
        dto.id_role = Some(Uuid::new_v4().to_string());

        let err = AuthService::register(&pool, &email_config_disabled(), dto)
            .await
            .unwrap_err();
        assert_eq!(err.failure(), Some(RegisterFailure::RoleNotFound));
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_register_referent_requires_class(pool: PgPool) {
        let err = AuthService::register(
            &pool,
            &email_config_disabled(),
            dto("referent@test.fr", role_ids::PROFESSEUR_REFERENT),
        )
        .await
        .unwrap_err();
        assert_eq!(err.failure(), Some(RegisterFailure::ClassNotSelected));
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_register_referent_rejects_unknown_class(pool: PgPool) {
        let mut dto = dto("referent2@test.fr", role_ids::PROFESSEUR_REFERENT);
        dto.id_class = Some(Uuid::new_v4().to_string());

        let err = AuthService::register(&pool, &email_config_disabled(), dto)
            .await
            .unwrap_err();
        assert_eq!(err.failure(), Some(RegisterFailure::ClassNotFound));
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_email_unique_across_role_tables(pool: PgPool) {
        let class_id = create_class(&pool, "6ème").await;

        AuthService::register(
            &pool,
            &email_config_disabled(),
            dto("partage@test.fr", role_ids::PROFESSEUR),
        )
        .await
        .unwrap();

        // Same email under a different role must be rejected.
        let mut second = dto("partage@test.fr", role_ids::COLLEGIEN);
        second.id_class = Some(class_id.to_string());

        let err = AuthService::register(&pool, &email_config_disabled(), second)
            .await
            .unwrap_err();
        assert_eq!(err.failure(), Some(RegisterFailure::AccountExists));
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_register_sanitizes_names(pool: PgPool) {
        let mut dto = dto("markup@test.fr", role_ids::PROFESSEUR);
        dto.first_name = "<b>Rosa</b>".to_string();

        AuthService::register(&pool, &email_config_disabled(), dto)
            .await
            .unwrap();

        let stored = sqlx::query_scalar::<_, String>(
            "SELECT first_name FROM teachers WHERE email = $1",
        )
        .bind("markup@test.fr")
        .fetch_one(&pool)
        .await
        .unwrap();
        assert_eq!(stored, "&lt;b&gt;Rosa&lt;/b&gt;");
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_login_unknown_email(pool: PgPool) {
        let err = AuthService::login(&pool, "personne@test.fr", "MamanRosa1.&")
            .await
            .unwrap_err();
        assert_eq!(err.failure(), Some(LoginFailure::AccountNotFound));
        assert_eq!(
            err.failure().unwrap().message(),
            "Pas de compte avec cet email"
        );
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_login_wrong_password(pool: PgPool) {
        AuthService::register(
            &pool,
            &email_config_disabled(),
            dto("prof@test.fr", role_ids::PROFESSEUR),
        )
        .await
        .unwrap();

        let err = AuthService::login(&pool, "prof@test.fr", "Mauvais1.&mdp")
            .await
            .unwrap_err();
        assert_eq!(err.failure(), Some(LoginFailure::InvalidPassword));
        assert_eq!(err.failure().unwrap().message(), "Mot de passe incorrect");
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_login_collegian_carries_class_id(pool: PgPool) {
        let class_id = create_class(&pool, "6ème").await;

        let mut dto = dto("eleve@test.fr", role_ids::COLLEGIEN);
        dto.id_class = Some(class_id.to_string());
        AuthService::register(&pool, &email_config_disabled(), dto)
            .await
            .unwrap();

        let identity = AuthService::login(&pool, "eleve@test.fr", "MamanRosa1.&")
            .await
            .unwrap();
        assert_eq!(identity.role, RoleName::Collegien);
        assert_eq!(identity.role.as_str(), "Collégien");
        assert_eq!(identity.class_id, Some(class_id));
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_login_teacher_has_no_class_id(pool: PgPool) {
        AuthService::register(
            &pool,
            &email_config_disabled(),
            dto("prof2@test.fr", role_ids::PROFESSEUR),
        )
        .await
        .unwrap();

        let identity = AuthService::login(&pool, "prof2@test.fr", "MamanRosa1.&")
            .await
            .unwrap();
        assert_eq!(identity.role, RoleName::Professeur);
        assert!(identity.class_id.is_none());
    }
}
