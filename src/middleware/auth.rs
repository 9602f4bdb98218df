use axum::{extract::FromRequestParts, http::request::Parts};
use serde::{Deserialize, Serialize};
use tower_sessions::Session;
use uuid::Uuid;

use crate::modules::roles::model::RoleName;
use crate::utils::errors::AppError;

/// Session key under which the logged-in identity is stored.
pub const SESSION_IDENTITY_KEY: &str = "identity";

/// The identity established at login and destroyed at logout.
///
/// `class_id` is only present for collegians; lesson scoping reads it from
/// the session instead of re-querying the account row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionIdentity {
    pub account_id: Uuid,
    pub role: RoleName,
    pub class_id: Option<Uuid>,
}

impl SessionIdentity {
    pub fn is_principal(&self) -> bool {
        self.role == RoleName::Principal
    }

    pub fn is_teaching_staff(&self) -> bool {
        matches!(
            self.role,
            RoleName::Principal | RoleName::Professeur | RoleName::ProfesseurReferent
        )
    }

    pub fn is_collegian(&self) -> bool {
        self.role == RoleName::Collegien
    }
}

/// Stores the identity in the session (login).
pub async fn establish(session: &Session, identity: &SessionIdentity) -> Result<(), AppError> {
    session.insert(SESSION_IDENTITY_KEY, identity.clone()).await?;
    Ok(())
}

/// Reads the current identity, if any.
pub async fn current(session: &Session) -> Result<Option<SessionIdentity>, AppError> {
    let identity = session.get::<SessionIdentity>(SESSION_IDENTITY_KEY).await?;
    Ok(identity)
}

/// Destroys the whole session: identity and CSRF token (logout).
pub async fn destroy(session: &Session) -> Result<(), AppError> {
    session.flush().await?;
    Ok(())
}

/// Extractor providing the logged-in identity; rejects anonymous requests.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub SessionIdentity);

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let session = Session::from_request_parts(parts, state)
            .await
            .map_err(|(status, msg)| AppError::new(status, anyhow::anyhow!(msg)))?;

        let identity = current(&session)
            .await?
            .ok_or_else(|| AppError::unauthorized(anyhow::anyhow!("Veuillez vous connecter")))?;

        Ok(CurrentUser(identity))
    }
}
