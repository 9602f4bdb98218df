//! Role-guard middleware for route groups.
//!
//! Each guard extracts the session identity and rejects the request when
//! the logged-in role is not allowed, before the handler runs.

use axum::{
    extract::{FromRequestParts, Request},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::middleware::auth::CurrentUser;
use crate::modules::roles::model::RoleName;
use crate::utils::errors::AppError;

async fn require_roles(
    req: Request,
    next: Next,
    allowed_roles: &[RoleName],
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let CurrentUser(identity) = CurrentUser::from_request_parts(&mut parts, &()).await?;

    if !allowed_roles.contains(&identity.role) {
        return Err(AppError::forbidden(anyhow::anyhow!(
            "Accès refusé pour le rôle {}",
            identity.role
        )));
    }

    let req = Request::from_parts(parts, body);
    Ok(next.run(req).await)
}

/// Restricts a route group to the Principal (super-admin area).
pub async fn require_principal(req: Request, next: Next) -> Response {
    match require_roles(req, next, &[RoleName::Principal]).await {
        Ok(response) => response,
        Err(err) => err.into_response(),
    }
}

/// Restricts a route group to teaching staff. The Principal has the
/// highest privilege and passes every staff guard.
pub async fn require_teaching_staff(req: Request, next: Next) -> Response {
    match require_roles(
        req,
        next,
        &[
            RoleName::Principal,
            RoleName::Professeur,
            RoleName::ProfesseurReferent,
        ],
    )
    .await
    {
        Ok(response) => response,
        Err(err) => err.into_response(),
    }
}

/// Restricts a route group to logged-in collegians.
pub async fn require_collegian(req: Request, next: Next) -> Response {
    match require_roles(req, next, &[RoleName::Collegien]).await {
        Ok(response) => response,
        Err(err) => err.into_response(),
    }
}
