use axum::Json;
use axum::extract::{Form, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use tower_sessions::Session;
use tracing::{error, instrument};

use crate::middleware::auth;
use crate::state::AppState;
use crate::utils::csrf;
use crate::utils::errors::AppError;

use super::model::{
    CsrfResponse, LoginError, LoginFailure, LoginForm, LoginResponse, MessageResponse,
    RegisterDto, RegisterError, RegisterFailure, RegisterForm, RegisterResponse,
};
use super::service::AuthService;

fn register_failure(failure: RegisterFailure) -> Response {
    (
        failure.status(),
        Json(RegisterResponse {
            success: false,
            message: failure.message().to_string(),
        }),
    )
        .into_response()
}

fn login_failure(failure: LoginFailure) -> Response {
    (failure.status(), Json(json!({ "error": failure.message() }))).into_response()
}

/// Fetch the session's CSRF token for form embedding
#[utoipa::path(
    get,
    path = "/api/auth/csrf",
    responses(
        (status = 200, description = "The session's anti-forgery token", body = CsrfResponse),
        (status = 500, description = "Internal server error")
    ),
    tag = "Authentication"
)]
#[instrument(skip_all)]
pub async fn csrf_token(session: Session) -> Result<Json<CsrfResponse>, AppError> {
    let token = csrf::issue(&session).await?;
    Ok(Json(CsrfResponse { csrf_token: token }))
}

/// Register a new account under one of the four roles
#[utoipa::path(
    post,
    path = "/api/auth/register",
    request_body(content = RegisterForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Account created", body = RegisterResponse),
        (status = 400, description = "Validation failure with a French reason", body = RegisterResponse),
        (status = 500, description = "Creation or notification failure", body = RegisterResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip_all)]
pub async fn register_user(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<RegisterForm>,
) -> Response {
    // Required-field check runs before everything else, CSRF included,
    // matching the order the workflow reports failures in.
    let (
        Some(first_name),
        Some(last_name),
        Some(email),
        Some(password),
        Some(confirm_password),
    ) = (
        form.first_name,
        form.last_name,
        form.email,
        form.password,
        form.confirm_password,
    )
    else {
        return register_failure(RegisterFailure::MissingFields);
    };
    if [&first_name, &last_name, &email, &password, &confirm_password]
        .iter()
        .any(|field| field.is_empty())
    {
        return register_failure(RegisterFailure::MissingFields);
    }

    if !csrf::validate(&session, form.csrf_token.as_deref()).await {
        return register_failure(RegisterFailure::InvalidCsrf);
    }

    let dto = RegisterDto {
        first_name,
        last_name,
        email,
        password,
        confirm_password,
        id_role: form.id_role,
        id_class: form.id_class,
        id_language: form.id_language,
    };

    match AuthService::register(&state.db, &state.email_config, dto).await {
        Ok(()) => Json(RegisterResponse {
            success: true,
            message: "Votre compte a été créé avec succès".to_string(),
        })
        .into_response(),
        Err(RegisterError::Failure(failure)) => register_failure(failure),
        Err(RegisterError::Internal(err)) => {
            error!(error = %err.error, "Registration failed unexpectedly");
            register_failure(RegisterFailure::CreationFailed)
        }
    }
}

/// Login and establish a session identity bound to the account's role
#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body(content = LoginForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 400, description = "Missing fields or invalid CSRF token"),
        (status = 401, description = "Unknown account or wrong password"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Authentication"
)]
#[instrument(skip_all)]
pub async fn login_user(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Response {
    let (Some(email), Some(password)) = (form.email.as_deref(), form.password.as_deref()) else {
        return login_failure(LoginFailure::MissingFields);
    };
    if email.is_empty() || password.is_empty() {
        return login_failure(LoginFailure::MissingFields);
    }

    if !csrf::validate(&session, form.csrf_token.as_deref()).await {
        return login_failure(LoginFailure::InvalidCsrf);
    }

    match AuthService::login(&state.db, email, password).await {
        Ok(identity) => {
            if let Err(err) = auth::establish(&session, &identity).await {
                error!(error = %err.error, "Failed to store session identity");
                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({
                        "error": "Une erreur s'est produite lors de la vérification de la connexion."
                    })),
                )
                    .into_response();
            }

            Json(LoginResponse {
                success: true,
                role: identity.role.as_str().to_string(),
                class_id: identity.class_id,
            })
            .into_response()
        }
        Err(LoginError::Failure(failure)) => login_failure(failure),
        Err(LoginError::Internal(err)) => {
            error!(error = %err.error, "Login failed unexpectedly");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": "Une erreur s'est produite lors de la vérification de la connexion."
                })),
            )
                .into_response()
        }
    }
}

/// Logout: destroy the whole session, identity and CSRF token included
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    responses(
        (status = 200, description = "Session destroyed", body = MessageResponse),
        (status = 500, description = "Internal server error")
    ),
    tag = "Authentication"
)]
#[instrument(skip_all)]
pub async fn logout_user(session: Session) -> Result<Json<MessageResponse>, AppError> {
    auth::destroy(&session).await?;

    Ok(Json(MessageResponse {
        success: true,
        message: "Vous êtes déconnecté".to_string(),
    }))
}
