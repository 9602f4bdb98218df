//! Auth DTOs and the user-facing failure taxonomy.
//!
//! Registration and login are form submissions; the DTO fields are
//! optional so the workflow can report missing fields with the expected
//! message instead of a deserialization rejection. Failure reasons are
//! enumerated so every branch of the workflows maps to exactly one French
//! message and HTTP status.

use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::utils::errors::AppError;

/// The registration form, as submitted (form-encoded, camelCase keys).
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct RegisterForm {
    #[serde(rename = "firstName")]
    pub first_name: Option<String>,
    #[serde(rename = "lastName")]
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    #[serde(rename = "confirmPassword")]
    pub confirm_password: Option<String>,
    #[serde(rename = "idRole")]
    pub id_role: Option<String>,
    #[serde(rename = "idClass")]
    pub id_class: Option<String>,
    #[serde(rename = "idLanguage")]
    pub id_language: Option<String>,
    #[serde(rename = "csrf-token")]
    pub csrf_token: Option<String>,
}

/// Registration input once the required base fields are known present.
#[derive(Debug, Clone)]
pub struct RegisterDto {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub id_role: Option<String>,
    pub id_class: Option<String>,
    pub id_language: Option<String>,
}

/// The login form, as submitted.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct LoginForm {
    pub email: Option<String>,
    pub password: Option<String>,
    #[serde(rename = "csrf-token")]
    pub csrf_token: Option<String>,
}

/// Registration response body, both for success and failure.
#[derive(Debug, Serialize, ToSchema)]
pub struct RegisterResponse {
    pub success: bool,
    pub message: String,
}

/// Successful login response body.
#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    pub success: bool,
    pub role: String,
    #[serde(rename = "classId", skip_serializing_if = "Option::is_none")]
    pub class_id: Option<Uuid>,
}

/// CSRF token handed to the client for form embedding.
#[derive(Debug, Serialize, ToSchema)]
pub struct CsrfResponse {
    pub csrf_token: String,
}

/// Simple acknowledgement body (logout).
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

/// Every way a registration attempt can fail, in workflow order.
///
/// No partial account exists after any of these except
/// [`RegisterFailure::NotificationFailed`], which is reported after the
/// account row was already inserted (deliberately not rolled back).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterFailure {
    MissingFields,
    InvalidCsrf,
    PasswordMismatch,
    WeakPassword,
    InvalidEmail,
    RoleNotSelected,
    RoleNotFound,
    AccountExists,
    ClassNotSelected,
    ClassNotFound,
    LanguageNotSelected,
    LanguageNotFound,
    CreationFailed,
    NotificationFailed,
}

impl RegisterFailure {
    pub fn message(&self) -> &'static str {
        match self {
            RegisterFailure::MissingFields => "Veuillez remplir tous les champs",
            RegisterFailure::InvalidCsrf => "Jeton CSRF invalide",
            RegisterFailure::PasswordMismatch => "Les mots de passe ne correspondent pas",
            RegisterFailure::WeakPassword => {
                "Le mot de passe doit contenir au moins 8 caractères, un chiffre, \
                 une lettre en majuscule, une lettre en minuscule et un caractère spécial."
            }
            RegisterFailure::InvalidEmail => "Adresse email invalide",
            RegisterFailure::RoleNotSelected => "Veuillez sélectionner le rôle",
            RegisterFailure::RoleNotFound => "Le rôle non trouvé",
            RegisterFailure::AccountExists => "L'utilisateur existe déjà",
            RegisterFailure::ClassNotSelected => "Veuillez sélectionner la classe",
            RegisterFailure::ClassNotFound => "la classe sélectionnée n'existe pas",
            RegisterFailure::LanguageNotSelected => "Veuillez sélectionner une langue",
            RegisterFailure::LanguageNotFound => "Langue non trouvée",
            RegisterFailure::CreationFailed => {
                "Une erreur s'est produite lors de la création de votre compte."
            }
            RegisterFailure::NotificationFailed => "échec de l'envoi du mail",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            RegisterFailure::CreationFailed | RegisterFailure::NotificationFailed => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

/// Registration workflow error: a user-facing failure reason, or an
/// unexpected infrastructure error that must not leak its detail.
#[derive(Debug)]
pub enum RegisterError {
    Failure(RegisterFailure),
    Internal(AppError),
}

impl RegisterError {
    pub fn failure(&self) -> Option<RegisterFailure> {
        match self {
            RegisterError::Failure(f) => Some(*f),
            RegisterError::Internal(_) => None,
        }
    }
}

impl From<RegisterFailure> for RegisterError {
    fn from(failure: RegisterFailure) -> Self {
        RegisterError::Failure(failure)
    }
}

impl From<AppError> for RegisterError {
    fn from(err: AppError) -> Self {
        RegisterError::Internal(err)
    }
}

/// Every way a login attempt can fail.
///
/// Account-not-found and wrong-password keep their distinct wording; the
/// enumeration risk is accepted (documented in DESIGN.md).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginFailure {
    MissingFields,
    InvalidCsrf,
    AccountNotFound,
    InvalidPassword,
    RoleNotHandled,
}

impl LoginFailure {
    pub fn message(&self) -> &'static str {
        match self {
            LoginFailure::MissingFields => "Veuillez renseigner tous les champs",
            LoginFailure::InvalidCsrf => "Jeton CSRF invalide",
            LoginFailure::AccountNotFound => "Pas de compte avec cet email",
            LoginFailure::InvalidPassword => "Mot de passe incorrect",
            LoginFailure::RoleNotHandled => "Rôle non trouvé",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            LoginFailure::MissingFields | LoginFailure::InvalidCsrf => StatusCode::BAD_REQUEST,
            LoginFailure::AccountNotFound | LoginFailure::InvalidPassword => {
                StatusCode::UNAUTHORIZED
            }
            LoginFailure::RoleNotHandled => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Login workflow error.
#[derive(Debug)]
pub enum LoginError {
    Failure(LoginFailure),
    Internal(AppError),
}

impl LoginError {
    pub fn failure(&self) -> Option<LoginFailure> {
        match self {
            LoginError::Failure(f) => Some(*f),
            LoginError::Internal(_) => None,
        }
    }
}

impl From<LoginFailure> for LoginError {
    fn from(failure: LoginFailure) -> Self {
        LoginError::Failure(failure)
    }
}

impl From<AppError> for LoginError {
    fn from(err: AppError) -> Self {
        LoginError::Internal(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_failure_messages() {
        assert_eq!(
            RegisterFailure::LanguageNotSelected.message(),
            "Veuillez sélectionner une langue"
        );
        assert_eq!(
            RegisterFailure::AccountExists.message(),
            "L'utilisateur existe déjà"
        );
        assert_eq!(
            RegisterFailure::PasswordMismatch.message(),
            "Les mots de passe ne correspondent pas"
        );
    }

    #[test]
    fn test_login_failure_messages() {
        assert_eq!(
            LoginFailure::InvalidPassword.message(),
            "Mot de passe incorrect"
        );
        assert_eq!(
            LoginFailure::AccountNotFound.message(),
            "Pas de compte avec cet email"
        );
    }

    #[test]
    fn test_login_response_serializes_class_id_as_camel_case() {
        let response = LoginResponse {
            success: true,
            role: "Collégien".to_string(),
            class_id: Some(Uuid::nil()),
        };
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"classId\""));
        assert!(json.contains("Collégien"));
    }

    #[test]
    fn test_login_response_omits_class_id_for_staff() {
        let response = LoginResponse {
            success: true,
            role: "Principal".to_string(),
            class_id: None,
        };
        let json = serde_json::to_string(&response).unwrap();
        assert!(!json.contains("classId"));
    }

    #[test]
    fn test_register_form_deserializes_camel_case_keys() {
        let form: RegisterForm = serde_urlencoded::from_str(
            "firstName=Rosa&lastName=Angembang&email=rosa%40example.com\
             &password=Abcdef1%21&confirmPassword=Abcdef1%21&idRole=x&csrf-token=t",
        )
        .unwrap();
        assert_eq!(form.first_name.as_deref(), Some("Rosa"));
        assert_eq!(form.confirm_password.as_deref(), Some("Abcdef1!"));
        assert_eq!(form.csrf_token.as_deref(), Some("t"));
        assert!(form.id_class.is_none());
    }
}
