use bcrypt::{DEFAULT_COST, hash, verify};

use crate::utils::errors::AppError;

/// Special characters accepted by the account password policy.
pub const SPECIAL_CHARACTERS: &str = "!@#$%^&*()-_=+{};:,<.>";

pub fn hash_password(password: &str) -> Result<String, AppError> {
    hash(password, DEFAULT_COST)
        .map_err(|e| AppError::internal(anyhow::anyhow!("Failed to hash password: {}", e)))
}

pub fn verify_password(password: &str, hash: &str) -> Result<bool, AppError> {
    verify(password, hash)
        .map_err(|e| AppError::internal(anyhow::anyhow!("Failed to verify password: {}", e)))
}

/// Checks a candidate password against the account policy: at least 8
/// characters, one digit, one uppercase letter, one lowercase letter and
/// one special character from [`SPECIAL_CHARACTERS`].
pub fn is_acceptable(password: &str) -> bool {
    password.chars().count() >= 8
        && password.chars().any(|c| c.is_ascii_digit())
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| SPECIAL_CHARACTERS.contains(c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_accepts_minimal_password() {
        // Exactly 8 characters with every required class.
        assert!(is_acceptable("short1A!"));
    }

    #[test]
    fn test_policy_rejects_missing_uppercase() {
        assert!(!is_acceptable("alllowercase1!"));
    }

    #[test]
    fn test_policy_rejects_missing_digit() {
        assert!(!is_acceptable("NoDigits!"));
    }

    #[test]
    fn test_policy_rejects_missing_lowercase() {
        assert!(!is_acceptable("ALLUPPER1!"));
    }

    #[test]
    fn test_policy_rejects_missing_special() {
        assert!(!is_acceptable("Password123"));
    }

    #[test]
    fn test_policy_rejects_short_password() {
        assert!(!is_acceptable("Ab1!x"));
    }

    #[test]
    fn test_policy_counts_characters_not_bytes() {
        // Multi-byte characters still count toward the length requirement.
        assert!(is_acceptable("Sécur1té!"));
    }
}
