//! Per-session CSRF token issuance and validation.
//!
//! One token per browser session: generated the first time the session asks
//! for it, stored server-side, mirrored into forms by the client, and
//! compared in constant time on submission. The token is never rotated
//! within a session; logout flushes it together with the identity.

use rand::{Rng, thread_rng};
use subtle::ConstantTimeEq;
use tower_sessions::Session;

use crate::utils::errors::AppError;

/// Session key under which the current CSRF token is stored.
pub const CSRF_SESSION_KEY: &str = "csrf-token";

/// Generates a fresh token: 32 random bytes, hex-encoded.
pub fn generate_token() -> String {
    let bytes: [u8; 32] = thread_rng().r#gen();
    hex::encode(bytes)
}

/// Constant-time comparison of two candidate tokens.
pub fn tokens_match(stored: &str, candidate: &str) -> bool {
    stored.as_bytes().ct_eq(candidate.as_bytes()).into()
}

/// Returns the session's current token, generating and storing one if the
/// session does not have one yet.
pub async fn issue(session: &Session) -> Result<String, AppError> {
    if let Some(token) = session.get::<String>(CSRF_SESSION_KEY).await? {
        return Ok(token);
    }

    let token = generate_token();
    session.insert(CSRF_SESSION_KEY, token.clone()).await?;
    Ok(token)
}

/// Validates a submitted token against the session's stored token.
///
/// Returns `false` (never an error) when the session has no token, the
/// candidate is missing or empty, or the values differ.
pub async fn validate(session: &Session, candidate: Option<&str>) -> bool {
    let Some(candidate) = candidate else {
        return false;
    };
    if candidate.is_empty() {
        return false;
    }

    let stored = match session.get::<String>(CSRF_SESSION_KEY).await {
        Ok(Some(token)) => token,
        _ => return false,
    };

    tokens_match(&stored, candidate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_token_is_hex_encoded_256_bits() {
        let token = generate_token();
        assert_eq!(token.len(), 64);
        assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_generated_tokens_are_unique() {
        assert_ne!(generate_token(), generate_token());
    }

    #[test]
    fn test_tokens_match_equal_values() {
        let token = generate_token();
        assert!(tokens_match(&token, &token.clone()));
    }

    #[test]
    fn test_tokens_match_rejects_mismatch() {
        assert!(!tokens_match(&generate_token(), &generate_token()));
    }

    #[test]
    fn test_tokens_match_rejects_different_lengths() {
        let token = generate_token();
        assert!(!tokens_match(&token, &token[..32]));
    }
}
