/// Access token issuance and verification
///
/// Tokens are opaque UUID v4 strings handed out in exchange for the shared
/// API secret. Nothing is stored: verification is a format check only, so a
/// token proves that the caller once presented the secret (or guessed a
/// well-formed UUID).
///
/// # Example
///
/// ```
/// use todolist_shared::auth::token::{issue_access_token, verify_access_token};
///
/// let token = issue_access_token("s3cret", Some("s3cret")).unwrap();
/// assert!(verify_access_token(&token).is_ok());
///
/// assert!(issue_access_token("wrong", Some("s3cret")).is_err());
/// assert!(issue_access_token("s3cret", None).is_err());
/// ```

use sha2::{Digest, Sha256};
use tracing::warn;
use uuid::Uuid;

/// Token operation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    /// No API secret is configured on the server
    #[error("API secret is not configured")]
    SecretNotConfigured,

    /// The presented secret does not match
    #[error("Invalid API secret")]
    InvalidSecret,

    /// The bearer token is empty or not a UUID
    #[error("Malformed access token")]
    Malformed,
}

/// Exchanges the shared secret for a fresh access token
///
/// An empty configured secret counts as not configured.
///
/// # Errors
///
/// - `TokenError::SecretNotConfigured` when `configured` is `None` or empty
/// - `TokenError::InvalidSecret` when `supplied` does not match
pub fn issue_access_token(supplied: &str, configured: Option<&str>) -> Result<String, TokenError> {
    let configured = match configured {
        Some(secret) if !secret.is_empty() => secret,
        _ => {
            warn!("API_SECRET not configured");
            return Err(TokenError::SecretNotConfigured);
        }
    };

    if !secrets_match(supplied, configured) {
        return Err(TokenError::InvalidSecret);
    }

    Ok(Uuid::new_v4().to_string())
}

/// Checks that a bearer token looks like one this server issued
///
/// Returns the parsed token on success.
pub fn verify_access_token(token: &str) -> Result<Uuid, TokenError> {
    let token = token.trim();
    if token.is_empty() {
        return Err(TokenError::Malformed);
    }

    Uuid::parse_str(token).map_err(|_| TokenError::Malformed)
}

/// Compares two secrets without early exit
///
/// Both sides are hashed first so the comparison length does not depend on
/// the configured secret.
fn secrets_match(supplied: &str, configured: &str) -> bool {
    let a = Sha256::digest(supplied.as_bytes());
    let b = Sha256::digest(configured.as_bytes());

    a.iter().zip(b.iter()).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_without_configured_secret() {
        assert_eq!(
            issue_access_token("anything", None),
            Err(TokenError::SecretNotConfigured)
        );
        assert_eq!(
            issue_access_token("", Some("")),
            Err(TokenError::SecretNotConfigured)
        );
    }

    #[test]
    fn test_issue_with_wrong_secret() {
        assert_eq!(
            issue_access_token("nope", Some("s3cret")),
            Err(TokenError::InvalidSecret)
        );
        assert_eq!(
            issue_access_token("s3cret ", Some("s3cret")),
            Err(TokenError::InvalidSecret)
        );
    }

    #[test]
    fn test_issued_tokens_are_unique_and_verifiable() {
        let first = issue_access_token("s3cret", Some("s3cret")).unwrap();
        let second = issue_access_token("s3cret", Some("s3cret")).unwrap();

        assert!(!first.is_empty());
        assert_ne!(first, second);
        assert!(verify_access_token(&first).is_ok());
        assert!(verify_access_token(&second).is_ok());
    }

    #[test]
    fn test_verify_rejects_malformed() {
        assert_eq!(verify_access_token(""), Err(TokenError::Malformed));
        assert_eq!(verify_access_token("   "), Err(TokenError::Malformed));
        assert_eq!(verify_access_token("not-a-token"), Err(TokenError::Malformed));
    }

    #[test]
    fn test_secrets_match() {
        assert!(secrets_match("hello", "hello"));
        assert!(!secrets_match("hello", "world"));
        assert!(!secrets_match("hello", "hello!"));
    }
}
