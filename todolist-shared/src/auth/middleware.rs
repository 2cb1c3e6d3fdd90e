/// Bearer credential extraction
///
/// Pulls the access token out of the `Authorization: Bearer <token>` header
/// and checks it with [`verify_access_token`]. The HTTP layer wraps
/// [`authenticate`] in an axum middleware that rejects the request on error.
///
/// # Example
///
/// ```
/// use axum::http::{header, HeaderMap, HeaderValue};
/// use todolist_shared::auth::middleware::authenticate;
///
/// let mut headers = HeaderMap::new();
/// headers.insert(
///     header::AUTHORIZATION,
///     HeaderValue::from_static("Bearer 11111111-1111-1111-1111-111111111111"),
/// );
///
/// assert!(authenticate(&headers).is_ok());
/// ```

use axum::http::{header, HeaderMap};
use uuid::Uuid;

use super::token::verify_access_token;

/// Credentials of an authenticated request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthContext {
    /// The presented access token
    pub token: Uuid,
}

/// Authentication failures
///
/// Every variant maps to 401 at the HTTP boundary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// Authorization header absent or not valid UTF-8
    #[error("Missing authorization header")]
    MissingCredentials,

    /// Header present but not a bearer credential
    #[error("{0}")]
    InvalidFormat(String),

    /// Token failed verification
    #[error("{0}")]
    InvalidToken(String),
}

/// Extracts the raw bearer token from request headers
pub fn extract_bearer_token(headers: &HeaderMap) -> Result<&str, AuthError> {
    let auth_header = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or(AuthError::MissingCredentials)?;

    auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| AuthError::InvalidFormat("Expected Bearer token".to_string()))
}

/// Authenticates a request from its headers
pub fn authenticate(headers: &HeaderMap) -> Result<AuthContext, AuthError> {
    let token = extract_bearer_token(headers)?;

    let token = verify_access_token(token)
        .map_err(|e| AuthError::InvalidToken(e.to_string()))?;

    Ok(AuthContext { token })
}
