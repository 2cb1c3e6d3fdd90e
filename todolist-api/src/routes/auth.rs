/// Token issuance endpoint
///
/// Exchanges the shared API secret for an opaque access token.
///
/// # Endpoints
///
/// - `POST /api/auth/token` - Issue an access token

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
    extract::JsonBody,
};
use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use todolist_shared::auth::token::{self, TokenError};

/// Token request
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenRequest {
    /// Shared secret; a missing value never matches
    #[serde(default)]
    pub api_secret: Option<String>,
}

/// Token response
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenResponse {
    /// Fresh access token for the `Authorization: Bearer` header
    pub access_token: String,
}

/// Issue an access token
///
/// # Endpoint
///
/// ```text
/// POST /api/auth/token
/// Content-Type: application/json
///
/// { "apiSecret": "..." }
/// ```
///
/// # Response
///
/// ```json
/// { "accessToken": "6f1c0d8e-..." }
/// ```
///
/// # Errors
///
/// - `500 Internal Server Error`: No secret configured on the server,
///   whatever the body holds
/// - `400 Bad Request`: Body is not JSON
/// - `401 Unauthorized`: Secret does not match
pub async fn issue_token(
    State(state): State<AppState>,
    body: Result<JsonBody<TokenRequest>, ApiError>,
) -> ApiResult<Json<TokenResponse>> {
    let configured = state.api_secret();
    if configured.is_none() {
        return Err(TokenError::SecretNotConfigured.into());
    }

    let JsonBody(req) = body?;
    let supplied = req.api_secret.unwrap_or_default();
    let access_token = token::issue_access_token(&supplied, configured)?;

    tracing::info!("Issued access token");

    Ok(Json(TokenResponse { access_token }))
}
