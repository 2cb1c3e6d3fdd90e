/// Authentication utilities
///
/// # Modules
///
/// - [`token`]: shared-secret exchange and access token format checks
/// - [`middleware`]: bearer header extraction producing an [`middleware::AuthContext`]
///
/// # Security Notes
///
/// - **Secret comparison**: SHA-256 both sides, then compare digests without early exit
/// - **Tokens**: random UUID v4, not persisted, no expiry or revocation

pub mod middleware;
pub mod token;
