use thiserror::Error;

/// Failures while signing or verifying access tokens.
///
/// Verification distinguishes only expiry; a bad signature, malformed token
/// or missing claim are all `InvalidToken`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JwtError {
    #[error("Token signing failed: {0}")]
    EncodingFailed(String),

    #[error("Token has expired")]
    TokenExpired,

    #[error("Invalid token: {0}")]
    InvalidToken(String),
}
