use thiserror::Error;

/// Error type for password operations.
///
/// Verification collapses every failure into `Mismatch` so callers cannot
/// tell a wrong password from a corrupt stored hash.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Invalid hashing parameters: {0}")]
    InvalidParams(String),

    #[error("password incorrect")]
    Mismatch,
}
