use chrono::Duration;

use crate::jwt::Claims;
use crate::jwt::JwtError;
use crate::jwt::JwtHandler;
use crate::password::PasswordError;
use crate::password::PasswordHasher;

/// Authentication coordinator combining password verification and JWT issuance.
///
/// Built once at startup from the process-wide signing secret and shared
/// read-only between requests.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    jwt_handler: JwtHandler,
    token_ttl: Duration,
}

/// Result of successful authentication.
#[derive(Debug)]
pub struct AuthenticationResult {
    /// JWT access token
    pub access_token: String,
}

/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("JWT error: {0}")]
    JwtError(#[from] JwtError),
}

impl Authenticator {
    /// Create a new authenticator.
    ///
    /// # Arguments
    /// * `jwt_secret` - Secret key for JWT signing
    /// * `token_ttl` - Lifetime of issued access tokens
    pub fn new(jwt_secret: &[u8], token_ttl: Duration) -> Self {
        Self::with_hasher(jwt_secret, token_ttl, PasswordHasher::new())
    }

    /// Create an authenticator with a specific password hasher.
    pub fn with_hasher(jwt_secret: &[u8], token_ttl: Duration, hasher: PasswordHasher) -> Self {
        Self {
            password_hasher: hasher,
            jwt_handler: JwtHandler::new(jwt_secret),
            token_ttl,
        }
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `HashingFailed` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Check a candidate password against a stored hash.
    ///
    /// # Errors
    /// * `Mismatch` - Password does not match, whatever the reason
    pub fn verify_password(&self, candidate: &str, stored_hash: &str) -> Result<(), PasswordError> {
        self.password_hasher.verify(candidate, stored_hash)
    }

    /// Issue an access token for a user.
    ///
    /// # Errors
    /// * `EncodingFailed` - Signing failed or the token lifetime overflows
    pub fn issue_token(&self, user_id: impl ToString) -> Result<String, JwtError> {
        let claims = Claims::for_user(user_id, self.token_ttl)?;
        self.jwt_handler.encode(&claims)
    }

    /// Verify a token and return the user identifier it was issued for.
    ///
    /// # Errors
    /// * `TokenExpired` - Token has expired
    /// * `InvalidToken` - Signature invalid or token malformed
    pub fn verify_token(&self, token: &str) -> Result<String, JwtError> {
        self.jwt_handler.decode(token).map(|claims| claims.sub)
    }

    /// Verify credentials and issue a token.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match
    /// * `JwtError` - Token generation failed
    pub fn authenticate(
        &self,
        candidate: &str,
        stored_hash: &str,
        user_id: impl ToString,
    ) -> Result<AuthenticationResult, AuthenticationError> {
        self.verify_password(candidate, stored_hash)
            .map_err(|_| AuthenticationError::InvalidCredentials)?;

        let access_token = self.issue_token(user_id)?;

        Ok(AuthenticationResult { access_token })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &[u8] = b"test_secret_key_at_least_32_bytes!";

    fn authenticator() -> Authenticator {
        Authenticator::with_hasher(
            SECRET,
            Duration::hours(24),
            PasswordHasher::with_params(1024, 1, 1).unwrap(),
        )
    }

    #[test]
    fn test_authenticate_success() {
        let authenticator = authenticator();

        let hash = authenticator
            .hash_password("my_password")
            .expect("Failed to hash password");

        let result = authenticator
            .authenticate("my_password", &hash, "user123")
            .expect("Authentication failed");

        assert!(!result.access_token.is_empty());

        let user_id = authenticator
            .verify_token(&result.access_token)
            .expect("Token validation failed");
        assert_eq!(user_id, "user123");
    }

    #[test]
    fn test_authenticate_invalid_password() {
        let authenticator = authenticator();

        let hash = authenticator.hash_password("my_password").unwrap();

        let result = authenticator.authenticate("wrong_password", &hash, "user123");
        assert!(matches!(
            result,
            Err(AuthenticationError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_authenticate_corrupt_hash_is_invalid_credentials() {
        let authenticator = authenticator();

        let result = authenticator.authenticate("my_password", "not-a-phc-string", "user123");
        assert!(matches!(
            result,
            Err(AuthenticationError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_token_from_other_secret_is_rejected() {
        let issuer = authenticator();
        let verifier = Authenticator::new(b"another_secret_key_at_least_32_bytes", Duration::hours(1));

        let token = issuer.issue_token("user123").unwrap();
        assert!(matches!(
            verifier.verify_token(&token),
            Err(JwtError::InvalidToken(_))
        ));
    }

    #[test]
    fn test_non_positive_ttl_issues_expired_token() {
        let authenticator = Authenticator::new(SECRET, Duration::seconds(-1));

        let token = authenticator.issue_token("user123").unwrap();
        assert_eq!(authenticator.verify_token(&token), Err(JwtError::TokenExpired));
    }

    #[test]
    fn test_overflowing_ttl_fails_instead_of_panicking() {
        let authenticator = Authenticator::new(SECRET, Duration::hours(10_000_000_000));

        assert!(matches!(
            authenticator.issue_token("user123"),
            Err(JwtError::EncodingFailed(_))
        ));
    }

    #[test]
    fn test_validate_invalid_token() {
        let authenticator = authenticator();

        assert!(authenticator.verify_token("invalid.token.here").is_err());
    }
}
