use async_trait::async_trait;

use crate::domain::user::models::AuthenticatedUser;
use crate::domain::user::models::User;
use crate::domain::user::models::UserPayload;
use crate::user::errors::UserError;

/// Port for the account workflows exposed to inbound adapters.
#[async_trait]
pub trait UserServicePort: Send + Sync + 'static {
    /// Register a new account.
    ///
    /// # Errors
    /// * `AlreadyRegistered` - An active account already uses this email
    /// * `Validation` - A required field is empty
    /// * `Password` - Hashing failed
    /// * `DatabaseError` - Database operation failed
    async fn signup(&self, payload: UserPayload) -> Result<User, UserError>;

    /// Check credentials and issue an access token.
    ///
    /// # Errors
    /// * `Validation` - Email or password is empty
    /// * `NotRegistered` - No active account uses this email
    /// * `InvalidCredentials` - Password does not match
    /// * `LookupFailed` - Database lookup failed
    /// * `Token` - Token signing failed
    async fn login(&self, payload: UserPayload) -> Result<String, UserError>;

    /// Overwrite every field of the account matching the payload's email.
    ///
    /// # Errors
    /// * `NotFound` - No active account uses this email
    /// * `Forbidden` - Ownership enforcement is on and the caller is someone else
    /// * `DatabaseError` - Database operation failed
    async fn update_user(
        &self,
        actor: &AuthenticatedUser,
        payload: UserPayload,
    ) -> Result<User, UserError>;

    /// Soft-delete the account matching `email`.
    ///
    /// # Errors
    /// * `NotFound` - No active account uses this email
    /// * `Forbidden` - Ownership enforcement is on and the caller is someone else
    async fn deactivate_user(&self, actor: &AuthenticatedUser, email: &str)
        -> Result<(), UserError>;

    /// Permanently remove the account matching `email`, deactivated or not.
    ///
    /// # Errors
    /// * `NotFound` - No account uses this email
    /// * `Forbidden` - Ownership enforcement is on and the caller is someone else
    async fn delete_user(&self, actor: &AuthenticatedUser, email: &str) -> Result<(), UserError>;

    /// List every active account.
    async fn list_users(&self) -> Result<Vec<User>, UserError>;
}

/// Persistence operations for the user record.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist a new user.
    ///
    /// # Errors
    /// * `AlreadyRegistered` - Email unique constraint violated
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, user: User) -> Result<User, UserError>;

    /// Retrieve user by email address.
    ///
    /// # Arguments
    /// * `email` - Email address string
    /// * `include_deleted` - Also match deactivated accounts
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    async fn find_by_email(
        &self,
        email: &str,
        include_deleted: bool,
    ) -> Result<Option<User>, UserError>;

    /// Retrieve all users from storage.
    async fn list_all(&self, include_deleted: bool) -> Result<Vec<User>, UserError>;

    /// Write every mutable field of an existing active user.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist or is deactivated
    /// * `AlreadyRegistered` - New email is already used
    /// * `DatabaseError` - Database operation failed
    async fn update(&self, user: User) -> Result<User, UserError>;

    /// Mark the active user with this email as deactivated.
    ///
    /// # Errors
    /// * `NotFound` - No active user with this email
    async fn deactivate(&self, email: &str) -> Result<(), UserError>;

    /// Remove the user with this email, ignoring the deactivation marker.
    ///
    /// # Errors
    /// * `NotFound` - No user with this email
    async fn delete(&self, email: &str) -> Result<(), UserError>;
}
