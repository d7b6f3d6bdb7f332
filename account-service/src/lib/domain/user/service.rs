use std::sync::Arc;

use async_trait::async_trait;
use auth::AuthenticationError;
use auth::Authenticator;
use chrono::Utc;

use crate::domain::user::models::AuthenticatedUser;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::UserPayload;
use crate::domain::user::models::ValidationMode;
use crate::user::errors::UserError;
use crate::user::ports::UserRepository;
use crate::user::ports::UserServicePort;

/// Domain service implementation for account workflows.
///
/// Every workflow is a single pass: the first failing stage ends the request
/// and nothing after it runs.
pub struct UserService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    authenticator: Arc<Authenticator>,
    enforce_ownership: bool,
}

impl<UR> UserService<UR>
where
    UR: UserRepository,
{
    /// Create a new user service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - User persistence implementation
    /// * `authenticator` - Password hashing and token issuance
    pub fn new(repository: Arc<UR>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            repository,
            authenticator,
            enforce_ownership: false,
        }
    }

    /// Require the authenticated user to own the account being modified.
    pub fn with_ownership_enforced(mut self, enforce: bool) -> Self {
        self.enforce_ownership = enforce;
        self
    }

    async fn hash_password(&self, password: String) -> Result<String, UserError> {
        let authenticator = Arc::clone(&self.authenticator);

        tokio::task::spawn_blocking(move || authenticator.hash_password(&password))
            .await
            .map_err(|e| UserError::Unknown(format!("Hashing task failed: {}", e)))?
            .map_err(|e| UserError::Password(e.to_string()))
    }

    fn authorize(&self, actor: &AuthenticatedUser, target: &User) -> Result<(), UserError> {
        if self.enforce_ownership && actor.user_id != target.id {
            tracing::warn!(
                actor = %actor.user_id,
                target = %target.id,
                "Rejected modification of another user's account"
            );
            return Err(UserError::Forbidden);
        }
        Ok(())
    }

    async fn authorize_by_email(
        &self,
        actor: &AuthenticatedUser,
        email: &str,
        include_deleted: bool,
    ) -> Result<(), UserError> {
        if !self.enforce_ownership {
            return Ok(());
        }

        let target = self
            .repository
            .find_by_email(email, include_deleted)
            .await?
            .ok_or_else(|| UserError::NotFound(email.to_string()))?;

        self.authorize(actor, &target)
    }
}

#[async_trait]
impl<UR> UserServicePort for UserService<UR>
where
    UR: UserRepository,
{
    async fn signup(&self, mut payload: UserPayload) -> Result<User, UserError> {
        if self
            .repository
            .find_by_email(&payload.email, false)
            .await?
            .is_some()
        {
            tracing::info!(email = %payload.email, "Signup rejected, email already registered");
            return Err(UserError::AlreadyRegistered(payload.email));
        }

        payload.prepare();
        payload.validate(ValidationMode::Create)?;

        let password_hash = self.hash_password(payload.password).await?;

        let now = Utc::now();
        let user = User {
            id: UserId::new(),
            email: payload.email,
            first_name: payload.first_name,
            last_name: payload.last_name,
            password_hash,
            profile_image: payload.profile_image,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        };

        let created_user = self.repository.create(user).await?;
        tracing::info!(user_id = %created_user.id, email = %created_user.email, "User registered");

        Ok(created_user)
    }

    async fn login(&self, mut payload: UserPayload) -> Result<String, UserError> {
        payload.prepare();
        payload.validate(ValidationMode::Login)?;

        let user = self
            .repository
            .find_by_email(&payload.email, false)
            .await
            .map_err(|e| UserError::LookupFailed(e.to_string()))?
            .ok_or_else(|| UserError::NotRegistered(payload.email.clone()))?;

        let authenticator = Arc::clone(&self.authenticator);
        let user_id = user.id;
        let result = tokio::task::spawn_blocking(move || {
            authenticator.authenticate(&payload.password, &user.password_hash, user.id)
        })
        .await
        .map_err(|e| UserError::Unknown(format!("Authentication task failed: {}", e)))?
        .map_err(|e| match e {
            AuthenticationError::InvalidCredentials => {
                tracing::info!(user_id = %user_id, "Login rejected, password mismatch");
                UserError::InvalidCredentials
            }
            AuthenticationError::JwtError(err) => UserError::Token(err.to_string()),
        })?;

        tracing::info!(user_id = %user_id, "User logged in");
        Ok(result.access_token)
    }

    async fn update_user(
        &self,
        actor: &AuthenticatedUser,
        mut payload: UserPayload,
    ) -> Result<User, UserError> {
        payload.prepare();

        let existing = self
            .repository
            .find_by_email(&payload.email, false)
            .await?
            .ok_or_else(|| UserError::NotFound(payload.email.clone()))?;

        self.authorize(actor, &existing)?;

        let password_hash = self.hash_password(payload.password).await?;

        // Full overwrite: empty payload fields replace stored values.
        let user = User {
            id: existing.id,
            email: payload.email,
            first_name: payload.first_name,
            last_name: payload.last_name,
            password_hash,
            profile_image: payload.profile_image,
            created_at: existing.created_at,
            updated_at: Utc::now(),
            deleted_at: None,
        };

        let updated_user = self.repository.update(user).await?;
        tracing::info!(user_id = %updated_user.id, actor = %actor.user_id, "User updated");

        Ok(updated_user)
    }

    async fn deactivate_user(
        &self,
        actor: &AuthenticatedUser,
        email: &str,
    ) -> Result<(), UserError> {
        let email = email.trim();
        self.authorize_by_email(actor, email, false).await?;

        self.repository.deactivate(email).await?;
        tracing::info!(email = %email, actor = %actor.user_id, "User deactivated");

        Ok(())
    }

    async fn delete_user(&self, actor: &AuthenticatedUser, email: &str) -> Result<(), UserError> {
        let email = email.trim();
        self.authorize_by_email(actor, email, true).await?;

        self.repository.delete(email).await?;
        tracing::info!(email = %email, actor = %actor.user_id, "User deleted");

        Ok(())
    }

    async fn list_users(&self) -> Result<Vec<User>, UserError> {
        self.repository.list_all(false).await
    }
}
