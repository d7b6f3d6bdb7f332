use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserRepository;
use crate::user::errors::UserError;

/// Process-local user store.
///
/// Mirrors the Postgres repository: email is unique across every stored row,
/// deactivated rows stay until deleted, and lookups skip them unless asked.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<UserId, User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: User) -> Result<User, UserError> {
        let mut users = self.users.write().await;

        if users.values().any(|u| u.email == user.email) {
            return Err(UserError::AlreadyRegistered(user.email));
        }

        users.insert(user.id, user.clone());
        tracing::debug!(user_id = %user.id, "User stored");

        Ok(user)
    }

    async fn find_by_email(
        &self,
        email: &str,
        include_deleted: bool,
    ) -> Result<Option<User>, UserError> {
        let users = self.users.read().await;

        Ok(users
            .values()
            .find(|u| u.email == email && (include_deleted || !u.is_deactivated()))
            .cloned())
    }

    async fn list_all(&self, include_deleted: bool) -> Result<Vec<User>, UserError> {
        let users = self.users.read().await;

        let mut listed: Vec<User> = users
            .values()
            .filter(|u| include_deleted || !u.is_deactivated())
            .cloned()
            .collect();
        listed.sort_by_key(|u| u.created_at);

        Ok(listed)
    }

    async fn update(&self, user: User) -> Result<User, UserError> {
        let mut users = self.users.write().await;

        if users
            .values()
            .any(|u| u.id != user.id && u.email == user.email)
        {
            return Err(UserError::AlreadyRegistered(user.email));
        }

        match users.get_mut(&user.id) {
            Some(stored) if !stored.is_deactivated() => {
                stored.email = user.email;
                stored.first_name = user.first_name;
                stored.last_name = user.last_name;
                stored.password_hash = user.password_hash;
                stored.profile_image = user.profile_image;
                stored.updated_at = user.updated_at;
                Ok(stored.clone())
            }
            _ => Err(UserError::NotFound(user.email)),
        }
    }

    async fn deactivate(&self, email: &str) -> Result<(), UserError> {
        let mut users = self.users.write().await;

        let user = users
            .values_mut()
            .find(|u| u.email == email && !u.is_deactivated())
            .ok_or_else(|| UserError::NotFound(email.to_string()))?;

        let now = Utc::now();
        user.deleted_at = Some(now);
        user.updated_at = now;

        Ok(())
    }

    async fn delete(&self, email: &str) -> Result<(), UserError> {
        let mut users = self.users.write().await;

        let before = users.len();
        users.retain(|_, u| u.email != email);

        if users.len() == before {
            return Err(UserError::NotFound(email.to_string()));
        }

        Ok(())
    }
}
