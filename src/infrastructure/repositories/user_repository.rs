//! In-memory implementation of UserRepository

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::{DomainError, Patch, UserRepository, apply_patch};
use crate::models::User;

/// Vec-backed member list, seeded once from the fixture file
pub struct InMemoryUserRepository {
    users: RwLock<Vec<User>>,
}

impl InMemoryUserRepository {
    pub fn new(users: Vec<User>) -> Self {
        Self {
            users: RwLock::new(users),
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_all(&self) -> Result<Vec<User>, DomainError> {
        Ok(self.users.read().await.clone())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.iter().find(|user| user.id == id).cloned())
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
        let mut users = self.users.write().await;

        if users.iter().any(|existing| existing.id == user.id) {
            return Err(DomainError::Conflict(format!(
                "User with ID {} already exists",
                user.id
            )));
        }

        users.push(user.clone());
        tracing::debug!(user_id = %user.id, total = users.len(), "user added");
        Ok(user)
    }

    async fn update(&self, id: &str, mut patch: Patch) -> Result<User, DomainError> {
        let mut users = self.users.write().await;
        let slot = users
            .iter_mut()
            .find(|user| user.id == id)
            .ok_or(DomainError::NotFound)?;

        patch.remove("id");
        let updated = apply_patch(&*slot, patch)?;
        *slot = updated.clone();

        tracing::debug!(user_id = %id, "user updated");
        Ok(updated)
    }

    async fn delete(&self, id: &str) -> Result<User, DomainError> {
        let mut users = self.users.write().await;
        let index = users
            .iter()
            .position(|user| user.id == id)
            .ok_or(DomainError::NotFound)?;

        let removed = users.remove(index);
        tracing::debug!(user_id = %id, total = users.len(), "user removed");
        Ok(removed)
    }
}
