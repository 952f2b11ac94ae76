//! User directory - Handles user lifecycle use cases.
//!
//! Every operation is a single call into storage. Failures from storage are
//! returned as they are; the directory does no retries and no translation.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info};

use common::{AppError, AppResult};
use domain::{CreateUser, Memory, NewUser, PasswordHasher, PointView, UpdateUser, User, UserWithMemories};

use crate::repository::{PointRepository, UserRepository};
use crate::service::MemoryLookup;

/// User directory trait for dependency injection.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Create a user, storing only the hash of its password.
    ///
    /// Duplicate identifiers are rejected by storage, not checked up front.
    async fn create_user(&self, input: CreateUser) -> AppResult<User>;

    /// Find a user with its memories attached; `None` when absent
    async fn find_user(&self, id: &str) -> AppResult<Option<UserWithMemories>>;

    /// List every user
    async fn list_users(&self) -> AppResult<Vec<User>>;

    /// Apply a partial update
    async fn update_user(&self, id: &str, patch: UpdateUser) -> AppResult<User>;

    /// Delete a user and return the removed record
    async fn delete_user(&self, id: &str) -> AppResult<User>;

    /// Memories owned by a user
    async fn list_user_memories(&self, id: &str) -> AppResult<Vec<Memory>>;

    /// Coordinates and memory titles of a user's points
    async fn list_user_points(&self, id: &str) -> AppResult<Vec<PointView>>;
}

/// Concrete implementation of UserDirectory over injected collaborators.
pub struct UserManager {
    users: Arc<dyn UserRepository>,
    points: Arc<dyn PointRepository>,
    memories: Arc<dyn MemoryLookup>,
    hasher: Arc<dyn PasswordHasher>,
}

impl UserManager {
    /// Create new user directory instance
    pub fn new(
        users: Arc<dyn UserRepository>,
        points: Arc<dyn PointRepository>,
        memories: Arc<dyn MemoryLookup>,
        hasher: Arc<dyn PasswordHasher>,
    ) -> Self {
        Self {
            users,
            points,
            memories,
            hasher,
        }
    }

    /// Hash on the blocking pool so Argon2 never stalls the runtime.
    async fn hash_password(&self, plain_text: String) -> AppResult<String> {
        let hasher = Arc::clone(&self.hasher);
        let password = tokio::task::spawn_blocking(move || hasher.hash(&plain_text))
            .await
            .map_err(|e| AppError::internal(format!("Password hashing task failed: {}", e)))??;

        Ok(password.into_string())
    }
}

#[async_trait]
impl UserDirectory for UserManager {
    async fn create_user(&self, input: CreateUser) -> AppResult<User> {
        let password_hash = self.hash_password(input.password).await?;

        let user = self
            .users
            .create(NewUser {
                id: input.id,
                name: input.name,
                password_hash,
            })
            .await?;

        info!(user_id = %user.id, "User created");
        Ok(user)
    }

    async fn find_user(&self, id: &str) -> AppResult<Option<UserWithMemories>> {
        let user = self.users.find_by_id_with_memories(id).await?;
        debug!(user_id = %id, found = user.is_some(), "User lookup");
        Ok(user)
    }

    async fn list_users(&self) -> AppResult<Vec<User>> {
        self.users.list().await
    }

    async fn update_user(&self, id: &str, patch: UpdateUser) -> AppResult<User> {
        let user = self.users.update(id, patch).await?;
        info!(user_id = %id, "User updated");
        Ok(user)
    }

    async fn delete_user(&self, id: &str) -> AppResult<User> {
        let user = self.users.delete(id).await?;
        info!(user_id = %id, "User deleted");
        Ok(user)
    }

    async fn list_user_memories(&self, id: &str) -> AppResult<Vec<Memory>> {
        self.memories.find_all_by_user_id(id).await
    }

    async fn list_user_points(&self, id: &str) -> AppResult<Vec<PointView>> {
        self.points.find_views_by_user_id(id).await
    }
}
