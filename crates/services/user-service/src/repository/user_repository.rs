//! User repository implementation.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder};

use super::entities::memory::{self, Entity as MemoryEntity};
use super::entities::user::{ActiveModel, Entity as UserEntity};
use common::{AppError, AppResult};
use domain::{Memory, NewUser, UpdateUser, User, UserWithMemories};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
///
/// Storage errors are returned unchanged inside `AppError::Database`.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID with its memories eagerly loaded
    async fn find_by_id_with_memories(&self, id: &str) -> AppResult<Option<UserWithMemories>>;

    /// List all users in storage order
    async fn list(&self) -> AppResult<Vec<User>>;

    /// Insert a new user (password already hashed)
    async fn create(&self, user: NewUser) -> AppResult<User>;

    /// Apply a partial update and return the stored result
    async fn update(&self, id: &str, patch: UpdateUser) -> AppResult<User>;

    /// Delete a user and return the record as it was before deletion
    async fn delete(&self, id: &str) -> AppResult<User>;
}

/// Concrete implementation of UserRepository
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn find_by_id_with_memories(&self, id: &str) -> AppResult<Option<UserWithMemories>> {
        let mut rows = UserEntity::find_by_id(id.to_string())
            .find_with_related(MemoryEntity)
            .order_by_asc(memory::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(rows.pop().map(|(user, memories)| {
            UserWithMemories::new(
                User::from(user),
                memories.into_iter().map(Memory::from).collect(),
            )
        }))
    }

    async fn list(&self) -> AppResult<Vec<User>> {
        let models = UserEntity::find()
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(User::from).collect())
    }

    async fn create(&self, user: NewUser) -> AppResult<User> {
        let active_model = ActiveModel {
            id: ActiveValue::Set(user.id),
            name: ActiveValue::Set(user.name),
            password_hash: ActiveValue::Set(user.password_hash),
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        Ok(User::from(model))
    }

    async fn update(&self, id: &str, patch: UpdateUser) -> AppResult<User> {
        if patch.is_empty() {
            let model = UserEntity::find_by_id(id.to_string())
                .one(&self.db)
                .await?
                .ok_or(DbErr::RecordNotUpdated)?;
            return Ok(User::from(model));
        }

        // Only columns present in the patch are written; a missing row
        // surfaces as DbErr::RecordNotUpdated / RecordNotFound.
        let active = ActiveModel {
            id: ActiveValue::Unchanged(id.to_string()),
            name: patch.name.map(ActiveValue::Set).unwrap_or(ActiveValue::NotSet),
            password_hash: ActiveValue::NotSet,
        };

        let model = active.update(&self.db).await.map_err(AppError::from)?;
        Ok(User::from(model))
    }

    async fn delete(&self, id: &str) -> AppResult<User> {
        let model = UserEntity::find_by_id(id.to_string())
            .one(&self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("User {}", id)))?;

        let result = UserEntity::delete_by_id(id.to_string())
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(DbErr::RecordNotFound(format!("User {}", id)).into());
        }

        Ok(User::from(model))
    }
}
