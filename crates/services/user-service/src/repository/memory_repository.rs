//! Memory repository - lookups of memories by owner.

use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};

use super::entities::memory::{self, Entity as MemoryEntity};
use common::{AppError, AppResult};
use domain::Memory;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Memory repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait MemoryRepository: Send + Sync {
    /// Find all memories owned by a user, oldest first
    async fn find_by_user_id(&self, user_id: &str) -> AppResult<Vec<Memory>>;
}

/// Concrete implementation of MemoryRepository
pub struct MemoryStore {
    db: DatabaseConnection,
}

impl MemoryStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl MemoryRepository for MemoryStore {
    async fn find_by_user_id(&self, user_id: &str) -> AppResult<Vec<Memory>> {
        let models = MemoryEntity::find()
            .filter(memory::Column::UserId.eq(user_id))
            .order_by_asc(memory::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Memory::from).collect())
    }
}
