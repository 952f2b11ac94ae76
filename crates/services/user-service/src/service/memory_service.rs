//! Memory lookup - the part of the memory subsystem the user directory uses.

use async_trait::async_trait;
use std::sync::Arc;

use common::AppResult;
use domain::Memory;

use crate::repository::MemoryRepository;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Lookup of memories by owning user.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait MemoryLookup: Send + Sync {
    /// All memories owned by the given user
    async fn find_all_by_user_id(&self, user_id: &str) -> AppResult<Vec<Memory>>;
}

/// Concrete implementation of MemoryLookup using repository.
pub struct MemoryManager {
    repo: Arc<dyn MemoryRepository>,
}

impl MemoryManager {
    /// Create new memory lookup with repository
    pub fn new(repo: Arc<dyn MemoryRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl MemoryLookup for MemoryManager {
    async fn find_all_by_user_id(&self, user_id: &str) -> AppResult<Vec<Memory>> {
        self.repo.find_by_user_id(user_id).await
    }
}
