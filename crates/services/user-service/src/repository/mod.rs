//! Repository layer for data access.

pub mod entities;
mod memory_repository;
mod point_repository;
mod user_repository;

pub use memory_repository::{MemoryRepository, MemoryStore};
pub use point_repository::{PointRepository, PointStore};
pub use user_repository::{UserRepository, UserStore};

// Export mocks for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use memory_repository::MockMemoryRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use point_repository::MockPointRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;
