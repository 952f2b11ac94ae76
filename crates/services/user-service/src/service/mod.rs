//! Application services - user directory use cases.

mod memory_service;
mod user_service;

pub use memory_service::{MemoryLookup, MemoryManager};
pub use user_service::{UserDirectory, UserManager};

#[cfg(any(test, feature = "test-utils"))]
pub use memory_service::MockMemoryLookup;
