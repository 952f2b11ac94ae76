//! Domain layer - Core business entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies:
//! users, the memories and points attached to them, and password hashing.

pub mod constants;
pub mod error;
pub mod memory;
pub mod password;
pub mod point;
pub mod user;

pub use constants::*;
pub use error::{DomainError, DomainResult};
pub use memory::Memory;
pub use password::{Argon2Hasher, Password, PasswordHasher};
pub use point::{MemoryTitle, PointView};
pub use user::{CreateUser, NewUser, UpdateUser, User, UserResponse, UserWithMemories};
