//! User domain entity and related types.

use serde::{Deserialize, Serialize};

use crate::memory::Memory;

/// User domain entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Externally supplied identifier, immutable once created
    pub id: String,
    pub name: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
}

impl User {
    /// Create a user from an already hashed password
    pub fn new(id: String, name: String, password_hash: String) -> Self {
        Self {
            id,
            name,
            password_hash,
        }
    }
}

/// User together with the memories attached to it.
///
/// `memories` is empty, never absent, for a user without memories.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UserWithMemories {
    /// Unique user identifier
    pub id: String,
    /// User display name
    pub name: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Memories owned by the user
    pub memories: Vec<Memory>,
}

impl UserWithMemories {
    /// Attach a memory collection to a user
    pub fn new(user: User, memories: Vec<Memory>) -> Self {
        Self {
            id: user.id,
            name: user.name,
            password_hash: user.password_hash,
            memories,
        }
    }
}

/// User creation data transfer object
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUser {
    /// Externally supplied unique identifier
    pub id: String,
    /// User display name
    pub name: String,
    /// Plain text password, hashed before it is stored
    pub password: String,
}

/// Insert payload handed to storage once the password is hashed.
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub id: String,
    pub name: String,
    pub password_hash: String,
}

/// Partial user update.
///
/// Carries only mutable fields; the identifier cannot be changed.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateUser {
    /// New display name
    pub name: Option<String>,
}

impl UpdateUser {
    /// Check whether the patch changes nothing
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
    }

    /// Apply the patch to an in-memory user
    pub fn apply_to(&self, user: &mut User) {
        if let Some(name) = &self.name {
            user.name = name.clone();
        }
    }
}

/// User response (safe to return to client)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UserResponse {
    /// Unique user identifier
    pub id: String,
    /// User display name
    pub name: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
        }
    }
}
