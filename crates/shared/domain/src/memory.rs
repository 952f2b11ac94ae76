//! Memory entity as seen from the user directory.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A memory owned by exactly one user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Memory {
    /// Unique memory identifier
    pub id: Uuid,
    /// Owning user identifier
    pub user_id: String,
    /// Memory title
    pub title: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}
