//! Point projections.
//!
//! A stored point references both a user and a memory. Callers only ever see
//! the `PointView` projection: coordinates plus the title of the memory, with
//! the relationship keys left out.

use serde::{Deserialize, Serialize};

/// Title of the memory a point belongs to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct MemoryTitle {
    pub title: String,
}

/// Display projection of a point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct PointView {
    pub x: f64,
    pub y: f64,
    pub memory: MemoryTitle,
}

impl PointView {
    pub fn new(x: f64, y: f64, memory_title: impl Into<String>) -> Self {
        Self {
            x,
            y,
            memory: MemoryTitle {
                title: memory_title.into(),
            },
        }
    }
}
