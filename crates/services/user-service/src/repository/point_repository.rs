//! Point repository - read-only projections of a user's points.

use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, FromQueryResult, QueryFilter, QuerySelect,
};

use super::entities::memory::{self, Entity as MemoryEntity};
use super::entities::point::{self, Entity as PointEntity};
use common::{AppError, AppResult};
use domain::PointView;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Point repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait PointRepository: Send + Sync {
    /// Project the user's points to coordinates plus memory title
    async fn find_views_by_user_id(&self, user_id: &str) -> AppResult<Vec<PointView>>;
}

/// Row shape of the projection query
#[derive(Debug, FromQueryResult)]
struct PointRow {
    x: f64,
    y: f64,
    memory_title: String,
}

impl From<PointRow> for PointView {
    fn from(row: PointRow) -> Self {
        PointView::new(row.x, row.y, row.memory_title)
    }
}

/// Concrete implementation of PointRepository
pub struct PointStore {
    db: DatabaseConnection,
}

impl PointStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PointRepository for PointStore {
    async fn find_views_by_user_id(&self, user_id: &str) -> AppResult<Vec<PointView>> {
        // Select only the display columns; user_id and memory_id never leave the query.
        let rows = PointEntity::find()
            .select_only()
            .column(point::Column::X)
            .column(point::Column::Y)
            .column_as(memory::Column::Title, "memory_title")
            .inner_join(MemoryEntity)
            .filter(point::Column::UserId.eq(user_id))
            .into_model::<PointRow>()
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(rows.into_iter().map(PointView::from).collect())
    }
}
