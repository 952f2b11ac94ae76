//! Shared test doubles: an in-memory user store with attached memories and points.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::DbErr;
use uuid::Uuid;

use common::{AppError, AppResult};
use domain::{
    Argon2Hasher, Memory, NewUser, PointView, UpdateUser, User, UserWithMemories,
    MIN_PASSWORD_HASH_COST,
};
use user_service_lib::repository::{PointRepository, UserRepository};
use user_service_lib::service::{MemoryLookup, UserManager};

#[derive(Clone)]
struct StoredPoint {
    x: f64,
    y: f64,
    user_id: String,
    memory_id: Uuid,
}

#[derive(Default)]
struct Tables {
    users: Vec<User>,
    memories: Vec<Memory>,
    points: Vec<StoredPoint>,
    unavailable: bool,
}

/// In-memory storage mirroring the relational layout (users, memories, points).
#[derive(Clone, Default)]
pub struct InMemoryStore {
    tables: Arc<Mutex<Tables>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a memory to a user, returning its id.
    pub fn add_memory(&self, user_id: &str, title: &str) -> Uuid {
        let id = Uuid::new_v4();
        self.tables.lock().unwrap().memories.push(Memory {
            id,
            user_id: user_id.to_string(),
            title: title.to_string(),
            created_at: Utc::now(),
        });
        id
    }

    /// Attach a point to a user and one of its memories.
    pub fn add_point(&self, user_id: &str, memory_id: Uuid, x: f64, y: f64) {
        self.tables.lock().unwrap().points.push(StoredPoint {
            x,
            y,
            user_id: user_id.to_string(),
            memory_id,
        });
    }

    /// Make every user query fail with a connection error.
    pub fn go_offline(&self) {
        self.tables.lock().unwrap().unavailable = true;
    }

    /// Stored password hash for a user, if present.
    pub fn password_hash_of(&self, id: &str) -> Option<String> {
        self.tables
            .lock()
            .unwrap()
            .users
            .iter()
            .find(|u| u.id == id)
            .map(|u| u.password_hash.clone())
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn find_by_id_with_memories(&self, id: &str) -> AppResult<Option<UserWithMemories>> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.users.iter().find(|u| u.id == id).map(|user| {
            let memories = tables
                .memories
                .iter()
                .filter(|m| m.user_id == id)
                .cloned()
                .collect();
            UserWithMemories::new(user.clone(), memories)
        }))
    }

    async fn list(&self) -> AppResult<Vec<User>> {
        let tables = self.tables.lock().unwrap();
        if tables.unavailable {
            return Err(AppError::Database(DbErr::Custom(
                "connection refused: postgres://db.internal:5432".to_string(),
            )));
        }
        Ok(tables.users.clone())
    }

    async fn create(&self, user: NewUser) -> AppResult<User> {
        let mut tables = self.tables.lock().unwrap();
        if tables.users.iter().any(|u| u.id == user.id) {
            return Err(AppError::Database(DbErr::Custom(format!(
                "duplicate key value violates unique constraint \"users_pkey\": {}",
                user.id
            ))));
        }

        let created = User::new(user.id, user.name, user.password_hash);
        tables.users.push(created.clone());
        Ok(created)
    }

    async fn update(&self, id: &str, patch: UpdateUser) -> AppResult<User> {
        let mut tables = self.tables.lock().unwrap();
        let user = tables
            .users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or(AppError::Database(DbErr::RecordNotUpdated))?;

        patch.apply_to(user);
        Ok(user.clone())
    }

    async fn delete(&self, id: &str) -> AppResult<User> {
        let mut tables = self.tables.lock().unwrap();
        let index = tables
            .users
            .iter()
            .position(|u| u.id == id)
            .ok_or_else(|| AppError::Database(DbErr::RecordNotFound(format!("User {}", id))))?;

        let removed = tables.users.remove(index);
        tables.memories.retain(|m| m.user_id != id);
        tables.points.retain(|p| p.user_id != id);
        Ok(removed)
    }
}

#[async_trait]
impl PointRepository for InMemoryStore {
    async fn find_views_by_user_id(&self, user_id: &str) -> AppResult<Vec<PointView>> {
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .points
            .iter()
            .filter(|p| p.user_id == user_id)
            .filter_map(|p| {
                tables
                    .memories
                    .iter()
                    .find(|m| m.id == p.memory_id)
                    .map(|m| PointView::new(p.x, p.y, m.title.clone()))
            })
            .collect())
    }
}

#[async_trait]
impl MemoryLookup for InMemoryStore {
    async fn find_all_by_user_id(&self, user_id: &str) -> AppResult<Vec<Memory>> {
        Ok(self
            .tables
            .lock()
            .unwrap()
            .memories
            .iter()
            .filter(|m| m.user_id == user_id)
            .cloned()
            .collect())
    }
}

/// Build a user directory over the given store with the cheapest hash cost.
pub fn directory(store: &InMemoryStore) -> UserManager {
    let store = Arc::new(store.clone());
    UserManager::new(
        store.clone(),
        store.clone(),
        store,
        Arc::new(Argon2Hasher::new(MIN_PASSWORD_HASH_COST).unwrap()),
    )
}
