//! User Service Library
//!
//! User account management: create, read, update and delete users, plus
//! lookups of the memories and points attached to them. Exposed over HTTP.

pub mod api;
pub mod config;
pub mod infra;
pub mod repository;
pub mod service;

use std::sync::Arc;

use tracing::info;

use domain::Argon2Hasher;

use crate::api::{create_router, AppState};
use crate::config::UserServiceConfig;
use crate::infra::Database;
use crate::repository::{MemoryStore, PointStore, UserStore};
use crate::service::{MemoryManager, UserManager};

/// Migration action type.
#[derive(Debug, Clone, Copy)]
pub enum MigrateAction {
    Up,
    Down,
    Status,
    Fresh,
}

/// Wire the user directory over a database connection.
pub fn build_state(db: Database, config: &UserServiceConfig) -> Result<AppState, Box<dyn std::error::Error>> {
    let db_conn = db.get_connection();

    let hasher = Arc::new(Argon2Hasher::new(config.password_hash_cost)?);
    let user_repo = Arc::new(UserStore::new(db_conn.clone()));
    let point_repo = Arc::new(PointStore::new(db_conn.clone()));
    let memories = Arc::new(MemoryManager::new(Arc::new(MemoryStore::new(db_conn))));

    let directory = Arc::new(UserManager::new(user_repo, point_repo, memories, hasher));

    Ok(AppState::new(directory, db))
}

/// Run the HTTP server with the given configuration.
pub async fn run_server(config: UserServiceConfig) -> Result<(), Box<dyn std::error::Error>> {
    // Initialize database
    let db = Database::connect(&config.database).await?;

    let state = build_state(db, &config)?;
    let app = create_router(state);

    let addr = config.service.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("User service listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Run migrations (for CLI commands).
pub async fn run_migrations(
    config: UserServiceConfig,
    action: MigrateAction,
) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::connect_without_migrations(&config.database).await?;

    match action {
        MigrateAction::Up => {
            db.run_migrations().await?;
            info!("Migrations applied successfully");
        }
        MigrateAction::Down => {
            db.rollback_migration().await?;
            info!("Rolled back last migration");
        }
        MigrateAction::Status => {
            let status = db.migration_status().await?;
            for (name, applied) in status {
                let marker = if applied { "[x]" } else { "[ ]" };
                println!("{} {}", marker, name);
            }
        }
        MigrateAction::Fresh => {
            tracing::warn!("Resetting database and running all migrations");
            db.fresh_migrations().await?;
            info!("Database reset and migrations applied");
        }
    }

    Ok(())
}
