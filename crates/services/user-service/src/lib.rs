//! User Service Library
//!
//! This crate provides the user directory over HTTP: a SeaORM-backed store
//! that owns email uniqueness, a service layer that validates payloads, and
//! an axum router serving both JSON and a small HTML page.

pub mod api;
pub mod config;
pub mod infra;
pub mod repository;
pub mod service;

use std::net::SocketAddr;
use std::sync::Arc;

use tracing::{info, warn};

use common::AppError;
use domain::{CreateUser, NewUser, SEED_USERS};

use crate::api::{create_router, AppState};
use crate::config::UserServiceConfig;
use crate::infra::Database;
use crate::repository::{UserRepository, UserStore};

/// Migration action type.
#[derive(Debug, Clone, Copy)]
pub enum MigrateAction {
    Up,
    Down,
    Status,
    Fresh,
}

/// Run the HTTP server with the given configuration.
pub async fn run_server(
    host: &str,
    port: u16,
    config: UserServiceConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    info!(environment = ?config.environment, "Starting user service");

    // Initialize database
    let db = Database::connect(&config.database).await?;

    // Create app state and router
    let state = AppState::from_connection(db.get_connection());
    let app = create_router(state);

    // Build address
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    info!("User service listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Run migrations (for CLI commands).
pub async fn run_migrations(
    action: MigrateAction,
    config: UserServiceConfig,
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
            db.fresh_migrations().await?;
            info!("Database reset and migrations applied");
        }
    }

    Ok(())
}

/// Drop and recreate the users schema.
pub async fn recreate_db(config: UserServiceConfig) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::connect_without_migrations(&config.database).await?;
    UserStore::new(db.get_connection()).reset().await?;
    info!("Database recreated");
    Ok(())
}

/// Insert the demo users into the store.
///
/// Returns how many users were inserted; users whose email is already
/// present are skipped.
pub async fn seed_users(repo: Arc<dyn UserRepository>) -> Result<usize, AppError> {
    let mut inserted = 0;

    for (username, email) in SEED_USERS {
        let new_user = NewUser::try_from(CreateUser::new(*username, *email))?;
        match repo.insert(new_user).await {
            Ok(user) => {
                info!(user_id = user.id, email = %user.email, "Seeded user");
                inserted += 1;
            }
            Err(AppError::DuplicateEmail) => warn!(email = %email, "Seed user already exists"),
            Err(e) => return Err(e),
        }
    }

    Ok(inserted)
}

/// Seed the configured database with demo users.
pub async fn seed_db(config: UserServiceConfig) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::connect(&config.database).await?;
    let inserted = seed_users(Arc::new(UserStore::new(db.get_connection()))).await?;
    info!("Seeded {} users", inserted);
    Ok(())
}
