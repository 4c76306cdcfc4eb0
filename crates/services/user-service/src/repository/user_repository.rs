//! User repository implementation.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder, Set, SqlErr,
};
use sea_orm_migration::MigratorTrait;

use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use crate::infra::Migrator;
use common::{AppError, AppResult};
use domain::{NewUser, User};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
///
/// The store owns email uniqueness: `insert` relies on the database's unique
/// index and reports a violation as [`AppError::DuplicateEmail`].
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new user with a fresh id and creation timestamp
    async fn insert(&self, new_user: NewUser) -> AppResult<User>;

    /// Find user by ID
    async fn find_by_id(&self, id: i32) -> AppResult<Option<User>>;

    /// List all users in insertion order
    async fn list(&self) -> AppResult<Vec<User>>;

    /// Drop and recreate the users schema
    async fn reset(&self) -> AppResult<()>;
}

/// Concrete implementation of UserRepository backed by SeaORM
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}

#[async_trait]
impl UserRepository for UserStore {
    async fn insert(&self, new_user: NewUser) -> AppResult<User> {
        let (username, email) = new_user.into_parts();
        let active_model = ActiveModel {
            username: Set(username),
            email: Set(email),
            active_since: Set(chrono::Utc::now()),
            ..Default::default()
        };

        match active_model.insert(&self.db).await {
            Ok(model) => Ok(User::from(model)),
            Err(err) if is_unique_violation(&err) => Err(AppError::DuplicateEmail),
            Err(err) => Err(AppError::from(err)),
        }
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<User>> {
        let result = UserEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(User::from))
    }

    async fn list(&self) -> AppResult<Vec<User>> {
        let models = UserEntity::find()
            .order_by_asc(user::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(User::from).collect())
    }

    async fn reset(&self) -> AppResult<()> {
        Migrator::fresh(&self.db).await.map_err(AppError::from)?;
        tracing::warn!("Users schema dropped and recreated");
        Ok(())
    }
}
