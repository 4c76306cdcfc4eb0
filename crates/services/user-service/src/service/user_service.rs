//! User service - Handles user-related business logic.
//!
//! Validates inbound payloads, delegates persistence to the repository and
//! translates store outcomes into [`AppError`] variants the transport can
//! render directly.

use async_trait::async_trait;
use std::sync::Arc;

use common::{AppError, AppResult, OptionExt};
use domain::{CreateUser, NewUser, User, MSG_PONG};

use crate::repository::UserRepository;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Validate the payload and create a new user
    async fn create_user(&self, payload: CreateUser) -> AppResult<User>;

    /// Get user by its id token.
    ///
    /// Tokens that are not numeric are treated exactly like unknown ids.
    async fn get_user(&self, id_token: &str) -> AppResult<User>;

    /// List all users in creation order
    async fn list_users(&self) -> AppResult<Vec<User>>;

    /// Liveness acknowledgement, never touches the store
    fn ping(&self) -> &'static str;
}

/// Concrete implementation of UserService using repository.
pub struct UserManager {
    repo: Arc<dyn UserRepository>,
}

impl UserManager {
    /// Create new user service instance with repository
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn create_user(&self, payload: CreateUser) -> AppResult<User> {
        let new_user = NewUser::try_from(payload).map_err(|e| {
            tracing::debug!("Rejected create payload: {}", e);
            AppError::from(e)
        })?;

        match self.repo.insert(new_user).await {
            Ok(user) => {
                tracing::info!(user_id = user.id, "User created");
                Ok(user)
            }
            Err(AppError::DuplicateEmail) => {
                tracing::info!("Rejected user with duplicate email");
                Err(AppError::DuplicateEmail)
            }
            Err(e) => Err(e),
        }
    }

    async fn get_user(&self, id_token: &str) -> AppResult<User> {
        let Ok(id) = id_token.trim().parse::<i32>() else {
            return Err(AppError::UserNotFound);
        };

        self.repo.find_by_id(id).await?.ok_or_not_found()
    }

    async fn list_users(&self) -> AppResult<Vec<User>> {
        self.repo.list().await
    }

    fn ping(&self) -> &'static str {
        MSG_PONG
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockUserRepository;
    use chrono::Utc;
    use mockall::predicate::eq;

    fn create_test_user(id: i32, username: &str, email: &str) -> User {
        User {
            id,
            username: username.to_string(),
            email: email.to_string(),
            active_since: Utc::now(),
        }
    }

    fn service(repo: MockUserRepository) -> UserManager {
        UserManager::new(Arc::new(repo))
    }

    #[tokio::test]
    async fn test_create_user_success() {
        let mut repo = MockUserRepository::new();
        repo.expect_insert()
            .withf(|new_user| {
                new_user.username() == "Luis Alcantara"
                    && new_user.email() == "luisalcantara@upeu.edu.pe"
            })
            .times(1)
            .returning(|new_user| {
                Ok(create_test_user(1, new_user.username(), new_user.email()))
            });

        let user = service(repo)
            .create_user(CreateUser::new("Luis Alcantara ", "luisalcantara@upeu.edu.pe"))
            .await
            .unwrap();

        assert_eq!(user.id, 1);
        assert_eq!(user.email, "luisalcantara@upeu.edu.pe");
    }

    #[tokio::test]
    async fn test_create_user_empty_payload_skips_store() {
        let mut repo = MockUserRepository::new();
        repo.expect_insert().never();

        let result = service(repo).create_user(CreateUser::default()).await;

        assert!(matches!(result, Err(AppError::InvalidPayload)));
    }

    #[tokio::test]
    async fn test_create_user_missing_username() {
        let mut repo = MockUserRepository::new();
        repo.expect_insert().never();

        let payload = CreateUser {
            username: None,
            email: Some("luisalcantara@upeu.edu.pe".to_string()),
        };
        let result = service(repo).create_user(payload).await;

        assert!(matches!(result, Err(AppError::InvalidPayload)));
    }

    #[tokio::test]
    async fn test_create_user_duplicate_email() {
        let mut repo = MockUserRepository::new();
        repo.expect_insert()
            .returning(|_| Err(AppError::DuplicateEmail));

        let result = service(repo)
            .create_user(CreateUser::new("Luis Alcantara", "luisalcantara@upeu.edu.pe"))
            .await;

        let err = result.unwrap_err();
        assert!(matches!(err, AppError::DuplicateEmail));
        assert_eq!(err.user_message(), "this email already exists.");
    }

    #[tokio::test]
    async fn test_create_user_propagates_store_failure() {
        let mut repo = MockUserRepository::new();
        repo.expect_insert()
            .returning(|_| Err(AppError::internal("connection lost")));

        let result = service(repo)
            .create_user(CreateUser::new("david", "david@upeu.edu.pe"))
            .await;

        assert!(matches!(result, Err(AppError::Internal(_))));
    }

    #[tokio::test]
    async fn test_get_user_success() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id()
            .with(eq(2))
            .returning(|id| Ok(Some(create_test_user(id, "david", "david@upeu.edu.pe"))));

        let user = service(repo).get_user("2").await.unwrap();

        assert_eq!(user.id, 2);
        assert_eq!(user.username, "david");
    }

    #[tokio::test]
    async fn test_get_user_not_found() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id()
            .with(eq(999))
            .returning(|_| Ok(None));

        let result = service(repo).get_user("999").await;

        assert!(matches!(result, Err(AppError::UserNotFound)));
    }

    #[tokio::test]
    async fn test_get_user_malformed_id_is_not_found() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id().never();

        let result = service(repo).get_user("blah").await;

        assert!(matches!(result, Err(AppError::UserNotFound)));
    }

    #[tokio::test]
    async fn test_list_users_keeps_store_order() {
        let mut repo = MockUserRepository::new();
        repo.expect_list().returning(|| {
            Ok(vec![
                create_test_user(1, "Luis Alcantara", "luisalcantara@upeu.edu.pe"),
                create_test_user(2, "david", "david@upeu.edu.pe"),
            ])
        });

        let users = service(repo).list_users().await.unwrap();

        let names: Vec<_> = users.iter().map(|u| u.username.as_str()).collect();
        assert_eq!(names, ["Luis Alcantara", "david"]);
    }

    #[test]
    fn test_ping_never_touches_store() {
        let repo = MockUserRepository::new();
        assert_eq!(service(repo).ping(), "pong!");
    }
}
