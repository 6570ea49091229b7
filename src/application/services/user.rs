//! User service
//!
//! Profile data of registered users. Credentials live in the auth service.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use crate::domain::{DomainError, DomainResult, User, UserRepository};
use crate::shared::errors::ResultExt;
use crate::shared::{invalid, validate_fields, PaginationParams};

/// Surname, name and patronymic.
const FULL_NAME_WORDS: usize = 3;

pub struct UserService {
    users: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    pub async fn create(&self, user: User) -> DomainResult<()> {
        if !user.has_known_gender() {
            return Err(invalid("unknown gender"));
        }

        validate_fields(&user)?;

        if user.full_name_words() != FULL_NAME_WORDS {
            return Err(invalid(
                "full name must consist of surname, name and patronymic",
            ));
        }

        let id = user.id;
        self.users.create(user).await.context("creating user")?;

        info!(user_id = %id, "User created");
        Ok(())
    }

    pub async fn get_by_username(&self, username: &str) -> DomainResult<User> {
        self.users
            .find_by_username(username)
            .await
            .and_then(|found| {
                found.ok_or_else(|| DomainError::not_found("User", "username", username))
            })
            .context("getting user by username")
    }

    pub async fn get_by_id(&self, id: Uuid) -> DomainResult<User> {
        self.users
            .find_by_id(id)
            .await
            .and_then(|found| found.ok_or_else(|| DomainError::not_found("User", "id", id)))
            .context("getting user by id")
    }

    pub async fn get_all(&self, page: PaginationParams) -> DomainResult<Vec<User>> {
        self.users
            .find_all(Some(page))
            .await
            .context("listing users")
    }

    pub async fn update(&self, user: User) -> DomainResult<()> {
        self.users.update(user).await.context("updating user")
    }

    pub async fn delete_by_id(&self, id: Uuid) -> DomainResult<()> {
        self.users
            .delete_by_id(id)
            .await
            .context("deleting user by id")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::storage::InMemoryUserRepository;
    use chrono::NaiveDate;

    fn service() -> UserService {
        UserService::new(Arc::new(InMemoryUserRepository::new()))
    }

    fn valid_user(username: &str) -> User {
        let mut user = User::new(username);
        user.full_name = "Ivanov Ivan Ivanovich".into();
        user.gender = "m".into();
        user.birthday = NaiveDate::from_ymd_opt(1990, 5, 17);
        user.city = "Moscow".into();
        user
    }

    fn validation_message(err: DomainError) -> String {
        match err {
            DomainError::Validation(msg) => msg,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn create_valid_user() {
        let svc = service();
        let user = valid_user("ivanov");
        svc.create(user.clone()).await.unwrap();

        assert_eq!(svc.get_by_id(user.id).await.unwrap(), user);
        assert_eq!(svc.get_by_username("ivanov").await.unwrap(), user);
    }

    #[tokio::test]
    async fn unknown_gender_is_rejected() {
        let mut user = valid_user("u");
        user.gender = "x".into();
        let msg = validation_message(service().create(user).await.unwrap_err());
        assert_eq!(msg, "unknown gender");
    }

    #[tokio::test]
    async fn city_is_required() {
        let mut user = valid_user("u");
        user.city.clear();
        let msg = validation_message(service().create(user).await.unwrap_err());
        assert_eq!(msg, "city is required");
    }

    #[tokio::test]
    async fn birthday_is_required() {
        let mut user = valid_user("u");
        user.birthday = None;
        let msg = validation_message(service().create(user).await.unwrap_err());
        assert_eq!(msg, "birthday is required");
    }

    #[tokio::test]
    async fn full_name_is_required() {
        let mut user = valid_user("u");
        user.full_name.clear();
        let msg = validation_message(service().create(user).await.unwrap_err());
        assert_eq!(msg, "full name is required");
    }

    #[tokio::test]
    async fn full_name_needs_three_words() {
        let svc = service();
        for name in ["Ivanov Ivan", "Ivanov Ivan Ivanovich Jr", "Ivanov  Ivan Ivanovich"] {
            let mut user = valid_user("u");
            user.full_name = name.into();
            let msg = validation_message(svc.create(user).await.unwrap_err());
            assert!(msg.contains("surname, name and patronymic"), "{name}");
        }
    }

    #[tokio::test]
    async fn repository_failure_is_wrapped() {
        let svc = service();
        svc.create(valid_user("dup")).await.unwrap();

        let err = svc.create(valid_user("dup")).await.unwrap_err();
        assert!(matches!(err.root_cause(), DomainError::Conflict(_)));
        assert!(err.to_string().starts_with("creating user:"));
    }

    #[tokio::test]
    async fn unknown_username() {
        let err = service().get_by_username("ghost").await.unwrap_err();
        assert!(err.is_not_found());
        assert!(err.to_string().contains("username=ghost"));
    }

    #[tokio::test]
    async fn list_update_delete() {
        let svc = service();
        let mut a = valid_user("a");
        svc.create(a.clone()).await.unwrap();
        svc.create(valid_user("b")).await.unwrap();

        assert_eq!(svc.get_all(PaginationParams::default()).await.unwrap().len(), 2);

        a.city = "Kazan".into();
        svc.update(a.clone()).await.unwrap();
        assert_eq!(svc.get_by_id(a.id).await.unwrap().city, "Kazan");

        svc.delete_by_id(a.id).await.unwrap();
        assert_eq!(svc.get_all(PaginationParams::default()).await.unwrap().len(), 1);
    }
}
