use async_trait::async_trait;

use super::UserAuth;
use crate::domain::DomainResult;

#[async_trait]
pub trait AuthRepository: Send + Sync {
    async fn register(&self, auth: UserAuth) -> DomainResult<()>;
    async fn find_by_username(&self, username: &str) -> DomainResult<Option<UserAuth>>;
}

/// One-way password hashing used by registration and login.
pub trait PasswordHasher: Send + Sync {
    fn hash(&self, password: &str) -> DomainResult<String>;
    fn verify(&self, password: &str, hash: &str) -> bool;
}
