use async_trait::async_trait;
use uuid::Uuid;

use super::User;
use crate::domain::DomainResult;
use crate::shared::PaginationParams;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create(&self, user: User) -> DomainResult<()>;

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<User>>;
    async fn find_by_username(&self, username: &str) -> DomainResult<Option<User>>;
    async fn find_all(&self, page: Option<PaginationParams>) -> DomainResult<Vec<User>>;

    async fn update(&self, user: User) -> DomainResult<()>;
    async fn delete_by_id(&self, id: Uuid) -> DomainResult<()>;
}
