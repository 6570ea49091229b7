use async_trait::async_trait;
use uuid::Uuid;

use super::Contact;
use crate::domain::DomainResult;
use crate::shared::PaginationParams;

#[async_trait]
pub trait ContactRepository: Send + Sync {
    async fn create(&self, contact: Contact) -> DomainResult<()>;
    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Contact>>;
    async fn find_by_owner_id(
        &self,
        owner_id: Uuid,
        page: Option<PaginationParams>,
    ) -> DomainResult<Vec<Contact>>;
    async fn update(&self, contact: Contact) -> DomainResult<()>;
    async fn delete_by_id(&self, id: Uuid) -> DomainResult<()>;
}
