use async_trait::async_trait;
use uuid::Uuid;

use super::Company;
use crate::domain::DomainResult;
use crate::shared::PaginationParams;

#[async_trait]
pub trait CompanyRepository: Send + Sync {
    async fn create(&self, company: Company) -> DomainResult<()>;
    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Company>>;
    async fn find_by_owner_id(
        &self,
        owner_id: Uuid,
        page: Option<PaginationParams>,
    ) -> DomainResult<Vec<Company>>;
    async fn find_all(&self, page: Option<PaginationParams>) -> DomainResult<Vec<Company>>;
    async fn update(&self, company: Company) -> DomainResult<()>;
    async fn delete_by_id(&self, id: Uuid) -> DomainResult<()>;
}
