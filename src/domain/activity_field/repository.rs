use async_trait::async_trait;
use uuid::Uuid;

use super::ActivityField;
use crate::domain::DomainResult;
use crate::shared::PaginationParams;

#[async_trait]
pub trait ActivityFieldRepository: Send + Sync {
    async fn create(&self, field: ActivityField) -> DomainResult<()>;
    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<ActivityField>>;
    async fn find_all(&self, page: Option<PaginationParams>) -> DomainResult<Vec<ActivityField>>;
    /// Largest cost over all fields, `None` when there are none.
    async fn max_cost(&self) -> DomainResult<Option<f64>>;
    async fn update(&self, field: ActivityField) -> DomainResult<()>;
    async fn delete_by_id(&self, id: Uuid) -> DomainResult<()>;
}
