use async_trait::async_trait;
use uuid::Uuid;

use super::Skill;
use crate::domain::DomainResult;
use crate::shared::PaginationParams;

#[async_trait]
pub trait SkillRepository: Send + Sync {
    async fn create(&self, skill: Skill) -> DomainResult<()>;
    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Skill>>;
    async fn find_all(&self, page: Option<PaginationParams>) -> DomainResult<Vec<Skill>>;
    async fn update(&self, skill: Skill) -> DomainResult<()>;
    async fn delete_by_id(&self, id: Uuid) -> DomainResult<()>;
}
