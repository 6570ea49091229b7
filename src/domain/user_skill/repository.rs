use async_trait::async_trait;
use uuid::Uuid;

use super::UserSkill;
use crate::domain::DomainResult;
use crate::shared::PaginationParams;

#[async_trait]
pub trait UserSkillRepository: Send + Sync {
    async fn create(&self, pair: UserSkill) -> DomainResult<()>;
    async fn delete(&self, pair: UserSkill) -> DomainResult<()>;
    async fn find_by_user_id(
        &self,
        user_id: Uuid,
        page: Option<PaginationParams>,
    ) -> DomainResult<Vec<UserSkill>>;
    async fn find_by_skill_id(
        &self,
        skill_id: Uuid,
        page: Option<PaginationParams>,
    ) -> DomainResult<Vec<UserSkill>>;
}
