//! Skill service

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use crate::domain::{DomainError, DomainResult, Skill, SkillRepository};
use crate::shared::errors::ResultExt;
use crate::shared::{validate_fields, PaginationParams};

pub struct SkillService {
    skills: Arc<dyn SkillRepository>,
}

impl SkillService {
    pub fn new(skills: Arc<dyn SkillRepository>) -> Self {
        Self { skills }
    }

    pub async fn create(&self, skill: Skill) -> DomainResult<()> {
        validate_fields(&skill)?;

        let id = skill.id;
        self.skills.create(skill).await.context("creating skill")?;

        info!(skill_id = %id, "Skill created");
        Ok(())
    }

    pub async fn get_by_id(&self, id: Uuid) -> DomainResult<Skill> {
        self.skills
            .find_by_id(id)
            .await
            .and_then(|found| found.ok_or_else(|| DomainError::not_found("Skill", "id", id)))
            .context("getting skill by id")
    }

    pub async fn get_all(&self, page: PaginationParams) -> DomainResult<Vec<Skill>> {
        self.skills
            .find_all(Some(page))
            .await
            .context("listing skills")
    }

    pub async fn update(&self, skill: Skill) -> DomainResult<()> {
        self.skills.update(skill).await.context("updating skill")
    }

    pub async fn delete_by_id(&self, id: Uuid) -> DomainResult<()> {
        self.skills
            .delete_by_id(id)
            .await
            .context("deleting skill by id")
    }
}
