//! User–skill service
//!
//! Links users to skills and resolves the links into full entities.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use crate::domain::{
    DomainError, DomainResult, Skill, SkillRepository, User, UserRepository, UserSkill,
    UserSkillRepository,
};
use crate::shared::errors::ResultExt;
use crate::shared::PaginationParams;

pub struct UserSkillService {
    pairs: Arc<dyn UserSkillRepository>,
    users: Arc<dyn UserRepository>,
    skills: Arc<dyn SkillRepository>,
}

impl UserSkillService {
    pub fn new(
        pairs: Arc<dyn UserSkillRepository>,
        users: Arc<dyn UserRepository>,
        skills: Arc<dyn SkillRepository>,
    ) -> Self {
        Self {
            pairs,
            users,
            skills,
        }
    }

    pub async fn create(&self, pair: UserSkill) -> DomainResult<()> {
        self.pairs
            .create(pair)
            .await
            .context("linking user and skill")?;

        info!(user_id = %pair.user_id, skill_id = %pair.skill_id, "Skill linked to user");
        Ok(())
    }

    pub async fn delete(&self, pair: UserSkill) -> DomainResult<()> {
        self.pairs
            .delete(pair)
            .await
            .context("unlinking user and skill")
    }

    pub async fn get_skills_for_user(
        &self,
        user_id: Uuid,
        page: PaginationParams,
    ) -> DomainResult<Vec<Skill>> {
        let pairs = self
            .pairs
            .find_by_user_id(user_id, Some(page))
            .await
            .context("getting user-skill pairs by user id")?;

        let mut skills = Vec::with_capacity(pairs.len());
        for pair in pairs {
            let skill = self
                .skills
                .find_by_id(pair.skill_id)
                .await
                .and_then(|found| {
                    found.ok_or_else(|| DomainError::not_found("Skill", "id", pair.skill_id))
                })
                .context("getting skill by id")?;
            skills.push(skill);
        }

        Ok(skills)
    }

    pub async fn get_users_for_skill(
        &self,
        skill_id: Uuid,
        page: PaginationParams,
    ) -> DomainResult<Vec<User>> {
        let pairs = self
            .pairs
            .find_by_skill_id(skill_id, Some(page))
            .await
            .context("getting user-skill pairs by skill id")?;

        let mut users = Vec::with_capacity(pairs.len());
        for pair in pairs {
            let user = self
                .users
                .find_by_id(pair.user_id)
                .await
                .and_then(|found| {
                    found.ok_or_else(|| DomainError::not_found("User", "id", pair.user_id))
                })
                .context("getting user by id")?;
            users.push(user);
        }

        Ok(users)
    }

    /// Unlink every skill of the user. Stops at the first failed delete.
    pub async fn delete_skills_for_user(&self, user_id: Uuid) -> DomainResult<()> {
        let pairs = self
            .pairs
            .find_by_user_id(user_id, None)
            .await
            .context("getting user-skill pairs by user id")?;

        let count = pairs.len();
        for pair in pairs {
            self.pairs
                .delete(pair)
                .await
                .context("deleting user-skill pair")?;
        }

        info!(user_id = %user_id, count, "Skills unlinked from user");
        Ok(())
    }
}
