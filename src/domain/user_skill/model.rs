use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserSkill {
    pub user_id: Uuid,
    pub skill_id: Uuid,
}

impl UserSkill {
    pub fn new(user_id: Uuid, skill_id: Uuid) -> Self {
        Self { user_id, skill_id }
    }
}
