use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Company {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub activity_field_id: Uuid,
    #[validate(length(min = 1, message = "company name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "city is required"))]
    pub city: String,
}

impl Company {
    pub fn new(
        owner_id: Uuid,
        activity_field_id: Uuid,
        name: impl Into<String>,
        city: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            owner_id,
            activity_field_id,
            name: name.into(),
            city: city.into(),
        }
    }
}
