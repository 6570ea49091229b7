use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// A way to reach a user, e.g. name "telegram", value "@ivanov".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Contact {
    pub id: Uuid,
    pub owner_id: Uuid,
    #[validate(length(min = 1, message = "contact name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "contact value is required"))]
    pub value: String,
}

impl Contact {
    pub fn new(owner_id: Uuid, name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            owner_id,
            name: name.into(),
            value: value.into(),
        }
    }
}
