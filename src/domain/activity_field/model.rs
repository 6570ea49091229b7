use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Costs closer to zero than this are treated as zero.
pub const COST_EPSILON: f64 = 1e-7;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct ActivityField {
    pub id: Uuid,
    #[validate(length(min = 1, message = "activity field name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "activity field description is required"))]
    pub description: String,
    pub cost: f64,
}

impl ActivityField {
    pub fn new(name: impl Into<String>, description: impl Into<String>, cost: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            description: description.into(),
            cost,
        }
    }

    pub fn has_zero_cost(&self) -> bool {
        self.cost.abs() < COST_EPSILON
    }
}
