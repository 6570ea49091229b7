//! User domain entity

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Gender codes accepted on registration: "m" (man) and "w" (woman).
pub const KNOWN_GENDERS: [&str; 2] = ["m", "w"];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    #[default]
    User,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::User => "user",
        }
    }

    /// Unknown values fall back to the least privileged role.
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "admin" => Self::Admin,
            _ => Self::User,
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    /// Surname, name and patronymic separated by single spaces
    #[validate(length(min = 1, message = "full name is required"))]
    pub full_name: String,
    pub gender: String,
    #[validate(required(message = "birthday is required"))]
    pub birthday: Option<NaiveDate>,
    #[validate(length(min = 1, message = "city is required"))]
    pub city: String,
    pub role: UserRole,
}

impl User {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            username: username.into(),
            full_name: String::new(),
            gender: String::new(),
            birthday: None,
            city: String::new(),
            role: UserRole::default(),
        }
    }

    pub fn has_known_gender(&self) -> bool {
        KNOWN_GENDERS.contains(&self.gender.as_str())
    }

    /// Words of the full name, split on single spaces.
    pub fn full_name_words(&self) -> usize {
        self.full_name.split(' ').count()
    }
}
