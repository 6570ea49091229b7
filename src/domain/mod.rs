//! Domain layer
//!
//! One module per aggregate (entity + repository port), plus the
//! `RepositoryProvider` that bundles every port.

pub mod activity_field;
pub mod auth;
pub mod company;
pub mod contact;
pub mod financial_report;
pub mod repositories;
pub mod skill;
pub mod user;
pub mod user_skill;

// Re-export commonly used types
pub use activity_field::{ActivityField, ActivityFieldRepository};
pub use auth::{AuthRepository, Credentials, PasswordHasher, UserAuth};
pub use company::{Company, CompanyRepository};
pub use contact::{Contact, ContactRepository};
pub use financial_report::{
    FinancialReport, FinancialReportByPeriod, FinancialReportRepository, Period,
};
pub use repositories::{DomainResult, RepositoryProvider};
pub use skill::{Skill, SkillRepository};
pub use user::{User, UserRepository, UserRole};
pub use user_skill::{UserSkill, UserSkillRepository};

// Re-export DomainError from shared for convenience
pub use crate::shared::errors::DomainError;
