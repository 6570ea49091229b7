//! Repository traits for the domain layer
//!
//! Contains:
//! - `RepositoryProvider` — unified access to all per-aggregate repositories
//! - `DomainResult` — standard result type for domain operations

use std::sync::Arc;

use super::activity_field::ActivityFieldRepository;
use super::auth::AuthRepository;
use super::company::CompanyRepository;
use super::contact::ContactRepository;
use super::financial_report::FinancialReportRepository;
use super::skill::SkillRepository;
use super::user::UserRepository;
use super::user_skill::UserSkillRepository;

pub use crate::shared::errors::DomainResult;

// ── RepositoryProvider ──────────────────────────────────────────

/// Provides access to all domain repositories.
///
/// Services keep their own handle, so accessors hand out `Arc`s:
///
/// ```ignore
/// let companies = CompanyService::new(repos.companies());
/// let cost = ActivityFieldService::new(repos.activity_fields(), repos.companies());
/// ```
pub trait RepositoryProvider: Send + Sync {
    fn users(&self) -> Arc<dyn UserRepository>;
    fn auth(&self) -> Arc<dyn AuthRepository>;
    fn companies(&self) -> Arc<dyn CompanyRepository>;
    fn activity_fields(&self) -> Arc<dyn ActivityFieldRepository>;
    fn contacts(&self) -> Arc<dyn ContactRepository>;
    fn financial_reports(&self) -> Arc<dyn FinancialReportRepository>;
    fn skills(&self) -> Arc<dyn SkillRepository>;
    fn user_skills(&self) -> Arc<dyn UserSkillRepository>;
}
