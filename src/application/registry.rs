//! Service wiring
//!
//! Builds every application service from one repository provider and the
//! loaded configuration.

use std::sync::Arc;

use tracing::info;

use super::identity::AuthService;
use super::services::{
    ActivityFieldService, CompanyService, ContactService, FinancialReportService, SkillService,
    UserService, UserSkillService,
};
use crate::config::AppConfig;
use crate::domain::RepositoryProvider;
use crate::infrastructure::crypto::{BcryptHasher, JwtConfig};

pub struct ServiceRegistry {
    pub activity_fields: Arc<ActivityFieldService>,
    pub auth: Arc<AuthService>,
    pub companies: Arc<CompanyService>,
    pub contacts: Arc<ContactService>,
    pub financial_reports: Arc<FinancialReportService>,
    pub skills: Arc<SkillService>,
    pub users: Arc<UserService>,
    pub user_skills: Arc<UserSkillService>,
}

impl ServiceRegistry {
    pub fn new(repos: &dyn RepositoryProvider, config: &AppConfig) -> Self {
        let hasher = Arc::new(BcryptHasher::new(config.security.bcrypt_cost));
        let jwt_config = JwtConfig::from(&config.security);

        let registry = Self {
            activity_fields: Arc::new(ActivityFieldService::new(
                repos.activity_fields(),
                repos.companies(),
            )),
            auth: Arc::new(AuthService::new(repos.auth(), hasher, jwt_config)),
            companies: Arc::new(CompanyService::new(repos.companies())),
            contacts: Arc::new(ContactService::new(repos.contacts())),
            financial_reports: Arc::new(FinancialReportService::new(repos.financial_reports())),
            skills: Arc::new(SkillService::new(repos.skills())),
            users: Arc::new(UserService::new(repos.users())),
            user_skills: Arc::new(UserSkillService::new(
                repos.user_skills(),
                repos.users(),
                repos.skills(),
            )),
        };

        info!(issuer = %config.security.jwt_issuer, "Services initialized");
        registry
    }
}
