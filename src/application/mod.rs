pub mod identity;
pub mod registry;
pub mod services;

// Re-export key types for convenience
pub use identity::AuthService;
pub use registry::ServiceRegistry;
pub use services::{
    ActivityFieldService, CompanyService, ContactService, FinancialReportService, SkillService,
    UserService, UserSkillService,
};
