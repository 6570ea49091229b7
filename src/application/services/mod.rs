//! Application services

mod activity_field;
mod company;
mod contact;
mod financial_report;
mod skill;
mod user;
mod user_skill;

pub use activity_field::ActivityFieldService;
pub use company::CompanyService;
pub use contact::ContactService;
pub use financial_report::FinancialReportService;
pub use skill::SkillService;
pub use user::UserService;
pub use user_skill::UserSkillService;
