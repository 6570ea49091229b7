//! Storage adapters

pub mod memory;

pub use memory::{
    InMemoryActivityFieldRepository, InMemoryAuthRepository, InMemoryCompanyRepository,
    InMemoryContactRepository, InMemoryFinancialReportRepository, InMemoryRepositoryProvider,
    InMemorySkillRepository, InMemoryUserRepository, InMemoryUserSkillRepository,
};
