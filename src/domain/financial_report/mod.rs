//! Financial report aggregate
//!
//! Quarterly revenue/costs of a company, and the period type used to query them.

pub mod model;
pub mod repository;

pub use model::{FinancialReport, FinancialReportByPeriod, Period};
pub use repository::FinancialReportRepository;
