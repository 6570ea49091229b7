//! # Bizlogic
//!
//! Business-logic service layer for a company/user registry: users and their
//! skills, companies with contacts, activity fields and quarterly financial
//! reports, plus registration and login.
//!
//! ## Architecture
//!
//! - **domain**: Entities, validation rules and repository traits
//! - **application**: Services orchestrating validation and repository calls
//! - **infrastructure**: Password hashing, JWT and in-memory repositories
//! - **shared**: Errors, pagination, clock and validation helpers
//! - **config** / **telemetry**: TOML settings and tracing setup

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod shared;
pub mod telemetry;

pub use application::ServiceRegistry;
pub use config::{default_config_path, AppConfig};
pub use infrastructure::InMemoryRepositoryProvider;
pub use shared::errors::{DomainError, DomainResult};
pub use telemetry::init_tracing;
