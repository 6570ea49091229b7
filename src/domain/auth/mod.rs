//! Authentication aggregate
//!
//! Stored credentials, login input and the ports the auth service talks to.

pub mod model;
pub mod repository;

pub use model::{Credentials, UserAuth};
pub use repository::{AuthRepository, PasswordHasher};
