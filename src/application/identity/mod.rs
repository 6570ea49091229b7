//! Identity module — registration & authentication
//!
//! Contains the `AuthService`: credentials storage, password checks and
//! token issuing.

pub mod service;

pub use service::AuthService;
