//! Activity field aggregate
//!
//! A business sector a company works in. Its `cost` is a weight used when
//! comparing companies across sectors.

pub mod model;
pub mod repository;

pub use model::ActivityField;
pub use repository::ActivityFieldRepository;
