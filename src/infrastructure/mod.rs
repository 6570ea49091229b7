//! Infrastructure layer - external concerns

pub mod crypto;
pub mod storage;

pub use crypto::{BcryptHasher, JwtConfig};
pub use storage::InMemoryRepositoryProvider;
