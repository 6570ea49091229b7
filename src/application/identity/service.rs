//! Authentication service — registration and login
//!
//! Passwords are hashed through the [`PasswordHasher`] port; a successful
//! login yields a signed JWT.

use std::sync::Arc;

use tracing::info;

use crate::domain::{
    AuthRepository, Credentials, DomainError, DomainResult, PasswordHasher, UserAuth,
};
use crate::infrastructure::crypto::jwt::{create_token, JwtConfig};
use crate::shared::errors::ResultExt;
use crate::shared::validate_fields;

pub struct AuthService {
    auth: Arc<dyn AuthRepository>,
    hasher: Arc<dyn PasswordHasher>,
    jwt_config: JwtConfig,
}

impl AuthService {
    pub fn new(
        auth: Arc<dyn AuthRepository>,
        hasher: Arc<dyn PasswordHasher>,
        jwt_config: JwtConfig,
    ) -> Self {
        Self {
            auth,
            hasher,
            jwt_config,
        }
    }

    // ── Registration ────────────────────────────────────────────

    /// Store credentials for a new account (role: user).
    pub async fn register(&self, credentials: &Credentials) -> DomainResult<UserAuth> {
        validate_fields(credentials)?;

        let hash = self
            .hasher
            .hash(&credentials.password)
            .context("hashing password")?;

        let record = UserAuth::new(credentials.username.as_str(), hash);
        self.auth
            .register(record.clone())
            .await
            .context("registering user")?;

        info!(username = %record.username, role = %record.role, "User registered");
        Ok(record)
    }

    // ── Authentication ──────────────────────────────────────────

    /// Check the password and return a signed token.
    pub async fn login(&self, credentials: &Credentials) -> DomainResult<String> {
        validate_fields(credentials)?;

        let username = credentials.username.as_str();
        let record = self
            .auth
            .find_by_username(username)
            .await
            .and_then(|found| {
                found.ok_or_else(|| DomainError::not_found("User", "username", username))
            })
            .context("getting user by username")?;

        if !self.hasher.verify(&credentials.password, &record.password_hash) {
            info!(username, "Login rejected");
            return Err(DomainError::Unauthorized("invalid password".into()));
        }

        let token = create_token(&record.username, record.role, &self.jwt_config)
            .map_err(|e| DomainError::Crypto(e.to_string()))
            .context("generating token")?;

        info!(username, "User logged in");
        Ok(token)
    }
}
