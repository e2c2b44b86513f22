//! Authentication ports: password hashing and session tokens.

use crate::domain::Identity;

/// Claims carried by a session token.
#[derive(Debug, Clone)]
pub struct SessionClaims {
    pub identity: Identity,
    pub exp: i64,
}

/// Issues and validates the token that keeps a user logged in between
/// requests.
pub trait SessionService: Send + Sync {
    /// Issue a session token for the identity.
    fn issue(&self, identity: &Identity) -> Result<String, AuthError>;

    /// Validate and decode a session token.
    fn validate(&self, token: &str) -> Result<SessionClaims, AuthError>;

    /// Lifetime of an issued token.
    fn lifetime_seconds(&self) -> i64;
}

/// Password hashing service.
pub trait PasswordService: Send + Sync {
    /// Hash a plain text password.
    fn hash(&self, password: &str) -> Result<String, AuthError>;

    /// Verify a password against a hash.
    fn verify(&self, password: &str, hash: &str) -> Result<bool, AuthError>;
}

/// Authentication errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Session expired")]
    SessionExpired,

    #[error("Invalid session: {0}")]
    InvalidSession(String),

    #[error("Hashing error: {0}")]
    HashingError(String),
}
