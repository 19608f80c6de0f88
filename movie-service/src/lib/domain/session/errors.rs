use thiserror::Error;

use crate::domain::user::models::UserId;
use crate::user::errors::UserError;

/// Errors raised while opening a session or resolving its identity.
#[derive(Debug, Clone, Error)]
pub enum SessionError {
    /// Unknown email or wrong password. Both cases share this variant.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// A valid token names a user that no longer exists.
    #[error("Authenticated user not found: {0}")]
    IdentityNotFound(UserId),

    #[error("Token issuance failed: {0}")]
    TokenIssuance(String),

    #[error("Password verification failed: {0}")]
    PasswordVerification(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<UserError> for SessionError {
    fn from(err: UserError) -> Self {
        SessionError::DatabaseError(err.to_string())
    }
}
