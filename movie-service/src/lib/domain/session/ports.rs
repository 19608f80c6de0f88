use async_trait::async_trait;

use crate::domain::session::errors::SessionError;
use crate::domain::session::models::SessionToken;
use crate::domain::session::models::SignInCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;

/// Port for session operations.
#[async_trait]
pub trait SessionServicePort: Send + Sync + 'static {
    /// Verify credentials and issue a signed session token.
    ///
    /// # Arguments
    /// * `command` - Email and plaintext password
    ///
    /// # Returns
    /// Session token whose subject is the user's identifier
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown email or wrong password
    /// * `PasswordVerification` - Stored hash is unreadable
    /// * `TokenIssuance` - Token signing failed
    /// * `DatabaseError` - Credential lookup failed
    async fn sign_in(&self, command: SignInCommand) -> Result<SessionToken, SessionError>;

    /// Resolve the user behind an authenticated request.
    ///
    /// # Errors
    /// * `IdentityNotFound` - The user was deleted after the token was issued
    /// * `DatabaseError` - Lookup failed
    async fn user_info(&self, user_id: &UserId) -> Result<User, SessionError>;
}
