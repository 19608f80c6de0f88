use std::sync::Arc;

use async_trait::async_trait;
use auth::AuthenticationError;
use auth::Authenticator;
use chrono::Utc;

use crate::domain::session::errors::SessionError;
use crate::domain::session::models::SessionToken;
use crate::domain::session::models::SignInCommand;
use crate::domain::session::ports::SessionServicePort;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::user::ports::UserRepository;

/// Sign-in flow: credential lookup, password verification, token issuance.
pub struct SessionService<UR>
where
    UR: UserRepository,
{
    users: Arc<UR>,
    authenticator: Arc<Authenticator>,
}

impl<UR> SessionService<UR>
where
    UR: UserRepository,
{
    /// Create a new session service.
    ///
    /// # Arguments
    /// * `users` - Credential store
    /// * `authenticator` - Password verifier and token issuer configured at startup
    pub fn new(users: Arc<UR>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            users,
            authenticator,
        }
    }
}

#[async_trait]
impl<UR> SessionServicePort for SessionService<UR>
where
    UR: UserRepository,
{
    async fn sign_in(&self, command: SignInCommand) -> Result<SessionToken, SessionError> {
        let user = match self.users.find_by_email(command.email.trim()).await? {
            Some(user) => user,
            None => {
                tracing::debug!("Sign-in rejected: unknown email");
                self.authenticator.reject_unknown_subject(&command.password);
                return Err(SessionError::InvalidCredentials);
            }
        };

        let result = self
            .authenticator
            .authenticate(&command.password, &user.password_hash, user.id.0, Utc::now())
            .map_err(|e| match e {
                AuthenticationError::InvalidCredentials => {
                    tracing::debug!(user_id = %user.id, "Sign-in rejected: wrong password");
                    SessionError::InvalidCredentials
                }
                AuthenticationError::PasswordError(err) => {
                    SessionError::PasswordVerification(err.to_string())
                }
                AuthenticationError::JwtError(err) => SessionError::TokenIssuance(err.to_string()),
            })?;

        tracing::info!(user_id = %user.id, "Session token issued");

        Ok(SessionToken {
            token: result.access_token,
            expires_at: result.expires_at,
        })
    }

    async fn user_info(&self, user_id: &UserId) -> Result<User, SessionError> {
        self.users
            .find_by_id(user_id)
            .await?
            .ok_or(SessionError::IdentityNotFound(*user_id))
    }
}
