use std::sync::OnceLock;

use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;

use crate::jwt::Claims;
use crate::jwt::JwtError;
use crate::jwt::JwtHandler;
use crate::password::PasswordError;
use crate::password::PasswordHasher;

/// Shortest accepted HS256 signing secret, in bytes.
pub const MIN_SECRET_BYTES: usize = 32;

/// Longest accepted token lifetime, in days.
pub const MAX_TOKEN_TTL_DAYS: i64 = 366;

/// Candidate hashed once and verified against when the principal is unknown.
const UNKNOWN_SUBJECT_PASSWORD: &str = "unknown-subject-placeholder";

/// Authentication coordinator combining password verification and JWT generation.
///
/// Owns the signing secret and the token lifetime. Built once at startup and
/// shared read-only between requests.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    jwt_handler: JwtHandler,
    token_ttl: Duration,
    unknown_subject_hash: OnceLock<Option<String>>,
}

/// Result of successful authentication.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticationResult {
    /// JWT access token
    pub access_token: String,

    /// Instant after which the token is refused
    pub expires_at: DateTime<Utc>,
}

/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password error: {0}")]
    PasswordError(#[from] PasswordError),

    #[error("JWT error: {0}")]
    JwtError(#[from] JwtError),
}

/// Rejected signing configuration. Raised at startup only.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    #[error("JWT secret is empty")]
    EmptySecret,

    #[error("JWT secret too short: minimum {min} bytes, got {actual}")]
    SecretTooShort { min: usize, actual: usize },

    #[error("Token lifetime must be positive")]
    NonPositiveTtl,

    #[error("Token lifetime too long: maximum {max_days} days")]
    TtlTooLong { max_days: i64 },
}

impl Authenticator {
    /// Create a new authenticator.
    ///
    /// # Arguments
    /// * `jwt_secret` - Secret key for JWT signing
    /// * `token_ttl` - Lifetime of issued tokens
    ///
    /// # Returns
    /// Configured Authenticator instance
    ///
    /// # Errors
    /// * `EmptySecret` / `SecretTooShort` - Secret unusable for HS256
    /// * `NonPositiveTtl` - Lifetime is zero or negative
    /// * `TtlTooLong` - Lifetime exceeds `MAX_TOKEN_TTL_DAYS`
    pub fn new(jwt_secret: &[u8], token_ttl: Duration) -> Result<Self, ConfigurationError> {
        if jwt_secret.is_empty() {
            return Err(ConfigurationError::EmptySecret);
        }
        if jwt_secret.len() < MIN_SECRET_BYTES {
            return Err(ConfigurationError::SecretTooShort {
                min: MIN_SECRET_BYTES,
                actual: jwt_secret.len(),
            });
        }
        if token_ttl <= Duration::zero() {
            return Err(ConfigurationError::NonPositiveTtl);
        }
        if token_ttl > Duration::days(MAX_TOKEN_TTL_DAYS) {
            return Err(ConfigurationError::TtlTooLong {
                max_days: MAX_TOKEN_TTL_DAYS,
            });
        }

        Ok(Self {
            password_hasher: PasswordHasher::new(),
            jwt_handler: JwtHandler::new(jwt_secret),
            token_ttl,
            unknown_subject_hash: OnceLock::new(),
        })
    }

    /// Lifetime of issued tokens.
    pub fn token_ttl(&self) -> Duration {
        self.token_ttl
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `PasswordError` - Password too long or hashing failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Verify credentials and issue a session token.
    ///
    /// # Arguments
    /// * `password` - Plaintext candidate
    /// * `stored_hash` - Stored password hash
    /// * `subject` - Identifier of the principal owning `stored_hash`
    /// * `now` - Issuance instant
    ///
    /// # Returns
    /// AuthenticationResult with access token
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match (or is too long to match)
    /// * `PasswordError` - Stored hash is malformed
    /// * `JwtError` - Token generation failed
    pub fn authenticate(
        &self,
        password: &str,
        stored_hash: &str,
        subject: i64,
        now: DateTime<Utc>,
    ) -> Result<AuthenticationResult, AuthenticationError> {
        let is_valid = match self.password_hasher.verify(password, stored_hash) {
            Ok(is_valid) => is_valid,
            Err(PasswordError::TooLong { .. }) => false,
            Err(e) => return Err(e.into()),
        };

        if !is_valid {
            return Err(AuthenticationError::InvalidCredentials);
        }

        Ok(self.issue_token(subject, now)?)
    }

    /// Reject a sign-in for a principal that does not exist.
    ///
    /// Runs one password verification against a placeholder hash so the
    /// rejection costs the same as a wrong password.
    pub fn reject_unknown_subject(&self, password: &str) -> AuthenticationError {
        let placeholder = self
            .unknown_subject_hash
            .get_or_init(|| self.password_hasher.hash(UNKNOWN_SUBJECT_PASSWORD).ok());

        if let Some(hash) = placeholder {
            let _ = self.password_hasher.verify(password, hash);
        }

        AuthenticationError::InvalidCredentials
    }

    /// Issue a token without password verification.
    ///
    /// # Errors
    /// * `EncodingFailed` - Expiry not representable or signing failed
    pub fn issue_token(
        &self,
        subject: i64,
        now: DateTime<Utc>,
    ) -> Result<AuthenticationResult, JwtError> {
        let claims = Claims::for_subject(subject, now, self.token_ttl)?;
        let access_token = self.jwt_handler.encode(&claims)?;

        let expires_at = now
            .checked_add_signed(self.token_ttl)
            .ok_or_else(|| JwtError::EncodingFailed("token expiry out of range".to_string()))?;

        Ok(AuthenticationResult {
            access_token,
            expires_at,
        })
    }

    /// Validate a token at instant `now` and return its claims.
    ///
    /// # Errors
    /// * `DecodingFailed` - Malformed token or bad signature
    /// * `TokenExpired` - `now` is at or past `exp`
    pub fn validate_token(&self, token: &str, now: DateTime<Utc>) -> Result<Claims, JwtError> {
        let claims: Claims = self.jwt_handler.decode(token)?;

        if claims.is_expired(now.timestamp()) {
            return Err(JwtError::TokenExpired);
        }

        Ok(claims)
    }

    /// Validate a token and resolve the numeric subject it was issued for.
    ///
    /// # Errors
    /// * Any `validate_token` error
    /// * `InvalidSubject` - Subject is not an integer identifier
    pub fn authorize(&self, token: &str, now: DateTime<Utc>) -> Result<i64, JwtError> {
        self.validate_token(token, now)?.subject_id()
    }
}
