//! Authentication utilities library
//!
//! Provides the authentication infrastructure of the movie service:
//! - Password hashing (Argon2id) and verification (Argon2id, legacy bcrypt)
//! - Session claims and JWT token signing/validation (HS256)
//! - Authentication coordination with a validated signing configuration
//!
//! Tokens are stateless: a token is valid iff its signature verifies under
//! the configured secret and the validation instant is before `exp`.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! let is_valid = hasher.verify("my_password", &hash).unwrap();
//! assert!(is_valid);
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use auth::Authenticator;
//! use chrono::{Duration, Utc};
//!
//! let auth = Authenticator::new(b"secret_key_at_least_32_bytes_long!", Duration::hours(1)).unwrap();
//!
//! // Register: hash password
//! let hash = auth.hash_password("password123").unwrap();
//!
//! // Sign in: verify and issue token
//! let now = Utc::now();
//! let result = auth.authenticate("password123", &hash, 42, now).unwrap();
//!
//! // Gate: validate token and resolve the subject
//! let user_id = auth.authorize(&result.access_token, now).unwrap();
//! assert_eq!(user_id, 42);
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use authenticator::ConfigurationError;
pub use authenticator::MAX_TOKEN_TTL_DAYS;
pub use authenticator::MIN_SECRET_BYTES;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use password::MAX_PASSWORD_BYTES;
