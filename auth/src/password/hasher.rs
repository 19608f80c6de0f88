use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::PasswordHash;
use argon2::password_hash::PasswordHasher as Argon2PasswordHasher;
use argon2::password_hash::PasswordVerifier;
use argon2::password_hash::SaltString;
use argon2::Argon2;

use super::errors::PasswordError;

/// Longest accepted password, in bytes.
///
/// Matches the bcrypt input limit so legacy and new hashes accept the same
/// inputs. Longer passwords are rejected, never truncated.
pub const MAX_PASSWORD_BYTES: usize = 72;

/// Prefixes of the bcrypt modular crypt format.
const BCRYPT_PREFIXES: [&str; 4] = ["$2a$", "$2b$", "$2x$", "$2y$"];

/// Password hashing implementation.
///
/// New hashes are Argon2id PHC strings. Verification also accepts bcrypt
/// hashes written by the previous generation of the user store.
pub struct PasswordHasher;

impl PasswordHasher {
    /// Create a new password hasher instance.
    ///
    /// # Returns
    /// PasswordHasher instance configured with secure defaults
    pub fn new() -> Self {
        Self
    }

    /// Hash a plaintext password securely.
    ///
    /// Uses Argon2id with random salt generation.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to hash
    ///
    /// # Returns
    /// PHC string format hash (includes algorithm, parameters, salt, and hash)
    ///
    /// # Errors
    /// * `TooLong` - Password exceeds `MAX_PASSWORD_BYTES`
    /// * `HashingFailed` - Password hashing operation failed
    pub fn hash(&self, password: &str) -> Result<String, PasswordError> {
        check_length(password)?;

        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();

        argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| PasswordError::HashingFailed(e.to_string()))
    }

    /// Verify a password against a stored hash.
    ///
    /// The comparison is constant-time in both backends.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `hash` - Stored password hash (Argon2 PHC string or bcrypt)
    ///
    /// # Returns
    /// True if password matches, false otherwise
    ///
    /// # Errors
    /// * `TooLong` - Candidate exceeds `MAX_PASSWORD_BYTES`
    /// * `VerificationFailed` - Stored hash is malformed
    pub fn verify(&self, password: &str, hash: &str) -> Result<bool, PasswordError> {
        check_length(password)?;

        if is_bcrypt(hash) {
            return bcrypt::verify(password, hash).map_err(|_| {
                PasswordError::VerificationFailed("Invalid bcrypt hash".to_string())
            });
        }

        let parsed_hash = PasswordHash::new(hash).map_err(|e| {
            PasswordError::VerificationFailed(format!("Invalid password hash: {}", e))
        })?;

        let argon2 = Argon2::default();

        Ok(argon2
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

fn check_length(password: &str) -> Result<(), PasswordError> {
    let actual = password.len();
    if actual > MAX_PASSWORD_BYTES {
        Err(PasswordError::TooLong {
            max: MAX_PASSWORD_BYTES,
            actual,
        })
    } else {
        Ok(())
    }
}

fn is_bcrypt(hash: &str) -> bool {
    BCRYPT_PREFIXES.iter().any(|prefix| hash.starts_with(prefix))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hasher = PasswordHasher::new();
        let password = "my_secure_password";

        let hash = hasher.hash(password).expect("Failed to hash password");
        assert!(hash.starts_with("$argon2id$"));

        assert!(hasher
            .verify(password, &hash)
            .expect("Failed to verify password"));

        assert!(!hasher
            .verify("wrong_password", &hash)
            .expect("Failed to verify password"));
    }

    #[test]
    fn test_single_character_mutations_are_rejected() {
        let hasher = PasswordHasher::new();
        let password = "s3cret!";
        let hash = hasher.hash(password).expect("Failed to hash password");

        let mutations = [
            "S3cret!", "s4cret!", "s3cret?", "s3cre!", "s3cret!!", "xs3cret!",
        ];
        for candidate in mutations {
            assert!(
                !hasher.verify(candidate, &hash).unwrap(),
                "mutation {candidate:?} must not verify"
            );
        }
        assert!(hasher.verify(password, &hash).unwrap());
    }

    #[test]
    fn test_salt_makes_hashes_unique() {
        let hasher = PasswordHasher::new();
        let first = hasher.hash("password").unwrap();
        let second = hasher.hash("password").unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_verify_invalid_hash() {
        let hasher = PasswordHasher::new();
        let result = hasher.verify("password", "invalid_hash");
        assert!(matches!(result, Err(PasswordError::VerificationFailed(_))));
    }

    #[test]
    fn test_verification_error_does_not_echo_inputs() {
        let hasher = PasswordHasher::new();
        let err = hasher
            .verify("hunter2", "$2b$not-a-real-hash")
            .unwrap_err();
        let message = err.to_string();
        assert!(!message.contains("hunter2"));
        assert!(!message.contains("not-a-real-hash"));
    }

    #[test]
    fn test_overlong_password_is_rejected() {
        let hasher = PasswordHasher::new();
        let at_limit = "a".repeat(MAX_PASSWORD_BYTES);
        let over_limit = "a".repeat(MAX_PASSWORD_BYTES + 1);

        let hash = hasher.hash(&at_limit).expect("Limit-length password hashes");
        assert!(hasher.verify(&at_limit, &hash).unwrap());

        assert_eq!(
            hasher.hash(&over_limit),
            Err(PasswordError::TooLong {
                max: MAX_PASSWORD_BYTES,
                actual: MAX_PASSWORD_BYTES + 1,
            })
        );
        assert!(matches!(
            hasher.verify(&over_limit, &hash),
            Err(PasswordError::TooLong { .. })
        ));
    }

    #[test]
    fn test_verify_legacy_bcrypt_hash() {
        let hasher = PasswordHasher::new();
        let legacy = bcrypt::hash("legacy_password", 4).expect("bcrypt hash");

        assert!(hasher.verify("legacy_password", &legacy).unwrap());
        assert!(!hasher.verify("legacy_passworD", &legacy).unwrap());
    }
}
