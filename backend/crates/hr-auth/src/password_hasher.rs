use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;
use std::sync::Arc;

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{
    PasswordHash, PasswordHasher as _, PasswordVerifier as _, SaltString,
};
use argon2::{Algorithm, Argon2, Params, Version};
use error_location::ErrorLocation;

const DUMMY_PASSWORD: &str = "timing-equalization-placeholder";

/// Argon2id password hashing with self-describing PHC strings.
///
/// Stored hashes carry their own salt and cost parameters, so verification
/// keeps working after the configured cost changes. `needs_rehash` reports
/// hashes produced under older parameters.
#[derive(Clone)]
pub struct PasswordHasher {
    params: Params,
    dummy_hash: Arc<str>,
}

impl PasswordHasher {
    #[track_caller]
    pub fn new(memory_kib: u32, iterations: u32, parallelism: u32) -> AuthErrorResult<Self> {
        let params = Params::new(memory_kib, iterations, parallelism, None).map_err(|e| {
            AuthError::InvalidConfiguration {
                message: format!("invalid Argon2 parameters: {e}"),
                location: ErrorLocation::from(Location::caller()),
            }
        })?;

        let mut hasher = Self {
            params,
            dummy_hash: Arc::from(""),
        };
        hasher.dummy_hash = Arc::from(hasher.hash(DUMMY_PASSWORD)?);

        Ok(hasher)
    }

    fn argon2(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }

    #[track_caller]
    pub fn hash(&self, plaintext: &str) -> AuthErrorResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        self.argon2()
            .hash_password(plaintext.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| AuthError::HashingFailure {
                message: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })
    }

    /// Fails closed: an unparseable hash is a mismatch
    pub fn verify(&self, hash: &str, plaintext: &str) -> bool {
        let Ok(parsed) = PasswordHash::new(hash) else {
            return false;
        };

        self.argon2()
            .verify_password(plaintext.as_bytes(), &parsed)
            .is_ok()
    }

    /// Spend one verification against a throwaway hash so unknown identifiers
    /// cost the same as wrong passwords
    pub fn verify_dummy(&self, plaintext: &str) {
        let _ = self.verify(&self.dummy_hash, plaintext);
    }

    pub fn needs_rehash(&self, hash: &str) -> bool {
        let Ok(parsed) = PasswordHash::new(hash) else {
            return true;
        };
        if parsed.algorithm != Algorithm::Argon2id.ident() {
            return true;
        }

        match Params::try_from(&parsed) {
            Ok(stored) => {
                stored.m_cost() != self.params.m_cost()
                    || stored.t_cost() != self.params.t_cost()
                    || stored.p_cost() != self.params.p_cost()
            }
            Err(_) => true,
        }
    }
}
