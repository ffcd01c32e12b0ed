mod memory_store;
mod rate_limit;

use crate::PasswordHasher;

/// Minimum Argon2 cost so hashing stays fast under test
pub(crate) fn fast_hasher() -> PasswordHasher {
    PasswordHasher::new(64, 1, 1).unwrap()
}

pub(crate) const TEST_SECRET: &[u8] = b"test-secret-key-at-least-32-bytes";
