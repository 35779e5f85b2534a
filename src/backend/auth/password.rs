/**
 * Password Hashing
 *
 * One-way bcrypt hashing of user passwords. Each hash embeds its own random
 * salt and cost, so hashing the same password twice yields two different
 * strings that both verify.
 *
 * Both operations are CPU-bound; async callers should run them
 * through `tokio::task::spawn_blocking`.
 */

use bcrypt::{hash, verify, BcryptError, DEFAULT_COST};

/// bcrypt hasher with a fixed cost factor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    /// Lowest cost bcrypt accepts
    pub const MIN_COST: u32 = 4;
    /// Highest cost bcrypt accepts
    pub const MAX_COST: u32 = 31;

    /// Create a hasher with the given cost (`MIN_COST..=MAX_COST`)
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// Cost factor used for new hashes
    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Hash a plaintext password
    pub fn hash(&self, password: &str) -> Result<String, BcryptError> {
        hash(password, self.cost)
    }

    /// Check a plaintext password against a stored hash
    ///
    /// A hash that cannot be parsed counts as a mismatch.
    pub fn verify(&self, password: &str, hash: &str) -> bool {
        match verify(password, hash) {
            Ok(valid) => valid,
            Err(e) => {
                tracing::warn!("Stored password hash could not be verified: {:?}", e);
                false
            }
        }
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new(DEFAULT_COST)
    }
}
