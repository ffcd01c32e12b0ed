use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_ARGON2_ITERATIONS, DEFAULT_ARGON2_MEMORY_KIB,
    DEFAULT_ARGON2_PARALLELISM, MAX_ARGON2_PARALLELISM, MIN_ARGON2_MEMORY_KIB,
};

use serde::Deserialize;

/// Argon2id cost parameters for newly hashed passwords
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PasswordConfig {
    pub memory_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
}

impl Default for PasswordConfig {
    fn default() -> Self {
        Self {
            memory_kib: DEFAULT_ARGON2_MEMORY_KIB,
            iterations: DEFAULT_ARGON2_ITERATIONS,
            parallelism: DEFAULT_ARGON2_PARALLELISM,
        }
    }
}

impl PasswordConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.parallelism == 0 || self.parallelism > MAX_ARGON2_PARALLELISM {
            return Err(ConfigError::password(format!(
                "password.parallelism must be 1-{}, got {}",
                MAX_ARGON2_PARALLELISM, self.parallelism
            )));
        }

        if self.iterations == 0 {
            return Err(ConfigError::password("password.iterations must be >= 1"));
        }

        let min_memory = MIN_ARGON2_MEMORY_KIB * self.parallelism;
        if self.memory_kib < min_memory {
            return Err(ConfigError::password(format!(
                "password.memory_kib must be >= {} for parallelism {}, got {}",
                min_memory, self.parallelism, self.memory_kib
            )));
        }

        Ok(())
    }
}
