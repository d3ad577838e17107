//! One-way password hashing behind a trait so tests can swap the cost

use async_trait::async_trait;
use tracing::warn;

use crate::errors::DomainError;

#[async_trait]
pub trait PasswordHasher: Send + Sync {
    /// Salted one-way hash of `plaintext`
    async fn hash(&self, plaintext: &str) -> Result<String, DomainError>;

    /// Whether `plaintext` matches `hash`; a malformed hash never matches
    async fn verify(&self, plaintext: &str, hash: &str) -> Result<bool, DomainError>;
}

/// bcrypt hasher; work runs on the blocking thread pool
#[derive(Debug, Clone, Copy)]
pub struct BcryptPasswordHasher {
    cost: u32,
}

impl BcryptPasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }
}

impl Default for BcryptPasswordHasher {
    fn default() -> Self {
        Self::new(bcrypt::DEFAULT_COST)
    }
}

#[async_trait]
impl PasswordHasher for BcryptPasswordHasher {
    async fn hash(&self, plaintext: &str) -> Result<String, DomainError> {
        let plaintext = plaintext.to_owned();
        let cost = self.cost;
        tokio::task::spawn_blocking(move || bcrypt::hash(plaintext, cost))
            .await
            .map_err(|e| DomainError::internal(format!("hashing task failed: {}", e)))?
            .map_err(|e| DomainError::internal(format!("failed to hash password: {}", e)))
    }

    async fn verify(&self, plaintext: &str, hash: &str) -> Result<bool, DomainError> {
        let plaintext = plaintext.to_owned();
        let hash = hash.to_owned();
        let outcome = tokio::task::spawn_blocking(move || bcrypt::verify(plaintext, &hash))
            .await
            .map_err(|e| DomainError::internal(format!("verification task failed: {}", e)))?;

        match outcome {
            Ok(matches) => Ok(matches),
            Err(e) => {
                warn!(error = %e, "Stored password hash could not be parsed");
                Ok(false)
            }
        }
    }
}
