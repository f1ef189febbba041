use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HashError {
    #[error("Password hashing failed")]
    HashFailed,

    #[error("Stored password hash is malformed")]
    MalformedHash,

    #[error("Background task failed")]
    TaskFailed,
}

#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash_password(&self, password: &str) -> Result<String, HashError>;

    /// `Ok(false)` for a wrong password, `Err` only when the hash itself is unusable.
    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError>;
}
