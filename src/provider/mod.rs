pub mod cloudinary;
#[cfg(test)]
pub mod fake;

use async_trait::async_trait;
use crate::error::ProviderError;

const STATUS_OK: &str = "ok";
const STATUS_NOT_FOUND: &str = "not found";

/// Status devolvido pelo provedor ao destruir um asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DestroyStatus {
    Deleted,
    NotFound,
    Other(String),
}

impl DestroyStatus {
    pub fn from_token(token: &str) -> Self {
        match token {
            STATUS_OK => DestroyStatus::Deleted,
            STATUS_NOT_FOUND => DestroyStatus::NotFound,
            other => DestroyStatus::Other(other.to_string()),
        }
    }

    /// Asset removido agora ou que já não existia.
    pub fn is_success(&self) -> bool {
        matches!(self, DestroyStatus::Deleted | DestroyStatus::NotFound)
    }

    pub fn as_str(&self) -> &str {
        match self {
            DestroyStatus::Deleted => STATUS_OK,
            DestroyStatus::NotFound => STATUS_NOT_FOUND,
            DestroyStatus::Other(token) => token,
        }
    }
}

#[async_trait]
pub trait MediaProvider: Send + Sync {
    async fn destroy(&self, public_id: &str) -> Result<DestroyStatus, ProviderError>;
}
