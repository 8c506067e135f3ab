//! Session-level error model.

use thiserror::Error;

use storefront_core::DomainError;
use storefront_infra::{CodecError, StoreError};

pub type StorefrontResult<T> = Result<T, StorefrontError>;

#[derive(Debug, Error)]
pub enum StorefrontError {
    /// Rejected by a domain rule (validation, duplicate cart item, unknown id).
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The durable store failed to read or write.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// A stored document could not be encoded or decoded.
    #[error(transparent)]
    Codec(#[from] CodecError),

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl StorefrontError {
    pub fn is_validation(&self) -> bool {
        matches!(self, StorefrontError::Domain(DomainError::Validation(_)))
    }

    pub fn is_duplicate(&self) -> bool {
        matches!(self, StorefrontError::Domain(DomainError::DuplicateItem(_)))
    }
}
