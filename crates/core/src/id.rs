//! Strongly-typed identifiers used across the domain.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Identifier of a product.
///
/// Serialized as a bare JSON number so stored catalogs stay compatible with the
/// millisecond-timestamp ids older sessions wrote.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(u64);

impl ProductId {
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub const fn get(self) -> u64 {
        self.0
    }

    /// The smallest identifier strictly greater than `self`.
    pub fn successor(self) -> Result<Self, DomainError> {
        self.0
            .checked_add(1)
            .map(Self)
            .ok_or_else(|| DomainError::invariant("product id space exhausted"))
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<u64> for ProductId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<ProductId> for u64 {
    fn from(value: ProductId) -> Self {
        value.0
    }
}

impl FromStr for ProductId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = u64::from_str(s.trim())
            .map_err(|e| DomainError::invalid_id(format!("ProductId: {e}")))?;
        Ok(Self(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_bare_number() {
        let json = serde_json::to_string(&ProductId::new(1_700_000_000_123)).unwrap();
        assert_eq!(json, "1700000000123");

        let back: ProductId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ProductId::new(1_700_000_000_123));
    }

    #[test]
    fn parses_from_trimmed_text() {
        assert_eq!(" 7 ".parse::<ProductId>().unwrap(), ProductId::new(7));
    }

    #[test]
    fn rejects_non_numeric_text() {
        let err = "seven".parse::<ProductId>().unwrap_err();
        assert!(matches!(err, DomainError::InvalidId(_)));
    }

    #[test]
    fn successor_overflow_is_an_invariant_violation() {
        let err = ProductId::new(u64::MAX).successor().unwrap_err();
        assert!(matches!(err, DomainError::InvariantViolation(_)));
        assert_eq!(ProductId::new(3).successor().unwrap(), ProductId::new(4));
    }
}
