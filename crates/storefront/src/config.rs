//! Session configuration.

use std::path::PathBuf;

use crate::error::StorefrontError;

pub const DEFAULT_PRODUCTS_KEY: &str = "products";
pub const DEFAULT_CART_KEY: &str = "cart";

pub const ENV_DATA_DIR: &str = "STOREFRONT_DATA_DIR";
pub const ENV_ON_CORRUPT: &str = "STOREFRONT_ON_CORRUPT";

/// What to do when a stored list cannot be read or decoded at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CorruptDataPolicy {
    /// Log a warning and start from the seed catalog / an empty cart.
    #[default]
    Fallback,
    /// Refuse to start; the error is returned to the caller.
    Fail,
}

impl core::str::FromStr for CorruptDataPolicy {
    type Err = StorefrontError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fallback" => Ok(CorruptDataPolicy::Fallback),
            "fail" => Ok(CorruptDataPolicy::Fail),
            other => Err(StorefrontError::Config(format!(
                "{ENV_ON_CORRUPT} must be `fallback` or `fail`, got {other:?}"
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorefrontConfig {
    /// Store key holding the catalog.
    pub products_key: String,
    /// Store key holding the cart.
    pub cart_key: String,
    pub on_corrupt: CorruptDataPolicy,
    /// Directory for file-backed stores; `None` means the OS app-data dir.
    pub data_dir: Option<PathBuf>,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            products_key: DEFAULT_PRODUCTS_KEY.to_string(),
            cart_key: DEFAULT_CART_KEY.to_string(),
            on_corrupt: CorruptDataPolicy::default(),
            data_dir: None,
        }
    }
}

impl StorefrontConfig {
    /// Defaults overridden by `STOREFRONT_DATA_DIR` and `STOREFRONT_ON_CORRUPT`.
    pub fn from_env() -> Result<Self, StorefrontError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Like `from_env`, reading variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, StorefrontError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(dir) = lookup(ENV_DATA_DIR).filter(|d| !d.is_empty()) {
            config.data_dir = Some(PathBuf::from(dir));
        }
        if let Some(policy) = lookup(ENV_ON_CORRUPT) {
            config.on_corrupt = policy.parse()?;
        }
        config.validate()?;
        Ok(config)
    }

    /// The two containers must never share a key.
    pub fn validate(&self) -> Result<(), StorefrontError> {
        if self.products_key.is_empty() || self.cart_key.is_empty() {
            return Err(StorefrontError::Config("store keys cannot be empty".into()));
        }
        if self.products_key == self.cart_key {
            return Err(StorefrontError::Config(format!(
                "catalog and cart cannot share the store key {:?}",
                self.cart_key
            )));
        }
        Ok(())
    }
}
