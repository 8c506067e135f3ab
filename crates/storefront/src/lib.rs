//! `storefront`
//!
//! **Responsibility:** client-side product catalog and shopping cart, each
//! kept in sync with a durable key/value store.
//!
//! Every operation follows the same sequence: mutate in memory, overwrite the
//! full stored representation under the container's own key, then emit one
//! notification. Rejected operations touch neither memory nor the store.

pub mod cart;
pub mod catalog;
pub mod config;
pub mod error;
pub mod session;
pub mod sync;

pub use cart::Cart;
pub use catalog::ProductCatalog;
pub use config::{CorruptDataPolicy, StorefrontConfig};
pub use error::{StorefrontError, StorefrontResult};
pub use session::{AddProductOutcome, Storefront};

pub use storefront_core::{DomainError, ProductId};
pub use storefront_events::{Notification, NotificationLevel, NotificationSink};
pub use storefront_infra::KeyValueStore;
pub use storefront_products::{Product, ProductDraft, ProductField};
