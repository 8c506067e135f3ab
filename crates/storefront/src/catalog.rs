//! The product catalog: every product known to the session.

use storefront_core::ProductId;
use storefront_events::NotificationSink;
use storefront_infra::KeyValueStore;
use storefront_products::{Clock, Product, ProductDraft, allocate_id, sample_products};

use crate::config::CorruptDataPolicy;
use crate::error::StorefrontResult;
use crate::sync::{load_list, save_list};

pub const MSG_PRODUCT_ADDED: &str = "Product added successfully!";
pub const MSG_MISSING_FIELDS: &str = "Please fill in all required fields.";
pub const MSG_PRODUCT_NOT_SAVED: &str = "Could not save the product. Please try again.";

/// Ordered product list, insertion order preserved, ids unique.
///
/// Grows by one product per accepted draft; there is no removal path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCatalog {
    key: String,
    products: Vec<Product>,
}

impl ProductCatalog {
    /// Load the catalog stored under `key`, or the sample catalog if none exists.
    pub fn initialize<S>(store: &S, key: &str, policy: CorruptDataPolicy) -> StorefrontResult<Self>
    where
        S: KeyValueStore + ?Sized,
    {
        let products = load_list(store, key, policy, sample_products)?;
        tracing::info!(key, count = products.len(), "catalog initialized");
        Ok(Self::from_products(key, products))
    }

    /// In-memory catalog; nothing is read or written.
    pub fn from_products(key: impl Into<String>, products: Vec<Product>) -> Self {
        Self {
            key: key.into(),
            products,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Validate `draft`, assign a fresh id, append, persist, notify.
    ///
    /// A rejected draft leaves memory and store untouched and emits an error
    /// notification. A failed write is rolled back before the error returns.
    pub fn add_product<S, N, C>(
        &mut self,
        draft: ProductDraft,
        clock: &C,
        store: &S,
        notify: &N,
    ) -> StorefrontResult<Product>
    where
        S: KeyValueStore + ?Sized,
        N: NotificationSink + ?Sized,
        C: Clock,
    {
        if let Err(err) = draft.validate() {
            tracing::warn!(missing = ?draft.missing_fields(), "product draft rejected");
            notify.error(MSG_MISSING_FIELDS);
            return Err(err.into());
        }

        let id = match allocate_id(clock, self.products.iter().map(|p| p.id)) {
            Ok(id) => id,
            Err(err) => {
                notify.error(MSG_PRODUCT_NOT_SAVED);
                return Err(err.into());
            }
        };
        let product = draft.into_product(id)?;

        self.products.push(product.clone());
        if let Err(err) = save_list(store, &self.key, &self.products) {
            self.products.pop();
            tracing::error!(product_id = %id, error = %err, "failed to persist catalog; add reverted");
            notify.error(MSG_PRODUCT_NOT_SAVED);
            return Err(err);
        }

        tracing::info!(product_id = %id, title = %product.title, "product added");
        notify.success(MSG_PRODUCT_ADDED);
        Ok(product)
    }
}
