//! The cart: products a user has chosen to purchase.

use storefront_core::{DomainError, Entity, ProductId, entity::contains_id};
use storefront_events::NotificationSink;
use storefront_infra::KeyValueStore;
use storefront_products::Product;

use crate::config::CorruptDataPolicy;
use crate::error::StorefrontResult;
use crate::sync::{load_list, save_list};

pub const MSG_ADDED_TO_CART: &str = "Product added to cart!";
pub const MSG_REMOVED_FROM_CART: &str = "Product removed from cart.";
pub const MSG_ALREADY_IN_CART: &str = "Product is already in the cart.";
pub const MSG_CART_NOT_SAVED: &str = "Could not update the cart. Please try again.";

/// Ordered list of full product records; no id appears twice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cart {
    key: String,
    items: Vec<Product>,
}

impl Cart {
    /// Load the cart stored under `key`, or an empty cart.
    pub fn initialize<S>(store: &S, key: &str, policy: CorruptDataPolicy) -> StorefrontResult<Self>
    where
        S: KeyValueStore + ?Sized,
    {
        let items = load_list(store, key, policy, Vec::new)?;
        tracing::info!(key, count = items.len(), "cart initialized");
        Ok(Self::from_items(key, items))
    }

    pub fn from_items(key: impl Into<String>, items: Vec<Product>) -> Self {
        Self {
            key: key.into(),
            items,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn items(&self) -> &[Product] {
        &self.items
    }

    pub fn contains(&self, id: ProductId) -> bool {
        contains_id::<Product, _>(&self.items, id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Append `product`, persist, notify.
    ///
    /// A product already in the cart is rejected with `DuplicateItem`; nothing
    /// is written in that case.
    pub fn add<S, N>(&mut self, product: Product, store: &S, notify: &N) -> StorefrontResult<()>
    where
        S: KeyValueStore + ?Sized,
        N: NotificationSink + ?Sized,
    {
        let id = product.id();
        if self.contains(id) {
            tracing::warn!(product_id = %id, "duplicate cart add rejected");
            notify.error(MSG_ALREADY_IN_CART);
            return Err(DomainError::duplicate(id).into());
        }

        self.items.push(product);
        if let Err(err) = save_list(store, &self.key, &self.items) {
            self.items.pop();
            tracing::error!(product_id = %id, error = %err, "failed to persist cart; add reverted");
            notify.error(MSG_CART_NOT_SAVED);
            return Err(err);
        }

        tracing::info!(product_id = %id, cart_len = self.items.len(), "added to cart");
        notify.info(MSG_ADDED_TO_CART);
        Ok(())
    }

    /// Remove every item with `id`, persist, notify. Returns how many went.
    ///
    /// Removing an id that is not in the cart still rewrites the stored cart
    /// and emits the warning.
    pub fn remove<S, N>(&mut self, id: ProductId, store: &S, notify: &N) -> StorefrontResult<usize>
    where
        S: KeyValueStore + ?Sized,
        N: NotificationSink + ?Sized,
    {
        let before = self.items.clone();
        self.items.retain(|item| item.id != id);
        let removed = before.len() - self.items.len();

        if let Err(err) = save_list(store, &self.key, &self.items) {
            self.items = before;
            tracing::error!(product_id = %id, error = %err, "failed to persist cart; remove reverted");
            notify.error(MSG_CART_NOT_SAVED);
            return Err(err);
        }

        tracing::info!(product_id = %id, removed, cart_len = self.items.len(), "removed from cart");
        notify.warning(MSG_REMOVED_FROM_CART);
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StorefrontError;
    use storefront_events::{InMemoryNotifications, NotificationLevel};
    use storefront_infra::{InMemoryStore, decode_products};

    fn product(id: u64) -> Product {
        Product::new(ProductId::new(id), format!("P{id}"), "img", "", "$1")
    }

    fn stored_cart(store: &InMemoryStore) -> Vec<Product> {
        decode_products("cart", &store.get("cart").unwrap().unwrap()).unwrap()
    }

    #[test]
    fn initialize_without_stored_cart_is_empty() {
        let store = InMemoryStore::new();
        let cart = Cart::initialize(&store, "cart", CorruptDataPolicy::Fail).unwrap();
        assert!(cart.is_empty());
    }

    #[test]
    fn stored_cart_with_repeated_id_follows_policy() {
        let repeated = storefront_infra::encode_products(&[product(7), product(7)]).unwrap();
        let store = InMemoryStore::with_entries([("cart", repeated)]);

        let err = Cart::initialize(&store, "cart", CorruptDataPolicy::Fail).unwrap_err();
        assert!(matches!(
            err,
            StorefrontError::Codec(storefront_infra::CodecError::DuplicateId { .. })
        ));

        let mut cart = Cart::initialize(&store, "cart", CorruptDataPolicy::Fallback).unwrap();
        assert!(cart.is_empty());

        let notes = InMemoryNotifications::new();
        cart.add(product(7), &store, &notes).unwrap();
        assert_eq!(cart.remove(ProductId::new(7), &store, &notes).unwrap(), 1);
    }

    #[test]
    fn add_then_remove_tracks_membership_and_store() {
        let store = InMemoryStore::new();
        let notes = InMemoryNotifications::new();
        let mut cart = Cart::from_items("cart", Vec::new());

        cart.add(product(7), &store, &notes).unwrap();
        assert!(cart.contains(ProductId::new(7)));
        assert_eq!(cart.len(), 1);
        assert_eq!(stored_cart(&store), vec![product(7)]);

        let removed = cart.remove(ProductId::new(7), &store, &notes).unwrap();
        assert_eq!(removed, 1);
        assert!(!cart.contains(ProductId::new(7)));
        assert!(stored_cart(&store).is_empty());

        assert_eq!(
            notes.levels(),
            vec![NotificationLevel::Info, NotificationLevel::Warning]
        );
    }

    #[test]
    fn duplicate_add_is_rejected_without_writing() {
        let store = InMemoryStore::new();
        let notes = InMemoryNotifications::new();
        let mut cart = Cart::from_items("cart", vec![product(7)]);

        let err = cart.add(product(7), &store, &notes).unwrap_err();

        assert!(err.is_duplicate());
        assert_eq!(cart.len(), 1);
        assert_eq!(store.writes(), 0);
        assert_eq!(notes.last().unwrap().message, MSG_ALREADY_IN_CART);
    }

    #[test]
    fn remove_keeps_order_of_remaining_items() {
        let store = InMemoryStore::new();
        let notes = InMemoryNotifications::new();
        let mut cart = Cart::from_items("cart", vec![product(1), product(2), product(3)]);

        cart.remove(ProductId::new(2), &store, &notes).unwrap();

        let ids: Vec<u64> = cart.items().iter().map(|p| p.id.get()).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn removing_an_absent_id_still_persists_and_warns() {
        let store = InMemoryStore::new();
        let notes = InMemoryNotifications::new();
        let mut cart = Cart::from_items("cart", vec![product(1)]);

        let removed = cart.remove(ProductId::new(42), &store, &notes).unwrap();

        assert_eq!(removed, 0);
        assert_eq!(stored_cart(&store), vec![product(1)]);
        assert_eq!(notes.levels(), vec![NotificationLevel::Warning]);
    }

    #[test]
    fn rejected_write_restores_previous_items() {
        let store = InMemoryStore::new();
        store.set_reject_writes(true);
        let notes = InMemoryNotifications::new();
        let mut cart = Cart::from_items("cart", vec![product(1)]);

        assert!(matches!(
            cart.add(product(2), &store, &notes),
            Err(StorefrontError::Store(_))
        ));
        assert!(matches!(
            cart.remove(ProductId::new(1), &store, &notes),
            Err(StorefrontError::Store(_))
        ));

        assert_eq!(cart.items(), &[product(1)]);
        assert_eq!(
            notes.levels(),
            vec![NotificationLevel::Error, NotificationLevel::Error]
        );
    }
}
