//! Loading and saving whole product lists under a store key.

use storefront_infra::{KeyValueStore, decode_products, encode_products};
use storefront_products::Product;

use crate::config::CorruptDataPolicy;
use crate::error::{StorefrontError, StorefrontResult};

/// Read the list stored under `key`.
///
/// Absent key: `fallback()`. Unreadable or malformed value: `fallback()` under
/// `CorruptDataPolicy::Fallback`, the error under `CorruptDataPolicy::Fail`.
pub fn load_list<S, F>(
    store: &S,
    key: &str,
    policy: CorruptDataPolicy,
    fallback: F,
) -> StorefrontResult<Vec<Product>>
where
    S: KeyValueStore + ?Sized,
    F: FnOnce() -> Vec<Product>,
{
    let loaded: StorefrontResult<Option<Vec<Product>>> = store
        .get(key)
        .map_err(StorefrontError::from)
        .and_then(|raw| match raw {
            Some(text) => decode_products(key, &text)
                .map(Some)
                .map_err(StorefrontError::from),
            None => Ok(None),
        });

    match (loaded, policy) {
        (Ok(Some(products)), _) => {
            tracing::debug!(key, count = products.len(), "loaded stored list");
            Ok(products)
        }
        (Ok(None), _) => {
            tracing::debug!(key, "no stored list; using default");
            Ok(fallback())
        }
        (Err(err), CorruptDataPolicy::Fallback) => {
            tracing::warn!(key, error = %err, "stored list unreadable; using default");
            Ok(fallback())
        }
        (Err(err), CorruptDataPolicy::Fail) => {
            tracing::error!(key, error = %err, "stored list unreadable");
            Err(err)
        }
    }
}

/// Overwrite the full representation stored under `key`.
pub fn save_list<S>(store: &S, key: &str, products: &[Product]) -> StorefrontResult<()>
where
    S: KeyValueStore + ?Sized,
{
    let text = encode_products(products)?;
    store.set(key, &text)?;
    tracing::debug!(key, count = products.len(), "persisted list");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_infra::InMemoryStore;
    use storefront_products::sample_products;

    #[test]
    fn absent_key_uses_fallback() {
        let store = InMemoryStore::new();
        let list = load_list(&store, "products", CorruptDataPolicy::Fail, sample_products).unwrap();
        assert_eq!(list, sample_products());
    }

    #[test]
    fn stored_empty_list_is_not_replaced_by_fallback() {
        let store = InMemoryStore::with_entries([("products", "[]")]);
        let list =
            load_list(&store, "products", CorruptDataPolicy::Fallback, sample_products).unwrap();
        assert!(list.is_empty());
    }

    #[test]
    fn malformed_value_follows_policy() {
        let store = InMemoryStore::with_entries([("cart", "{oops")]);

        let list = load_list(&store, "cart", CorruptDataPolicy::Fallback, Vec::new).unwrap();
        assert!(list.is_empty());

        let err = load_list(&store, "cart", CorruptDataPolicy::Fail, Vec::new).unwrap_err();
        assert!(matches!(err, StorefrontError::Codec(_)));
    }

    #[test]
    fn save_then_load_reproduces_the_list() {
        let store = InMemoryStore::new();
        save_list(&store, "products", &sample_products()).unwrap();
        let list = load_list(&store, "products", CorruptDataPolicy::Fail, Vec::new).unwrap();
        assert_eq!(list, sample_products());
        assert_eq!(store.writes(), 1);
    }
}
