//! Textual encoding of product lists as stored under a key.

use std::collections::HashSet;

use thiserror::Error;

use storefront_core::ProductId;
use storefront_products::Product;

#[derive(Debug, Error)]
pub enum CodecError {
    /// The stored value is not a list of product records.
    #[error("stored value under {key:?} is not a product list: {source}")]
    Decode {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// The stored list carries the same product id more than once.
    #[error("stored list under {key:?} repeats product id {id}")]
    DuplicateId { key: String, id: ProductId },

    #[error("failed to encode product list: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Encode a product list as a JSON array.
pub fn encode_products(products: &[Product]) -> Result<String, CodecError> {
    serde_json::to_string(products).map_err(CodecError::Encode)
}

/// Decode a JSON array of product records read from `key`.
///
/// Ids must be unique within the list.
pub fn decode_products(key: &str, text: &str) -> Result<Vec<Product>, CodecError> {
    let products: Vec<Product> =
        serde_json::from_str(text).map_err(|source| CodecError::Decode {
            key: key.to_string(),
            source,
        })?;

    let mut seen = HashSet::with_capacity(products.len());
    if let Some(dup) = products.iter().find(|p| !seen.insert(p.id)) {
        return Err(CodecError::DuplicateId {
            key: key.to_string(),
            id: dup.id,
        });
    }
    Ok(products)
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_products::sample_products;

    #[test]
    fn encoded_list_decodes_to_equal_list() {
        let products = sample_products();
        let text = encode_products(&products).unwrap();
        assert_eq!(decode_products("products", &text).unwrap(), products);
    }

    #[test]
    fn reads_documents_written_by_older_sessions() {
        let text = r#"[{"image":"I","title":"T","description":"","price":"$1","id":1718000000000}]"#;
        let products = decode_products("products", text).unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].id, ProductId::new(1_718_000_000_000));
    }

    #[test]
    fn repeated_ids_are_rejected() {
        let text = r#"[{"id":7,"title":"A","image":"I","price":"$1"},{"id":7,"title":"B","image":"I","price":"$2"}]"#;
        let err = decode_products("cart", text).unwrap_err();
        match err {
            CodecError::DuplicateId { key, id } => {
                assert_eq!(key, "cart");
                assert_eq!(id, ProductId::new(7));
            }
            other => panic!("Expected DuplicateId error, got {other:?}"),
        }
    }

    #[test]
    fn malformed_documents_name_their_key() {
        for text in ["not json", r#"{"id":1}"#, r#"[{"id":"x"}]"#] {
            let err = decode_products("cart", text).unwrap_err();
            match err {
                CodecError::Decode { key, .. } => assert_eq!(key, "cart"),
                other => panic!("Expected Decode error, got {other:?}"),
            }
        }
    }
}
