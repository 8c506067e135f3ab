//! Infrastructure layer: durable key/value stores and the stored-list codec.

pub mod codec;
pub mod store;

pub use codec::{CodecError, decode_products, encode_products};
pub use store::{InMemoryStore, KeyValueStore, StoreError};

#[cfg(not(target_arch = "wasm32"))]
pub use store::FileStore;

#[cfg(target_arch = "wasm32")]
pub use store::LocalStorageStore;
