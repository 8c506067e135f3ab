//! Products domain module.
//!
//! This crate contains the product record, the add-product draft and its
//! validation, the seed catalog and identifier allocation. It is pure domain
//! logic (no IO, no storage, no notifications).

pub mod clock;
pub mod product;

pub use clock::{Clock, FixedClock, SystemClock, allocate_id};
pub use product::{Product, ProductDraft, ProductField, sample_products};
