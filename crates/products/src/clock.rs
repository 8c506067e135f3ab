//! Time source and collision-free identifier allocation.

use std::cell::Cell;

use chrono::Utc;
use storefront_core::{DomainResult, ProductId};

/// Millisecond wall clock used to derive new product identifiers.
pub trait Clock {
    fn now_millis(&self) -> u64;
}

/// Wall clock backed by `chrono::Utc::now()`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> u64 {
        // Pre-epoch clocks clamp to zero; allocation still bumps past existing ids.
        u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0)
    }
}

/// Deterministic clock for tests. Always returns the same instant.
#[derive(Debug, Default, Clone)]
pub struct FixedClock {
    millis: Cell<u64>,
}

impl FixedClock {
    pub fn at(millis: u64) -> Self {
        Self {
            millis: Cell::new(millis),
        }
    }
}

impl Clock for FixedClock {
    fn now_millis(&self) -> u64 {
        self.millis.get()
    }
}

/// Allocate an identifier that collides with none of `existing`.
///
/// Time-derived like the millisecond ids stored catalogs already contain, but
/// never below `max(existing) + 1`: two adds inside the same millisecond, or a
/// clock that went backwards, still yield distinct ids.
pub fn allocate_id<I>(clock: &impl Clock, existing: I) -> DomainResult<ProductId>
where
    I: IntoIterator<Item = ProductId>,
{
    let candidate = ProductId::new(clock.now_millis());
    match existing.into_iter().max() {
        Some(max) if max >= candidate => max.successor(),
        _ => Ok(candidate),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn ids(values: &[u64]) -> Vec<ProductId> {
        values.iter().copied().map(ProductId::new).collect()
    }

    #[test]
    fn uses_clock_when_ahead_of_existing_ids() {
        let clock = FixedClock::at(1_000);
        let id = allocate_id(&clock, ids(&[1, 2, 3])).unwrap();
        assert_eq!(id, ProductId::new(1_000));
    }

    #[test]
    fn bumps_past_existing_ids_within_the_same_millisecond() {
        let clock = FixedClock::at(1_000);
        let id = allocate_id(&clock, ids(&[1, 1_000])).unwrap();
        assert_eq!(id, ProductId::new(1_001));
    }

    #[test]
    fn survives_a_clock_that_went_backwards() {
        let clock = FixedClock::at(5);
        let id = allocate_id(&clock, ids(&[1_000, 9])).unwrap();
        assert_eq!(id, ProductId::new(1_001));
    }

    #[test]
    fn system_clock_is_after_the_epoch() {
        assert!(SystemClock.now_millis() > 0);
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 500,
            ..ProptestConfig::default()
        })]

        /// Property: a freshly allocated id never collides with an existing one.
        #[test]
        fn allocated_id_is_unique(
            now in 0u64..10_000,
            existing in proptest::collection::vec(0u64..10_000, 0..50)
        ) {
            let clock = FixedClock::at(now);
            let existing = ids(&existing);
            let id = allocate_id(&clock, existing.iter().copied()).unwrap();
            prop_assert!(!existing.contains(&id));
            prop_assert!(id.get() >= now);
        }
    }
}
