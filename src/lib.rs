//! Two-pass A-Priori frequent pair counting over market-basket data.
//!
//! Pass 1 streams the baskets once and keeps the items whose occurrence
//! count beats the support cutoff. Pass 2 streams them again and counts
//! co-occurrences of pairs whose members are both frequent, in two
//! interchangeable representations: a packed triangular array addressed by
//! dense ordinals, and a sparse pair histogram keyed by raw ids.
//!
//! The pre-filter in pass 1 is what keeps the triangular array tractable:
//! its size is quadratic in the number of *frequent* items, never in the
//! size or sparsity of the raw identifier universe.

pub mod baskets;
pub mod error;
pub mod items;
pub mod ordinal;
pub mod pairs;
pub mod triangle;
pub mod types;

use log::info;

pub use crate::baskets::{BasketFile, BasketSource};
pub use crate::error::{Error, Result};
pub use crate::items::{find_frequent_items, FrequentItems};
pub use crate::ordinal::OrdinalMap;
pub use crate::pairs::{count_frequent_pairs, PairCounts};

/// Run both passes over the source and return the pair counts.
///
/// `threshold_percent` is the support threshold as a percentage of the
/// total basket count; an item must occur in strictly more than
/// `baskets * threshold / 100` positions to be frequent. The source is
/// scanned twice, so it must yield the same data on each scan.
pub fn mine(source: &impl BasketSource, threshold_percent: u32) -> Result<PairCounts> {
    let frequent = find_frequent_items(source, threshold_percent)?;
    info!(
        "{} frequent items over {} baskets at {}% support",
        frequent.len(),
        frequent.basket_count,
        threshold_percent
    );

    let ordinals = OrdinalMap::new(&frequent.items);
    count_frequent_pairs(source, &frequent, ordinals)
}
