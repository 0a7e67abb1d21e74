use log::{debug, info};

use crate::baskets::BasketSource;
use crate::error::Result;
use crate::types::{ItemCounts, ItemSet};

/// Outcome of the first pass: the items that beat the support cutoff, plus
/// the basket count the cutoff was derived from. The full histogram never
/// leaves this module.
#[derive(Debug, Clone)]
pub struct FrequentItems {
    pub items: ItemSet,
    pub basket_count: u64,
}

impl FrequentItems {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Pass 1: stream the baskets once, histogram every item token, and keep
/// the items whose count strictly exceeds `basket_count * threshold / 100`.
///
/// Every token occurrence increments the histogram, so an item repeated
/// within one basket is counted per occurrence. Items whose count lands
/// exactly on the cutoff are not frequent.
pub fn find_frequent_items(
    source: &impl BasketSource,
    threshold_percent: u32,
) -> Result<FrequentItems> {
    let mut histogram = ItemCounts::new();
    let mut basket_count: u64 = 0;

    // Update counts
    for basket in source.baskets()? {
        basket_count += 1;
        for item in basket {
            *histogram.entry(item).or_insert(0) += 1;
        }
    }

    // Prune everything at or below the cutoff
    let cutoff = basket_count as f64 * (threshold_percent as f64 / 100.0);
    debug!(
        "pass 1: {} baskets, {} distinct items, cutoff {}",
        basket_count,
        histogram.len(),
        cutoff
    );

    let items: ItemSet = histogram
        .into_iter()
        .filter(|&(_, count)| count as f64 > cutoff)
        .map(|(item, _)| item)
        .collect();

    info!("pass 1: {} frequent items", items.len());

    Ok(FrequentItems {
        items,
        basket_count,
    })
}
