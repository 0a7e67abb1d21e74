use itertools::Itertools;
use log::{debug, info};

use crate::baskets::BasketSource;
use crate::error::Result;
use crate::items::FrequentItems;
use crate::ordinal::OrdinalMap;
use crate::triangle::{linear_index, triangular_len, triangular_to_pair};
use crate::types::{ItemId, PairHistogram};

/// Outcome of the second pass: co-occurrence counts for every unordered
/// pair of frequent items, kept in two representations that must agree.
///
/// The triangular array is a flat zeroed buffer addressed through
/// [`linear_index`] over the dense ordinals; the sparse histogram is keyed
/// by canonical raw-id pairs. One traversal feeds both.
#[derive(Debug)]
pub struct PairCounts {
    ordinals: OrdinalMap,
    triangular: Vec<u64>,
    sparse: PairHistogram,
}

/// Pass 2: stream the baskets again and, for every unordered pair of
/// distinct frequent items drawn from one basket, count how many baskets
/// contain both.
///
/// A basket with fewer than two frequent items contributes nothing. An item
/// repeated within a basket never pairs with itself, and each pair is
/// incremented once per basket no matter how often its members repeat.
pub fn count_frequent_pairs(
    source: &impl BasketSource,
    frequent: &FrequentItems,
    ordinals: OrdinalMap,
) -> Result<PairCounts> {
    let n = ordinals.len();
    let mut triangular = vec![0u64; triangular_len(n)];
    let mut sparse = PairHistogram::new();

    for basket in source.baskets()? {
        // Pairs are over distinct ids: a repeated item contributes one
        // co-occurrence with each other item, never a self-pair
        let mut items = basket;
        items.sort_unstable();
        items.dedup();

        // Every C(k, 2) pair in the basket, both members frequent
        for (&a, &b) in items.iter().tuple_combinations() {
            if !frequent.items.contains(&a) || !frequent.items.contains(&b) {
                continue;
            }

            *sparse.entry((a.min(b), a.max(b))).or_insert(0) += 1;

            let s_a = ordinal_of(&ordinals, a);
            let s_b = ordinal_of(&ordinals, b);
            triangular[linear_index(s_a.min(s_b), s_a.max(s_b), n)] += 1;
        }
    }

    debug!("pass 2: {} slot triangular array", triangular.len());
    info!("pass 2: {} distinct frequent pairs", sparse.len());

    Ok(PairCounts {
        ordinals,
        triangular,
        sparse,
    })
}

fn ordinal_of(ordinals: &OrdinalMap, item: ItemId) -> usize {
    // Pass 1 put every frequent item in the ordinal map; a miss here means
    // the two passes disagree and counting cannot continue.
    ordinals
        .ordinal(item)
        .expect("frequent item missing from ordinal map")
}

impl PairCounts {
    /// Triples from the triangular array, in increasing flat-index order.
    /// Zero slots (including the unused diagonal slots) are skipped.
    pub fn triangular_entries(&self) -> impl Iterator<Item = (ItemId, ItemId, u64)> + '_ {
        let n = self.ordinals.len();
        self.triangular
            .iter()
            .enumerate()
            .filter(|&(_, &count)| count > 0)
            .map(move |(idx, &count)| {
                let (row, col) = triangular_to_pair(idx, n);
                (self.ordinals.item(row), self.ordinals.item(col), count)
            })
    }

    /// Triples from the sparse histogram, in its natural key order.
    pub fn sparse_entries(&self) -> impl Iterator<Item = (ItemId, ItemId, u64)> + '_ {
        self.sparse.iter().map(|(&(a, b), &count)| (a, b, count))
    }

    /// Co-occurrence count for an unordered pair, from the sparse histogram.
    /// A pair never seen together (or not frequent) reports zero.
    pub fn count(&self, a: ItemId, b: ItemId) -> u64 {
        self.sparse
            .get(&(a.min(b), a.max(b)))
            .copied()
            .unwrap_or(0)
    }

    /// Co-occurrence count for an unordered pair, from the triangular array.
    pub fn triangular_count(&self, a: ItemId, b: ItemId) -> u64 {
        let (Some(s_a), Some(s_b)) = (self.ordinals.ordinal(a), self.ordinals.ordinal(b)) else {
            return 0;
        };
        if s_a == s_b {
            return 0;
        }
        self.triangular[linear_index(s_a.min(s_b), s_a.max(s_b), self.ordinals.len())]
    }

    pub fn is_empty(&self) -> bool {
        self.sparse.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::items::find_frequent_items;
    use crate::types::Basket;

    fn count(baskets: &Vec<Basket>, threshold_percent: u32) -> PairCounts {
        let frequent = find_frequent_items(baskets, threshold_percent).unwrap();
        let ordinals = OrdinalMap::new(&frequent.items);
        count_frequent_pairs(baskets, &frequent, ordinals).unwrap()
    }

    #[test]
    fn counts_each_cooccurring_pair() {
        let baskets: Vec<Basket> = vec![vec![1, 2, 3], vec![1, 2], vec![1, 3], vec![2, 3]];

        let counts = count(&baskets, 50);
        assert_eq!(counts.count(1, 2), 2);
        assert_eq!(counts.count(1, 3), 2);
        assert_eq!(counts.count(2, 3), 2);
        assert_eq!(counts.sparse_entries().count(), 3);
    }

    #[test]
    fn empty_frequent_set_yields_no_pairs() {
        let baskets: Vec<Basket> = vec![vec![1, 2, 3], vec![1, 2], vec![1, 3], vec![2, 3]];

        let counts = count(&baskets, 80);
        assert!(counts.is_empty());
        assert_eq!(counts.triangular_entries().count(), 0);
    }

    #[test]
    fn empty_input_yields_no_pairs() {
        let baskets: Vec<Basket> = vec![];

        let counts = count(&baskets, 50);
        assert!(counts.is_empty());
    }

    #[test]
    fn repeated_item_never_pairs_with_itself() {
        let baskets: Vec<Basket> = vec![vec![5, 5, 6]];

        let counts = count(&baskets, 0);
        assert_eq!(counts.count(5, 6), 1);
        assert_eq!(counts.count(5, 5), 0);
        let triples: Vec<_> = counts.sparse_entries().collect();
        assert_eq!(triples, vec![(5, 6, 1)]);
    }

    #[test]
    fn repeated_ids_increment_a_pair_once_per_basket() {
        // item 5 shows up multiple times per basket, even out of order;
        // each basket still contributes a single (5, 6) co-occurrence
        let baskets: Vec<Basket> = vec![vec![5, 5, 6], vec![6, 5, 5, 5]];

        let counts = count(&baskets, 0);
        assert_eq!(counts.count(5, 6), 2);
        assert_eq!(counts.triangular_count(5, 6), 2);
    }

    #[test]
    fn infrequent_items_are_excluded_from_pairs() {
        // item 9 appears once out of four baskets and misses the 50% cutoff
        let baskets: Vec<Basket> = vec![vec![1, 2, 9], vec![1, 2], vec![1, 2], vec![1]];

        let counts = count(&baskets, 50);
        assert_eq!(counts.count(1, 2), 3);
        assert_eq!(counts.count(1, 9), 0);
        assert_eq!(counts.count(2, 9), 0);
    }

    #[test]
    fn representations_agree_on_every_pair() {
        let baskets: Vec<Basket> = vec![
            vec![10, 20, 30, 40],
            vec![10, 20, 20, 30],
            vec![10, 20],
            vec![20, 30, 40, 40],
            vec![10, 40],
        ];

        let counts = count(&baskets, 20);
        let from_array: BTreeSet<_> = counts
            .triangular_entries()
            .map(|(a, b, c)| ((a.min(b), a.max(b)), c))
            .collect();
        let from_map: BTreeSet<_> = counts
            .sparse_entries()
            .map(|(a, b, c)| ((a, b), c))
            .collect();
        assert_eq!(from_array, from_map);
        assert!(!from_map.is_empty());

        for &((a, b), c) in &from_map {
            assert_eq!(counts.triangular_count(a, b), c);
            let both = baskets
                .iter()
                .filter(|basket| basket.contains(&a) && basket.contains(&b))
                .count() as u64;
            assert_eq!(c, both);
        }
    }

    #[test]
    fn sparse_entries_come_out_in_key_order() {
        let baskets: Vec<Basket> = vec![vec![30, 10, 20], vec![30, 10]];

        let counts = count(&baskets, 0);
        let triples: Vec<_> = counts.sparse_entries().collect();
        assert_eq!(triples, vec![(10, 20, 1), (10, 30, 2), (20, 30, 1)]);
    }

    #[test]
    fn sparse_identifiers_do_not_blow_up_the_array() {
        // ids far apart; the array is sized by the item count, not the ids
        let baskets: Vec<Basket> = vec![vec![7, 1_000_000_000], vec![7, 1_000_000_000]];

        let counts = count(&baskets, 50);
        assert_eq!(counts.triangular.len(), triangular_len(2));
        assert_eq!(counts.count(7, 1_000_000_000), 2);
        assert_eq!(counts.triangular_count(1_000_000_000, 7), 2);
    }
}
