use std::collections::HashMap;

use crate::types::{ItemId, ItemSet, Ordinal};

/// Bijection between the frequent-item set and the dense range `[0, n)`.
///
/// Raw item ids are sparse and unbounded; the triangular array in pass 2 is
/// addressed by these dense ordinals instead, so its size depends only on
/// the number of frequent items. Items are enumerated in ascending id order
/// to keep the mapping deterministic; any consistent order would do, since
/// pair identity is symmetric.
#[derive(Debug, Clone)]
pub struct OrdinalMap {
    item_to_ordinal: HashMap<ItemId, Ordinal>,
    ordinal_to_item: Vec<ItemId>,
}

impl OrdinalMap {
    pub fn new(items: &ItemSet) -> Self {
        let mut ordinal_to_item: Vec<ItemId> = items.iter().copied().collect();
        ordinal_to_item.sort_unstable();
        let item_to_ordinal = ordinal_to_item
            .iter()
            .enumerate()
            .map(|(ordinal, &item)| (item, ordinal))
            .collect();
        OrdinalMap {
            item_to_ordinal,
            ordinal_to_item,
        }
    }

    /// Number of frequent items, i.e. the triangular matrix dimension.
    pub fn len(&self) -> usize {
        self.ordinal_to_item.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordinal_to_item.is_empty()
    }

    pub fn ordinal(&self, item: ItemId) -> Option<Ordinal> {
        self.item_to_ordinal.get(&item).copied()
    }

    /// Inverse lookup. Panics on an ordinal outside `[0, n)`, which would
    /// mean the triangular index translation broke its contract.
    pub fn item(&self, ordinal: Ordinal) -> ItemId {
        self.ordinal_to_item[ordinal]
    }
}
