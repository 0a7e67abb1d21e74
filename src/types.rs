use std::collections::{BTreeMap, HashMap, HashSet};

pub type ItemId = u64;
pub type Basket = Vec<ItemId>;

pub type ItemCounts = HashMap<ItemId, u64>;
pub type ItemSet = HashSet<ItemId>;

/// Canonical unordered pair of raw item ids, smaller id first.
pub type ItemPair = (ItemId, ItemId);
/// Sparse pair histogram. BTreeMap so reporting walks keys in order.
pub type PairHistogram = BTreeMap<ItemPair, u64>;

pub type Ordinal = usize;
