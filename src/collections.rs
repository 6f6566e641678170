use std::hash::BuildHasherDefault;
use indexmap::{IndexMap, IndexSet};
use rustc_hash::FxHasher;


/// Use indexmap for fast lookups with stable insertion order and rustc_hash for fast hashing
pub type FxIndexMap<K, V> = IndexMap<K, V, BuildHasherDefault<FxHasher>>;

/// Ordered set counterpart of `FxIndexMap`
pub type FxIndexSet<K> = IndexSet<K, BuildHasherDefault<FxHasher>>;
