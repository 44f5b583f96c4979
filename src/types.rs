use rustc_hash::FxHasher;
use std::collections::{HashMap, HashSet};
use std::hash::BuildHasherDefault;

// ─── Fast hash aliases ──────────────────────────────────────────────────────
// FxHasher: non-cryptographic, fast for small keys. Used wherever iteration
// order doesn't matter; ordered maps (headers) use BTreeMap instead.

pub type FastMap<K, V> = HashMap<K, V, BuildHasherDefault<FxHasher>>;
pub type FastHashSet<T> = HashSet<T, BuildHasherDefault<FxHasher>>;
