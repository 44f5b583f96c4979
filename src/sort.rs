use std::cmp::Ordering;

// ─── SortDescriptor ─────────────────────────────────────────────────────────

/// A reusable, composable comparison for sorting `T`s.
///
/// Built from key extractors and combined lexicographically with [`then`],
/// so a multi-column sort reads as data instead of a hand-written
/// comparator chain.
///
/// [`then`]: SortDescriptor::then
pub struct SortDescriptor<T> {
    cmp: Box<dyn Fn(&T, &T) -> Ordering>,
}

impl<T> SortDescriptor<T> {
    pub fn new(cmp: impl Fn(&T, &T) -> Ordering + 'static) -> Self {
        Self { cmp: Box::new(cmp) }
    }

    /// Ascending by an extracted key.
    pub fn by_key<K, F>(key: F) -> Self
    where
        K: Ord,
        F: Fn(&T) -> K + 'static,
    {
        Self::new(move |a, b| key(a).cmp(&key(b)))
    }

    /// Descending by an extracted key.
    pub fn by_key_desc<K, F>(key: F) -> Self
    where
        K: Ord,
        F: Fn(&T) -> K + 'static,
    {
        Self::new(move |a, b| key(b).cmp(&key(a)))
    }

    /// Lexicographic combination: `tiebreak` runs only on `Equal`.
    pub fn then(self, tiebreak: SortDescriptor<T>) -> Self
    where
        T: 'static,
    {
        let first = self.cmp;
        let second = tiebreak.cmp;
        Self::new(move |a, b| first(a, b).then_with(|| second(a, b)))
    }

    #[inline]
    pub fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.cmp)(a, b)
    }

    /// Stable sort of `items` under this descriptor.
    pub fn sort(&self, items: &mut [T]) {
        items.sort_by(|a, b| (self.cmp)(a, b));
    }
}

// ═══════════════════════════════════════════════════════════════════════════
