use std::hash::Hash;

use crate::types::{FastHashSet, FastMap};

// ─── Slice transforms ───────────────────────────────────────────────────────

pub trait SliceExt<T> {
    /// Split into runs, starting a new run wherever `pred(prev, next)` holds.
    /// `[1, 2, 2, 3].split_between(|a, b| a != b)` → `[[1], [2, 2], [3]]`.
    fn split_between(&self, pred: impl FnMut(&T, &T) -> bool) -> Vec<Vec<T>>
    where
        T: Clone;

    /// Running fold: like `fold`, but keeps every intermediate result.
    /// `[1, 2, 3, 4].accumulate(0, |acc, x| acc + x)` → `[1, 3, 6, 10]`.
    fn accumulate<R: Clone>(&self, init: R, f: impl FnMut(&R, &T) -> R) -> Vec<R>;

    /// Bounds-checked indexing. `None` instead of a panic on out-of-range.
    fn guarded(&self, idx: usize) -> Option<&T>;

    /// Split on any element contained in `separators`. Empty segments
    /// (adjacent separators, leading/trailing) are omitted.
    fn split_on_separators(&self, separators: &[T]) -> Vec<&[T]>
    where
        T: PartialEq;
}

impl<T> SliceExt<T> for [T] {
    fn split_between(&self, mut pred: impl FnMut(&T, &T) -> bool) -> Vec<Vec<T>>
    where
        T: Clone,
    {
        let Some(first) = self.first() else {
            return Vec::new();
        };
        let mut result = vec![vec![first.clone()]];
        for pair in self.windows(2) {
            let (prev, cur) = (&pair[0], &pair[1]);
            if pred(prev, cur) {
                result.push(vec![cur.clone()]);
            } else {
                let last = result.len() - 1;
                result[last].push(cur.clone());
            }
        }
        result
    }

    fn accumulate<R: Clone>(&self, init: R, mut f: impl FnMut(&R, &T) -> R) -> Vec<R> {
        let mut running = init;
        self.iter()
            .map(|x| {
                running = f(&running, x);
                running.clone()
            })
            .collect()
    }

    #[inline]
    fn guarded(&self, idx: usize) -> Option<&T> {
        self.get(idx)
    }

    fn split_on_separators(&self, separators: &[T]) -> Vec<&[T]>
    where
        T: PartialEq,
    {
        self.split(|x| separators.contains(x))
            .filter(|seg| !seg.is_empty())
            .collect()
    }
}

// ─── Iterator transforms ────────────────────────────────────────────────────

pub trait IterExt: Iterator + Sized {
    /// Element → occurrence count.
    fn frequencies(self) -> FastMap<Self::Item, usize>
    where
        Self::Item: Eq + Hash,
    {
        let mut counts = FastMap::default();
        for item in self {
            *counts.entry(item).or_insert(0) += 1;
        }
        counts
    }

    /// Drop duplicates, keeping the first occurrence and the original order.
    fn unique(self) -> Vec<Self::Item>
    where
        Self::Item: Eq + Hash + Clone,
    {
        let mut seen = FastHashSet::default();
        self.filter(|x| seen.insert(x.clone())).collect()
    }
}

impl<I: Iterator> IterExt for I {}

// ═══════════════════════════════════════════════════════════════════════════
