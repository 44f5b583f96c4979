use std::cell::Cell;
use std::rc::Rc;

// ─── CowValue ───────────────────────────────────────────────────────────────

/// Value-semantic wrapper around reference-counted shared storage.
///
/// Cloning a `CowValue` is O(1): both handles point at the same backing
/// allocation. Reads never copy. The first write through a shared handle
/// clones the backing value into a private allocation; a handle that is
/// already the sole referencer mutates in place.
///
/// `Rc`-based, so handles are `!Send`/`!Sync` — cross-thread sharing is
/// ruled out at the type level rather than guarded by a lock.
pub struct CowValue<T: Clone> {
    storage: Rc<T>,
    /// Divergence counter shared by every copy in the same family.
    /// Bumped once per clone-on-write.
    clones: Rc<Cell<u64>>,
}

impl<T: Clone> CowValue<T> {
    pub fn new(value: T) -> Self {
        Self {
            storage: Rc::new(value),
            clones: Rc::new(Cell::new(0)),
        }
    }

    /// Read access. No uniqueness check, no allocation, ~1ns.
    #[inline]
    pub fn get(&self) -> &T {
        &self.storage
    }

    /// Whether this handle is the only referencer of its backing storage.
    /// Queried live from the reference count, never cached.
    #[inline]
    pub fn is_unique(&self) -> bool {
        Rc::strong_count(&self.storage) == 1
    }

    /// Write access: makes the backing storage uniquely referenced before
    /// handing out `&mut T`.
    ///
    /// Shared storage is cloned into a private allocation and this handle
    /// retargeted to it; other handles keep the original untouched. The
    /// uniqueness check and the clone happen inside this one call, so there
    /// is no window where another handle could observe a half-done write.
    /// At most one clone per divergence: repeated writes through a handle
    /// that is already unique are in-place and allocation-free.
    pub fn to_mut(&mut self) -> &mut T {
        if !self.is_unique() {
            self.clones.set(self.clones.get() + 1);
        }
        Rc::make_mut(&mut self.storage)
    }

    /// Identity probe: do two handles share one backing allocation?
    /// Structural, not value-based — two equal values in distinct
    /// allocations compare false.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.storage, &other.storage)
    }

    /// How many clone-on-write copies this handle's family has performed.
    #[inline]
    pub fn clone_count(&self) -> u64 {
        self.clones.get()
    }
}

impl<T: Clone> Clone for CowValue<T> {
    /// O(1): bumps the reference count, duplicates no storage.
    fn clone(&self) -> Self {
        Self {
            storage: Rc::clone(&self.storage),
            clones: Rc::clone(&self.clones),
        }
    }
}

impl<T: Clone + std::fmt::Debug> std::fmt::Debug for CowValue<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CowValue")
            .field("value", &*self.storage)
            .field("unique", &self.is_unique())
            .finish()
    }
}

impl<T: Clone + Default> Default for CowValue<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}
