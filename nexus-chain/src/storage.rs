//! Storage trait for node arenas with stable indices.
//!
//! Chains never own their nodes. Nodes live in caller-owned storage and are
//! addressed by index; a chain is just a head index plus the `next` links
//! stored inside the nodes. Relinking rewrites those links in place and
//! never inserts or removes nodes.

use crate::Index;

use core::fmt;

/// Arena with stable indices.
///
/// # Requirements
///
/// Implementations must provide:
/// - **Stable indices**: an index stays valid for the lifetime of the value
/// - **O(1)** insert and lookup
///
/// # Implementations
///
/// - [`FixedStorage<T>`] - fixed capacity, contiguous, append-only (in this crate)
/// - `slab::Slab<T>` - growable (feature `slab`)
pub trait Storage<T> {
    /// Index type for this storage.
    type Index: Index;

    /// Error type for failed insertions.
    ///
    /// - `Full<T>` for fixed-capacity storage
    /// - `Infallible` for growable storage
    type Error;

    /// Inserts a value, returning its stable index.
    fn try_insert(&mut self, value: T) -> Result<Self::Index, Self::Error>;

    /// Returns a reference to the value at `index`, if present.
    fn get(&self, index: Self::Index) -> Option<&T>;

    /// Returns a mutable reference to the value at `index`, if present.
    fn get_mut(&mut self, index: Self::Index) -> Option<&mut T>;

    /// Returns `true` if `index` names an occupied slot.
    #[inline]
    fn contains(&self, index: Self::Index) -> bool {
        self.get(index).is_some()
    }

    /// Returns a mutable reference without bounds checking.
    ///
    /// # Safety
    ///
    /// `index` must be valid and occupied.
    unsafe fn get_unchecked_mut(&mut self, index: Self::Index) -> &mut T;
}

/// Error returned when fixed-capacity storage is full.
///
/// Carries the rejected value back to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Full<T>(pub T);

impl<T> Full<T> {
    /// Returns the value that could not be inserted.
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> fmt::Display for Full<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "storage is full")
    }
}

impl<T: fmt::Debug> std::error::Error for Full<T> {}

// =============================================================================
// FixedStorage - fixed capacity, one contiguous allocation
// =============================================================================

/// Fixed-capacity, append-only node arena.
///
/// All slots are allocated up front in one contiguous region. Values are
/// assigned sequential indices starting at 0 and are never removed, so an
/// index handed out once stays valid until the storage is cleared or dropped.
///
/// # Example
///
/// ```
/// use nexus_chain::{FixedStorage, Storage};
///
/// let mut storage: FixedStorage<&str> = FixedStorage::with_capacity(2);
/// let a = storage.try_insert("zero").unwrap();
/// let b = storage.try_insert("one").unwrap();
///
/// assert_eq!((a, b), (0, 1));
/// assert_eq!(storage.get(b), Some(&"one"));
/// assert!(storage.try_insert("two").is_err());
/// ```
#[derive(Debug)]
pub struct FixedStorage<T, Idx: Index = u32> {
    slots: Vec<T>,
    capacity: usize,
    _marker: core::marker::PhantomData<Idx>,
}

impl<T, Idx: Index> FixedStorage<T, Idx> {
    /// Creates storage with exactly `capacity` slots.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is 0 or if the last slot would collide with the
    /// index type's sentinel.
    pub fn with_capacity(capacity: usize) -> Self {
        assert!(capacity > 0, "capacity must be > 0");
        assert!(
            Idx::try_from_usize(capacity - 1).is_some(),
            "capacity exceeds index type maximum"
        );

        Self {
            slots: Vec::with_capacity(capacity),
            capacity,
            _marker: core::marker::PhantomData,
        }
    }

    /// Returns the capacity.
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the number of occupied slots.
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if no slots are occupied.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Returns `true` if all slots are occupied.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.slots.len() == self.capacity
    }

    /// Drops all values. Every previously returned index becomes invalid.
    ///
    /// # Warning
    ///
    /// Any chain head still referring into this storage dangles afterwards.
    /// Relinking such a head reports [`RelinkError::InvalidIndex`] rather than
    /// reading a stale node.
    ///
    /// [`RelinkError::InvalidIndex`]: crate::RelinkError::InvalidIndex
    pub fn clear(&mut self) {
        self.slots.clear();
    }
}

impl<T, Idx: Index> Storage<T> for FixedStorage<T, Idx> {
    type Index = Idx;
    type Error = Full<T>;

    #[inline]
    fn try_insert(&mut self, value: T) -> Result<Self::Index, Self::Error> {
        if self.is_full() {
            return Err(Full(value));
        }

        // with_capacity guarantees every slot below capacity has an index
        match Idx::try_from_usize(self.slots.len()) {
            Some(idx) => {
                self.slots.push(value);
                Ok(idx)
            }
            None => Err(Full(value)),
        }
    }

    #[inline]
    fn get(&self, index: Self::Index) -> Option<&T> {
        if index.is_none() {
            return None;
        }
        self.slots.get(index.as_usize())
    }

    #[inline]
    fn get_mut(&mut self, index: Self::Index) -> Option<&mut T> {
        if index.is_none() {
            return None;
        }
        self.slots.get_mut(index.as_usize())
    }

    #[inline]
    unsafe fn get_unchecked_mut(&mut self, index: Self::Index) -> &mut T {
        unsafe { self.slots.get_unchecked_mut(index.as_usize()) }
    }
}

// =============================================================================
// slab::Slab implementation
// =============================================================================

#[cfg(feature = "slab")]
impl<T> Storage<T> for slab::Slab<T> {
    type Index = usize;
    type Error = core::convert::Infallible;

    #[inline]
    fn try_insert(&mut self, value: T) -> Result<Self::Index, Self::Error> {
        Ok(self.insert(value))
    }

    #[inline]
    fn get(&self, index: Self::Index) -> Option<&T> {
        self.get(index)
    }

    #[inline]
    fn get_mut(&mut self, index: Self::Index) -> Option<&mut T> {
        self.get_mut(index)
    }

    #[inline]
    unsafe fn get_unchecked_mut(&mut self, index: Self::Index) -> &mut T {
        unsafe { self.get_mut(index).unwrap_unchecked() }
    }
}
