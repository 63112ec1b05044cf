//! Fixed-capacity scratch buffer of node indices.

use crate::{Full, Index};

/// Ordered, caller-owned sequence of node indices.
///
/// The buffer is allocated once with a fixed capacity and reused across
/// relinks; pushing never reallocates. The slice view is mutable so a caller
/// can rearrange a snapshot before handing it to
/// [`relink_buffer`](crate::relink_buffer).
///
/// # Example
///
/// ```
/// use nexus_chain::Buffer;
///
/// let mut buffer: Buffer<u32> = Buffer::with_capacity(2);
/// buffer.try_push(3).unwrap();
/// buffer.try_push(1).unwrap();
///
/// assert_eq!(buffer.as_slice(), &[3, 1]);
/// assert_eq!(buffer.try_push(0).unwrap_err().into_inner(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct Buffer<Idx: Index = u32> {
    slots: Box<[Idx]>,
    len: usize,
}

impl<Idx: Index> Buffer<Idx> {
    /// Creates an empty buffer holding at most `capacity` indices.
    ///
    /// A zero capacity is allowed; such a buffer only relinks empty chains.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: vec![Idx::NONE; capacity].into_boxed_slice(),
            len: 0,
        }
    }

    /// Returns the capacity.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the number of filled slots.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no slots are filled.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if every slot is filled.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.len == self.slots.len()
    }

    /// Appends an index, handing it back if the buffer is full.
    #[inline]
    pub fn try_push(&mut self, idx: Idx) -> Result<(), Full<Idx>> {
        match self.slots.get_mut(self.len) {
            Some(slot) => {
                *slot = idx;
                self.len += 1;
                Ok(())
            }
            None => Err(Full(idx)),
        }
    }

    /// Empties the buffer. Capacity is kept.
    #[inline]
    pub fn clear(&mut self) {
        self.slots[..self.len].fill(Idx::NONE);
        self.len = 0;
    }

    /// Returns the filled slots.
    #[inline]
    pub fn as_slice(&self) -> &[Idx] {
        &self.slots[..self.len]
    }

    /// Returns the filled slots for in-place rearrangement.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [Idx] {
        &mut self.slots[..self.len]
    }

    /// Returns the index at `pos`, if filled.
    #[inline]
    pub fn get(&self, pos: usize) -> Option<Idx> {
        self.as_slice().get(pos).copied()
    }

    /// Iterates over the filled slots in order.
    #[inline]
    pub fn iter(&self) -> core::iter::Copied<core::slice::Iter<'_, Idx>> {
        self.as_slice().iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_is_empty() {
        let buffer: Buffer = Buffer::with_capacity(5);
        assert!(buffer.is_empty());
        assert!(!buffer.is_full());
        assert_eq!(buffer.capacity(), 5);
        assert_eq!(buffer.as_slice(), &[] as &[u32]);
    }

    #[test]
    fn push_until_full() {
        let mut buffer: Buffer = Buffer::with_capacity(3);
        for i in 0..3 {
            buffer.try_push(i).unwrap();
        }

        assert!(buffer.is_full());
        assert_eq!(buffer.try_push(9), Err(Full(9)));
        assert_eq!(buffer.as_slice(), &[0, 1, 2]);
    }

    #[test]
    fn zero_capacity_rejects_push() {
        let mut buffer: Buffer = Buffer::with_capacity(0);
        assert!(buffer.is_full());
        assert!(buffer.try_push(0).is_err());
    }

    #[test]
    fn clear_keeps_capacity() {
        let mut buffer: Buffer = Buffer::with_capacity(2);
        buffer.try_push(4).unwrap();
        buffer.try_push(5).unwrap();

        buffer.clear();

        assert!(buffer.is_empty());
        assert_eq!(buffer.capacity(), 2);
        assert_eq!(buffer.get(0), None);
        buffer.try_push(6).unwrap();
        assert_eq!(buffer.get(0), Some(6));
    }

    #[test]
    fn mut_slice_rearranges() {
        let mut buffer: Buffer = Buffer::with_capacity(4);
        for i in 0..3 {
            buffer.try_push(i).unwrap();
        }

        buffer.as_mut_slice().reverse();

        assert_eq!(buffer.iter().collect::<Vec<_>>(), vec![2, 1, 0]);
    }
}
