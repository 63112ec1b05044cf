//! Chain traversal and ordered linking.
//!
//! A chain is identified by its head index alone. Traversal follows `next`
//! links through storage until the `NONE` terminal.

use std::collections::HashSet;
use std::iter::FusedIterator;
use std::marker::PhantomData;

use crate::{Index, Link, RelinkError, Storage};

/// Iterator over a chain, yielding `(index, node)` in link order.
///
/// Stops at the `NONE` terminal, or early if a link names an index with no
/// node behind it. A cyclic chain never terminates; bound the iteration
/// (e.g. with `take`) when the chain is untrusted.
pub struct Iter<'a, T, S: Storage<T>> {
    storage: &'a S,
    cur: S::Index,
    _marker: PhantomData<&'a T>,
}

impl<'a, T, S> Iterator for Iter<'a, T, S>
where
    T: Link<S::Index> + 'a,
    S: Storage<T>,
{
    type Item = (S::Index, &'a T);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.cur.is_none() {
            return None;
        }

        let idx = self.cur;
        match self.storage.get(idx) {
            Some(node) => {
                self.cur = node.next();
                Some((idx, node))
            }
            None => {
                self.cur = S::Index::NONE;
                None
            }
        }
    }
}

impl<'a, T, S> FusedIterator for Iter<'a, T, S>
where
    T: Link<S::Index> + 'a,
    S: Storage<T>,
{
}

/// Returns an iterator over the chain starting at `head`.
///
/// # Example
///
/// ```
/// use nexus_chain::{chain, FixedStorage, Index, Node, Storage};
///
/// let mut storage: FixedStorage<Node> = FixedStorage::with_capacity(2);
/// let b = storage.try_insert(Node::new("one")).unwrap();
/// let a = storage.try_insert(Node::linked("zero", b)).unwrap();
///
/// let names: Vec<_> = chain::iter(&storage, a).map(|(_, n)| n.name()).collect();
/// assert_eq!(names, ["zero", "one"]);
/// ```
#[inline]
pub fn iter<T, S>(storage: &S, head: S::Index) -> Iter<'_, T, S>
where
    T: Link<S::Index>,
    S: Storage<T>,
{
    Iter {
        storage,
        cur: head,
        _marker: PhantomData,
    }
}

/// Links the nodes named by `order` into a chain, in exactly that order.
///
/// The first index becomes the head and the last one is terminated with
/// `NONE`. Returns the head, or `NONE` for an empty order. Nothing is
/// compared; the caller owns the order.
///
/// # Errors
///
/// - [`RelinkError::InvalidIndex`] if an index has no node in storage
/// - [`RelinkError::DuplicateIndex`] if an index repeats
///
/// No link is written unless the whole order is valid.
///
/// # Example
///
/// ```
/// use nexus_chain::{chain, FixedStorage, Node, Storage};
///
/// let mut storage: FixedStorage<Node> = FixedStorage::with_capacity(3);
/// let a = storage.try_insert(Node::new("a")).unwrap();
/// let b = storage.try_insert(Node::new("b")).unwrap();
/// let c = storage.try_insert(Node::new("c")).unwrap();
///
/// let head = chain::link(&mut storage, &[c, a, b]).unwrap();
/// let order: Vec<_> = chain::iter(&storage, head).map(|(idx, _)| idx).collect();
/// assert_eq!(order, [c, a, b]);
/// ```
pub fn link<T, S>(storage: &mut S, order: &[S::Index]) -> Result<S::Index, RelinkError>
where
    T: Link<S::Index>,
    S: Storage<T>,
{
    let mut seen = HashSet::with_capacity(order.len());
    for &idx in order {
        if !storage.contains(idx) {
            return Err(RelinkError::InvalidIndex {
                index: idx.as_usize(),
            });
        }
        if !seen.insert(idx.as_usize()) {
            return Err(RelinkError::DuplicateIndex {
                index: idx.as_usize(),
            });
        }
    }

    // Safety: every index was checked above
    Ok(unsafe { link_unchecked(storage, order) })
}

/// Links `order` without validating it.
///
/// # Safety
///
/// Every index in `order` must be occupied in `storage`. Repeated indices
/// produce a cyclic chain.
pub(crate) unsafe fn link_unchecked<T, S>(storage: &mut S, order: &[S::Index]) -> S::Index
where
    T: Link<S::Index>,
    S: Storage<T>,
{
    let Some((&last, _)) = order.split_last() else {
        return S::Index::NONE;
    };

    for pair in order.windows(2) {
        unsafe { storage.get_unchecked_mut(pair[0]) }.set_next(pair[1]);
    }
    unsafe { storage.get_unchecked_mut(last) }.set_next(S::Index::NONE);

    order[0]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FixedStorage, Node};

    fn unlinked(names: &[&str]) -> (FixedStorage<Node>, Vec<u32>) {
        let mut storage = FixedStorage::with_capacity(names.len());
        let keys = names
            .iter()
            .map(|name| storage.try_insert(Node::new(*name)).unwrap())
            .collect();
        (storage, keys)
    }

    fn names(storage: &FixedStorage<Node>, head: u32) -> Vec<&str> {
        iter(storage, head).map(|(_, node)| node.name()).collect()
    }

    #[test]
    fn iter_empty_chain() {
        let (storage, _) = unlinked(&["a"]);
        assert_eq!(iter(&storage, u32::NONE).count(), 0);
    }

    #[test]
    fn iter_stops_at_dangling_link() {
        let mut storage: FixedStorage<Node> = FixedStorage::with_capacity(2);
        let a = storage.try_insert(Node::linked("a", 7)).unwrap();

        let mut it = iter(&storage, a);
        assert_eq!(it.next().map(|(idx, _)| idx), Some(a));
        assert!(it.next().is_none());
        assert!(it.next().is_none());
    }

    #[test]
    fn link_in_given_order() {
        let (mut storage, keys) = unlinked(&["a", "b", "c", "d"]);

        let head = link(&mut storage, &[keys[3], keys[1], keys[0], keys[2]]).unwrap();

        assert_eq!(head, keys[3]);
        assert_eq!(names(&storage, head), ["d", "b", "a", "c"]);
        assert!(storage.get(keys[2]).unwrap().next().is_none());
    }

    #[test]
    fn link_single() {
        let (mut storage, keys) = unlinked(&["only"]);

        let head = link(&mut storage, &keys).unwrap();

        assert_eq!(head, keys[0]);
        assert_eq!(names(&storage, head), ["only"]);
    }

    #[test]
    fn link_empty_returns_none() {
        let (mut storage, _) = unlinked(&["a"]);
        assert!(link(&mut storage, &[]).unwrap().is_none());
    }

    #[test]
    fn link_rejects_missing_index() {
        let (mut storage, keys) = unlinked(&["a", "b"]);

        let err = link(&mut storage, &[keys[0], 5]).unwrap_err();

        assert_eq!(err, RelinkError::InvalidIndex { index: 5 });
        // untouched
        assert!(storage.get(keys[0]).unwrap().next().is_none());
    }

    #[test]
    fn link_rejects_sentinel() {
        let (mut storage, keys) = unlinked(&["a"]);

        let err = link(&mut storage, &[keys[0], u32::NONE]).unwrap_err();
        assert_eq!(
            err,
            RelinkError::InvalidIndex {
                index: u32::NONE as usize
            }
        );
    }

    #[test]
    fn link_rejects_duplicate() {
        let (mut storage, keys) = unlinked(&["a", "b"]);
        link(&mut storage, &[keys[1], keys[0]]).unwrap();

        let err = link(&mut storage, &[keys[0], keys[1], keys[0]]).unwrap_err();

        assert_eq!(err, RelinkError::DuplicateIndex { index: 0 });
        assert_eq!(names(&storage, keys[1]), ["b", "a"]);
    }
}
