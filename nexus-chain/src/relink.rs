//! Buffer-based chain relinking.
//!
//! [`relink`] snapshots a chain into a caller-owned [`Buffer`] and rebuilds
//! every `next` link from the buffer order. No ordering predicate is
//! applied: the buffer holds the nodes in traversal order, so the rebuilt
//! chain visits exactly the same nodes in exactly the same order.
//!
//! # Count Discipline
//!
//! The caller declares how many nodes the chain holds. Traversal follows
//! links until `NONE`, using the declared count as both an assertion and a
//! bound, so a mismatch (including a cycle) is reported instead of running
//! past the buffer.
//!
//! | Chain | Declared | Result |
//! |-------|----------|--------|
//! | `NONE` | 0 | `Ok(NONE)`, nothing touched |
//! | n nodes | n | `Ok(head)` |
//! | n nodes | > n | [`RelinkError::TooFewNodes`] |
//! | n nodes (or a cycle) | < n | [`RelinkError::TooManyNodes`] |
//! | any | > capacity | [`RelinkError::BufferTooSmall`] |

use tracing::{debug, trace};

use crate::chain::link_unchecked;
use crate::{Buffer, Index, Link, RelinkError, Storage};

/// Relinks the chain at `head` through `buffer` and returns the new head.
///
/// 1. Traverses from `head`, recording each index into consecutive buffer
///    slots starting at 0.
/// 2. Links `buffer[i]` to `buffer[i + 1]` for every consecutive pair.
/// 3. Terminates the last node with `NONE`.
/// 4. Returns `buffer[0]`.
///
/// On success the buffer holds the snapshot; on error no node link has been
/// written and the buffer contents are unspecified.
///
/// # Errors
///
/// - [`RelinkError::BufferTooSmall`] if `node_count` exceeds the buffer's capacity
/// - [`RelinkError::TooFewNodes`] if the chain ends before `node_count` nodes
/// - [`RelinkError::TooManyNodes`] if the chain continues past `node_count` nodes
/// - [`RelinkError::InvalidIndex`] if a link names an index not in storage
///
/// # Example
///
/// ```
/// use nexus_chain::{chain, relink, Buffer, FixedStorage, Node, Storage};
///
/// let mut storage: FixedStorage<Node> = FixedStorage::with_capacity(3);
/// let c = storage.try_insert(Node::new("two")).unwrap();
/// let b = storage.try_insert(Node::linked("one", c)).unwrap();
/// let a = storage.try_insert(Node::linked("zero", b)).unwrap();
///
/// let mut buffer = Buffer::with_capacity(3);
/// let head = relink(&mut storage, &mut buffer, a, 3).unwrap();
///
/// assert_eq!(head, a);
/// assert_eq!(buffer.as_slice(), &[a, b, c]);
/// let names: Vec<_> = chain::iter(&storage, head).map(|(_, n)| n.name()).collect();
/// assert_eq!(names, ["zero", "one", "two"]);
/// ```
pub fn relink<T, S>(
    storage: &mut S,
    buffer: &mut Buffer<S::Index>,
    head: S::Index,
    node_count: usize,
) -> Result<S::Index, RelinkError>
where
    T: Link<S::Index>,
    S: Storage<T>,
{
    debug!(head = ?head, node_count, "relink");

    if node_count > buffer.capacity() {
        let err = RelinkError::BufferTooSmall {
            capacity: buffer.capacity(),
            required: node_count,
        };
        debug!(%err, "relink rejected");
        return Err(err);
    }

    if let Err(err) = snapshot(storage, buffer, head, node_count) {
        debug!(%err, "relink rejected");
        return Err(err);
    }

    // Safety: snapshot only records indices it resolved in storage, and a
    // chain of exactly node_count nodes visits each one once
    let new_head = unsafe { link_unchecked(storage, buffer.as_slice()) };

    debug!(head = ?new_head, node_count, "relinked");
    Ok(new_head)
}

/// Rebuilds a chain from the order currently held in `buffer`.
///
/// This is the second half of [`relink`] on its own: the caller fills or
/// rearranges the buffer, and the chain is linked in exactly that order.
///
/// # Errors
///
/// - [`RelinkError::InvalidIndex`] if a slot names an index not in storage
/// - [`RelinkError::DuplicateIndex`] if a slot repeats
///
/// # Example
///
/// ```
/// use nexus_chain::{chain, relink, relink_buffer, Buffer, FixedStorage, Node, Storage};
///
/// let mut storage: FixedStorage<Node> = FixedStorage::with_capacity(2);
/// let b = storage.try_insert(Node::new("one")).unwrap();
/// let a = storage.try_insert(Node::linked("zero", b)).unwrap();
///
/// let mut buffer = Buffer::with_capacity(2);
/// relink(&mut storage, &mut buffer, a, 2).unwrap();
///
/// buffer.as_mut_slice().reverse();
/// let head = relink_buffer(&mut storage, &buffer).unwrap();
///
/// let names: Vec<_> = chain::iter(&storage, head).map(|(_, n)| n.name()).collect();
/// assert_eq!(names, ["one", "zero"]);
/// ```
pub fn relink_buffer<T, S>(storage: &mut S, buffer: &Buffer<S::Index>) -> Result<S::Index, RelinkError>
where
    T: Link<S::Index>,
    S: Storage<T>,
{
    let head = crate::chain::link(storage, buffer.as_slice())?;
    debug!(head = ?head, node_count = buffer.len(), "relinked from buffer");
    Ok(head)
}

/// Records the chain at `head` into `buffer`, checking it holds exactly
/// `node_count` nodes. Writes no links.
fn snapshot<T, S>(
    storage: &S,
    buffer: &mut Buffer<S::Index>,
    head: S::Index,
    node_count: usize,
) -> Result<(), RelinkError>
where
    T: Link<S::Index>,
    S: Storage<T>,
{
    buffer.clear();

    let mut cur = head;
    while cur.is_some() {
        if buffer.len() == node_count {
            return Err(RelinkError::TooManyNodes {
                declared: node_count,
            });
        }

        let node = storage.get(cur).ok_or(RelinkError::InvalidIndex {
            index: cur.as_usize(),
        })?;
        trace!(index = cur.as_usize(), slot = buffer.len(), "snapshot");

        buffer
            .try_push(cur)
            .map_err(|_| RelinkError::BufferTooSmall {
                capacity: buffer.capacity(),
                required: node_count,
            })?;
        cur = node.next();
    }

    if buffer.len() != node_count {
        return Err(RelinkError::TooFewNodes {
            declared: node_count,
            found: buffer.len(),
        });
    }

    Ok(())
}
