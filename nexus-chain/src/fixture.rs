//! Prebuilt chains for demos, tests and benchmarks.

use crate::{chain, FixedStorage, Full, Index, Node, Storage};

/// Labels of the canonical five-node chain, in link order.
pub const FIVE_NAMES: [&str; 5] = ["zero", "one", "two", "three", "four"];

/// Inserts one node per label and links them in label order.
///
/// Returns the head, or `NONE` if `names` is empty.
///
/// # Errors
///
/// Returns [`Full`] carrying the first node that did not fit.
pub fn build_chain<S, Idx>(storage: &mut S, names: &[&str]) -> Result<Idx, S::Error>
where
    Idx: Index,
    S: Storage<Node<Idx>, Index = Idx>,
{
    let mut keys = Vec::with_capacity(names.len());
    for name in names {
        keys.push(storage.try_insert(Node::new(*name))?);
    }

    // Safety: freshly inserted keys are present and distinct
    Ok(unsafe { chain::link_unchecked(storage, &keys) })
}

/// Builds `zero -> one -> two -> three -> four -> NONE` in its own storage.
///
/// # Example
///
/// ```
/// use nexus_chain::{chain, fixture};
///
/// let (storage, head) = fixture::five_node_chain().unwrap();
/// let names: Vec<_> = chain::iter(&storage, head).map(|(_, n)| n.name()).collect();
/// assert_eq!(names, fixture::FIVE_NAMES);
/// ```
pub fn five_node_chain() -> Result<(FixedStorage<Node>, u32), Full<Node>> {
    let mut storage = FixedStorage::with_capacity(FIVE_NAMES.len());
    let head = build_chain(&mut storage, &FIVE_NAMES)?;
    Ok((storage, head))
}
