//! Singly-linked chain nodes.
//!
//! Nodes embed their own `next` link. Any type can take part in a chain by
//! implementing [`Link`]; [`Node`] is the ready-made labeled node.

use crate::Index;

/// Trait for types that can participate in a singly-linked chain.
///
/// Implementors embed a `next` index directly in their struct. The terminal
/// marker is `Idx::NONE`.
///
/// # Example
///
/// ```
/// use nexus_chain::{Index, Link};
///
/// struct Entry {
///     inode: u64,
///     next: u32,
/// }
///
/// impl Link<u32> for Entry {
///     fn next(&self) -> u32 { self.next }
///     fn set_next(&mut self, idx: u32) { self.next = idx; }
/// }
///
/// let entry = Entry { inode: 7, next: u32::NONE };
/// assert!(entry.next().is_none());
/// ```
pub trait Link<Idx: Index> {
    /// Returns the next node's index, or `Idx::NONE` at the end of a chain.
    fn next(&self) -> Idx;

    /// Sets the next node's index.
    fn set_next(&mut self, idx: Idx);
}

/// A labeled chain node.
///
/// # Example
///
/// ```
/// use nexus_chain::{Index, Link, Node};
///
/// let node: Node = Node::new("zero");
/// assert_eq!(node.name(), "zero");
/// assert!(node.next().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<Idx: Index = u32> {
    name: String,
    next: Idx,
}

impl<Idx: Index> Node<Idx> {
    /// Creates an unlinked node.
    #[inline]
    pub fn new(name: impl Into<String>) -> Self {
        Self::linked(name, Idx::NONE)
    }

    /// Creates a node already pointing at `next`.
    #[inline]
    pub fn linked(name: impl Into<String>, next: Idx) -> Self {
        Self {
            name: name.into(),
            next,
        }
    }

    /// Returns the node's label.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl<Idx: Index> Link<Idx> for Node<Idx> {
    #[inline]
    fn next(&self) -> Idx {
        self.next
    }

    #[inline]
    fn set_next(&mut self, idx: Idx) {
        self.next = idx;
    }
}
