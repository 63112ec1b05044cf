//! Index-linked chains over external storage, relinked through a buffer.
//!
//! Nodes live in caller-owned storage and are addressed by stable index.
//! A chain is a head index plus the `next` link each node carries; the
//! terminal marker is the index type's `NONE` sentinel.
//!
//! ```text
//! Storage (FixedStorage) - owns nodes, provides stable indices
//! Buffer                 - owns scratch slots, holds a snapshot of a chain
//! relink                 - rewrites next links from the buffer order
//! ```
//!
//! # Quick Start
//!
//! ```
//! use nexus_chain::{chain, fixture, relink, Buffer};
//!
//! let (mut storage, head) = fixture::five_node_chain().unwrap();
//! let mut buffer = Buffer::with_capacity(5);
//!
//! let head = relink(&mut storage, &mut buffer, head, 5).unwrap();
//!
//! let names: Vec<_> = chain::iter(&storage, head).map(|(_, n)| n.name()).collect();
//! assert_eq!(names, ["zero", "one", "two", "three", "four"]);
//! ```
//!
//! # Relinking Is Not Sorting
//!
//! [`relink`] records the chain in traversal order and relinks it in that
//! same order. No comparison is made anywhere in this crate; the output
//! chain visits the same nodes in the same order as the input. To impose a
//! different order, rearrange the buffer and call [`relink_buffer`].
//!
//! # Preconditions Are Checked
//!
//! The declared node count must match the chain and fit in the buffer.
//! Violations are reported as [`RelinkError`] before any link is written,
//! so a failed relink leaves the chain intact.
//!
//! ```
//! use nexus_chain::{fixture, relink, Buffer, RelinkError};
//!
//! let (mut storage, head) = fixture::five_node_chain().unwrap();
//! let mut buffer = Buffer::with_capacity(8);
//!
//! let err = relink(&mut storage, &mut buffer, head, 6).unwrap_err();
//! assert_eq!(err, RelinkError::TooFewNodes { declared: 6, found: 5 });
//! ```
//!
//! # Feature Flags
//!
//! - `slab` - Enable [`Storage`] impl for `slab::Slab`

#![warn(missing_docs)]

pub mod buffer;
pub mod chain;
pub mod error;
pub mod fixture;
pub mod index;
pub mod node;
pub mod relink;
pub mod storage;

pub use buffer::Buffer;
pub use error::RelinkError;
pub use index::Index;
pub use node::{Link, Node};
pub use relink::{relink, relink_buffer};
pub use storage::{FixedStorage, Full, Storage};
