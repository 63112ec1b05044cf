//! Errors reported by relinking.

/// Precondition violation detected while relinking a chain.
///
/// Every variant is detected before any node link is written, so a failed
/// relink leaves the chain exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RelinkError {
    /// The declared node count does not fit in the buffer.
    #[error("buffer capacity {capacity} cannot hold {required} nodes")]
    BufferTooSmall {
        /// Buffer capacity.
        capacity: usize,
        /// Slots the relink needed.
        required: usize,
    },

    /// The chain ended before the declared number of nodes.
    #[error("chain declared {declared} nodes but ended after {found}")]
    TooFewNodes {
        /// Count passed by the caller.
        declared: usize,
        /// Nodes actually reached.
        found: usize,
    },

    /// The chain continues past the declared number of nodes, or loops.
    #[error("chain declared {declared} nodes but continues past them")]
    TooManyNodes {
        /// Count passed by the caller.
        declared: usize,
    },

    /// A link or buffer slot names an index with no node behind it.
    #[error("index {index} is not present in storage")]
    InvalidIndex {
        /// Offending slot number.
        index: usize,
    },

    /// The same node appears twice in a link order.
    #[error("index {index} appears more than once")]
    DuplicateIndex {
        /// Offending slot number.
        index: usize,
    },
}
