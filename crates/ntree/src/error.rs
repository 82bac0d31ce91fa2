//! Error types for tree operations
//!
//! Every error is a contract violation detected before the tree is touched, so
//! an operation that returns an error leaves the tree exactly as it found it.

use derive_more::{Display, Error};

/// Result alias used throughout the crate
pub type Result<T, E = TreeError> = std::result::Result<T, E>;

/// Broad classification of a [`TreeError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum ErrorKind {
    /// A structural precondition of the operation does not hold
    #[display(fmt = "InvalidOperation")]
    InvalidOperation,
    /// An index or depth argument lies outside the current structure
    #[display(fmt = "OutOfRange")]
    OutOfRange,
}

/// Errors returned by tree operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum TreeError {
    /// `pop` was called on an empty tree
    #[display(fmt = "cannot pop an empty tree")]
    PopEmpty,

    /// `pop_n` asked for more removals than the node can absorb
    #[display(
        fmt = "cannot pop {} times, only {} removals available",
        requested,
        available
    )]
    PopExhausted {
        /// Number of pops requested
        requested: usize,
        /// Number of pops the node supports (children + its own value)
        available: usize,
    },

    /// No value in the tree satisfies the predicate
    #[display(fmt = "tree does not have this property")]
    MissingProperty,

    /// A child index is not a current child position
    #[display(fmt = "child index {} is out of range ({} children)", index, len)]
    ChildOutOfRange {
        /// The requested index
        index: usize,
        /// The number of children the node has
        len: usize,
    },

    /// No node exists at the requested depth
    #[display(fmt = "depth {} is out of range ({} levels)", depth, levels)]
    DepthOutOfRange {
        /// The requested depth, 0 being the node itself
        depth: usize,
        /// The number of depth levels below and including the node
        levels: usize,
    },
}

impl TreeError {
    /// The broad kind of this error
    pub const fn kind(&self) -> ErrorKind {
        match self {
            TreeError::PopEmpty | TreeError::PopExhausted { .. } | TreeError::MissingProperty => {
                ErrorKind::InvalidOperation
            }
            TreeError::ChildOutOfRange { .. } | TreeError::DepthOutOfRange { .. } => {
                ErrorKind::OutOfRange
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        assert_eq!(TreeError::PopEmpty.kind(), ErrorKind::InvalidOperation);
        assert_eq!(TreeError::MissingProperty.kind(), ErrorKind::InvalidOperation);
        assert_eq!(
            TreeError::PopExhausted {
                requested: 3,
                available: 1
            }
            .kind(),
            ErrorKind::InvalidOperation
        );
        assert_eq!(
            TreeError::ChildOutOfRange { index: 4, len: 2 }.kind(),
            ErrorKind::OutOfRange
        );
        assert_eq!(
            TreeError::DepthOutOfRange { depth: 3, levels: 3 }.kind(),
            ErrorKind::OutOfRange
        );
    }

    #[test]
    fn test_error_display() {
        assert_eq!(TreeError::PopEmpty.to_string(), "cannot pop an empty tree");
        assert_eq!(
            TreeError::ChildOutOfRange { index: 4, len: 2 }.to_string(),
            "child index 4 is out of range (2 children)"
        );
        assert_eq!(
            TreeError::DepthOutOfRange { depth: 3, levels: 3 }.to_string(),
            "depth 3 is out of range (3 levels)"
        );
        assert_eq!(ErrorKind::OutOfRange.to_string(), "OutOfRange");
    }
}
