//! ntree
//!
//! A generic, mutable, rooted, ordered N-ary tree container.
//!
//! # Core Concepts
//!
//! - **Tree**: the owning container; empty, a singleton, or a branch
//! - **NodeRef / NodeMut**: views anchored at any node, each usable as a tree
//! - **TreeView / TreeTraversal**: structural queries, traversals, searches
//!   and serialization shared by the tree and its views
//!
//! # Example
//!
//! ```
//! use ntree::prelude::*;
//!
//! let mut tree = Tree::from_value(1);
//! tree.push(2);
//! tree.push(3);
//! tree.push(4);
//! tree.child_mut(0)?.push(5);
//! tree.child_mut(0)?.push(-6);
//!
//! assert_eq!(tree.to_vec(), vec![1, 2, 5, -6, 3, 4]);
//! assert_eq!(tree.to_vec_bfs(), vec![1, 2, 3, 4, 5, -6]);
//! assert_eq!(tree.to_vec_generation(1)?, vec![2, 3, 4]);
//! assert_eq!(tree.get_most(|a, b| a > b), Some(&5));
//! assert_eq!(*tree.last_has_property(|v| *v > 0)?, 4);
//! # Ok::<(), ntree::error::TreeError>(())
//! ```

pub mod error;
pub mod tree;

pub use error::{ErrorKind, Result, TreeError};
pub use tree::{NodeMut, NodeRef, Tree};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::error::{ErrorKind, TreeError};
    pub use crate::tree::prelude::*;
}
