//! The tree container and its views
//!
//! [`Tree`] owns every node in an arena. [`NodeRef`] and [`NodeMut`] are views
//! anchored at a single node; together with the tree itself they implement
//! [`TreeView`], so every node can be queried as a tree of its own.

mod arena;
mod display;
mod handle;
mod node;
mod traits;
mod walk;

pub use arena::Tree;
pub use handle::{NodeMut, NodeRef};
pub use node::{Mode, NodeId};
pub use traits::{Children, TreeTraversal, TreeView};
pub use walk::{TraversalOrder, TreeWalker, Values};

/// Re-export common types for convenience
pub mod prelude {
    pub use super::{
        Mode, NodeId, NodeMut, NodeRef, TraversalOrder, Tree, TreeTraversal, TreeView,
    };
}
