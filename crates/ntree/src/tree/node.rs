//! Core node types for the tree container

use derive_more::Display;
use generational_arena::Index;
use smallvec::SmallVec;
use std::fmt;

/// Unique identifier for a node within a tree
///
/// Internally a generational index into the owning tree's arena. An id is
/// only meaningful for the tree that produced it, and stops being valid once
/// the node it names is popped, cleared, or otherwise removed. A later node
/// may reuse the same slot, but it gets a new generation, so a stale id never
/// resolves to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) Index);

impl NodeId {
    pub(crate) const fn new(index: Index) -> Self {
        NodeId(index)
    }

    /// Arena slot this id points into
    pub fn index(self) -> usize {
        self.0.into_raw_parts().0
    }

    /// How many times the slot had been recycled when this id was issued
    pub fn generation(self) -> u64 {
        self.0.into_raw_parts().1
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({}v{})", self.index(), self.generation())
    }
}

/// Structural state of a node
///
/// Derived from the node's contents, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Mode {
    /// No value and no children
    #[display(fmt = "Empty")]
    Empty,
    /// A value and no children
    #[display(fmt = "Singleton")]
    Singleton,
    /// A value and at least one child
    #[display(fmt = "Branch")]
    Branch,
}

impl Mode {
    /// Returns true for [`Mode::Empty`]
    pub const fn is_empty(self) -> bool {
        matches!(self, Mode::Empty)
    }

    /// Returns true for [`Mode::Branch`]
    pub const fn has_children(self) -> bool {
        matches!(self, Mode::Branch)
    }
}

/// Child lists are short in practice; keep the first few ids inline.
pub(crate) type ChildIds = SmallVec<[NodeId; 4]>;

/// Arena storage for a single live node
#[derive(Debug, Clone)]
pub(crate) struct Slot<T> {
    /// The node's value
    pub(crate) value: T,
    /// Back-reference to the parent, `None` for the root
    pub(crate) parent: Option<NodeId>,
    /// Owned children, in insertion order
    pub(crate) children: ChildIds,
}

impl<T> Slot<T> {
    pub(crate) fn new(value: T, parent: Option<NodeId>) -> Self {
        Self {
            value,
            parent,
            children: ChildIds::new(),
        }
    }
}
