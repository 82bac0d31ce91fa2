//! Views anchored at a single node
//!
//! [`NodeRef`] borrows the tree immutably, [`NodeMut`] exclusively. Both
//! implement [`TreeView`] so every read-only operation works from any node.

use log::trace;
use std::fmt;

use crate::error::{Result, TreeError};
use crate::tree::arena::{subtree_eq, Tree};
use crate::tree::node::NodeId;
use crate::tree::traits::TreeView;
use crate::tree::walk::{TraversalOrder, TreeWalker};

/// Read-only view of one node and its subtree
pub struct NodeRef<'a, T> {
    tree: &'a Tree<T>,
    id: Option<NodeId>,
}

impl<'a, T> NodeRef<'a, T> {
    pub(crate) const fn new(tree: &'a Tree<T>, id: Option<NodeId>) -> Self {
        Self { tree, id }
    }

    /// The node's id, `None` for the root view of an empty tree
    pub const fn id(&self) -> Option<NodeId> {
        self.id
    }

    /// The node's value, borrowed for the lifetime of the tree
    pub fn get(self) -> Option<&'a T> {
        self.id.map(|id| &self.tree.slot(id).value)
    }
}

impl<T> Clone for NodeRef<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodeRef<'_, T> {}

impl<T> TreeView for NodeRef<'_, T> {
    type Value = T;

    fn tree(&self) -> &Tree<T> {
        self.tree
    }

    fn anchor(&self) -> Option<NodeId> {
        self.id
    }
}

impl<T: fmt::Debug> fmt::Debug for NodeRef<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("id", &self.id)
            .field("value", &self.value())
            .field("children", &self.child_count())
            .finish()
    }
}

/// Structural equality of the two subtrees
impl<T: PartialEq> PartialEq for NodeRef<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        subtree_eq(self.tree, self.id, other.tree, other.id)
    }
}

/// Where a [`NodeMut`] lives in its tree
///
/// A place outlives the node in it: clearing the node empties the place, and
/// pushing into an empty place fills it again at the same position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Place {
    /// The tree's root slot
    Root,
    /// Position `index` among `parent`'s children
    Child { parent: NodeId, index: usize },
}

/// Mutable view of one node and its subtree
///
/// Structural mutations only ever touch the node's own subtree, plus its own
/// entry in the parent's child list when the node becomes empty or is
/// refilled. A parent's children therefore never contain an empty node.
pub struct NodeMut<'a, T> {
    tree: &'a mut Tree<T>,
    place: Place,
    id: Option<NodeId>,
}

impl<'a, T> NodeMut<'a, T> {
    pub(crate) fn new(tree: &'a mut Tree<T>, place: Place, id: Option<NodeId>) -> Self {
        Self { tree, place, id }
    }

    /// The node's id, `None` once the node is empty
    pub const fn id(&self) -> Option<NodeId> {
        self.id
    }

    /// Mutable access to the node's value
    pub fn value_mut(&mut self) -> Option<&mut T> {
        let id = self.id?;
        Some(&mut self.tree.slot_mut(id).value)
    }

    /// Mutable access to the node's value for the lifetime of the tree borrow
    pub fn into_value_mut(self) -> Option<&'a mut T> {
        let id = self.id?;
        let tree = self.tree;
        Some(&mut tree.slot_mut(id).value)
    }

    /// Replace the node's value, returning the previous one
    ///
    /// On an empty node this fills the node, exactly like [`push`](Self::push).
    pub fn set_value(&mut self, value: T) -> Option<T> {
        match self.id {
            Some(id) => Some(std::mem::replace(&mut self.tree.slot_mut(id).value, value)),
            None => {
                self.fill(value);
                None
            }
        }
    }

    /// Mutable view of the child at `index`
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::ChildOutOfRange`] if `index` is not a current
    /// child position.
    pub fn child_mut(&mut self, index: usize) -> Result<NodeMut<'_, T>> {
        let (parent, child) = self.locate_child(index)?;
        Ok(NodeMut::new(
            &mut *self.tree,
            Place::Child { parent, index },
            Some(child),
        ))
    }

    /// Like [`child_mut`](Self::child_mut), consuming this view
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::ChildOutOfRange`] if `index` is not a current
    /// child position.
    pub fn into_child_mut(self, index: usize) -> Result<NodeMut<'a, T>> {
        let (parent, child) = self.locate_child(index)?;
        Ok(NodeMut::new(
            self.tree,
            Place::Child { parent, index },
            Some(child),
        ))
    }

    fn locate_child(&self, index: usize) -> Result<(NodeId, NodeId)> {
        let children = self.id.map_or(&[][..], |id| self.tree.children_of(id));
        match (self.id, children.get(index)) {
            (Some(parent), Some(&child)) => Ok((parent, child)),
            _ => Err(TreeError::ChildOutOfRange {
                index,
                len: children.len(),
            }),
        }
    }

    /// Push a value
    ///
    /// An empty node takes `value` as its own value; any other node gains a
    /// new last child holding `value`.
    pub fn push(&mut self, value: T) {
        match self.id {
            None => {
                trace!("push fills empty node at {:?}", self.place);
                self.fill(value);
            }
            Some(id) => {
                let child = self.tree.alloc(value, Some(id));
                self.tree.slot_mut(id).children.push(child);
                trace!("push appended {child} under {id}");
            }
        }
    }

    /// Push `value` `repeat` times
    pub fn push_n(&mut self, value: T, repeat: usize)
    where
        T: Clone,
    {
        for _ in 0..repeat {
            self.push(value.clone());
        }
    }

    /// Pop the most recently added child
    ///
    /// A node without children is cleared instead.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::PopEmpty`] if the node is empty.
    pub fn pop(&mut self) -> Result<()> {
        self.pop_n(1)
    }

    /// Pop `repeat` times
    ///
    /// A node with `k` children absorbs at most `k + 1` pops: one per child,
    /// then one to clear the node itself. The whole count is checked before
    /// anything is removed.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::PopEmpty`] if the node is empty, or
    /// [`TreeError::PopExhausted`] if `repeat` exceeds the available pops.
    pub fn pop_n(&mut self, repeat: usize) -> Result<()> {
        let id = self.id.ok_or(TreeError::PopEmpty)?;
        let available = self.tree.children_of(id).len() + 1;
        if repeat > available {
            return Err(TreeError::PopExhausted {
                requested: repeat,
                available,
            });
        }

        for _ in 0..repeat {
            match self.tree.slot_mut(id).children.pop() {
                Some(child) => {
                    trace!("pop removed {child} from {id}");
                    self.tree.remove_subtree(child);
                }
                None => self.clear(),
            }
        }
        Ok(())
    }

    /// Graft `subtree`
    ///
    /// An empty node becomes `subtree`; any other node gains it as a new last
    /// child. Parent links inside the grafted nodes are rewritten, so depth
    /// queries stay correct inside the graft. Grafting an empty tree does
    /// nothing.
    pub fn add(&mut self, subtree: Tree<T>) {
        if subtree.root.is_none() {
            return;
        }
        match (self.id, self.place) {
            (Some(id), _) => {
                if let Some(graft) = self.tree.import(subtree, Some(id)) {
                    self.tree.slot_mut(id).children.push(graft);
                    trace!("add grafted {graft} under {id}");
                }
            }
            (None, Place::Root) => {
                trace!("add replaced empty tree");
                *self.tree = subtree;
                self.id = self.tree.root;
            }
            (None, Place::Child { parent, index }) => {
                if let Some(graft) = self.tree.import(subtree, Some(parent)) {
                    self.tree.slot_mut(parent).children.insert(index, graft);
                    trace!("add refilled position {index} of {parent}");
                    self.id = Some(graft);
                }
            }
        }
    }

    /// Reset the node to empty, dropping its whole subtree
    ///
    /// A non-root node is also unlinked from its parent.
    pub fn clear(&mut self) {
        let Some(id) = self.id.take() else {
            return;
        };
        match self.place {
            Place::Root => {
                trace!("clear reset the whole tree");
                *self.tree = Tree::new();
            }
            Place::Child { parent, index } => {
                let removed = self.tree.slot_mut(parent).children.remove(index);
                debug_assert_eq!(removed, id);
                self.tree.remove_subtree(id);
                trace!("clear detached {id} from {parent}");
            }
        }
    }

    /// Visit every value in pre-order, allowing in-place modification
    pub fn for_each_mut<F>(&mut self, mut f: F)
    where
        F: FnMut(&mut T),
    {
        let ids: Vec<NodeId> =
            TreeWalker::new(&*self.tree, self.id, TraversalOrder::PreOrder).collect();
        for id in ids {
            f(&mut self.tree.slot_mut(id).value);
        }
    }

    /// Put a fresh singleton into this empty place
    fn fill(&mut self, value: T) {
        let id = match self.place {
            Place::Root => {
                let id = self.tree.alloc(value, None);
                self.tree.root = Some(id);
                id
            }
            Place::Child { parent, index } => {
                let id = self.tree.alloc(value, Some(parent));
                self.tree.slot_mut(parent).children.insert(index, id);
                id
            }
        };
        self.id = Some(id);
    }
}

impl<T> TreeView for NodeMut<'_, T> {
    type Value = T;

    fn tree(&self) -> &Tree<T> {
        &*self.tree
    }

    fn anchor(&self) -> Option<NodeId> {
        self.id
    }
}

impl<T: fmt::Debug> fmt::Debug for NodeMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeMut")
            .field("place", &self.place)
            .field("id", &self.id)
            .field("value", &self.value())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::traits::TreeTraversal;

    #[test]
    fn test_clear_child_detaches_from_parent() {
        let mut tree = Tree::from_value(1);
        tree.push(2);
        tree.push(3);
        tree.push(4);

        let mut middle = tree.child_mut(1).unwrap();
        middle.clear();
        assert!(middle.is_empty());
        assert_eq!(middle.size(), 0);

        assert_eq!(tree.to_vec(), vec![1, 2, 4]);
        assert_eq!(tree.len(), 3);
    }

    #[test]
    fn test_push_refills_cleared_place() {
        let mut tree = Tree::from_value(1);
        tree.push(2);
        tree.push(3);
        tree.push(4);

        let mut middle = tree.child_mut(1).unwrap();
        middle.pop().unwrap();
        assert!(middle.is_empty());
        assert_eq!(middle.pop(), Err(TreeError::PopEmpty));

        middle.push(30);
        middle.push(31);
        assert_eq!(middle.generation(), 2);
        assert_eq!(middle.to_vec(), vec![30, 31]);

        assert_eq!(tree.to_vec(), vec![1, 2, 30, 31, 4]);
    }

    #[test]
    fn test_add_into_cleared_place() {
        let mut tree = Tree::from_value(1);
        tree.push(2);
        tree.push(3);

        let mut graft = Tree::from_value(7);
        graft.push(8);

        let mut first = tree.child_mut(0).unwrap();
        first.clear();
        first.add(graft);
        assert_eq!(first.value(), Some(&7));

        assert_eq!(tree.to_vec(), vec![1, 7, 8, 3]);
        let seven = tree.child(0).unwrap();
        assert_eq!(seven.generation(), 2);
        assert_eq!(seven.child(0).unwrap().generation(), 3);
    }

    #[test]
    fn test_set_value() {
        let mut tree = Tree::new();
        assert_eq!(tree.set_value(1), None);
        assert_eq!(tree.set_value(2), Some(1));
        assert_eq!(tree.value(), Some(&2));
        assert_eq!(tree.size(), 1);
    }

    #[test]
    fn test_into_value_mut() {
        let mut tree = Tree::from_value(1);
        tree.push(2);
        if let Some(value) = tree.child_mut(0).unwrap().into_value_mut() {
            *value = 20;
        }
        assert_eq!(tree.to_vec(), vec![1, 20]);
    }

    #[test]
    fn test_node_ref_get_outlives_view() {
        let mut tree = Tree::from_value(1);
        tree.push(2);
        let value = {
            let child = tree.child(0).unwrap();
            child.get()
        };
        assert_eq!(value, Some(&2));
    }

    #[test]
    fn test_node_ref_equality() {
        let mut a = Tree::from_value(1);
        a.push(2);
        a.child_mut(0).unwrap().push(3);

        let mut b = Tree::from_value(2);
        b.push(3);

        assert_eq!(a.child(0).unwrap(), b.root());
        assert_ne!(a.root(), b.root());
    }
}
