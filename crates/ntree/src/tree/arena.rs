//! The owning tree container
//!
//! All nodes live in a single arena owned by [`Tree`]. Children are owned
//! through the arena and referenced by [`NodeId`]; parent links are plain ids
//! and carry no ownership.

use std::collections::VecDeque;

use generational_arena::Arena;
use log::debug;

use crate::error::Result;
use crate::tree::handle::{NodeMut, NodeRef, Place};
use crate::tree::node::{NodeId, Slot};

/// A mutable, rooted, ordered N-ary tree
///
/// A tree is either empty, a singleton (one value, no children), or a branch
/// (a value with one or more ordered children). Every subtree is itself a
/// valid tree: the read-only API lives on [`TreeView`](crate::tree::TreeView)
/// and [`TreeTraversal`](crate::tree::TreeTraversal), which are implemented by
/// the tree itself (anchored at its root) and by [`NodeRef`] / [`NodeMut`]
/// views (anchored at any node).
///
/// # Example
///
/// ```
/// use ntree::prelude::*;
///
/// let mut tree = Tree::from_value(1);
/// tree.push(2);
/// tree.push(3);
/// tree.child_mut(0)?.push(5);
///
/// assert_eq!(tree.size(), 4);
/// assert_eq!(tree.height(), 2);
/// assert_eq!(tree.to_vec(), vec![1, 2, 5, 3]);
/// assert_eq!(tree.to_string(), "1 : [2 : [5], 3]");
/// # Ok::<(), ntree::error::TreeError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Tree<T> {
    /// Arena storage; removed slots are recycled under a new generation
    nodes: Arena<Slot<T>>,
    /// The root node, `None` when the tree is empty
    pub(crate) root: Option<NodeId>,
}

impl<T> Tree<T> {
    /// Create an empty tree
    pub fn new() -> Self {
        Self {
            nodes: Arena::new(),
            root: None,
        }
    }

    /// Create a singleton tree holding `value`
    pub fn from_value(value: T) -> Self {
        let mut tree = Self::new();
        let root = tree.alloc(value, None);
        tree.root = Some(root);
        tree
    }

    /// Number of live nodes in the whole tree
    ///
    /// Equal to `size()` of the root, but O(1).
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Id of the root node, `None` when the tree is empty
    pub const fn root_id(&self) -> Option<NodeId> {
        self.root
    }

    /// Read-only view anchored at the root
    pub const fn root(&self) -> NodeRef<'_, T> {
        NodeRef::new(self, self.root)
    }

    /// Mutable view anchored at the root
    pub fn root_mut(&mut self) -> NodeMut<'_, T> {
        let root = self.root;
        NodeMut::new(self, Place::Root, root)
    }

    /// Read-only view of the node named by `id`
    ///
    /// Returns `None` if `id` does not name a live node of this tree.
    pub fn node(&self, id: NodeId) -> Option<NodeRef<'_, T>> {
        self.contains(id).then(|| NodeRef::new(self, Some(id)))
    }

    /// Mutable view of the node named by `id`
    ///
    /// Returns `None` if `id` does not name a live node of this tree.
    pub fn node_mut(&mut self, id: NodeId) -> Option<NodeMut<'_, T>> {
        let place = self.place_of(id)?;
        Some(NodeMut::new(self, place, Some(id)))
    }

    /// Mutable view of the root's child at `index`
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::ChildOutOfRange`](crate::error::TreeError::ChildOutOfRange)
    /// if `index` is not a current child position.
    pub fn child_mut(&mut self, index: usize) -> Result<NodeMut<'_, T>> {
        self.root_mut().into_child_mut(index)
    }

    /// Mutable access to the root value, `None` when the tree is empty
    pub fn value_mut(&mut self) -> Option<&mut T> {
        let root = self.root?;
        Some(&mut self.slot_mut(root).value)
    }

    /// Replace the root value, see [`NodeMut::set_value`]
    pub fn set_value(&mut self, value: T) -> Option<T> {
        self.root_mut().set_value(value)
    }

    /// Push `value` onto the root, see [`NodeMut::push`]
    pub fn push(&mut self, value: T) {
        self.root_mut().push(value);
    }

    /// Push `value` onto the root `repeat` times, see [`NodeMut::push_n`]
    pub fn push_n(&mut self, value: T, repeat: usize)
    where
        T: Clone,
    {
        self.root_mut().push_n(value, repeat);
    }

    /// Pop the root's last child, see [`NodeMut::pop`]
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::PopEmpty`](crate::error::TreeError::PopEmpty) if
    /// the tree is empty.
    pub fn pop(&mut self) -> Result<()> {
        self.root_mut().pop()
    }

    /// Pop from the root `repeat` times, see [`NodeMut::pop_n`]
    ///
    /// # Errors
    ///
    /// Fails without modifying the tree if it is empty or cannot absorb
    /// `repeat` removals.
    pub fn pop_n(&mut self, repeat: usize) -> Result<()> {
        self.root_mut().pop_n(repeat)
    }

    /// Graft `subtree` onto the root, see [`NodeMut::add`]
    pub fn add(&mut self, subtree: Tree<T>) {
        self.root_mut().add(subtree);
    }

    /// Reset the tree to the empty state
    pub fn clear(&mut self) {
        self.root_mut().clear();
    }

    /// Visit every value in pre-order, allowing in-place modification
    pub fn for_each_mut<F>(&mut self, f: F)
    where
        F: FnMut(&mut T),
    {
        self.root_mut().for_each_mut(f);
    }

    /// Returns true if `id` names a live node of this tree
    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains(id.0)
    }

    pub(crate) fn slot(&self, id: NodeId) -> &Slot<T> {
        match self.nodes.get(id.0) {
            Some(slot) => slot,
            None => panic!("{id} does not name a live node"),
        }
    }

    pub(crate) fn slot_mut(&mut self, id: NodeId) -> &mut Slot<T> {
        match self.nodes.get_mut(id.0) {
            Some(slot) => slot,
            None => panic!("{id} does not name a live node"),
        }
    }

    pub(crate) fn children_of(&self, id: NodeId) -> &[NodeId] {
        &self.slot(id).children
    }

    pub(crate) fn parent_of(&self, id: NodeId) -> Option<NodeId> {
        self.slot(id).parent
    }

    /// Number of edges on the longest downward path from `id`
    ///
    /// Counts levels with a queue, so chains of any depth are fine.
    pub(crate) fn height_of(&self, id: NodeId) -> usize {
        let mut pending = VecDeque::from([id]);
        let mut remaining = 1usize;
        let mut height = 0;
        while let Some(next) = pending.pop_front() {
            pending.extend(self.children_of(next).iter().copied());
            remaining -= 1;
            if remaining == 0 && !pending.is_empty() {
                height += 1;
                remaining = pending.len();
            }
        }
        height
    }

    /// Where `id` sits: the root slot, or a position among its parent's children
    pub(crate) fn place_of(&self, id: NodeId) -> Option<Place> {
        if !self.contains(id) {
            return None;
        }
        match self.parent_of(id) {
            None => (self.root == Some(id)).then_some(Place::Root),
            Some(parent) => {
                let index = self.children_of(parent).iter().position(|&c| c == id)?;
                Some(Place::Child { parent, index })
            }
        }
    }

    /// Store a new childless node, reusing a recycled slot when possible
    pub(crate) fn alloc(&mut self, value: T, parent: Option<NodeId>) -> NodeId {
        NodeId::new(self.nodes.insert(Slot::new(value, parent)))
    }

    /// Drop the node `id` and its whole subtree, recycling their slots
    ///
    /// The caller is responsible for unlinking `id` from its parent.
    pub(crate) fn remove_subtree(&mut self, id: NodeId) {
        let mut pending = vec![id];
        while let Some(next) = pending.pop() {
            if let Some(slot) = self.nodes.remove(next.0) {
                pending.extend(slot.children.iter().copied());
            }
        }
    }

    /// Move every node of `other` into this arena below `parent`
    ///
    /// Parent links inside the imported subtree are rewritten to the new ids.
    /// Returns the id of the imported root, which the caller must still link
    /// into `parent`'s children (or make the root).
    pub(crate) fn import(&mut self, other: Tree<T>, parent: Option<NodeId>) -> Option<NodeId> {
        let Tree { mut nodes, root } = other;
        let mut imported = None;
        let mut count = 0usize;
        let mut pending = vec![(root?, parent)];

        // Pre-order keeps each parent's children appended in their original order.
        while let Some((old, new_parent)) = pending.pop() {
            let Some(slot) = nodes.remove(old.0) else {
                continue;
            };
            let id = self.alloc(slot.value, new_parent);
            count += 1;
            match (imported, new_parent) {
                (None, _) => imported = Some(id),
                (Some(_), Some(p)) => self.slot_mut(p).children.push(id),
                (Some(_), None) => {}
            }
            pending.extend(slot.children.iter().rev().map(|&child| (child, Some(id))));
        }

        debug!("imported {count} nodes under {parent:?}");
        imported
    }
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<T> for Tree<T> {
    fn from(value: T) -> Self {
        Self::from_value(value)
    }
}

/// Structural equality: same values in the same shape
///
/// Arena layout (slot order, recycled slots) is not observable.
impl<T: PartialEq> PartialEq for Tree<T> {
    fn eq(&self, other: &Self) -> bool {
        subtree_eq(self, self.root, other, other.root)
    }
}

impl<T: Eq> Eq for Tree<T> {}

pub(crate) fn subtree_eq<T: PartialEq>(
    a: &Tree<T>,
    a_id: Option<NodeId>,
    b: &Tree<T>,
    b_id: Option<NodeId>,
) -> bool {
    let mut pending = match (a_id, b_id) {
        (None, None) => return true,
        (Some(x), Some(y)) => vec![(x, y)],
        _ => return false,
    };
    while let Some((x, y)) = pending.pop() {
        let (x, y) = (a.slot(x), b.slot(y));
        if x.value != y.value || x.children.len() != y.children.len() {
            return false;
        }
        pending.extend(x.children.iter().copied().zip(y.children.iter().copied()));
    }
    true
}
