//! Core tree traits
//!
//! [`TreeView`] is the read-only interface shared by a [`Tree`] and by any
//! [`NodeRef`] or [`NodeMut`] anchored inside one. [`TreeTraversal`] layers
//! traversal, search and serialization on top and is implemented for every
//! `TreeView`.

use std::fmt;

use crate::error::{Result, TreeError};
use crate::tree::arena::Tree;
use crate::tree::handle::NodeRef;
use crate::tree::node::{Mode, NodeId};
use crate::tree::walk::{TraversalOrder, TreeWalker, Values};

/// A view of one node and the subtree below it
///
/// Implementations only provide the owning tree and the anchor node; every
/// structural query is derived from those two.
pub trait TreeView {
    /// Type of the values stored in the tree
    type Value;

    /// The tree owning the anchored node
    fn tree(&self) -> &Tree<Self::Value>;

    /// The anchored node, `None` when the view is empty
    fn anchor(&self) -> Option<NodeId>;

    /// Plain read-only view of the anchored node
    fn as_node(&self) -> NodeRef<'_, Self::Value> {
        NodeRef::new(self.tree(), self.anchor())
    }

    /// The anchored node's value, `None` when empty
    fn value(&self) -> Option<&Self::Value> {
        self.anchor().map(|id| &self.tree().slot(id).value)
    }

    /// Structural state of the node
    fn mode(&self) -> Mode {
        match self.anchor() {
            None => Mode::Empty,
            Some(id) if self.tree().children_of(id).is_empty() => Mode::Singleton,
            Some(_) => Mode::Branch,
        }
    }

    /// No value, no children, no parent
    fn is_empty(&self) -> bool {
        self.anchor().is_none()
    }

    /// A value and no children, whether or not a parent exists
    fn is_singleton(&self) -> bool {
        self.mode() == Mode::Singleton
    }

    /// No children and a parent: a non-root node holding a single value
    fn is_leaf(&self) -> bool {
        self.mode() == Mode::Singleton && self.has_parent()
    }

    /// Children and no parent
    fn is_root(&self) -> bool {
        self.mode() == Mode::Branch && !self.has_parent()
    }

    /// Children and a parent: an interior node
    fn is_branch(&self) -> bool {
        self.mode() == Mode::Branch && self.has_parent()
    }

    /// Returns true if the node has a parent
    fn has_parent(&self) -> bool {
        self.anchor()
            .is_some_and(|id| self.tree().parent_of(id).is_some())
    }

    /// View of the parent node
    fn parent(&self) -> Option<NodeRef<'_, Self::Value>> {
        let parent = self.tree().parent_of(self.anchor()?)?;
        Some(NodeRef::new(self.tree(), Some(parent)))
    }

    /// Number of direct children
    fn child_count(&self) -> usize {
        self.anchor()
            .map_or(0, |id| self.tree().children_of(id).len())
    }

    /// View of the child at `index` (0-based)
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::ChildOutOfRange`] if `index` is not a current
    /// child position.
    fn child(&self, index: usize) -> Result<NodeRef<'_, Self::Value>> {
        let children = self.child_ids();
        let child = children.get(index).ok_or(TreeError::ChildOutOfRange {
            index,
            len: children.len(),
        })?;
        Ok(NodeRef::new(self.tree(), Some(*child)))
    }

    /// Iterate over views of the direct children, in insertion order
    fn children(&self) -> Children<'_, Self::Value> {
        Children {
            tree: self.tree(),
            ids: self.child_ids().iter(),
        }
    }

    /// Ids of the direct children, in insertion order
    fn child_ids(&self) -> &[NodeId] {
        match self.anchor() {
            Some(id) => self.tree().children_of(id),
            None => &[],
        }
    }

    /// Number of nodes in the subtree, 0 when empty
    fn size(&self) -> usize {
        TreeWalker::new(self.tree(), self.anchor(), TraversalOrder::PreOrder).count()
    }

    /// Number of edges on the longest downward path; 0 without children
    fn height(&self) -> usize {
        self.anchor().map_or(0, |id| self.tree().height_of(id))
    }

    /// 1-based depth of the node from the tree's root, 0 when empty
    fn generation(&self) -> usize {
        let mut generation = 0;
        let mut current = self.anchor();
        while let Some(id) = current {
            generation += 1;
            current = self.tree().parent_of(id);
        }
        generation
    }
}

impl<T> TreeView for Tree<T> {
    type Value = T;

    fn tree(&self) -> &Tree<T> {
        self
    }

    fn anchor(&self) -> Option<NodeId> {
        self.root
    }
}

/// Iterator over the children of a node
#[derive(Debug, Clone)]
pub struct Children<'a, T> {
    tree: &'a Tree<T>,
    ids: std::slice::Iter<'a, NodeId>,
}

impl<'a, T> Iterator for Children<'a, T> {
    type Item = NodeRef<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        let id = *self.ids.next()?;
        Some(NodeRef::new(self.tree, Some(id)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.ids.size_hint()
    }
}

impl<T> ExactSizeIterator for Children<'_, T> {}

/// Extension trait providing traversal, search and serialization
///
/// This trait is automatically implemented for all types that implement
/// [`TreeView`]. Every operation covers the anchored node and its whole
/// subtree, and none of them modifies the tree.
pub trait TreeTraversal: TreeView {
    /// Walk the node ids of the subtree in the specified order
    fn walk(&self, order: TraversalOrder) -> TreeWalker<'_, Self::Value> {
        TreeWalker::new(self.tree(), self.anchor(), order)
    }

    /// Walk the node ids exactly `depth` levels below the anchor
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::DepthOutOfRange`] if `depth > height()` or the
    /// view is empty.
    fn walk_generation(&self, depth: usize) -> Result<TreeWalker<'_, Self::Value>> {
        TreeWalker::generation(self.tree(), self.anchor(), depth)
    }

    /// Values in depth-first pre-order
    fn iter(&self) -> Values<'_, Self::Value> {
        Values::new(self.walk(TraversalOrder::PreOrder))
    }

    /// Values in breadth-first (level) order
    fn iter_bfs(&self) -> Values<'_, Self::Value> {
        Values::new(self.walk(TraversalOrder::BreadthFirst))
    }

    /// Values exactly `depth` levels below the anchor, left to right
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::DepthOutOfRange`] if no node exists at `depth`.
    fn iter_generation(&self, depth: usize) -> Result<Values<'_, Self::Value>> {
        self.walk_generation(depth).map(Values::new)
    }

    /// Visit every value in depth-first pre-order
    fn for_each<F>(&self, f: F)
    where
        F: FnMut(&Self::Value),
    {
        self.iter().for_each(f);
    }

    /// Visit every value in breadth-first order
    fn for_each_bfs<F>(&self, f: F)
    where
        F: FnMut(&Self::Value),
    {
        self.iter_bfs().for_each(f);
    }

    /// Visit the values exactly `depth` levels below the anchor
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::DepthOutOfRange`] if no node exists at `depth`;
    /// `f` is not called in that case.
    fn for_each_generation<F>(&self, depth: usize, f: F) -> Result<()>
    where
        F: FnMut(&Self::Value),
    {
        self.iter_generation(depth)?.for_each(f);
        Ok(())
    }

    /// Returns true if every value satisfies `property`
    ///
    /// True for an empty view. Stops at the first failing value.
    fn all_has_property<P>(&self, mut property: P) -> bool
    where
        P: FnMut(&Self::Value) -> bool,
    {
        self.iter().all(|value| property(value))
    }

    /// Returns true if at least one value satisfies `property`
    ///
    /// False for an empty view. Stops at the first matching value.
    fn once_has_property<P>(&self, mut property: P) -> bool
    where
        P: FnMut(&Self::Value) -> bool,
    {
        self.iter().any(|value| property(value))
    }

    /// First value in breadth-first order satisfying `property`
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::MissingProperty`] if no value matches.
    fn first_has_property<P>(&self, mut property: P) -> Result<&Self::Value>
    where
        P: FnMut(&Self::Value) -> bool,
    {
        self.iter_bfs()
            .find(|&value| property(value))
            .ok_or(TreeError::MissingProperty)
    }

    /// Last value in breadth-first order satisfying `property`
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::MissingProperty`] if no value matches.
    fn last_has_property<P>(&self, mut property: P) -> Result<&Self::Value>
    where
        P: FnMut(&Self::Value) -> bool,
    {
        self.iter_bfs()
            .filter(|&value| property(value))
            .last()
            .ok_or(TreeError::MissingProperty)
    }

    /// The "most" value according to `replaces`
    ///
    /// Starts from the anchor's value and folds over the subtree in pre-order,
    /// taking each candidate for which `replaces(candidate, best)` holds. With
    /// a strict ordering such as `|a, b| a > b` this is the maximum, and ties
    /// go to the value met first. Returns `None` for an empty view.
    fn get_most<C>(&self, mut replaces: C) -> Option<&Self::Value>
    where
        C: FnMut(&Self::Value, &Self::Value) -> bool,
    {
        let mut best = self.value()?;
        for candidate in self.iter() {
            if replaces(candidate, best) {
                best = candidate;
            }
        }
        Some(best)
    }

    /// All values in depth-first pre-order
    fn to_vec(&self) -> Vec<Self::Value>
    where
        Self::Value: Clone,
    {
        self.iter().cloned().collect()
    }

    /// All values in breadth-first order
    fn to_vec_bfs(&self) -> Vec<Self::Value>
    where
        Self::Value: Clone,
    {
        self.iter_bfs().cloned().collect()
    }

    /// The values exactly `depth` levels below the anchor
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::DepthOutOfRange`] if no node exists at `depth`.
    fn to_vec_generation(&self, depth: usize) -> Result<Vec<Self::Value>>
    where
        Self::Value: Clone,
    {
        Ok(self.iter_generation(depth)?.cloned().collect())
    }

    /// Render the subtree as nested text, e.g. `1 : [2 : [5, -6], 3, 4]`
    ///
    /// An empty view renders as the empty string, a singleton as its bare
    /// value. This is a display form and is not meant to be parsed back.
    fn to_nested_string(&self) -> String
    where
        Self::Value: fmt::Display,
    {
        self.as_node().to_string()
    }
}

// Blanket implementation for all TreeView types
impl<T: TreeView + ?Sized> TreeTraversal for T {}
