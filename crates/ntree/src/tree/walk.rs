//! Iterators over the nodes of a subtree

use std::collections::VecDeque;

use crate::error::{Result, TreeError};
use crate::tree::arena::Tree;
use crate::tree::node::NodeId;

/// Traversal order for walking the tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TraversalOrder {
    /// Visit parent before children (top-down, depth-first)
    PreOrder,
    /// Visit level by level (breadth-first)
    BreadthFirst,
}

#[derive(Debug, Clone)]
enum Strategy {
    PreOrder,
    BreadthFirst,
    /// Only the nodes `target` levels below the start
    Level {
        target: usize,
        level: usize,
        /// Nodes of `level` still queued ahead of the next level
        remaining: usize,
    },
}

/// Iterator for traversing a subtree in different orders
///
/// Yields node ids; use [`Values`] to get at the values directly.
#[derive(Debug, Clone)]
pub struct TreeWalker<'a, T> {
    tree: &'a Tree<T>,
    strategy: Strategy,
    /// Stack for pre-order, queue for the level-ordered strategies
    pending: VecDeque<NodeId>,
}

impl<'a, T> TreeWalker<'a, T> {
    /// Create a walker over the subtree rooted at `start`
    ///
    /// A `None` start walks nothing.
    pub(crate) fn new(tree: &'a Tree<T>, start: Option<NodeId>, order: TraversalOrder) -> Self {
        let strategy = match order {
            TraversalOrder::PreOrder => Strategy::PreOrder,
            TraversalOrder::BreadthFirst => Strategy::BreadthFirst,
        };
        Self {
            tree,
            strategy,
            pending: start.into_iter().collect(),
        }
    }

    /// Create a walker over the nodes exactly `depth` levels below `start`
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::DepthOutOfRange`] if the subtree has no node at
    /// that depth, i.e. `depth > height`, or `start` is `None`.
    pub(crate) fn generation(
        tree: &'a Tree<T>,
        start: Option<NodeId>,
        depth: usize,
    ) -> Result<Self> {
        let levels = start.map_or(0, |id| tree.height_of(id) + 1);
        if depth >= levels {
            return Err(TreeError::DepthOutOfRange { depth, levels });
        }
        Ok(Self {
            tree,
            strategy: Strategy::Level {
                target: depth,
                level: 0,
                remaining: 1,
            },
            pending: start.into_iter().collect(),
        })
    }
}

impl<T> Iterator for TreeWalker<'_, T> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.strategy {
            Strategy::PreOrder => {
                let current = self.pending.pop_back()?;
                // Reverse so the first child is popped next
                let children = self.tree.children_of(current);
                self.pending.extend(children.iter().rev().copied());
                Some(current)
            }
            Strategy::BreadthFirst => {
                let current = self.pending.pop_front()?;
                let children = self.tree.children_of(current);
                self.pending.extend(children.iter().copied());
                Some(current)
            }
            Strategy::Level {
                target,
                level,
                remaining,
            } => loop {
                if *level == *target {
                    return self.pending.pop_front();
                }
                let current = self.pending.pop_front()?;
                let children = self.tree.children_of(current);
                self.pending.extend(children.iter().copied());
                *remaining -= 1;
                if *remaining == 0 {
                    *level += 1;
                    *remaining = self.pending.len();
                }
            },
        }
    }
}

/// Iterator over the values of a subtree, in the order of its [`TreeWalker`]
#[derive(Debug, Clone)]
pub struct Values<'a, T> {
    walker: TreeWalker<'a, T>,
}

impl<'a, T> Values<'a, T> {
    pub(crate) const fn new(walker: TreeWalker<'a, T>) -> Self {
        Self { walker }
    }
}

impl<'a, T> Iterator for Values<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let tree = self.walker.tree;
        self.walker.next().map(|id| &tree.slot(id).value)
    }
}
