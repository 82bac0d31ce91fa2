//! Nested text rendering
//!
//! A branch renders as `value : [child, child, ...]`, a singleton as its bare
//! value, an empty tree as nothing at all.

use std::fmt::{self, Write};

use crate::tree::arena::Tree;
use crate::tree::handle::NodeRef;
use crate::tree::node::NodeId;
use crate::tree::traits::TreeView;

enum Step {
    Node(NodeId),
    Separator,
    Close,
}

fn write_nested<T, W>(out: &mut W, tree: &Tree<T>, id: NodeId) -> fmt::Result
where
    T: fmt::Display,
    W: Write,
{
    let mut pending = vec![Step::Node(id)];
    while let Some(step) = pending.pop() {
        match step {
            Step::Node(id) => {
                let slot = tree.slot(id);
                write!(out, "{}", slot.value)?;
                if slot.children.is_empty() {
                    continue;
                }
                out.write_str(" : [")?;
                pending.push(Step::Close);
                for (i, &child) in slot.children.iter().enumerate().rev() {
                    pending.push(Step::Node(child));
                    if i > 0 {
                        pending.push(Step::Separator);
                    }
                }
            }
            Step::Separator => out.write_str(", ")?,
            Step::Close => out.write_char(']')?,
        }
    }
    Ok(())
}

impl<T: fmt::Display> fmt::Display for NodeRef<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.anchor() {
            Some(id) => write_nested(f, self.tree(), id),
            None => Ok(()),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Tree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.root(), f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::traits::TreeTraversal;

    #[test]
    fn test_render_states() {
        let mut tree: Tree<i32> = Tree::new();
        assert_eq!(tree.to_string(), "");

        tree.push(1);
        assert_eq!(tree.to_string(), "1");

        tree.push(2);
        tree.push(3);
        assert_eq!(tree.to_string(), "1 : [2, 3]");
    }

    #[test]
    fn test_render_nested_branches() {
        let mut tree = Tree::from_value("a");
        tree.push("b");
        tree.push("c");
        tree.child_mut(0).unwrap().push("d");
        tree.child_mut(1).unwrap().push("e");
        tree.child_mut(1).unwrap().push("f");
        assert_eq!(tree.to_nested_string(), "a : [b : [d], c : [e, f]]");
        assert_eq!(tree.child(1).unwrap().to_nested_string(), "c : [e, f]");
    }
}
