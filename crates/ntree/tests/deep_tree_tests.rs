use ntree::prelude::*;
use pretty_assertions::assert_eq;

const DEPTH: usize = 200_000;

/// 0 -> [1 -> [2 -> [...]]], `len` nodes in a single chain
fn chain(len: usize) -> Tree<usize> {
    let mut tree = Tree::from_value(0);
    let mut last = tree.root_id().unwrap();
    for i in 1..len {
        let mut node = tree.node_mut(last).unwrap();
        node.push(i);
        last = node.child_ids()[0];
    }
    tree
}

#[test]
fn test_deep_chain_structure() {
    let tree = chain(DEPTH);

    assert_eq!(tree.size(), DEPTH);
    assert_eq!(tree.len(), DEPTH);
    assert_eq!(tree.height(), DEPTH - 1);
    assert_eq!(tree.child(0).unwrap().height(), DEPTH - 2);

    let deepest = tree.walk(TraversalOrder::PreOrder).last().unwrap();
    let leaf = tree.node(deepest).unwrap();
    assert!(leaf.is_leaf());
    assert_eq!(leaf.generation(), DEPTH);
    assert_eq!(leaf.value(), Some(&(DEPTH - 1)));
}

#[test]
fn test_deep_chain_generations() {
    let tree = chain(DEPTH);

    assert_eq!(tree.to_vec_generation(5).unwrap(), vec![5]);
    assert_eq!(tree.to_vec_generation(DEPTH - 1).unwrap(), vec![DEPTH - 1]);
    assert_eq!(
        tree.to_vec_generation(DEPTH).unwrap_err(),
        TreeError::DepthOutOfRange {
            depth: DEPTH,
            levels: DEPTH
        }
    );

    let mut seen = Vec::new();
    tree.for_each_generation(7, |v| seen.push(*v)).unwrap();
    assert_eq!(seen, vec![7]);
    assert_eq!(tree.iter_generation(DEPTH / 2).unwrap().count(), 1);
}

#[test]
fn test_deep_chain_nested_text() {
    let tree = chain(DEPTH);
    let text = tree.to_string();

    assert!(text.starts_with("0 : [1 : [2 : [3"));
    assert!(text.ends_with(&format!("{} : [{}]]]", DEPTH - 2, DEPTH - 1)));
    assert_eq!(text.matches('[').count(), DEPTH - 1);
    assert_eq!(text.matches(']').count(), DEPTH - 1);
}

#[test]
fn test_deep_chain_equality_and_clear() {
    let mut tree = chain(DEPTH);
    let copy = tree.clone();
    assert_eq!(tree, copy);
    assert_eq!(tree.root(), copy.root());

    let deepest = tree.walk(TraversalOrder::PreOrder).last().unwrap();
    tree.node_mut(deepest).unwrap().push(DEPTH);
    assert_ne!(tree, copy);
    assert_eq!(tree.height(), DEPTH);

    tree.child_mut(0).unwrap().clear();
    assert_eq!(tree.to_vec(), vec![0]);
    assert_eq!(tree.len(), 1);
}
