use ntree::prelude::*;
use proptest::collection::vec;
use proptest::prelude::*;

/// Grow a tree by pushing each value onto the node picked (in pre-order) by
/// the accompanying index.
fn build(root: i32, ops: &[(usize, i32)]) -> Tree<i32> {
    let mut tree = Tree::from_value(root);
    for &(pick, value) in ops {
        let ids: Vec<NodeId> = tree.walk(TraversalOrder::PreOrder).collect();
        let target = ids[pick % ids.len()];
        tree.node_mut(target).unwrap().push(value);
    }
    tree
}

fn arb_tree() -> impl Strategy<Value = Tree<i32>> {
    (-100i32..100, vec((any::<usize>(), -100i32..100), 0..48))
        .prop_map(|(root, ops)| build(root, &ops))
}

proptest! {
    #[test]
    fn test_size_matches_flat_sequences(tree in arb_tree()) {
        let size = tree.size();
        prop_assert_eq!(size, tree.to_vec().len());
        prop_assert_eq!(size, tree.to_vec_bfs().len());
        prop_assert_eq!(size, tree.len());
    }

    #[test]
    fn test_levels_match_height(tree in arb_tree()) {
        let height = tree.height();
        let reachable = (0..=tree.size())
            .filter(|&depth| tree.to_vec_generation(depth).is_ok())
            .count();
        prop_assert_eq!(reachable, height + 1);

        let deepest: Vec<NodeId> = tree.walk_generation(height).unwrap().collect();
        prop_assert!(!deepest.is_empty());
        for id in deepest {
            prop_assert_eq!(tree.node(id).unwrap().child_count(), 0);
        }
    }

    #[test]
    fn test_levels_concatenate_to_breadth_first(tree in arb_tree()) {
        let mut levels = Vec::new();
        for depth in 0..=tree.height() {
            levels.extend(tree.to_vec_generation(depth).unwrap());
        }
        prop_assert_eq!(levels, tree.to_vec_bfs());
    }

    #[test]
    fn test_generation_increments_per_level(tree in arb_tree()) {
        prop_assert_eq!(tree.generation(), 1);
        for id in tree.walk(TraversalOrder::BreadthFirst) {
            let node = tree.node(id).unwrap();
            for child in node.children() {
                prop_assert_eq!(child.generation(), node.generation() + 1);
            }
        }
    }

    #[test]
    fn test_push_then_pop_restores(
        tree in arb_tree(),
        pick in any::<usize>(),
        value in -100i32..100,
        repeat in 0usize..6,
    ) {
        let mut tree = tree;
        let before = tree.clone();
        let ids: Vec<NodeId> = tree.walk(TraversalOrder::PreOrder).collect();
        let target = ids[pick % ids.len()];

        tree.node_mut(target).unwrap().push_n(value, repeat);
        prop_assert_eq!(tree.size(), before.size() + repeat);
        tree.node_mut(target).unwrap().pop_n(repeat).unwrap();

        prop_assert_eq!(tree.size(), before.size());
        prop_assert_eq!(tree.height(), before.height());
        prop_assert_eq!(tree.to_vec(), before.to_vec());
        prop_assert_eq!(tree, before);
    }

    #[test]
    fn test_all_is_not_once_not(tree in arb_tree(), threshold in -100i32..100) {
        let all = tree.all_has_property(|v| *v > threshold);
        let once_not = tree.once_has_property(|v| !(*v > threshold));
        prop_assert_eq!(all, !once_not);
    }

    #[test]
    fn test_first_and_last_follow_breadth_first(tree in arb_tree(), threshold in -100i32..100) {
        let matches: Vec<i32> = tree
            .to_vec_bfs()
            .into_iter()
            .filter(|v| *v > threshold)
            .collect();
        let first = tree.first_has_property(|v| *v > threshold).ok().copied();
        let last = tree.last_has_property(|v| *v > threshold).ok().copied();
        prop_assert_eq!(first, matches.first().copied());
        prop_assert_eq!(last, matches.last().copied());
    }

    #[test]
    fn test_get_most_is_extremum(tree in arb_tree()) {
        let values = tree.to_vec();
        prop_assert_eq!(tree.get_most(|a, b| a > b).copied(), values.iter().max().copied());
        prop_assert_eq!(tree.get_most(|a, b| a < b).copied(), values.iter().min().copied());
    }

    #[test]
    fn test_clear_any_child_keeps_parents_consistent(tree in arb_tree(), pick in any::<usize>()) {
        let mut tree = tree;
        let ids: Vec<NodeId> = tree.walk(TraversalOrder::PreOrder).skip(1).collect();
        prop_assume!(!ids.is_empty());
        let target = ids[pick % ids.len()];
        let removed = tree.node(target).unwrap().size();
        let before = tree.size();

        tree.node_mut(target).unwrap().clear();

        prop_assert_eq!(tree.size(), before - removed);
        prop_assert_eq!(tree.len(), tree.size());
        for id in tree.walk(TraversalOrder::PreOrder) {
            let node = tree.node(id).unwrap();
            prop_assert!(!node.is_empty());
            for child in node.children() {
                prop_assert_eq!(child.parent().unwrap().id(), Some(id));
            }
        }
    }
}
