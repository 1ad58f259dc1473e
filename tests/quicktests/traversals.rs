use search_tree::{Node, Tree};

use std::collections::HashSet;

fn tree_of(xs: &[i8]) -> Tree<i8> {
    xs.iter().copied().collect()
}

#[quickcheck]
fn in_order_is_sorted(xs: Vec<i8>) -> bool {
    let tree = tree_of(&xs);

    tree.dfs_in_order().windows(2).all(|w| w[0] <= w[1])
}

#[quickcheck]
fn walks_visit_every_value_once(xs: Vec<i8>) -> bool {
    let tree = tree_of(&xs);
    let n = xs.len();

    tree.dfs_pre_order().len() == n
        && tree.dfs_in_order().len() == n
        && tree.dfs_post_order().len() == n
        && tree.bfs().len() == n
}

#[quickcheck]
fn bfs_visits_parents_before_children(xs: Vec<i8>) -> bool {
    // Distinct values so a value's position identifies its node.
    let mut seen = HashSet::new();
    let xs: Vec<_> = xs.into_iter().filter(|x| seen.insert(*x)).collect();
    let tree = tree_of(&xs);
    let order = tree.bfs();
    let position = |node: &Node<i8>| order.iter().position(|v| *v == node.value());

    let mut stack: Vec<&Node<i8>> = tree.root().into_iter().collect();
    let mut ok = order.first().copied() == tree.root().map(Node::value);
    while let Some(node) = stack.pop() {
        for child in node.left().into_iter().chain(node.right()) {
            ok &= position(node) < position(child);
            stack.push(child);
        }
    }
    ok
}

#[quickcheck]
fn bfs_is_level_by_level(xs: Vec<i8>) -> bool {
    fn depths(node: &Node<i8>, depth: usize, out: &mut Vec<(usize, i8)>) {
        out.push((depth, *node.value()));
        for child in node.left().into_iter().chain(node.right()) {
            depths(child, depth + 1, out);
        }
    }

    let mut seen = HashSet::new();
    let xs: Vec<_> = xs.into_iter().filter(|x| seen.insert(*x)).collect();
    let tree = tree_of(&xs);
    let mut by_depth = Vec::new();
    if let Some(root) = tree.root() {
        depths(root, 0, &mut by_depth);
    }

    let order = tree.bfs();
    let depth_of = |v: &i8| by_depth.iter().find(|(_, x)| x == v).map(|(d, _)| *d);
    order.windows(2).all(|w| depth_of(w[0]) <= depth_of(w[1]))
}

#[quickcheck]
fn lazy_walks_match(xs: Vec<i8>) -> bool {
    let tree = tree_of(&xs);

    tree.iter_pre_order().eq(tree.dfs_pre_order())
        && tree.iter().eq(tree.dfs_in_order())
        && tree.iter_post_order().eq(tree.dfs_post_order())
        && tree.iter_level_order().eq(tree.bfs())
}

#[test]
fn example_scenario() {
    let tree = tree_of(&[10, 5, 15, 2, 7]);

    assert_eq!(tree.dfs_in_order(), [&2, &5, &7, &10, &15]);
    assert_eq!(tree.dfs_pre_order(), [&10, &5, &2, &7, &15]);
    assert_eq!(tree.dfs_post_order(), [&2, &7, &5, &15, &10]);
    assert_eq!(tree.bfs(), [&10, &5, &15, &2, &7]);
}

#[test]
fn empty_scenario() {
    let tree = Tree::<i32>::new();

    assert!(tree.dfs_in_order().is_empty());
    assert!(tree.dfs_pre_order().is_empty());
    assert!(tree.dfs_post_order().is_empty());
    assert!(tree.bfs().is_empty());
    assert!(tree.find(&42).is_none());
}

#[test]
fn duplicate_scenario() {
    let tree = tree_of(&[5, 5]);

    let first = tree.find(&5).expect("5 was inserted");
    assert_eq!(tree.dfs_in_order(), [&5, &5]);
    assert_eq!(first.right().map(Node::value), Some(&5));
    assert!(first.left().is_none());
}
