use search_tree::{Node, Tree};

use std::collections::HashSet;

/// Inserts every value, alternating between the iterative and recursive inserts.
fn mixed_tree(xs: &[i8]) -> Tree<i8> {
    let mut tree = Tree::new();
    for (i, x) in xs.iter().enumerate() {
        if i % 2 == 0 {
            tree.insert(*x);
        } else {
            tree.insert_recursively(*x);
        }
    }
    tree
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree = mixed_tree(&xs);

    xs.iter()
        .all(|x| tree.find(x).map(Node::value) == Some(x) && tree.find_recursively(x).is_some())
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree = mixed_tree(&xs);
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| tree.find(x).is_none() && tree.find_recursively(x).is_none())
}

#[quickcheck]
fn empty_tree_finds_nothing(x: i8) -> bool {
    let tree = Tree::new();

    tree.find(&x).is_none() && tree.find_recursively(&x).is_none()
}

#[quickcheck]
fn insert_then_find(xs: Vec<i8>, x: i8) -> bool {
    let mut tree = mixed_tree(&xs);
    tree.insert(x);

    tree.find(&x).map(Node::value) == Some(&x)
}

#[quickcheck]
fn iterative_and_recursive_build_the_same_tree(xs: Vec<i8>) -> bool {
    let mut iterative = Tree::new();
    let mut recursive = Tree::new();
    for x in &xs {
        iterative.insert(*x);
        recursive.insert_recursively(*x);
    }

    iterative == recursive && iterative.len() == xs.len()
}

#[quickcheck]
fn ties_go_right(xs: Vec<i8>, x: i8) -> bool {
    let mut tree = mixed_tree(&xs);
    tree.insert(x).insert(x);

    // The shallowest copy of `x` has another copy somewhere in its right subtree and none in
    // its left.
    let first = tree.find(&x).unwrap();
    let left_has_copy = first.left().map_or(false, |n| n.find_recursively(&x).is_some());
    let right_has_copy = first.right().map_or(false, |n| n.find_recursively(&x).is_some());

    !left_has_copy && right_has_copy
}

#[quickcheck]
fn removing_everything_empties_the_tree(xs: Vec<i8>) -> bool {
    let mut tree = mixed_tree(&xs);

    let all_removed = xs.iter().all(|x| tree.remove(x) == Some(*x));
    all_removed && tree.is_empty() && tree.bfs().is_empty()
}

#[quickcheck]
fn balance_matches_subtree_heights(xs: Vec<i8>) -> bool {
    fn balanced(node: Option<&Node<i8>>) -> bool {
        match node {
            None => true,
            Some(n) => {
                let left = n.left().map_or(0, Node::height);
                let right = n.right().map_or(0, Node::height);
                left.abs_diff(right) <= 1 && balanced(n.left()) && balanced(n.right())
            }
        }
    }

    let tree = mixed_tree(&xs);
    tree.is_balanced() == balanced(tree.root())
}
