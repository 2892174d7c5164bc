use std::collections::BTreeMap;

use scapegoat::{Error, Node, ScapegoatTree};

use crate::{ordered_values, pick_alpha, Op};

fn leaf(value: i32) -> Option<Node<i32>> {
    Some(Node::new(value))
}

fn branch(value: i32, left: Option<Node<i32>>, right: Option<Node<i32>>) -> Option<Node<i32>> {
    let mut node = Node::new(value);
    node.set_left(left);
    node.set_right(right);
    Some(node)
}

#[test]
fn rebuild_on_sixth_insert() {
    let mut tree = ScapegoatTree::new(5, 0.5).unwrap();
    for value in [6, 3, 7, 1, 2] {
        tree.insert(value);
    }

    assert_eq!(tree.len(), 6);
    assert!(tree.contains(&2));
    assert!(!tree.contains(&-1));
    assert_eq!(tree.to_sorted_vec(), vec![1, 2, 3, 5, 6, 7]);
    assert_eq!(
        Some(tree.root().clone()),
        branch(5, branch(2, leaf(1), leaf(3)), branch(6, None, leaf(7)))
    );
}

#[test]
fn removing_root_keeps_other_child() {
    let mut tree = ScapegoatTree::new(1, 0.5).unwrap();
    tree.insert(2);
    tree.remove(&1).unwrap();

    assert_eq!(tree.root(), &Node::new(2));
}

#[test]
fn failed_removes_leave_tree_alone() {
    let mut tree = ScapegoatTree::new(3, 0.75).unwrap();
    tree.insert(1);
    tree.insert(2);
    let before = tree.clone();

    assert_eq!(tree.remove(&0), Err(Error::NotFound));
    assert_eq!(tree.root(), before.root());
    assert_eq!(tree.len(), before.len());

    tree.remove(&1).unwrap();
    tree.remove(&2).unwrap();
    assert_eq!(tree.remove(&3), Err(Error::LastElement));
    assert_eq!(tree.root(), &Node::new(3));
}

#[test]
#[ignore = "slow: about a hundred thousand inserts and removes"]
fn insert_then_remove_a_hundred_thousand() {
    let mut tree = ScapegoatTree::new(0, 0.5).unwrap();
    for value in 1..100_000 {
        tree.insert(value);
    }
    for value in 1..100_000 {
        assert_eq!(tree.remove(&value), Ok(value));
    }

    assert_eq!(tree.root(), &Node::new(0));
    assert_eq!(tree.to_sorted_vec(), vec![0]);
}

quickcheck::quickcheck! {
    fn matches_multiset(seed: i8, alpha: u8, ops: Vec<Op>) -> bool {
        let mut tree = ScapegoatTree::new(seed, pick_alpha(alpha)).unwrap();
        let mut counts = BTreeMap::new();
        counts.insert(seed, 1usize);

        for op in ops {
            match op {
                Op::Insert(x) => {
                    tree.insert(x);
                    *counts.entry(x).or_insert(0) += 1;
                }
                Op::Remove(x) => match tree.remove(&x) {
                    Ok(removed) => {
                        assert_eq!(removed, x);
                        let count = counts.get_mut(&x).unwrap();
                        *count -= 1;
                        if *count == 0 {
                            counts.remove(&x);
                        }
                    }
                    Err(Error::NotFound) => assert!(!counts.contains_key(&x)),
                    Err(Error::LastElement) => assert_eq!(tree.len(), 1),
                    Err(e) => panic!("unexpected error {}", e),
                },
            }

            let mut values = Vec::new();
            ordered_values(tree.root(), false, &mut values);
            assert_eq!(values.len(), tree.len());
            assert!(tree.height() <= tree.alpha().height_bound(tree.max_size()));
        }

        let expected = counts
            .iter()
            .flat_map(|(x, &count)| std::iter::repeat(*x).take(count))
            .collect::<Vec<_>>();
        tree.into_sorted_vec() == expected
    }
}
