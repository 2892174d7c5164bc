//! Property tests for the public API, checked against the standard library collections.

use quickcheck::{Arbitrary, Gen};
use scapegoat::Node;

mod set;
mod tree;

/// Balance coefficients quicktests pick from, strictest first.
const ALPHAS: [f64; 5] = [0.5, 0.6, 0.75, 0.9, 0.99];

fn pick_alpha(index: u8) -> f64 {
    ALPHAS[index as usize % ALPHAS.len()]
}

/// An enum for the various kinds of "things" to do to
/// scapegoat trees and sets in a quicktest.
#[derive(Copy, Clone, Debug)]
enum Op {
    /// Insert the value into the data structure
    Insert(i8),
    /// Remove the value from the data structure
    Remove(i8),
}

impl Arbitrary for Op {
    /// Values are kept small so removes and duplicates actually hit something.
    fn arbitrary(g: &mut Gen) -> Self {
        let value = i8::arbitrary(g) % 16;
        if bool::arbitrary(g) {
            Op::Insert(value)
        } else {
            Op::Remove(value)
        }
    }
}

/// Collects every value of a subtree, checking on the way that it's in BST order. With
/// `strict` set equal values aren't allowed on either side.
fn ordered_values<'a>(node: &'a Node<i8>, strict: bool, out: &mut Vec<&'a i8>) {
    if let Some(left) = node.left() {
        ordered_values(left, strict, out);
    }
    if let Some(last) = out.last() {
        if strict {
            assert!(*last < node.value(), "{} not below {}", last, node.value());
        } else {
            assert!(*last <= node.value(), "{} above {}", last, node.value());
        }
    }
    out.push(node.value());
    if let Some(right) = node.right() {
        ordered_values(right, strict, out);
    }
}
