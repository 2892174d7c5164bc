//! This crate exposes a scapegoat tree, a Binary Search Tree (BST) that keeps
//! itself balanced by rebuilding whole subtrees every now and then instead of
//! rotating nodes on every change.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored values. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a value and
//! sometimes has child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value no greater than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value no smaller than its own value.
//!
//! Searching takes `O(height)`, so everything depends on keeping the height
//! close to `lg N` where `N` is the number of nodes in the tree.
//!
//! ## Scapegoat trees
//!
//! A scapegoat tree doesn't store any balance information in its nodes. It
//! only remembers a balance coefficient `alpha` in `[0.5, 1.0)`, its size, and
//! the largest size it reached since it was last rebuilt from the root.
//!
//! - After an insertion the ancestors of the new leaf are weighed from the
//!   bottom up. The first one with a child weighing more than `alpha` times its
//!   own weight is the _scapegoat_ and its whole subtree is rebuilt into a
//!   perfectly balanced one.
//! - A removal rebuilds the subtree rooted at the removed node without it. When
//!   the tree has shrunk below `alpha` times its peak size the whole tree is
//!   rebuilt.
//!
//! Rebuilding a subtree costs time linear in its size but happens rarely
//! enough to add only `O(lg N)` amortized time to each insert and remove.
//! Finding the scapegoat is another matter: it weighs the subtree on the far
//! side of every ancestor of the new leaf, so an insert can take time linear
//! in the size of the tree even when nothing is rebuilt.
//!
//! The height never exceeds `log_{1/alpha}(M) + 1`, where `M` is the peak
//! size of the tree since it was last rebuilt from the root. Removals can
//! leave the tree well below that peak before the next full rebuild.
//!
//! ```
//! use scapegoat::ScapegoatTree;
//!
//! let mut tree = ScapegoatTree::new(0, 0.5).unwrap();
//! for value in 1..1000 {
//!     tree.insert(value);
//! }
//!
//! // Ascending inserts would make a plain BST 1000 levels deep.
//! assert!(tree.height() <= tree.alpha().height_bound(tree.max_size()));
//! ```
//!
//! [`ScapegoatTree`] always holds at least one value. [`ScapegoatSet`] wraps
//! it into an ordered set that can be empty and ignores duplicates.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod alpha;
mod error;
mod iter;
mod node;
mod set;
mod tree;


pub use alpha::Alpha;
pub use error::{Error, Result};
pub use iter::{IntoIter, Iter};
pub use node::Node;
pub use set::ScapegoatSet;
pub use tree::ScapegoatTree;
