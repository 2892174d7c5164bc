//! The scapegoat tree itself.
//!
//! # Examples
//!
//! ```
//! use scapegoat::{Error, ScapegoatTree};
//!
//! let mut tree = ScapegoatTree::new(5, 0.5).unwrap();
//! for value in [6, 3, 7, 1, 2] {
//!     tree.insert(value);
//! }
//!
//! assert_eq!(tree.len(), 6);
//! assert!(tree.contains(&2));
//! assert!(!tree.contains(&-1));
//! assert_eq!(tree.to_sorted_vec(), vec![1, 2, 3, 5, 6, 7]);
//!
//! assert_eq!(tree.remove(&3), Ok(3));
//! assert_eq!(tree.remove(&3), Err(Error::NotFound));
//! ```

use std::fmt;

use tracing::{debug, trace};

use crate::alpha::Alpha;
use crate::error::{Error, Result};
use crate::iter::{IntoIter, Iter};
use crate::node::{self, Link, Node, Side};

/// A binary search tree that stays balanced by occasionally rebuilding whole subtrees instead of
/// rotating on every change.
///
/// After an insertion the ancestors of the new leaf are checked from the bottom up. The first one
/// with a child heavier than `alpha` times its own weight is the scapegoat, and its subtree is
/// rebuilt into a perfectly balanced one. A removal rebuilds the subtree of the removed node
/// without it, and when the tree has shrunk below `alpha` times its peak size since the last full
/// rebuild the whole tree is rebuilt.
///
/// This tree always holds at least one element: it is seeded on construction and refuses to
/// remove its last value. Use [`ScapegoatSet`][crate::ScapegoatSet] for a collection that can be
/// empty.
///
/// Duplicates are allowed. An equal value is inserted into the left subtree of the first equal
/// node on its search path.
pub struct ScapegoatTree<T> {
    /// Only ever `None` in the middle of rebuilding from the root.
    root: Link<T>,
    alpha: Alpha,
    len: usize,
    /// Largest `len` since the tree was last rebuilt from the root.
    max_size: usize,
}

#[allow(clippy::len_without_is_empty)]
impl<T> ScapegoatTree<T> {
    /// Creates a tree holding only `seed`. Fails if `alpha` isn't in `[0.5, 1.0)`.
    ///
    /// ```
    /// use scapegoat::{Error, ScapegoatTree};
    ///
    /// let tree = ScapegoatTree::new(1, 0.5).unwrap();
    /// assert_eq!(tree.len(), 1);
    ///
    /// assert_eq!(ScapegoatTree::new(1, 1.0).err(), Some(Error::InvalidAlpha(1.0)));
    /// ```
    pub fn new(seed: T, alpha: f64) -> Result<Self> {
        Ok(Self::with_alpha(seed, Alpha::new(alpha)?))
    }

    /// Creates a tree holding only `seed` with an already validated `alpha`.
    pub fn with_alpha(seed: T, alpha: Alpha) -> Self {
        Self {
            root: Some(Box::new(Node::new(seed))),
            alpha,
            len: 1,
            max_size: 1,
        }
    }

    /// Builds a perfectly balanced tree out of `values`, which must already be sorted. Returns
    /// `None` if there are no values.
    pub(crate) fn from_sorted(values: Vec<T>, alpha: Alpha) -> Option<Self> {
        let len = values.len();
        let root = Node::build(len, &mut values.into_iter())?;

        Some(Self {
            root: Some(root),
            alpha,
            len,
            max_size: len,
        })
    }

    /// The balance coefficient this tree was created with.
    pub fn alpha(&self) -> Alpha {
        self.alpha
    }

    /// Number of values in the tree. Never zero.
    pub fn len(&self) -> usize {
        self.len
    }

    /// The largest [`len`][Self::len] since the tree was last rebuilt from the root.
    pub fn max_size(&self) -> usize {
        self.max_size
    }

    /// Number of nodes on the longest path from the root to a leaf. This walks the whole tree.
    pub fn height(&self) -> usize {
        self.root().height()
    }

    /// The root of the tree, for inspecting its shape.
    ///
    /// ```
    /// use scapegoat::{Node, ScapegoatTree};
    ///
    /// let mut tree = ScapegoatTree::new(1, 0.5).unwrap();
    /// tree.insert(0);
    ///
    /// let mut expected = Node::new(1);
    /// expected.set_left(Some(Node::new(0)));
    /// assert_eq!(tree.root(), &expected);
    /// ```
    pub fn root(&self) -> &Node<T> {
        self.root.as_deref().expect("a scapegoat tree is never empty")
    }

    fn root_mut(&mut self) -> &mut Node<T> {
        self.root.as_deref_mut().expect("a scapegoat tree is never empty")
    }

    /// Whether some value in the tree equals `value`.
    pub fn contains(&self, value: &T) -> bool
    where
        T: Ord,
    {
        self.get(value).is_some()
    }

    /// The stored value equal to `value`, if any.
    pub fn get(&self, value: &T) -> Option<&T>
    where
        T: Ord,
    {
        self.root().find(value).map(Node::value)
    }

    /// Inserts `value`, rebuilding the subtree of the lowest unbalanced ancestor of the new leaf
    /// if there is one.
    ///
    /// Every ancestor of the new leaf is weighed, and that means walking the subtrees hanging off
    /// the other side of the path, so a single insert can visit most of the tree even when
    /// nothing gets rebuilt.
    pub fn insert(&mut self, value: T)
    where
        T: Ord,
    {
        let mut path = Vec::new();
        self.root_mut().insert(value, &mut path);

        self.len += 1;
        self.max_size = self.max_size.max(self.len);

        if let Some(depth) = self.find_scapegoat(&path) {
            Self::rebuild(self.slot_mut(&path[..depth]), true);
        }
    }

    /// Removes the first value found equal to `value` and returns it.
    ///
    /// The removed node's subtree is rebuilt without it. If that leaves the tree smaller than
    /// `alpha` times its peak size, the whole tree is rebuilt and the peak reset.
    ///
    /// Fails with [`Error::NotFound`] if no value matches and with [`Error::LastElement`] if it
    /// would empty the tree. The tree is unchanged in both cases.
    pub fn remove(&mut self, value: &T) -> Result<T>
    where
        T: Ord,
    {
        let mut path = Vec::new();
        if !self.root().path_to(value, &mut path) {
            return Err(Error::NotFound);
        }
        if self.len == 1 {
            return Err(Error::LastElement);
        }

        let removed = Self::rebuild(self.slot_mut(&path), false)
            .expect("the path leads to the value being removed");
        self.len -= 1;

        if self.alpha.is_underfull(self.len, self.max_size) {
            debug!(
                len = self.len,
                max_size = self.max_size,
                "tree shrank below alpha times its peak size, rebuilding from the root"
            );
            Self::rebuild(&mut self.root, true);
            self.max_size = self.len;
        }

        Ok(removed)
    }

    /// The values in ascending order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.root.as_deref(), self.len)
    }

    /// A copy of all values in ascending order.
    pub fn to_sorted_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// All values in ascending order, consuming the tree.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut values = Vec::with_capacity(self.len);
        if let Some(root) = self.root.take() {
            root.drain_in_order(true, &mut values);
        }
        values
    }

    /// Walks `path` back up from the leaf it ends at and returns the depth of the lowest ancestor
    /// with a child heavier than `alpha` allows.
    ///
    /// Only the sibling subtrees get weighed. The weight of the child on the path is the weight of
    /// the ancestor checked just before it.
    fn find_scapegoat(&self, path: &[Side]) -> Option<usize> {
        let mut ancestors = Vec::with_capacity(path.len());
        let mut current = self.root();
        for &side in path {
            ancestors.push(current);
            match current.child(side).as_deref() {
                Some(child) => current = child,
                None => break,
            }
        }

        let mut child_weight = 1;
        for (depth, (ancestor, &side)) in ancestors.iter().zip(path).enumerate().rev() {
            let sibling_weight = node::weight(ancestor.child(side.opposite()));
            let weight = 1 + child_weight + sibling_weight;

            if !self.alpha.allows(child_weight, weight) || !self.alpha.allows(sibling_weight, weight)
            {
                trace!(depth, weight, "found scapegoat");
                return Some(depth);
            }
            child_weight = weight;
        }

        None
    }

    /// The link holding the subtree at the end of `path`. Every step of `path` must lead to an
    /// existing node.
    fn slot_mut(&mut self, path: &[Side]) -> &mut Link<T> {
        let mut slot = &mut self.root;
        for &side in path {
            slot = slot
                .as_mut()
                .expect("ancestor paths only lead through existing nodes")
                .child_mut(side);
        }
        slot
    }

    /// Replaces the subtree in `slot` with a perfectly balanced one holding the same values. When
    /// `keep_root` is unset the subtree's root value is left out and returned instead.
    ///
    /// The new subtree goes back into the same link, so the parent never needs to be looked at.
    fn rebuild(slot: &mut Link<T>, keep_root: bool) -> Option<T> {
        let subtree = slot.take()?;

        let mut values = Vec::new();
        let removed = subtree.drain_in_order(keep_root, &mut values);
        trace!(weight = values.len(), keep_root, "rebuilding subtree");

        *slot = Node::build(values.len(), &mut values.into_iter());
        removed
    }
}

impl<T> Clone for ScapegoatTree<T>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        Self {
            root: node::clone_link(&self.root),
            alpha: self.alpha,
            len: self.len,
            max_size: self.max_size,
        }
    }
}

impl<T> Drop for ScapegoatTree<T> {
    fn drop(&mut self) {
        node::dismantle(self.root.take());
    }
}

impl<T> fmt::Debug for ScapegoatTree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScapegoatTree")
            .field("alpha", &self.alpha)
            .field("len", &self.len)
            .field("max_size", &self.max_size)
            .field("root", &self.root)
            .finish()
    }
}

impl<'a, T> IntoIterator for &'a ScapegoatTree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T> IntoIterator for ScapegoatTree<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter::new(self.into_sorted_vec())
    }
}
