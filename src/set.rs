//! An ordered set on top of [`ScapegoatTree`].
//!
//! # Examples
//!
//! ```
//! use scapegoat::ScapegoatSet;
//!
//! let mut set = ScapegoatSet::new(0.5).unwrap();
//! assert!(set.is_empty());
//!
//! assert!(set.insert(3));
//! assert!(set.insert(1));
//! assert!(!set.insert(3));
//! assert_eq!(set.to_vec(), vec![1, 3]);
//!
//! assert!(set.remove(&1));
//! assert!(set.remove(&3));
//! assert!(set.is_empty());
//! ```

use std::fmt;

use crate::alpha::Alpha;
use crate::error::{Error, Result};
use crate::iter::{IntoIter, Iter};
use crate::tree::ScapegoatTree;

/// A set of distinct values kept in ascending order.
///
/// Unlike a bare [`ScapegoatTree`] the set may be empty. Removing its last value drops the tree
/// and the next insertion seeds a new one with the same `alpha`.
#[derive(Clone)]
pub struct ScapegoatSet<T> {
    tree: Option<ScapegoatTree<T>>,
    alpha: Alpha,
}

impl<T> ScapegoatSet<T> {
    /// Creates an empty set. Fails if `alpha` isn't in `[0.5, 1.0)`.
    pub fn new(alpha: f64) -> Result<Self> {
        Ok(Self::with_alpha(Alpha::new(alpha)?))
    }

    /// Creates an empty set with an already validated `alpha`.
    pub fn with_alpha(alpha: Alpha) -> Self {
        Self { tree: None, alpha }
    }

    /// The balance coefficient of the underlying tree.
    pub fn alpha(&self) -> Alpha {
        self.alpha
    }

    /// Number of values in the set.
    pub fn len(&self) -> usize {
        self.tree.as_ref().map_or(0, ScapegoatTree::len)
    }

    /// Whether the set holds no values.
    pub fn is_empty(&self) -> bool {
        self.tree.is_none()
    }

    /// Removes every value.
    pub fn clear(&mut self) {
        self.tree = None;
    }

    /// The underlying tree, if the set isn't empty.
    pub fn tree(&self) -> Option<&ScapegoatTree<T>> {
        self.tree.as_ref()
    }

    /// Whether `value` is in the set.
    pub fn contains(&self, value: &T) -> bool
    where
        T: Ord,
    {
        self.tree.as_ref().map_or(false, |tree| tree.contains(value))
    }

    /// Whether every one of `values` is in the set.
    pub fn contains_all<'a, I>(&self, values: I) -> bool
    where
        I: IntoIterator<Item = &'a T>,
        T: Ord + 'a,
    {
        values.into_iter().all(|value| self.contains(value))
    }

    /// Adds `value` unless an equal one is already present. Returns whether it was added.
    pub fn insert(&mut self, value: T) -> bool
    where
        T: Ord,
    {
        match self.tree.as_mut() {
            Some(tree) if tree.contains(&value) => false,
            Some(tree) => {
                tree.insert(value);
                true
            }
            None => {
                self.tree = Some(ScapegoatTree::with_alpha(value, self.alpha));
                true
            }
        }
    }

    /// Removes `value` if present. Returns whether it was there.
    pub fn remove(&mut self, value: &T) -> bool
    where
        T: Ord,
    {
        let tree = match self.tree.as_mut() {
            Some(tree) => tree,
            None => return false,
        };

        match tree.remove(value) {
            Ok(_) => true,
            Err(Error::LastElement) => {
                self.tree = None;
                true
            }
            Err(_) => false,
        }
    }

    /// Removes each of `values`. Returns whether anything was removed.
    pub fn remove_all<'a, I>(&mut self, values: I) -> bool
    where
        I: IntoIterator<Item = &'a T>,
        T: Ord + 'a,
    {
        values
            .into_iter()
            .fold(false, |changed, value| self.remove(value) || changed)
    }

    /// Keeps only the values `keep` returns `true` for.
    ///
    /// The surviving values are laid out as a freshly balanced tree in one pass rather than
    /// removed one by one.
    pub fn retain(&mut self, mut keep: impl FnMut(&T) -> bool) {
        if let Some(tree) = self.tree.take() {
            let kept = tree.into_iter().filter(|value| keep(value)).collect();
            self.tree = ScapegoatTree::from_sorted(kept, self.alpha);
        }
    }

    /// The values in ascending order.
    pub fn iter(&self) -> Iter<'_, T> {
        match &self.tree {
            Some(tree) => tree.iter(),
            None => Iter::new(None, 0),
        }
    }

    /// A copy of all values in ascending order.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }
}

impl<T> Extend<T> for ScapegoatSet<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, values: I) {
        for value in values {
            self.insert(value);
        }
    }
}

impl<T> PartialEq for ScapegoatSet<T>
where
    T: PartialEq,
{
    /// Two sets are equal when they hold the same values, whatever their `alpha` or shape.
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T> Eq for ScapegoatSet<T> where T: Eq {}

impl<T> fmt::Debug for ScapegoatSet<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<'a, T> IntoIterator for &'a ScapegoatSet<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T> IntoIterator for ScapegoatSet<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        match self.tree {
            Some(tree) => tree.into_iter(),
            None => IntoIter::new(Vec::new()),
        }
    }
}
