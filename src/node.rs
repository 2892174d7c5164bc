//! A single cell of a scapegoat tree.
//!
//! Nodes only store a value and own their two children. They don't track their weight, their
//! height or their parent. Everything that needs to walk back up the tree (insertion, deletion)
//! records the path it took on the way down as a list of [`Side`]s instead.

use std::cmp::Ordering;

/// An owned, possibly empty, subtree.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// Which child of a node a path goes through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Side {
    Left,
    Right,
}

impl Side {
    /// The side `value` belongs on below a node holding `pivot`. Ties go left.
    pub(crate) fn towards<T: Ord>(value: &T, pivot: &T) -> Self {
        if value <= pivot {
            Self::Left
        } else {
            Self::Right
        }
    }

    pub(crate) fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// A `Node` holds a value that never changes after construction and owns up to two children.
///
/// Equality is structural: two nodes are equal when their values are equal and both their left
/// and right subtrees are equal.
///
/// # Examples
///
/// ```
/// use scapegoat::Node;
///
/// let mut root = Node::new(2);
/// root.set_left(Some(Node::new(1)));
/// root.set_right(Some(Node::new(3)));
///
/// assert_eq!(root.weight(), 3);
/// assert_eq!(root.left().map(Node::value), Some(&1));
///
/// let mut same = Node::new(2);
/// same.set_right(Some(Node::new(3)));
/// assert_ne!(root, same);
///
/// same.set_left(Some(Node::new(1)));
/// assert_eq!(root, same);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Node<T> {
    value: T,
    left: Link<T>,
    right: Link<T>,
}

impl<T> Node<T> {
    /// Creates a leaf holding `value`.
    pub fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    /// The value stored in this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The left child, holding values no greater than this node's.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The right child, holding values no smaller than this node's.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Replaces the left child and returns the one that was there.
    pub fn set_left(&mut self, child: Option<Self>) -> Option<Self> {
        std::mem::replace(&mut self.left, child.map(Box::new)).map(|old| *old)
    }

    /// Replaces the right child and returns the one that was there.
    pub fn set_right(&mut self, child: Option<Self>) -> Option<Self> {
        std::mem::replace(&mut self.right, child.map(Box::new)).map(|old| *old)
    }

    /// Detaches the left child and returns it.
    pub fn take_left(&mut self) -> Option<Self> {
        self.set_left(None)
    }

    /// Detaches the right child and returns it.
    pub fn take_right(&mut self) -> Option<Self> {
        self.set_right(None)
    }

    /// Number of nodes in the subtree rooted here, this one included. This isn't cached so it
    /// costs a walk over the whole subtree.
    pub fn weight(&self) -> usize {
        let mut pending = vec![self];
        let mut weight = 0;
        while let Some(node) = pending.pop() {
            weight += 1;
            pending.extend(node.left());
            pending.extend(node.right());
        }
        weight
    }

    /// Number of nodes on the longest path from here down to a leaf.
    pub fn height(&self) -> usize {
        let mut pending = vec![(self, 1)];
        let mut height = 0;
        while let Some((node, depth)) = pending.pop() {
            height = height.max(depth);
            pending.extend(node.left().map(|child| (child, depth + 1)));
            pending.extend(node.right().map(|child| (child, depth + 1)));
        }
        height
    }

    pub(crate) fn child(&self, side: Side) -> &Link<T> {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    pub(crate) fn child_mut(&mut self, side: Side) -> &mut Link<T> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    /// Finds the first node on the search path holding a value equal to `value`.
    pub(crate) fn find(&self, value: &T) -> Option<&Self>
    where
        T: Ord,
    {
        let mut node = self;
        loop {
            let next = match value.cmp(&node.value) {
                Ordering::Equal => return Some(node),
                Ordering::Less => node.left(),
                Ordering::Greater => node.right(),
            };
            node = next?;
        }
    }

    /// Like [`Node::find`] but returns the sides taken from this node to reach the match.
    pub(crate) fn path_to(&self, value: &T, path: &mut Vec<Side>) -> bool
    where
        T: Ord,
    {
        let mut node = self;
        loop {
            let side = match value.cmp(&node.value) {
                Ordering::Equal => return true,
                Ordering::Less => Side::Left,
                Ordering::Greater => Side::Right,
            };

            match node.child(side).as_deref() {
                Some(child) => {
                    path.push(side);
                    node = child;
                }
                None => return false,
            }
        }
    }

    /// Hangs a new leaf holding `value` in the first free slot along its search path and records
    /// the sides taken to get there.
    pub(crate) fn insert(&mut self, value: T, path: &mut Vec<Side>)
    where
        T: Ord,
    {
        let side = Side::towards(&value, &self.value);
        path.push(side);

        let mut slot = self.child_mut(side);
        while let Some(node) = slot {
            let side = Side::towards(&value, &node.value);
            path.push(side);
            slot = node.child_mut(side);
        }
        *slot = Some(Box::new(Self::new(value)));
    }

    /// Moves every value of this subtree into `out` in sorted order, consuming the nodes. This
    /// node's own value is handed back instead of pushed when `keep_self` is unset.
    pub(crate) fn drain_in_order(self: Box<Self>, keep_self: bool, out: &mut Vec<T>) -> Option<T> {
        let Self { value, left, right } = *self;

        drain(left, out);
        let skipped = if keep_self {
            out.push(value);
            None
        } else {
            Some(value)
        };
        drain(right, out);

        skipped
    }

    /// Builds a perfectly balanced subtree out of the next `len` sorted values.
    ///
    /// The lower median `(len - 1) / 2` becomes the root, the values before it the left subtree
    /// and the values after it the right subtree. Values are pulled from `values` in order so
    /// nothing has to be split or copied.
    pub(crate) fn build(len: usize, values: &mut impl Iterator<Item = T>) -> Link<T> {
        if len == 0 {
            return None;
        }

        let median = (len - 1) / 2;
        let left = Self::build(median, &mut *values);
        let value = values.next()?;
        let right = Self::build(len - median - 1, &mut *values);

        Some(Box::new(Self { value, left, right }))
    }
}

/// Weight of a possibly empty subtree.
pub(crate) fn weight<T>(link: &Link<T>) -> usize {
    link.as_ref().map_or(0, |n| n.weight())
}

/// Moves the values of a subtree into `out` in sorted order without recursing, so even a subtree
/// that degenerated into a list is fine.
fn drain<T>(mut link: Link<T>, out: &mut Vec<T>) {
    let mut spine = Vec::new();
    loop {
        while let Some(mut node) = link {
            link = node.left.take();
            spine.push(node);
        }

        match spine.pop() {
            Some(node) => {
                let Node { value, right, .. } = *node;
                out.push(value);
                link = right;
            }
            None => return,
        }
    }
}

/// Deep copy of a subtree, one node at a time.
pub(crate) fn clone_link<T: Clone>(link: &Link<T>) -> Link<T> {
    enum Step<'a, T> {
        Visit(Option<&'a Node<T>>),
        Join(&'a Node<T>),
    }

    let mut steps = vec![Step::Visit(link.as_deref())];
    let mut copies: Vec<Link<T>> = Vec::new();
    while let Some(step) = steps.pop() {
        match step {
            Step::Visit(None) => copies.push(None),
            Step::Visit(Some(node)) => {
                steps.push(Step::Join(node));
                steps.push(Step::Visit(node.right()));
                steps.push(Step::Visit(node.left()));
            }
            Step::Join(node) => {
                let right = copies.pop().flatten();
                let left = copies.pop().flatten();
                copies.push(Some(Box::new(Node {
                    value: node.value.clone(),
                    left,
                    right,
                })));
            }
        }
    }

    copies.pop().flatten()
}

/// Drops a subtree one node at a time. Dropping a `Box<Node>` directly recurses once per level.
pub(crate) fn dismantle<T>(link: Link<T>) {
    let mut pending: Vec<Box<Node<T>>> = link.into_iter().collect();
    while let Some(mut node) = pending.pop() {
        pending.extend(node.left.take());
        pending.extend(node.right.take());
    }
}
