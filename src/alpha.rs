//! The balance coefficient of a scapegoat tree.

use std::convert::TryFrom;
use std::fmt;

use crate::error::{Error, Result};

/// Slack for the logarithm in [`Alpha::height_bound`] so exact powers of `1 / alpha` don't round
/// down a level.
const LOG_EPSILON: f64 = 1e-9;

/// How unevenly a subtree may split its nodes between its two children, always in `[0.5, 1.0)`.
///
/// A node is balanced when neither child holds more than `alpha` times the node's own weight.
/// Smaller values keep the tree closer to perfectly balanced at the cost of rebuilding more often.
///
/// # Examples
///
/// ```
/// use scapegoat::Alpha;
///
/// let alpha = Alpha::new(0.7).unwrap();
/// assert_eq!(alpha.get(), 0.7);
///
/// assert!(Alpha::new(0.49).is_err());
/// assert!(Alpha::new(1.0).is_err());
/// ```
#[derive(Clone, Copy, PartialEq, PartialOrd)]
pub struct Alpha(f64);

impl Alpha {
    /// Validates `alpha`. `NaN` and infinities are rejected along with everything else outside
    /// of `[0.5, 1.0)`.
    pub fn new(alpha: f64) -> Result<Self> {
        if (0.5..1.0).contains(&alpha) {
            Ok(Self(alpha))
        } else {
            Err(Error::InvalidAlpha(alpha))
        }
    }

    /// The raw coefficient.
    pub fn get(self) -> f64 {
        self.0
    }

    /// Whether a child of weight `child_weight` is light enough for a parent of weight
    /// `parent_weight`.
    pub fn allows(self, child_weight: usize, parent_weight: usize) -> bool {
        child_weight as f64 <= self.0 * parent_weight as f64
    }

    /// Whether a tree of `size` elements has shrunk far enough below its peak `max_size` that it
    /// should be rebuilt from the root.
    pub(crate) fn is_underfull(self, size: usize, max_size: usize) -> bool {
        (size as f64) < self.0 * max_size as f64
    }

    /// The tallest a tree whose size peaked at `max_size` can get, counted in nodes on the
    /// longest root to leaf path: `floor(log_{1/alpha}(max_size)) + 1`.
    ///
    /// ```
    /// use scapegoat::Alpha;
    ///
    /// let alpha = Alpha::new(0.5).unwrap();
    /// assert_eq!(alpha.height_bound(1), 1);
    /// assert_eq!(alpha.height_bound(7), 3);
    /// assert_eq!(alpha.height_bound(8), 4);
    /// ```
    pub fn height_bound(self, max_size: usize) -> usize {
        if max_size <= 1 {
            return 1;
        }

        let levels = (max_size as f64).ln() / (1.0 / self.0).ln();
        (levels + LOG_EPSILON).floor() as usize + 1
    }
}

impl TryFrom<f64> for Alpha {
    type Error = Error;

    fn try_from(alpha: f64) -> Result<Self> {
        Self::new(alpha)
    }
}

impl fmt::Debug for Alpha {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl fmt::Display for Alpha {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
