//! A single pass balance check. Each node's height is computed exactly once on the way back up a
//! post-order traversal and, as soon as any subtree turns out to be unbalanced, that verdict is
//! passed straight up to the root without visiting anything else. That makes the check `O(N)`
//! instead of the `O(N^2)` of [`naive`][crate::naive].
//!
//! # Examples
//!
//! ```
//! use balance::efficient::{self, Balance};
//! use balance::tree::Tree;
//!
//! let balanced = Tree::node(1, Tree::node(2, Tree::leaf(4), Tree::leaf(5)), Tree::leaf(3));
//! assert!(efficient::is_balanced_efficient(&balanced));
//!
//! // The height comes for free when the tree is balanced.
//! assert_eq!(efficient::check(&balanced), Balance::Balanced(2));
//!
//! let chain = Tree::node(1, Tree::node(2, Tree::leaf(3), Tree::new()), Tree::new());
//! assert_eq!(efficient::check(&chain), Balance::Unbalanced);
//! ```

use tracing::{instrument, trace};

use crate::tree::Tree;

/// The outcome of checking a subtree.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Balance {
    /// Every node in the subtree is balanced. Carries the subtree's height (-1 when empty).
    Balanced(isize),
    /// Some node in the subtree has children whose heights differ by more than one.
    Unbalanced,
}

impl Balance {
    /// Whether this is [`Balance::Balanced`].
    pub fn is_balanced(self) -> bool {
        matches!(self, Self::Balanced(_))
    }

    /// The height of a balanced subtree.
    pub fn height(self) -> Option<isize> {
        match self {
            Self::Balanced(height) => Some(height),
            Self::Unbalanced => None,
        }
    }

    /// Combines the outcomes of a node's two subtrees into the node's own outcome.
    pub(crate) fn join(left: isize, right: isize) -> Self {
        if (left - right).abs() > 1 {
            Self::Unbalanced
        } else {
            Self::Balanced(left.max(right) + 1)
        }
    }
}

/// Returns `true` if, for every node in `tree`, the heights of its left and right subtrees differ
/// by at most one. Always agrees with [`naive::is_balanced`][crate::naive::is_balanced].
pub fn is_balanced_efficient<V>(tree: &Tree<V>) -> bool {
    check(tree).is_balanced()
}

/// Checks `tree`, also reporting its height when it is balanced.
#[instrument(level = "trace", skip_all)]
pub fn check<V>(tree: &Tree<V>) -> Balance {
    let mut visits = 0;
    let balance = check_height(tree, &mut visits);
    trace!(visits, ?balance, "checked tree");

    balance
}

/// Recursive helper for [`check`]. `visits` is bumped once per node whose subtrees are examined.
fn check_height<V>(tree: &Tree<V>, visits: &mut usize) -> Balance {
    let n = match tree {
        Tree::Empty => return Balance::Balanced(-1),
        Tree::Node(n) => n,
    };
    *visits += 1;

    let left = match check_height(n.left(), visits) {
        Balance::Balanced(height) => height,
        // No need to look at the right subtree at all.
        Balance::Unbalanced => return Balance::Unbalanced,
    };
    let right = match check_height(n.right(), visits) {
        Balance::Balanced(height) => height,
        Balance::Unbalanced => return Balance::Unbalanced,
    };

    Balance::join(left, right)
}
