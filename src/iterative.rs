//! The [`efficient`][crate::efficient] check without recursion. The post-order traversal is driven
//! by an explicit stack of frames on the heap, so the depth of the tree is limited by memory
//! rather than by the size of the call stack.
//!
//! # Examples
//!
//! ```
//! use balance::iterative;
//! use balance::tree::Tree;
//!
//! // A chain this long would overflow the stack of a recursive checker.
//! let chain = (0..200_000).fold(Tree::new(), |tree, x| Tree::node(x, tree, Tree::new()));
//! assert!(!iterative::is_balanced_iterative(&chain));
//! ```

use tracing::{instrument, trace};

use crate::efficient::Balance;
use crate::tree::Tree;

/// A unit of pending work.
enum Frame<'a, V> {
    /// Visit this subtree, leaving its height on the height stack.
    Enter(&'a Tree<V>),
    /// Both children of a node have left their heights on the height stack; combine them.
    Exit,
}

/// Returns `true` if, for every node in `tree`, the heights of its left and right subtrees differ
/// by at most one. Always agrees with [`efficient::is_balanced_efficient`].
///
/// [`efficient::is_balanced_efficient`]: crate::efficient::is_balanced_efficient
pub fn is_balanced_iterative<V>(tree: &Tree<V>) -> bool {
    check(tree).is_balanced()
}

/// Checks `tree`, also reporting its height when it is balanced. Returns exactly what
/// [`efficient::check`][crate::efficient::check] returns.
#[instrument(level = "trace", skip_all)]
pub fn check<V>(tree: &Tree<V>) -> Balance {
    let mut visits = 0;
    let balance = check_height(tree, &mut visits);
    trace!(visits, ?balance, "checked tree");

    balance
}

fn check_height<V>(tree: &Tree<V>, visits: &mut usize) -> Balance {
    let mut stack = vec![Frame::Enter(tree)];
    let mut heights: Vec<isize> = Vec::new();

    while let Some(frame) = stack.pop() {
        match frame {
            Frame::Enter(Tree::Empty) => heights.push(-1),
            Frame::Enter(Tree::Node(n)) => {
                *visits += 1;
                // The left subtree is finished (and may end the walk) before the right one is
                // entered.
                stack.push(Frame::Exit);
                stack.push(Frame::Enter(n.right()));
                stack.push(Frame::Enter(n.left()));
            }
            Frame::Exit => {
                let (left, right) = match (heights.pop(), heights.pop()) {
                    (Some(right), Some(left)) => (left, right),
                    _ => unreachable!("`Exit` is only reached after both children are entered"),
                };
                match Balance::join(left, right) {
                    Balance::Balanced(height) => heights.push(height),
                    Balance::Unbalanced => return Balance::Unbalanced,
                }
            }
        }
    }

    match heights.pop() {
        Some(height) => Balance::Balanced(height),
        None => unreachable!("entering the root always leaves one height behind"),
    }
}
