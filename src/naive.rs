//! The textbook balance check. Every node asks for the height of both of its subtrees and then
//! asks each subtree whether it, too, is balanced. Heights are never remembered so a node's height
//! is recomputed once for every ancestor, giving `O(N^2)` time on degenerate trees.
//!
//! This is kept as the reference the faster checkers in [`efficient`][crate::efficient] and
//! [`iterative`][crate::iterative] are measured and tested against.
//!
//! # Examples
//!
//! ```
//! use balance::naive;
//! use balance::tree::Tree;
//!
//! let balanced = Tree::node(1, Tree::node(2, Tree::leaf(4), Tree::leaf(5)), Tree::leaf(3));
//! assert!(naive::is_balanced(&balanced));
//!
//! let chain = Tree::node(1, Tree::node(2, Tree::leaf(3), Tree::new()), Tree::new());
//! assert!(!naive::is_balanced(&chain));
//! ```

use crate::tree::Tree;

/// Returns `true` if, for every node in `tree`, the heights of its left and right subtrees differ
/// by at most one. The empty tree is balanced.
pub fn is_balanced<V>(tree: &Tree<V>) -> bool {
    match tree {
        Tree::Empty => true,
        Tree::Node(n) => {
            (height(n.left()) - height(n.right())).abs() <= 1
                && is_balanced(n.left())
                && is_balanced(n.right())
        }
    }
}

/// Height of `tree` in edges: -1 for the empty tree, otherwise one more than its taller subtree.
pub fn height<V>(tree: &Tree<V>) -> isize {
    tree.height()
}
