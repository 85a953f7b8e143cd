//! This crate checks whether binary trees are height-balanced, mostly for
//! educational purposes.
//!
//! ## Height-balanced trees
//!
//! A binary tree is defined recursively using the notion of a `Node`. A `Node`
//! stores some value and has up to two child `Node`s. The *height* of a tree is
//! the number of edges on the longest path from its root to a leaf `Node`, so
//! a single `Node` has a height of 0 and, by convention, the empty tree has a
//! height of -1.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! A tree is *height-balanced* when, for every `Node` in it, the heights of
//! its left and right subtrees differ by at most one. Balanced trees have a
//! height of `O(lg N)` (where `N` is the number of nodes), which is what makes
//! searching self-balancing trees fast.
//!
//! ## Checking balance
//!
//! Three checkers are provided and they always agree:
//!
//! 1. [`naive`] recomputes the height of both subtrees at every node, taking
//!    `O(N^2)` time on degenerate trees.
//! 2. [`efficient`] computes every height exactly once in a single post-order
//!    pass and stops as soon as any subtree is found to be unbalanced, taking
//!    `O(N)` time.
//! 3. [`iterative`] is the same single pass driven by an explicit stack so
//!    arbitrarily deep trees can be checked.
//!
//! ```
//! use balance::tree::Tree;
//! use balance::{efficient, iterative, naive};
//!
//! let tree: Tree<i32> = "[1,2,3,4,5]".parse().unwrap();
//!
//! assert!(naive::is_balanced(&tree));
//! assert!(efficient::is_balanced_efficient(&tree));
//! assert!(iterative::is_balanced_iterative(&tree));
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod efficient;
pub mod error;
pub mod iterative;
pub mod level_order;
pub mod naive;
pub mod tree;

pub use efficient::Balance;
pub use error::ParseError;
pub use tree::Tree;
