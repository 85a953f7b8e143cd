//! The binary tree the balance checkers operate on. Unlike the trees one might
//! find in a search-tree crate, nothing here is ordered: a `Tree` is any shape
//! the caller cares to build, and the value stored in each node is never looked
//! at when deciding balance.
//!
//! # Examples
//!
//! ```
//! use balance::tree::Tree;
//!
//! //      1
//! //     / \
//! //    2   3
//! //   / \
//! //  4   5
//! let tree = Tree::node(
//!     1,
//!     Tree::node(2, Tree::leaf(4), Tree::leaf(5)),
//!     Tree::leaf(3),
//! );
//!
//! assert_eq!(tree.len(), 5);
//! assert_eq!(tree.height(), 2);
//! assert_eq!(Tree::<i32>::new().height(), -1);
//! ```

use std::collections::VecDeque;
use std::fmt;
use std::mem;

/// A binary tree. Children are owned exclusively by their parent so a `Tree`
/// can never contain a cycle or share a subtree between two parents.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Tree<V> {
    /// The absent tree. It is balanced and has a height of -1.
    Empty,
    /// A `Node` that has a value and two children (which are
    /// both `Tree`s). This enum trivially wraps the [`Node`] struct.
    Node(Node<V>),
}

/// A `Node` stores a value and always has two children, although
/// those children may be [`Empty`][Tree::Empty].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node<V> {
    value: V,
    left: Box<Tree<V>>,
    right: Box<Tree<V>>,
}

impl<V> Default for Tree<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Drop for Tree<V> {
    // Dropping the boxes recursively would overflow the stack on a long enough chain, so detach
    // every child before it goes out of scope.
    fn drop(&mut self) {
        let mut stack = Vec::new();
        if let Tree::Node(node) = self {
            stack.push(node.take_left());
            stack.push(node.take_right());
        }

        while let Some(mut tree) = stack.pop() {
            if let Tree::Node(node) = &mut tree {
                stack.push(node.take_left());
                stack.push(node.take_right());
            }
        }
    }
}

impl<V> Tree<V> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self::Empty
    }

    /// Generates a `Tree` with a single node holding `value`.
    pub fn leaf(value: V) -> Self {
        Self::node(value, Self::Empty, Self::Empty)
    }

    /// Generates a `Tree` whose root holds `value` and owns the given subtrees.
    pub fn node(value: V, left: Self, right: Self) -> Self {
        Self::Node(Node {
            value,
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    /// Whether this is the empty tree.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// The root node, if there is one.
    pub fn as_node(&self) -> Option<&Node<V>> {
        match self {
            Self::Empty => None,
            Self::Node(n) => Some(n),
        }
    }

    /// Counts the nodes in this tree.
    ///
    /// ```
    /// use balance::tree::Tree;
    ///
    /// assert_eq!(Tree::<()>::new().len(), 0);
    /// assert_eq!(Tree::node((), Tree::leaf(()), Tree::new()).len(), 2);
    /// ```
    pub fn len(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(tree) = stack.pop() {
            if let Self::Node(n) = tree {
                count += 1;
                stack.push(&n.left);
                stack.push(&n.right);
            }
        }

        count
    }

    /// Gets the height of this tree: the number of edges on the longest path from the root to a
    /// leaf. The empty tree has a height of -1 and a single node a height of 0.
    ///
    /// This walks the whole tree every time it's called.
    pub fn height(&self) -> isize {
        match self {
            Self::Empty => -1,
            Self::Node(n) => n.left.height().max(n.right.height()) + 1,
        }
    }

    /// Lists the tree breadth first. Each present node is followed (eventually) by the slots of
    /// its two children, and absent children of present nodes are `None`. Trailing `None`s are
    /// trimmed so the output is the shortest sequence [`Tree::from_level_order`] accepts.
    ///
    /// ```
    /// use balance::tree::Tree;
    ///
    /// let tree = Tree::node(1, Tree::node(2, Tree::leaf(3), Tree::new()), Tree::new());
    /// assert_eq!(
    ///     tree.to_level_order(),
    ///     vec![Some(&1), Some(&2), None, Some(&3)],
    /// );
    /// ```
    pub fn to_level_order(&self) -> Vec<Option<&V>> {
        let mut slots = Vec::new();
        let mut queue = VecDeque::new();
        queue.push_back(self);

        while let Some(tree) = queue.pop_front() {
            match tree {
                Self::Empty => slots.push(None),
                Self::Node(n) => {
                    slots.push(Some(&n.value));
                    queue.push_back(&n.left);
                    queue.push_back(&n.right);
                }
            }
        }

        while let Some(None) = slots.last() {
            slots.pop();
        }

        slots
    }
}

impl<V> Node<V> {
    /// The value stored in this node.
    pub fn value(&self) -> &V {
        &self.value
    }

    /// The left subtree.
    pub fn left(&self) -> &Tree<V> {
        &self.left
    }

    /// The right subtree.
    pub fn right(&self) -> &Tree<V> {
        &self.right
    }

    fn take_left(&mut self) -> Tree<V> {
        mem::replace(&mut *self.left, Tree::Empty)
    }

    fn take_right(&mut self) -> Tree<V> {
        mem::replace(&mut *self.right, Tree::Empty)
    }
}

/// Prints the tree in level order, e.g. `[1,2,null,3]`.
impl<V> fmt::Display for Tree<V>
where
    V: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, slot) in self.to_level_order().into_iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            match slot {
                Some(value) => write!(f, "{}", value)?,
                None => write!(f, "null")?,
            }
        }
        write!(f, "]")
    }
}
