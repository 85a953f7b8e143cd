use balance::Tree;
use quickcheck::{Arbitrary, Gen};

mod agreement;
mod level_order;

/// A tree of arbitrary shape with at most `Gen::size` nodes. Most are unbalanced once they grow
/// past a handful of nodes.
#[derive(Clone, Debug)]
pub(crate) struct AnyTree(pub(crate) Tree<i8>);

/// A tree built so that every node's subtrees differ in height by at most one, along with the
/// height it was built to.
#[derive(Clone, Debug)]
pub(crate) struct BalancedTree(pub(crate) Tree<i8>, pub(crate) isize);

impl Arbitrary for AnyTree {
    /// Tells quickcheck how to grow a random tree
    fn arbitrary(g: &mut Gen) -> Self {
        let budget = g.size();
        AnyTree(any_tree(g, budget))
    }

    /// Shrinks towards either subtree or the root with one child pruned.
    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        let n = match self.0.as_node() {
            None => return Box::new(std::iter::empty()),
            Some(n) => n,
        };

        let smaller = vec![
            AnyTree(n.left().clone()),
            AnyTree(n.right().clone()),
            AnyTree(Tree::node(*n.value(), Tree::new(), n.right().clone())),
            AnyTree(Tree::node(*n.value(), n.left().clone(), Tree::new())),
        ];
        Box::new(smaller.into_iter())
    }
}

impl Arbitrary for BalancedTree {
    fn arbitrary(g: &mut Gen) -> Self {
        let height = (u8::arbitrary(g) % 8) as isize;
        BalancedTree(balanced_tree(g, height), height)
    }
}

/// Grows a tree of at most `budget` nodes, splitting what's left of the budget randomly between
/// the two children.
fn any_tree(g: &mut Gen, budget: usize) -> Tree<i8> {
    if budget == 0 || u8::arbitrary(g) % 4 == 0 {
        return Tree::new();
    }

    let budget = budget - 1;
    let left_budget = usize::arbitrary(g) % (budget + 1);
    Tree::node(
        i8::arbitrary(g),
        any_tree(g, left_budget),
        any_tree(g, budget - left_budget),
    )
}

/// Builds a balanced tree of exactly `height`.
pub(crate) fn balanced_tree(g: &mut Gen, height: isize) -> Tree<i8> {
    if height < 0 {
        return Tree::new();
    }

    let (left, right) = match u8::arbitrary(g) % 3 {
        0 => (height - 1, height - 1),
        1 => (height - 2, height - 1),
        _ => (height - 1, height - 2),
    };
    Tree::node(
        i8::arbitrary(g),
        balanced_tree(g, left),
        balanced_tree(g, right),
    )
}
