use balance::{efficient, iterative, naive, Balance, Tree};
use quickcheck::{Gen, TestResult};
use quickcheck_macros::quickcheck;

use crate::{balanced_tree, AnyTree, BalancedTree};

#[quickcheck]
fn checkers_agree(tree: AnyTree) -> bool {
    let expected = naive::is_balanced(&tree.0);

    efficient::is_balanced_efficient(&tree.0) == expected
        && iterative::is_balanced_iterative(&tree.0) == expected
}

#[quickcheck]
fn recursive_and_iterative_report_the_same(tree: AnyTree) -> bool {
    efficient::check(&tree.0) == iterative::check(&tree.0)
}

#[quickcheck]
fn balanced_height_is_the_real_height(tree: AnyTree) -> bool {
    match efficient::check(&tree.0) {
        Balance::Balanced(height) => height == naive::height(&tree.0),
        Balance::Unbalanced => !naive::is_balanced(&tree.0),
    }
}

#[quickcheck]
fn balanced_trees_are_balanced(tree: BalancedTree) -> bool {
    let BalancedTree(tree, height) = tree;

    naive::is_balanced(&tree)
        && efficient::check(&tree) == Balance::Balanced(height)
        && iterative::check(&tree) == Balance::Balanced(height)
}

/// Joining two balanced trees under a new root is balanced exactly when their heights are within
/// one of each other.
#[quickcheck]
fn joined_balanced_trees(left_height: u8, right_height: u8) -> TestResult {
    let (left_height, right_height) = ((left_height % 7) as isize, (right_height % 7) as isize);
    let mut g = Gen::new(10);
    let tree = Tree::node(
        0,
        balanced_tree(&mut g, left_height),
        balanced_tree(&mut g, right_height),
    );

    let expected = (left_height - right_height).abs() <= 1;
    TestResult::from_bool(
        naive::is_balanced(&tree) == expected
            && efficient::is_balanced_efficient(&tree) == expected
            && iterative::is_balanced_iterative(&tree) == expected,
    )
}

#[quickcheck]
fn unbalanced_left_hides_right(left: AnyTree, right: BalancedTree) -> TestResult {
    if naive::is_balanced(&left.0) {
        return TestResult::discard();
    }

    // Whatever sits on the right can't rescue an unbalanced left subtree.
    let tree = Tree::node(0, left.0, right.0);
    TestResult::from_bool(
        efficient::check(&tree) == Balance::Unbalanced
            && iterative::check(&tree) == Balance::Unbalanced,
    )
}
