use balance::Tree;
use quickcheck_macros::quickcheck;

use crate::AnyTree;

#[quickcheck]
fn level_order_round_trip(tree: AnyTree) -> bool {
    let slots = tree.0.to_level_order().into_iter().map(|v| v.copied());
    Tree::from_level_order(slots).as_ref() == Ok(&tree.0)
}

#[quickcheck]
fn display_parses_back(tree: AnyTree) -> bool {
    tree.0.to_string().parse::<Tree<i8>>().as_ref() == Ok(&tree.0)
}

#[quickcheck]
fn len_counts_present_slots(tree: AnyTree) -> bool {
    tree.0.to_level_order().iter().filter(|v| v.is_some()).count() == tree.0.len()
}
