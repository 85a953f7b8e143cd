//! Building trees from their level-order (breadth first) listing, the notation most tree puzzles
//! are written in: `[1, 2, 3, null, 4]`.
//!
//! Slot 0 is the root. Every present node then claims the next two unclaimed slots as its left
//! and right children, in the order the nodes themselves appear. Absent slots claim nothing, so
//! the children of a missing node are never written down. Slots past the end of the listing are
//! absent.
//!
//! # Examples
//!
//! ```
//! use balance::level_order;
//! use balance::tree::Tree;
//!
//! //    1
//! //   /
//! //  2
//! //   \
//! //    3
//! let tree: Tree<i32> = level_order::parse("[1, 2, null, null, 3]").unwrap();
//! assert_eq!(tree.len(), 3);
//! assert_eq!(tree.height(), 2);
//!
//! // `Tree` also implements `FromStr`.
//! let same: Tree<i32> = "1,2,null,null,3".parse().unwrap();
//! assert_eq!(tree, same);
//! ```

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::error::{ParseError, ParseResult};
use crate::tree::Tree;

impl<V> Tree<V> {
    /// Builds a tree from level-order slots, `None` marking an absent child.
    ///
    /// Fails with [`ParseError::DanglingValues`] if a slot is reached after every present node
    /// has claimed both of its children, e.g. `[None, Some(1)]`.
    ///
    /// ```
    /// use balance::tree::Tree;
    ///
    /// let tree = Tree::from_level_order(vec![Some(1), Some(2), Some(3)]).unwrap();
    /// assert_eq!(tree, Tree::node(1, Tree::leaf(2), Tree::leaf(3)));
    ///
    /// assert!(Tree::from_level_order(vec![None, Some(1)]).is_err());
    /// ```
    pub fn from_level_order<I>(slots: I) -> ParseResult<Self>
    where
        I: IntoIterator<Item = Option<V>>,
    {
        let slots: Vec<Option<V>> = slots.into_iter().collect();

        // First work out which slots hold each node's children.
        let mut children = Vec::with_capacity(slots.len());
        let mut next_unclaimed = 1;
        for (position, slot) in slots.iter().enumerate() {
            if position > 0 && position >= next_unclaimed {
                return Err(ParseError::DanglingValues { position });
            }
            if slot.is_some() {
                children.push(Some((next_unclaimed, next_unclaimed + 1)));
                next_unclaimed += 2;
            } else {
                children.push(None);
            }
        }

        // Children always come after their parents so building back to front means every
        // subtree is finished before its parent asks for it.
        let mut built: Vec<Option<Tree<V>>> = Vec::with_capacity(slots.len());
        built.resize_with(slots.len(), || None);
        for (position, slot) in slots.into_iter().enumerate().rev() {
            if let (Some(value), Some((left, right))) = (slot, children[position]) {
                let left = take_built(&mut built, left);
                let right = take_built(&mut built, right);
                built[position] = Some(Tree::node(value, left, right));
            }
        }

        Ok(take_built(&mut built, 0))
    }
}

fn take_built<V>(built: &mut [Option<Tree<V>>], position: usize) -> Tree<V> {
    built
        .get_mut(position)
        .and_then(Option::take)
        .unwrap_or_default()
}

/// Parses a comma separated level-order listing. Surrounding brackets are optional, whitespace
/// around values is ignored and `null` (in any case) or `None` marks an absent slot. An empty
/// listing is the empty tree.
pub fn parse<V>(text: &str) -> ParseResult<Tree<V>>
where
    V: FromStr,
    V::Err: fmt::Display,
{
    let text = text.trim();
    let text = text
        .strip_prefix('[')
        .and_then(|t| t.strip_suffix(']'))
        .unwrap_or(text)
        .trim();
    if text.is_empty() {
        return Ok(Tree::new());
    }

    let slots = text
        .split(',')
        .enumerate()
        .map(|(position, token)| parse_slot(position, token.trim()))
        .collect::<ParseResult<Vec<_>>>()?;
    debug!(slots = slots.len(), "parsed level-order listing");

    Tree::from_level_order(slots)
}

fn parse_slot<V>(position: usize, token: &str) -> ParseResult<Option<V>>
where
    V: FromStr,
    V::Err: fmt::Display,
{
    if token.eq_ignore_ascii_case("null") || token == "None" {
        return Ok(None);
    }
    if token.is_empty() {
        return Err(ParseError::InvalidValue {
            position,
            token: token.to_string(),
            reason: "missing value".to_string(),
        });
    }

    token
        .parse()
        .map(Some)
        .map_err(|e: V::Err| ParseError::InvalidValue {
            position,
            token: token.to_string(),
            reason: e.to_string(),
        })
}

impl<V> FromStr for Tree<V>
where
    V: FromStr,
    V::Err: fmt::Display,
{
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}
