//! Invariant checkers for tests and debugging.
//!
//! These walk the whole tree and are O(n log n) at worst; production code
//! paths never call them.

use crate::access::{IndexAccess, OffsetAccess, TreeAccess};
use crate::search::{at_index, node_index, node_offset};
use crate::types::{Balance, Side};
use crate::walk::next;
use thiserror::Error;

/// A structural or bookkeeping inconsistency found by a checker.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum ValidateError {
    #[error("root has a parent")]
    RootHasParent,
    #[error("extreme pointer does not match the in-order end of the tree")]
    BadExtreme,
    #[error("child does not point back to its parent")]
    BrokenParentLink,
    #[error("stored side disagrees with the parent's child slot")]
    BadSide,
    #[error("subtree heights differ by more than one")]
    HeightImbalance,
    #[error("stored balance disagrees with the subtree heights")]
    BadBalance,
    #[error("stored ranks do not produce consecutive positions")]
    BadIndex,
    #[error("rank search does not find the node at its own position")]
    IndexSearchMismatch,
    #[error("in-order global offsets are not strictly increasing")]
    OffsetsOutOfOrder,
}

/// Check link consistency, side bookkeeping, extreme pointers, and the
/// height invariant on every node.
pub fn validate<T: TreeAccess>(tree: &T) -> Result<(), ValidateError> {
    let Some(root) = tree.root() else {
        if tree.extreme(Side::Left).is_some() || tree.extreme(Side::Right).is_some() {
            return Err(ValidateError::BadExtreme);
        }
        return Ok(());
    };

    if tree.parent(root).is_some() {
        return Err(ValidateError::RootHasParent);
    }
    check_subtree(tree, root)?;

    for side in [Side::Left, Side::Right] {
        let mut end = root;
        while let Some(child) = tree.child(end, side) {
            end = child;
        }
        if tree.extreme(side) != Some(end) {
            return Err(ValidateError::BadExtreme);
        }
    }

    Ok(())
}

/// Returns the height of the subtree under `node`.
fn check_subtree<T: TreeAccess>(tree: &T, node: T::Ref) -> Result<usize, ValidateError> {
    let mut heights = [0usize; 2];
    for (slot, side) in [Side::Left, Side::Right].into_iter().enumerate() {
        if let Some(child) = tree.child(node, side) {
            if tree.parent(child) != Some(node) {
                return Err(ValidateError::BrokenParentLink);
            }
            if tree.side(child) != side {
                return Err(ValidateError::BadSide);
            }
            heights[slot] = check_subtree(tree, child)?;
        }
    }

    let [left, right] = heights;
    let expected = if left == right {
        Balance::Poised
    } else if left == right + 1 {
        Balance::OverLeft
    } else if right == left + 1 {
        Balance::OverRight
    } else {
        return Err(ValidateError::HeightImbalance);
    };
    if tree.balance(node) != expected {
        return Err(ValidateError::BadBalance);
    }

    Ok(1 + left.max(right))
}

/// Check that stored ranks assign every node its in-order position: walking
/// the tree yields positions 0, 1, 2, … via [`node_index`], and [`at_index`]
/// finds each node at its own position.
pub fn validate_indexes<T: IndexAccess>(tree: &T) -> Result<(), ValidateError> {
    let mut expected = T::zero_index();
    let mut cursor = tree.extreme(Side::Left);
    while let Some(node) = cursor {
        if node_index(tree, node) != expected {
            return Err(ValidateError::BadIndex);
        }
        if at_index(tree, expected) != Some(node) {
            return Err(ValidateError::IndexSearchMismatch);
        }
        expected = expected + T::one_index();
        cursor = next(tree, node);
    }
    Ok(())
}

/// Check that global offsets strictly increase in in-order.
pub fn validate_offsets<T: OffsetAccess>(tree: &T) -> Result<(), ValidateError> {
    let mut previous: Option<T::Offset> = None;
    let mut cursor = tree.extreme(Side::Left);
    while let Some(node) = cursor {
        let offset = node_offset(tree, node);
        if let Some(previous) = previous {
            if !(previous < offset) {
                return Err(ValidateError::OffsetsOutOfOrder);
            }
        }
        previous = Some(offset);
        cursor = next(tree, node);
    }
    Ok(())
}
