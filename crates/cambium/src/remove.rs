//! Detachment entry points: extreme pops and single-node erasure.
//!
//! `erase` keeps every remaining node's global offset fixed by letting the
//! node that takes over the vacated slot absorb the erased node's stored
//! offset. `erase_with_shift` is the positional variant: the in-order
//! successor takes over the erased node's global offset and everything after
//! it moves back by the gap that opened.

use crate::access::{OffsetAccess, TreeAccess};
use crate::rebalance::fix_up_detachment;
use crate::types::Side;
use crate::walk::adjacent;

/// Detach and return the in-order first node, or `None` on an empty tree.
pub fn pop_front<T: TreeAccess>(tree: &mut T) -> Option<T::Ref> {
    pop(tree, Side::Left)
}

/// Detach and return the in-order last node, or `None` on an empty tree.
pub fn pop_back<T: TreeAccess>(tree: &mut T) -> Option<T::Ref> {
    pop(tree, Side::Right)
}

fn pop<T: TreeAccess>(tree: &mut T, side: Side) -> Option<T::Ref> {
    let node = tree.extreme(side)?;
    let opp = side.opposite();
    let parent = tree.parent(node);
    let child = tree.child(node, opp);

    if let Some(child) = child {
        // An extreme node has at most the one inner child, which moves up
        // into its place and becomes the new extreme.
        tree.set_extreme(side, Some(child));
        tree.set_parent(child, parent);
        match side {
            Side::Left => {
                tree.set_zero_index(child);
                tree.add_offset_of(child, node);
                tree.set_side(child, Side::Left);
            }
            Side::Right => {
                if parent.is_some() {
                    tree.set_side(child, Side::Right);
                }
            }
        }
    } else {
        tree.set_extreme(side, parent);
    }

    match parent {
        Some(parent) => {
            tree.set_child(parent, side, child);
            if side == Side::Left {
                // The leftmost sat in every ancestor's left subtree.
                let mut cur = parent;
                loop {
                    tree.decrement_index(cur);
                    match tree.parent(cur) {
                        Some(up) => cur = up,
                        None => break,
                    }
                }
            }
            fix_up_detachment(tree, parent, side);
        }
        None => {
            tree.set_root(child);
            tree.set_extreme(opp, child);
        }
    }

    Some(node)
}

/// Detach `node` from the tree, keeping every remaining node's global rank
/// and offset intact. The caller owns the detached node afterwards.
pub fn erase<T: TreeAccess>(tree: &mut T, node: T::Ref) {
    if tree.extreme(Side::Left) == Some(node) {
        let successor = adjacent(tree, node, Side::Right);
        tree.set_extreme(Side::Left, successor);
    }
    if tree.extreme(Side::Right) == Some(node) {
        let predecessor = adjacent(tree, node, Side::Left);
        tree.set_extreme(Side::Right, predecessor);
    }

    let parent = tree.parent(node);
    let node_side = tree.side(node);
    let left_child = tree.child(node, Side::Left);
    let right_child = tree.child(node, Side::Right);

    let fix_from;
    let fix_side;

    if let (Some(left), Some(right)) = (left_child, right_child) {
        let balance = tree.balance(node);
        let transplant;

        if let Some(first_left) = tree.child(right, Side::Left) {
            // The in-order successor is the bottom of the right subtree's
            // left spine; it is spliced out of there and into the vacated
            // slot.
            let mut successor = first_left;
            while let Some(next) = tree.child(successor, Side::Left) {
                successor = next;
            }

            // Second pass down the same spine: every node on it loses the
            // successor from its left subtree and, on offset trees, the
            // successor's stored offset from its own.
            let mut cur = right;
            loop {
                tree.decrement_index(cur);
                tree.subtract_offset_of(cur, successor);
                let next = tree.child(cur, Side::Left).expect("successor spine");
                if next == successor {
                    break;
                }
                cur = next;
            }

            let successor_parent = tree.parent(successor).expect("successor has a parent");
            let successor_right = tree.child(successor, Side::Right);
            tree.set_child(successor_parent, Side::Left, successor_right);
            if let Some(successor_right) = successor_right {
                tree.set_parent(successor_right, Some(successor_parent));
                tree.set_side(successor_right, Side::Left);
            }

            tree.set_child(successor, Side::Right, Some(right));
            tree.set_parent(right, Some(successor));
            fix_from = Some(successor_parent);
            fix_side = Side::Left;
            transplant = successor;
        } else {
            // The right child itself is the successor.
            fix_from = Some(right);
            fix_side = Side::Right;
            transplant = right;
        }

        // The transplant takes over the erased node's slot wholesale: rank,
        // absorbed offset, links, balance, and side.
        tree.copy_index_of(transplant, node);
        tree.add_offset_of(transplant, node);
        tree.set_child(transplant, Side::Left, Some(left));
        tree.set_balance(transplant, balance);
        tree.set_side(transplant, node_side);
        tree.set_parent(left, Some(transplant));
        tree.set_parent(transplant, parent);
        match parent {
            Some(parent) => tree.set_child(parent, node_side, Some(transplant)),
            None => tree.set_root(Some(transplant)),
        }
    } else {
        let child = left_child.or(right_child);
        if let Some(right) = right_child {
            // A lone right child is a leaf one level down; it inherits the
            // erased node's rank and absorbs its offset so its own global
            // position is unchanged.
            tree.copy_index_of(right, node);
            tree.add_offset_of(right, node);
        }
        match parent {
            Some(parent) => {
                if let Some(child) = child {
                    tree.set_parent(child, Some(parent));
                    tree.set_side(child, node_side);
                }
                tree.set_child(parent, node_side, child);
            }
            None => {
                if let Some(child) = child {
                    tree.set_parent(child, None);
                }
                tree.set_root(child);
                return;
            }
        }
        fix_from = parent;
        fix_side = node_side;
    }

    // Ancestors entered from their left side lost one node from their left
    // subtree.
    if let Some(start) = parent {
        let mut cur = start;
        let mut from = node_side;
        loop {
            if from == Side::Left {
                tree.decrement_index(cur);
            }
            match tree.parent(cur) {
                Some(up) => {
                    from = tree.side(cur);
                    cur = up;
                }
                None => break,
            }
        }
    }

    if let Some(fix) = fix_from {
        fix_up_detachment(tree, fix, fix_side);
    }
}

/// Detach `node`, letting its in-order successor take over its global
/// offset and shifting everything after the successor back by the gap that
/// the removal opened. Ranks are maintained exactly as in [`erase`].
///
/// This is the removal a positional container wants: downstream elements
/// keep their spacing relative to the element that now occupies the vacated
/// position.
pub fn erase_with_shift<T: OffsetAccess>(tree: &mut T, node: T::Ref) {
    if tree.extreme(Side::Left) == Some(node) {
        let successor = adjacent(tree, node, Side::Right);
        tree.set_extreme(Side::Left, successor);
    }
    if tree.extreme(Side::Right) == Some(node) {
        let predecessor = adjacent(tree, node, Side::Left);
        tree.set_extreme(Side::Right, predecessor);
    }

    let parent = tree.parent(node);
    let node_side = tree.side(node);
    let left_child = tree.child(node, Side::Left);
    let right_child = tree.child(node, Side::Right);

    let fix_from;
    let fix_side;

    // Accumulates the erased node's stored offset until the suffix shift can
    // be materialized; see the upward walk below.
    let mut shift = tree.offset(node);
    let mut materialized = false;

    if let (Some(left), Some(right)) = (left_child, right_child) {
        let balance = tree.balance(node);
        let node_offset = shift;
        let transplant;

        if let Some(first_left) = tree.child(right, Side::Left) {
            let mut successor = first_left;
            while let Some(next) = tree.child(successor, Side::Left) {
                successor = next;
            }
            let successor_offset = tree.offset(successor);

            let mut cur = right;
            loop {
                tree.decrement_index(cur);
                tree.subtract_from_offset(cur, successor_offset);
                let next = tree.child(cur, Side::Left).expect("successor spine");
                if next == successor {
                    break;
                }
                cur = next;
            }

            let successor_parent = tree.parent(successor).expect("successor has a parent");
            let successor_right = tree.child(successor, Side::Right);
            tree.set_child(successor_parent, Side::Left, successor_right);
            if let Some(successor_right) = successor_right {
                tree.set_parent(successor_right, Some(successor_parent));
                tree.set_side(successor_right, Side::Left);
            }

            tree.set_child(successor, Side::Right, Some(right));
            tree.set_parent(right, Some(successor));
            fix_from = Some(successor_parent);
            fix_side = Side::Left;
            transplant = successor;

            // The successor slides into the vacated global offset; the gap
            // it used to keep from the erased node becomes the suffix shift.
            tree.set_offset(successor, node_offset);
            shift = successor_offset;
            materialized = true;
        } else {
            let successor_offset = tree.offset(right);
            tree.set_offset(right, node_offset);
            shift = successor_offset;
            materialized = true;
            fix_from = Some(right);
            fix_side = Side::Right;
            transplant = right;
        }

        tree.copy_index_of(transplant, node);
        tree.set_child(transplant, Side::Left, Some(left));
        tree.set_balance(transplant, balance);
        tree.set_side(transplant, node_side);
        tree.set_parent(left, Some(transplant));
        tree.set_parent(transplant, parent);
        match parent {
            Some(parent) => tree.set_child(parent, node_side, Some(transplant)),
            None => tree.set_root(Some(transplant)),
        }
    } else {
        let child = left_child.or(right_child);
        if let Some(right) = right_child {
            tree.copy_index_of(right, node);
            let successor_offset = tree.offset(right);
            tree.set_offset(right, shift);
            shift = successor_offset;
            materialized = true;
        }
        match parent {
            Some(parent) => {
                if let Some(child) = child {
                    tree.set_parent(child, Some(parent));
                    tree.set_side(child, node_side);
                }
                tree.set_child(parent, node_side, child);
            }
            None => {
                if let Some(child) = child {
                    tree.set_parent(child, None);
                }
                tree.set_root(child);
                return;
            }
        }
        fix_from = parent;
        fix_side = node_side;
    }

    // Upward walk: rank upkeep, and the suffix shift. When the successor is
    // an ancestor (the erased node had no right child), the shift is the
    // offset gap up to the first ancestor entered from its left side,
    // materialized lazily from the stored offsets accumulated on the way.
    if let Some(start) = parent {
        let mut cur = start;
        let mut from = node_side;
        loop {
            if from == Side::Left {
                tree.decrement_index(cur);
                if !materialized {
                    shift = tree.offset(cur) - shift;
                    materialized = true;
                }
                tree.subtract_from_offset(cur, shift);
            } else if !materialized {
                shift = shift + tree.offset(cur);
            }
            match tree.parent(cur) {
                Some(up) => {
                    from = tree.side(cur);
                    cur = up;
                }
                None => break,
            }
        }
    }

    if let Some(fix) = fix_from {
        fix_up_detachment(tree, fix, fix_side);
    }
}
