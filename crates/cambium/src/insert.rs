//! Attachment entry points: pushes at the extremes, positional inserts, and
//! ordered-unique insertion.
//!
//! Every path ends in a single leaf attachment followed by the upward
//! rebalance; rank and offset bookkeeping on the ancestor path happens on
//! the way down, before the fixup rotates anything.

use crate::access::{IndexAccess, OffsetAccess, TreeAccess};
use crate::rebalance::attach_and_fix_up;
use crate::types::{Balance, Side};
use core::cmp::Ordering;

/// Outcome of [`try_insert`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TryInsert<R> {
    /// An equal node was already present; `make` was not called.
    Found(R),
    /// The node returned by `make`, now attached and rebalanced.
    Inserted(R),
}

impl<R: Copy> TryInsert<R> {
    /// The found or inserted node.
    #[inline]
    pub fn node(self) -> R {
        match self {
            TryInsert::Found(node) | TryInsert::Inserted(node) => node,
        }
    }

    /// True when a new node was attached.
    #[inline]
    pub fn is_inserted(self) -> bool {
        matches!(self, TryInsert::Inserted(_))
    }
}

/// Initialize the intrusive fields of a node about to join the tree as a leaf.
fn seed_leaf<T: TreeAccess>(tree: &mut T, node: T::Ref, parent: Option<T::Ref>, side: Side) {
    tree.set_parent(node, parent);
    tree.set_child(node, Side::Left, None);
    tree.set_child(node, Side::Right, None);
    tree.set_balance(node, Balance::Poised);
    tree.set_side(node, side);
}

fn push<T: TreeAccess>(tree: &mut T, node: T::Ref, side: Side) {
    let parent = tree.extreme(side);
    seed_leaf(
        tree,
        node,
        parent,
        if parent.is_some() { side } else { Side::Left },
    );
    tree.set_extreme(side, Some(node));

    match parent {
        Some(parent) => {
            match side {
                Side::Left => {
                    tree.set_zero_index(node);
                    // Every ancestor of the old leftmost gains the new node
                    // in its left subtree.
                    let mut cur = parent;
                    loop {
                        tree.increment_index(cur);
                        match tree.parent(cur) {
                            Some(up) => cur = up,
                            None => break,
                        }
                    }
                }
                Side::Right => tree.set_one_index(node),
            }
            attach_and_fix_up(tree, parent, node, side);
        }
        None => {
            tree.set_zero_index(node);
            tree.set_root(Some(node));
            tree.set_extreme(side.opposite(), Some(node));
        }
    }
}

/// Attach `node` as the new in-order last node.
pub fn push_back<T: TreeAccess>(tree: &mut T, node: T::Ref) {
    debug_assert!(
        !T::MAINTAINS_OFFSET,
        "offset trees use push_back_with_offset"
    );
    push(tree, node, Side::Right);
}

/// Attach `node` as the new in-order first node.
pub fn push_front<T: TreeAccess>(tree: &mut T, node: T::Ref) {
    debug_assert!(
        !T::MAINTAINS_OFFSET,
        "offset trees use push_front_with_offset"
    );
    push(tree, node, Side::Left);
}

/// Attach `node` as the new last node, `offset` past the previous last
/// node's global offset (or at `offset` absolutely when the tree was empty).
pub fn push_back_with_offset<T: OffsetAccess>(tree: &mut T, node: T::Ref, offset: T::Offset) {
    let parent = tree.extreme(Side::Right);
    seed_leaf(
        tree,
        node,
        parent,
        if parent.is_some() {
            Side::Right
        } else {
            Side::Left
        },
    );
    tree.set_extreme(Side::Right, Some(node));
    tree.set_offset(node, offset);

    match parent {
        Some(parent) => {
            tree.set_one_index(node);
            attach_and_fix_up(tree, parent, node, Side::Right);
        }
        None => {
            tree.set_zero_index(node);
            tree.set_root(Some(node));
            tree.set_extreme(Side::Left, Some(node));
        }
    }
}

/// Attach `node` as the new first node at the old first node's global
/// offset, shifting everything that was already present by `offset`.
pub fn push_front_with_offset<T: OffsetAccess>(tree: &mut T, node: T::Ref, offset: T::Offset) {
    let parent = tree.extreme(Side::Left);
    seed_leaf(tree, node, parent, Side::Left);
    tree.set_extreme(Side::Left, Some(node));

    match parent {
        Some(parent) => {
            tree.set_offset(node, tree.offset(parent));
            tree.set_zero_index(node);
            // The old leftmost and all of its ancestors move up by `offset`;
            // that shifts every node but the new one.
            let mut cur = parent;
            loop {
                tree.increment_index(cur);
                tree.add_to_offset(cur, offset);
                match tree.parent(cur) {
                    Some(up) => cur = up,
                    None => break,
                }
            }
            attach_and_fix_up(tree, parent, node, Side::Left);
        }
        None => {
            tree.set_offset(node, offset);
            tree.set_zero_index(node);
            tree.set_root(Some(node));
            tree.set_extreme(Side::Right, Some(node));
        }
    }
}

/// Attach `node` immediately before `spot` in in-order; `None` appends.
pub fn insert<T: TreeAccess>(tree: &mut T, spot: Option<T::Ref>, node: T::Ref) {
    debug_assert!(!T::MAINTAINS_OFFSET, "offset trees use insert_at_offset");
    let Some(spot) = spot else {
        return push(tree, node, Side::Right);
    };

    let parent;
    let side;
    let mut is_leftmost = false;
    if let Some(left) = tree.child(spot, Side::Left) {
        // Bottom of the left subtree's right spine is the predecessor.
        let mut cur = left;
        while let Some(right) = tree.child(cur, Side::Right) {
            cur = right;
        }
        parent = cur;
        side = Side::Right;
    } else {
        parent = spot;
        side = Side::Left;
        is_leftmost = tree.extreme(Side::Left) == Some(spot);
    }

    seed_leaf(tree, node, Some(parent), side);
    if is_leftmost {
        tree.set_extreme(Side::Left, Some(node));
        tree.set_zero_index(node);
    } else {
        tree.set_one_index(node);
    }

    // The new node lands in `spot`'s left subtree, and from there in the
    // left subtree of every ancestor entered from its left side.
    tree.increment_index(spot);
    let mut cur = spot;
    while let Some(up) = tree.parent(cur) {
        if tree.side(cur) == Side::Left {
            tree.increment_index(up);
        }
        cur = up;
    }

    attach_and_fix_up(tree, parent, node, side);
}

/// Ordered-unique insertion.
///
/// Walks from the root with `compare`, which reports how the probed node's
/// position relates to the target. On `Equal` the existing node is returned
/// and `make` is never called. Otherwise `make` receives the attachment
/// parent and side and returns the caller-allocated node to attach, or
/// `None` to abandon the insertion with the tree untouched (in which case
/// `try_insert` returns `None`). The core completes the attachment itself:
/// `make` only has to produce a handle.
pub fn try_insert<T, C, M>(tree: &mut T, mut compare: C, make: M) -> Option<TryInsert<T::Ref>>
where
    T: TreeAccess,
    C: FnMut(&T, T::Ref) -> Ordering,
    M: FnOnce(&mut T, Option<T::Ref>, Side) -> Option<T::Ref>,
{
    debug_assert!(!T::MAINTAINS_OFFSET, "offset trees use insert_at_offset");

    let mut parent = None;
    let mut side = Side::Left;
    let mut is_leftmost = true;
    let mut is_rightmost = true;

    let mut cursor = tree.root();
    while let Some(cur) = cursor {
        match compare(tree, cur) {
            Ordering::Equal => return Some(TryInsert::Found(cur)),
            Ordering::Greater => {
                is_rightmost = false;
                side = Side::Left;
                cursor = tree.child(cur, Side::Left);
            }
            Ordering::Less => {
                is_leftmost = false;
                side = Side::Right;
                cursor = tree.child(cur, Side::Right);
            }
        }
        parent = Some(cur);
    }

    let node = make(tree, parent, side)?;
    seed_leaf(tree, node, parent, side);
    if is_leftmost {
        tree.set_extreme(Side::Left, Some(node));
        tree.set_zero_index(node);
    } else {
        tree.set_one_index(node);
    }
    if is_rightmost {
        tree.set_extreme(Side::Right, Some(node));
    }

    match parent {
        Some(parent) => {
            let mut cur = parent;
            let mut from = side;
            loop {
                if from == Side::Left {
                    tree.increment_index(cur);
                }
                match tree.parent(cur) {
                    Some(up) => {
                        from = tree.side(cur);
                        cur = up;
                    }
                    None => break,
                }
            }
            attach_and_fix_up(tree, parent, node, side);
        }
        None => tree.set_root(Some(node)),
    }

    Some(TryInsert::Inserted(node))
}

/// Attach `node` so that its global 0-based position becomes `index`;
/// everything at or after `index` moves one position up.
pub fn insert_at_index<T: IndexAccess>(tree: &mut T, node: T::Ref, index: T::Index) {
    debug_assert!(!T::MAINTAINS_OFFSET, "offset trees use insert_at_offset");

    let mut parent = None;
    let mut side = Side::Left;
    let mut is_leftmost = true;
    let mut is_rightmost = true;
    let mut base = T::zero_index();

    let mut cursor = tree.root();
    while let Some(cur) = cursor {
        let running = base + tree.index(cur);
        if running < index {
            base = running;
            is_leftmost = false;
            side = Side::Right;
            cursor = tree.child(cur, Side::Right);
        } else {
            // The new node lands in this node's left subtree.
            tree.increment_index(cur);
            is_rightmost = false;
            side = Side::Left;
            cursor = tree.child(cur, Side::Left);
        }
        parent = Some(cur);
    }

    seed_leaf(tree, node, parent, side);
    if is_leftmost {
        tree.set_extreme(Side::Left, Some(node));
        tree.set_zero_index(node);
    } else {
        tree.set_one_index(node);
    }
    if is_rightmost {
        tree.set_extreme(Side::Right, Some(node));
    }

    match parent {
        Some(parent) => attach_and_fix_up(tree, parent, node, side),
        None => tree.set_root(Some(node)),
    }
}

/// Attach `node` at the vacant position whose global offset is `offset`.
///
/// The position must not collide with an existing node's global offset;
/// opening a gap requires [`insert_at_offset_with_shift`].
pub fn insert_at_offset<T: OffsetAccess>(tree: &mut T, node: T::Ref, offset: T::Offset) {
    insert_at_offset_inner(tree, node, offset, None);
}

/// Attach `node` at global offset `offset`, first shifting every node at or
/// after that position by `shift` to open the gap.
pub fn insert_at_offset_with_shift<T: OffsetAccess>(
    tree: &mut T,
    node: T::Ref,
    offset: T::Offset,
    shift: T::Offset,
) {
    insert_at_offset_inner(tree, node, offset, Some(shift));
}

fn insert_at_offset_inner<T: OffsetAccess>(
    tree: &mut T,
    node: T::Ref,
    offset: T::Offset,
    shift: Option<T::Offset>,
) {
    let mut parent = None;
    let mut side = Side::Left;
    let mut is_leftmost = true;
    let mut is_rightmost = true;
    let mut base = T::zero_offset();

    let mut cursor = tree.root();
    while let Some(cur) = cursor {
        let running = base + tree.offset(cur);
        if running < offset {
            base = running;
            is_leftmost = false;
            side = Side::Right;
            cursor = tree.child(cur, Side::Right);
        } else {
            tree.increment_index(cur);
            match shift {
                // This node and its whole right subtree sit at or past the
                // insertion point; shifting the stored offset moves them all.
                Some(delta) => tree.add_to_offset(cur, delta),
                None => debug_assert!(offset < running, "occupied offset and no shift given"),
            }
            is_rightmost = false;
            side = Side::Left;
            cursor = tree.child(cur, Side::Left);
        }
        parent = Some(cur);
    }

    tree.set_offset(node, offset - base);
    seed_leaf(tree, node, parent, side);
    if is_leftmost {
        tree.set_extreme(Side::Left, Some(node));
        tree.set_zero_index(node);
    } else {
        tree.set_one_index(node);
    }
    if is_rightmost {
        tree.set_extreme(Side::Right, Some(node));
    }

    match parent {
        Some(parent) => attach_and_fix_up(tree, parent, node, side),
        None => tree.set_root(Some(node)),
    }
}
