//! In-order traversal primitives and the destructive single-pass walk.

use crate::access::TreeAccess;
use crate::types::Side;

/// The in-order neighbour of `node` on the given side, or `None` at the
/// respective end of the tree.
///
/// Descends into the `side` subtree when it exists, otherwise climbs until
/// an ancestor is entered from the opposite side. Amortized O(1) when used
/// for iteration, worst-case O(log n).
pub fn adjacent<T: TreeAccess>(tree: &T, node: T::Ref, side: Side) -> Option<T::Ref> {
    let opp = side.opposite();
    if let Some(mut child) = tree.child(node, side) {
        while let Some(grandchild) = tree.child(child, opp) {
            child = grandchild;
        }
        return Some(child);
    }

    let mut cur = node;
    while let Some(parent) = tree.parent(cur) {
        if tree.side(cur) == opp {
            return Some(parent);
        }
        cur = parent;
    }
    None
}

/// The in-order successor of `node`.
#[inline]
pub fn next<T: TreeAccess>(tree: &T, node: T::Ref) -> Option<T::Ref> {
    adjacent(tree, node, Side::Right)
}

/// The in-order predecessor of `node`.
#[inline]
pub fn previous<T: TreeAccess>(tree: &T, node: T::Ref) -> Option<T::Ref> {
    adjacent(tree, node, Side::Left)
}

/// Visit every node in ascending in-order.
pub fn for_each<T: TreeAccess>(tree: &T, mut fun: impl FnMut(T::Ref)) {
    let mut cursor = tree.extreme(Side::Left);
    while let Some(node) = cursor {
        fun(node);
        cursor = adjacent(tree, node, Side::Right);
    }
}

/// Visit every node in descending in-order.
pub fn for_each_backward<T: TreeAccess>(tree: &T, mut fun: impl FnMut(T::Ref)) {
    let mut cursor = tree.extreme(Side::Right);
    while let Some(node) = cursor {
        fun(node);
        cursor = adjacent(tree, node, Side::Left);
    }
}

/// Per-node progress of the deconstruction walk in [`clear`].
enum Sweep {
    /// Both subtrees still pending.
    Both,
    /// Left subtree done, right pending.
    Right,
    /// Both subtrees gone; the node itself is next.
    Done,
}

/// Tear the tree down in one pass, invoking `destroy` exactly once per node.
///
/// A node is destroyed only after its entire subtree has been, so `destroy`
/// may free the node's storage immediately. The walk is iterative and keeps
/// no stack of its own: it tracks a single state that is re-derived from the
/// arrival side when stepping back to a parent. The accessor is left
/// pointing at freed nodes; the caller resets it to empty afterwards.
pub fn clear<T: TreeAccess>(tree: &mut T, mut destroy: impl FnMut(&mut T, T::Ref)) {
    let Some(mut node) = tree.extreme(Side::Left) else {
        return;
    };

    // Starting at the leftmost node, its left side is already exhausted.
    let mut sweep = Sweep::Right;
    loop {
        match sweep {
            Sweep::Both => {
                if let Some(left) = tree.child(node, Side::Left) {
                    node = left;
                } else {
                    sweep = Sweep::Right;
                }
            }
            Sweep::Right => {
                if let Some(right) = tree.child(node, Side::Right) {
                    node = right;
                    sweep = Sweep::Both;
                } else {
                    sweep = Sweep::Done;
                }
            }
            Sweep::Done => {
                let doomed = node;
                let parent = tree.parent(node);
                if let Some(parent) = parent {
                    sweep = match tree.side(node) {
                        Side::Left => Sweep::Right,
                        Side::Right => Sweep::Done,
                    };
                    node = parent;
                }
                destroy(tree, doomed);
                if parent.is_none() {
                    return;
                }
            }
        }
    }
}
