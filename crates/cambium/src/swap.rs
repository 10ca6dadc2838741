//! Structural swap: two nodes trade places while keeping their identities.
//!
//! Every edge that pointed at one node points at the other afterwards, and
//! each node adopts the other's slot bookkeeping: side, balance, and stored
//! rank/offset, exchanged through [`SwapAux::swap_aux`]. External
//! references keep meaning the same node objects, which is what payload
//! swapping cannot offer. No heights change, so no rebalancing happens.

use crate::access::{SwapAux, TreeAccess};
use crate::types::Side;

/// Exchange the tree positions of `x` and `y`. A no-op when `x == y`.
pub fn swap<T: SwapAux>(tree: &mut T, x: T::Ref, y: T::Ref) {
    if x == y {
        return;
    }

    // Resolve the replacement extremes and root up front; the links are
    // about to be rewritten.
    let new_leftmost = swapped_extreme(tree, Side::Left, x, y);
    let new_rightmost = swapped_extreme(tree, Side::Right, x, y);
    let root = tree.root();
    let new_root = if root == Some(x) {
        Some(y)
    } else if root == Some(y) {
        Some(x)
    } else {
        None
    };

    let x_parent = tree.parent(x);
    let y_parent = tree.parent(y);

    if x_parent == Some(y) {
        swap_parent_child(tree, x, y, y_parent);
    } else if y_parent == Some(x) {
        swap_parent_child(tree, y, x, x_parent);
    } else {
        let x_left = tree.child(x, Side::Left);
        let x_right = tree.child(x, Side::Right);
        let y_left = tree.child(y, Side::Left);
        let y_right = tree.child(y, Side::Right);
        let x_side = tree.side(x);
        let y_side = tree.side(y);

        tree.set_parent(y, x_parent);
        tree.set_child(y, Side::Left, x_left);
        tree.set_child(y, Side::Right, x_right);
        if let Some(parent) = x_parent {
            tree.set_child(parent, x_side, Some(y));
        }
        if let Some(child) = x_left {
            tree.set_parent(child, Some(y));
        }
        if let Some(child) = x_right {
            tree.set_parent(child, Some(y));
        }

        tree.set_parent(x, y_parent);
        tree.set_child(x, Side::Left, y_left);
        tree.set_child(x, Side::Right, y_right);
        if let Some(parent) = y_parent {
            tree.set_child(parent, y_side, Some(x));
        }
        if let Some(child) = y_left {
            tree.set_parent(child, Some(x));
        }
        if let Some(child) = y_right {
            tree.set_parent(child, Some(x));
        }
    }

    tree.swap_aux(x, y);

    if let Some(root) = new_root {
        tree.set_root(Some(root));
    }
    if let Some(extreme) = new_rightmost {
        tree.set_extreme(Side::Right, Some(extreme));
    }
    if let Some(extreme) = new_leftmost {
        tree.set_extreme(Side::Left, Some(extreme));
    }
}

/// Swap a node with its direct parent: the edge between them reverses, the
/// sibling and the child's own children change parents.
fn swap_parent_child<T: SwapAux>(
    tree: &mut T,
    child: T::Ref,
    parent: T::Ref,
    grandparent: Option<T::Ref>,
) {
    let left_grandchild = tree.child(child, Side::Left);
    let right_grandchild = tree.child(child, Side::Right);
    let child_side = tree.side(child);

    let (sibling, new_left, new_right) = match child_side {
        Side::Left => {
            let sibling = tree.child(parent, Side::Right);
            (sibling, Some(parent), sibling)
        }
        Side::Right => {
            let sibling = tree.child(parent, Side::Left);
            (sibling, sibling, Some(parent))
        }
    };

    if let Some(grandparent) = grandparent {
        let parent_side = tree.side(parent);
        tree.set_child(grandparent, parent_side, Some(child));
    }

    tree.set_parent(child, grandparent);
    tree.set_child(child, Side::Left, new_left);
    tree.set_child(child, Side::Right, new_right);
    tree.set_parent(parent, Some(child));
    tree.set_child(parent, Side::Left, left_grandchild);
    tree.set_child(parent, Side::Right, right_grandchild);

    if let Some(sibling) = sibling {
        tree.set_parent(sibling, Some(child));
    }
    if let Some(grandchild) = left_grandchild {
        tree.set_parent(grandchild, Some(parent));
    }
    if let Some(grandchild) = right_grandchild {
        tree.set_parent(grandchild, Some(parent));
    }
}

fn swapped_extreme<T: TreeAccess>(tree: &T, side: Side, x: T::Ref, y: T::Ref) -> Option<T::Ref> {
    let extreme = tree.extreme(side);
    if extreme == Some(x) {
        Some(y)
    } else if extreme == Some(y) {
        Some(x)
    } else {
        None
    }
}
