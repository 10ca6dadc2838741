//! Rotations and the two post-mutation fixup walks.
//!
//! `attach_and_fix_up` runs after a single leaf attachment and walks upward
//! until a rotation or a balance flip absorbs the height growth.
//! `fix_up_detachment` runs after one contribution to a subtree height has
//! been removed and walks upward while the shrinkage is still visible.
//! Both use `rotate`, which also keeps the stored rank/offset of the pivot
//! pair current: those quantities are relative to the right-spine ancestry,
//! which a rotation changes by exactly the other participant's value.

use crate::access::TreeAccess;
use crate::types::{Balance, Side};

/// Rotate about `node` in the direction of `side`; `Side::Right` makes the
/// left child the new subtree root.
pub(crate) fn rotate<T: TreeAccess>(tree: &mut T, node: T::Ref, side: Side) {
    let opp = side.opposite();
    let parent = tree.parent(node);
    let child = tree.child(node, opp).expect("rotation pivot has a child");
    let grandchild = tree.child(child, side);
    let subtree_side = tree.side(node);

    tree.set_child(child, side, Some(node));
    tree.set_parent(node, Some(child));
    tree.set_child(node, opp, grandchild);
    tree.set_side(node, side);
    if let Some(grandchild) = grandchild {
        tree.set_parent(grandchild, Some(node));
        tree.set_side(grandchild, opp);
    }

    tree.set_parent(child, parent);
    tree.set_side(child, subtree_side);
    match parent {
        Some(parent) => tree.set_child(parent, subtree_side, Some(child)),
        None => tree.set_root(Some(child)),
    }

    match side {
        Side::Left => {
            tree.add_index_of(child, node);
            tree.add_offset_of(child, node);
        }
        Side::Right => {
            tree.subtract_index_of(node, child);
            tree.subtract_offset_of(node, child);
        }
    }
}

/// Link a fresh leaf under `parent` and restore the height invariant.
///
/// The leaf's own fields and any rank/offset bookkeeping on the ancestor
/// path must already be in place.
pub(crate) fn attach_and_fix_up<T: TreeAccess>(
    tree: &mut T,
    parent: T::Ref,
    node: T::Ref,
    side: Side,
) {
    tree.set_child(parent, side, Some(node));
    match tree.balance(parent) {
        Balance::Poised => tree.set_balance(parent, Balance::leaning(side)),
        balance => {
            // The parent leaned the other way; the attachment evened it out
            // and the subtree height did not grow.
            debug_assert!(balance == Balance::leaning(side.opposite()));
            tree.set_balance(parent, Balance::Poised);
            return;
        }
    }
    fix_up_attachment(tree, parent);
}

/// Propagate a one-level height growth of the subtree rooted at `node`.
fn fix_up_attachment<T: TreeAccess>(tree: &mut T, mut node: T::Ref) {
    while let Some(parent) = tree.parent(node) {
        let side = tree.side(node);
        let opp = side.opposite();
        let parent_balance = tree.balance(parent);

        if parent_balance == Balance::Poised {
            tree.set_balance(parent, Balance::leaning(side));
            node = parent;
            continue;
        }
        if parent_balance == Balance::leaning(opp) {
            tree.set_balance(parent, Balance::Poised);
            return;
        }

        // The parent already leaned toward the arriving side: rotate.
        if tree.balance(node) == Balance::leaning(side) {
            tree.set_balance(parent, Balance::Poised);
            tree.set_balance(node, Balance::Poised);
            rotate(tree, parent, opp);
        } else {
            // Zig-zag: pre-rotate the inner child up, then rotate the
            // parent; the inner grandchild's old balance decides where the
            // remaining lean lands.
            let child = tree.child(node, opp).expect("zig-zag has an inner child");
            let child_balance = tree.balance(child);
            let (parent_balance, node_balance) = if child_balance == Balance::leaning(side) {
                (Balance::leaning(opp), Balance::Poised)
            } else if child_balance == Balance::leaning(opp) {
                (Balance::Poised, Balance::leaning(side))
            } else {
                (Balance::Poised, Balance::Poised)
            };
            tree.set_balance(parent, parent_balance);
            tree.set_balance(node, node_balance);
            tree.set_balance(child, Balance::Poised);
            rotate(tree, node, side);
            rotate(tree, parent, opp);
        }
        return;
    }
}

/// Propagate a one-level height loss that occurred on `side` of `node`,
/// walking upward until the overall tree height is demonstrably unchanged.
pub(crate) fn fix_up_detachment<T: TreeAccess>(tree: &mut T, mut node: T::Ref, mut side: Side) {
    loop {
        match detach_step(tree, node, side) {
            Some(shrunk) => {
                let Some(parent) = tree.parent(shrunk) else {
                    return;
                };
                side = tree.side(shrunk);
                node = parent;
            }
            None => return,
        }
    }
}

/// Handle the shrinkage of `node`'s `side` subtree. Returns the root of the
/// subtree that is now one level shorter, or `None` when the height loss
/// stopped propagating.
fn detach_step<T: TreeAccess>(tree: &mut T, node: T::Ref, side: Side) -> Option<T::Ref> {
    let opp = side.opposite();
    let balance = tree.balance(node);

    if balance == Balance::Poised {
        tree.set_balance(node, Balance::leaning(opp));
        return None;
    }
    if balance == Balance::leaning(side) {
        tree.set_balance(node, Balance::Poised);
        return Some(node);
    }

    // Imbalance of two toward `opp`: rotate toward `side`.
    let child = tree.child(node, opp).expect("taller subtree has a root");
    let child_balance = tree.balance(child);
    let mut node_new_balance = Balance::Poised;
    let mut child_new_balance = Balance::Poised;
    let mut shrunk = None;

    if child_balance == Balance::leaning(side) {
        // The inner grandchild carries the surplus: double rotation.
        let grandchild = tree.child(child, side).expect("inner grandchild");
        let grandchild_balance = tree.balance(grandchild);
        if grandchild_balance == Balance::leaning(side) {
            child_new_balance = Balance::leaning(opp);
        } else if grandchild_balance == Balance::leaning(opp) {
            node_new_balance = Balance::leaning(side);
        }
        rotate(tree, child, opp);
        if grandchild_balance != Balance::Poised {
            tree.set_balance(grandchild, Balance::Poised);
        }
        shrunk = Some(grandchild);
    } else if child_balance == Balance::Poised {
        // Single rotation around a poised child leaves the subtree height
        // unchanged; the walk stops after it.
        node_new_balance = Balance::leaning(opp);
        child_new_balance = Balance::leaning(side);
    } else {
        shrunk = Some(child);
    }

    rotate(tree, node, side);
    tree.set_balance(node, node_new_balance);
    tree.set_balance(child, child_new_balance);
    shrunk
}
