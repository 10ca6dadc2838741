//! Suffix shift along the offset axis.

use crate::access::OffsetAccess;
use crate::types::Side;

/// Shift `node` and everything after it (`Side::Right`, adding `delta`) or
/// subtract `delta` from that same suffix (`Side::Left`) in O(log n).
///
/// Adjusting a stored offset moves the node together with its entire right
/// subtree, so the walk only needs to touch the node itself and, climbing
/// upward, each ancestor it enters from the left side.
pub fn shift_suffix<T: OffsetAccess>(tree: &mut T, node: T::Ref, delta: T::Offset, side: Side) {
    let mut cur = node;
    loop {
        match side {
            Side::Right => tree.add_to_offset(cur, delta),
            Side::Left => {
                debug_assert!(
                    delta < tree.offset(cur),
                    "left shift would collapse the offset order"
                );
                tree.subtract_from_offset(cur, delta);
            }
        }

        // Ascend past ancestors entered from the right; their stored offsets
        // do not cover this suffix.
        loop {
            let Some(parent) = tree.parent(cur) else {
                return;
            };
            let from = tree.side(cur);
            cur = parent;
            if from == Side::Left {
                break;
            }
        }
    }
}
