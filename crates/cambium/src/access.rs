//! Accessor traits through which the algorithms reach caller-owned storage.
//!
//! The library never owns nodes and never allocates: every entry point takes
//! an accessor implementing [`TreeAccess`] and manipulates the tree purely
//! through it. The handle type [`TreeAccess::Ref`] is opaque to the
//! algorithms, so an implementation may back it with an arena index (a `u32`
//! into a `Vec` of nodes) or with a pointer newtype; the accessor resolves
//! handles to fields internally.
//!
//! Augmented quantities are two independent capabilities:
//!
//! - a **rank** per node (one more than the size of its left subtree, with
//!   the global leftmost holding the zero value) turns the tree into an
//!   order-statistic index; see [`IndexAccess`];
//! - an **offset** per node (a position along a caller-defined numeric axis,
//!   stored relative to the node's right-spine ancestry) turns it into a
//!   positional container; see [`OffsetAccess`].
//!
//! The structural algorithms maintain both through the no-op hook methods on
//! [`TreeAccess`], so trees without a rank or offset pay nothing for them.

use crate::types::{Balance, Side};
use core::ops::{Add, Sub};

/// Structural access to a caller-supplied tree.
///
/// All methods are O(1) and infallible. Implementations must keep the
/// documented redundancies consistent: `parent`/`child`/`side` agree for
/// every edge, and `extreme(side)` always names the in-order first/last node
/// of `root`.
pub trait TreeAccess {
    /// Opaque node handle.
    type Ref: Copy + PartialEq;

    fn root(&self) -> Option<Self::Ref>;
    fn set_root(&mut self, node: Option<Self::Ref>);

    /// The in-order first (`Side::Left`) or last (`Side::Right`) node.
    fn extreme(&self, side: Side) -> Option<Self::Ref>;
    fn set_extreme(&mut self, side: Side, node: Option<Self::Ref>);

    fn parent(&self, node: Self::Ref) -> Option<Self::Ref>;
    fn set_parent(&mut self, node: Self::Ref, parent: Option<Self::Ref>);

    fn child(&self, node: Self::Ref, side: Side) -> Option<Self::Ref>;
    fn set_child(&mut self, node: Self::Ref, side: Side, child: Option<Self::Ref>);

    fn balance(&self, node: Self::Ref) -> Balance;
    fn set_balance(&mut self, node: Self::Ref, balance: Balance);

    /// Which of its parent's slots this node occupies. Meaningless for the
    /// root, but kept on every node so rebalancing never re-derives it.
    fn side(&self, node: Self::Ref) -> Side;
    fn set_side(&mut self, node: Self::Ref, side: Side);

    /// True when the tree maintains a per-node offset. Entry points that
    /// cannot keep offsets consistent assert this is false. Rank maintenance
    /// needs no such gate: every entry point keeps ranks current through the
    /// hooks below.
    const MAINTAINS_OFFSET: bool = false;

    /// Store the zero rank on `node` (it became the global leftmost).
    fn set_zero_index(&mut self, _node: Self::Ref) {}

    /// Store the unit rank on `node` (a fresh leaf with no left subtree).
    fn set_one_index(&mut self, _node: Self::Ref) {}

    /// `node` gained one descendant in its left subtree.
    fn increment_index(&mut self, _node: Self::Ref) {}

    /// `node` lost one descendant from its left subtree.
    fn decrement_index(&mut self, _node: Self::Ref) {}

    /// `dst.index += src.index`; used when a rotation moves `dst` above `src`.
    fn add_index_of(&mut self, _dst: Self::Ref, _src: Self::Ref) {}

    /// `dst.index -= src.index`; the inverse rotation transfer.
    fn subtract_index_of(&mut self, _dst: Self::Ref, _src: Self::Ref) {}

    /// `dst.index = src.index`; used when `dst` is spliced into `src`'s slot.
    fn copy_index_of(&mut self, _dst: Self::Ref, _src: Self::Ref) {}

    /// `dst.offset += src.offset`.
    fn add_offset_of(&mut self, _dst: Self::Ref, _src: Self::Ref) {}

    /// `dst.offset -= src.offset`.
    fn subtract_offset_of(&mut self, _dst: Self::Ref, _src: Self::Ref) {}
}

/// Rank access for order-statistic trees.
///
/// Implementations must override the rank hooks on [`TreeAccess`] so the
/// structural algorithms keep the ranks current; the methods here add the
/// typed views the search entry points need.
pub trait IndexAccess: TreeAccess {
    /// Rank and position type, usually an unsigned integer.
    type Index: Copy + Ord + Add<Output = Self::Index> + Sub<Output = Self::Index>;

    fn index(&self, node: Self::Ref) -> Self::Index;
    fn set_index(&mut self, node: Self::Ref, index: Self::Index);

    /// The rank stored on the global leftmost node; also the search base.
    fn zero_index() -> Self::Index;

    /// The rank of a fresh non-leftmost leaf.
    fn one_index() -> Self::Index;
}

/// Offset access for positional containers.
///
/// Implementations must set [`TreeAccess::MAINTAINS_OFFSET`] and override
/// the offset hooks on [`TreeAccess`]. A node's global offset is the sum of
/// stored offsets over the node and its right-spine ancestors; in-order
/// traversal must yield strictly increasing global offsets.
pub trait OffsetAccess: TreeAccess {
    /// Offset type along the caller's axis; signed or floating point.
    type Offset: Copy + PartialOrd + Add<Output = Self::Offset> + Sub<Output = Self::Offset>;

    fn offset(&self, node: Self::Ref) -> Self::Offset;
    fn set_offset(&mut self, node: Self::Ref, offset: Self::Offset);
    fn add_to_offset(&mut self, node: Self::Ref, delta: Self::Offset);
    fn subtract_from_offset(&mut self, node: Self::Ref, delta: Self::Offset);

    /// The additive identity; the search base.
    fn zero_offset() -> Self::Offset;
}

/// Auxiliary-field exchange, required by [`swap`](crate::swap::swap) only.
pub trait SwapAux: TreeAccess {
    /// Exchange the two nodes' side, balance, stored rank/offset, and any
    /// other per-node bookkeeping the caller keeps tied to the tree slot
    /// rather than the node identity. Payload fields stay put: the whole
    /// point of a structural swap is that node identities keep their data
    /// while trading places.
    fn swap_aux(&mut self, x: Self::Ref, y: Self::Ref);
}
