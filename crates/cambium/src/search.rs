//! The descent driver and its public faces: keyed searches, rank and offset
//! searches, and position queries.
//!
//! One driver serves every variant. It walks from the root carrying an
//! accumulator (nothing, a running rank, or a running offset) and asks the
//! caller's three-valued compare how the probed position relates to the
//! target: `Less` means the position is before the target. Equality must be
//! reported as `Equal`; it terminates `binary_search` probes and unique
//! lower bounds.

use crate::access::{IndexAccess, OffsetAccess, TreeAccess};
use crate::types::Side;
use core::cmp::Ordering;

#[derive(Clone, Copy)]
enum Mode {
    /// Return any equal node.
    Any,
    /// Return the first node not before the target.
    LowerBound { unique: bool },
    /// Return the first node after the target.
    UpperBound,
}

fn drive<T, A, S, C>(tree: &T, mode: Mode, zero: A, mut advance: S, mut compare: C) -> Option<T::Ref>
where
    T: TreeAccess,
    A: Copy,
    S: FnMut(&T, T::Ref, A) -> A,
    C: FnMut(T::Ref, A) -> Ordering,
{
    let mut cursor = tree.root();
    let mut base = zero;
    let mut best = None;

    while let Some(node) = cursor {
        let running = advance(tree, node, base);
        match compare(node, running) {
            Ordering::Greater => {
                if !matches!(mode, Mode::Any) {
                    best = Some(node);
                }
                cursor = tree.child(node, Side::Left);
            }
            Ordering::Equal => match mode {
                Mode::Any | Mode::LowerBound { unique: true } => return Some(node),
                Mode::LowerBound { unique: false } => {
                    // Equal nodes may continue to the left; keep looking.
                    best = Some(node);
                    cursor = tree.child(node, Side::Left);
                }
                Mode::UpperBound => {
                    base = running;
                    cursor = tree.child(node, Side::Right);
                }
            },
            Ordering::Less => {
                base = running;
                cursor = tree.child(node, Side::Right);
            }
        }
    }

    best
}

/// Find any node that `compare` reports as `Equal`, or `None`.
pub fn binary_search<T, C>(tree: &T, mut compare: C) -> Option<T::Ref>
where
    T: TreeAccess,
    C: FnMut(T::Ref) -> Ordering,
{
    drive(tree, Mode::Any, (), |_, _, _| (), |node, ()| compare(node))
}

/// The first node whose position is not before the target, or `None`.
pub fn lower_bound<T, C>(tree: &T, mut compare: C) -> Option<T::Ref>
where
    T: TreeAccess,
    C: FnMut(T::Ref) -> Ordering,
{
    drive(
        tree,
        Mode::LowerBound { unique: false },
        (),
        |_, _, _| (),
        |node, ()| compare(node),
    )
}

/// [`lower_bound`] for trees with no equal positions: an `Equal` report
/// short-circuits the descent.
pub fn lower_bound_unique<T, C>(tree: &T, mut compare: C) -> Option<T::Ref>
where
    T: TreeAccess,
    C: FnMut(T::Ref) -> Ordering,
{
    drive(
        tree,
        Mode::LowerBound { unique: true },
        (),
        |_, _, _| (),
        |node, ()| compare(node),
    )
}

/// The first node whose position is after the target, or `None`.
pub fn upper_bound<T, C>(tree: &T, mut compare: C) -> Option<T::Ref>
where
    T: TreeAccess,
    C: FnMut(T::Ref) -> Ordering,
{
    drive(tree, Mode::UpperBound, (), |_, _, _| (), |node, ()| {
        compare(node)
    })
}

/// [`binary_search`] with the running 0-based rank of each probed node
/// passed to `compare` alongside the node.
pub fn binary_search_by_index<T, C>(tree: &T, compare: C) -> Option<T::Ref>
where
    T: IndexAccess,
    C: FnMut(T::Ref, T::Index) -> Ordering,
{
    drive(
        tree,
        Mode::Any,
        T::zero_index(),
        |tree, node, base| base + tree.index(node),
        compare,
    )
}

/// [`lower_bound`] with the running rank exposed to `compare`.
pub fn lower_bound_by_index<T, C>(tree: &T, compare: C) -> Option<T::Ref>
where
    T: IndexAccess,
    C: FnMut(T::Ref, T::Index) -> Ordering,
{
    drive(
        tree,
        Mode::LowerBound { unique: false },
        T::zero_index(),
        |tree, node, base| base + tree.index(node),
        compare,
    )
}

/// [`upper_bound`] with the running rank exposed to `compare`.
pub fn upper_bound_by_index<T, C>(tree: &T, compare: C) -> Option<T::Ref>
where
    T: IndexAccess,
    C: FnMut(T::Ref, T::Index) -> Ordering,
{
    drive(
        tree,
        Mode::UpperBound,
        T::zero_index(),
        |tree, node, base| base + tree.index(node),
        compare,
    )
}

/// [`binary_search`] with the running global offset exposed to `compare`.
pub fn binary_search_by_offset<T, C>(tree: &T, compare: C) -> Option<T::Ref>
where
    T: OffsetAccess,
    C: FnMut(T::Ref, T::Offset) -> Ordering,
{
    drive(
        tree,
        Mode::Any,
        T::zero_offset(),
        |tree, node, base| base + tree.offset(node),
        compare,
    )
}

/// [`lower_bound`] with the running global offset exposed to `compare`.
pub fn lower_bound_by_offset<T, C>(tree: &T, compare: C) -> Option<T::Ref>
where
    T: OffsetAccess,
    C: FnMut(T::Ref, T::Offset) -> Ordering,
{
    drive(
        tree,
        Mode::LowerBound { unique: false },
        T::zero_offset(),
        |tree, node, base| base + tree.offset(node),
        compare,
    )
}

/// [`upper_bound`] with the running global offset exposed to `compare`.
pub fn upper_bound_by_offset<T, C>(tree: &T, compare: C) -> Option<T::Ref>
where
    T: OffsetAccess,
    C: FnMut(T::Ref, T::Offset) -> Ordering,
{
    drive(
        tree,
        Mode::UpperBound,
        T::zero_offset(),
        |tree, node, base| base + tree.offset(node),
        compare,
    )
}

/// The node at 0-based position `index`, or `None` when out of range.
pub fn at_index<T: IndexAccess>(tree: &T, index: T::Index) -> Option<T::Ref> {
    binary_search_by_index(tree, |_, running| running.cmp(&index))
}

/// The 0-based position of `node`, summed from the stored ranks of the node
/// and its right-spine ancestors.
pub fn node_index<T: IndexAccess>(tree: &T, node: T::Ref) -> T::Index {
    let mut result = tree.index(node);
    let mut cur = node;
    while let Some(parent) = tree.parent(cur) {
        if tree.side(cur) == Side::Right {
            result = result + tree.index(parent);
        }
        cur = parent;
    }
    result
}

/// The global offset of `node`, summed the same way as [`node_index`].
pub fn node_offset<T: OffsetAccess>(tree: &T, node: T::Ref) -> T::Offset {
    let mut result = tree.offset(node);
    let mut cur = node;
    while let Some(parent) = tree.parent(cur) {
        if tree.side(cur) == Side::Right {
            result = result + tree.offset(parent);
        }
        cur = parent;
    }
    result
}
