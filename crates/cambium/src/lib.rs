//! Intrusive height-balanced (AVL) binary search tree algorithms over
//! caller-supplied storage.
//!
//! The crate owns no nodes, allocates nothing, and never compares keys
//! itself. Callers provide an accessor (a [`TreeAccess`] implementation
//! resolving opaque node handles to parent/child/side/balance fields) and
//! the free functions here coordinate structural mutation while preserving
//! the ±1 subtree-height invariant. Two optional per-node quantities turn
//! the same tree into an order-statistic index ([`IndexAccess`]: ranks,
//! positions, `insert_at_index`/`at_index`) and a positional container
//! ([`OffsetAccess`]: offsets along a numeric axis, `insert_at_offset`,
//! suffix shifts). Key ordering, where there is one, comes in per call as a
//! three-valued compare closure.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`types`] | [`Side`] and [`Balance`] tags |
//! | [`access`] | the accessor traits |
//! | [`walk`] | `adjacent` / `next` / `previous`, visit loops, `clear` |
//! | [`search`] | keyed, ranked, and offset searches; position queries |
//! | [`insert`] | pushes, positional inserts, `try_insert` |
//! | [`remove`] | pops, `erase`, `erase_with_shift` |
//! | [`shift`] | `shift_suffix` |
//! | [`swap`] | identity-preserving structural swap |
//! | [`validate`] | invariant checkers for tests and debugging |
//! | [`print`] | debug tree printer |
//!
//! All mutating entry points are O(log n); traversal and `clear` are O(n).
//! The tree is a single-owner structure: concurrent mutation is not
//! supported and the crate does no locking.

pub mod access;
pub mod insert;
pub mod print;
mod rebalance;
pub mod remove;
pub mod search;
pub mod shift;
pub mod swap;
pub mod types;
pub mod validate;
pub mod walk;

pub use access::{IndexAccess, OffsetAccess, SwapAux, TreeAccess};
pub use insert::{
    insert, insert_at_index, insert_at_offset, insert_at_offset_with_shift, push_back,
    push_back_with_offset, push_front, push_front_with_offset, try_insert, TryInsert,
};
pub use print::print_tree;
pub use remove::{erase, erase_with_shift, pop_back, pop_front};
pub use search::{
    at_index, binary_search, binary_search_by_index, binary_search_by_offset, lower_bound,
    lower_bound_by_index, lower_bound_by_offset, lower_bound_unique, node_index, node_offset,
    upper_bound, upper_bound_by_index, upper_bound_by_offset,
};
pub use shift::shift_suffix;
pub use swap::swap;
pub use types::{Balance, Side};
pub use validate::{validate, validate_indexes, validate_offsets, ValidateError};
pub use walk::{adjacent, clear, for_each, for_each_backward, next, previous};
