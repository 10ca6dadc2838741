//! Side and balance tags shared by every tree algorithm.

/// One of the two child slots of a node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// The other slot.
    #[inline]
    pub fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Height difference of a node's two subtrees, kept as a tri-valued tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Balance {
    /// Both subtrees have the same height.
    Poised,
    /// The left subtree is taller by one.
    OverLeft,
    /// The right subtree is taller by one.
    OverRight,
}

impl Balance {
    /// The balance of a node whose `side` subtree is the taller one.
    #[inline]
    pub fn leaning(side: Side) -> Balance {
        match side {
            Side::Left => Balance::OverLeft,
            Side::Right => Balance::OverRight,
        }
    }
}
