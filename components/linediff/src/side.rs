//! Side selectors for two-way and three-way comparisons.

use serde::{Deserialize, Serialize};

/// One side of a two-way comparison, or one changed side of a merge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// The first (left) sequence.
    Left,
    /// The second (right) sequence.
    Right,
}

impl Side {
    /// Both sides, left first.
    pub const ALL: [Self; 2] = [Self::Left, Self::Right];

    /// Index into a side-indexed pair.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Left => 0,
            Self::Right => 1,
        }
    }

    /// Picks this side's element out of a pair.
    #[must_use]
    pub const fn select<T>(self, pair: &[T; 2]) -> &T {
        &pair[self.index()]
    }
}

/// One side of a three-way merge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ThreeSide {
    /// Left variant.
    Left,
    /// Common ancestor.
    Base,
    /// Right variant.
    Right,
}

impl ThreeSide {
    /// All three sides in display order.
    pub const ALL: [Self; 3] = [Self::Left, Self::Base, Self::Right];

    /// Index into a side-indexed triple.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Left => 0,
            Self::Base => 1,
            Self::Right => 2,
        }
    }

    /// Picks this side's element out of a triple.
    #[must_use]
    pub const fn select<T>(self, triple: &[T; 3]) -> &T {
        &triple[self.index()]
    }

    /// The two-way side this corresponds to; `None` for the base.
    #[must_use]
    pub const fn as_side(self) -> Option<Side> {
        match self {
            Self::Left => Some(Side::Left),
            Self::Base => None,
            Self::Right => Some(Side::Right),
        }
    }
}

impl From<Side> for ThreeSide {
    fn from(side: Side) -> Self {
        match side {
            Side::Left => Self::Left,
            Side::Right => Self::Right,
        }
    }
}
