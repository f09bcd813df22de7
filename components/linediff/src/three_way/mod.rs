//! Three-way change classification.
//!
//! A [`ThreeSideRange`] aligns one region of LEFT, BASE and RIGHT. The
//! [`classifier`] decides what kind of change the region holds and which sides
//! moved away from BASE; [`ThreesideChange`] keeps that decision next to the
//! range it was made for.
//!
//! # Example
//!
//! ```
//! use linediff::{ComparisonPolicy, LineRange, LineStore, TextDiffType, ThreeSideRange};
//! use linediff::three_way::classify;
//!
//! let left = LineStore::from_text("a");
//! let base = LineStore::from_text("a");
//! let right = LineStore::from_text("b");
//! let whole = LineRange::new(0, 1).unwrap();
//! let range = ThreeSideRange::new(whole, whole, whole).unwrap();
//!
//! let conflict = classify(&range, [&left, &base, &right], ComparisonPolicy::Exact).unwrap();
//! assert_eq!(conflict.diff_type(), TextDiffType::Modified);
//! assert!(!conflict.is_left_change());
//! assert!(conflict.is_right_change());
//! ```

pub mod change;
pub mod classifier;

pub use change::ThreesideChange;
pub use classifier::classify;

use serde::Serialize;

use crate::error::ComparisonError;
use crate::side::{Side, ThreeSide};
use crate::text::LineRange;

/// Aligned line ranges in LEFT, BASE and RIGHT.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ThreeSideRange {
    left: LineRange,
    base: LineRange,
    right: LineRange,
}

impl ThreeSideRange {
    /// Creates an aligned range.
    ///
    /// # Errors
    ///
    /// Returns [`ComparisonError::EmptyThreeSideRange`] if all three ranges
    /// are empty.
    pub const fn new(
        left: LineRange,
        base: LineRange,
        right: LineRange,
    ) -> Result<Self, ComparisonError> {
        if left.is_empty() && base.is_empty() && right.is_empty() {
            return Err(ComparisonError::EmptyThreeSideRange);
        }
        Ok(Self { left, base, right })
    }

    pub(crate) const fn from_ranges(left: LineRange, base: LineRange, right: LineRange) -> Self {
        debug_assert!(!(left.is_empty() && base.is_empty() && right.is_empty()));
        Self { left, base, right }
    }

    /// Range on one side.
    #[must_use]
    pub const fn range(&self, side: ThreeSide) -> LineRange {
        match side {
            ThreeSide::Left => self.left,
            ThreeSide::Base => self.base,
            ThreeSide::Right => self.right,
        }
    }

    /// First line on `side`.
    #[must_use]
    pub const fn start_line(&self, side: ThreeSide) -> usize {
        self.range(side).start()
    }

    /// End line on `side` (exclusive).
    #[must_use]
    pub const fn end_line(&self, side: ThreeSide) -> usize {
        self.range(side).end()
    }

    /// Whether `side` covers no lines.
    #[must_use]
    pub const fn is_empty(&self, side: ThreeSide) -> bool {
        self.range(side).is_empty()
    }
}

/// Kind of a three-way change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TextDiffType {
    /// Content added relative to BASE.
    Inserted,
    /// Content removed relative to BASE.
    Deleted,
    /// Content replaced relative to BASE.
    Modified,
    /// LEFT and RIGHT changed BASE in incompatible ways.
    Conflict,
}

/// Classification of one aligned range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ConflictType {
    diff_type: TextDiffType,
    left_change: bool,
    right_change: bool,
}

impl ConflictType {
    /// A classification where both sides changed.
    #[must_use]
    pub const fn new(diff_type: TextDiffType) -> Self {
        Self::with_sides(diff_type, true, true)
    }

    /// A classification with explicit change flags.
    #[must_use]
    pub const fn with_sides(diff_type: TextDiffType, left_change: bool, right_change: bool) -> Self {
        Self {
            diff_type,
            left_change,
            right_change,
        }
    }

    /// The change kind.
    #[must_use]
    pub const fn diff_type(&self) -> TextDiffType {
        self.diff_type
    }

    /// Whether LEFT differs from BASE.
    #[must_use]
    pub const fn is_left_change(&self) -> bool {
        self.left_change
    }

    /// Whether RIGHT differs from BASE.
    #[must_use]
    pub const fn is_right_change(&self) -> bool {
        self.right_change
    }

    /// Whether `side` differs from BASE.
    #[must_use]
    pub const fn is_change(&self, side: Side) -> bool {
        match side {
            Side::Left => self.left_change,
            Side::Right => self.right_change,
        }
    }

    /// Whether the range is an unresolved conflict.
    #[must_use]
    pub const fn is_conflict(&self) -> bool {
        matches!(self.diff_type, TextDiffType::Conflict)
    }
}
