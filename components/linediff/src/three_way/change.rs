//! A classified three-way change.

use serde::Serialize;

use super::{ConflictType, TextDiffType, ThreeSideRange, classify};
use crate::error::ComparisonError;
use crate::policy::ComparisonPolicy;
use crate::side::{Side, ThreeSide};
use crate::text::LineStore;

/// An aligned range together with its classification.
///
/// The classification is computed once, when the change is created, and only
/// refreshed by an explicit [`ThreesideChange::reclassify`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ThreesideChange {
    range: ThreeSideRange,
    conflict_type: ConflictType,
}

impl ThreesideChange {
    /// Classifies `range` against LEFT, BASE and RIGHT.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`classify`].
    pub fn new(
        range: ThreeSideRange,
        stores: [&LineStore; 3],
        policy: ComparisonPolicy,
    ) -> Result<Self, ComparisonError> {
        let conflict_type = classify(&range, stores, policy)?;
        Ok(Self {
            range,
            conflict_type,
        })
    }

    /// Recomputes the classification after the underlying text changed.
    ///
    /// On error the previous classification is kept.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`classify`].
    pub fn reclassify(
        &mut self,
        stores: [&LineStore; 3],
        policy: ComparisonPolicy,
    ) -> Result<(), ComparisonError> {
        self.conflict_type = classify(&self.range, stores, policy)?;
        Ok(())
    }

    /// The aligned range.
    #[must_use]
    pub const fn range(&self) -> ThreeSideRange {
        self.range
    }

    /// The stored classification.
    #[must_use]
    pub const fn conflict_type(&self) -> ConflictType {
        self.conflict_type
    }

    /// Kind of the change.
    #[must_use]
    pub const fn diff_type(&self) -> TextDiffType {
        self.conflict_type.diff_type()
    }

    /// Whether the change is an unresolved conflict.
    #[must_use]
    pub const fn is_conflict(&self) -> bool {
        self.conflict_type.is_conflict()
    }

    /// Whether `side` differs from BASE.
    #[must_use]
    pub const fn is_change(&self, side: Side) -> bool {
        self.conflict_type.is_change(side)
    }

    /// Like [`ThreesideChange::is_change`]; BASE always counts as changed.
    #[must_use]
    pub const fn is_change_on(&self, side: ThreeSide) -> bool {
        match side.as_side() {
            Some(side) => self.is_change(side),
            None => true,
        }
    }

    /// First line on `side`.
    #[must_use]
    pub const fn start_line(&self, side: ThreeSide) -> usize {
        self.range.start_line(side)
    }

    /// End line on `side` (exclusive).
    #[must_use]
    pub const fn end_line(&self, side: ThreeSide) -> usize {
        self.range.end_line(side)
    }
}
