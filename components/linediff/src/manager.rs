//! Entry point other components use to compare and merge text.

use tracing::{debug, instrument};

use crate::diff::{self, LineFragment};
use crate::error::ComparisonError;
use crate::merge::{self, MergeOutcome};
use crate::policy::{ComparisonPolicy, content_equal};
use crate::settings::ComparisonSettings;
use crate::text::LineStore;
use crate::three_way::ThreesideChange;

/// Facade over the diff engine, the classifier and the merge.
///
/// Holds no state besides its settings, so one manager can be shared freely
/// between threads.
#[derive(Debug, Clone, Default)]
pub struct ComparisonManager {
    settings: ComparisonSettings,
}

impl ComparisonManager {
    /// Creates a manager with the given settings.
    #[must_use]
    pub const fn new(settings: ComparisonSettings) -> Self {
        Self { settings }
    }

    /// Computes the fragments transforming `a` into `b`.
    #[must_use]
    #[instrument(skip_all, fields(policy = %policy))]
    pub fn compare(&self, a: &LineStore, b: &LineStore, policy: ComparisonPolicy) -> Vec<LineFragment> {
        diff::compare(a, b, policy, &self.settings)
    }

    /// Whether two optional contents are equal under `policy`.
    #[must_use]
    #[allow(clippy::unused_self)]
    pub fn content_equals(&self, a: Option<&str>, b: Option<&str>, policy: ComparisonPolicy) -> bool {
        content_equal(a, b, policy)
    }

    /// Aligns LEFT and RIGHT against BASE and classifies every aligned range.
    ///
    /// # Errors
    ///
    /// Returns an error if an aligned range cannot be classified.
    #[instrument(skip_all, fields(policy = %policy))]
    pub fn compare_three_way(
        &self,
        left: &LineStore,
        base: &LineStore,
        right: &LineStore,
        policy: ComparisonPolicy,
    ) -> Result<Vec<ThreesideChange>, ComparisonError> {
        let changes = merge::align(left, base, right, policy, &self.settings)
            .into_iter()
            .map(|range| ThreesideChange::new(range, [left, base, right], policy))
            .collect::<Result<Vec<_>, _>>()?;
        debug!(
            changes = changes.len(),
            conflicts = changes.iter().filter(|c| c.is_conflict()).count(),
            "three-way comparison finished"
        );
        Ok(changes)
    }

    /// Merges LEFT and RIGHT into BASE.
    ///
    /// # Errors
    ///
    /// Returns an error if an aligned range cannot be classified.
    #[instrument(skip_all, fields(policy = %policy))]
    pub fn merge(
        &self,
        left: &LineStore,
        base: &LineStore,
        right: &LineStore,
        policy: ComparisonPolicy,
    ) -> Result<MergeOutcome, ComparisonError> {
        merge::merge(left, base, right, policy, &self.settings)
    }
}
