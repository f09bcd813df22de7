//! Three-way alignment and merge.
//!
//! BASE is diffed against LEFT and against RIGHT. Fragments from both diffs
//! whose BASE ranges overlap or touch are grouped into one chunk, and each
//! chunk is mapped back into LEFT and RIGHT through the unchanged lines around
//! it.

use tracing::{debug, trace};

use super::outcome::{LineConflict, MergeOutcome};
use crate::diff::{self, LineFragment};
use crate::error::ComparisonError;
use crate::policy::ComparisonPolicy;
use crate::settings::ComparisonSettings;
use crate::side::{Side, ThreeSide};
use crate::text::{LineRange, LineStore};
use crate::three_way::{ThreeSideRange, ThreesideChange};

/// Aligns the changes of LEFT and RIGHT against BASE.
///
/// Every returned range has at least one non-empty side, and ranges are
/// strictly ordered on all three sides.
#[must_use]
pub fn align(
    left: &LineStore,
    base: &LineStore,
    right: &LineStore,
    policy: ComparisonPolicy,
    settings: &ComparisonSettings,
) -> Vec<ThreeSideRange> {
    let sides = [left, right];
    let fragments: [Vec<LineFragment>; 2] =
        Side::ALL.map(|side| diff::compare(base, *side.select(&sides), policy, settings));

    let mut cursor = [0usize; 2];
    let mut delta = [0isize; 2];
    let mut ranges = Vec::new();

    while let Some(start) = Side::ALL
        .iter()
        .filter_map(|side| fragments[side.index()].get(cursor[side.index()]))
        .map(LineFragment::start1)
        .min()
    {
        let mut end = start;
        let mut growth = [0isize; 2];
        loop {
            let mut absorbed = false;
            for side in Side::ALL {
                let i = side.index();
                while let Some(fragment) = fragments[i].get(cursor[i]) {
                    if fragment.start1() > end {
                        break;
                    }
                    end = end.max(fragment.end1());
                    growth[i] += fragment.inserted().len() as isize - fragment.deleted().len() as isize;
                    cursor[i] += 1;
                    absorbed = true;
                }
            }
            if !absorbed {
                break;
            }
        }

        let side_range = |i: usize| {
            LineRange::from_bounds(
                start.saturating_add_signed(delta[i]),
                end.saturating_add_signed(delta[i] + growth[i]),
            )
        };
        let range = ThreeSideRange::from_ranges(
            side_range(Side::Left.index()),
            LineRange::from_bounds(start, end),
            side_range(Side::Right.index()),
        );
        trace!(?range, "aligned chunk");
        ranges.push(range);

        for side in Side::ALL {
            delta[side.index()] += growth[side.index()];
        }
    }

    debug!(chunks = ranges.len(), "three-way alignment finished");
    ranges
}

/// Merges LEFT and RIGHT into BASE.
///
/// One-sided changes are taken from the side that made them; changes equal on
/// both sides are taken from LEFT. Unchanged lines come from BASE.
///
/// # Errors
///
/// Returns an error if an aligned range cannot be classified, which only
/// happens when the diffs disagree with literal comparison against BASE.
pub fn merge(
    left: &LineStore,
    base: &LineStore,
    right: &LineStore,
    policy: ComparisonPolicy,
    settings: &ComparisonSettings,
) -> Result<MergeOutcome, ComparisonError> {
    let stores = [left, base, right];
    let mut merged: Vec<&str> = Vec::with_capacity(base.line_count());
    let mut conflicts = Vec::new();
    let mut base_line = 0;

    for range in align(left, base, right, policy, settings) {
        let change = ThreesideChange::new(range, stores, policy)?;
        merged.extend(base.slice(LineRange::from_bounds(base_line, range.start_line(ThreeSide::Base)))?);

        if change.is_conflict() {
            let owned = |side: ThreeSide| -> Result<Vec<String>, ComparisonError> {
                let store = *side.select(&stores);
                Ok(store
                    .slice(range.range(side))?
                    .into_iter()
                    .map(ToString::to_string)
                    .collect())
            };
            conflicts.push(LineConflict::new(
                range,
                merged.len(),
                owned(ThreeSide::Base)?,
                owned(ThreeSide::Left)?,
                owned(ThreeSide::Right)?,
            ));
        } else {
            let taken = if change.is_change(Side::Left) {
                ThreeSide::Left
            } else {
                ThreeSide::Right
            };
            merged.extend(taken.select(&stores).slice(range.range(taken))?);
        }
        base_line = range.end_line(ThreeSide::Base);
    }
    merged.extend(base.slice(LineRange::from_bounds(base_line, base.line_count()))?);

    if conflicts.is_empty() {
        Ok(MergeOutcome::Merged(merged.join("\n")))
    } else {
        debug!(conflicts = conflicts.len(), "merge finished with conflicts");
        Ok(MergeOutcome::Conflicts(conflicts))
    }
}
