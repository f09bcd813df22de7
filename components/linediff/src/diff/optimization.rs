//! Post-processing of corrected fragments.
//!
//! Two passes run in order: neighbouring fragments separated by a single
//! unimportant line are merged when that does not make the change taller, and
//! leading or trailing line pairs that are literally equal are trimmed away.

use tracing::trace;

use super::LineFragment;
use crate::policy::non_space_char_count;

/// Runs both optimization passes.
pub(crate) fn optimize(
    mut fragments: Vec<LineFragment>,
    lines1: &[&str],
    lines2: &[&str],
    threshold: usize,
) -> Vec<LineFragment> {
    merge_unimportant_separators(&mut fragments, lines1, lines2, threshold);
    trim_equal_boundaries(fragments, lines1, lines2)
}

/// Merges fragment pairs split by one unimportant line on both sides.
///
/// A merge is only taken when the merged fragment is no taller than the two
/// parts shown separately.
fn merge_unimportant_separators(
    fragments: &mut Vec<LineFragment>,
    lines1: &[&str],
    lines2: &[&str],
    threshold: usize,
) {
    let mut i = 0;
    while i + 1 < fragments.len() {
        let (current, next) = (fragments[i], fragments[i + 1]);
        let separated_by_one = next.start1() == current.end1() + 1
            && next.start2() == current.end2() + 1;
        let unimportant = |line: Option<&&str>| {
            line.is_some_and(|line| non_space_char_count(line) < threshold)
        };

        if separated_by_one
            && unimportant(lines1.get(current.end1()))
            && unimportant(lines2.get(current.end2()))
        {
            let merged = current.union(&next);
            if merged.weight() <= current.weight() + next.weight() {
                trace!(
                    start1 = merged.start1(),
                    start2 = merged.start2(),
                    "merging across unimportant line"
                );
                fragments[i] = merged;
                fragments.remove(i + 1);
                continue;
            }
        }
        i += 1;
    }
}

/// Drops literally equal line pairs from both ends of every fragment.
fn trim_equal_boundaries(
    fragments: Vec<LineFragment>,
    lines1: &[&str],
    lines2: &[&str],
) -> Vec<LineFragment> {
    fragments
        .into_iter()
        .filter_map(|fragment| {
            let (mut start1, mut end1) = (fragment.start1(), fragment.end1());
            let (mut start2, mut end2) = (fragment.start2(), fragment.end2());
            while start1 < end1 && start2 < end2 && lines1[start1] == lines2[start2] {
                start1 += 1;
                start2 += 1;
            }
            while start1 < end1 && start2 < end2 && lines1[end1 - 1] == lines2[end2 - 1] {
                end1 -= 1;
                end2 -= 1;
            }
            (start1 < end1 || start2 < end2)
                .then(|| LineFragment::from_bounds(start1, end1, start2, end2))
        })
        .collect()
}
