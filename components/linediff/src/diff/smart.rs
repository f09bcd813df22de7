//! Two-pass comparison anchored on important lines.
//!
//! Short lines such as a lone `}` match almost anywhere and can pull a plain
//! edit script out of shape. This pass first diffs only the important lines,
//! takes their matches as anchors, then diffs every gap between anchors with
//! all lines included.

use super::{DiffAlgorithm, LineFragment, LineKey, matched_pairs};
use crate::policy::non_space_char_count;

/// Computes raw fragments using important lines as anchors.
///
/// A line is important when it has at least `threshold` non-whitespace
/// characters.
pub(crate) fn compare_smart(
    algorithm: &impl DiffAlgorithm,
    lines1: &[&str],
    lines2: &[&str],
    keys1: &[LineKey],
    keys2: &[LineKey],
    threshold: usize,
) -> Vec<LineFragment> {
    let important = |lines: &[&str]| -> Vec<usize> {
        lines
            .iter()
            .enumerate()
            .filter(|(_, line)| non_space_char_count(line) >= threshold)
            .map(|(index, _)| index)
            .collect()
    };
    let (indices1, indices2) = (important(lines1), important(lines2));
    let important_keys1: Vec<LineKey> = indices1.iter().map(|&i| keys1[i]).collect();
    let important_keys2: Vec<LineKey> = indices2.iter().map(|&j| keys2[j]).collect();

    let coarse = algorithm.diff(&important_keys1, &important_keys2);
    let anchors = matched_pairs(&coarse, indices1.len(), indices2.len())
        .into_iter()
        .map(|(i, j)| (indices1[i], indices2[j]));

    let mut fragments = Vec::new();
    let (mut last1, mut last2) = (0, 0);
    for (anchor1, anchor2) in anchors.chain(std::iter::once((keys1.len(), keys2.len()))) {
        let gap = algorithm.diff(&keys1[last1..anchor1], &keys2[last2..anchor2]);
        fragments.extend(gap.into_iter().map(|f| f.offset(last1, last2)));
        last1 = anchor1 + 1;
        last2 = anchor2 + 1;
    }
    fragments
}
