//! Decision table for aligned three-way ranges.

use tracing::trace;

use super::{ConflictType, TextDiffType, ThreeSideRange};
use crate::error::ComparisonError;
use crate::policy::{ComparisonPolicy, content_equal};
use crate::side::ThreeSide;
use crate::text::LineStore;

/// Classifies one aligned range.
///
/// `stores` holds LEFT, BASE and RIGHT in that order. Sides are compared to
/// BASE literally; LEFT and RIGHT are compared to each other under `policy`.
///
/// # Errors
///
/// Returns [`ComparisonError::OutOfBounds`] if a range does not fit its store,
/// and [`ComparisonError::UnalignedRange`] if neither side differs from BASE.
pub fn classify(
    range: &ThreeSideRange,
    stores: [&LineStore; 3],
    policy: ComparisonPolicy,
) -> Result<ConflictType, ComparisonError> {
    let [left, base, right] = ThreeSide::ALL.map(|side| {
        let store = *side.select(&stores);
        store.range_content(range.range(side))
    });
    let (left, base, right) = (left?, base?, right?);

    let left_empty = range.is_empty(ThreeSide::Left);
    let base_empty = range.is_empty(ThreeSide::Base);
    let right_empty = range.is_empty(ThreeSide::Right);

    let conflict = if base_empty && left_empty {
        ConflictType::with_sides(TextDiffType::Inserted, false, true)
    } else if base_empty && right_empty {
        ConflictType::with_sides(TextDiffType::Inserted, true, false)
    } else if base_empty {
        if sides_equal(left, right, policy) {
            ConflictType::new(TextDiffType::Inserted)
        } else {
            ConflictType::new(TextDiffType::Conflict)
        }
    } else if left_empty && right_empty {
        ConflictType::new(TextDiffType::Deleted)
    } else {
        let unchanged_left = left == base;
        let unchanged_right = right == base;
        match (unchanged_left, unchanged_right) {
            (true, true) => return Err(ComparisonError::UnalignedRange),
            (true, false) => {
                let diff_type = if right_empty {
                    TextDiffType::Deleted
                } else {
                    TextDiffType::Modified
                };
                ConflictType::with_sides(diff_type, false, true)
            }
            (false, true) => {
                let diff_type = if left_empty {
                    TextDiffType::Deleted
                } else {
                    TextDiffType::Modified
                };
                ConflictType::with_sides(diff_type, true, false)
            }
            (false, false) if sides_equal(left, right, policy) => {
                ConflictType::new(TextDiffType::Modified)
            }
            (false, false) => ConflictType::new(TextDiffType::Conflict),
        }
    };

    trace!(?conflict, %policy, "classified three-way range");
    Ok(conflict)
}

/// LEFT-vs-RIGHT equality; whitespace-insensitive comparison reads an empty
/// side as the empty string.
fn sides_equal(left: Option<&str>, right: Option<&str>, policy: ComparisonPolicy) -> bool {
    if policy == ComparisonPolicy::IgnoreWhitespace {
        content_equal(
            Some(left.unwrap_or_default()),
            Some(right.unwrap_or_default()),
            policy,
        )
    } else {
        content_equal(left, right, policy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::side::Side;
    use crate::text::LineRange;

    fn range(l: (usize, usize), b: (usize, usize), r: (usize, usize)) -> ThreeSideRange {
        ThreeSideRange::new(
            LineRange::new(l.0, l.1).unwrap(),
            LineRange::new(b.0, b.1).unwrap(),
            LineRange::new(r.0, r.1).unwrap(),
        )
        .unwrap()
    }

    fn classify_texts(
        texts: [&str; 3],
        range: ThreeSideRange,
        policy: ComparisonPolicy,
    ) -> Result<ConflictType, ComparisonError> {
        let [l, b, r] = texts.map(LineStore::from_text);
        classify(&range, [&l, &b, &r], policy)
    }

    #[test]
    fn test_right_only_modification() {
        let conflict = classify_texts(
            ["a", "a", "b"],
            range((0, 1), (0, 1), (0, 1)),
            ComparisonPolicy::Exact,
        )
        .unwrap();
        assert_eq!(conflict.diff_type(), TextDiffType::Modified);
        assert!(!conflict.is_change(Side::Left));
        assert!(conflict.is_change(Side::Right));
    }

    #[test]
    fn test_insertions() {
        let policy = ComparisonPolicy::Exact;
        let right_only =
            classify_texts(["", "", "x"], range((0, 0), (0, 0), (0, 1)), policy).unwrap();
        assert_eq!(
            right_only,
            ConflictType::with_sides(TextDiffType::Inserted, false, true)
        );

        let left_only =
            classify_texts(["x", "", ""], range((0, 1), (0, 0), (0, 0)), policy).unwrap();
        assert_eq!(
            left_only,
            ConflictType::with_sides(TextDiffType::Inserted, true, false)
        );

        let same = classify_texts(["x", "", "x"], range((0, 1), (0, 0), (0, 1)), policy).unwrap();
        assert_eq!(same, ConflictType::new(TextDiffType::Inserted));

        let different =
            classify_texts(["x", "", "y"], range((0, 1), (0, 0), (0, 1)), policy).unwrap();
        assert!(different.is_conflict());
    }

    #[test]
    fn test_deletions() {
        let policy = ComparisonPolicy::Exact;
        let both = classify_texts(["", "x", ""], range((0, 0), (0, 1), (0, 0)), policy).unwrap();
        assert_eq!(both, ConflictType::new(TextDiffType::Deleted));

        let right = classify_texts(["x", "x", ""], range((0, 1), (0, 1), (0, 0)), policy).unwrap();
        assert_eq!(
            right,
            ConflictType::with_sides(TextDiffType::Deleted, false, true)
        );

        let left = classify_texts(["", "x", "x"], range((0, 0), (0, 1), (0, 1)), policy).unwrap();
        assert_eq!(
            left,
            ConflictType::with_sides(TextDiffType::Deleted, true, false)
        );
    }

    #[test]
    fn test_both_modified() {
        let policy = ComparisonPolicy::Trim;
        let r = range((0, 1), (0, 1), (0, 1));
        let same = classify_texts(["y ", "x", " y"], r, policy).unwrap();
        assert_eq!(same, ConflictType::new(TextDiffType::Modified));

        let different = classify_texts(["y", "x", "z"], r, policy).unwrap();
        assert_eq!(different, ConflictType::new(TextDiffType::Conflict));
    }

    #[test]
    fn test_base_comparison_is_literal() {
        // Whitespace-only edits still count as changes relative to BASE.
        let conflict = classify_texts(
            ["x ", "x", "y"],
            range((0, 1), (0, 1), (0, 1)),
            ComparisonPolicy::IgnoreWhitespace,
        )
        .unwrap();
        assert!(conflict.is_conflict());
    }

    #[test]
    fn test_ignore_whitespace_reads_empty_side_as_empty_text() {
        let texts = ["", "x", "  "];
        let r = range((0, 0), (0, 1), (0, 1));
        let relaxed = classify_texts(texts, r, ComparisonPolicy::IgnoreWhitespace).unwrap();
        assert_eq!(relaxed, ConflictType::new(TextDiffType::Modified));

        let exact = classify_texts(texts, r, ComparisonPolicy::Exact).unwrap();
        assert_eq!(exact, ConflictType::new(TextDiffType::Conflict));
    }

    #[test]
    fn test_unchanged_range_rejected() {
        assert_eq!(
            classify_texts(
                ["a", "a", "a"],
                range((0, 1), (0, 1), (0, 1)),
                ComparisonPolicy::Exact
            ),
            Err(ComparisonError::UnalignedRange)
        );
    }

    #[test]
    fn test_out_of_bounds_rejected() {
        assert!(matches!(
            classify_texts(
                ["a", "a", "b"],
                range((0, 1), (0, 2), (0, 1)),
                ComparisonPolicy::Exact
            ),
            Err(ComparisonError::OutOfBounds { line_count: 1, .. })
        ));
    }
}
