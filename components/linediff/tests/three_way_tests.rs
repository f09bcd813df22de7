//! Three-way classification and merge through the public API.

mod common;

use common::store;
use linediff::three_way::classify;
use linediff::{
    ComparisonError, ComparisonManager, ComparisonPolicy, ConflictType, LineRange, LineStore,
    MergeOutcome, Side, TextDiffType, ThreeSide, ThreeSideRange, ThreesideChange,
};

fn range(l: (usize, usize), b: (usize, usize), r: (usize, usize)) -> ThreeSideRange {
    ThreeSideRange::new(
        LineRange::new(l.0, l.1).unwrap(),
        LineRange::new(b.0, b.1).unwrap(),
        LineRange::new(r.0, r.1).unwrap(),
    )
    .unwrap()
}

// =============================================================================
// Classifier
// =============================================================================

#[test]
fn right_only_change_is_modified_on_right() {
    let (left, base, right) = (store(&["a"]), store(&["a"]), store(&["b"]));

    let conflict = classify(
        &range((0, 1), (0, 1), (0, 1)),
        [&left, &base, &right],
        ComparisonPolicy::Exact,
    )
    .unwrap();

    assert_eq!(
        conflict,
        ConflictType::with_sides(TextDiffType::Modified, false, true)
    );
}

#[test]
fn insertion_on_right_only() {
    let (left, base, right) = (store(&[]), store(&[]), store(&["x"]));

    let conflict = classify(
        &range((0, 0), (0, 0), (0, 1)),
        [&left, &base, &right],
        ComparisonPolicy::Exact,
    )
    .unwrap();

    assert_eq!(conflict.diff_type(), TextDiffType::Inserted);
    assert!(!conflict.is_left_change());
    assert!(conflict.is_right_change());
}

#[test]
fn all_empty_range_is_rejected() {
    let empty = LineRange::empty(0);
    assert_eq!(
        ThreeSideRange::new(empty, empty, empty),
        Err(ComparisonError::EmptyThreeSideRange)
    );
}

#[test]
fn empty_and_whitespace_sides_are_equal_only_when_ignoring_whitespace() {
    let (left, base, right) = (store(&[]), store(&["x"]), store(&["  "]));
    let r = range((0, 0), (0, 1), (0, 1));

    let relaxed = classify(&r, [&left, &base, &right], ComparisonPolicy::IgnoreWhitespace).unwrap();
    let trimmed = classify(&r, [&left, &base, &right], ComparisonPolicy::Trim).unwrap();

    assert_eq!(relaxed.diff_type(), TextDiffType::Modified);
    assert_eq!(trimmed.diff_type(), TextDiffType::Conflict);
}

#[test]
fn change_record_answers_per_side() {
    let (left, base, right) = (store(&["x"]), store(&["a"]), store(&["a"]));
    let change = ThreesideChange::new(
        range((0, 1), (0, 1), (0, 1)),
        [&left, &base, &right],
        ComparisonPolicy::Exact,
    )
    .unwrap();

    assert!(change.is_change(Side::Left));
    assert!(!change.is_change(Side::Right));
    assert!(change.is_change_on(ThreeSide::Base));
    assert_eq!(change.start_line(ThreeSide::Left), 0);
    assert_eq!(change.end_line(ThreeSide::Right), 1);
}

// =============================================================================
// Merge
// =============================================================================

fn merge(left: &str, base: &str, right: &str) -> MergeOutcome {
    let manager = ComparisonManager::default();
    let [l, b, r] = [left, base, right].map(LineStore::from_text);
    manager.merge(&l, &b, &r, ComparisonPolicy::Exact).unwrap()
}

#[test]
fn independent_changes_merge_cleanly() {
    assert_eq!(
        merge("a\nB\nc\nd\n", "a\nb\nc\nd\n", "a\nb\nc\nD\n"),
        MergeOutcome::Merged("a\nB\nc\nD\n".to_string())
    );
}

#[test]
fn insertions_at_different_places_merge() {
    assert_eq!(
        merge("top\na\nb", "a\nb", "a\nb\nbottom"),
        MergeOutcome::Merged("top\na\nb\nbottom".to_string())
    );
}

#[test]
fn conflicting_edits_are_reported_with_markers() {
    let MergeOutcome::Conflicts(conflicts) = merge("a\nleft\nc", "a\nb\nc", "a\nright\nc") else {
        panic!("expected conflicts");
    };

    assert_eq!(conflicts.len(), 1);
    assert_eq!(
        conflicts[0].format_with_markers("LEFT", "RIGHT"),
        "<<<<<<< LEFT\nleft\n||||||| base\nb\n=======\nright\n>>>>>>> RIGHT\n"
    );
}

#[test]
fn different_insertions_at_same_place_conflict() {
    let MergeOutcome::Conflicts(conflicts) = merge("a\nx\nb", "a\nb", "a\ny\nb") else {
        panic!("expected conflicts");
    };

    assert!(conflicts[0].base_lines().is_empty());
    assert_eq!(conflicts[0].range().range(ThreeSide::Base), LineRange::empty(1));
}

#[test]
fn compare_three_way_lists_every_change() {
    let manager = ComparisonManager::default();
    let [left, base, right] =
        ["a\nx\nc\nd", "a\nb\nc\nd", "a\nb\nc"].map(LineStore::from_text);

    let changes = manager
        .compare_three_way(&left, &base, &right, ComparisonPolicy::Exact)
        .unwrap();

    let summary: Vec<_> = changes
        .iter()
        .map(|c| (c.diff_type(), c.is_change(Side::Left), c.is_change(Side::Right)))
        .collect();
    assert_eq!(
        summary,
        vec![
            (TextDiffType::Modified, true, false),
            (TextDiffType::Deleted, false, true),
        ]
    );
}
