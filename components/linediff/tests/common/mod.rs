//! Test utilities for linediff integration tests
//!
//! Shared builders for line stores, fragment bounds and settings.

#![allow(dead_code)]

use linediff::{ComparisonSettings, LineFragment, LineStore};

/// Fragment bounds as `(start1, end1, start2, end2)`.
pub type Bounds = (usize, usize, usize, usize);

/// Store holding exactly `lines`.
pub fn store(lines: &[&str]) -> LineStore {
    LineStore::from_lines(lines)
}

/// Bounds of every fragment, in order.
pub fn bounds(fragments: &[LineFragment]) -> Vec<Bounds> {
    fragments
        .iter()
        .map(|f| (f.start1(), f.end1(), f.start2(), f.end2()))
        .collect()
}

/// Default settings with smart blending switched on.
pub fn smart_settings() -> ComparisonSettings {
    ComparisonSettings {
        smart_blend: true,
        ..ComparisonSettings::default()
    }
}

/// Checks ordering and equal unchanged gaps on both sides.
pub fn assert_well_formed(fragments: &[LineFragment], len1: usize, len2: usize) {
    let (mut last1, mut last2) = (0, 0);
    for (index, f) in fragments.iter().enumerate() {
        assert!(
            f.start1() < f.end1() || f.start2() < f.end2(),
            "fragment {index} is empty"
        );
        let (gap1, gap2) = (f.start1() - last1, f.start2() - last2);
        assert_eq!(gap1, gap2, "unequal gap before fragment {index}");
        if index > 0 {
            assert!(gap1 > 0, "fragment {index} touches its predecessor");
        }
        last1 = f.end1();
        last2 = f.end2();
    }
    assert!(last1 <= len1 && last2 <= len2, "fragment out of bounds");
    assert_eq!(len1 - last1, len2 - last2, "unequal trailing gap");
}
