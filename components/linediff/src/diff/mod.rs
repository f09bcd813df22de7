//! Line diff engine.
//!
//! [`compare`] runs a fixed pipeline of pure stages over an owned fragment
//! list:
//!
//! 1. raw edit script ([`myers`], or [`smart`] when smart blending is on),
//! 2. boundary correction ([`correction`]),
//! 3. chunk optimization ([`optimization`]).
//!
//! Every line is interned once per call to a [`LineKey`] under the requested
//! policy, so the stages compare integers instead of strings.

pub(crate) mod correction;
pub(crate) mod myers;
pub(crate) mod optimization;
pub(crate) mod smart;

use serde::Serialize;
use std::borrow::Cow;
use std::collections::HashMap;
use tracing::{debug, trace};

use crate::error::ComparisonError;
use crate::policy::ComparisonPolicy;
use crate::settings::ComparisonSettings;
use crate::side::Side;
use crate::text::{LineRange, LineStore};

pub(crate) use myers::MyersDiff;

/// Interned line content; equal keys mean equal lines under the policy.
pub(crate) type LineKey = usize;

/// Kind of a two-way change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ChangeKind {
    /// Lines present only in the second sequence.
    Insert,
    /// Lines present only in the first sequence.
    Delete,
    /// Lines replaced by different lines.
    Modify,
}

/// One change unit between two line sequences.
///
/// `deleted` indexes the first sequence and `inserted` the second. At least
/// one of them is non-empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct LineFragment {
    deleted: LineRange,
    inserted: LineRange,
}

impl LineFragment {
    /// Creates a fragment from its two ranges.
    ///
    /// # Errors
    ///
    /// Returns [`ComparisonError::EmptyFragment`] if both ranges are empty.
    pub const fn new(deleted: LineRange, inserted: LineRange) -> Result<Self, ComparisonError> {
        if deleted.is_empty() && inserted.is_empty() {
            return Err(ComparisonError::EmptyFragment);
        }
        Ok(Self { deleted, inserted })
    }

    pub(crate) const fn from_bounds(start1: usize, end1: usize, start2: usize, end2: usize) -> Self {
        Self {
            deleted: LineRange::from_bounds(start1, end1),
            inserted: LineRange::from_bounds(start2, end2),
        }
    }

    /// Range in the first sequence.
    #[must_use]
    pub const fn deleted(&self) -> LineRange {
        self.deleted
    }

    /// Range in the second sequence.
    #[must_use]
    pub const fn inserted(&self) -> LineRange {
        self.inserted
    }

    /// Start line in the first sequence.
    #[must_use]
    pub const fn start1(&self) -> usize {
        self.deleted.start()
    }

    /// End line in the first sequence (exclusive).
    #[must_use]
    pub const fn end1(&self) -> usize {
        self.deleted.end()
    }

    /// Start line in the second sequence.
    #[must_use]
    pub const fn start2(&self) -> usize {
        self.inserted.start()
    }

    /// End line in the second sequence (exclusive).
    #[must_use]
    pub const fn end2(&self) -> usize {
        self.inserted.end()
    }

    /// Range on the given side; `Left` is the first sequence.
    #[must_use]
    pub const fn range(&self, side: Side) -> LineRange {
        match side {
            Side::Left => self.deleted,
            Side::Right => self.inserted,
        }
    }

    /// Classifies the fragment.
    #[must_use]
    pub const fn kind(&self) -> ChangeKind {
        if self.deleted.is_empty() {
            ChangeKind::Insert
        } else if self.inserted.is_empty() {
            ChangeKind::Delete
        } else {
            ChangeKind::Modify
        }
    }

    /// Number of display rows the change occupies.
    pub(crate) const fn weight(&self) -> usize {
        let (deleted, inserted) = (self.deleted.len(), self.inserted.len());
        if deleted > inserted { deleted } else { inserted }
    }

    pub(crate) const fn offset(self, delta1: usize, delta2: usize) -> Self {
        Self::from_bounds(
            self.start1() + delta1,
            self.end1() + delta1,
            self.start2() + delta2,
            self.end2() + delta2,
        )
    }

    /// Moves both sides by `delta` lines.
    pub(crate) const fn shift(self, delta: isize) -> Self {
        Self::from_bounds(
            self.start1().saturating_add_signed(delta),
            self.end1().saturating_add_signed(delta),
            self.start2().saturating_add_signed(delta),
            self.end2().saturating_add_signed(delta),
        )
    }

    /// Whether `next` starts right where this fragment ends on both sides.
    pub(crate) const fn touches(&self, next: &Self) -> bool {
        self.end1() == next.start1() && self.end2() == next.start2()
    }

    /// Covers this fragment and a later one, including the lines between.
    pub(crate) const fn union(&self, next: &Self) -> Self {
        Self::from_bounds(self.start1(), next.end1(), self.start2(), next.end2())
    }
}

/// Trait for raw edit-script algorithms over interned lines.
///
/// The trait uses `Send + Sync` bounds so one instance can serve concurrent
/// comparisons.
pub(crate) trait DiffAlgorithm: Send + Sync {
    /// Computes ordered, non-touching fragments transforming `a` into `b`.
    fn diff(&self, a: &[LineKey], b: &[LineKey]) -> Vec<LineFragment>;
}

/// Compares two line stores.
///
/// Always succeeds; two stores that are equal under `policy` yield no
/// fragments.
#[must_use]
pub fn compare(
    a: &LineStore,
    b: &LineStore,
    policy: ComparisonPolicy,
    settings: &ComparisonSettings,
) -> Vec<LineFragment> {
    let lines1: Vec<&str> = a.lines().collect();
    let lines2: Vec<&str> = b.lines().collect();
    compare_lines(&lines1, &lines2, policy, settings)
}

/// Compares two slices of lines. See [`compare`].
#[must_use]
pub fn compare_lines(
    lines1: &[&str],
    lines2: &[&str],
    policy: ComparisonPolicy,
    settings: &ComparisonSettings,
) -> Vec<LineFragment> {
    let _span = tracing::debug_span!(
        "compare_lines",
        %policy,
        left = lines1.len(),
        right = lines2.len()
    )
    .entered();

    let (keys1, keys2) = intern_lines(lines1, lines2, policy);
    let threshold = settings.unimportant_line_char_count;

    let raw = if settings.smart_blend {
        smart::compare_smart(&MyersDiff, lines1, lines2, &keys1, &keys2, threshold)
    } else {
        MyersDiff.diff(&keys1, &keys2)
    };
    trace!(fragments = raw.len(), "raw edit script");

    let corrected = correction::correct_boundaries(raw, [&keys1, &keys2], [lines1, lines2]);
    trace!(fragments = corrected.len(), "boundaries corrected");

    let optimized = optimization::optimize(corrected, lines1, lines2, threshold);
    debug!(fragments = optimized.len(), "comparison finished");
    optimized
}

/// Replays `fragments` on `lines1`, taking inserted content from `lines2`.
///
/// With fragments from an [`ComparisonPolicy::Exact`] comparison the result
/// equals `lines2`; under relaxed policies unchanged lines keep the first
/// sequence's text.
#[must_use]
pub fn apply_fragments(lines1: &[&str], lines2: &[&str], fragments: &[LineFragment]) -> Vec<String> {
    let mut result = Vec::with_capacity(lines2.len());
    let mut last = 0;
    for fragment in fragments {
        result.extend(
            lines1
                .get(last..fragment.start1())
                .unwrap_or_default()
                .iter()
                .map(ToString::to_string),
        );
        result.extend(
            lines2
                .get(fragment.inserted().as_range())
                .unwrap_or_default()
                .iter()
                .map(ToString::to_string),
        );
        last = fragment.end1();
    }
    result.extend(
        lines1
            .get(last..)
            .unwrap_or_default()
            .iter()
            .map(ToString::to_string),
    );
    result
}

/// Pairs of matched line indices left unchanged by `fragments`.
pub(crate) fn matched_pairs(
    fragments: &[LineFragment],
    len1: usize,
    len2: usize,
) -> Vec<(usize, usize)> {
    let mut pairs = Vec::new();
    let (mut i, mut j) = (0, 0);
    for fragment in fragments {
        while i < fragment.start1() && j < fragment.start2() {
            pairs.push((i, j));
            i += 1;
            j += 1;
        }
        i = fragment.end1();
        j = fragment.end2();
    }
    while i < len1 && j < len2 {
        pairs.push((i, j));
        i += 1;
        j += 1;
    }
    pairs
}

/// Hashes every line once under `policy`, sharing one key space.
fn intern_lines<'a>(
    lines1: &[&'a str],
    lines2: &[&'a str],
    policy: ComparisonPolicy,
) -> (Vec<LineKey>, Vec<LineKey>) {
    let mut table: HashMap<Cow<'a, str>, LineKey> =
        HashMap::with_capacity(lines1.len() + lines2.len());
    let mut intern = |line: &'a str| {
        let next = table.len();
        *table.entry(policy.line_key(line)).or_insert(next)
    };
    let keys1 = lines1.iter().map(|&line| intern(line)).collect();
    let keys2 = lines2.iter().map(|&line| intern(line)).collect();
    (keys1, keys2)
}
