//! Boundary correction for pure insertions and deletions.
//!
//! An insertion or deletion can often be slid up or down along a run of equal
//! lines without changing the edit cost. Among those equivalent positions this
//! stage picks, in order:
//!
//! 1. a position where the fragment touches a neighbour, so both fuse into one
//!    (the earlier neighbour wins),
//! 2. the earliest position whose last changed line is blank,
//! 3. the earliest position whose first changed line is blank,
//! 4. the position the edit script produced.

use tracing::trace;

use super::{LineFragment, LineKey};
use crate::policy::is_blank;
use crate::side::Side;
use crate::text::LineRange;

/// Slides every pure fragment to its preferred position and fuses touching
/// neighbours.
pub(crate) fn correct_boundaries(
    fragments: Vec<LineFragment>,
    keys: [&[LineKey]; 2],
    lines: [&[&str]; 2],
) -> Vec<LineFragment> {
    let mut result: Vec<LineFragment> = Vec::with_capacity(fragments.len());
    for (index, fragment) in fragments.iter().enumerate() {
        let prev = result.last().copied();
        let next = fragments.get(index + 1).copied();
        let corrected = match changed_side(fragment) {
            Some(side) => slide(*fragment, side, prev, next, keys, lines),
            None => *fragment,
        };
        push_fused(&mut result, corrected);
    }
    result
}

/// Appends `fragment`, merging it into the last one if they touch.
pub(crate) fn push_fused(result: &mut Vec<LineFragment>, fragment: LineFragment) {
    match result.last_mut() {
        Some(last) if last.touches(&fragment) => *last = last.union(&fragment),
        _ => result.push(fragment),
    }
}

/// The only non-empty side of a pure insertion or deletion.
fn changed_side(fragment: &LineFragment) -> Option<Side> {
    match (fragment.deleted().is_empty(), fragment.inserted().is_empty()) {
        (false, true) => Some(Side::Left),
        (true, false) => Some(Side::Right),
        _ => None,
    }
}

/// How far a pure fragment can slide along equal lines on its changed side.
struct SlideWindow {
    start: usize,
    end: usize,
    up: usize,
    down: usize,
    /// End of the previous fragment, if there is one.
    prev_end: Option<usize>,
    /// Start of the next fragment, if there is one.
    next_start: Option<usize>,
}

impl SlideWindow {
    fn new(
        range: LineRange,
        keys: &[LineKey],
        prev: Option<LineFragment>,
        next: Option<LineFragment>,
        side: Side,
    ) -> Self {
        let (start, end) = (range.start(), range.end());
        let prev_end = prev.map(|p| p.range(side).end());
        let next_start = next.map(|n| n.range(side).start());
        let lower = prev_end.unwrap_or(0);
        let upper = next_start.unwrap_or(keys.len());

        let mut up = 0;
        while start - up > lower && keys[start - up - 1] == keys[end - up - 1] {
            up += 1;
        }
        let mut down = 0;
        while end + down < upper && keys[start + down] == keys[end + down] {
            down += 1;
        }
        Self {
            start,
            end,
            up,
            down,
            prev_end,
            next_start,
        }
    }

    const fn is_fixed(&self) -> bool {
        self.up == 0 && self.down == 0
    }

    fn preferred_shift(&self, lines: &[&str]) -> isize {
        let (up, down) = (self.up as isize, self.down as isize);
        if self.prev_end == Some(self.start - self.up) {
            return -up;
        }
        if self.next_start == Some(self.end + self.down) {
            return down;
        }

        let line_at = |index: isize| lines[index as usize];
        let (start, end) = (self.start as isize, self.end as isize);
        if let Some(shift) = (-up..=down).find(|shift| is_blank(line_at(end + shift - 1))) {
            return shift;
        }
        (-up..=down)
            .find(|shift| is_blank(line_at(start + shift)))
            .unwrap_or(0)
    }
}

fn slide(
    fragment: LineFragment,
    side: Side,
    prev: Option<LineFragment>,
    next: Option<LineFragment>,
    keys: [&[LineKey]; 2],
    lines: [&[&str]; 2],
) -> LineFragment {
    let window = SlideWindow::new(fragment.range(side), *side.select(&keys), prev, next, side);
    if window.is_fixed() {
        return fragment;
    }

    let shift = window.preferred_shift(*side.select(&lines));
    if shift != 0 {
        trace!(
            shift,
            start = window.start,
            end = window.end,
            ?side,
            "sliding fragment boundary"
        );
    }
    fragment.shift(shift)
}
