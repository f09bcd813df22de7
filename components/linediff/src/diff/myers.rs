//! Myers diff algorithm over interned lines.
//!
//! Myers' algorithm finds a shortest edit script in O(ND) time, where N is the
//! combined length of both sequences and D the number of differences. Common
//! prefix and suffix are stripped first, so typical edits only search the
//! changed middle.
//!
//! Small gaps are solved directly, recording the live diagonals of every
//! round and walking them back. Larger gaps are split at a middle snake
//! (Myers' linear space refinement) until the pieces are small, so memory
//! stays linear in the input however many lines differ.
//!
//! At equal reach the search prefers advancing in the first sequence, so
//! within a gap deletions come before insertions and matches land on the
//! earliest position in the first sequence that yields a minimal script.

use super::{DiffAlgorithm, LineFragment, LineKey};

/// Gaps with at most this many lines on both sides combined are searched
/// directly.
const DIRECT_SEARCH_LIMIT: usize = 1024;

/// Myers diff algorithm.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct MyersDiff;

impl DiffAlgorithm for MyersDiff {
    fn diff(&self, a: &[LineKey], b: &[LineKey]) -> Vec<LineFragment> {
        let (prefix, suffix) = common_affixes(a, b);
        let a_mid = &a[prefix..a.len() - suffix];
        let b_mid = &b[prefix..b.len() - suffix];
        if a_mid.is_empty() && b_mid.is_empty() {
            return Vec::new();
        }

        let mut script = Vec::with_capacity(a_mid.len() + b_mid.len());
        edit_script(a_mid, b_mid, &mut script);
        collect_fragments(&script, prefix)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EditOp {
    Keep,
    Delete,
    Insert,
}

/// Lengths of the common prefix and of the common suffix after it.
fn common_affixes(a: &[LineKey], b: &[LineKey]) -> (usize, usize) {
    let prefix = a.iter().zip(b).take_while(|(x, y)| x == y).count();
    let suffix = a[prefix..]
        .iter()
        .rev()
        .zip(b[prefix..].iter().rev())
        .take_while(|(x, y)| x == y)
        .count();
    (prefix, suffix)
}

/// Appends a shortest edit script from `a` to `b` to `out`.
fn edit_script(a: &[LineKey], b: &[LineKey], out: &mut Vec<EditOp>) {
    let (prefix, suffix) = common_affixes(a, b);
    out.extend(std::iter::repeat_n(EditOp::Keep, prefix));
    let a = &a[prefix..a.len() - suffix];
    let b = &b[prefix..b.len() - suffix];

    let direct = a.is_empty() || b.is_empty() || a.len() + b.len() <= DIRECT_SEARCH_LIMIT;
    let snake = if direct {
        None
    } else {
        middle_snake(a, b).filter(|snake| snake.splits(a.len(), b.len()))
    };

    if direct {
        out.extend(shortest_edit_script(a, b));
    } else if let Some(snake) = snake {
        edit_script(&a[..snake.x_start], &b[..snake.y_start], out);
        out.extend(std::iter::repeat_n(EditOp::Keep, snake.x_end - snake.x_start));
        edit_script(&a[snake.x_end..], &b[snake.y_end..], out);
    } else {
        out.extend(std::iter::repeat_n(EditOp::Delete, a.len()));
        out.extend(std::iter::repeat_n(EditOp::Insert, b.len()));
    }

    out.extend(std::iter::repeat_n(EditOp::Keep, suffix));
}

fn shortest_edit_script(a: &[LineKey], b: &[LineKey]) -> Vec<EditOp> {
    let (n, m) = (a.len(), b.len());
    if n == 0 {
        return vec![EditOp::Insert; m];
    }
    if m == 0 {
        return vec![EditOp::Delete; n];
    }

    let max_d = n + m;
    let offset = max_d as isize;
    // v[k + offset] is the furthest x reached on diagonal k = x - y.
    let mut v: Vec<isize> = vec![0; 2 * max_d + 1];
    // trace[d] holds diagonals -d..=d of the frontier before round d.
    let mut trace: Vec<Vec<isize>> = Vec::new();

    'search: for d in 0..=max_d as isize {
        trace.push(v[(offset - d) as usize..=(offset + d) as usize].to_vec());
        for k in (-d..=d).step_by(2) {
            let idx = (k + offset) as usize;
            let mut x = if k == -d || (k != d && v[idx - 1] < v[idx + 1]) {
                v[idx + 1]
            } else {
                v[idx - 1] + 1
            };
            let mut y = x - k;
            while x < n as isize && y < m as isize && a[x as usize] == b[y as usize] {
                x += 1;
                y += 1;
            }
            v[idx] = x;
            if x >= n as isize && y >= m as isize {
                break 'search;
            }
        }
    }

    backtrack(&trace, n, m)
}

/// Walks the recorded frontiers from the end point back to the origin.
///
/// `trace[d]` holds the frontier as it was before round `d`, which is what
/// round `d` chose its predecessors from.
fn backtrack(trace: &[Vec<isize>], n: usize, m: usize) -> Vec<EditOp> {
    let mut edits = Vec::with_capacity(n + m);
    let (mut x, mut y) = (n as isize, m as isize);

    for (d, v) in trace.iter().enumerate().rev() {
        let d = d as isize;
        if d == 0 {
            while x > 0 && y > 0 {
                edits.push(EditOp::Keep);
                x -= 1;
                y -= 1;
            }
            break;
        }

        let k = x - y;
        let at = |diagonal: isize| v[(diagonal + d) as usize];
        let prev_k = if k == -d || (k != d && at(k - 1) < at(k + 1)) {
            k + 1
        } else {
            k - 1
        };
        let prev_x = at(prev_k);
        let prev_y = prev_x - prev_k;

        while x > prev_x && y > prev_y {
            edits.push(EditOp::Keep);
            x -= 1;
            y -= 1;
        }
        if x > prev_x {
            edits.push(EditOp::Delete);
        } else {
            edits.push(EditOp::Insert);
        }
        x = prev_x;
        y = prev_y;
    }

    edits.reverse();
    edits
}

/// A run of matching lines `a[x_start..x_end] == b[y_start..y_end]` on some
/// shortest edit path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Snake {
    x_start: usize,
    y_start: usize,
    x_end: usize,
    y_end: usize,
}

impl Snake {
    /// Whether both pieces around the snake are smaller than the whole.
    const fn splits(&self, n: usize, m: usize) -> bool {
        !(self.x_start == n && self.y_start == m) && !(self.x_end == 0 && self.y_end == 0)
    }
}

/// Whether the point reaching `x` on diagonal `k` lies inside the edit grid.
const fn on_grid(x: isize, k: isize, n: isize, m: isize) -> bool {
    x <= n && x - k <= m
}

/// Finds the snake in the middle of a shortest edit path.
///
/// Searches forward from the origin and backward from the end at the same
/// time until the two frontiers overlap. Points that left the grid are never
/// taken as an overlap. Both inputs must be non-empty and must not share a
/// first or last line, so the path has at least two edits on either side of
/// the returned snake.
fn middle_snake(a: &[LineKey], b: &[LineKey]) -> Option<Snake> {
    let (n, m) = (a.len() as isize, b.len() as isize);
    let delta = n - m;
    let odd = delta & 1 == 1;
    let max_d = (n + m + 1) / 2;
    let offset = max_d + 1;
    // forward[k] is the furthest x on diagonal k = x - y. backward[k] is the
    // same over the reversed sequences, whose diagonal k is `delta - k` here.
    let mut forward = vec![0isize; 2 * offset as usize + 1];
    let mut backward = vec![0isize; 2 * offset as usize + 1];

    for d in 0..=max_d {
        for k in (-d..=d).step_by(2) {
            let idx = (k + offset) as usize;
            let mut x = if k == -d || (k != d && forward[idx - 1] < forward[idx + 1]) {
                forward[idx + 1]
            } else {
                forward[idx - 1] + 1
            };
            let (x_start, y_start) = (x, x - k);
            let mut y = y_start;
            while x < n && y < m && a[x as usize] == b[y as usize] {
                x += 1;
                y += 1;
            }
            forward[idx] = x;

            let reversed = delta - k;
            if odd && on_grid(x, k, n, m) && reversed.abs() < d {
                let reached = backward[(reversed + offset) as usize];
                if !on_grid(reached, reversed, n, m) || x + reached < n {
                    continue;
                }
                return Some(Snake {
                    x_start: x_start as usize,
                    y_start: y_start as usize,
                    x_end: x as usize,
                    y_end: y as usize,
                });
            }
        }

        for k in (-d..=d).step_by(2) {
            let idx = (k + offset) as usize;
            let mut x = if k == -d || (k != d && backward[idx - 1] < backward[idx + 1]) {
                backward[idx + 1]
            } else {
                backward[idx - 1] + 1
            };
            let (x_start, y_start) = (x, x - k);
            let mut y = y_start;
            while x < n && y < m && a[(n - 1 - x) as usize] == b[(m - 1 - y) as usize] {
                x += 1;
                y += 1;
            }
            backward[idx] = x;

            let forward_k = delta - k;
            if !odd && on_grid(x, k, n, m) && forward_k.abs() <= d {
                let reached = forward[(forward_k + offset) as usize];
                if !on_grid(reached, forward_k, n, m) || reached + x < n {
                    continue;
                }
                return Some(Snake {
                    x_start: (n - x) as usize,
                    y_start: (m - y) as usize,
                    x_end: (n - x_start) as usize,
                    y_end: (m - y_start) as usize,
                });
            }
        }
    }
    None
}

/// Folds an edit script into fragments, one per maximal run of edits.
fn collect_fragments(script: &[EditOp], offset: usize) -> Vec<LineFragment> {
    let mut fragments = Vec::new();
    let (mut i, mut j) = (offset, offset);
    let mut open: Option<(usize, usize)> = None;

    for op in script {
        match op {
            EditOp::Keep => {
                if let Some((start1, start2)) = open.take() {
                    fragments.push(LineFragment::from_bounds(start1, i, start2, j));
                }
                i += 1;
                j += 1;
            }
            EditOp::Delete => {
                open.get_or_insert((i, j));
                i += 1;
            }
            EditOp::Insert => {
                open.get_or_insert((i, j));
                j += 1;
            }
        }
    }
    if let Some((start1, start2)) = open {
        fragments.push(LineFragment::from_bounds(start1, i, start2, j));
    }
    fragments
}
