//! Outcome types for three-way merges.

use serde::Serialize;

use crate::three_way::ThreeSideRange;

/// The result of a three-way merge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum MergeOutcome {
    /// Every change applied cleanly.
    Merged(String),
    /// Some ranges need manual resolution.
    Conflicts(Vec<LineConflict>),
}

impl MergeOutcome {
    /// Whether the merge left conflicts behind.
    #[must_use]
    pub const fn has_conflicts(&self) -> bool {
        matches!(self, Self::Conflicts(_))
    }
}

/// One conflicting range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineConflict {
    range: ThreeSideRange,
    merged_line: usize,
    base_lines: Vec<String>,
    left_lines: Vec<String>,
    right_lines: Vec<String>,
}

impl LineConflict {
    pub(crate) fn new(
        range: ThreeSideRange,
        merged_line: usize,
        base_lines: Vec<String>,
        left_lines: Vec<String>,
        right_lines: Vec<String>,
    ) -> Self {
        Self {
            range,
            merged_line,
            base_lines,
            left_lines,
            right_lines,
        }
    }

    /// Aligned range of the conflict in LEFT, BASE and RIGHT.
    #[must_use]
    pub const fn range(&self) -> ThreeSideRange {
        self.range
    }

    /// Line in the merged output where the conflict sits (0-based).
    #[must_use]
    pub const fn merged_line(&self) -> usize {
        self.merged_line
    }

    /// BASE lines of the range.
    #[must_use]
    pub fn base_lines(&self) -> &[String] {
        &self.base_lines
    }

    /// LEFT lines of the range.
    #[must_use]
    pub fn left_lines(&self) -> &[String] {
        &self.left_lines
    }

    /// RIGHT lines of the range.
    #[must_use]
    pub fn right_lines(&self) -> &[String] {
        &self.right_lines
    }

    /// Formats the conflict using Git-style conflict markers.
    #[must_use]
    pub fn format_with_markers(&self, name_left: &str, name_right: &str) -> String {
        let mut output = format!("<<<<<<< {name_left}\n");
        push_lines(&mut output, &self.left_lines);

        if !self.base_lines.is_empty() {
            output.push_str("||||||| base\n");
            push_lines(&mut output, &self.base_lines);
        }

        output.push_str("=======\n");
        push_lines(&mut output, &self.right_lines);
        output.push_str(">>>>>>> ");
        output.push_str(name_right);
        output.push('\n');
        output
    }
}

fn push_lines(output: &mut String, lines: &[String]) {
    for line in lines {
        output.push_str(line);
        output.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::LineRange;

    fn conflict(base: &[&str]) -> LineConflict {
        let one = LineRange::new(1, 2).unwrap();
        let base_range = LineRange::new(1, 1 + base.len()).unwrap();
        LineConflict::new(
            ThreeSideRange::new(one, base_range, one).unwrap(),
            1,
            base.iter().map(ToString::to_string).collect(),
            vec!["X".to_string()],
            vec!["Y".to_string()],
        )
    }

    #[test]
    fn test_format_with_markers() {
        assert_eq!(
            conflict(&["b"]).format_with_markers("ours", "theirs"),
            "<<<<<<< ours\nX\n||||||| base\nb\n=======\nY\n>>>>>>> theirs\n"
        );
    }

    #[test]
    fn test_format_without_base() {
        assert_eq!(
            conflict(&[]).format_with_markers("left", "right"),
            "<<<<<<< left\nX\n=======\nY\n>>>>>>> right\n"
        );
    }

    #[test]
    fn test_outcome_reports_conflicts() {
        assert!(MergeOutcome::Conflicts(vec![conflict(&["b"])]).has_conflicts());
        assert!(!MergeOutcome::Merged(String::new()).has_conflicts());
    }
}
