//! Error types for comparison preconditions.
//!
//! Comparing two line sequences never fails. Errors only signal that a caller
//! handed in a range or fragment that breaks its construction contract.

use thiserror::Error;

/// Errors raised when an input violates a comparison precondition.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ComparisonError {
    /// A line range whose start lies past its end.
    #[error("Invalid line range: start {start} is past end {end}")]
    InvalidRange {
        /// Requested start line.
        start: usize,
        /// Requested end line.
        end: usize,
    },

    /// A line range that reaches past the end of its line store.
    #[error("Line range {start}..{end} is out of bounds for {line_count} lines")]
    OutOfBounds {
        /// Start line of the range.
        start: usize,
        /// End line of the range.
        end: usize,
        /// Number of lines in the store the range was applied to.
        line_count: usize,
    },

    /// A fragment that changes nothing on either side.
    #[error("Line fragment must change at least one side")]
    EmptyFragment,

    /// A three-side range that is empty on all three sides.
    #[error("Three-side range must have at least one non-empty side")]
    EmptyThreeSideRange,

    /// A three-side range whose left and right content both equal the base.
    #[error("Three-side range is unchanged on both sides relative to base")]
    UnalignedRange,

    /// A policy name that does not match any known policy.
    #[error("Unknown comparison policy: {0}")]
    UnknownPolicy(String),
}
