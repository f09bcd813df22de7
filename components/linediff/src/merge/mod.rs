//! Three-way merge built on the line diff engine and the classifier.
//!
//! # Example
//!
//! ```
//! use linediff::{ComparisonPolicy, ComparisonSettings, LineStore, MergeOutcome};
//! use linediff::merge::merge;
//!
//! let base = LineStore::from_text("line1\nline2\nline3");
//! let left = LineStore::from_text("line1\nmodified\nline3");
//! let right = LineStore::from_text("line1\nline2\nline3\nline4");
//!
//! let outcome = merge(&left, &base, &right, ComparisonPolicy::Exact, &ComparisonSettings::default())
//!     .unwrap();
//! assert_eq!(outcome, MergeOutcome::Merged("line1\nmodified\nline3\nline4".to_string()));
//! ```

pub mod align;
pub mod outcome;

pub use align::{align, merge};
pub use outcome::{LineConflict, MergeOutcome};
