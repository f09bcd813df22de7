//! Line-level text comparison and three-way merge classification.
//!
//! The crate has two layers:
//! 1. A line diff engine ([`diff`]) that turns two [`LineStore`]s into an
//!    ordered list of [`LineFragment`]s under a [`ComparisonPolicy`]
//! 2. A three-way layer ([`three_way`], [`merge`]) that aligns LEFT and RIGHT
//!    against BASE and classifies every aligned range
//!
//! [`ComparisonManager`] is the facade other components call.
//!
//! # Example
//!
//! ```
//! use linediff::{ChangeKind, ComparisonManager, ComparisonPolicy, LineStore};
//!
//! let manager = ComparisonManager::default();
//! let a = LineStore::from_text("x\ny\nz");
//! let b = LineStore::from_text("y");
//!
//! let fragments = manager.compare(&a, &b, ComparisonPolicy::Exact);
//! assert_eq!(fragments.len(), 2);
//! assert!(fragments.iter().all(|f| f.kind() == ChangeKind::Delete));
//! ```

pub mod diff;
pub mod error;
pub mod manager;
pub mod merge;
pub mod policy;
pub mod settings;
pub mod side;
pub mod text;
pub mod three_way;

pub use diff::{ChangeKind, LineFragment, apply_fragments, compare, compare_lines};
pub use error::ComparisonError;
pub use manager::ComparisonManager;
pub use merge::{LineConflict, MergeOutcome};
pub use policy::{ComparisonPolicy, content_equal};
pub use settings::ComparisonSettings;
pub use side::{Side, ThreeSide};
pub use text::{LineRange, LineSpan, LineStore};
pub use three_way::{ConflictType, TextDiffType, ThreeSideRange, ThreesideChange};
