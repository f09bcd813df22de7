//! Equality policies for line content.
//!
//! A [`ComparisonPolicy`] decides when two lines (or two multi-line texts) are
//! considered equal. Policies are ordered by strictness: equality under
//! [`ComparisonPolicy::Exact`] implies equality under
//! [`ComparisonPolicy::Trim`], which implies equality under
//! [`ComparisonPolicy::IgnoreWhitespace`].

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use crate::error::ComparisonError;

/// Whitespace sensitivity used when comparing line content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComparisonPolicy {
    /// Literal equality.
    #[default]
    Exact,
    /// Equality after stripping leading and trailing whitespace of every line.
    Trim,
    /// Equality after removing every whitespace character.
    IgnoreWhitespace,
}

impl ComparisonPolicy {
    /// All policies, strictest first.
    pub const ALL: [Self; 3] = [Self::Exact, Self::Trim, Self::IgnoreWhitespace];

    /// Normalised form of a single line.
    ///
    /// Two lines are equal under the policy exactly when their keys are equal,
    /// which lets the engine hash every line once per comparison.
    #[must_use]
    pub fn line_key(self, line: &str) -> Cow<'_, str> {
        match self {
            Self::Exact => Cow::Borrowed(line),
            Self::Trim => Cow::Borrowed(trim_whitespace(line)),
            Self::IgnoreWhitespace => {
                if line.chars().any(is_whitespace) {
                    Cow::Owned(line.chars().filter(|c| !is_whitespace(*c)).collect())
                } else {
                    Cow::Borrowed(line)
                }
            }
        }
    }

    /// Whether two single lines are equal under the policy.
    #[must_use]
    pub fn lines_equal(self, a: &str, b: &str) -> bool {
        self.line_key(a) == self.line_key(b)
    }

    /// Whether two multi-line texts are equal under the policy.
    #[must_use]
    pub fn texts_equal(self, a: &str, b: &str) -> bool {
        match self {
            Self::Exact => a == b,
            Self::Trim => a
                .split('\n')
                .map(trim_whitespace)
                .eq(b.split('\n').map(trim_whitespace)),
            Self::IgnoreWhitespace => a
                .chars()
                .filter(|c| !is_whitespace(*c))
                .eq(b.chars().filter(|c| !is_whitespace(*c))),
        }
    }

    /// Stable lowercase name, as used in configuration files.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Exact => "exact",
            Self::Trim => "trim",
            Self::IgnoreWhitespace => "ignore_whitespace",
        }
    }
}

impl fmt::Display for ComparisonPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComparisonPolicy {
    type Err = ComparisonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "exact" | "default" => Ok(Self::Exact),
            "trim" | "trim_whitespaces" => Ok(Self::Trim),
            "ignore_whitespace" | "ignore_whitespaces" => Ok(Self::IgnoreWhitespace),
            _ => Err(ComparisonError::UnknownPolicy(s.to_string())),
        }
    }
}

/// Compares two optional contents under `policy`.
///
/// `None` stands for an empty interval. Two absent contents are equal, an
/// absent content never equals a present one, even an empty string.
#[must_use]
pub fn content_equal(a: Option<&str>, b: Option<&str>, policy: ComparisonPolicy) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => policy.texts_equal(a, b),
        _ => false,
    }
}

/// Whitespace as understood by the policies.
#[must_use]
pub const fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}

/// Strips leading and trailing policy whitespace.
#[must_use]
pub fn trim_whitespace(s: &str) -> &str {
    s.trim_matches(is_whitespace)
}

/// Number of non-whitespace characters in a line.
#[must_use]
pub fn non_space_char_count(line: &str) -> usize {
    line.chars().filter(|c| !is_whitespace(*c)).count()
}

/// Whether a line holds nothing but whitespace.
#[must_use]
pub fn is_blank(line: &str) -> bool {
    line.chars().all(is_whitespace)
}
