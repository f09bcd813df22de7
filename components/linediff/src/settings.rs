//! Comparison settings loaded through the `config` crate.
//!
//! Sources are layered: built-in defaults, then an optional TOML file, then
//! `LINEDIFF__*` environment variables (for example
//! `LINEDIFF__UNIMPORTANT_LINE_CHAR_COUNT=5`).

use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::policy::ComparisonPolicy;

/// Default file name looked up in the working directory, without extension.
pub const DEFAULT_CONFIG_NAME: &str = "linediff";

/// Tunables of the diff engine and its front ends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonSettings {
    /// Lines with fewer non-whitespace characters than this are unimportant.
    pub unimportant_line_char_count: usize,
    /// Anchor comparisons on important lines before diffing the rest.
    pub smart_blend: bool,
    /// Policy used when a caller does not name one.
    pub default_policy: ComparisonPolicy,
    /// Log filter used when `RUST_LOG` is unset.
    pub log_level: String,
}

impl Default for ComparisonSettings {
    fn default() -> Self {
        Self {
            unimportant_line_char_count: 3,
            smart_blend: false,
            default_policy: ComparisonPolicy::Exact,
            log_level: "info".to_string(),
        }
    }
}

impl ComparisonSettings {
    /// Loads settings from defaults, a config file and the environment.
    ///
    /// With `path` the file must exist; without it `linediff.toml` in the
    /// working directory is used if present.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if a source cannot be read or a value has the
    /// wrong type.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let file = match path {
            Some(path) => File::from(path).required(true),
            None => File::with_name(DEFAULT_CONFIG_NAME).required(false),
        };

        let s = Config::builder()
            .set_default("unimportant_line_char_count", 3)?
            .set_default("smart_blend", false)?
            .set_default("default_policy", ComparisonPolicy::Exact.as_str())?
            .set_default("log_level", "info")?
            .add_source(file)
            .add_source(
                Environment::with_prefix("LINEDIFF")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        s.try_deserialize()
    }
}
