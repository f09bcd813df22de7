use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use linediff::ComparisonPolicy;

/// Line-level diff and three-way merge.
#[derive(Parser, Debug)]
#[command(name = "linediff", version, about = "Compare and merge text files line by line")]
pub struct Cli {
    /// Path to a TOML settings file (defaults to ./linediff.toml if present).
    #[arg(short, long, global = true, env = "LINEDIFF_CONFIG")]
    pub config: Option<PathBuf>,

    /// Emit logs as JSON on stderr.
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the fragments transforming LEFT into RIGHT.
    Diff {
        /// Original file.
        left: PathBuf,
        /// Changed file.
        right: PathBuf,
        /// Whitespace handling; falls back to the configured default.
        #[arg(short, long, value_enum)]
        policy: Option<PolicyArg>,
        /// Print fragments as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Merge LEFT and RIGHT, both derived from BASE.
    Merge {
        /// First derived file.
        left: PathBuf,
        /// Common ancestor.
        base: PathBuf,
        /// Second derived file.
        right: PathBuf,
        /// Whitespace handling; falls back to the configured default.
        #[arg(short, long, value_enum)]
        policy: Option<PolicyArg>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum PolicyArg {
    Exact,
    Trim,
    IgnoreWhitespace,
}

impl From<PolicyArg> for ComparisonPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Exact => Self::Exact,
            PolicyArg::Trim => Self::Trim,
            PolicyArg::IgnoreWhitespace => Self::IgnoreWhitespace,
        }
    }
}
