//! `linediff` command-line front end.
//!
//! Exit status: 0 on success, 1 when a merge leaves conflicts, 2 on error.

mod cli;
mod telemetry;

use std::fs;
use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use linediff::{ComparisonManager, ComparisonPolicy, ComparisonSettings, LineStore, MergeOutcome};
use tracing::{debug, error};

use cli::{Cli, Command};
use telemetry::TelemetryBuilder;

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            error!("{e:#}");
            eprintln!("linediff: {e:#}");
            ExitCode::from(2)
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let settings =
        ComparisonSettings::load(cli.config.as_deref()).context("Failed to load configuration")?;

    TelemetryBuilder::new()
        .with_log_level(settings.log_level.clone())
        .with_json(cli.log_json)
        .init()?;
    debug!(?settings, "settings loaded");

    let default_policy = settings.default_policy;
    let manager = ComparisonManager::new(settings);

    match cli.command {
        Command::Diff {
            left,
            right,
            policy,
            json,
        } => {
            let policy = policy.map_or(default_policy, ComparisonPolicy::from);
            run_diff(&manager, &left, &right, policy, json)
        }
        Command::Merge {
            left,
            base,
            right,
            policy,
        } => {
            let policy = policy.map_or(default_policy, ComparisonPolicy::from);
            run_merge(&manager, [&left, &base, &right], policy)
        }
    }
}

fn read_store(path: &Path) -> Result<LineStore> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(LineStore::from_text(text))
}

fn run_diff(
    manager: &ComparisonManager,
    left: &Path,
    right: &Path,
    policy: ComparisonPolicy,
    json: bool,
) -> Result<ExitCode> {
    let (a, b) = (read_store(left)?, read_store(right)?);
    let fragments = manager.compare(&a, &b, policy);

    if json {
        let rendered =
            serde_json::to_string_pretty(&fragments).context("Failed to serialize fragments")?;
        println!("{rendered}");
    } else {
        for fragment in &fragments {
            let kind = format!("{:?}", fragment.kind()).to_lowercase();
            println!(
                "{kind} {}..{} {}..{}",
                fragment.start1(),
                fragment.end1(),
                fragment.start2(),
                fragment.end2()
            );
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn run_merge(
    manager: &ComparisonManager,
    paths: [&Path; 3],
    policy: ComparisonPolicy,
) -> Result<ExitCode> {
    let [left, base, right] = paths.map(read_store);
    let (left, base, right) = (left?, base?, right?);

    match manager.merge(&left, &base, &right, policy)? {
        MergeOutcome::Merged(text) => {
            print!("{text}");
            Ok(ExitCode::SUCCESS)
        }
        MergeOutcome::Conflicts(conflicts) => {
            let [name_left, _, name_right] = paths.map(|p| p.display().to_string());
            for conflict in &conflicts {
                println!("@@ merged line {} @@", conflict.merged_line() + 1);
                print!("{}", conflict.format_with_markers(&name_left, &name_right));
            }
            Ok(ExitCode::from(1))
        }
    }
}
