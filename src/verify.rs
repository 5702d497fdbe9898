//! The one-shot verification pipeline
//!
//! Strictly sequential: load the SQL script, run the demo binary (or replay
//! a captured output file), recover the statistics payload, then count probe
//! values covered by each column's histogram. Any failure aborts the run.

use std::fs;

use log::{debug, info};

use crate::config::Config;
use crate::demo::DemoRunner;
use crate::error::HistoprobeError;
use crate::extract;
use crate::report::{self, MatchReport};

/// Run the full verification described by `config`.
pub fn run(config: &Config) -> Result<MatchReport, HistoprobeError> {
    let output = capture_demo_output(config)?;
    debug!("captured {} bytes of demo output", output.len());

    let stats = extract::statistics_from_output(&output)?;
    info!("parsed {} statistics records", stats.len());

    let int_stats = extract::single_column_histogram(&stats, &config.int_column)?;
    let string_stats = extract::single_column_histogram(&stats, &config.string_column)?;

    Ok(report::count_matches(config, int_stats, string_stats))
}

/// Produce the raw demo output: replay a captured file when configured,
/// otherwise feed the SQL script to a freshly launched demo cluster.
fn capture_demo_output(config: &Config) -> Result<String, HistoprobeError> {
    if let Some(path) = &config.from_output {
        debug!("replaying demo output from {}", path.display());
        return fs::read_to_string(path).map_err(|err| HistoprobeError::OutputRead {
            path: path.display().to_string(),
            reason: err.to_string(),
        });
    }

    let sql = fs::read_to_string(&config.script).map_err(|err| HistoprobeError::ScriptRead {
        path: config.script.display().to_string(),
        reason: err.to_string(),
    })?;

    DemoRunner::new(config.demo_binary.as_str(), config.timeout).run(&sql)
}

#[cfg(test)]
#[path = "verify_tests.rs"]
mod verify_tests;
