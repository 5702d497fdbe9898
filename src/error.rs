use std::time::Duration;

use thiserror::Error;

/// Custom error types for histoprobe
///
/// Every failure class is fatal for the run; variants carry pre-rendered
/// string context so values stay cloneable and comparable in tests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HistoprobeError {
    #[error("failed to read SQL script {path}: {reason}")]
    ScriptRead { path: String, reason: String },

    #[error("failed to read captured demo output {path}: {reason}")]
    OutputRead { path: String, reason: String },

    #[error("demo binary '{0}' not found in PATH")]
    BinaryNotFound(String),

    #[error("failed to launch '{binary}' demo: {reason}")]
    DemoLaunch { binary: String, reason: String },

    #[error("failed while waiting for '{binary}' demo: {reason}")]
    DemoWait { binary: String, reason: String },

    #[error("'{binary}' demo did not finish within {timeout:?}")]
    DemoTimeout { binary: String, timeout: Duration },

    #[error("'{binary}' demo failed ({status}): {stderr}")]
    DemoFailed {
        binary: String,
        status: String,
        stderr: String,
    },

    #[error("could not find quoted JSON statistics in demo output")]
    StatisticsNotFound,

    #[error("failed to parse statistics JSON: {0}")]
    StatisticsParse(String),

    #[error("no histogram found for column '{0}'")]
    HistogramMissing(String),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
