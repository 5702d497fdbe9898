//! Command-line surface
//!
//! Every flag has a default, so a bare invocation runs the stock check:
//! `make_histograms.sql` through `cockroach demo`, columns `i` and `s`,
//! probe ranges 1:10000 and 100000:110000, two-minute timeout.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::config::{Config, DEFAULT_TIMEOUT_SECS, Span};

#[derive(Debug, Parser)]
#[command(version, about = "Checks demo cluster histogram statistics against probe ranges")]
pub struct Cli {
    /// SQL script fed to the demo cluster
    #[arg(long, default_value = "make_histograms.sql")]
    pub script: PathBuf,

    /// Demo database binary to launch
    #[arg(long, default_value = "cockroach")]
    pub demo_binary: String,

    /// Column whose histogram has integer upper bounds
    #[arg(long, default_value = "i")]
    pub int_column: String,

    /// Column whose histogram has string upper bounds
    #[arg(long, default_value = "s")]
    pub string_column: String,

    /// Inclusive probe range, repeatable (defaults: 1:10000 and 100000:110000)
    #[arg(long = "span", value_name = "LO:HI")]
    pub spans: Vec<Span>,

    /// Seconds to wait for the demo cluster before giving up
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    /// Replay a captured demo output file instead of launching the demo
    #[arg(long, value_name = "PATH")]
    pub from_output: Option<PathBuf>,
}

impl Cli {
    /// Resolve parsed flags into the run configuration.
    pub fn into_config(self) -> Config {
        let spans = if self.spans.is_empty() {
            Config::default_spans()
        } else {
            self.spans
        };

        Config {
            demo_binary: self.demo_binary,
            script: self.script,
            int_column: self.int_column,
            string_column: self.string_column,
            spans,
            timeout: Duration::from_secs(self.timeout_secs),
            from_output: self.from_output,
        }
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod cli_tests;
