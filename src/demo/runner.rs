use std::io::Read;
use std::process::{Command, Stdio};
use std::thread::{self, sleep};
use std::time::{Duration, Instant};

use log::debug;

use crate::error::HistoprobeError;

/// Run a SQL script through the demo database binary.
pub struct DemoRunner {
    binary: String,
    timeout: Duration,
}

impl DemoRunner {
    /// Create a runner for the given binary with a wall-clock timeout.
    pub fn new(binary: impl Into<String>, timeout: Duration) -> Self {
        Self {
            binary: binary.into(),
            timeout,
        }
    }

    /// Launch `<binary> demo --execute <sql>` and capture its stdout.
    ///
    /// The progress line prints only once the binary has resolved in PATH.
    /// Both output pipes are drained on reader threads while a try_wait()
    /// polling loop enforces the timeout, so a chatty child never blocks on
    /// a full pipe; on expiry the child is killed and reaped. A non-zero
    /// exit surfaces the captured stderr.
    ///
    /// # Arguments
    /// * `sql` - Script text passed inline to the demo cluster
    ///
    /// # Returns
    /// * `Ok(String)` - Full stdout of the demo run
    /// * `Err(HistoprobeError)` - Missing binary, launch failure, timeout,
    ///   or non-zero exit
    pub fn run(&self, sql: &str) -> Result<String, HistoprobeError> {
        // Resolve the binary up front for a clearer error than a raw
        // spawn failure.
        which::which(&self.binary)
            .map_err(|_| HistoprobeError::BinaryNotFound(self.binary.clone()))?;

        println!("Starting {} demo and executing SQL...", self.binary);
        debug!(
            "launching {} demo with a {} byte script, timeout {}s",
            self.binary,
            sql.len(),
            self.timeout.as_secs()
        );

        let mut child = Command::new(&self.binary)
            .arg("demo")
            .arg("--execute")
            .arg(sql)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|err| HistoprobeError::DemoLaunch {
                binary: self.binary.clone(),
                reason: err.to_string(),
            })?;

        // Drain both pipes while waiting; output larger than the OS pipe
        // capacity would otherwise wedge the child before it can exit.
        let stdout_reader = drain_pipe(child.stdout.take());
        let stderr_reader = drain_pipe(child.stderr.take());

        // Poll for completion or deadline expiry
        const POLL_INTERVAL_MS: u64 = 10;
        let deadline = Instant::now() + self.timeout;
        let status = loop {
            // Check the deadline first
            if Instant::now() >= deadline {
                let _ = child.kill();
                let _ = child.wait();
                // The readers finish on their own once the pipes close.
                return Err(HistoprobeError::DemoTimeout {
                    binary: self.binary.clone(),
                    timeout: self.timeout,
                });
            }

            // Check if the process finished
            match child.try_wait().map_err(|err| HistoprobeError::DemoWait {
                binary: self.binary.clone(),
                reason: err.to_string(),
            })? {
                Some(status) => break status,
                None => {
                    // Process still running - sleep briefly
                    sleep(Duration::from_millis(POLL_INTERVAL_MS));
                }
            }
        };

        // The child has exited; the readers stop at EOF.
        let stdout = stdout_reader.join().unwrap_or_default();
        let stderr = stderr_reader.join().unwrap_or_default();

        if status.success() {
            return Ok(String::from_utf8_lossy(&stdout).to_string());
        }
        Err(HistoprobeError::DemoFailed {
            binary: self.binary.clone(),
            status: status.to_string(),
            stderr: String::from_utf8_lossy(&stderr).trim_end().to_string(),
        })
    }
}

/// Read a child pipe to EOF on its own thread.
fn drain_pipe<R>(pipe: Option<R>) -> thread::JoinHandle<Vec<u8>>
where
    R: Read + Send + 'static,
{
    thread::spawn(move || {
        let mut buf = Vec::new();
        if let Some(mut pipe) = pipe {
            // A failed read keeps whatever arrived before it.
            let _ = pipe.read_to_end(&mut buf);
        }
        buf
    })
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod runner_tests;
