//! Process-spawning boundary
//!
//! The engine only needs "run this argument list, capture stdout and the
//! exit status". [`ProcessRunner`] is that seam; [`SystemRunner`] is the
//! real implementation on top of `std::process`.

use std::io::{self, Read};
use std::path::Path;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};
use thiserror::Error;
use wait_timeout::ChildExt;

/// Captured result of one finished process
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessOutput {
    /// Standard output, lossily decoded as UTF-8
    pub stdout: String,
    /// Exit code, `None` if terminated by a signal
    pub exit_code: Option<i32>,
    /// Whether the process exited with status 0
    pub success: bool,
    /// Wall-clock time from spawn to exit, as seen by the caller
    pub elapsed: Duration,
}

/// Failure to obtain a [`ProcessOutput`]
#[derive(Debug, Error)]
pub enum RunError {
    /// Nothing to execute
    #[error("empty command line")]
    EmptyCommand,

    /// The executable could not be started
    #[error("failed to start '{program}': {source}")]
    Spawn {
        /// Program that failed to launch
        program: String,
        /// Underlying OS error
        #[source]
        source: io::Error,
    },

    /// Waiting on the child failed
    #[error("failed waiting for '{program}': {source}")]
    Wait {
        /// Program being waited on
        program: String,
        /// Underlying OS error
        #[source]
        source: io::Error,
    },

    /// The child, or something holding its stdout open, ran past the deadline
    #[error("timed out after {0:.1?} and was killed")]
    TimedOut(Duration),
}

/// Run an external command to completion
pub trait ProcessRunner {
    /// Run `command` (program followed by arguments) and wait for it
    fn run(&self, command: &[String], cwd: Option<&Path>) -> Result<ProcessOutput, RunError>;
}

/// [`ProcessRunner`] backed by real OS processes
#[derive(Debug, Clone, Default)]
pub struct SystemRunner {
    timeout: Option<Duration>,
}

impl SystemRunner {
    /// Create a runner that waits indefinitely
    pub fn new() -> Self {
        Self { timeout: None }
    }

    /// Kill children that run longer than `timeout`
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// The configured timeout
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Block until the child exits or the deadline passes
    ///
    /// Returns the exit status with the instant it was observed, or `None`
    /// after killing and reaping a child that overran.
    fn wait(
        &self,
        child: &mut Child,
        deadline: Option<Instant>,
    ) -> Result<Option<(ExitStatus, Instant)>, io::Error> {
        let status = match deadline {
            None => Some(child.wait()?),
            Some(deadline) => {
                let remaining = deadline.saturating_duration_since(Instant::now());
                child.wait_timeout(remaining)?
            }
        };
        let exited_at = Instant::now();

        match status {
            Some(status) => Ok(Some((status, exited_at))),
            None => {
                let _ = child.kill();
                let _ = child.wait();
                Ok(None)
            }
        }
    }
}

impl ProcessRunner for SystemRunner {
    fn run(&self, command: &[String], cwd: Option<&Path>) -> Result<ProcessOutput, RunError> {
        let (program, args) = command.split_first().ok_or(RunError::EmptyCommand)?;

        let mut cmd = Command::new(program);
        cmd.args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null());
        if let Some(dir) = cwd {
            cmd.current_dir(dir);
        }

        let start = Instant::now();
        let deadline = self.timeout.map(|timeout| start + timeout);
        let mut child = cmd.spawn().map_err(|source| RunError::Spawn {
            program: program.clone(),
            source,
        })?;

        // Drain stdout concurrently so a chatty child cannot block on a full pipe.
        let (tx, rx) = mpsc::channel();
        if let Some(mut stdout) = child.stdout.take() {
            thread::spawn(move || {
                let mut buf = Vec::new();
                let _ = stdout.read_to_end(&mut buf);
                let _ = tx.send(buf);
            });
        } else {
            let _ = tx.send(Vec::new());
        }

        let waited = self.wait(&mut child, deadline).map_err(|source| RunError::Wait {
            program: program.clone(),
            source,
        })?;
        let (status, exited_at) = match waited {
            Some(exit) => exit,
            None => return Err(RunError::TimedOut(start.elapsed())),
        };
        let elapsed = exited_at.duration_since(start);

        // Descendants of the child may keep the pipe open after it exits;
        // the deadline bounds the wait for end of output too.
        let received = match deadline {
            None => rx.recv().map_err(|_| RecvTimeoutError::Disconnected),
            Some(deadline) => rx.recv_timeout(deadline.saturating_duration_since(Instant::now())),
        };
        let stdout = match received {
            Ok(buf) => String::from_utf8_lossy(&buf).into_owned(),
            Err(RecvTimeoutError::Timeout) => return Err(RunError::TimedOut(start.elapsed())),
            Err(RecvTimeoutError::Disconnected) => String::new(),
        };

        Ok(ProcessOutput {
            stdout,
            exit_code: status.code(),
            success: status.success(),
            elapsed,
        })
    }
}
