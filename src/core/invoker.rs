//! Running the external downloader

use crate::core::selector::Downloader;
use crate::error::AppError;
use std::io;
use std::path::Path;
use std::process::{Command, ExitStatus};
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Result of one downloader run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvocationOutcome {
    /// Exit status 0
    Success { elapsed: Duration },
    /// Non-zero exit; `None` when killed by a signal
    Failed { code: Option<i32> },
    /// The executable could not be started
    LaunchFailed { tool: String, reason: String },
}

impl InvocationOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, InvocationOutcome::Success { .. })
    }
}

/// Runs a downloader with a prepared argument list
pub trait ProcessInvoker {
    /// Program name used when echoing the command
    fn program(&self) -> &str;

    /// Run to completion with `cwd` as the working directory
    fn invoke(&self, args: &[String], cwd: &Path) -> InvocationOutcome;
}

/// Invoker backed by a real child process
#[derive(Debug, Clone)]
pub struct SystemInvoker {
    downloader: Downloader,
}

impl SystemInvoker {
    pub fn new(downloader: Downloader) -> Self {
        Self { downloader }
    }

    fn spawn_and_wait(&self, args: &[String], cwd: &Path) -> io::Result<ExitStatus> {
        // stdio is inherited so the tool talks to the terminal directly
        Command::new(self.downloader.path())
            .args(args)
            .current_dir(cwd)
            .status()
    }
}

impl ProcessInvoker for SystemInvoker {
    fn program(&self) -> &str {
        self.downloader.name()
    }

    fn invoke(&self, args: &[String], cwd: &Path) -> InvocationOutcome {
        let start = Instant::now();
        debug!("Running {} in {}", self.downloader.path().display(), cwd.display());

        match self.spawn_and_wait(args, cwd) {
            Ok(status) if status.success() => {
                info!("{} finished successfully", self.downloader);
                InvocationOutcome::Success {
                    elapsed: start.elapsed(),
                }
            }
            Ok(status) => {
                info!("{} exited with {}", self.downloader, status);
                InvocationOutcome::Failed {
                    code: status.code(),
                }
            }
            Err(source) => {
                let reason = launch_reason(&source);
                let err = AppError::Launch {
                    tool: self.downloader.name().to_string(),
                    source,
                };
                info!("{}", err);
                InvocationOutcome::LaunchFailed {
                    tool: self.downloader.name().to_string(),
                    reason,
                }
            }
        }
    }
}

fn launch_reason(err: &io::Error) -> String {
    match err.kind() {
        io::ErrorKind::NotFound => "not found".to_string(),
        _ => err.to_string(),
    }
}
