//! User-facing terminal output

use crate::cli::args::VerbosityLevel;
use crate::core::invoker::InvocationOutcome;
use crate::core::preset::PresetKind;
use crate::core::selector::missing_message;
use colored::Colorize;
use std::io::{self, Write};
use std::time::Duration;

/// Output formatter for ytmenu
#[derive(Debug, Clone, Copy)]
pub struct OutputFormatter {
    verbosity: VerbosityLevel,
}

impl OutputFormatter {
    /// Create a new output formatter
    pub fn new(verbosity: VerbosityLevel) -> Self {
        Self { verbosity }
    }

    /// Print info message
    pub fn info<W: Write + ?Sized>(&self, out: &mut W, message: &str) -> io::Result<()> {
        if self.verbosity != VerbosityLevel::Quiet {
            writeln!(out, "{}", message)?;
        }
        Ok(())
    }

    /// Print success message
    pub fn success<W: Write + ?Sized>(&self, out: &mut W, message: &str) -> io::Result<()> {
        if self.verbosity != VerbosityLevel::Quiet {
            writeln!(out, "{}", message.green())?;
        }
        Ok(())
    }

    /// Print error message
    pub fn error<W: Write + ?Sized>(&self, out: &mut W, message: &str) -> io::Result<()> {
        writeln!(out, "{}", message.red())
    }

    /// Print debug message
    pub fn debug<W: Write + ?Sized>(&self, out: &mut W, message: &str) -> io::Result<()> {
        if self.verbosity == VerbosityLevel::Verbose {
            writeln!(out, "{}", message.dimmed())?;
        }
        Ok(())
    }

    pub fn print_found_downloader<W: Write + ?Sized>(&self, out: &mut W, name: &str) -> io::Result<()> {
        self.info(out, &format!("Found downloader: {}", name))
    }

    /// Print the fatal startup diagnostic
    pub fn print_downloader_missing<W: Write + ?Sized>(
        &self,
        out: &mut W,
        candidates: &[String],
        hint: &str,
    ) -> io::Result<()> {
        self.error(out, &format!("Error: {}.", missing_message(candidates)))?;
        writeln!(out, "Please install one (preferably yt-dlp) using: {}", hint)
    }

    /// Print the main menu
    pub fn print_menu<W: Write + ?Sized>(&self, out: &mut W, downloader: &str) -> io::Result<()> {
        writeln!(
            out,
            "{}",
            format!("=== Easy YouTube Downloader Wrapper ({}) ===", downloader).bold()
        )?;
        for kind in PresetKind::ALL {
            writeln!(out, "{}. {}", kind.key(), kind.label())?;
        }
        writeln!(out, "Q. Quit")
    }

    pub fn print_directory_prompt<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out)?;
        writeln!(out, "Where do you want to save the files?")?;
        writeln!(out, "Leave blank to use the current folder.")
    }

    /// Hints shown before asking for a custom format selector
    pub fn print_format_hints<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out)?;
        writeln!(out, "Common formats: 'best', 'worst', 'mp4', 'm4a'")?;
        writeln!(
            out,
            "Specific resolution: 'bestvideo[height<=1080]+bestaudio/best'"
        )
    }

    /// Echo the command about to run
    pub fn print_command<W: Write + ?Sized>(&self, out: &mut W, command: &str) -> io::Result<()> {
        if self.verbosity == VerbosityLevel::Quiet {
            return Ok(());
        }
        writeln!(out)?;
        writeln!(out, "Running command: {}", command.cyan())?;
        writeln!(out)?;
        writeln!(out, "--- Starting Download ---")
    }

    /// Report how the downloader run ended
    pub fn print_outcome<W: Write + ?Sized>(
        &self,
        out: &mut W,
        outcome: &InvocationOutcome,
    ) -> io::Result<()> {
        writeln!(out)?;
        match outcome {
            InvocationOutcome::Success { elapsed } => self.success(
                out,
                &format!("--- Finished Successfully! ({}) ---", format_duration(*elapsed)),
            ),
            InvocationOutcome::Failed { code: Some(code) } => self.error(
                out,
                &format!("--- Error occurred during download (Code {}) ---", code),
            ),
            InvocationOutcome::Failed { code: None } => self.error(
                out,
                "--- Error occurred during download (terminated by signal) ---",
            ),
            InvocationOutcome::LaunchFailed { tool, reason } => self.error(
                out,
                &format!(
                    "Error: Could not execute {} ({}). Is it definitely in your PATH?",
                    tool, reason
                ),
            ),
        }
    }

    pub fn print_exit<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out)?;
        writeln!(out, "Exiting...")
    }
}

/// Format duration as human-readable string
fn format_duration(duration: Duration) -> String {
    let total_seconds = duration.as_secs();

    if total_seconds < 60 {
        format!("{}s", total_seconds)
    } else if total_seconds < 3600 {
        let minutes = total_seconds / 60;
        let seconds = total_seconds % 60;
        if seconds == 0 {
            format!("{}m", minutes)
        } else {
            format!("{}m {}s", minutes, seconds)
        }
    } else {
        let hours = total_seconds / 3600;
        let minutes = (total_seconds % 3600) / 60;
        if minutes == 0 {
            format!("{}h", hours)
        } else {
            format!("{}h {}m", hours, minutes)
        }
    }
}
