//! Command line argument parsing

use crate::core::selector::DEFAULT_CANDIDATES;
use clap::Parser;

/// Interactive menu for downloading media with yt-dlp or youtube-dl
#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Downloader executable to use instead of searching for yt-dlp / youtube-dl
    #[arg(short, long, value_name = "NAME")]
    pub downloader: Option<String>,

    /// Do not clear the screen before showing the menu
    #[arg(long)]
    pub no_clear: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Quiet output (menu, prompts and errors only)
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Args {
    /// Executable names to search for, most preferred first
    pub fn candidates(&self) -> Vec<String> {
        match &self.downloader {
            Some(name) => vec![name.clone()],
            None => DEFAULT_CANDIDATES.iter().map(|c| c.to_string()).collect(),
        }
    }

    /// Get output verbosity level
    pub fn verbosity_level(&self) -> VerbosityLevel {
        if self.quiet {
            VerbosityLevel::Quiet
        } else if self.verbose {
            VerbosityLevel::Verbose
        } else {
            VerbosityLevel::Normal
        }
    }

    /// Default tracing filter when RUST_LOG is unset
    pub fn log_filter(&self) -> &'static str {
        match self.verbosity_level() {
            VerbosityLevel::Quiet => "error",
            VerbosityLevel::Normal => "warn",
            VerbosityLevel::Verbose => "debug",
        }
    }
}

/// Output verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerbosityLevel {
    /// Quiet (only errors)
    Quiet,
    /// Normal
    Normal,
    /// Verbose (debug info)
    Verbose,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_verbosity_level() {
        let args = Args::default();
        assert_eq!(args.verbosity_level(), VerbosityLevel::Normal);
        assert_eq!(args.log_filter(), "warn");

        let args = Args {
            quiet: true,
            ..Default::default()
        };
        assert_eq!(args.verbosity_level(), VerbosityLevel::Quiet);
        assert_eq!(args.log_filter(), "error");

        let args = Args {
            verbose: true,
            ..Default::default()
        };
        assert_eq!(args.verbosity_level(), VerbosityLevel::Verbose);
        assert_eq!(args.log_filter(), "debug");
    }

    #[test]
    fn test_default_candidates() {
        assert_eq!(Args::default().candidates(), vec!["yt-dlp", "youtube-dl"]);
    }

    #[test]
    fn test_downloader_override() {
        let args = Args::try_parse_from(["ytmenu", "--downloader", "yt-dlp_linux"]).unwrap();
        assert_eq!(args.candidates(), vec!["yt-dlp_linux"]);
    }

    #[test]
    fn test_parse_flags() {
        let args = Args::try_parse_from(["ytmenu", "--no-clear", "-v"]).unwrap();
        assert!(args.no_clear);
        assert!(args.verbose);
        assert!(!args.quiet);
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(Args::try_parse_from(["ytmenu", "-q", "-v"]).is_err());
    }
}
