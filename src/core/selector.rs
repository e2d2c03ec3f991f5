//! Downloader executable discovery

use crate::error::AppError;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Candidate executables in order of preference
pub const DEFAULT_CANDIDATES: [&str; 2] = ["yt-dlp", "youtube-dl"];

/// Installation hint shown when no candidate is found
pub const INSTALL_HINT: &str = "pip install yt-dlp";

/// The external downloader chosen at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Downloader {
    name: String,
    path: PathBuf,
}

impl Downloader {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }

    /// Search PATH for the default candidates
    pub fn detect() -> Result<Self, AppError> {
        Self::detect_from(&DEFAULT_CANDIDATES)
    }

    /// Search PATH for the given candidates, most preferred first
    pub fn detect_from<S: AsRef<str>>(candidates: &[S]) -> Result<Self, AppError> {
        select_downloader(candidates, path_lookup)
    }

    /// Program name as the user knows it (`yt-dlp`, `youtube-dl`)
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Resolved location on disk
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl fmt::Display for Downloader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Return the first candidate that `lookup` can resolve
pub fn select_downloader<S, F>(candidates: &[S], lookup: F) -> Result<Downloader, AppError>
where
    S: AsRef<str>,
    F: Fn(&str) -> Option<PathBuf>,
{
    for candidate in candidates {
        let candidate = candidate.as_ref();
        if candidate.is_empty() {
            continue;
        }
        match lookup(candidate) {
            Some(path) => {
                debug!("Resolved {} to {}", candidate, path.display());
                return Ok(Downloader::new(candidate, path));
            }
            None => debug!("{} not found", candidate),
        }
    }

    Err(AppError::DownloaderNotFound {
        candidates: candidates.iter().map(|c| c.as_ref().to_string()).collect(),
    })
}

/// Describe which candidates were missing, e.g. "Neither 'a' nor 'b' found in your PATH"
pub fn missing_message<S: AsRef<str>>(candidates: &[S]) -> String {
    let quoted: Vec<String> = candidates
        .iter()
        .map(|c| format!("'{}'", c.as_ref()))
        .collect();
    match quoted.as_slice() {
        [] => "No downloader found in your PATH".to_string(),
        [single] => format!("{} not found in your PATH", single),
        _ => format!("Neither {} found in your PATH", quoted.join(" nor ")),
    }
}

fn path_lookup(name: &str) -> Option<PathBuf> {
    which::which(name).ok()
}
