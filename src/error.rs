//! Error types for ytmenu

use crate::core::selector::missing_message;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for ytmenu operations
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{}", missing_message(.candidates))]
    DownloaderNotFound { candidates: Vec<String> },

    #[error("Could not create directory {}: {source}", .path.display())]
    DirectoryCreation {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not execute {tool}: {source}")]
    Launch {
        tool: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Input closed")]
    InputClosed,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
