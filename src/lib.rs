//! # ytmenu - interactive menu for yt-dlp / youtube-dl
//!
//! A small terminal menu that picks an installed downloader, asks for a URL,
//! an output directory and a preset, and runs the downloader with the right
//! arguments.
//!
//! ## Example
//!
//! ```rust,no_run
//! use ytmenu::{Downloader, Preset, ProcessInvoker, SystemInvoker};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let invoker = SystemInvoker::new(Downloader::detect()?);
//!     let args = Preset::AudioOnly.build_args("VIDEO_URL");
//!     let outcome = invoker.invoke(&args, std::path::Path::new("."));
//!     println!("{:?}", outcome);
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod core;
pub mod error;

#[cfg(test)]
mod testing;

// Re-export main types
pub use crate::core::{
    resolve_directory, Downloader, InvocationOutcome, Preset, PresetKind, ProcessInvoker,
    SystemInvoker,
};
pub use error::AppError;

/// Result type alias for ytmenu operations
pub type Result<T> = std::result::Result<T, AppError>;
