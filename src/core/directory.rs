//! Output directory resolution

use crate::error::AppError;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Resolved output directory, and the creation error if we had to fall back
#[derive(Debug)]
pub struct DirectoryResolution {
    pub path: PathBuf,
    pub fallback: Option<AppError>,
}

/// Resolve a raw user path to a usable directory.
///
/// Blank input yields `cwd`. A leading `~` expands to the home directory.
/// Missing directories are created; if that fails the result is `cwd` and
/// the error is carried in `fallback` for the caller to report.
pub fn resolve_directory(raw: &str, cwd: &Path) -> DirectoryResolution {
    let raw = raw.trim();
    if raw.is_empty() {
        return DirectoryResolution {
            path: cwd.to_path_buf(),
            fallback: None,
        };
    }

    let path = expand_home(raw);
    if path.exists() {
        debug!("Using existing directory {}", path.display());
        return DirectoryResolution {
            path,
            fallback: None,
        };
    }

    match std::fs::create_dir_all(&path) {
        Ok(()) => {
            debug!("Created directory {}", path.display());
            DirectoryResolution {
                path,
                fallback: None,
            }
        }
        Err(source) => {
            info!("Falling back to {}: {}", cwd.display(), source);
            DirectoryResolution {
                path: cwd.to_path_buf(),
                fallback: Some(AppError::DirectoryCreation { path, source }),
            }
        }
    }
}

/// Expand a leading `~` or `~/` to the home directory
pub fn expand_home(raw: &str) -> PathBuf {
    expand_home_with(raw, dirs::home_dir())
}

fn expand_home_with(raw: &str, home: Option<PathBuf>) -> PathBuf {
    let rest = if raw == "~" {
        Some("")
    } else {
        raw.strip_prefix("~/")
            .or_else(|| raw.strip_prefix("~\\"))
    };

    match (rest, home) {
        (Some(""), Some(home)) => home,
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(raw),
    }
}
