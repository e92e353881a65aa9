//! Resume download.
//!
//! The resume is copied, not moved, into the user's download directory
//! under its original file name.

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

/// Why the resume could not be exported.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The portfolio does not name a resume file.
    #[error("No resume configured")]
    NotConfigured,

    /// The copy failed.
    #[error("Failed to copy resume from {from:?} to {to:?}: {source}")]
    Copy {
        /// Resume file.
        from: PathBuf,
        /// Destination file.
        to: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Directory exported files land in: the platform download dir, else cwd.
pub fn default_download_dir() -> PathBuf {
    dirs::download_dir().unwrap_or_else(|| PathBuf::from("."))
}

/// Copy `resume` into `dest_dir`, returning the written path.
///
/// # Errors
///
/// - `ExportError::NotConfigured` if `resume` is `None`
/// - `ExportError::Copy` if the source is unreadable or the destination
///   cannot be written
pub fn export_resume(resume: Option<&Path>, dest_dir: &Path) -> Result<PathBuf, ExportError> {
    let from = resume.ok_or(ExportError::NotConfigured)?;
    let file_name = from
        .file_name()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("resume.pdf"));
    let to = dest_dir.join(file_name);

    std::fs::create_dir_all(dest_dir)
        .and_then(|()| std::fs::copy(from, &to))
        .map_err(|source| ExportError::Copy {
            from: from.to_path_buf(),
            to: to.clone(),
            source,
        })?;

    info!(from = ?from, to = ?to, "resume exported");
    Ok(to)
}
