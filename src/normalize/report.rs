//! Normalization report types and terminal formatting.

use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// The outcome of normalizing one source directory.
#[derive(Clone, Debug, Default, Serialize)]
pub struct NormalizeReport {
    /// Files re-encoded from an alternate format into the canonical one.
    pub converted: Vec<PathBuf>,
    /// Files already canonical, copied unchanged into the normalized folder.
    pub copied: Vec<PathBuf>,
    /// Per-file failures; the batch continued past each of these.
    pub failures: Vec<FileFailure>,
}

/// A single file that could not be processed, with the reason.
#[derive(Clone, Debug, Serialize)]
pub struct FileFailure {
    pub path: PathBuf,
    pub message: String,
}

impl NormalizeReport {
    /// Number of files now present in the normalized subdirectory.
    pub fn produced(&self) -> usize {
        self.converted.len() + self.copied.len()
    }
}

impl fmt::Display for NormalizeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Normalized {} image(s) ({} converted, {} copied)",
            self.produced(),
            self.converted.len(),
            self.copied.len()
        )?;
        for failure in &self.failures {
            writeln!(
                f,
                "Error converting image {}: {}",
                failure.path.display(),
                failure.message
            )?;
        }
        Ok(())
    }
}
