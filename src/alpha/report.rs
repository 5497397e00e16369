//! Alpha stripping report type and terminal formatting.

use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

use crate::normalize::FileFailure;

/// The outcome of alpha-stripping one directory.
#[derive(Clone, Debug, Default, Serialize)]
pub struct AlphaReport {
    /// Files that carried transparency and were rewritten opaque.
    pub stripped: Vec<PathBuf>,
    /// Files inspected and left untouched.
    pub unchanged: usize,
    /// Per-file failures; the batch continued past each of these.
    pub failures: Vec<FileFailure>,
}

impl fmt::Display for AlphaReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for path in &self.stripped {
            writeln!(
                f,
                "{} had an alpha channel and it was removed",
                path.display()
            )?;
        }
        for failure in &self.failures {
            writeln!(
                f,
                "Error checking alpha channel of {}: {}",
                failure.path.display(),
                failure.message
            )?;
        }
        Ok(())
    }
}
