//! Output directory statistics.
//!
//! Counts relocated files per class folder. Purely diagnostic and read-only:
//! safe to run against any output tree, including one left over from an
//! earlier, partially completed session.

mod report;

pub use report::{ClassCount, StatsReport};

use std::fs;
use std::path::Path;

use crate::error::ClassprepError;

/// Count files in every immediate subdirectory of `output_dir`.
///
/// Non-directory entries directly inside `output_dir` are ignored; only the
/// class folders themselves are counted.
pub fn scan_output_dir(output_dir: &Path) -> Result<StatsReport, ClassprepError> {
    let mut classes = Vec::new();
    let mut total = 0;

    for entry in fs::read_dir(output_dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_dir() {
            continue;
        }
        let count = fs::read_dir(entry.path())?.count();
        total += count;
        classes.push(ClassCount {
            name: entry.file_name().to_string_lossy().into_owned(),
            count,
        });
    }

    classes.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(StatsReport { total, classes })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_files_per_class_folder() {
        let out = tempfile::tempdir().unwrap();
        fs::create_dir(out.path().join("cat")).unwrap();
        fs::create_dir(out.path().join("dog")).unwrap();
        fs::create_dir(out.path().join("not_usable")).unwrap();
        fs::write(out.path().join("cat/a.png"), b"x").unwrap();
        fs::write(out.path().join("dog/b.png"), b"x").unwrap();
        fs::write(out.path().join("dog/c.png"), b"x").unwrap();
        // Stray file at the top level is not a class folder.
        fs::write(out.path().join("README"), b"x").unwrap();

        let report = scan_output_dir(out.path()).unwrap();
        assert_eq!(report.total, 3);
        assert_eq!(report.classes.len(), 3);
        assert_eq!(report.classes[0].name, "cat");
        assert_eq!(report.classes[0].count, 1);
        assert_eq!(report.classes[1].name, "dog");
        assert_eq!(report.classes[1].count, 2);
        assert_eq!(report.classes[2].count, 0);
    }

    #[test]
    fn empty_output_dir_reports_zero() {
        let out = tempfile::tempdir().unwrap();
        let report = scan_output_dir(out.path()).unwrap();
        assert_eq!(report.total, 0);
        assert!(report.classes.is_empty());
    }
}
