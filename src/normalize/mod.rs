//! Image format normalization.
//!
//! Converts every discovered source image into the canonical format (PNG),
//! writing the results into a normalized subdirectory nested inside the
//! source directory. Originals are left untouched. Files already in the
//! canonical format are copied in unchanged, so every discovered image takes
//! part in alpha stripping and labeling regardless of its source format.

mod report;

pub use report::{FileFailure, NormalizeReport};

use std::fs;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::discover::{self, CANONICAL_EXTENSION};
use crate::error::ClassprepError;

/// Name of the normalized subdirectory created inside the source directory.
pub const NORMALIZED_SUBDIR: &str = "png";

/// The normalized subdirectory path for a given source directory.
pub fn normalized_dir(source_dir: &Path) -> PathBuf {
    source_dir.join(NORMALIZED_SUBDIR)
}

/// Normalize every candidate image in `source_dir` into `source_dir/png/`.
///
/// A decode, encode, or copy failure for a single file is recorded in the
/// report and logged; processing continues with the remaining files. Only a
/// missing source directory or an unlistable one is a hard error.
pub fn normalize_directory(source_dir: &Path) -> Result<NormalizeReport, ClassprepError> {
    let images = discover::find_images(source_dir)?;
    let out_dir = normalized_dir(source_dir);
    fs::create_dir_all(&out_dir)?;

    let mut report = NormalizeReport::default();

    for src in images {
        match normalize_file(&src, &out_dir) {
            Ok(Outcome::Converted(dest)) => report.converted.push(dest),
            Ok(Outcome::Copied(dest)) => report.copied.push(dest),
            Err(err) => {
                warn!("failed to normalize {}: {}", src.display(), err);
                report.failures.push(FileFailure {
                    path: src,
                    message: err.to_string(),
                });
            }
        }
    }

    Ok(report)
}

enum Outcome {
    Converted(PathBuf),
    Copied(PathBuf),
}

fn normalize_file(src: &Path, out_dir: &Path) -> Result<Outcome, ClassprepError> {
    let file_name = src
        .file_name()
        .ok_or_else(|| ClassprepError::Io(std::io::Error::other("source file has no filename")))?;
    let dest = out_dir
        .join(file_name)
        .with_extension(CANONICAL_EXTENSION);

    let is_canonical = src
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(CANONICAL_EXTENSION));

    if is_canonical {
        fs::copy(src, &dest)?;
        return Ok(Outcome::Copied(dest));
    }

    let img = image::open(src).map_err(|source| ClassprepError::ImageDecode {
        path: src.to_path_buf(),
        source,
    })?;
    img.save(&dest).map_err(|source| ClassprepError::ImageEncode {
        path: dest.clone(),
        source,
    })?;
    Ok(Outcome::Converted(dest))
}
