//! Alpha channel stripping.
//!
//! Scans the normalized subdirectory and flattens any image that carries
//! transparency (direct alpha or luminance+alpha; palette transparency is
//! expanded to RGBA by the decoder) into an opaque three-channel image,
//! rewriting the file in place. Dimensions are never changed.

mod report;

pub use report::AlphaReport;

use std::path::Path;

use tracing::warn;

use crate::discover;
use crate::error::ClassprepError;
use crate::normalize::FileFailure;

/// Strip the alpha channel from every canonical-format file in `dir`.
///
/// Per-file failures are recorded and logged; the batch continues.
pub fn strip_directory(dir: &Path) -> Result<AlphaReport, ClassprepError> {
    let mut report = AlphaReport::default();

    for path in discover::list_canonical(dir)? {
        match strip_file(&path) {
            Ok(true) => report.stripped.push(path),
            Ok(false) => report.unchanged += 1,
            Err(err) => {
                warn!("failed to strip alpha from {}: {}", path.display(), err);
                report.failures.push(FileFailure {
                    path,
                    message: err.to_string(),
                });
            }
        }
    }

    Ok(report)
}

/// Flatten `path` to opaque RGB if its pixel mode carries alpha.
///
/// Returns whether the file was rewritten.
fn strip_file(path: &Path) -> Result<bool, ClassprepError> {
    let img = image::open(path).map_err(|source| ClassprepError::ImageDecode {
        path: path.to_path_buf(),
        source,
    })?;

    if !img.color().has_alpha() {
        return Ok(false);
    }

    let opaque = img.to_rgb8();
    opaque
        .save(path)
        .map_err(|source| ClassprepError::ImageEncode {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(true)
}
