//! Source directory discovery.
//!
//! Lists candidate image files directly inside a directory (non-recursive).
//! Discovery is read-only; nothing here touches the files themselves.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::ClassprepError;

/// Extensions accepted as candidate images, canonical format first.
pub const IMAGE_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

/// The extension every normalized image carries.
pub const CANONICAL_EXTENSION: &str = "png";

/// Find candidate image files directly inside `dir`, sorted by filename.
///
/// Fails with [`ClassprepError::NoImagesFound`] when the directory holds no
/// candidates at all — there is nothing for the pipeline to do.
pub fn find_images(dir: &Path) -> Result<Vec<PathBuf>, ClassprepError> {
    let images = list_with_extensions(dir, &IMAGE_EXTENSIONS)?;
    if images.is_empty() {
        return Err(ClassprepError::NoImagesFound {
            path: dir.to_path_buf(),
        });
    }
    Ok(images)
}

/// List canonical-format files directly inside `dir`, sorted by filename.
///
/// Used by the alpha stripper and the labeling session, which only ever
/// operate on the normalized subdirectory. An empty result is not an error
/// here; callers decide what an empty normalized directory means.
pub fn list_canonical(dir: &Path) -> Result<Vec<PathBuf>, ClassprepError> {
    list_with_extensions(dir, &[CANONICAL_EXTENSION])
}

fn list_with_extensions(dir: &Path, extensions: &[&str]) -> Result<Vec<PathBuf>, ClassprepError> {
    let mut files = Vec::new();

    // max_depth(1) keeps the scan non-recursive: derived subdirectories
    // (including the normalized one nested in the source) are not entered.
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = entry.map_err(|e| ClassprepError::Io(e.into()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let matches = entry
            .path()
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| extensions.iter().any(|e| ext.eq_ignore_ascii_case(e)));
        if matches {
            files.push(entry.into_path());
        }
    }

    files.sort_by_key(|path| path.file_name().map(|n| n.to_os_string()));
    Ok(files)
}
