//! File relocation into per-class folders.
//!
//! Creates one destination folder per class (sentinel included) and moves
//! every mapped image out of the normalized subdirectory into its class
//! folder. Moves are copy-then-remove so they survive crossing filesystem
//! boundaries between the source and output trees.

mod report;

pub use report::RelocateReport;

use std::fs;
use std::path::Path;

use tracing::info;

use crate::classes::ClassList;
use crate::error::ClassprepError;
use crate::label::ImageClassMapping;

/// Move every mapped image from `normalized_dir` into its class folder
/// under `output_dir`.
///
/// A mapped image whose normalized file no longer exists is a hard error:
/// silently dropping it would lose that image's classification.
pub fn relocate_images(
    mapping: &ImageClassMapping,
    normalized_dir: &Path,
    output_dir: &Path,
    classes: &ClassList,
) -> Result<RelocateReport, ClassprepError> {
    let mut report = RelocateReport::default();

    for class in classes.names() {
        fs::create_dir_all(output_dir.join(class))?;
    }

    for (file_name, class) in mapping {
        let src = normalized_dir.join(file_name);
        if !src.is_file() {
            return Err(ClassprepError::MissingMoveSource { path: src });
        }
        let dest = output_dir.join(class).join(file_name);
        move_file(&src, &dest)?;
        info!("moved {} -> {}", src.display(), dest.display());
        report.record(class);
    }

    Ok(report)
}

/// Copy `src` to `dest`, then remove `src`. Cleans up the copy if the
/// removal fails so a file never ends up in two places.
fn move_file(src: &Path, dest: &Path) -> Result<(), ClassprepError> {
    fs::copy(src, dest)?;
    if let Err(err) = fs::remove_file(src) {
        let _ = fs::remove_file(dest);
        return Err(err.into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbImage;
    use std::collections::BTreeMap;

    fn write_png(dir: &Path, name: &str) {
        RgbImage::from_pixel(2, 2, image::Rgb([7, 7, 7]))
            .save(dir.join(name))
            .unwrap();
    }

    #[test]
    fn moves_files_and_creates_all_class_folders() {
        let norm = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        write_png(norm.path(), "a.png");
        write_png(norm.path(), "b.png");

        let classes = ClassList::from_names(["cat", "dog"]);
        let mut mapping = BTreeMap::new();
        mapping.insert("a.png".to_string(), "cat".to_string());
        mapping.insert("b.png".to_string(), "dog".to_string());

        let report = relocate_images(&mapping, norm.path(), out.path(), &classes).unwrap();
        assert_eq!(report.total_moved(), 2);

        assert!(out.path().join("cat/a.png").is_file());
        assert!(out.path().join("dog/b.png").is_file());
        assert!(out.path().join("not_usable").is_dir());
        // Moved, not copied.
        assert!(!norm.path().join("a.png").exists());
        assert!(!norm.path().join("b.png").exists());
    }

    #[test]
    fn missing_source_is_a_named_error() {
        let norm = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();

        let classes = ClassList::from_names(["cat"]);
        let mut mapping = BTreeMap::new();
        mapping.insert("ghost.png".to_string(), "cat".to_string());

        let err = relocate_images(&mapping, norm.path(), out.path(), &classes).unwrap_err();
        assert!(matches!(err, ClassprepError::MissingMoveSource { .. }));
    }

    #[test]
    fn existing_class_folders_are_tolerated() {
        let norm = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(out.path().join("cat")).unwrap();
        write_png(norm.path(), "a.png");

        let classes = ClassList::from_names(["cat"]);
        let mut mapping = BTreeMap::new();
        mapping.insert("a.png".to_string(), "cat".to_string());

        relocate_images(&mapping, norm.path(), out.path(), &classes).unwrap();
        assert!(out.path().join("cat/a.png").is_file());
    }
}
