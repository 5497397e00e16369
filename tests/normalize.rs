mod common;

use classprep::{alpha, normalize};

use common::{write_rgb_jpeg, write_rgba_png};

#[test]
fn converted_file_keeps_decoded_pixel_content() {
    let root = tempfile::tempdir().unwrap();
    let src = root.path().join("a.jpg");
    write_rgb_jpeg(&src, 8, 6, [200, 100, 50]);

    normalize::normalize_directory(root.path()).unwrap();

    let normalized = root.path().join("png/a.png");
    assert!(normalized.is_file());

    // PNG stores the decoded JPEG pixels losslessly, so both decodes agree.
    let source_pixels = image::open(&src).unwrap().to_rgb8();
    let normalized_pixels = image::open(&normalized).unwrap().to_rgb8();
    assert_eq!(source_pixels.dimensions(), normalized_pixels.dimensions());
    assert_eq!(source_pixels.as_raw(), normalized_pixels.as_raw());
}

#[test]
fn normalize_then_strip_leaves_opaque_same_size_images() {
    let root = tempfile::tempdir().unwrap();
    write_rgba_png(&root.path().join("t.png"), 5, 9, [10, 20, 30, 77]);

    normalize::normalize_directory(root.path()).unwrap();
    let normalized_dir = normalize::normalized_dir(root.path());
    let report = alpha::strip_directory(&normalized_dir).unwrap();
    assert_eq!(report.stripped.len(), 1);

    let img = image::open(normalized_dir.join("t.png")).unwrap();
    assert!(!img.color().has_alpha());
    assert_eq!((img.width(), img.height()), (5, 9));

    // The original, outside the normalized folder, keeps its alpha channel.
    let original = image::open(root.path().join("t.png")).unwrap();
    assert!(original.color().has_alpha());
}
