use std::fs;
use std::path::Path;

use image::{Rgb, RgbImage, Rgba, RgbaImage};

pub fn write_rgb_png(path: &Path, width: u32, height: u32, pixel: [u8; 3]) {
    ensure_parent(path);
    RgbImage::from_pixel(width, height, Rgb(pixel))
        .save(path)
        .expect("write rgb png");
}

pub fn write_rgba_png(path: &Path, width: u32, height: u32, pixel: [u8; 4]) {
    ensure_parent(path);
    RgbaImage::from_pixel(width, height, Rgba(pixel))
        .save(path)
        .expect("write rgba png");
}

pub fn write_rgb_jpeg(path: &Path, width: u32, height: u32, pixel: [u8; 3]) {
    ensure_parent(path);
    RgbImage::from_pixel(width, height, Rgb(pixel))
        .save(path)
        .expect("write rgb jpeg");
}

fn ensure_parent(path: &Path) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent dir");
    }
}
