// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// End-to-end runs of the batch converter against a temporary tasting folder.

use std::path::Path;

use image::{DynamicImage, GenericImageView, Rgb, RgbImage, Rgba, RgbaImage};
use mediawerk_convert::BatchConverter;
use mediawerk_core::{ConverterConfig, MediawerkError};

fn write_jpeg(path: &Path, width: u32, height: u32) {
    let img = RgbImage::from_fn(width, height, |x, y| Rgb([(x * 7) as u8, (y * 11) as u8, 128]));
    DynamicImage::ImageRgb8(img).save(path).unwrap();
}

fn write_transparent_png(path: &Path, width: u32, height: u32) {
    let img = RgbaImage::from_fn(width, height, |x, _| {
        if x < width / 2 {
            Rgba([0, 0, 0, 0])
        } else {
            Rgba([40, 160, 60, 255])
        }
    });
    DynamicImage::ImageRgba8(img).save(path).unwrap();
}

fn converter_for(dir: &Path) -> BatchConverter {
    BatchConverter::new(ConverterConfig::for_target_dir(dir)).unwrap()
}

fn run(dir: &Path) -> (Vec<String>, usize) {
    let mut out = Vec::new();
    let summary = converter_for(dir).run_with_output(&mut out).unwrap();
    let lines = String::from_utf8(out)
        .unwrap()
        .lines()
        .map(str::to_owned)
        .collect();
    (lines, summary.converted())
}

#[test]
fn converts_images_and_leaves_other_files_alone() {
    let dir = tempfile::tempdir().unwrap();
    write_jpeg(&dir.path().join("a.jpg"), 24, 16);
    write_transparent_png(&dir.path().join("b.png"), 10, 12);
    std::fs::write(dir.path().join("c.txt"), b"seven courses").unwrap();

    let (mut lines, converted) = run(dir.path());
    lines.sort();

    assert_eq!(converted, 2);
    assert_eq!(
        lines,
        ["Converted: a.jpg -> a.webp", "Converted: b.png -> b.webp"]
    );
    assert!(dir.path().join("a.webp").is_file());
    assert!(dir.path().join("b.webp").is_file());
    assert!(!dir.path().join("c.webp").exists());
    assert_eq!(
        std::fs::read(dir.path().join("c.txt")).unwrap(),
        b"seven courses"
    );
}

#[test]
fn outputs_are_webp_with_source_dimensions() {
    let dir = tempfile::tempdir().unwrap();
    write_jpeg(&dir.path().join("scallop.JPEG"), 33, 21);
    write_transparent_png(&dir.path().join("sorbet.png"), 8, 30);

    run(dir.path());

    for (name, dims) in [("scallop.webp", (33, 21)), ("sorbet.webp", (8, 30))] {
        let bytes = std::fs::read(dir.path().join(name)).unwrap();
        assert_eq!(&bytes[0..4], b"RIFF", "{name}");
        assert_eq!(&bytes[8..12], b"WEBP", "{name}");
        assert_eq!(
            image::guess_format(&bytes).unwrap(),
            image::ImageFormat::WebP
        );
        let decoded = image::load_from_memory(&bytes).unwrap();
        assert_eq!(decoded.dimensions(), dims, "{name}");
    }
}

#[test]
fn alpha_is_preserved_for_png_and_opaque_for_jpeg() {
    let dir = tempfile::tempdir().unwrap();
    write_jpeg(&dir.path().join("bread.jpg"), 16, 16);
    write_transparent_png(&dir.path().join("glaze.png"), 16, 16);

    run(dir.path());

    let jpeg_out = image::open(dir.path().join("bread.webp")).unwrap().to_rgba8();
    assert!(jpeg_out.pixels().all(|p| p.0[3] == 255));

    let png_out = image::open(dir.path().join("glaze.webp")).unwrap().to_rgba8();
    assert_eq!(png_out.get_pixel(0, 0).0[3], 0);
    assert_eq!(png_out.get_pixel(15, 15).0[3], 255);
}

#[test]
fn second_run_is_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    write_jpeg(&dir.path().join("a.jpg"), 40, 30);
    write_transparent_png(&dir.path().join("b.png"), 20, 20);

    run(dir.path());
    let first_a = std::fs::read(dir.path().join("a.webp")).unwrap();
    let first_b = std::fs::read(dir.path().join("b.webp")).unwrap();

    let (_, converted) = run(dir.path());
    assert_eq!(converted, 2, "existing .webp files are not sources");
    assert_eq!(std::fs::read(dir.path().join("a.webp")).unwrap(), first_a);
    assert_eq!(std::fs::read(dir.path().join("b.webp")).unwrap(), first_b);
}

#[test]
fn missing_folder_fails_without_writing() {
    let parent = tempfile::tempdir().unwrap();
    let missing = parent.path().join("server/public/media/dishes/tasting");

    let mut out = Vec::new();
    let err = converter_for(&missing).run_with_output(&mut out).unwrap_err();

    assert!(matches!(err, MediawerkError::TargetNotFound(ref p) if p == &missing));
    assert!(out.is_empty());
    assert_eq!(std::fs::read_dir(parent.path()).unwrap().count(), 0);
}

#[test]
fn corrupt_image_aborts_the_run() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("broken.jpg"), b"not really a jpeg").unwrap();

    let mut out = Vec::new();
    let err = converter_for(dir.path()).run_with_output(&mut out).unwrap_err();

    assert!(matches!(err, MediawerkError::Decode { .. }));
    assert!(!dir.path().join("broken.webp").exists());
}

#[test]
fn install_root_layout_is_resolved() {
    let root = tempfile::tempdir().unwrap();
    let config = ConverterConfig::for_install_root(root.path());
    std::fs::create_dir_all(&config.target_dir).unwrap();
    write_jpeg(&config.target_dir.join("duck.jpg"), 12, 12);

    let mut out = Vec::new();
    let summary = BatchConverter::new(config.clone())
        .unwrap()
        .run_with_output(&mut out)
        .unwrap();

    assert_eq!(summary.converted(), 1);
    assert!(config.target_dir.join("duck.webp").is_file());
}
