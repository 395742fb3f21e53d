use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use image::{Rgb, RgbImage, Rgba, RgbaImage};
use imgsplit::splitter::batch::{ensure_output_dir, resolve_output_dir};
use imgsplit::splitter::scan::scan_images;
use imgsplit::splitter::transform::{SplitError, split_and_rotate};

fn unique_temp_dir(label: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    let dir = std::env::temp_dir().join(format!("imgsplit-test-{label}-{nanos}"));
    fs::create_dir_all(&dir).expect("temp dir should be creatable");
    dir
}

fn write_rgb_image(path: &Path, width: u32, height: u32) {
    RgbImage::from_pixel(width, height, Rgb([120, 40, 200]))
        .save(path)
        .expect("fixture image should be writable");
}

fn dimensions(path: &Path) -> (u32, u32) {
    image::image_dimensions(path).expect("output image should decode")
}

#[test]
fn even_width_yields_two_square_outputs() {
    let dir = unique_temp_dir("even-width");
    let input = dir.join("cat.jpg");
    write_rgb_image(&input, 200, 100);

    let outputs = split_and_rotate(&input, &dir).expect("transform should succeed");

    assert_eq!(outputs.left, dir.join("cat_left_rotated.jpg"));
    assert_eq!(outputs.right, dir.join("cat_right_rotated.jpg"));
    assert_eq!(dimensions(&outputs.left), (100, 100));
    assert_eq!(dimensions(&outputs.right), (100, 100));
}

#[test]
fn odd_width_right_half_keeps_extra_column() {
    let dir = unique_temp_dir("odd-width");
    let input = dir.join("strip.png");
    write_rgb_image(&input, 101, 50);

    let outputs = split_and_rotate(&input, &dir).expect("transform should succeed");

    // Rotation swaps dimensions: a 50x50 left half and a 51x50 right half
    // become 50x50 and 50x51 outputs.
    assert_eq!(dimensions(&outputs.left), (50, 50));
    assert_eq!(dimensions(&outputs.right), (50, 51));
}

#[test]
fn output_dimensions_swap_width_and_height() {
    let dir = unique_temp_dir("dim-swap");
    let input = dir.join("tall.bmp");
    write_rgb_image(&input, 60, 240);

    let outputs = split_and_rotate(&input, &dir).expect("transform should succeed");

    assert_eq!(dimensions(&outputs.left), (240, 30));
    assert_eq!(dimensions(&outputs.right), (240, 30));
}

#[test]
fn png_source_is_reencoded_as_jpeg() {
    let dir = unique_temp_dir("png-source");
    let input = dir.join("shot.png");
    write_rgb_image(&input, 40, 20);

    let outputs = split_and_rotate(&input, &dir).expect("transform should succeed");

    assert!(outputs.left.to_string_lossy().ends_with("shot_left_rotated.jpg"));
    assert_eq!(
        image::ImageFormat::from_path(&outputs.left).expect("output extension should be known"),
        image::ImageFormat::Jpeg
    );
    let format = image::io::Reader::open(&outputs.left)
        .expect("output should open")
        .with_guessed_format()
        .expect("output should be readable")
        .format();
    assert_eq!(format, Some(image::ImageFormat::Jpeg));
}

#[test]
fn transparent_source_is_flattened_not_rejected() {
    let dir = unique_temp_dir("rgba-source");
    let input = dir.join("overlay.png");
    RgbaImage::from_pixel(80, 40, Rgba([255, 0, 0, 8]))
        .save(&input)
        .expect("fixture image should be writable");

    let outputs = split_and_rotate(&input, &dir).expect("alpha sources should still encode");

    assert_eq!(dimensions(&outputs.left), (40, 40));
    assert_eq!(dimensions(&outputs.right), (40, 40));
}

#[test]
fn existing_outputs_are_overwritten() {
    let dir = unique_temp_dir("overwrite");
    let input = dir.join("again.jpg");
    write_rgb_image(&input, 30, 30);

    split_and_rotate(&input, &dir).expect("first pass should succeed");
    let outputs = split_and_rotate(&input, &dir).expect("second pass should overwrite");

    assert!(outputs.left.is_file());
    assert!(outputs.right.is_file());
}

#[test]
fn decode_failure_is_reported_as_decode_error() {
    let dir = unique_temp_dir("decode-failure");
    let input = dir.join("broken.jpg");
    fs::write(&input, b"definitely not an image").expect("fixture should be writable");

    let err = split_and_rotate(&input, &dir).expect_err("garbage bytes should not decode");

    assert!(matches!(err, SplitError::Decode { .. }));
    assert!(err.to_string().contains("broken.jpg"));
}

#[test]
fn scan_matches_allow_list_case_insensitively() {
    let dir = unique_temp_dir("scan-case");
    write_rgb_image(&dir.join("PHOTO.JPG"), 4, 4);
    write_rgb_image(&dir.join("photo.jpg"), 4, 4);
    write_rgb_image(&dir.join("mixed.Png"), 4, 4);
    fs::write(dir.join("notes.txt"), "skip me").expect("fixture should be writable");
    fs::create_dir(dir.join("nested.jpg")).expect("decoy directory should be creatable");

    let mut found = scan_images(&dir).expect("scan should succeed");
    found.sort();

    let names: Vec<_> = found
        .iter()
        .filter_map(|path| path.file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["PHOTO.JPG", "mixed.Png", "photo.jpg"]);
}

#[test]
fn scan_is_idempotent_on_unchanged_directory() {
    let dir = unique_temp_dir("scan-idempotent");
    write_rgb_image(&dir.join("a.jpeg"), 4, 4);
    write_rgb_image(&dir.join("b.gif"), 4, 4);
    write_rgb_image(&dir.join("c.tiff"), 4, 4);

    let mut first = scan_images(&dir).expect("first scan should succeed");
    let mut second = scan_images(&dir).expect("second scan should succeed");
    first.sort();
    second.sort();

    assert_eq!(first.len(), 3);
    assert_eq!(first, second);
}

#[test]
fn scan_of_missing_directory_yields_no_candidates() {
    let missing = std::env::temp_dir().join("imgsplit-test-definitely-missing-dir");

    let found = scan_images(&missing).expect("missing directory should not be an error");

    assert!(found.is_empty());
}

#[test]
fn output_dir_defaults_to_output_subfolder() {
    let input = Path::new("/data/photos");

    assert_eq!(
        resolve_output_dir(input, None),
        PathBuf::from("/data/photos/output")
    );
    assert_eq!(
        resolve_output_dir(input, Some(PathBuf::from("/tmp/halves"))),
        PathBuf::from("/tmp/halves")
    );
}

#[test]
fn ensure_output_dir_is_idempotent_and_creates_parents() {
    let base = unique_temp_dir("ensure-dir");
    let nested = base.join("a").join("b").join("output");

    ensure_output_dir(&nested).expect("nested creation should succeed");
    ensure_output_dir(&nested).expect("repeat creation should succeed");

    assert!(nested.is_dir());
}

#[test]
fn ensure_output_dir_fails_under_a_file() {
    let base = unique_temp_dir("ensure-dir-fails");
    let blocker = base.join("not-a-dir");
    fs::write(&blocker, "plain file").expect("blocker file should be writable");

    let err = ensure_output_dir(&blocker.join("output"))
        .expect_err("creation under a file should fail");

    assert!(err.to_string().contains("Failed to create output directory"));
}
