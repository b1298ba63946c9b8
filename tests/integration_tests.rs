mod common;

use assert_cmd::Command;
use assert_fs::prelude::*;
use assert_fs::TempDir;
use common::{
    write_corrupt_file, write_opaque_rgba_png, write_palette_png, write_photo_jpeg,
    write_photo_png,
};
use image::{GenericImageView, Rgb};
use optimize_images::{load_source, transcode_image, ColorMode, TranscodeOptions};
use predicates::prelude::*;

fn optimize_images(docs: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("optimize-images").unwrap();
    cmd.arg("--docs-dir").arg(docs.path());
    cmd
}

#[test]
fn test_cli_help() {
    let mut cmd = Command::cargo_bin("optimize-images").unwrap();
    cmd.arg("--help");
    cmd.assert().success();
}

#[test]
fn test_missing_images_dir_fails_without_writing() {
    let docs = TempDir::new().unwrap();

    optimize_images(&docs)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Images directory not found at"));

    docs.child("images").assert(predicate::path::missing());
}

#[test]
fn test_invalid_quality_fails() {
    let docs = TempDir::new().unwrap();
    docs.child("images").create_dir_all().unwrap();

    optimize_images(&docs).args(["--quality", "0"]).assert().failure();
}

#[test]
fn test_empty_images_dir_creates_output_tree() {
    let docs = TempDir::new().unwrap();
    docs.child("images").create_dir_all().unwrap();

    optimize_images(&docs)
        .assert()
        .success()
        .stdout(predicate::str::contains("Optimization complete!"))
        .stdout(predicate::str::contains("Next steps:"))
        .stdout(predicate::str::contains("loading='lazy'"));

    docs.child("images/optimized").assert(predicate::path::is_dir());
    docs.child("images/optimized/board").assert(predicate::path::is_dir());
}

#[test]
fn test_photo_scenario_writes_all_variants() {
    let docs = TempDir::new().unwrap();
    let images = docs.child("images");
    images.create_dir_all().unwrap();
    write_opaque_rgba_png(images.child("photo.png").path(), 1600, 1200);

    optimize_images(&docs)
        .assert()
        .success()
        .stdout(predicate::str::contains("✅ photo.png:"))
        .stdout(predicate::str::contains("✅ Optimization complete!"))
        .stdout(predicate::str::contains("saved"))
        .stdout(predicate::str::contains("saved -").not());

    let optimized = images.child("optimized");
    for (name, expected) in [
        ("photo.webp", (1600, 1200)),
        ("photo-800w.webp", (800, 600)),
        ("photo-400w.webp", (400, 300)),
    ] {
        let decoded = image::open(optimized.child(name).path()).unwrap();
        assert_eq!(decoded.dimensions(), expected, "{}", name);
        assert!(!decoded.color().has_alpha(), "{}", name);
    }
}

#[test]
fn test_corrupt_file_is_skipped() {
    let docs = TempDir::new().unwrap();
    let images = docs.child("images");
    images.create_dir_all().unwrap();
    write_photo_png(images.child("a.png").path(), 300, 200);
    write_corrupt_file(images.child("b.jpg").path());
    write_photo_jpeg(images.child("c.JPG").path(), 300, 200);
    images.child("notes.txt").write_str("not an image").unwrap();

    optimize_images(&docs)
        .assert()
        .success()
        .stderr(predicate::str::contains("Error processing"))
        .stderr(predicate::str::contains("b.jpg"));

    let optimized = images.child("optimized");
    optimized.child("a.webp").assert(predicate::path::exists());
    optimized.child("c.webp").assert(predicate::path::exists());
    optimized.child("b.webp").assert(predicate::path::missing());
    optimized.child("notes.webp").assert(predicate::path::missing());
}

#[test]
fn test_all_files_failing_still_exits_zero() {
    let docs = TempDir::new().unwrap();
    let images = docs.child("images");
    images.create_dir_all().unwrap();
    write_corrupt_file(images.child("one.png").path());
    write_corrupt_file(images.child("two.jpeg").path());

    optimize_images(&docs).assert().success();
}

#[test]
fn test_board_images_go_to_board_output() {
    let docs = TempDir::new().unwrap();
    let board = docs.child("images/board");
    board.create_dir_all().unwrap();
    write_photo_png(board.child("member.png").path(), 900, 900);

    optimize_images(&docs)
        .assert()
        .success()
        .stdout(predicate::str::contains("board member images"));

    let out = docs.child("images/optimized/board");
    out.child("member.webp").assert(predicate::path::exists());
    out.child("member-800w.webp").assert(predicate::path::exists());
    out.child("member-400w.webp").assert(predicate::path::exists());
}

#[test]
fn test_rerun_is_idempotent() {
    let docs = TempDir::new().unwrap();
    let images = docs.child("images");
    images.create_dir_all().unwrap();
    write_photo_png(images.child("again.png").path(), 500, 300);
    let primary = images.child("optimized/again.webp");

    optimize_images(&docs).assert().success();
    let first = std::fs::read(primary.path()).unwrap();
    optimize_images(&docs).assert().success();
    let second = std::fs::read(primary.path()).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_quiet_mode_hides_progress_but_not_failures() {
    let docs = TempDir::new().unwrap();
    let images = docs.child("images");
    images.create_dir_all().unwrap();
    write_corrupt_file(images.child("broken.png").path());

    optimize_images(&docs)
        .arg("--quiet")
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("broken.png"));
}

#[test]
fn test_palette_png_with_transparent_entry_flattens_to_white() {
    let dir = TempDir::new().unwrap();
    let input = write_palette_png(dir.child("indexed.png").path(), 32, 16);

    let (source, _) = load_source(&input).unwrap();
    assert_eq!(ColorMode::of(&source), ColorMode::TruecolorAlpha);

    let report = transcode_image(&input, dir.path(), &TranscodeOptions::default()).unwrap();

    let decoded = image::open(&report.primary.path).unwrap();
    assert!(!decoded.color().has_alpha());
    assert_eq!(decoded.dimensions(), (32, 16));

    let rgb = decoded.to_rgb8();
    let Rgb([r, g, b]) = *rgb.get_pixel(2, 8);
    assert!(r > 240 && g > 240 && b > 240, "transparent entry came out {:?}", (r, g, b));
    let Rgb([r, g, b]) = *rgb.get_pixel(29, 8);
    assert!(r > 150 && g < 80 && b < 80, "opaque entry came out {:?}", (r, g, b));
}
