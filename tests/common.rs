#![allow(dead_code)]

use image::{Rgb, RgbImage, Rgba, RgbaImage};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Smooth gradients with a little per-pixel grain, closer to a photo than a flat fill
pub fn photo_like(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        let grain = ((x.wrapping_mul(2_654_435_761) ^ y.wrapping_mul(40_503)) >> 13) % 5;
        let r = x * 200 / width + grain;
        let g = y * 200 / height + grain;
        let b = (x + y) * 100 / (width + height) + 80 + grain;
        Rgb([r as u8, g as u8, b as u8])
    })
}

pub fn write_photo_png(path: &Path, width: u32, height: u32) -> PathBuf {
    photo_like(width, height).save(path).unwrap();
    path.to_path_buf()
}

pub fn write_photo_jpeg(path: &Path, width: u32, height: u32) -> PathBuf {
    photo_like(width, height).save(path).unwrap();
    path.to_path_buf()
}

/// RGBA PNG whose every pixel is fully opaque
pub fn write_opaque_rgba_png(path: &Path, width: u32, height: u32) -> PathBuf {
    let rgb = photo_like(width, height);
    RgbaImage::from_fn(width, height, |x, y| {
        let Rgb([r, g, b]) = *rgb.get_pixel(x, y);
        Rgba([r, g, b, 255])
    })
    .save(path)
    .unwrap();
    path.to_path_buf()
}

/// RGBA PNG that is fully transparent except for an opaque square in the middle
pub fn write_transparent_png(path: &Path, width: u32, height: u32) -> PathBuf {
    let mut img = RgbaImage::from_pixel(width, height, Rgba([0, 0, 0, 0]));
    for x in width / 4..width * 3 / 4 {
        for y in height / 4..height * 3 / 4 {
            img.put_pixel(x, y, Rgba([20, 60, 160, 255]));
        }
    }
    img.save(path).unwrap();
    path.to_path_buf()
}

/// 8-bit indexed PNG: palette entry 0 is fully transparent (via `tRNS`), entry 1
/// is opaque red. The left half of the image uses entry 0.
pub fn write_palette_png(path: &Path, width: u32, height: u32) -> PathBuf {
    let writer = BufWriter::new(File::create(path).unwrap());
    let mut encoder = png::Encoder::new(writer, width, height);
    encoder.set_color(png::ColorType::Indexed);
    encoder.set_depth(png::BitDepth::Eight);
    encoder.set_palette(vec![0u8, 0, 0, 200, 20, 20]);
    encoder.set_trns(vec![0u8, 255]);

    let data: Vec<u8> = (0..height)
        .flat_map(|_| (0..width).map(move |x| u8::from(x >= width / 2)))
        .collect();

    let mut png_writer = encoder.write_header().unwrap();
    png_writer.write_image_data(&data).unwrap();
    png_writer.finish().unwrap();
    path.to_path_buf()
}

pub fn write_corrupt_file(path: &Path) -> PathBuf {
    File::create(path)
        .unwrap()
        .write_all(b"fake image data")
        .unwrap();
    path.to_path_buf()
}
