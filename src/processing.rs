use crate::constants::{
    BACKGROUND_RGB, DEFAULT_QUALITY, MEDIUM_VARIANT_WIDTH, OUTPUT_EXTENSION, SMALL_VARIANT_WIDTH,
    WEBP_METHOD,
};
use crate::error::{OptimizeError, Result};
use crate::formats::ColorMode;
use crate::report::{FileOutcome, OptimizationReport, WrittenVariant};
use crate::utils::format_file_size;
use crate::validation::{validate_file_exists, validate_quality};
use crate::{error, success, verbose};
use image::imageops::{self, FilterType};
use image::{DynamicImage, GenericImageView, ImageReader, Rgb, RgbImage, Rgba, RgbaImage};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscodeOptions {
    pub quality: u8,
}

impl TranscodeOptions {
    pub fn new(quality: Option<u8>) -> Result<Self> {
        let quality = validate_quality(quality.unwrap_or(DEFAULT_QUALITY))?;
        Ok(Self { quality })
    }
}

impl Default for TranscodeOptions {
    fn default() -> Self {
        Self {
            quality: DEFAULT_QUALITY,
        }
    }
}

/// The encoded outputs produced for every source image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// Full resolution
    Primary,
    Medium,
    Small,
}

impl Variant {
    /// Downscaled variants, in the order they are written
    pub const RESPONSIVE: [Variant; 2] = [Variant::Medium, Variant::Small];

    pub fn target_width(&self) -> Option<u32> {
        match self {
            Variant::Primary => None,
            Variant::Medium => Some(MEDIUM_VARIANT_WIDTH),
            Variant::Small => Some(SMALL_VARIANT_WIDTH),
        }
    }

    /// File name suffix, e.g. `-800w`
    pub fn suffix(&self) -> String {
        self.target_width()
            .map(|width| format!("-{}w", width))
            .unwrap_or_default()
    }

    pub fn output_path(&self, output_dir: &Path, stem: &str) -> PathBuf {
        output_dir.join(format!("{}{}.{}", stem, self.suffix(), OUTPUT_EXTENSION))
    }
}

/// Computes the size of a downscaled variant.
///
/// Returns `None` when the source is not wider than `target_width`, so variants
/// never upscale. The height keeps the source aspect ratio, rounded to the
/// nearest pixel and never below one.
///
/// # Example
/// ```
/// use optimize_images::variant_dimensions;
///
/// assert_eq!(variant_dimensions(1600, 1200, 800), Some((800, 600)));
/// assert_eq!(variant_dimensions(800, 600, 800), None);
/// ```
pub fn variant_dimensions(width: u32, height: u32, target_width: u32) -> Option<(u32, u32)> {
    if width <= target_width {
        return None;
    }
    let scaled = (f64::from(target_width) * f64::from(height) / f64::from(width)).round() as u32;
    Some((target_width, scaled.max(1)))
}

/// Downscales `img` to `target_width` with Lanczos3 resampling, or returns `None`
/// if the image is already narrow enough.
pub fn resize_to_width(img: &RgbImage, target_width: u32) -> Option<RgbImage> {
    let (width, height) = img.dimensions();
    variant_dimensions(width, height, target_width)
        .map(|(w, h)| imageops::resize(img, w, h, FilterType::Lanczos3))
}

/// Loads a source image and returns it along with its file size in bytes.
///
/// The format is sniffed from the file contents, so a PNG saved with a `.jpg`
/// extension still decodes.
pub fn load_source(input_path: &Path) -> Result<(DynamicImage, u64)> {
    validate_file_exists(input_path)?;

    let file_size = fs::metadata(input_path)?.len();
    let img = ImageReader::open(input_path)?
        .with_guessed_format()?
        .decode()?;

    let (width, height) = img.dimensions();
    if width == 0 || height == 0 {
        return Err(OptimizeError::InvalidDimensions(width, height));
    }

    Ok((img, file_size))
}

/// Flattens any alpha onto an opaque white canvas and returns 8-bit RGB.
///
/// Opaque sources are converted without compositing.
pub fn normalize(img: &DynamicImage) -> RgbImage {
    if !ColorMode::of(img).has_alpha() {
        return img.to_rgb8();
    }

    let [r, g, b] = BACKGROUND_RGB;
    let mut canvas = RgbaImage::from_pixel(img.width(), img.height(), Rgba([r, g, b, 255]));
    imageops::overlay(&mut canvas, &img.to_rgba8(), 0, 0);
    DynamicImage::ImageRgba8(canvas).to_rgb8()
}

/// Encodes an RGB buffer as lossy WebP with the slowest, smallest method.
pub fn encode_webp(img: &RgbImage, quality: u8) -> Result<Vec<u8>> {
    let (width, height) = img.dimensions();
    if width == 0 || height == 0 {
        return Err(OptimizeError::InvalidDimensions(width, height));
    }

    let mut config = webp::WebPConfig::new().map_err(|_| {
        OptimizeError::WebPEncoding("failed to initialise encoder configuration".to_string())
    })?;
    config.lossless = 0;
    config.quality = f32::from(quality);
    config.method = WEBP_METHOD;

    let encoder = webp::Encoder::from_rgb(img.as_raw(), width, height);
    let memory = encoder
        .encode_advanced(&config)
        .map_err(|e| OptimizeError::WebPEncoding(format!("{:?}", e)))?;

    Ok(memory.to_vec())
}

/// Encodes a single pixel to confirm the WebP encoder is usable before a run.
pub fn probe_encoder() -> Result<()> {
    let pixel = RgbImage::from_pixel(1, 1, Rgb(BACKGROUND_RGB));
    encode_webp(&pixel, DEFAULT_QUALITY)
        .map(|_| ())
        .map_err(|e| OptimizeError::EncoderUnavailable(e.to_string()))
}

fn write_variant(
    img: &RgbImage,
    variant: Variant,
    output_dir: &Path,
    stem: &str,
    options: &TranscodeOptions,
) -> Result<WrittenVariant> {
    let path = variant.output_path(output_dir, stem);
    let bytes = encode_webp(img, options.quality)?;
    fs::write(&path, &bytes)?;

    let size = fs::metadata(&path)?.len();
    let (width, height) = img.dimensions();
    verbose!(
        "Wrote {} ({}x{}, {})",
        path.display(),
        width,
        height,
        format_file_size(size)
    );

    Ok(WrittenVariant {
        variant,
        path,
        width,
        height,
        size,
    })
}

/// Transcodes one source image into `output_dir`:
/// load -> normalize -> primary WebP -> responsive variants
///
/// # Arguments
/// * `input_path` - Path to a JPEG or PNG source
/// * `output_dir` - Existing directory receiving `<stem>.webp` and its variants
/// * `options` - Encoder options
///
/// # Returns
/// * `Ok(OptimizationReport)` - Sizes of every written file
/// * `Err(OptimizeError)` - The first failure. Files already written stay on disk.
pub fn transcode_image(
    input_path: &Path,
    output_dir: &Path,
    options: &TranscodeOptions,
) -> Result<OptimizationReport> {
    let invalid_name = || OptimizeError::InvalidFileName(input_path.to_path_buf());
    let filename = input_path
        .file_name()
        .ok_or_else(invalid_name)?
        .to_string_lossy()
        .into_owned();
    let stem = input_path
        .file_stem()
        .ok_or_else(invalid_name)?
        .to_string_lossy()
        .into_owned();

    let (source, original_size) = load_source(input_path)?;
    verbose!(
        "Loaded {} ({}x{}, {})",
        filename,
        source.width(),
        source.height(),
        ColorMode::of(&source)
    );

    let normalized = normalize(&source);
    drop(source);

    let primary = write_variant(&normalized, Variant::Primary, output_dir, &stem, options)?;
    let mut report = OptimizationReport {
        filename,
        original_size,
        primary,
        variants: Vec::new(),
    };
    success!("{}", report.summary_line());

    for variant in Variant::RESPONSIVE {
        let Some(target_width) = variant.target_width() else {
            continue;
        };
        if let Some(resized) = resize_to_width(&normalized, target_width) {
            report
                .variants
                .push(write_variant(&resized, variant, output_dir, &stem, options)?);
        }
    }

    Ok(report)
}

/// Runs [`transcode_image`] behind a failure boundary.
///
/// Errors are printed with the offending path and folded into
/// [`FileOutcome::Failed`]; they never propagate to the caller.
pub fn transcode(input_path: &Path, output_dir: &Path, options: &TranscodeOptions) -> FileOutcome {
    match transcode_image(input_path, output_dir, options) {
        Ok(report) => FileOutcome::Optimized(report),
        Err(e) => {
            error!("Error processing {}: {}", input_path.display(), e);
            FileOutcome::Failed {
                path: input_path.to_path_buf(),
                error: e.to_string(),
            }
        }
    }
}
