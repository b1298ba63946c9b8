//! Source format and color mode classification
//!
//! Only JPEG and PNG sources are picked up by the batch driver; everything is
//! written out as WebP.
use image::{ColorType, DynamicImage};
use std::fmt;
use std::path::Path;

/// Source formats eligible for optimization
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Jpeg,
    Png,
}

impl SourceFormat {
    /// Case-insensitive lookup by file extension
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_lowercase().as_str() {
            "jpg" | "jpeg" => Some(SourceFormat::Jpeg),
            "png" => Some(SourceFormat::Png),
            _ => None,
        }
    }

    /// Matches on the text after the last dot of the file name, so a bare
    /// `.png` dotfile counts as a PNG.
    pub fn from_path(path: &Path) -> Option<Self> {
        let name = path.file_name()?.to_str()?;
        let (_, extension) = name.rsplit_once('.')?;
        Self::from_extension(extension)
    }
}

impl fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SourceFormat::Jpeg => "JPEG",
            SourceFormat::Png => "PNG",
        };
        write!(f, "{}", name)
    }
}

/// Check whether a path names a source image by its extension
pub fn is_source_image(path: &Path) -> bool {
    SourceFormat::from_path(path).is_some()
}

/// Pixel layout of a decoded source, as far as compositing is concerned.
///
/// Palette PNGs are expanded by the decoder: with a `tRNS` chunk they arrive as
/// `TruecolorAlpha`, without one as `Truecolor`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    TruecolorAlpha,
    GrayscaleAlpha,
    Grayscale,
    Truecolor,
}

impl ColorMode {
    pub fn from_color_type(color: ColorType) -> Self {
        match color {
            ColorType::Rgba8 | ColorType::Rgba16 | ColorType::Rgba32F => ColorMode::TruecolorAlpha,
            ColorType::La8 | ColorType::La16 => ColorMode::GrayscaleAlpha,
            ColorType::L8 | ColorType::L16 => ColorMode::Grayscale,
            _ => ColorMode::Truecolor,
        }
    }

    pub fn of(img: &DynamicImage) -> Self {
        Self::from_color_type(img.color())
    }

    /// Modes that must be flattened onto the background before encoding
    pub fn has_alpha(&self) -> bool {
        matches!(self, ColorMode::TruecolorAlpha | ColorMode::GrayscaleAlpha)
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ColorMode::TruecolorAlpha => "RGBA",
            ColorMode::GrayscaleAlpha => "LA",
            ColorMode::Grayscale => "L",
            ColorMode::Truecolor => "RGB",
        };
        write!(f, "{}", name)
    }
}
