pub const DEFAULT_QUALITY: u8 = 85;
pub const MIN_QUALITY: u8 = 1;
pub const MAX_QUALITY: u8 = 100;

/// libwebp `method`: 0 is fastest, 6 searches hardest for the smallest output.
pub const WEBP_METHOD: i32 = 6;

pub const MEDIUM_VARIANT_WIDTH: u32 = 800;
pub const SMALL_VARIANT_WIDTH: u32 = 400;

pub const BACKGROUND_RGB: [u8; 3] = [255, 255, 255];

// Site layout, relative to the docs directory
pub const DOCS_DIR_NAME: &str = "docs";
pub const IMAGES_DIR_NAME: &str = "images";
pub const BOARD_DIR_NAME: &str = "board";
pub const OPTIMIZED_DIR_NAME: &str = "optimized";

pub const OUTPUT_EXTENSION: &str = "webp";

pub const BANNER_TITLE: &str = "🖼️  Image Optimization for Philosophy Club Website";
pub const BANNER_WIDTH: usize = 60;

pub const NEXT_STEPS: &[&str] = &[
    "Review the optimized images",
    "Update HTML to use <picture> tags with WebP sources",
    "Replace original images with optimized versions",
    "Add loading='lazy' attributes to <img> tags",
];

pub const PROGRESS_BAR_TEMPLATE: &str = "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}";

// Common output message prefixes
pub const SUCCESS_PREFIX: &str = "✅";
pub const WARNING_PREFIX: &str = "⚠️";
pub const ERROR_PREFIX: &str = "❌";
pub const INFO_PREFIX: &str = "📋";
pub const SIZE_PREFIX: &str = "📊";
pub const VERBOSE_PREFIX: &str = "🔍";
