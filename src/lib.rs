pub mod batch;
pub mod cli;
pub mod constants;
pub mod error;
pub mod formats;
pub mod logger;
pub mod processing;
pub mod report;
pub mod utils;
pub mod validation;

pub use batch::{collect_source_images, prepare_output_dirs, process_directory, run, SiteLayout};
pub use error::{OptimizeError, Result};
pub use formats::{is_source_image, ColorMode, SourceFormat};
pub use processing::{
    encode_webp, load_source, normalize, probe_encoder, resize_to_width, transcode,
    transcode_image, variant_dimensions, TranscodeOptions, Variant,
};
pub use report::{BatchSummary, FileOutcome, OptimizationReport, WrittenVariant};
