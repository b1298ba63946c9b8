use crate::constants::{MAX_QUALITY, MIN_QUALITY};
use crate::error::{OptimizeError, Result};
use std::path::Path;

/// Validate that a quality value lies within the encoder's 1..=100 range
pub fn validate_quality(quality: u8) -> Result<u8> {
    if !(MIN_QUALITY..=MAX_QUALITY).contains(&quality) {
        return Err(OptimizeError::InvalidQuality(quality));
    }
    Ok(quality)
}

/// Validate that a regular file exists at the given path
pub fn validate_file_exists(path: &Path) -> Result<()> {
    if !path.is_file() {
        return Err(OptimizeError::FileNotFound(path.to_path_buf()));
    }
    Ok(())
}

/// The images directory is the one precondition a run cannot recover from
pub fn validate_images_dir(path: &Path) -> Result<()> {
    if !path.is_dir() {
        return Err(OptimizeError::ImagesDirNotFound(path.to_path_buf()));
    }
    Ok(())
}
