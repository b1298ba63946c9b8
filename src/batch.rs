use crate::constants::{
    BANNER_TITLE, BANNER_WIDTH, BOARD_DIR_NAME, IMAGES_DIR_NAME, INFO_PREFIX, NEXT_STEPS,
    OPTIMIZED_DIR_NAME, PROGRESS_BAR_TEMPLATE, SIZE_PREFIX,
};
use crate::error::{OptimizeError, Result};
use crate::formats::is_source_image;
use crate::processing::{transcode, TranscodeOptions};
use crate::report::BatchSummary;
use crate::utils::format_file_size;
use crate::validation::validate_images_dir;
use crate::logger;
use crate::{info, success, verbose, warn};
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;
use walkdir::WalkDir;

/// Where sources are read from and outputs written to, below a site's docs directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteLayout {
    pub images_dir: PathBuf,
    pub board_dir: PathBuf,
    pub optimized_dir: PathBuf,
    pub optimized_board_dir: PathBuf,
}

impl SiteLayout {
    pub fn new(docs_dir: &Path) -> Self {
        let images_dir = docs_dir.join(IMAGES_DIR_NAME);
        let optimized_dir = images_dir.join(OPTIMIZED_DIR_NAME);
        Self {
            board_dir: images_dir.join(BOARD_DIR_NAME),
            optimized_board_dir: optimized_dir.join(BOARD_DIR_NAME),
            images_dir,
            optimized_dir,
        }
    }

    /// Source/output pairs in processing order. The board set is optional.
    pub fn image_sets(&self) -> Vec<ImageSet<'_>> {
        vec![
            ImageSet {
                label: "main images",
                source_dir: &self.images_dir,
                output_dir: &self.optimized_dir,
                required: true,
            },
            ImageSet {
                label: "board member images",
                source_dir: &self.board_dir,
                output_dir: &self.optimized_board_dir,
                required: false,
            },
        ]
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ImageSet<'a> {
    pub label: &'static str,
    pub source_dir: &'a Path,
    pub output_dir: &'a Path,
    pub required: bool,
}

/// Lists the JPEG and PNG files directly inside `dir`, sorted by file name.
///
/// Subdirectories are not descended into, and symlinks to regular files count
/// as files.
pub fn collect_source_images(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut image_files = Vec::new();

    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name();

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if e.depth() > 0 => {
                warn!("Skipping unreadable entry: {}", e);
                continue;
            }
            Err(e) => return Err(e.into()),
        };
        let path = entry.path();

        if entry.file_type().is_file() && is_source_image(path) {
            image_files.push(path.to_path_buf());
        }
    }

    Ok(image_files)
}

/// Creates `optimized/` and `optimized/board/`. Existing directories are fine.
pub fn prepare_output_dirs(layout: &SiteLayout) -> Result<()> {
    for dir in [&layout.optimized_dir, &layout.optimized_board_dir] {
        fs::create_dir_all(dir)
            .map_err(|_| OptimizeError::DirectoryCreationFailed(dir.clone()))?;
    }
    Ok(())
}

/// Transcodes every source image of one set, one file at a time.
///
/// Per-file failures are counted in the returned summary and never abort the set.
pub fn process_directory(set: &ImageSet<'_>, options: &TranscodeOptions) -> Result<BatchSummary> {
    let image_files = collect_source_images(set.source_dir)?;
    let mut summary = BatchSummary::default();

    if image_files.is_empty() {
        verbose!("No source images in {}", set.source_dir.display());
        return Ok(summary);
    }

    let progress = ProgressBar::new(image_files.len() as u64);
    if let Ok(style) = ProgressStyle::default_bar().template(PROGRESS_BAR_TEMPLATE) {
        progress.set_style(style);
    }
    logger::attach_progress(&progress);

    for input_path in &image_files {
        if let Some(name) = input_path.file_name() {
            progress.set_message(name.to_string_lossy().into_owned());
        }
        let outcome = transcode(input_path, set.output_dir, options);
        summary.record(&outcome);
        progress.inc(1);
    }

    progress.finish_and_clear();
    logger::detach_progress();
    Ok(summary)
}

/// Runs the whole optimization pass over a site layout.
///
/// # Returns
/// * `Ok(BatchSummary)` - Totals across every set, even if every file failed
/// * `Err(OptimizeError)` - The images directory is missing (nothing is written)
///   or an output directory or source listing could not be accessed
pub fn run(layout: &SiteLayout, options: &TranscodeOptions) -> Result<BatchSummary> {
    validate_images_dir(&layout.images_dir)?;
    prepare_output_dirs(layout)?;

    info!("{}", BANNER_TITLE);
    info!("{}", "=".repeat(BANNER_WIDTH));

    let start_time = Instant::now();
    let mut summary = BatchSummary::default();

    for set in layout.image_sets() {
        if !set.required && !set.source_dir.is_dir() {
            verbose!("Skipping {}: {} not found", set.label, set.source_dir.display());
            continue;
        }

        info!("\n{} Optimizing {}...", INFO_PREFIX, set.label);
        let set_summary = process_directory(&set, options)?;
        if set_summary.failed > 0 {
            warn!("{} of {} {} failed", set_summary.failed, set_summary.total(), set.label);
        }
        summary.merge(&set_summary);
    }

    info!("\n{}", "=".repeat(BANNER_WIDTH));
    success!("Optimization complete!");
    info!("Optimized images saved to: {}", layout.optimized_dir.display());
    print_summary(&summary, start_time);
    print_next_steps();

    Ok(summary)
}

fn print_summary(summary: &BatchSummary, start_time: Instant) {
    info!(
        "{} Processed {} files: {} optimized, {} failed",
        SIZE_PREFIX,
        summary.total(),
        summary.succeeded,
        summary.failed
    );
    if summary.succeeded > 0 {
        info!(
            "{} Total size: {} → {} (saved {:.1}%)",
            SIZE_PREFIX,
            format_file_size(summary.bytes_before),
            format_file_size(summary.bytes_after),
            summary.percent_saved()
        );
    }
    verbose!("Finished in {:.2?}", start_time.elapsed());
}

fn print_next_steps() {
    info!("\nNext steps:");
    for (index, step) in NEXT_STEPS.iter().enumerate() {
        info!("{}. {}", index + 1, step);
    }
}
