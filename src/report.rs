//! Per-file outcomes and the aggregate batch summary
//!
//! Nothing here is persisted; reports exist only to be printed.

use crate::processing::Variant;
use crate::utils::{calculate_compression_ratio, format_kb};
use std::path::PathBuf;

/// One encoded file written by the transcoder
#[derive(Debug, Clone, PartialEq)]
pub struct WrittenVariant {
    pub variant: Variant,
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
    pub size: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OptimizationReport {
    pub filename: String,
    pub original_size: u64,
    pub primary: WrittenVariant,
    /// Responsive variants, largest first
    pub variants: Vec<WrittenVariant>,
}

impl OptimizationReport {
    pub fn primary_size(&self) -> u64 {
        self.primary.size
    }

    pub fn percent_saved(&self) -> f64 {
        calculate_compression_ratio(self.original_size, self.primary.size)
    }

    /// `photo.jpg: 512.0KB → 98.3KB (saved 80.8%)`, printed behind the success marker
    pub fn summary_line(&self) -> String {
        format!(
            "{}: {} → {} (saved {:.1}%)",
            self.filename,
            format_kb(self.original_size),
            format_kb(self.primary.size),
            self.percent_saved()
        )
    }
}

/// Result of one transcode call after its failure boundary
#[derive(Debug, Clone, PartialEq)]
pub enum FileOutcome {
    Optimized(OptimizationReport),
    Failed { path: PathBuf, error: String },
}

impl FileOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, FileOutcome::Optimized(_))
    }

    pub fn report(&self) -> Option<&OptimizationReport> {
        match self {
            FileOutcome::Optimized(report) => Some(report),
            FileOutcome::Failed { .. } => None,
        }
    }
}

/// Running totals across every directory of a run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchSummary {
    pub succeeded: usize,
    pub failed: usize,
    pub bytes_before: u64,
    pub bytes_after: u64,
}

impl BatchSummary {
    pub fn record(&mut self, outcome: &FileOutcome) {
        match outcome {
            FileOutcome::Optimized(report) => {
                self.succeeded += 1;
                self.bytes_before += report.original_size;
                self.bytes_after += report.primary_size();
            }
            FileOutcome::Failed { .. } => self.failed += 1,
        }
    }

    pub fn merge(&mut self, other: &BatchSummary) {
        self.succeeded += other.succeeded;
        self.failed += other.failed;
        self.bytes_before += other.bytes_before;
        self.bytes_after += other.bytes_after;
    }

    pub fn total(&self) -> usize {
        self.succeeded + self.failed
    }

    /// Saving over the primary outputs of successful files only
    pub fn percent_saved(&self) -> f64 {
        calculate_compression_ratio(self.bytes_before, self.bytes_after)
    }
}
