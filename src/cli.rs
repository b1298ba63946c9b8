use crate::constants::DOCS_DIR_NAME;
use crate::error::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "optimize-images",
    about = "Convert website images to WebP with responsive variants",
    long_about = "optimize-images converts every JPEG and PNG under <docs>/images and \
                  <docs>/images/board to WebP, flattening transparency onto white, and \
                  writes 800px and 400px wide variants for larger images into \
                  <docs>/images/optimized.",
    version,
    after_help = "EXAMPLES:\n  \
    optimize-images\n  \
    optimize-images --docs-dir ./site/docs -q 80"
)]
pub struct Args {
    #[arg(
        short = 'd',
        long,
        value_name = "DIR",
        help = "Site docs directory (default: <executable dir>/docs)",
        long_help = "Directory containing the images/ folder. Defaults to the docs \
                     directory next to the executable."
    )]
    pub docs_dir: Option<PathBuf>,

    #[arg(
        short = 'q',
        long,
        help = "WebP quality (1-100, default: 85)",
        long_help = "Lossy WebP quality from 1 (smallest) to 100 (best). \
                     Applied to the primary output and every variant."
    )]
    pub quality: Option<u8>,

    #[arg(long, help = "Only print failures", conflicts_with = "verbose")]
    pub quiet: bool,

    #[arg(short = 'v', long, help = "Print per-variant details")]
    pub verbose: bool,
}

impl Args {
    /// The docs directory to operate on, resolving the default next to the executable
    pub fn resolve_docs_dir(&self) -> Result<PathBuf> {
        if let Some(dir) = &self.docs_dir {
            return Ok(dir.clone());
        }
        let exe = std::env::current_exe()?;
        let program_dir = exe.parent().map(PathBuf::from).unwrap_or_default();
        Ok(program_dir.join(DOCS_DIR_NAME))
    }
}
