use clap::Parser;
use optimize_images::cli::Args;
use optimize_images::error::Result;
use optimize_images::logger::{set_quiet_mode, set_verbose_mode};
use optimize_images::{error, probe_encoder, run, SiteLayout, TranscodeOptions};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();
    set_quiet_mode(args.quiet);
    set_verbose_mode(args.verbose);

    // Per-file failures are reported inside the run; only preconditions end up here.
    match optimize(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn optimize(args: &Args) -> Result<()> {
    probe_encoder()?;

    let options = TranscodeOptions::new(args.quality)?;
    let layout = SiteLayout::new(&args.resolve_docs_dir()?);
    run(&layout, &options)?;

    Ok(())
}
