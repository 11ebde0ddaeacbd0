//! CLI entry point for the palette mosaic tool

use clap::Parser;
use mosaictile::io::cli::{Cli, FileProcessor, usage_error};
use mosaictile::io::configuration::DEFAULT_LOG_FILTER;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(DEFAULT_LOG_FILTER),
    )
    .init();

    let cli = Cli::parse();
    let mut processor = FileProcessor::new(cli);
    match processor.process() {
        Ok(_) => ExitCode::SUCCESS,
        // Allow print for the final error report
        #[allow(clippy::print_stderr)]
        Err(error) => {
            if let Some(usage) = usage_error(&error) {
                usage.exit();
            }
            eprintln!("Error: {error}");
            ExitCode::FAILURE
        }
    }
}
