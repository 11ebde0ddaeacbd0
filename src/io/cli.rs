//! Command-line interface for turning one image into a palette mosaic

use crate::algorithm::assignment::NoopObserver;
use crate::algorithm::executor::{MosaicConfig, MosaicExecutor};
use crate::io::configuration::{COLLISION_SUFFIX, OUTPUT_PREFIX};
use crate::io::error::{MosaicError, Result, invalid_input};
use crate::io::image::{RasterFormat, load_canvas, save_canvas};
use crate::io::progress::ProgressManager;
use crate::palette::PaletteGenerator;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "mosaictile")]
#[command(
    author,
    version,
    about = "Rebuild an image as square tiles painted from a random single-use palette"
)]
/// Command-line arguments for the mosaic tool
pub struct Cli {
    /// Source image (png or jpg)
    #[arg(value_name = "SOURCE")]
    pub source: PathBuf,

    /// Output image path [default: output_<source>.<format> next to the source]
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Output format, png or jpg [default: same as the source]
    #[arg(short = 'f', long, value_name = "FORMAT")]
    pub output_format: Option<RasterFormat>,

    /// Random seed for a reproducible palette
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Validated paths and formats for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    /// Image to read
    pub source: PathBuf,
    /// Format of the source image
    pub input_format: RasterFormat,
    /// Where the mosaic is written
    pub output: PathBuf,
    /// Format of the written mosaic
    pub output_format: RasterFormat,
}

/// Validates arguments, runs the mosaic and writes the result
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Build the mosaic and write it, returning the path written
    ///
    /// # Errors
    ///
    /// Returns an error if argument validation, decoding, mosaic construction
    /// or encoding fails
    pub fn process(&mut self) -> Result<PathBuf> {
        let start_time = Instant::now();
        let job = self.resolve_job()?;

        let source = load_canvas(&job.source, job.input_format)?;
        let generator = self
            .cli
            .seed
            .map_or_else(PaletteGenerator::from_entropy, PaletteGenerator::from_seed);
        let mut executor = MosaicExecutor::new(MosaicConfig::default(), generator)?;

        let outcome = if let Some(ref mut pm) = self.progress_manager {
            pm.start_file(&job.source, source.dimensions().pixel_count());
            let outcome = executor.run(&source, pm)?;
            pm.finish();
            outcome
        } else {
            executor.run(&source, &mut NoopObserver)?
        };

        save_canvas(&outcome.canvas, &job.output, job.output_format)?;
        log::info!(
            "Wrote {} tiles to {} in {:?}",
            outcome.layout.tile_count(),
            job.output.display(),
            outcome.elapsed
        );

        // Allow print for user feedback on total run time
        #[allow(clippy::print_stderr)]
        if !self.cli.quiet {
            eprintln!("Time elapsed: {:?}", start_time.elapsed());
        }

        Ok(job.output)
    }

    /// Validate the source and work out formats and the output path
    ///
    /// # Errors
    ///
    /// Returns an error if the source is missing, is not a file, or is not a
    /// png/jpg image
    pub fn resolve_job(&self) -> Result<Job> {
        let source = self.cli.source.clone();
        if !source.exists() {
            return Err(invalid_input(&source, &"source file does not exist"));
        }
        if !source.is_file() {
            return Err(invalid_input(&source, &"source must be a file"));
        }

        let input_format = RasterFormat::from_path(&source)?;
        let output_format = self.cli.output_format.unwrap_or(input_format);

        let requested = self.cli.output.as_ref().map_or_else(
            || default_output_path(&source, output_format),
            |path| with_format_extension(path, output_format),
        );
        let output = disambiguate_output_path(&requested);

        Ok(Job {
            source,
            input_format,
            output,
            output_format,
        })
    }
}

/// Output path derived from the source: `output_<stem>.<ext>` beside it
pub fn default_output_path(source: &Path, format: RasterFormat) -> PathBuf {
    let stem = source.file_stem().unwrap_or_default();
    let output_name = format!(
        "{OUTPUT_PREFIX}{}.{}",
        stem.to_string_lossy(),
        format.extension()
    );

    if let Some(parent) = source.parent() {
        parent.join(output_name)
    } else {
        PathBuf::from(output_name)
    }
}

/// Add the format's extension to a path that has none
pub fn with_format_extension(path: &Path, format: RasterFormat) -> PathBuf {
    if path.extension().is_some() {
        path.to_path_buf()
    } else {
        path.with_extension(format.extension())
    }
}

/// Rename `<stem>.<ext>` to `<stem>_1.<ext>` if the path is already taken
pub fn disambiguate_output_path(path: &Path) -> PathBuf {
    if !path.exists() {
        return path.to_path_buf();
    }

    let stem = path.file_stem().unwrap_or_default().to_string_lossy();
    let renamed = path.extension().map_or_else(
        || format!("{stem}{COLLISION_SUFFIX}"),
        |ext| format!("{stem}{COLLISION_SUFFIX}.{}", ext.to_string_lossy()),
    );
    let disambiguated = path.with_file_name(renamed);

    log::warn!(
        "Output {} already exists, writing {} instead",
        path.display(),
        disambiguated.display()
    );
    disambiguated
}

/// Usage error for failures caused by the command-line input itself
///
/// Missing sources and unsupported formats are reported the way clap reports
/// a bad argument: the message, the usage line and a non-zero exit code.
/// Other failures return `None`.
pub fn usage_error(error: &MosaicError) -> Option<clap::Error> {
    matches!(
        error,
        MosaicError::InvalidInput { .. } | MosaicError::UnsupportedFormat { .. }
    )
    .then(|| Cli::command().error(ErrorKind::ValueValidation, error))
}
