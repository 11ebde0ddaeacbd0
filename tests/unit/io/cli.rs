//! Tests for command-line parsing, path resolution and file processing

#[cfg(test)]
mod tests {
    use clap::Parser;
    use clap::error::ErrorKind;
    use image::{Rgb, RgbImage};
    use mosaictile::MosaicError;
    use mosaictile::io::cli::{
        Cli, FileProcessor, default_output_path, disambiguate_output_path, usage_error,
        with_format_extension,
    };
    use mosaictile::io::image::RasterFormat;
    use std::ffi::OsString;
    use std::path::{Path, PathBuf};

    fn args(source: &Path, extra: &[&str]) -> Vec<OsString> {
        let mut args = vec![OsString::from("program"), source.as_os_str().to_os_string()];
        args.extend(extra.iter().map(OsString::from));
        args
    }

    fn write_source(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
        let path = dir.join(name);
        let image = RgbImage::from_fn(width, height, |x, y| {
            Rgb([(x * 9) as u8, (y * 9) as u8, 60])
        });
        assert!(image.save(&path).is_ok());
        path
    }

    // Tests CLI parsing with only the required source argument
    // Verified by giving the output format a default value
    #[test]
    fn test_cli_parse_minimal_args() {
        let cli = Cli::parse_from(["program", "test.png"]);

        assert_eq!(cli.source, PathBuf::from("test.png"));
        assert_eq!(cli.output, None);
        assert_eq!(cli.output_format, None);
        assert_eq!(cli.seed, None);
        assert!(!cli.quiet);
        assert!(cli.should_show_progress());
    }

    // Tests CLI parsing with all available arguments
    // Verified by renaming the output format flag
    #[test]
    fn test_cli_parse_all_args() {
        let cli = Cli::parse_from([
            "program",
            "input.jpg",
            "--output",
            "out/result",
            "--output-format",
            "png",
            "--seed",
            "123",
            "--quiet",
        ]);

        assert_eq!(cli.source, PathBuf::from("input.jpg"));
        assert_eq!(cli.output, Some(PathBuf::from("out/result")));
        assert_eq!(cli.output_format, Some(RasterFormat::Png));
        assert_eq!(cli.seed, Some(123));
        assert!(!cli.should_show_progress());
    }

    // Tests unsupported output formats and missing sources fail parsing
    // Verified by accepting any output format string
    #[test]
    fn test_cli_rejects_bad_args() {
        assert!(Cli::try_parse_from(["program", "a.png", "-f", "gif"]).is_err());
        assert!(Cli::try_parse_from(["program"]).is_err());
        assert!(Cli::try_parse_from(["program", "--help"]).is_err());
    }

    // Tests default output naming beside the source
    // Verified by dropping the source directory
    #[test]
    fn test_default_output_path() {
        assert_eq!(
            default_output_path(Path::new("photos/cat.png"), RasterFormat::Jpeg),
            PathBuf::from("photos/output_cat.jpg")
        );
        assert_eq!(
            default_output_path(Path::new("cat.jpg"), RasterFormat::Png),
            PathBuf::from("output_cat.png")
        );
    }

    // Tests explicit outputs only gain an extension when missing
    // Verified by always replacing the extension
    #[test]
    fn test_with_format_extension() {
        assert_eq!(
            with_format_extension(Path::new("out/result"), RasterFormat::Png),
            PathBuf::from("out/result.png")
        );
        assert_eq!(
            with_format_extension(Path::new("out/result.jpeg"), RasterFormat::Png),
            PathBuf::from("out/result.jpeg")
        );
    }

    // Tests an existing output is renamed with the collision suffix
    // Verified by overwriting the existing path
    #[test]
    fn test_disambiguate_output_path() {
        let Ok(dir) = tempfile::tempdir() else {
            return;
        };
        let taken = dir.path().join("mosaic.png");
        let free = dir.path().join("fresh.png");
        assert!(std::fs::write(&taken, b"existing").is_ok());

        assert_eq!(disambiguate_output_path(&free), free);
        assert_eq!(disambiguate_output_path(&taken), dir.path().join("mosaic_1.png"));
    }

    // Tests missing sources are input errors
    // Verified by skipping the existence check
    #[test]
    fn test_resolve_job_missing_source() {
        let cli = Cli::parse_from(["program", "no/such/file.png", "--quiet"]);
        let processor = FileProcessor::new(cli);
        assert!(matches!(
            processor.resolve_job(),
            Err(MosaicError::InvalidInput { .. })
        ));
    }

    // Tests sources with unsupported extensions are rejected
    // Verified by accepting any existing file
    #[test]
    fn test_resolve_job_unsupported_source() {
        let Ok(dir) = tempfile::tempdir() else {
            return;
        };
        let path = dir.path().join("notes.txt");
        assert!(std::fs::write(&path, b"hello").is_ok());

        let cli = Cli::parse_from(args(&path, &["--quiet"]));
        let processor = FileProcessor::new(cli);
        assert!(matches!(
            processor.resolve_job(),
            Err(MosaicError::UnsupportedFormat { .. })
        ));
    }

    // Tests formats default to the source and outputs land beside it
    // Verified by defaulting the output format to png
    #[test]
    fn test_resolve_job_defaults() {
        let Ok(dir) = tempfile::tempdir() else {
            return;
        };
        let source = write_source(dir.path(), "scene.jpg", 8, 8);

        let cli = Cli::parse_from(args(&source, &["-q"]));
        let Ok(job) = FileProcessor::new(cli).resolve_job() else {
            unreachable!("valid source must resolve");
        };

        assert_eq!(job.input_format, RasterFormat::Jpeg);
        assert_eq!(job.output_format, RasterFormat::Jpeg);
        assert_eq!(job.output, dir.path().join("output_scene.jpg"));
    }

    // Tests a full run writes the mosaic and then avoids overwriting it
    // Verified by writing to the requested path on collision
    #[test]
    fn test_process_writes_and_disambiguates() {
        let Ok(dir) = tempfile::tempdir() else {
            return;
        };
        let source = write_source(dir.path(), "scene.png", 10, 10);
        let run_args = args(&source, &["-q", "-s", "7"]);

        let Ok(first) = FileProcessor::new(Cli::parse_from(run_args.clone())).process() else {
            unreachable!("first run must succeed");
        };
        assert_eq!(first, dir.path().join("output_scene.png"));
        assert!(first.exists());

        let Ok(second) = FileProcessor::new(Cli::parse_from(run_args.clone())).process() else {
            unreachable!("second run must succeed");
        };
        assert_eq!(second, dir.path().join("output_scene_1.png"));
        assert!(second.exists());

        let (Ok(a), Ok(b)) = (image::open(&first), image::open(&second)) else {
            unreachable!("outputs must decode");
        };
        assert_eq!(a.to_rgba8(), b.to_rgba8());
        assert_eq!(a.to_rgba8().dimensions(), (10, 10));
    }

    // Tests a jpg source decodes and produces a jpg mosaic of the same size
    // Verified by encoding jpg output with an alpha channel
    #[test]
    fn test_process_jpeg_source() {
        let Ok(dir) = tempfile::tempdir() else {
            return;
        };
        let source = write_source(dir.path(), "photo.jpeg", 9, 6);

        let Ok(written) = FileProcessor::new(Cli::parse_from(args(&source, &["-q", "-s", "3"])))
            .process()
        else {
            unreachable!("jpg run must succeed");
        };

        assert_eq!(written, dir.path().join("output_photo.jpg"));
        let Ok(output) = image::open(&written) else {
            unreachable!("jpg output must decode");
        };
        assert_eq!(output.to_rgb8().dimensions(), (9, 6));
    }

    // Tests input errors become usage errors that exit non-zero
    // Verified by returning None for a missing source
    #[test]
    fn test_usage_error_for_input_errors() {
        let cli = Cli::parse_from(["program", "no/such/file.png", "--quiet"]);
        let Err(error) = FileProcessor::new(cli).process() else {
            unreachable!("missing source must fail");
        };
        let Some(usage) = usage_error(&error) else {
            unreachable!("missing source must be a usage error");
        };

        assert_eq!(usage.kind(), ErrorKind::ValueValidation);
        assert_ne!(usage.exit_code(), 0);
        let rendered = usage.render().to_string();
        assert!(rendered.contains("does not exist"));
        assert!(rendered.contains("Usage:"));

        let unsupported = MosaicError::UnsupportedFormat {
            value: "gif".to_string(),
        };
        assert!(usage_error(&unsupported).is_some());
    }

    // Tests failures past argument validation are not usage errors
    // Verified by wrapping every error in a usage message
    #[test]
    fn test_usage_error_ignores_processing_errors() {
        let exhausted = MosaicError::PaletteExhausted {
            tile_index: 3,
            tile_total: 4,
        };
        assert!(usage_error(&exhausted).is_none());
    }
}
