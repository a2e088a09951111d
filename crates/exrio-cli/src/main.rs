//! exrio - exercise every OpenEXR read and write layout on one file.
//!
//! Reads the input with each read variant, then writes each result back out
//! under a derived name in the output directory.

use clap::{ArgAction, Parser};
use exrio_io::Compression;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::EnvFilter;

mod demo;

#[derive(Parser, Debug)]
#[command(name = "exrio")]
#[command(author, version, about = "Read and write an OpenEXR file through every pixel layout")]
#[command(long_about = "
Reads INPUT as packed half RGBA, interleaved float, planar float and
interleaved half, then writes the results as:

  original_rgba.exr     packed half RGBA
  original_float1.exr   interleaved float
  original_float2.exr   planar float
  original_half.exr     interleaved half
  original_double.exr   planar double (stored as float, alpha = 1)

Examples:
  exrio image.exr
  exrio image.exr -o out/ -c piz -vv
")]
struct Cli {
    /// Input EXR file
    input: PathBuf,

    /// Directory for the written files
    #[arg(short, long, default_value = ".")]
    output: PathBuf,

    /// Compression: none, rle, zips, zip, piz
    #[arg(short, long, default_value = "zip")]
    compression: Compression,

    /// Verbose output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            // Usage errors exit 1; --help and --version exit 0.
            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    init_logging(cli.verbose);

    match demo::run(&cli.input, &cli.output, cli.compression) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_missing_input_is_usage_error() {
        let err = Cli::try_parse_from(["exrio"]).unwrap_err();
        assert!(err.use_stderr());
    }

    #[test]
    fn test_parse_flags() {
        let cli = Cli::try_parse_from(["exrio", "in.exr", "-o", "out", "-c", "piz", "-vv"]).unwrap();
        assert_eq!(cli.input, PathBuf::from("in.exr"));
        assert_eq!(cli.output, PathBuf::from("out"));
        assert_eq!(cli.compression, Compression::Piz);
        assert_eq!(cli.verbose, 2);

        let cli = Cli::try_parse_from(["exrio", "in.exr"]).unwrap();
        assert_eq!(cli.compression, Compression::Zip);
        assert_eq!(cli.output, PathBuf::from("."));
    }

    #[test]
    fn test_bad_compression_rejected() {
        assert!(Cli::try_parse_from(["exrio", "in.exr", "-c", "lzw"]).is_err());
    }
}
