//! # pixel-stash Binary Entry Point
//!
//! Thin wrapper that parses arguments, loads configuration and runs the
//! [`StegoCore`] encode or decode operation.
//!
//! ## Usage
//!
//! ```bash
//! pixel-stash encode -c carrier.png -p secret.zip -k package
//! pixel-stash decode -k package.png -p secret.zip
//! pixel-stash --config config/pixel-stash.toml --verbose decode -k package.png
//! ```
//!
//! `help` (or `--help`) prints usage. Any failure is logged and the process
//! exits with a non-zero status.

use clap::{Parser, Subcommand};
use log::error;
use std::path::PathBuf;
use std::process::ExitCode;

// Import from the library crate
use pixel_stash::common::config::{load_config, AppConfig};
use pixel_stash::common::logging::init_logger;
use pixel_stash::StegoCore;

/// Command-line arguments for the pixel-stash binary
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the configuration file (TOML format)
    ///
    /// Example: config/pixel-stash.toml
    #[arg(long, global = true)]
    config: Option<String>,

    /// Log at debug level regardless of the configured level
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Replace output files that already exist
    #[arg(long, global = true)]
    overwrite: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Hide a payload file inside a carrier image
    Encode {
        /// PNG (or other 8-bit image) that will hold the payload
        #[arg(short, long)]
        carrier: PathBuf,

        /// File to hide in the carrier
        #[arg(short, long)]
        payload: PathBuf,

        /// Name of the package image to write (".png" is appended if missing)
        #[arg(short = 'k', long, default_value = "package")]
        package: PathBuf,
    },

    /// Recover a hidden payload from a package image
    Decode {
        /// Package image containing an embedded payload
        #[arg(short = 'k', long)]
        package: PathBuf,

        /// File to write the recovered payload to
        #[arg(short, long, default_value = "payload")]
        payload: PathBuf,
    },
}

fn main() -> ExitCode {
    // Parse command-line arguments
    let args = Args::parse();

    // Load configuration (defaults when no file is given)
    let mut config: AppConfig = match &args.config {
        Some(path) => match load_config(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("pixel-stash: cannot load config '{}': {:#}", path, e);
                return ExitCode::FAILURE;
            }
        },
        None => AppConfig::default(),
    };

    if args.verbose {
        config.logging.level = "debug".to_string();
    }
    if args.overwrite {
        config.output.overwrite = true;
    }

    // Initialize logging
    init_logger(&config.logging.level);

    let core = StegoCore::new(config);

    let result = match args.command {
        Command::Encode {
            carrier,
            payload,
            package,
        } => core.encode_file(&carrier, &payload, &package).map(|_| ()),
        Command::Decode { package, payload } => core.decode_file(&package, &payload).map(|_| ()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("❌ {:#}", e);
            ExitCode::FAILURE
        }
    }
}
