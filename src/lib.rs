//! Classprep: interactive image dataset preparation.
//!
//! Classprep takes a flat folder of raster images and prepares it for
//! supervised classification training: every image is normalized to PNG,
//! stripped of transparency, shown to the operator for a class choice, and
//! finally moved into a per-class output folder.
//!
//! # Modules
//!
//! - [`discover`]: source directory scanning
//! - [`normalize`]: format normalization into the canonical PNG subdirectory
//! - [`alpha`]: in-place alpha channel stripping
//! - [`classes`]: the operator-supplied class registry
//! - [`label`]: the interactive labeling session
//! - [`relocate`]: moving labeled images into class folders
//! - [`stats`]: per-class file counts
//! - [`pipeline`]: the end-to-end orchestration
//! - [`operator`]: the input/display boundary collaborators
//! - [`error`]: error types for classprep operations

pub mod alpha;
pub mod classes;
pub mod discover;
pub mod error;
pub mod label;
pub mod normalize;
pub mod operator;
pub mod pipeline;
pub mod relocate;
pub mod stats;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use error::ClassprepError;

use operator::{ConsoleDisplay, ConsoleInput};
use pipeline::PipelineConfig;

/// The classprep CLI application.
#[derive(Parser)]
#[command(name = "classprep")]
#[command(version, author, about)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Run the full interactive preparation pipeline.
    Run(RunArgs),

    /// Print per-class file counts for an existing output directory.
    Stats(StatsArgs),
}

/// Arguments for the run subcommand.
#[derive(clap::Args)]
struct RunArgs {
    /// Directory containing the source images.
    #[arg(long, default_value = "images")]
    source: PathBuf,

    /// Directory receiving one folder per class.
    #[arg(long, default_value = "images_out")]
    output: PathBuf,
}

/// Arguments for the stats subcommand.
#[derive(clap::Args)]
struct StatsArgs {
    /// Output directory to count.
    #[arg(default_value = "images_out")]
    output_dir: PathBuf,

    /// Output format for the report ('text' or 'json').
    #[arg(long, default_value = "text")]
    format: String,
}

/// Run the classprep CLI.
///
/// This is the main entry point for the CLI, called from `main.rs`.
pub fn run() -> Result<(), ClassprepError> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Run(args)) => run_pipeline_command(args),
        Some(Commands::Stats(args)) => run_stats(args),
        None => {
            println!("classprep {}", env!("CARGO_PKG_VERSION"));
            println!();
            println!("Interactive image labeling and dataset folder preparation.");
            println!();
            println!("Run 'classprep --help' for usage information.");
            Ok(())
        }
    }
}

/// Execute the run subcommand.
fn run_pipeline_command(args: RunArgs) -> Result<(), ClassprepError> {
    let config = PipelineConfig {
        source_dir: args.source,
        output_dir: args.output,
    };

    let mut input = ConsoleInput;
    let mut display = ConsoleDisplay;
    pipeline::run_pipeline(&config, &mut input, &mut display)?;
    Ok(())
}

/// Execute the stats subcommand.
fn run_stats(args: StatsArgs) -> Result<(), ClassprepError> {
    let report = stats::scan_output_dir(&args.output_dir)?;

    match args.format.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&report)?),
        _ => print!("{report}"),
    }

    Ok(())
}
