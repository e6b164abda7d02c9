//! Depmap CLI
//!
//! Generates a PlantUML component diagram of the local module dependencies
//! in a source tree.
//!
//! ```text
//! depmap path/to/project
//! depmap --output-file deps.puml --image-type png path/to/project
//! depmap --dialect cpp --json path/to/project
//! ```

use clap::Parser;
use depmap_extract::Dialect;
use std::path::PathBuf;
use std::process::ExitCode;

mod pipeline;

/// Generate a dependency diagram for a source project
#[derive(Parser, Debug)]
#[command(name = "depmap", version, about)]
pub struct Args {
    /// The path to the project to scan
    pub project: PathBuf,

    /// Write the diagram text to this file instead of standard output
    #[arg(long)]
    pub output_file: Option<PathBuf>,

    /// Run PlantUML and write an image of this type (requires --output-file).
    /// See the PlantUML documentation for accepted format tokens, e.g. png or svg.
    #[arg(long)]
    pub image_type: Option<String>,

    /// Source dialect to scan for
    #[arg(long, default_value = "python")]
    pub dialect: Dialect,

    /// Emit the dependency graph as JSON instead of PlantUML text
    #[arg(long)]
    pub json: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();

    let args = Args::parse();

    // Configuration errors are reported before any scanning begins.
    if args.image_type.is_some() && args.output_file.is_none() {
        eprintln!("depmap: --image-type requires --output-file");
        return ExitCode::from(2);
    }
    if args.image_type.is_some() && args.json {
        eprintln!("depmap: --image-type cannot rasterize a --json export");
        return ExitCode::from(2);
    }

    if let Err(err) = pipeline::run(&args) {
        eprintln!("depmap: {err:#}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
