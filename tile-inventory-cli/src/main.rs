//! tile-inventory CLI - Command-line interface
//!
//! Generates `tile-inventory.json` for a `zoom/x/y.png` tile tree.
//!
//! ```text
//! tile-inventory                       # scans ./public/tiles
//! tile-inventory path/to/tiles --strict
//! tile-inventory status path/to/tiles
//! ```

mod commands;
mod error;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tile_inventory::logging::init_logging;

use commands::generate::GenerateArgs;
use commands::status::StatusArgs;
use error::CliError;

#[derive(Parser)]
#[command(name = "tile-inventory")]
#[command(version, about = "List the map tiles present in a zoom/x/y.png tree", long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    generate: GenerateArgs,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Also write logs to this file
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan the tile root and write the manifest (default)
    Generate(GenerateArgs),

    /// Summarize an existing manifest
    Status(StatusArgs),
}

fn main() {
    let cli = Cli::parse();

    let command = cli
        .command
        .unwrap_or_else(|| Commands::Generate(cli.generate));

    let console_to_stderr = matches!(&command, Commands::Generate(args) if args.dry_run);
    let _guard = match init_logging(cli.verbose, cli.log_file.as_deref(), console_to_stderr) {
        Ok(guard) => guard,
        Err(e) => CliError::LoggingInit(e).exit(),
    };

    let result = match command {
        Commands::Generate(args) => commands::generate::run(args),
        Commands::Status(args) => commands::status::run(args),
    };

    if let Err(e) = result {
        e.exit();
    }
}
