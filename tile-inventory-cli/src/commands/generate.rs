//! `generate` command: scan a tile root and write its manifest.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::Args;
use tile_inventory::config::{validate_extension, validate_file_name, ConfigFile};
use tile_inventory::inventory::{
    generate_inventory, render_inventory, ErrorPolicy, InventoryScanner, InventorySummary,
    ScanOptions,
};

use super::common::{check_flag, load_config, DEFAULT_TILE_ROOT};
use crate::error::CliError;

/// Arguments for `generate` (also used when no subcommand is given).
#[derive(Debug, Clone, Args)]
pub struct GenerateArgs {
    /// Tile root containing zoom/x/y tiles
    #[arg(default_value = DEFAULT_TILE_ROOT)]
    pub root: PathBuf,

    /// Tile file extension (default: png)
    #[arg(long)]
    pub extension: Option<String>,

    /// Manifest filename written inside the tile root (default: tile-inventory.json)
    #[arg(long)]
    pub output_name: Option<String>,

    /// Abort on the first unreadable entry instead of skipping it
    #[arg(long)]
    pub strict: bool,

    /// Print the manifest to stdout instead of writing it
    #[arg(long)]
    pub dry_run: bool,

    /// Config file (default: <ROOT>/tile-inventory.ini if present)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// Merge CLI flags over the config file.
///
/// CLI takes precedence, then config, then defaults. Flag values go through
/// the same checks as their config file keys.
pub fn resolve_options(
    args: &GenerateArgs,
    config: &ConfigFile,
) -> Result<ScanOptions, CliError> {
    let mut options = config.scan_options();

    if let Some(ext) = &args.extension {
        let ext = check_flag("--extension", ext, validate_extension)?;
        options = options.with_tile_extension(ext);
    }
    if let Some(name) = &args.output_name {
        let name = check_flag("--output-name", name, validate_file_name)?;
        options = options.with_output_file_name(name);
    }
    if args.strict {
        options = options.with_error_policy(ErrorPolicy::Abort);
    }

    Ok(options)
}

/// Run the generate command.
pub fn run(args: GenerateArgs) -> Result<(), CliError> {
    let config = load_config(&args.root, args.config.as_deref())?;
    let options = resolve_options(&args, &config)?;

    if args.dry_run {
        return run_dry(&args, options);
    }

    let generated = generate_inventory(&args.root, &options)?;

    println!();
    println!("Tile inventory generated: {}", generated.path.display());
    if !generated.report.skipped.is_empty() {
        println!(
            "Skipped {} unreadable entries:",
            generated.report.skipped.len()
        );
        for entry in &generated.report.skipped {
            println!("  {} ({})", entry.path.display(), entry.reason);
        }
    }
    println!("Summary:");
    println!("{}", generated.summary);

    Ok(())
}

fn run_dry(args: &GenerateArgs, options: ScanOptions) -> Result<(), CliError> {
    let report = InventoryScanner::new(&args.root, options).scan()?;
    let json = render_inventory(&report.inventory)?;

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", json).map_err(CliError::Output)?;

    let summary = InventorySummary::from_inventory(&report.inventory);
    eprintln!("Summary (dry run, nothing written):");
    eprintln!("{}", summary);

    Ok(())
}
