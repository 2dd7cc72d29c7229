//! `status` command: summarize an existing manifest without rescanning.

use std::path::PathBuf;

use clap::Args;
use tile_inventory::config::validate_file_name;
use tile_inventory::inventory::{read_inventory, InventorySummary};

use super::common::{check_flag, load_config, DEFAULT_TILE_ROOT};
use crate::error::CliError;

/// Arguments for `status`.
#[derive(Debug, Clone, Args)]
pub struct StatusArgs {
    /// Tile root containing the manifest
    #[arg(default_value = DEFAULT_TILE_ROOT)]
    pub root: PathBuf,

    /// Manifest filename inside the tile root (default: tile-inventory.json)
    #[arg(long)]
    pub output_name: Option<String>,

    /// Config file (default: <ROOT>/tile-inventory.ini if present)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// Run the status command.
pub fn run(args: StatusArgs) -> Result<(), CliError> {
    let config = load_config(&args.root, args.config.as_deref())?;
    let file_name = match &args.output_name {
        Some(name) => check_flag("--output-name", name, validate_file_name)?,
        None => config.output.file_name,
    };
    let path = args.root.join(file_name);
    tracing::debug!(path = %path.display(), "Reading manifest");

    let inventory = read_inventory(&path)?;
    let summary = InventorySummary::from_inventory(&inventory);

    println!("Tile inventory: {}", path.display());
    println!("  Zoom levels: {}", inventory.zoom_count());
    println!("{}", summary);

    Ok(())
}
