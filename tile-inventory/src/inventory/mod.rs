//! Tile pyramid inventory.
//!
//! Scans a `zoom/x/y.png` tile tree and records which tiles exist.
//!
//! # Layout
//!
//! ```text
//! public/tiles/
//! ├── 0/
//! │   └── 0/
//! │       └── 0.png
//! ├── 1/
//! │   ├── 0/
//! │   │   ├── 0.png
//! │   │   └── 1.png
//! │   └── 1/
//! │       └── 0.png
//! └── tile-inventory.json   ← written here
//! ```
//!
//! produces
//!
//! ```json
//! {"0": {"0": [0]}, "1": {"0": [0, 1], "1": [0]}}
//! ```
//!
//! # Example
//!
//! ```no_run
//! use tile_inventory::inventory::{generate_inventory, ScanOptions};
//!
//! let generated = generate_inventory("public/tiles", &ScanOptions::default())?;
//! println!("{}", generated.summary);
//! # Ok::<(), tile_inventory::InventoryError>(())
//! ```

mod model;
mod naming;
mod scanner;
mod summary;
mod writer;

use std::path::{Path, PathBuf};

use tracing::info;

pub use model::{TileColumn, TileInventory, ZoomLevel};
pub use naming::{compare_numeric, is_numeric_name, parse_tile_name, DEFAULT_TILE_EXTENSION};
pub use scanner::{
    apply_error_policy, ErrorPolicy, InventoryScanner, ScanOptions, ScanReport, SkippedEntry,
    DEFAULT_OUTPUT_FILE_NAME,
};
pub use summary::{InventorySummary, ZoomSummary};
pub use writer::{read_inventory, render_inventory, write_inventory};

use crate::error::InventoryResult;

/// Outcome of [`generate_inventory`].
#[derive(Debug, Clone)]
pub struct GeneratedInventory {
    /// The scan result.
    pub report: ScanReport,
    /// Path of the written manifest.
    pub path: PathBuf,
    /// Tile counts.
    pub summary: InventorySummary,
}

/// Scan `root` and write its manifest inside it.
///
/// Nothing is written if the root is missing or the scan aborts.
pub fn generate_inventory(
    root: impl AsRef<Path>,
    options: &ScanOptions,
) -> InventoryResult<GeneratedInventory> {
    let root = root.as_ref();
    let scanner = InventoryScanner::new(root, options.clone());
    let report = scanner.scan()?;

    let path = write_inventory(&report.inventory, root, &options.output_file_name)?;
    let summary = InventorySummary::from_inventory(&report.inventory);
    info!(
        path = %path.display(),
        zoom_levels = report.inventory.zoom_count(),
        tiles = summary.total_tiles,
        skipped = report.skipped.len(),
        "Tile inventory generated"
    );

    Ok(GeneratedInventory {
        report,
        path,
        summary,
    })
}
