//! Per-zoom tile counts for operator output.

use std::fmt;

use super::model::TileInventory;

/// Tile counts for one zoom level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoomSummary {
    /// Zoom level name.
    pub zoom: String,
    /// Number of X directories.
    pub columns: usize,
    /// Number of tiles.
    pub tiles: usize,
}

/// Tile counts for a whole inventory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InventorySummary {
    /// One row per zoom level, in ascending order.
    pub zooms: Vec<ZoomSummary>,
    /// Sum of all tiles.
    pub total_tiles: usize,
}

impl InventorySummary {
    /// Summarize an inventory.
    pub fn from_inventory(inventory: &TileInventory) -> Self {
        let zooms: Vec<ZoomSummary> = inventory
            .zooms()
            .iter()
            .map(|z| ZoomSummary {
                zoom: z.name().to_string(),
                columns: z.columns().len(),
                tiles: z.tile_count(),
            })
            .collect();
        let total_tiles = zooms.iter().map(|z| z.tiles).sum();

        Self { zooms, total_tiles }
    }
}

impl fmt::Display for InventorySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for zoom in &self.zooms {
            writeln!(f, "  Zoom {}: {} tiles", zoom.zoom, zoom.tiles)?;
        }
        write!(f, "  Total: {} tiles", self.total_tiles)
    }
}
