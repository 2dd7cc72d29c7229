//! Manifest serialization.
//!
//! The manifest is pretty-printed JSON with 2-space indentation. Writes go
//! to a hidden temporary file next to the target and are renamed into
//! place, so a failed write never replaces a good manifest with a
//! truncated one.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::model::TileInventory;
use crate::error::{InventoryError, InventoryResult};

/// Render the inventory as pretty-printed JSON.
pub fn render_inventory(inventory: &TileInventory) -> InventoryResult<String> {
    Ok(serde_json::to_string_pretty(inventory)?)
}

/// Write the inventory to `<root>/<file_name>`, returning the written path.
pub fn write_inventory(
    inventory: &TileInventory,
    root: &Path,
    file_name: &str,
) -> InventoryResult<PathBuf> {
    let json = render_inventory(inventory)?;
    let path = root.join(file_name);
    let tmp_path = root.join(format!(".{}.tmp", file_name));

    if let Err(source) = fs::write(&tmp_path, json.as_bytes()) {
        let _ = fs::remove_file(&tmp_path);
        return Err(InventoryError::WriteFailed {
            path: tmp_path,
            source,
        });
    }

    if let Err(source) = fs::rename(&tmp_path, &path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(InventoryError::WriteFailed { path, source });
    }

    debug!(path = %path.display(), bytes = json.len(), "Wrote manifest");
    Ok(path)
}

/// Load a manifest previously written by [`write_inventory`].
pub fn read_inventory(path: &Path) -> InventoryResult<TileInventory> {
    let content = fs::read_to_string(path).map_err(|source| InventoryError::ReadFailed {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&content).map_err(|source| InventoryError::InvalidManifest {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::{TileColumn, ZoomLevel};
    use tempfile::TempDir;

    fn sample() -> TileInventory {
        let mut inventory = TileInventory::new();
        let mut level = ZoomLevel::new("0");
        level.insert_column(TileColumn::new("0", vec![0]));
        inventory.insert_zoom(level);
        inventory
    }

    #[test]
    fn test_render_uses_two_space_indent() {
        let json = render_inventory(&sample()).unwrap();
        assert_eq!(json, "{\n  \"0\": {\n    \"0\": [\n      0\n    ]\n  }\n}");
    }

    #[test]
    fn test_render_empty_inventory() {
        assert_eq!(render_inventory(&TileInventory::new()).unwrap(), "{}");
    }

    #[test]
    fn test_write_overwrites_and_leaves_no_temp_file() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("tile-inventory.json");
        fs::write(&target, "stale").unwrap();

        let path = write_inventory(&sample(), temp.path(), "tile-inventory.json").unwrap();

        assert_eq!(path, target);
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            render_inventory(&sample()).unwrap()
        );
        assert!(!temp.path().join(".tile-inventory.json.tmp").exists());
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("gone");

        let err = write_inventory(&sample(), &missing, "tile-inventory.json").unwrap_err();
        assert!(matches!(err, InventoryError::WriteFailed { .. }));
    }

    #[test]
    fn test_read_back_written_manifest() {
        let temp = TempDir::new().unwrap();
        let path = write_inventory(&sample(), temp.path(), "tile-inventory.json").unwrap();

        assert_eq!(read_inventory(&path).unwrap(), sample());
    }

    #[test]
    fn test_read_missing_manifest() {
        let temp = TempDir::new().unwrap();
        let err = read_inventory(&temp.path().join("tile-inventory.json")).unwrap_err();
        assert!(matches!(err, InventoryError::ReadFailed { .. }));
    }

    #[test]
    fn test_read_invalid_manifest() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("tile-inventory.json");
        fs::write(&path, "[1, 2, 3]").unwrap();

        let err = read_inventory(&path).unwrap_err();
        assert!(matches!(err, InventoryError::InvalidManifest { .. }));
    }
}
