//! In-memory representation of a tile inventory.
//!
//! The inventory is a three-level structure:
//!
//! ```text
//! TileInventory
//! └── ZoomLevel "12"
//!     ├── TileColumn "2048" → [1361, 1362, 1363]
//!     └── TileColumn "2049" → [1361]
//! ```
//!
//! Zoom levels and columns keep the directory name they were scanned from
//! and are held in ascending numeric order. Serialization walks the vectors
//! directly, so the key order in the written JSON is the scan order and does
//! not depend on any map's iteration order.

use std::collections::BTreeMap;
use std::fmt;

use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, SerializeMap, Serializer};

use super::naming::{compare_numeric, is_numeric_name};

/// A single X directory and the Y indices found in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileColumn {
    name: String,
    rows: Vec<u64>,
}

impl TileColumn {
    /// Create a column, sorting and de-duplicating the Y indices.
    pub fn new(name: impl Into<String>, mut rows: Vec<u64>) -> Self {
        rows.sort_unstable();
        rows.dedup();
        Self {
            name: name.into(),
            rows,
        }
    }

    /// Directory name of this column (the X coordinate as scanned).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Y indices in ascending order.
    pub fn rows(&self) -> &[u64] {
        &self.rows
    }

    /// Number of tiles in this column.
    pub fn tile_count(&self) -> usize {
        self.rows.len()
    }
}

/// A zoom level directory and its columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoomLevel {
    name: String,
    columns: Vec<TileColumn>,
}

impl ZoomLevel {
    /// Create an empty zoom level.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            columns: Vec::new(),
        }
    }

    /// Directory name of this zoom level.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Columns in ascending numeric order.
    pub fn columns(&self) -> &[TileColumn] {
        &self.columns
    }

    /// Look up a column by its directory name.
    pub fn column(&self, name: &str) -> Option<&TileColumn> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Insert a column at its numeric position, replacing any column with
    /// the same name.
    pub fn insert_column(&mut self, column: TileColumn) {
        match self
            .columns
            .binary_search_by(|c| compare_numeric(&c.name, &column.name))
        {
            Ok(idx) => self.columns[idx] = column,
            Err(idx) => self.columns.insert(idx, column),
        }
    }

    /// Total tiles across all columns.
    pub fn tile_count(&self) -> usize {
        self.columns.iter().map(TileColumn::tile_count).sum()
    }
}

/// Inventory of every tile found under a tile root.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TileInventory {
    zooms: Vec<ZoomLevel>,
}

impl TileInventory {
    /// Create an empty inventory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Zoom levels in ascending numeric order.
    pub fn zooms(&self) -> &[ZoomLevel] {
        &self.zooms
    }

    /// Look up a zoom level by its directory name.
    pub fn zoom(&self, name: &str) -> Option<&ZoomLevel> {
        self.zooms.iter().find(|z| z.name == name)
    }

    /// Y indices for a (zoom, x) pair, if that column exists.
    pub fn rows(&self, zoom: &str, x: &str) -> Option<&[u64]> {
        self.zoom(zoom)?.column(x).map(TileColumn::rows)
    }

    /// Insert a zoom level at its numeric position, replacing any level
    /// with the same name.
    pub fn insert_zoom(&mut self, level: ZoomLevel) {
        match self
            .zooms
            .binary_search_by(|z| compare_numeric(&z.name, &level.name))
        {
            Ok(idx) => self.zooms[idx] = level,
            Err(idx) => self.zooms.insert(idx, level),
        }
    }

    /// Number of zoom levels.
    pub fn zoom_count(&self) -> usize {
        self.zooms.len()
    }

    /// Total tiles across all zoom levels.
    pub fn tile_count(&self) -> usize {
        self.zooms.iter().map(ZoomLevel::tile_count).sum()
    }

    /// True if no zoom levels were found.
    pub fn is_empty(&self) -> bool {
        self.zooms.is_empty()
    }
}

impl Serialize for TileColumn {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.rows.serialize(serializer)
    }
}

impl Serialize for ZoomLevel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.columns.len()))?;
        for column in &self.columns {
            map.serialize_entry(&column.name, column)?;
        }
        map.end()
    }
}

impl Serialize for TileInventory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.zooms.len()))?;
        for zoom in &self.zooms {
            map.serialize_entry(&zoom.name, zoom)?;
        }
        map.end()
    }
}

type RawInventory = BTreeMap<String, BTreeMap<String, Vec<u64>>>;

impl<'de> Deserialize<'de> for TileInventory {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawInventory::deserialize(deserializer)?;
        let mut inventory = TileInventory::new();

        for (zoom_name, columns) in raw {
            if !is_numeric_name(&zoom_name) {
                return Err(de::Error::custom(InvalidKey::Zoom(zoom_name)));
            }
            let mut level = ZoomLevel::new(zoom_name);
            for (x_name, rows) in columns {
                if !is_numeric_name(&x_name) {
                    return Err(de::Error::custom(InvalidKey::Column(x_name)));
                }
                level.insert_column(TileColumn::new(x_name, rows));
            }
            inventory.insert_zoom(level);
        }

        Ok(inventory)
    }
}

enum InvalidKey {
    Zoom(String),
    Column(String),
}

impl fmt::Display for InvalidKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidKey::Zoom(k) => write!(f, "zoom key '{}' is not a decimal integer", k),
            InvalidKey::Column(k) => write!(f, "x key '{}' is not a decimal integer", k),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TileInventory {
        let mut inventory = TileInventory::new();

        let mut z1 = ZoomLevel::new("1");
        z1.insert_column(TileColumn::new("1", vec![0]));
        z1.insert_column(TileColumn::new("0", vec![1, 0]));
        inventory.insert_zoom(z1);

        let mut z0 = ZoomLevel::new("0");
        z0.insert_column(TileColumn::new("0", vec![0]));
        inventory.insert_zoom(z0);

        inventory
    }

    #[test]
    fn test_column_rows_sorted_and_deduped() {
        let column = TileColumn::new("3", vec![10, 1, 5, 5]);
        assert_eq!(column.rows(), &[1, 5, 10]);
        assert_eq!(column.tile_count(), 3);
    }

    #[test]
    fn test_insert_zoom_keeps_numeric_order() {
        let mut inventory = TileInventory::new();
        for name in ["10", "2", "9"] {
            inventory.insert_zoom(ZoomLevel::new(name));
        }
        let names: Vec<_> = inventory.zooms().iter().map(ZoomLevel::name).collect();
        assert_eq!(names, vec!["2", "9", "10"]);
    }

    #[test]
    fn test_insert_column_replaces_same_name() {
        let mut level = ZoomLevel::new("5");
        level.insert_column(TileColumn::new("4", vec![1]));
        level.insert_column(TileColumn::new("4", vec![2, 3]));
        assert_eq!(level.columns().len(), 1);
        assert_eq!(level.column("4").unwrap().rows(), &[2, 3]);
    }

    #[test]
    fn test_counts() {
        let inventory = sample();
        assert_eq!(inventory.zoom_count(), 2);
        assert_eq!(inventory.tile_count(), 4);
        assert_eq!(inventory.zoom("1").unwrap().tile_count(), 3);
        assert!(!inventory.is_empty());
        assert!(TileInventory::new().is_empty());
    }

    #[test]
    fn test_rows_lookup() {
        let inventory = sample();
        assert_eq!(inventory.rows("1", "0"), Some(&[0, 1][..]));
        assert_eq!(inventory.rows("1", "7"), None);
        assert_eq!(inventory.rows("4", "0"), None);
    }

    #[test]
    fn test_serialize_uses_numeric_key_order() {
        let mut inventory = TileInventory::new();
        let mut level = ZoomLevel::new("3");
        for x in ["10", "2", "9"] {
            level.insert_column(TileColumn::new(x, vec![]));
        }
        inventory.insert_zoom(level);

        let json = serde_json::to_string(&inventory).unwrap();
        assert_eq!(json, r#"{"3":{"2":[],"9":[],"10":[]}}"#);
    }

    #[test]
    fn test_serialize_empty_branches() {
        let mut inventory = TileInventory::new();
        inventory.insert_zoom(ZoomLevel::new("4"));
        let mut level = ZoomLevel::new("5");
        level.insert_column(TileColumn::new("0", vec![]));
        inventory.insert_zoom(level);

        let json = serde_json::to_string(&inventory).unwrap();
        assert_eq!(json, r#"{"4":{},"5":{"0":[]}}"#);
    }

    #[test]
    fn test_deserialize_restores_numeric_order() {
        let json = r#"{"10":{"3":[2,1]},"9":{"11":[0],"2":[]}}"#;
        let inventory: TileInventory = serde_json::from_str(json).unwrap();

        let zooms: Vec<_> = inventory.zooms().iter().map(ZoomLevel::name).collect();
        assert_eq!(zooms, vec!["9", "10"]);
        let columns: Vec<_> = inventory
            .zoom("9")
            .unwrap()
            .columns()
            .iter()
            .map(TileColumn::name)
            .collect();
        assert_eq!(columns, vec!["2", "11"]);
        assert_eq!(inventory.rows("10", "3"), Some(&[1, 2][..]));
    }

    #[test]
    fn test_deserialize_rejects_non_numeric_keys() {
        let err = serde_json::from_str::<TileInventory>(r#"{"abc":{}}"#).unwrap_err();
        assert!(err.to_string().contains("zoom key 'abc'"));

        let err = serde_json::from_str::<TileInventory>(r#"{"1":{"x":[]}}"#).unwrap_err();
        assert!(err.to_string().contains("x key 'x'"));
    }
}
