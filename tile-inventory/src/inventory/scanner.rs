//! Tile pyramid scanner.
//!
//! Walks `root/zoom/x/y.<ext>` one level at a time. Each level is fully
//! listed, filtered and sorted before descending, so the traversal order
//! is zoom → x → y in ascending numeric order.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, info, trace, warn};

use super::model::{TileColumn, TileInventory, ZoomLevel};
use super::naming::{compare_numeric, is_numeric_name, parse_tile_name, DEFAULT_TILE_EXTENSION};
use crate::error::{InventoryError, InventoryResult};

/// Default manifest filename written inside the tile root.
pub const DEFAULT_OUTPUT_FILE_NAME: &str = "tile-inventory.json";

/// What to do when a directory below the root cannot be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    /// Log a warning, record the path and leave that branch out.
    #[default]
    SkipAndWarn,
    /// Fail the whole scan on the first read error.
    Abort,
}

impl std::str::FromStr for ErrorPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "skip" | "warn" | "skip-and-warn" => Ok(ErrorPolicy::SkipAndWarn),
            "abort" | "strict" => Ok(ErrorPolicy::Abort),
            other => Err(format!("unknown error policy '{}'", other)),
        }
    }
}

/// Options controlling a scan and where its manifest is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOptions {
    /// Tile file extension without the dot.
    pub tile_extension: String,

    /// Handling of unreadable entries below the root.
    pub error_policy: ErrorPolicy,

    /// Manifest filename inside the tile root.
    pub output_file_name: String,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            tile_extension: DEFAULT_TILE_EXTENSION.to_string(),
            error_policy: ErrorPolicy::default(),
            output_file_name: DEFAULT_OUTPUT_FILE_NAME.to_string(),
        }
    }
}

impl ScanOptions {
    /// Set the tile extension. A leading dot is ignored.
    pub fn with_tile_extension(mut self, extension: impl AsRef<str>) -> Self {
        self.tile_extension = extension.as_ref().trim_start_matches('.').to_string();
        self
    }

    /// Set the error policy.
    pub fn with_error_policy(mut self, policy: ErrorPolicy) -> Self {
        self.error_policy = policy;
        self
    }

    /// Set the manifest filename.
    pub fn with_output_file_name(mut self, name: impl Into<String>) -> Self {
        self.output_file_name = name.into();
        self
    }
}

/// An entry that was left out of the inventory because it couldn't be read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedEntry {
    /// Path of the unreadable directory or entry.
    pub path: PathBuf,

    /// Error message from the filesystem.
    pub reason: String,
}

/// Result of a completed scan.
#[derive(Debug, Clone, Default)]
pub struct ScanReport {
    /// Tiles found.
    pub inventory: TileInventory,

    /// Branches skipped under [`ErrorPolicy::SkipAndWarn`].
    pub skipped: Vec<SkippedEntry>,
}

/// Scans a tile root into a [`TileInventory`].
#[derive(Debug, Clone)]
pub struct InventoryScanner {
    root: PathBuf,
    options: ScanOptions,
}

impl InventoryScanner {
    /// Create a scanner for the given tile root.
    pub fn new(root: impl Into<PathBuf>, options: ScanOptions) -> Self {
        Self {
            root: root.into(),
            options,
        }
    }

    /// The tile root being scanned.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The scan options.
    pub fn options(&self) -> &ScanOptions {
        &self.options
    }

    /// Verify the tile root exists and is a directory.
    ///
    /// A root that exists but can't be inspected (permission denied on a
    /// parent, symlink loop) is reported as inaccessible, not missing.
    pub fn check_root(&self) -> InventoryResult<()> {
        let metadata = match fs::metadata(&self.root) {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(InventoryError::RootNotFound(self.root.clone()));
            }
            Err(source) => {
                return Err(InventoryError::RootInaccessible {
                    path: self.root.clone(),
                    source,
                });
            }
        };
        if !metadata.is_dir() {
            return Err(InventoryError::NotADirectory(self.root.clone()));
        }
        Ok(())
    }

    /// Scan the whole pyramid.
    ///
    /// The root itself must be readable regardless of the error policy;
    /// the policy only applies to entries below it.
    pub fn scan(&self) -> InventoryResult<ScanReport> {
        self.check_root()?;
        info!(root = %self.root.display(), "Scanning tiles directory");

        let mut report = ScanReport::default();

        let root_entries = list_dir(&self.root).map_err(|source| InventoryError::ReadDir {
            path: self.root.clone(),
            source,
        })?;
        let zoom_names = self.numeric_subdirs(root_entries, &mut report)?;
        info!(zoom_levels = ?zoom_names, "Found zoom levels");

        for zoom_name in zoom_names {
            let zoom_path = self.root.join(&zoom_name);
            let entries = match list_dir(&zoom_path) {
                Ok(entries) => entries,
                Err(e) => {
                    self.skip(&mut report, zoom_path, e)?;
                    continue;
                }
            };
            let x_names = self.numeric_subdirs(entries, &mut report)?;
            debug!(zoom = %zoom_name, x = ?x_names, "X coordinates");

            let mut level = ZoomLevel::new(&zoom_name);
            for x_name in x_names {
                let x_path = zoom_path.join(&x_name);
                let entries = match list_dir(&x_path) {
                    Ok(entries) => entries,
                    Err(e) => {
                        self.skip(&mut report, x_path, e)?;
                        continue;
                    }
                };
                let rows = self.tile_rows(entries, &mut report)?;
                debug!(zoom = %zoom_name, x = %x_name, y = ?rows, "Tiles");
                level.insert_column(TileColumn::new(x_name, rows));
            }

            info!(
                zoom = %zoom_name,
                columns = level.columns().len(),
                tiles = level.tile_count(),
                "Scanned zoom level"
            );
            report.inventory.insert_zoom(level);
        }

        Ok(report)
    }

    fn skip(
        &self,
        report: &mut ScanReport,
        path: PathBuf,
        error: io::Error,
    ) -> InventoryResult<()> {
        apply_error_policy(self.options.error_policy, report, path, error)
    }

    /// Numeric-named subdirectories among `entries`, in ascending numeric order.
    ///
    /// Entries are stat'ed (following symlinks) only once their name
    /// matches; a failed stat goes through the error policy.
    fn numeric_subdirs(
        &self,
        entries: Vec<(String, PathBuf)>,
        report: &mut ScanReport,
    ) -> InventoryResult<Vec<String>> {
        let mut names = Vec::new();

        for (name, path) in entries {
            if !is_numeric_name(&name) {
                trace!(path = %path.display(), "Ignoring entry");
                continue;
            }
            match fs::metadata(&path) {
                Ok(metadata) if metadata.is_dir() => names.push(name),
                Ok(_) => trace!(path = %path.display(), "Ignoring non-directory"),
                Err(e) => self.skip(report, path, e)?,
            }
        }

        names.sort_by(|a, b| compare_numeric(a, b));
        Ok(names)
    }

    /// Y indices of the tile files among `entries`, ascending.
    fn tile_rows(
        &self,
        entries: Vec<(String, PathBuf)>,
        report: &mut ScanReport,
    ) -> InventoryResult<Vec<u64>> {
        let extension = &self.options.tile_extension;
        let mut rows = Vec::new();

        for (name, path) in entries {
            let Some(y) = parse_tile_name(&name, extension) else {
                trace!(path = %path.display(), "Ignoring entry");
                continue;
            };
            match fs::metadata(&path) {
                Ok(metadata) if metadata.is_file() => rows.push(y),
                Ok(_) => trace!(path = %path.display(), "Ignoring non-file"),
                Err(e) => self.skip(report, path, e)?,
            }
        }

        rows.sort_unstable();
        rows.dedup();
        Ok(rows)
    }
}

/// Record an entry that couldn't be read, or fail if the policy says so.
///
/// Under [`ErrorPolicy::SkipAndWarn`] the entry is logged and appended to
/// `report.skipped`; under [`ErrorPolicy::Abort`] it becomes
/// [`InventoryError::ReadDir`].
pub fn apply_error_policy(
    policy: ErrorPolicy,
    report: &mut ScanReport,
    path: PathBuf,
    error: io::Error,
) -> InventoryResult<()> {
    match policy {
        ErrorPolicy::Abort => Err(InventoryError::ReadDir {
            path,
            source: error,
        }),
        ErrorPolicy::SkipAndWarn => {
            warn!(path = %path.display(), error = %error, "Skipping unreadable entry");
            report.skipped.push(SkippedEntry {
                path,
                reason: error.to_string(),
            });
            Ok(())
        }
    }
}

/// List `dir` as (name, path) pairs, dropping names that aren't UTF-8.
fn list_dir(dir: &Path) -> io::Result<Vec<(String, PathBuf)>> {
    let mut entries = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        match entry.file_name().into_string() {
            Ok(name) => entries.push((name, entry.path())),
            Err(_) => trace!(path = %entry.path().display(), "Ignoring non UTF-8 name"),
        }
    }
    Ok(entries)
}
