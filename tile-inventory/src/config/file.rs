//! Configuration file handling for `tile-inventory.ini`.
//!
//! Loads optional per-root settings with defaults for anything missing.
//! Parsing lives in [`super::parser`].

use ini::Ini;
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::parser::parse_ini;
use crate::inventory::{ErrorPolicy, ScanOptions, DEFAULT_OUTPUT_FILE_NAME, DEFAULT_TILE_EXTENSION};

/// Default configuration filename, looked up inside the tile root.
pub const CONFIG_FILE_NAME: &str = "tile-inventory.ini";

/// Configuration file errors.
#[derive(Debug, Error)]
pub enum ConfigFileError {
    /// Failed to read config file
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] ini::Error),

    /// Explicitly requested config file does not exist
    #[error("Config file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Invalid configuration value
    #[error("Invalid configuration: {section}.{key} = '{value}' - {reason}")]
    InvalidValue {
        section: String,
        key: String,
        value: String,
        reason: String,
    },

    /// Invalid command-line value for a setting the config file also covers
    #[error("Invalid value for {flag}: '{value}' - {reason}")]
    InvalidArgument {
        flag: String,
        value: String,
        reason: String,
    },
}

/// `[scan]` section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanSettings {
    /// Tile file extension without the dot.
    pub extension: String,
    /// Handling of unreadable entries.
    pub error_policy: ErrorPolicy,
}

impl Default for ScanSettings {
    fn default() -> Self {
        Self {
            extension: DEFAULT_TILE_EXTENSION.to_string(),
            error_policy: ErrorPolicy::SkipAndWarn,
        }
    }
}

/// `[output]` section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputSettings {
    /// Manifest filename inside the tile root.
    pub file_name: String,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            file_name: DEFAULT_OUTPUT_FILE_NAME.to_string(),
        }
    }
}

/// Parsed configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigFile {
    pub scan: ScanSettings,
    pub output: OutputSettings,
}

impl ConfigFile {
    /// Load the configuration stored in a tile root.
    ///
    /// A missing `tile-inventory.ini` yields defaults.
    pub fn load_for_root(root: &Path) -> Result<Self, ConfigFileError> {
        Self::load_from(&config_file_path(root))
    }

    /// Load configuration from a specific path.
    ///
    /// If the file doesn't exist, returns defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigFileError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let ini = Ini::load_from_file(path)?;
        parse_ini(&ini)
    }

    /// Load configuration from a path the user asked for explicitly.
    ///
    /// Unlike [`ConfigFile::load_from`], a missing file is an error.
    pub fn load_required(path: &Path) -> Result<Self, ConfigFileError> {
        if !path.exists() {
            return Err(ConfigFileError::NotFound(path.to_path_buf()));
        }
        Self::load_from(path)
    }

    /// Build scan options from this configuration.
    pub fn scan_options(&self) -> ScanOptions {
        ScanOptions::default()
            .with_tile_extension(&self.scan.extension)
            .with_error_policy(self.scan.error_policy)
            .with_output_file_name(&self.output.file_name)
    }
}

/// Path of the configuration file for a tile root.
pub fn config_file_path(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = ConfigFile::default();
        assert_eq!(config.scan.extension, "png");
        assert_eq!(config.scan.error_policy, ErrorPolicy::SkipAndWarn);
        assert_eq!(config.output.file_name, "tile-inventory.json");
        assert_eq!(config.scan_options(), ScanOptions::default());
    }

    #[test]
    fn test_load_nonexistent_returns_defaults() {
        let temp = TempDir::new().unwrap();
        let config = ConfigFile::load_for_root(temp.path()).unwrap();
        assert_eq!(config, ConfigFile::default());
    }

    #[test]
    fn test_load_required_missing_is_error() {
        let temp = TempDir::new().unwrap();
        let err = ConfigFile::load_required(&temp.path().join("nope.ini")).unwrap_err();
        assert!(matches!(err, ConfigFileError::NotFound(_)));
    }

    #[test]
    fn test_load_from_root() {
        let temp = TempDir::new().unwrap();
        std::fs::write(
            config_file_path(temp.path()),
            "[scan]\nextension = webp\nerror_policy = abort\n\n[output]\nfile_name = tiles.json\n",
        )
        .unwrap();

        let options = ConfigFile::load_for_root(temp.path())
            .unwrap()
            .scan_options();
        assert_eq!(options.tile_extension, "webp");
        assert_eq!(options.error_policy, ErrorPolicy::Abort);
        assert_eq!(options.output_file_name, "tiles.json");
    }
}
