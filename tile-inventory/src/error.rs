//! Error types for inventory generation.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type for inventory operations.
pub type InventoryResult<T> = Result<T, InventoryError>;

/// Errors that can occur while scanning a tile root or writing its manifest.
#[derive(Debug, Error)]
pub enum InventoryError {
    /// The tile root does not exist.
    #[error("Tiles directory not found: {}", .0.display())]
    RootNotFound(PathBuf),

    /// The tile root could not be inspected (permission denied, symlink loop).
    #[error("Tiles directory not accessible {}: {source}", path.display())]
    RootInaccessible {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The tile root exists but is not a directory.
    #[error("Tiles path is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    /// An entry below the root could not be read (only surfaced in abort mode).
    #[error("Failed to read {}: {source}", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The inventory could not be serialized to JSON.
    #[error("Failed to serialize inventory: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The manifest could not be read.
    #[error("Failed to read manifest {}: {source}", path.display())]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The manifest exists but is not a valid inventory.
    #[error("Invalid manifest {}: {source}", path.display())]
    InvalidManifest {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The manifest could not be written.
    #[error("Failed to write {}: {source}", path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_not_found_display() {
        let err = InventoryError::RootNotFound(PathBuf::from("public/tiles"));
        assert_eq!(err.to_string(), "Tiles directory not found: public/tiles");
    }

    #[test]
    fn test_root_inaccessible_is_distinct_from_missing() {
        let err = InventoryError::RootInaccessible {
            path: PathBuf::from("public/tiles"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        let message = err.to_string();
        assert!(message.contains("not accessible"));
        assert!(!message.contains("not found"));
    }

    #[test]
    fn test_read_dir_has_source() {
        use std::error::Error as _;

        let err = InventoryError::ReadDir {
            path: PathBuf::from("tiles/3"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().contains("tiles/3"));
        assert!(err.source().is_some());
    }
}
