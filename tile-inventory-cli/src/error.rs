//! CLI error handling with user-friendly messages.
//!
//! Centralizes error handling for the CLI, providing consistent formatting
//! and appropriate exit codes.

use std::fmt;
use std::process;

use tile_inventory::config::ConfigFileError;
use tile_inventory::InventoryError;

/// CLI-specific errors with user-friendly messages.
#[derive(Debug)]
pub enum CliError {
    /// Failed to initialize logging
    LoggingInit(std::io::Error),
    /// Configuration error
    Config(ConfigFileError),
    /// Scan or manifest write failed
    Inventory(InventoryError),
    /// Failed to write to stdout
    Output(std::io::Error),
}

impl CliError {
    /// Exit the process with an appropriate error message and code.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);

        match self {
            CliError::Inventory(InventoryError::RootNotFound(_)) => {
                eprintln!();
                eprintln!("Pass the tile root explicitly, e.g.:");
                eprintln!("  tile-inventory path/to/tiles");
            }
            CliError::Inventory(InventoryError::ReadDir { .. }) => {
                eprintln!();
                eprintln!("Run without --strict to skip unreadable entries.");
            }
            _ => {}
        }

        process::exit(1)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::LoggingInit(e) => write!(f, "Failed to initialize logging: {}", e),
            CliError::Config(e) => write!(f, "{}", e),
            CliError::Inventory(e) => write!(f, "{}", e),
            CliError::Output(e) => write!(f, "Failed to write output: {}", e),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::LoggingInit(e) => Some(e),
            CliError::Config(e) => Some(e),
            CliError::Inventory(e) => Some(e),
            CliError::Output(e) => Some(e),
        }
    }
}

impl From<ConfigFileError> for CliError {
    fn from(e: ConfigFileError) -> Self {
        CliError::Config(e)
    }
}

impl From<InventoryError> for CliError {
    fn from(e: InventoryError) -> Self {
        CliError::Inventory(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_inventory_error_display_passthrough() {
        let err: CliError = InventoryError::RootNotFound(PathBuf::from("public/tiles")).into();
        assert_eq!(err.to_string(), "Tiles directory not found: public/tiles");
    }

    #[test]
    fn test_config_error_conversion() {
        let err: CliError = ConfigFileError::NotFound(PathBuf::from("x.ini")).into();
        assert!(matches!(err, CliError::Config(_)));
        assert!(err.to_string().contains("x.ini"));
    }
}
