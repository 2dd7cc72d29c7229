//! Optional per-root configuration.
//!
//! ```ini
//! [scan]
//! extension = png
//! error_policy = skip
//!
//! [output]
//! file_name = tile-inventory.json
//! ```

mod file;
mod parser;
mod validate;

pub use file::{
    config_file_path, ConfigFile, ConfigFileError, OutputSettings, ScanSettings, CONFIG_FILE_NAME,
};
pub use validate::{validate_extension, validate_file_name};
