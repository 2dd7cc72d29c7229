//! Common types and utilities shared across CLI commands.

use std::path::Path;

use tile_inventory::config::{ConfigFile, ConfigFileError};

use crate::error::CliError;

/// Tile root used when none is given, relative to the working directory.
pub const DEFAULT_TILE_ROOT: &str = "public/tiles";

/// Load configuration from an explicit file, or from the tile root.
///
/// An explicit `--config` path must exist; the per-root file is optional.
pub fn load_config(root: &Path, explicit: Option<&Path>) -> Result<ConfigFile, CliError> {
    let config = match explicit {
        Some(path) => ConfigFile::load_required(path)?,
        None => ConfigFile::load_for_root(root)?,
    };
    Ok(config)
}

/// Run a flag value through one of the library's config validators.
///
/// Rejections use the same reasons as the config file, under the flag name.
pub fn check_flag(
    flag: &str,
    value: &str,
    validate: fn(&str) -> Result<String, &'static str>,
) -> Result<String, CliError> {
    validate(value).map_err(|reason| {
        CliError::Config(ConfigFileError::InvalidArgument {
            flag: flag.to_string(),
            value: value.to_string(),
            reason: reason.to_string(),
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use tile_inventory::config::validate_file_name;

    #[test]
    fn test_missing_root_config_is_default() {
        let temp = TempDir::new().unwrap();
        let config = load_config(&temp.path().join("missing"), None).unwrap();
        assert_eq!(config, ConfigFile::default());
    }

    #[test]
    fn test_explicit_config_must_exist() {
        let temp = TempDir::new().unwrap();
        let result = load_config(temp.path(), Some(&temp.path().join("custom.ini")));
        assert!(matches!(result, Err(CliError::Config(_))));
    }

    #[test]
    fn test_explicit_config_wins_over_root_config() {
        let temp = TempDir::new().unwrap();
        std::fs::write(
            temp.path().join("tile-inventory.ini"),
            "[scan]\nextension = jpg\n",
        )
        .unwrap();
        let custom = temp.path().join("custom.ini");
        std::fs::write(&custom, "[scan]\nextension = webp\n").unwrap();

        let config = load_config(temp.path(), Some(&custom)).unwrap();
        assert_eq!(config.scan.extension, "webp");
    }

    #[test]
    fn test_check_flag_names_the_flag() {
        let err = check_flag("--output-name", "../out.json", validate_file_name).unwrap_err();
        assert!(matches!(
            err,
            CliError::Config(ConfigFileError::InvalidArgument { ref flag, .. })
                if flag == "--output-name"
        ));
        assert!(err.to_string().contains("'../out.json'"));
    }
}
