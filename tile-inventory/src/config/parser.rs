//! INI parsing logic for converting `Ini` → `ConfigFile`.
//!
//! The single place where INI key names are mapped to struct fields.

use ini::Ini;

use super::file::{ConfigFile, ConfigFileError};
use super::validate::{validate_extension, validate_file_name};
use crate::inventory::ErrorPolicy;

/// Parse an `Ini` object into a `ConfigFile`.
///
/// Starts from `ConfigFile::default()` and overlays any values found in the INI.
pub(super) fn parse_ini(ini: &Ini) -> Result<ConfigFile, ConfigFileError> {
    let mut config = ConfigFile::default();

    // [scan] section
    if let Some(section) = ini.section(Some("scan")) {
        if let Some(v) = section.get("extension") {
            config.scan.extension =
                validate_extension(v).map_err(|reason| invalid("scan", "extension", v, reason))?;
        }
        if let Some(v) = section.get("error_policy") {
            config.scan.error_policy = v
                .parse::<ErrorPolicy>()
                .map_err(|_| invalid("scan", "error_policy", v, "must be one of: skip, abort"))?;
        }
    }

    // [output] section
    if let Some(section) = ini.section(Some("output")) {
        if let Some(v) = section.get("file_name") {
            config.output.file_name =
                validate_file_name(v).map_err(|reason| invalid("output", "file_name", v, reason))?;
        }
    }

    Ok(config)
}

fn invalid(section: &str, key: &str, value: &str, reason: &str) -> ConfigFileError {
    ConfigFileError::InvalidValue {
        section: section.to_string(),
        key: key.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(content: &str) -> Result<ConfigFile, ConfigFileError> {
        parse_ini(&Ini::load_from_str(content).unwrap())
    }

    #[test]
    fn test_empty_ini_is_default() {
        assert_eq!(parse("").unwrap(), ConfigFile::default());
    }

    #[test]
    fn test_extension_strips_dot() {
        let config = parse("[scan]\nextension = .jpg\n").unwrap();
        assert_eq!(config.scan.extension, "jpg");
    }

    #[test]
    fn test_invalid_extension() {
        let err = parse("[scan]\nextension = p*g\n").unwrap_err();
        assert!(err.to_string().contains("scan.extension"));
    }

    #[test]
    fn test_invalid_error_policy() {
        let err = parse("[scan]\nerror_policy = maybe\n").unwrap_err();
        assert!(matches!(
            err,
            ConfigFileError::InvalidValue { ref key, .. } if key == "error_policy"
        ));
    }

    #[test]
    fn test_file_name_rejects_paths() {
        assert!(parse("[output]\nfile_name = ../out.json\n").is_err());
        assert!(parse("[output]\nfile_name = \n").is_err());
    }

    #[test]
    fn test_file_name_rejects_dot_entries() {
        let err = parse("[output]\nfile_name = ..\n").unwrap_err();
        assert!(err.to_string().contains("output.file_name"));
        assert!(parse("[output]\nfile_name = .\n").is_err());
    }

    #[test]
    fn test_unknown_sections_ignored() {
        let config = parse("[server]\nport = 8080\n").unwrap();
        assert_eq!(config, ConfigFile::default());
    }
}
