//! Value checks shared by the INI parser and command-line flags.
//!
//! Each function returns the normalized value, or a short reason that the
//! caller wraps in its own error variant.

/// Reason given for a rejected tile extension.
pub const EXTENSION_REASON: &str = "expected a file extension like 'png'";

/// Reason given for a rejected manifest file name.
pub const FILE_NAME_REASON: &str = "must be a plain file name without directories";

/// Normalize a tile extension: trims whitespace and one leading dot.
///
/// # Examples
///
/// ```
/// use tile_inventory::config::validate_extension;
///
/// assert_eq!(validate_extension(".webp").as_deref(), Ok("webp"));
/// assert!(validate_extension("").is_err());
/// assert!(validate_extension("p*g").is_err());
/// ```
pub fn validate_extension(value: &str) -> Result<String, &'static str> {
    let value = value.trim();
    let value = value.strip_prefix('.').unwrap_or(value);
    if value.is_empty() || !value.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(EXTENSION_REASON);
    }
    Ok(value.to_string())
}

/// Check that a manifest name stays inside the tile root.
///
/// # Examples
///
/// ```
/// use tile_inventory::config::validate_file_name;
///
/// assert_eq!(validate_file_name("index.json").as_deref(), Ok("index.json"));
/// assert!(validate_file_name("../index.json").is_err());
/// assert!(validate_file_name("..").is_err());
/// ```
pub fn validate_file_name(value: &str) -> Result<String, &'static str> {
    let value = value.trim();
    if value.is_empty() || value == "." || value == ".." || value.contains(['/', '\\']) {
        return Err(FILE_NAME_REASON);
    }
    Ok(value.to_string())
}
