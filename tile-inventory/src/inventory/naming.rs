//! Name predicates for tile pyramid entries.
//!
//! Every level of the `zoom/x/y.<ext>` layout is filtered through the
//! functions in this module:
//!
//! - Zoom and X directories must be named `^[0-9]+$`
//! - Tile files must be named `^[0-9]+\.<ext>$`
//!
//! Anything else (`.DS_Store`, `thumbs.db`, `3.5`, `notazoom`) is not an
//! error, it simply isn't part of the inventory.

use regex::Regex;
use std::cmp::Ordering;
use std::sync::OnceLock;

/// Default tile image extension.
pub const DEFAULT_TILE_EXTENSION: &str = "png";

fn numeric_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[0-9]+$").unwrap())
}

/// Returns true if `name` consists only of ASCII digits.
///
/// # Examples
///
/// ```
/// use tile_inventory::inventory::is_numeric_name;
///
/// assert!(is_numeric_name("12"));
/// assert!(is_numeric_name("007"));
/// assert!(!is_numeric_name("3.5"));
/// assert!(!is_numeric_name(""));
/// ```
pub fn is_numeric_name(name: &str) -> bool {
    numeric_pattern().is_match(name)
}

/// Parse a tile filename into its Y index.
///
/// The extension is compared exactly (case-sensitive), the stem must be
/// all digits and fit in a `u64`. An empty extension matches nothing.
///
/// # Examples
///
/// ```
/// use tile_inventory::inventory::parse_tile_name;
///
/// assert_eq!(parse_tile_name("5.png", "png"), Some(5));
/// assert_eq!(parse_tile_name("007.png", "png"), Some(7));
/// assert_eq!(parse_tile_name("bad.png", "png"), None);
/// assert_eq!(parse_tile_name("3.txt", "png"), None);
/// assert_eq!(parse_tile_name("5.", ""), None);
/// ```
pub fn parse_tile_name(name: &str, extension: &str) -> Option<u64> {
    if extension.is_empty() {
        return None;
    }
    let stem = name.strip_suffix(extension)?.strip_suffix('.')?;
    if !is_numeric_name(stem) {
        return None;
    }
    stem.parse().ok()
}

/// Compare two digit strings by numeric value.
///
/// Works on arbitrarily long names without parsing: leading zeros are
/// ignored, then the shorter significant part is smaller, then digits
/// compare lexically. Names with the same value (`"7"`, `"07"`) fall back
/// to plain string order so sorting stays deterministic.
pub fn compare_numeric(a: &str, b: &str) -> Ordering {
    let sig_a = a.trim_start_matches('0');
    let sig_b = b.trim_start_matches('0');

    sig_a
        .len()
        .cmp(&sig_b.len())
        .then_with(|| sig_a.cmp(sig_b))
        .then_with(|| a.cmp(b))
}
