//! tile-inventory - manifest generation for map tile pyramids
//!
//! Walks a `zoom/x/y.png` directory tree and writes `tile-inventory.json`,
//! listing the Y indices present for every zoom level and X coordinate so
//! tile servers and clients can check availability without touching the
//! filesystem.

pub mod config;
pub mod error;
pub mod inventory;
pub mod logging;

pub use error::{InventoryError, InventoryResult};
