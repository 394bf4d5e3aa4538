//! Project path functions - single source of truth for all file paths.
//!
//! Centralizes path definitions so handlers and db code never hardcode
//! directory strings.
//!
//! ## Environment Variables
//!
//! - `DATA_DIR`: Override the base data directory (default: "data")
//!
//! This allows running isolated server instances for E2E testing:
//! ```bash
//! DATA_DIR=data/test PORT=3001 cargo run
//! ```

use std::env;
use std::sync::OnceLock;

/// Lazily initialized data directory from DATA_DIR env var
static DATA_DIR_VALUE: OnceLock<String> = OnceLock::new();

/// Get the base data directory (from DATA_DIR env var or default "data")
pub fn data_dir() -> &'static str {
    DATA_DIR_VALUE.get_or_init(|| env::var("DATA_DIR").unwrap_or_else(|_| "data".to_string()))
}

/// SQLite database path for devotional records
pub fn db_path() -> String {
    format!("{}/heart_hub.db", data_dir())
}

/// Static assets directory served under /static
pub const STATIC_DIR: &str = "static";
