//! Application configuration constants.
//!
//! This module centralizes all configurable values so tunables are not
//! hardcoded throughout the codebase.

use serde::Deserialize;
use std::path::PathBuf;

// ==================== Database Configuration ====================

/// Configuration file structure for config.toml
#[derive(Debug, Deserialize)]
struct AppConfig {
    database: Option<DatabaseConfig>,
}

#[derive(Debug, Deserialize)]
struct DatabaseConfig {
    path: Option<String>,
}

/// Load database path with priority: config.toml > .env > default
pub fn load_database_path() -> PathBuf {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    // Priority 1: config.toml
    if let Ok(contents) = std::fs::read_to_string("config.toml") {
        if let Ok(config) = toml::from_str::<AppConfig>(&contents) {
            if let Some(db) = config.database {
                if let Some(path) = db.path {
                    tracing::info!("Using database from config.toml: {}", path);
                    return PathBuf::from(path);
                }
            }
        }
    }

    // Priority 2: .env DATABASE_PATH
    if let Ok(path) = std::env::var("DATABASE_PATH") {
        tracing::info!("Using database from DATABASE_PATH env: {}", path);
        return PathBuf::from(path);
    }

    // Default
    let default = PathBuf::from(crate::paths::db_path());
    tracing::info!("Using default database path: {}", default.display());
    default
}

// ==================== Server Configuration ====================

/// Server address to bind to
pub const SERVER_ADDR: &str = "0.0.0.0";

/// Server port
pub const SERVER_PORT: u16 = 3000;

/// Get the full server bind address
pub fn server_bind_addr() -> String {
    format!("{}:{}", SERVER_ADDR, SERVER_PORT)
}

// ==================== Prayer Configuration ====================

/// The five obligatory daily prayers, in order. Completing all of these for
/// the current day is what advances the day streak.
pub const MAIN_PRAYERS: [&str; 5] = ["Fajr", "Dhuhr", "Asr", "Maghrib", "Isha"];

/// Optional extra prayer slot shown alongside the obligatory five
pub const EXTRA_PRAYER: &str = "Extra";

/// All prayer slots displayed on the tracker
pub fn all_prayers() -> Vec<&'static str> {
    let mut prayers = MAIN_PRAYERS.to_vec();
    prayers.push(EXTRA_PRAYER);
    prayers
}

// ==================== Dhikr Configuration ====================

/// Minimum daily remembrance goal; stored goals below this are clamped up
pub const DHIKR_MIN_GOAL: i64 = 1000;

/// Step size for the +/- tally buttons
pub const DHIKR_STEP: i64 = 100;

// ==================== Names Configuration ====================

/// Names of Allah shown per page in the reference list
pub const NAMES_PER_PAGE: usize = 11;

/// Maximum number of recommendations returned by the guidance provider
pub const GUIDANCE_MAX_NAMES: usize = 3;

// ==================== Quiz Configuration ====================

/// Number of distractor choices in multiple choice mode
pub const DISTRACTOR_COUNT: usize = 3;

/// Question count for fixed-length typing drills
pub const FIXED_DRILL_LENGTH: usize = 99;

/// Quiz session expiration time in hours
pub const QUIZ_SESSION_EXPIRY_HOURS: i64 = 1;

/// Probability threshold for session cleanup (0-255, lower = more frequent)
/// Value of 25 means ~10% chance (25/256) on each session access
pub const QUIZ_SESSION_CLEANUP_THRESHOLD: u8 = 25;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_bind_addr() {
        assert_eq!(server_bind_addr(), format!("0.0.0.0:{}", SERVER_PORT));
    }

    #[test]
    fn test_all_prayers_ends_with_extra_slot() {
        let prayers = all_prayers();
        assert_eq!(prayers.len(), 6);
        assert_eq!(prayers[5], EXTRA_PRAYER);
        assert_eq!(&prayers[..5], &MAIN_PRAYERS);
    }
}
