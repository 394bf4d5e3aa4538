use rusqlite::{Connection, Result};

pub fn run_migrations(conn: &Connection) -> Result<()> {
  // Create tables with COMPLETE schema for new databases
  // Migrations below handle upgrades for existing databases
  conn.execute_batch(
    r#"
    CREATE TABLE IF NOT EXISTS prayer_records (
      id INTEGER PRIMARY KEY AUTOINCREMENT,
      date TEXT NOT NULL,
      prayer TEXT NOT NULL,
      completed_at TEXT NOT NULL,
      UNIQUE(date, prayer)
    );

    CREATE TABLE IF NOT EXISTS dhikr_records (
      date TEXT PRIMARY KEY,
      count INTEGER NOT NULL DEFAULT 0,
      goal INTEGER NOT NULL DEFAULT 1000
    );

    CREATE TABLE IF NOT EXISTS dhikr_entries (
      id INTEGER PRIMARY KEY AUTOINCREMENT,
      name TEXT NOT NULL,
      arabic_text TEXT,
      translation TEXT,
      transliteration TEXT,
      created_at TEXT NOT NULL
    );

    CREATE TABLE IF NOT EXISTS toolbelt_surahs (
      id INTEGER PRIMARY KEY AUTOINCREMENT,
      surah_id INTEGER NOT NULL UNIQUE,
      name TEXT NOT NULL,
      description TEXT NOT NULL,
      mastered INTEGER NOT NULL DEFAULT 0,
      added_at TEXT NOT NULL
    );

    CREATE TABLE IF NOT EXISTS day_streaks (
      id INTEGER PRIMARY KEY CHECK (id = 1),
      days INTEGER NOT NULL DEFAULT 0,
      end_date TEXT
    );

    -- Indexes
    CREATE INDEX IF NOT EXISTS idx_prayer_records_date ON prayer_records(date);
    "#,
  )?;

  // ============================================================
  // MIGRATIONS FOR EXISTING DATABASES
  // These are no-ops for new databases (columns already exist)
  // ============================================================

  // Migration: Add enrichment columns to dhikr_entries
  add_column_if_missing(conn, "dhikr_entries", "arabic_text", "TEXT")?;
  add_column_if_missing(conn, "dhikr_entries", "translation", "TEXT")?;
  add_column_if_missing(conn, "dhikr_entries", "transliteration", "TEXT")?;

  Ok(())
}

/// Check if a column exists in a table
fn column_exists(conn: &Connection, table: &str, column: &str) -> bool {
  conn
    .prepare(&format!("SELECT {} FROM {} LIMIT 1", column, table))
    .is_ok()
}

/// Add a column if it doesn't already exist
fn add_column_if_missing(conn: &Connection, table: &str, column: &str, column_def: &str) -> Result<()> {
  if !column_exists(conn, table, column) {
    conn.execute(
      &format!("ALTER TABLE {} ADD COLUMN {} {}", table, column, column_def),
      [],
    )?;
  }
  Ok(())
}
