//! Daily dhikr tallies and the dhikr study list.

use chrono::{NaiveDate, Utc};
use rusqlite::{params, Connection, OptionalExtension, Result};

use crate::config;
use crate::domain::{DhikrEntry, DhikrRecord};

/// Load the tally for a date, defaulting to an empty record at the minimum
/// goal. Goals stored below the minimum are clamped up on read.
pub fn get_dhikr_record(conn: &Connection, date: NaiveDate) -> Result<DhikrRecord> {
  let record = conn
    .query_row(
      "SELECT count, goal FROM dhikr_records WHERE date = ?1",
      params![date.to_string()],
      |row| {
        Ok(DhikrRecord {
          date,
          count: row.get(0)?,
          goal: row.get(1)?,
        })
      },
    )
    .optional()?;

  let mut record = record.unwrap_or_else(|| DhikrRecord::new(date, config::DHIKR_MIN_GOAL));
  if record.goal < config::DHIKR_MIN_GOAL {
    record.goal = config::DHIKR_MIN_GOAL;
  }
  Ok(record)
}

/// Write the tally for a date. Counts floor at zero, goals at the minimum.
pub fn upsert_dhikr_record(
  conn: &Connection,
  date: NaiveDate,
  count: i64,
  goal: i64,
) -> Result<DhikrRecord> {
  let count = count.max(0);
  let goal = goal.max(config::DHIKR_MIN_GOAL);

  conn.execute(
    "INSERT INTO dhikr_records (date, count, goal) VALUES (?1, ?2, ?3)
     ON CONFLICT(date) DO UPDATE SET count = ?2, goal = ?3",
    params![date.to_string(), count, goal],
  )?;

  Ok(DhikrRecord { date, count, goal })
}

/// Adjust today's count by a signed delta
pub fn add_to_dhikr_count(conn: &Connection, date: NaiveDate, delta: i64) -> Result<DhikrRecord> {
  let record = get_dhikr_record(conn, date)?;
  upsert_dhikr_record(conn, date, record.count + delta, record.goal)
}

// ==================== Study list ====================

/// All saved dhikr entries, oldest first
pub fn list_dhikr_entries(conn: &Connection) -> Result<Vec<DhikrEntry>> {
  let mut stmt = conn.prepare(
    "SELECT id, name, arabic_text, translation, transliteration
     FROM dhikr_entries ORDER BY id",
  )?;
  let entries = stmt
    .query_map([], |row| {
      Ok(DhikrEntry {
        id: row.get(0)?,
        name: row.get(1)?,
        arabic_text: row.get(2)?,
        translation: row.get(3)?,
        transliteration: row.get(4)?,
      })
    })?
    .collect::<Result<Vec<_>>>()?;
  Ok(entries)
}

/// Save a dhikr for study, optionally with enrichment fields
pub fn insert_dhikr_entry(
  conn: &Connection,
  name: &str,
  arabic_text: Option<&str>,
  translation: Option<&str>,
  transliteration: Option<&str>,
) -> Result<i64> {
  conn.execute(
    "INSERT INTO dhikr_entries (name, arabic_text, translation, transliteration, created_at)
     VALUES (?1, ?2, ?3, ?4, ?5)",
    params![name, arabic_text, translation, transliteration, Utc::now().to_rfc3339()],
  )?;
  Ok(conn.last_insert_rowid())
}

pub fn delete_dhikr_entry(conn: &Connection, id: i64) -> Result<()> {
  conn.execute("DELETE FROM dhikr_entries WHERE id = ?1", params![id])?;
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::db::test_conn;

  fn date(s: &str) -> NaiveDate {
    s.parse().unwrap()
  }

  #[test]
  fn test_missing_record_defaults_to_min_goal() {
    let conn = test_conn();
    let record = get_dhikr_record(&conn, date("2025-06-01")).unwrap();
    assert_eq!(record.count, 0);
    assert_eq!(record.goal, config::DHIKR_MIN_GOAL);
  }

  #[test]
  fn test_upsert_and_reload() {
    let conn = test_conn();
    let day = date("2025-06-01");

    upsert_dhikr_record(&conn, day, 300, 2000).unwrap();
    let record = get_dhikr_record(&conn, day).unwrap();
    assert_eq!(record.count, 300);
    assert_eq!(record.goal, 2000);

    // Second upsert replaces
    upsert_dhikr_record(&conn, day, 500, 2000).unwrap();
    assert_eq!(get_dhikr_record(&conn, day).unwrap().count, 500);
  }

  #[test]
  fn test_count_floors_at_zero() {
    let conn = test_conn();
    let day = date("2025-06-01");

    let record = add_to_dhikr_count(&conn, day, -250).unwrap();
    assert_eq!(record.count, 0);
  }

  #[test]
  fn test_goal_clamped_to_minimum() {
    let conn = test_conn();
    let day = date("2025-06-01");

    let record = upsert_dhikr_record(&conn, day, 0, 10).unwrap();
    assert_eq!(record.goal, config::DHIKR_MIN_GOAL);

    // A low goal already stored is clamped on read
    conn
      .execute(
        "UPDATE dhikr_records SET goal = 10 WHERE date = ?1",
        params![day.to_string()],
      )
      .unwrap();
    assert_eq!(get_dhikr_record(&conn, day).unwrap().goal, config::DHIKR_MIN_GOAL);
  }

  #[test]
  fn test_increment_accumulates() {
    let conn = test_conn();
    let day = date("2025-06-01");

    add_to_dhikr_count(&conn, day, config::DHIKR_STEP).unwrap();
    add_to_dhikr_count(&conn, day, config::DHIKR_STEP).unwrap();
    let record = add_to_dhikr_count(&conn, day, 50).unwrap();
    assert_eq!(record.count, 250);
  }

  #[test]
  fn test_study_list_roundtrip() {
    let conn = test_conn();

    let id = insert_dhikr_entry(
      &conn,
      "Alhamdulillah",
      Some("ٱلْحَمْدُ لِلَّٰهِ"),
      Some("All praise is due to Allah."),
      Some("Alhamdulillah"),
    )
    .unwrap();
    insert_dhikr_entry(&conn, "Custom dhikr", None, None, None).unwrap();

    let entries = list_dhikr_entries(&conn).unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].name, "Alhamdulillah");
    assert!(entries[0].arabic_text.is_some());
    assert!(entries[1].arabic_text.is_none());

    delete_dhikr_entry(&conn, id).unwrap();
    assert_eq!(list_dhikr_entries(&conn).unwrap().len(), 1);
  }
}
