//! Prayer check-off records, keyed by calendar date and prayer name.

use chrono::{NaiveDate, Utc};
use rusqlite::{params, Connection, OptionalExtension, Result};
use std::collections::{HashMap, HashSet};

use crate::config;

/// Prayers completed on the given date
pub fn get_prayers_for_date(conn: &Connection, date: NaiveDate) -> Result<HashSet<String>> {
  let mut stmt = conn.prepare("SELECT prayer FROM prayer_records WHERE date = ?1")?;
  let prayers = stmt
    .query_map(params![date.to_string()], |row| row.get::<_, String>(0))?
    .collect::<Result<HashSet<_>>>()?;
  Ok(prayers)
}

/// Toggle a prayer for a date; returns true when the prayer is now completed
pub fn toggle_prayer(conn: &Connection, date: NaiveDate, prayer: &str) -> Result<bool> {
  let existing: Option<i64> = conn
    .query_row(
      "SELECT id FROM prayer_records WHERE date = ?1 AND prayer = ?2",
      params![date.to_string(), prayer],
      |row| row.get(0),
    )
    .optional()?;

  match existing {
    Some(id) => {
      conn.execute("DELETE FROM prayer_records WHERE id = ?1", params![id])?;
      Ok(false)
    }
    None => {
      conn.execute(
        "INSERT INTO prayer_records (date, prayer, completed_at) VALUES (?1, ?2, ?3)",
        params![date.to_string(), prayer, Utc::now().to_rfc3339()],
      )?;
      Ok(true)
    }
  }
}

/// Whether all five main prayers are checked off for the date
pub fn all_main_prayers_complete(conn: &Connection, date: NaiveDate) -> Result<bool> {
  let prayers = get_prayers_for_date(conn, date)?;
  Ok(config::MAIN_PRAYERS.iter().all(|p| prayers.contains(*p)))
}

/// Completed-prayer counts per date over the most recent `days` dates with
/// any record, newest first
pub fn get_history(conn: &Connection, days: usize) -> Result<Vec<(NaiveDate, usize)>> {
  let mut stmt = conn.prepare(
    "SELECT date, COUNT(*) FROM prayer_records GROUP BY date ORDER BY date DESC LIMIT ?1",
  )?;
  let rows = stmt
    .query_map(params![days as i64], |row| {
      let date_str: String = row.get(0)?;
      let count: i64 = row.get(1)?;
      Ok((date_str, count))
    })?
    .collect::<Result<Vec<_>>>()?;

  let mut history = Vec::with_capacity(rows.len());
  for (date_str, count) in rows {
    if let Ok(date) = date_str.parse::<NaiveDate>() {
      history.push((date, count as usize));
    }
  }
  Ok(history)
}

/// All dates mapped to their completed-prayer count (for the calendar view)
pub fn get_history_map(conn: &Connection) -> Result<HashMap<NaiveDate, usize>> {
  let mut stmt = conn.prepare("SELECT date, COUNT(*) FROM prayer_records GROUP BY date")?;
  let rows = stmt
    .query_map([], |row| {
      let date_str: String = row.get(0)?;
      let count: i64 = row.get(1)?;
      Ok((date_str, count))
    })?
    .collect::<Result<Vec<_>>>()?;

  let mut map = HashMap::with_capacity(rows.len());
  for (date_str, count) in rows {
    if let Ok(date) = date_str.parse::<NaiveDate>() {
      map.insert(date, count as usize);
    }
  }
  Ok(map)
}
