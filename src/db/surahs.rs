//! The memorization toolbelt: surahs pinned for mastery tracking.

use chrono::Utc;
use rusqlite::{params, Connection, Result};

use crate::domain::Surah;

/// All pinned surahs in catalog order
pub fn list_toolbelt(conn: &Connection) -> Result<Vec<Surah>> {
  let mut stmt = conn.prepare(
    "SELECT id, surah_id, name, description, mastered
     FROM toolbelt_surahs ORDER BY surah_id",
  )?;
  let surahs = stmt
    .query_map([], |row| {
      Ok(Surah {
        id: row.get(0)?,
        surah_id: row.get(1)?,
        name: row.get(2)?,
        description: row.get(3)?,
        mastered: row.get::<_, i64>(4)? != 0,
      })
    })?
    .collect::<Result<Vec<_>>>()?;
  Ok(surahs)
}

/// Pin a surah; duplicate catalog ids are ignored
pub fn add_surah(conn: &Connection, surah_id: i64, name: &str, description: &str) -> Result<()> {
  conn.execute(
    "INSERT OR IGNORE INTO toolbelt_surahs (surah_id, name, description, mastered, added_at)
     VALUES (?1, ?2, ?3, 0, ?4)",
    params![surah_id, name, description, Utc::now().to_rfc3339()],
  )?;
  Ok(())
}

pub fn delete_surah(conn: &Connection, surah_id: i64) -> Result<()> {
  conn.execute(
    "DELETE FROM toolbelt_surahs WHERE surah_id = ?1",
    params![surah_id],
  )?;
  Ok(())
}

/// Flip the mastered flag; returns the new value
pub fn toggle_mastered(conn: &Connection, surah_id: i64) -> Result<bool> {
  conn.execute(
    "UPDATE toolbelt_surahs SET mastered = 1 - mastered WHERE surah_id = ?1",
    params![surah_id],
  )?;
  conn.query_row(
    "SELECT mastered FROM toolbelt_surahs WHERE surah_id = ?1",
    params![surah_id],
    |row| Ok(row.get::<_, i64>(0)? != 0),
  )
}

/// Seed the default memorization set on first run
pub fn seed_toolbelt_defaults(conn: &Connection) -> Result<()> {
  let count: i64 = conn.query_row("SELECT COUNT(*) FROM toolbelt_surahs", [], |row| row.get(0))?;
  if count > 0 {
    return Ok(());
  }

  add_surah(conn, 1, "(1) Al-Fatiha", "The Opening")?;
  add_surah(conn, 113, "(113) Al-Falaq", "The Daybreak")?;
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::db::test_conn;

  #[test]
  fn test_seed_defaults_once() {
    let conn = test_conn();
    seed_toolbelt_defaults(&conn).unwrap();
    seed_toolbelt_defaults(&conn).unwrap();

    let surahs = list_toolbelt(&conn).unwrap();
    assert_eq!(surahs.len(), 2);
    assert_eq!(surahs[0].surah_id, 1);
    assert_eq!(surahs[1].surah_id, 113);
    assert!(!surahs[0].mastered);
  }

  #[test]
  fn test_add_and_delete() {
    let conn = test_conn();
    add_surah(&conn, 114, "(114) An-Nas", "Mankind").unwrap();
    add_surah(&conn, 114, "(114) An-Nas", "Mankind").unwrap(); // duplicate ignored

    assert_eq!(list_toolbelt(&conn).unwrap().len(), 1);

    delete_surah(&conn, 114).unwrap();
    assert!(list_toolbelt(&conn).unwrap().is_empty());
  }

  #[test]
  fn test_toggle_mastered() {
    let conn = test_conn();
    add_surah(&conn, 1, "(1) Al-Fatiha", "The Opening").unwrap();

    assert!(toggle_mastered(&conn, 1).unwrap());
    assert!(list_toolbelt(&conn).unwrap()[0].mastered);

    assert!(!toggle_mastered(&conn, 1).unwrap());
    assert!(!list_toolbelt(&conn).unwrap()[0].mastered);
  }
}
