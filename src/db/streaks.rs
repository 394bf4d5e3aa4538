//! Day-streak bookkeeping for prayer completion.
//!
//! The rule is plain date comparison, not a scheduler: a day counts once all
//! five main prayers are checked off for it. A completion ending yesterday
//! extends the streak; any other gap restarts it at one. Unchecking a prayer
//! later never takes a recorded day back.

use chrono::NaiveDate;
use rusqlite::{params, Connection, OptionalExtension, Result};

use crate::domain::Streak;

pub fn get_streak(conn: &Connection) -> Result<Streak> {
  let row = conn
    .query_row("SELECT days, end_date FROM day_streaks WHERE id = 1", [], |row| {
      let days: i64 = row.get(0)?;
      let end_date: Option<String> = row.get(1)?;
      Ok((days, end_date))
    })
    .optional()?;

  let streak = match row {
    Some((days, end_date)) => Streak {
      days,
      end_date: end_date.and_then(|s| s.parse().ok()),
    },
    None => Streak::default(),
  };
  Ok(streak)
}

/// Record that all main prayers were completed on `today`; returns the
/// updated streak. Idempotent for repeat calls on the same day.
pub fn record_completion(conn: &Connection, today: NaiveDate) -> Result<Streak> {
  let current = get_streak(conn)?;

  if current.end_date == Some(today) {
    return Ok(current);
  }

  let days = match (current.end_date, today.pred_opt()) {
    (Some(end), Some(yesterday)) if end == yesterday => current.days + 1,
    _ => 1,
  };

  conn.execute(
    "INSERT INTO day_streaks (id, days, end_date) VALUES (1, ?1, ?2)
     ON CONFLICT(id) DO UPDATE SET days = ?1, end_date = ?2",
    params![days, today.to_string()],
  )?;

  Ok(Streak {
    days,
    end_date: Some(today),
  })
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::db::test_conn;

  fn date(s: &str) -> NaiveDate {
    s.parse().unwrap()
  }

  #[test]
  fn test_no_streak_initially() {
    let conn = test_conn();
    assert_eq!(get_streak(&conn).unwrap(), Streak::default());
  }

  #[test]
  fn test_first_completion_starts_at_one() {
    let conn = test_conn();
    let streak = record_completion(&conn, date("2025-06-01")).unwrap();
    assert_eq!(streak.days, 1);
    assert_eq!(streak.end_date, Some(date("2025-06-01")));
  }

  #[test]
  fn test_consecutive_days_increment() {
    let conn = test_conn();
    record_completion(&conn, date("2025-06-01")).unwrap();
    record_completion(&conn, date("2025-06-02")).unwrap();
    let streak = record_completion(&conn, date("2025-06-03")).unwrap();
    assert_eq!(streak.days, 3);
  }

  #[test]
  fn test_same_day_is_idempotent() {
    let conn = test_conn();
    record_completion(&conn, date("2025-06-01")).unwrap();
    let streak = record_completion(&conn, date("2025-06-01")).unwrap();
    assert_eq!(streak.days, 1);
  }

  #[test]
  fn test_gap_restarts_streak() {
    let conn = test_conn();
    record_completion(&conn, date("2025-06-01")).unwrap();
    record_completion(&conn, date("2025-06-02")).unwrap();
    let streak = record_completion(&conn, date("2025-06-05")).unwrap();
    assert_eq!(streak.days, 1);
    assert_eq!(streak.end_date, Some(date("2025-06-05")));
  }

  #[test]
  fn test_survives_reload() {
    let conn = test_conn();
    record_completion(&conn, date("2025-06-01")).unwrap();
    record_completion(&conn, date("2025-06-02")).unwrap();

    let streak = get_streak(&conn).unwrap();
    assert_eq!(streak.days, 2);
    assert_eq!(streak.end_date, Some(date("2025-06-02")));
  }
}
