use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Daily remembrance tally for a single date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DhikrRecord {
  pub date: NaiveDate,
  pub count: i64,
  pub goal: i64,
}

impl DhikrRecord {
  pub fn new(date: NaiveDate, goal: i64) -> Self {
    Self { date, count: 0, goal }
  }

  /// Progress toward the daily goal as a whole percentage, capped at 100
  pub fn progress_percent(&self) -> i64 {
    if self.goal <= 0 {
      return 0;
    }
    (self.count * 100 / self.goal).min(100)
  }
}

/// A dhikr saved for study, optionally enriched with script and translation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DhikrEntry {
  pub id: i64,
  pub name: String,
  pub arabic_text: Option<String>,
  pub translation: Option<String>,
  pub transliteration: Option<String>,
}

/// A surah pinned to the memorization toolbelt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Surah {
  pub id: i64,
  /// Catalog number of the surah (1..=114)
  pub surah_id: i64,
  pub name: String,
  pub description: String,
  pub mastered: bool,
}

/// Consecutive days on which all five main prayers were completed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Streak {
  pub days: i64,
  /// Last date counted into the streak (None when no day has ever completed)
  pub end_date: Option<NaiveDate>,
}
