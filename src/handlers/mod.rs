//! Request handlers and their askama templates, one module per dashboard
//! feature.

pub mod alphabet;
pub mod dhikr;
pub mod names;
pub mod prayers;
pub mod toolbelt;

use askama::Template;
use axum::extract::{Query, State};
use axum::response::Html;
use chrono::{Local, NaiveDate};
use serde::Deserialize;

use crate::config;
use crate::db::{self, DbPool, LogOnError};

pub use alphabet::{
  alphabet_page, quiz_answer, quiz_back, quiz_modes, quiz_next, quiz_reset, quiz_start,
};
pub use dhikr::{
  add_dhikr_entry, dhikr_add_custom, dhikr_decrement, dhikr_increment, dhikr_reset,
  dhikr_set_goal, delete_dhikr_entry,
};
pub use names::{names_page, seek_guidance};
pub use prayers::toggle_prayer;
pub use toolbelt::{surah_page, toolbelt_add, toolbelt_delete, toolbelt_page, toolbelt_toggle};

/// Today's date in the server's local timezone
pub(crate) fn today() -> NaiveDate {
  Local::now().date_naive()
}

/// Parse a `?date=` / form date value, falling back to today
pub(crate) fn parse_date(raw: Option<&str>) -> NaiveDate {
  raw
    .and_then(|s| s.parse::<NaiveDate>().ok())
    .unwrap_or_else(today)
}

/// Human-readable date heading, e.g. "Sunday, June  1, 2025"
pub(crate) fn format_date(date: NaiveDate) -> String {
  date.format("%A, %B %e, %Y").to_string()
}

#[derive(Deserialize)]
pub struct DateQuery {
  pub date: Option<String>,
}

pub struct PrayerSlot {
  pub name: String,
  pub completed: bool,
  pub is_main: bool,
}

pub struct DhikrEntryRow {
  pub id: i64,
  pub name: String,
  pub arabic_text: String,
  pub translation: String,
  pub has_enrichment: bool,
}

pub struct HistoryRow {
  pub date: String,
  pub count: usize,
  pub complete: bool,
}

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
  pub date: String,
  pub formatted_date: String,
  pub is_today: bool,
  pub prev_date: String,
  pub next_date: String,
  pub prayers: Vec<PrayerSlot>,
  pub completed_main: usize,
  pub main_total: usize,
  pub streak_days: i64,
  pub dhikr_count: i64,
  pub dhikr_goal: i64,
  pub dhikr_progress: i64,
  pub dhikr_entries: Vec<DhikrEntryRow>,
  pub history: Vec<HistoryRow>,
}

/// Dashboard: prayer tracker, dhikr tally and study list for the selected
/// date
pub async fn index(State(pool): State<DbPool>, Query(query): Query<DateQuery>) -> Html<String> {
  let conn = match db::try_lock(&pool) {
    Ok(conn) => conn,
    Err(_) => return Html("<h1>Database Error</h1><p>Please refresh the page.</p>".to_string()),
  };

  let date = parse_date(query.date.as_deref());
  let today = today();
  let date = date.min(today);

  let completed = db::get_prayers_for_date(&conn, date)
    .log_warn_default("Failed to load prayer records");
  let prayers: Vec<PrayerSlot> = config::all_prayers()
    .into_iter()
    .map(|name| PrayerSlot {
      completed: completed.contains(name),
      is_main: name != config::EXTRA_PRAYER,
      name: name.to_string(),
    })
    .collect();
  let completed_main = config::MAIN_PRAYERS
    .iter()
    .filter(|p| completed.contains(**p))
    .count();

  let streak = db::get_streak(&conn).log_warn_default("Failed to load streak");

  let dhikr = db::get_dhikr_record(&conn, date).unwrap_or_else(|e| {
    tracing::warn!("Failed to load dhikr record: {}", e);
    crate::domain::DhikrRecord::new(date, config::DHIKR_MIN_GOAL)
  });

  let dhikr_entries = db::list_dhikr_entries(&conn)
    .log_warn_default("Failed to load dhikr entries")
    .into_iter()
    .map(|entry| DhikrEntryRow {
      id: entry.id,
      name: entry.name,
      has_enrichment: entry.arabic_text.is_some(),
      arabic_text: entry.arabic_text.unwrap_or_default(),
      translation: entry.translation.unwrap_or_default(),
    })
    .collect();

  let history = db::get_history(&conn, 7)
    .log_warn_default("Failed to load prayer history")
    .into_iter()
    .map(|(date, count)| HistoryRow {
      date: format_date(date),
      count,
      complete: count >= config::MAIN_PRAYERS.len(),
    })
    .collect();

  let template = IndexTemplate {
    date: date.to_string(),
    formatted_date: format_date(date),
    is_today: date == today,
    prev_date: date.pred_opt().map(|d| d.to_string()).unwrap_or_default(),
    next_date: date.succ_opt().map(|d| d.to_string()).unwrap_or_default(),
    prayers,
    completed_main,
    main_total: config::MAIN_PRAYERS.len(),
    streak_days: streak.days,
    dhikr_count: dhikr.count,
    dhikr_goal: dhikr.goal,
    dhikr_progress: dhikr.progress_percent(),
    dhikr_entries,
    history,
  };

  Html(template.render().unwrap_or_default())
}
