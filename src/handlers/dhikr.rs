//! Dhikr tally and study-list handlers.
//!
//! Tally mutations are accepted for today only; browsing a past date shows
//! its record read-only, matching the tracker's date navigation.

use axum::extract::State;
use axum::response::Redirect;
use axum::Form;
use serde::Deserialize;

use crate::config;
use crate::db::{self, DbPool, LogOnError};
use crate::guidance::{GuidanceProvider, LexicalGuidance};

use super::{parse_date, today};

#[derive(Deserialize)]
pub struct DhikrDateForm {
  pub date: String,
}

#[derive(Deserialize)]
pub struct DhikrAmountForm {
  pub date: String,
  pub amount: String,
}

#[derive(Deserialize)]
pub struct DhikrGoalForm {
  pub date: String,
  pub goal: String,
}

#[derive(Deserialize)]
pub struct DhikrEntryForm {
  pub name: String,
}

#[derive(Deserialize)]
pub struct DeleteEntryForm {
  pub id: i64,
}

fn redirect_to(date: &str) -> Redirect {
  Redirect::to(&format!("/?date={}", date))
}

/// Apply a signed delta to today's tally
fn adjust_count(pool: &DbPool, raw_date: &str, delta: i64) -> Redirect {
  let date = parse_date(Some(raw_date));
  if date == today() {
    if let Ok(conn) = db::try_lock(pool) {
      let _ = db::add_to_dhikr_count(&conn, date, delta).log_warn("Failed to update dhikr count");
    }
  }
  redirect_to(&date.to_string())
}

pub async fn dhikr_increment(
  State(pool): State<DbPool>,
  Form(form): Form<DhikrDateForm>,
) -> Redirect {
  adjust_count(&pool, &form.date, config::DHIKR_STEP)
}

pub async fn dhikr_decrement(
  State(pool): State<DbPool>,
  Form(form): Form<DhikrDateForm>,
) -> Redirect {
  adjust_count(&pool, &form.date, -config::DHIKR_STEP)
}

pub async fn dhikr_add_custom(
  State(pool): State<DbPool>,
  Form(form): Form<DhikrAmountForm>,
) -> Redirect {
  match form.amount.trim().parse::<i64>() {
    Ok(amount) => adjust_count(&pool, &form.date, amount),
    Err(_) => redirect_to(&parse_date(Some(&form.date)).to_string()),
  }
}

pub async fn dhikr_reset(State(pool): State<DbPool>, Form(form): Form<DhikrDateForm>) -> Redirect {
  let date = parse_date(Some(&form.date));
  if date == today() {
    if let Ok(conn) = db::try_lock(&pool) {
      let goal = db::get_dhikr_record(&conn, date)
        .map(|r| r.goal)
        .unwrap_or(config::DHIKR_MIN_GOAL);
      let _ = db::upsert_dhikr_record(&conn, date, 0, goal).log_warn("Failed to reset dhikr count");
    }
  }
  redirect_to(&date.to_string())
}

pub async fn dhikr_set_goal(
  State(pool): State<DbPool>,
  Form(form): Form<DhikrGoalForm>,
) -> Redirect {
  let date = parse_date(Some(&form.date));
  if date == today() {
    if let (Ok(goal), Ok(conn)) = (form.goal.trim().parse::<i64>(), db::try_lock(&pool)) {
      let count = db::get_dhikr_record(&conn, date).map(|r| r.count).unwrap_or(0);
      let _ = db::upsert_dhikr_record(&conn, date, count, goal).log_warn("Failed to set dhikr goal");
    }
  }
  redirect_to(&date.to_string())
}

/// Save a dhikr for study, enriching it with script and translation when the
/// provider recognizes the phrase. Enrichment failure never blocks the save.
pub async fn add_dhikr_entry(
  State(pool): State<DbPool>,
  Form(form): Form<DhikrEntryForm>,
) -> Redirect {
  let name = form.name.trim();
  if name.is_empty() {
    return Redirect::to("/");
  }

  let enrichment = LexicalGuidance::new().enrich_dhikr(name).ok();
  if enrichment.is_none() {
    tracing::debug!("No enrichment available for dhikr: {}", name);
  }

  if let Ok(conn) = db::try_lock(&pool) {
    let _ = db::insert_dhikr_entry(
      &conn,
      name,
      enrichment.as_ref().map(|e| e.arabic_text.as_str()),
      enrichment.as_ref().map(|e| e.translation.as_str()),
      enrichment.as_ref().map(|e| e.transliteration.as_str()),
    )
    .log_warn("Failed to save dhikr entry");
  }

  Redirect::to("/")
}

pub async fn delete_dhikr_entry(
  State(pool): State<DbPool>,
  Form(form): Form<DeleteEntryForm>,
) -> Redirect {
  if let Ok(conn) = db::try_lock(&pool) {
    let _ = db::delete_dhikr_entry(&conn, form.id).log_warn("Failed to delete dhikr entry");
  }
  Redirect::to("/")
}
