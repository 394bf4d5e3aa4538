//! Prayer check-off handler.

use axum::extract::State;
use axum::response::Redirect;
use axum::Form;
use serde::Deserialize;

use crate::db::{self, DbPool, LogOnError};

use super::{parse_date, today};

#[derive(Deserialize)]
pub struct TogglePrayerForm {
  pub date: String,
  pub prayer: String,
}

/// Toggle a prayer for the given date; completing all five main prayers for
/// today advances the day streak.
pub async fn toggle_prayer(
  State(pool): State<DbPool>,
  Form(form): Form<TogglePrayerForm>,
) -> Redirect {
  let date = parse_date(Some(&form.date)).min(today());

  if let Ok(conn) = db::try_lock(&pool) {
    let now_completed = db::toggle_prayer(&conn, date, &form.prayer)
      .log_warn_default("Failed to toggle prayer");

    // The streak only ever moves forward, and only for today
    if now_completed && date == today() {
      let all_complete = db::all_main_prayers_complete(&conn, date)
        .log_warn_default("Failed to check prayer completion");
      if all_complete {
        let _ = db::record_completion(&conn, date).log_warn("Failed to record streak day");
      }
    }
  }

  Redirect::to(&format!("/?date={}", date))
}
