//! Surah toolbelt handlers: the memorization list and surah text view.

use askama::Template;
use axum::extract::{Path, State};
use axum::response::{Html, Redirect};
use axum::Form;
use serde::Deserialize;

use crate::content::{SurahText, SURAH_TEXTS};
use crate::db::{self, DbPool, LogOnError};

pub struct ToolbeltRow {
  pub surah_id: i64,
  pub name: String,
  pub description: String,
  pub mastered: bool,
  pub has_text: bool,
}

pub struct CatalogOption {
  pub surah_id: i64,
  pub label: String,
}

#[derive(Template)]
#[template(path = "toolbelt.html")]
pub struct ToolbeltTemplate {
  pub surahs: Vec<ToolbeltRow>,
  pub catalog: Vec<CatalogOption>,
}

pub struct VerseRow {
  pub id: u8,
  pub arabic: String,
  pub transliteration: String,
  pub translation: String,
}

#[derive(Template)]
#[template(path = "surah.html")]
pub struct SurahTemplate {
  pub name: String,
  pub arabic_name: String,
  pub translation: String,
  pub verses: Vec<VerseRow>,
}

#[derive(Deserialize)]
pub struct SurahForm {
  pub surah_id: i64,
}

pub async fn toolbelt_page(State(pool): State<DbPool>) -> Html<String> {
  let conn = match db::try_lock(&pool) {
    Ok(conn) => conn,
    Err(_) => return Html("<h1>Database Error</h1><p>Please refresh the page.</p>".to_string()),
  };

  let pinned = db::list_toolbelt(&conn).log_warn_default("Failed to load toolbelt");

  let surahs: Vec<ToolbeltRow> = pinned
    .iter()
    .map(|s| ToolbeltRow {
      surah_id: s.surah_id,
      name: s.name.clone(),
      description: s.description.clone(),
      mastered: s.mastered,
      has_text: SurahText::by_id(s.surah_id).is_some(),
    })
    .collect();

  // Offer only surahs we carry text for and that are not already pinned
  let catalog = SURAH_TEXTS
    .iter()
    .filter(|text| !pinned.iter().any(|s| s.surah_id == text.id))
    .map(|text| CatalogOption {
      surah_id: text.id,
      label: format!("({}) {} — {}", text.id, text.name, text.translation),
    })
    .collect();

  let template = ToolbeltTemplate { surahs, catalog };
  Html(template.render().unwrap_or_default())
}

pub async fn toolbelt_add(State(pool): State<DbPool>, Form(form): Form<SurahForm>) -> Redirect {
  if let Some(text) = SurahText::by_id(form.surah_id) {
    if let Ok(conn) = db::try_lock(&pool) {
      let name = format!("({}) {}", text.id, text.name);
      let _ = db::add_surah(&conn, text.id, &name, text.translation)
        .log_warn("Failed to add surah to toolbelt");
    }
  }
  Redirect::to("/toolbelt")
}

pub async fn toolbelt_delete(State(pool): State<DbPool>, Form(form): Form<SurahForm>) -> Redirect {
  if let Ok(conn) = db::try_lock(&pool) {
    let _ = db::delete_surah(&conn, form.surah_id).log_warn("Failed to remove surah");
  }
  Redirect::to("/toolbelt")
}

pub async fn toolbelt_toggle(State(pool): State<DbPool>, Form(form): Form<SurahForm>) -> Redirect {
  if let Ok(conn) = db::try_lock(&pool) {
    let _ = db::toggle_mastered(&conn, form.surah_id).log_warn("Failed to toggle mastery");
  }
  Redirect::to("/toolbelt")
}

/// Full text view for a pinned surah
pub async fn surah_page(Path(surah_id): Path<i64>) -> Html<String> {
  let Some(text) = SurahText::by_id(surah_id) else {
    return Html("<h1>Not Found</h1><p>No text is available for this surah.</p>".to_string());
  };

  let template = SurahTemplate {
    name: text.name.to_string(),
    arabic_name: text.arabic_name.to_string(),
    translation: text.translation.to_string(),
    verses: text
      .verses
      .iter()
      .map(|v| VerseRow {
        id: v.id,
        arabic: v.arabic.to_string(),
        transliteration: v.transliteration.to_string(),
        translation: v.translation.to_string(),
      })
      .collect(),
  };

  Html(template.render().unwrap_or_default())
}
