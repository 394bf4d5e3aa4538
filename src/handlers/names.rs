//! The 99 Names reference list and the seek-guidance flow.

use askama::Template;
use axum::extract::Query;
use axum::response::Html;
use axum::Form;
use serde::Deserialize;

use crate::config;
use crate::content::ALLAH_NAMES;
use crate::guidance::{GuidanceError, GuidanceProvider, LexicalGuidance};

pub struct NameRow {
  pub id: u8,
  pub name: String,
  pub arabic: String,
  pub meaning: String,
}

pub struct GuidanceRow {
  pub id: u8,
  pub name: String,
  pub arabic: String,
  pub meaning: String,
  pub reasoning: String,
}

#[derive(Template)]
#[template(path = "names.html")]
pub struct NamesTemplate {
  pub names: Vec<NameRow>,
  pub page: usize,
  pub total_pages: usize,
  pub has_prev: bool,
  pub has_next: bool,
  pub prev_page: usize,
  pub next_page: usize,
  pub prompt: String,
  pub guidance: Vec<GuidanceRow>,
  pub guidance_error: String,
}

#[derive(Deserialize)]
pub struct NamesQuery {
  pub page: Option<usize>,
}

#[derive(Deserialize)]
pub struct GuidanceForm {
  pub prompt: String,
}

fn total_pages() -> usize {
  ALLAH_NAMES.len().div_ceil(config::NAMES_PER_PAGE)
}

fn build_template(page: usize) -> NamesTemplate {
  let total = total_pages();
  let page = page.clamp(1, total);

  let start = (page - 1) * config::NAMES_PER_PAGE;
  let names = ALLAH_NAMES
    .iter()
    .skip(start)
    .take(config::NAMES_PER_PAGE)
    .map(|n| NameRow {
      id: n.id,
      name: n.name.to_string(),
      arabic: n.arabic.to_string(),
      meaning: n.meaning.to_string(),
    })
    .collect();

  NamesTemplate {
    names,
    page,
    total_pages: total,
    has_prev: page > 1,
    has_next: page < total,
    prev_page: page.saturating_sub(1).max(1),
    next_page: (page + 1).min(total),
    prompt: String::new(),
    guidance: Vec::new(),
    guidance_error: String::new(),
  }
}

pub async fn names_page(Query(query): Query<NamesQuery>) -> Html<String> {
  let template = build_template(query.page.unwrap_or(1));
  Html(template.render().unwrap_or_default())
}

/// Run the guidance provider against the learner's prompt and render the
/// recommendations under the reference list
pub async fn seek_guidance(Form(form): Form<GuidanceForm>) -> Html<String> {
  let mut template = build_template(1);
  template.prompt = form.prompt.trim().to_string();

  match LexicalGuidance::new().seek_guidance(&form.prompt) {
    Ok(response) => {
      template.guidance = response
        .names
        .into_iter()
        .map(|n| GuidanceRow {
          id: n.id,
          name: n.name.to_string(),
          arabic: n.arabic.to_string(),
          meaning: n.meaning.to_string(),
          reasoning: n.reasoning,
        })
        .collect();
    }
    Err(GuidanceError::EmptyPrompt) => {
      template.guidance_error =
        "Describe a challenge or a quality you seek to receive guidance.".to_string();
    }
    Err(GuidanceError::NoMatch) => {
      template.guidance_error =
        "No Names matched your words this time. Try describing the feeling differently."
          .to_string();
    }
  }

  Html(template.render().unwrap_or_default())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_pagination_covers_all_names() {
    let total = total_pages();
    let mut seen = 0;
    for page in 1..=total {
      seen += build_template(page).names.len();
    }
    assert_eq!(seen, ALLAH_NAMES.len());
  }

  #[test]
  fn test_page_is_clamped() {
    let template = build_template(0);
    assert_eq!(template.page, 1);

    let template = build_template(999);
    assert_eq!(template.page, total_pages());
    assert!(!template.has_next);
  }

  #[test]
  fn test_first_page_contents() {
    let template = build_template(1);
    assert_eq!(template.names.len(), config::NAMES_PER_PAGE);
    assert_eq!(template.names[0].name, "Ar-Rahmān");
    assert!(!template.has_prev);
    assert!(template.has_next);
  }
}
