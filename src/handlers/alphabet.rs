//! Alphabet flashcards and the quiz flow.
//!
//! The quiz session lives in the in-memory store keyed by a browser cookie;
//! handlers load it, apply one engine transition and store it back. Invalid
//! transitions (double posts, stale tabs) are logged and the current state is
//! re-rendered rather than crashing the session.

use askama::Template;
use axum::extract::Query;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;
use axum_extra::extract::cookie::{Cookie, CookieJar};
use serde::Deserialize;

use crate::content::ALPHABET;
use crate::quiz::{store, NavigationSignal, QuizMode, QuizSession};

const QUIZ_COOKIE: &str = "quiz_session";

// ==================== Flashcards ====================

#[derive(Deserialize)]
pub struct AlphabetQuery {
  pub index: Option<usize>,
  pub flip: Option<u8>,
}

#[derive(Template)]
#[template(path = "alphabet.html")]
pub struct AlphabetTemplate {
  pub index: usize,
  pub ordinal: usize,
  pub count: usize,
  pub prev_index: usize,
  pub next_index: usize,
  pub flipped: bool,
  pub flip_target: u8,
  pub glyph: String,
  pub name: String,
  pub transliteration: String,
  pub example_word: String,
  pub example_translation: String,
  pub example_meaning: String,
  pub form_isolated: String,
  pub form_initial: String,
  pub form_medial: String,
  pub form_final: String,
}

/// Letter browser with wrap-around navigation and a flip side showing the
/// positional forms
pub async fn alphabet_page(Query(query): Query<AlphabetQuery>) -> Html<String> {
  let count = ALPHABET.len();
  let index = query.index.unwrap_or(0) % count;
  let flipped = query.flip.unwrap_or(0) != 0;
  let entry = &ALPHABET[index];

  let template = AlphabetTemplate {
    index,
    ordinal: index + 1,
    count,
    prev_index: (index + count - 1) % count,
    next_index: (index + 1) % count,
    flipped,
    flip_target: if flipped { 0 } else { 1 },
    glyph: entry.glyph.to_string(),
    name: entry.name.to_string(),
    transliteration: entry.transliteration.to_string(),
    example_word: entry.example_word.to_string(),
    example_translation: entry.example_translation.to_string(),
    example_meaning: entry.example_meaning.to_string(),
    form_isolated: entry.forms.isolated.to_string(),
    form_initial: entry.forms.initial.to_string(),
    form_medial: entry.forms.medial.to_string(),
    form_final: entry.forms.word_final.to_string(),
  };

  Html(template.render().unwrap_or_default())
}

// ==================== Quiz ====================

pub struct ModeOption {
  pub tag: String,
  pub title: String,
  pub difficulty: String,
}

#[derive(Template)]
#[template(path = "quiz_modes.html")]
pub struct QuizModesTemplate {
  pub modes: Vec<ModeOption>,
}

/// One rendered answer option; `css` marks it correct/wrong once feedback is
/// showing
pub struct OptionButton {
  pub value: String,
  pub css: String,
}

#[derive(Template)]
#[template(path = "quiz_question.html")]
pub struct QuizQuestionTemplate {
  pub mode_title: String,
  pub difficulty: String,
  pub answered: usize,
  pub total: usize,
  pub prompt: String,
  pub has_position: bool,
  pub position_label: String,
  pub is_multiple_choice: bool,
  pub options: Vec<OptionButton>,
  pub validated: bool,
  pub is_correct: bool,
  pub user_answer: String,
  pub correct_answer: String,
}

pub struct ReviewRow {
  pub glyph: String,
  pub name: String,
  pub transliteration: String,
  pub detail: String,
  pub correct_answer: String,
  pub user_answer: String,
  pub is_correct: bool,
}

#[derive(Template)]
#[template(path = "quiz_results.html")]
pub struct QuizResultsTemplate {
  pub mode_title: String,
  pub correct: usize,
  pub total: usize,
  pub percentage: u32,
  pub rows: Vec<ReviewRow>,
}

#[derive(Deserialize)]
pub struct QuizStartQuery {
  pub mode: Option<String>,
}

#[derive(Deserialize)]
pub struct AnswerForm {
  pub answer: String,
}

/// Quiz type chooser
pub async fn quiz_modes() -> Html<String> {
  let template = QuizModesTemplate {
    modes: QuizMode::ALL
      .iter()
      .map(|mode| ModeOption {
        tag: mode.as_str().to_string(),
        title: mode.title().to_string(),
        difficulty: mode.difficulty_label().to_string(),
      })
      .collect(),
  };
  Html(template.render().unwrap_or_default())
}

fn render_question(session: &QuizSession) -> Html<String> {
  let Some(question) = session.current() else {
    return render_results(session);
  };

  // While feedback is pending the answered log's last entry is this question
  let last = session.answered().last().filter(|_| session.feedback_pending());
  let validated = last.is_some();
  let user_answer = last.map(|a| a.user_answer.clone()).unwrap_or_default();
  let is_correct = last.map(|a| a.is_correct).unwrap_or(false);

  let options = question
    .options
    .iter()
    .map(|option| {
      let css = if validated && *option == question.correct_answer {
        "correct"
      } else if validated && *option == user_answer && !is_correct {
        "wrong"
      } else {
        ""
      };
      OptionButton {
        value: option.clone(),
        css: css.to_string(),
      }
    })
    .collect();

  let template = QuizQuestionTemplate {
    mode_title: session.mode().title().to_string(),
    difficulty: session.mode().difficulty_label().to_string(),
    answered: session.answered().len(),
    total: session.total(),
    prompt: question.prompt.clone(),
    has_position: question.position.is_some(),
    position_label: question
      .position
      .map(|p| p.label().to_string())
      .unwrap_or_default(),
    is_multiple_choice: question.is_multiple_choice(),
    options,
    validated,
    is_correct,
    user_answer,
    correct_answer: question.correct_answer.clone(),
  };

  Html(template.render().unwrap_or_default())
}

fn render_results(session: &QuizSession) -> Html<String> {
  let score = session.score();
  let rows = session
    .answered()
    .iter()
    .map(|answered| ReviewRow {
      glyph: answered.question.entry.glyph.to_string(),
      name: answered.question.entry.name.to_string(),
      transliteration: answered.question.entry.transliteration.to_string(),
      detail: answered
        .question
        .position
        .map(|p| p.label().to_string())
        .unwrap_or_default(),
      correct_answer: answered.question.correct_answer.clone(),
      user_answer: answered.user_answer.clone(),
      is_correct: answered.is_correct,
    })
    .collect();

  let template = QuizResultsTemplate {
    mode_title: session.mode().title().to_string(),
    correct: score.correct,
    total: score.total,
    percentage: score.percentage,
    rows,
  };

  Html(template.render().unwrap_or_default())
}

/// Render whichever view matches the session state
fn render_state(session: &QuizSession) -> Html<String> {
  if session.current().is_some() {
    render_question(session)
  } else {
    render_results(session)
  }
}

fn load_session(jar: &CookieJar) -> Option<(String, QuizSession)> {
  let id = jar.get(QUIZ_COOKIE)?.value().to_string();
  let session = store::get(&id)?;
  Some((id, session))
}

/// Start a fresh session for the chosen mode and hand the browser its
/// session cookie
pub async fn quiz_start(jar: CookieJar, Query(query): Query<QuizStartQuery>) -> Response {
  let Some(mode) = query.mode.as_deref().and_then(QuizMode::from_str) else {
    return Redirect::to("/alphabet/quiz").into_response();
  };

  let mut rng = rand::rng();
  match QuizSession::start(mode, &ALPHABET, mode.default_policy(), &mut rng) {
    Ok(session) => {
      let session_id = store::generate_session_id();
      let html = render_question(&session);
      store::put(&session_id, session);

      let cookie = Cookie::build((QUIZ_COOKIE, session_id)).path("/").build();
      (jar.add(cookie), html).into_response()
    }
    Err(e) => {
      tracing::error!("Failed to start quiz session: {}", e);
      Html("<h1>Quiz Error</h1><p>Could not build a quiz from the alphabet.</p>".to_string())
        .into_response()
    }
  }
}

/// Record an answer and show feedback immediately; advancing happens on the
/// learner's next action
pub async fn quiz_answer(jar: CookieJar, Form(form): Form<AnswerForm>) -> Response {
  let Some((session_id, mut session)) = load_session(&jar) else {
    return Redirect::to("/alphabet/quiz").into_response();
  };

  if let Err(e) = session.submit_answer(&form.answer) {
    tracing::debug!("Ignoring answer submission: {}", e);
  }

  let html = render_state(&session);
  store::put(&session_id, session);
  html.into_response()
}

/// Move past the feedback view to the next question or the results
pub async fn quiz_next(jar: CookieJar) -> Response {
  let Some((session_id, mut session)) = load_session(&jar) else {
    return Redirect::to("/alphabet/quiz").into_response();
  };

  let mut rng = rand::rng();
  if let Err(e) = session.advance(&mut rng) {
    tracing::debug!("Ignoring advance request: {}", e);
  }

  let html = render_state(&session);
  store::put(&session_id, session);
  html.into_response()
}

/// Restart the session under the same mode and policy
pub async fn quiz_reset(jar: CookieJar) -> Response {
  let Some((session_id, mut session)) = load_session(&jar) else {
    return Redirect::to("/alphabet/quiz").into_response();
  };

  let mut rng = rand::rng();
  if let Err(e) = session.reset(None, &mut rng) {
    tracing::error!("Failed to reset quiz session: {}", e);
    return Html("<h1>Quiz Error</h1><p>Could not rebuild the quiz.</p>".to_string())
      .into_response();
  }

  let html = render_question(&session);
  store::put(&session_id, session);
  html.into_response()
}

/// Back control: show the results once complete, otherwise abandon the
/// session and leave the quiz
pub async fn quiz_back(jar: CookieJar) -> Response {
  let Some((session_id, session)) = load_session(&jar) else {
    return Redirect::to("/alphabet").into_response();
  };

  match session.back_action() {
    NavigationSignal::ShowResults => render_results(&session).into_response(),
    NavigationSignal::ExitQuiz => {
      store::remove(&session_id);
      Redirect::to("/alphabet").into_response()
    }
  }
}
