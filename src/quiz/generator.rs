//! Question generation with duplicate-free distractors.
//!
//! `generate` draws a single random question (used by fixed-length drills,
//! where letters may repeat across questions); `generate_all` pre-builds a
//! full-coverage session with every letter appearing exactly once in
//! shuffled order.

use rand::seq::{IndexedRandom, SliceRandom};
use rand::Rng;

use crate::config;
use crate::domain::{FormPosition, LetterEntry};

use super::{AnswerStyle, FieldKind, QuizMode};

/// A single generated question. `options` is empty for typed modes.
#[derive(Debug, Clone, PartialEq)]
pub struct Question {
  pub prompt: String,
  /// Sampled form position for modes that drill positional forms
  pub position: Option<FormPosition>,
  pub correct_answer: String,
  pub options: Vec<String>,
  /// The letter this question was built from, kept for the review log
  pub entry: LetterEntry,
}

impl Question {
  pub fn is_multiple_choice(&self) -> bool {
    !self.options.is_empty()
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationError {
  /// The reference set was empty
  EmptyReferenceSet,
  /// Could not assemble four distinct rendered options from the set
  NotEnoughDistinctOptions,
}

impl std::fmt::Display for GenerationError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::EmptyReferenceSet => write!(f, "reference set is empty"),
      Self::NotEnoughDistinctOptions => {
        write!(f, "not enough distinct option values in reference set")
      }
    }
  }
}

impl std::error::Error for GenerationError {}

/// Generate one question for a random letter from the reference set
pub fn generate(
  mode: QuizMode,
  letters: &[LetterEntry],
  rng: &mut impl Rng,
) -> Result<Question, GenerationError> {
  let entry = letters
    .choose(rng)
    .copied()
    .ok_or(GenerationError::EmptyReferenceSet)?;
  build_question(mode, entry, letters, rng)
}

/// Generate one question per letter of a shuffled copy of the reference set
pub fn generate_all(
  mode: QuizMode,
  letters: &[LetterEntry],
  rng: &mut impl Rng,
) -> Result<Vec<Question>, GenerationError> {
  if letters.is_empty() {
    return Err(GenerationError::EmptyReferenceSet);
  }

  let mut order: Vec<LetterEntry> = letters.to_vec();
  order.shuffle(rng);

  let mut questions = Vec::with_capacity(order.len());
  for entry in order {
    questions.push(build_question(mode, entry, letters, rng)?);
  }
  Ok(questions)
}

fn build_question(
  mode: QuizMode,
  entry: LetterEntry,
  letters: &[LetterEntry],
  rng: &mut impl Rng,
) -> Result<Question, GenerationError> {
  let spec = mode.spec();

  let position = if mode.uses_forms() {
    Some(random_position(rng))
  } else {
    None
  };
  let sampled = position.unwrap_or(FormPosition::Isolated);

  let prompt = field_value(&entry, spec.prompt, sampled);
  let correct_answer = field_value(&entry, spec.answer, sampled);

  let options = match spec.style {
    AnswerStyle::Choice => build_options(spec.answer, &entry, letters, &correct_answer, rng)?,
    AnswerStyle::Typed => Vec::new(),
  };

  Ok(Question {
    prompt,
    position,
    correct_answer,
    options,
    entry,
  })
}

fn random_position(rng: &mut impl Rng) -> FormPosition {
  FormPosition::ALL[rng.random_range(0..FormPosition::ALL.len())]
}

fn field_value(entry: &LetterEntry, field: FieldKind, position: FormPosition) -> String {
  match field {
    FieldKind::Glyph => entry.glyph.to_string(),
    FieldKind::Name => entry.name.to_string(),
    FieldKind::Transliteration => entry.transliteration.to_string(),
    FieldKind::Form => entry.forms.get(position).to_string(),
  }
}

/// Assemble the shuffled option list: the correct answer plus three
/// distractors drawn from other letters, all rendered values distinct.
///
/// Two letters can share a rendered value (duplicate names, coinciding
/// positional forms), so candidates producing an already-taken value are
/// resampled: form distractors retry the remaining positions, other fields
/// fall through to the next pool entry. Running out of pool entries before
/// reaching four options is an error, never a short list.
fn build_options(
  answer_field: FieldKind,
  source: &LetterEntry,
  letters: &[LetterEntry],
  correct_answer: &str,
  rng: &mut impl Rng,
) -> Result<Vec<String>, GenerationError> {
  let mut pool: Vec<&LetterEntry> = letters.iter().filter(|l| l.glyph != source.glyph).collect();
  pool.shuffle(rng);

  let mut options: Vec<String> = Vec::with_capacity(config::DISTRACTOR_COUNT + 1);
  options.push(correct_answer.to_string());

  for candidate in pool {
    if options.len() == config::DISTRACTOR_COUNT + 1 {
      break;
    }

    let value = match answer_field {
      FieldKind::Form => distinct_form_value(candidate, &options, rng),
      _ => {
        let v = field_value(candidate, answer_field, FormPosition::Isolated);
        (!options.contains(&v)).then_some(v)
      }
    };

    if let Some(v) = value {
      options.push(v);
    }
  }

  if options.len() < config::DISTRACTOR_COUNT + 1 {
    return Err(GenerationError::NotEnoughDistinctOptions);
  }

  options.shuffle(rng);
  Ok(options)
}

/// Sample a fresh random position for a form distractor, retrying the other
/// positions if the rendered glyph collides with an option already taken
fn distinct_form_value(
  entry: &LetterEntry,
  taken: &[String],
  rng: &mut impl Rng,
) -> Option<String> {
  let mut positions = FormPosition::ALL;
  positions.shuffle(rng);

  for position in positions {
    let value = entry.forms.get(position).to_string();
    if !taken.contains(&value) {
      return Some(value);
    }
  }
  None
}
