//! Alphabet quiz engine.
//!
//! Two cooperating pieces:
//! - [`generator`] produces randomized questions from the static alphabet
//!   reference set (letter, name, transliteration and positional-form drills)
//! - [`session`] sequences questions, collects answers, scores and exposes
//!   the answered log for review
//!
//! The engine is pure in-memory state: it never touches the database, and a
//! session dies with its [`store`] entry. Randomness is injected
//! (`&mut impl Rng`) so tests can run against a seeded generator.

pub mod generator;
pub mod session;
pub mod store;

pub use generator::{generate, generate_all, GenerationError, Question};
pub use session::{
  AnswerFeedback, AnsweredQuestion, NavigationSignal, Phase, QuizError, QuizSession, ScoreSummary,
  SessionPolicy,
};

use crate::config;

/// Which field of a letter entry a quiz side draws from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
  Glyph,
  Name,
  Transliteration,
  /// A positional form; the position is sampled per question (prompt/answer)
  /// and independently per distractor
  Form,
}

/// How the learner answers a question
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerStyle {
  /// Pick one of four rendered options
  Choice,
  /// Free-text entry
  Typed,
}

/// Field mapping for a quiz mode: what is shown, what is asked, how it is
/// answered. Adding a mode means adding a row here, not new branching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeSpec {
  pub prompt: FieldKind,
  pub answer: FieldKind,
  pub style: AnswerStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizMode {
  LetterToName,
  NameToLetter,
  LetterToTransliteration,
  TransliterationToLetter,
  NameToForm,
  FormToName,
}

impl QuizMode {
  pub const ALL: [QuizMode; 6] = [
    Self::LetterToName,
    Self::NameToLetter,
    Self::LetterToTransliteration,
    Self::TransliterationToLetter,
    Self::NameToForm,
    Self::FormToName,
  ];

  pub fn from_str(s: &str) -> Option<Self> {
    match s {
      "letter-name" => Some(Self::LetterToName),
      "name-letter" => Some(Self::NameToLetter),
      "letter-translit" => Some(Self::LetterToTransliteration),
      "translit-letter" => Some(Self::TransliterationToLetter),
      "name-form" => Some(Self::NameToForm),
      "form-name" => Some(Self::FormToName),
      _ => None,
    }
  }

  pub fn as_str(&self) -> &'static str {
    match self {
      Self::LetterToName => "letter-name",
      Self::NameToLetter => "name-letter",
      Self::LetterToTransliteration => "letter-translit",
      Self::TransliterationToLetter => "translit-letter",
      Self::NameToForm => "name-form",
      Self::FormToName => "form-name",
    }
  }

  /// Learner-facing title
  pub fn title(&self) -> &'static str {
    match self {
      Self::LetterToName => "Letter → Name",
      Self::NameToLetter => "Name → Letter",
      Self::LetterToTransliteration => "Letter → Transliteration",
      Self::TransliterationToLetter => "Transliteration → Letter",
      Self::NameToForm => "Name → Form",
      Self::FormToName => "Form → Name",
    }
  }

  /// Field mapping table. Glyph and form answers are multiple choice (the
  /// learner cannot be expected to type Arabic script); Latin answers are
  /// typed.
  pub fn spec(&self) -> ModeSpec {
    match self {
      Self::LetterToName => ModeSpec {
        prompt: FieldKind::Glyph,
        answer: FieldKind::Name,
        style: AnswerStyle::Typed,
      },
      Self::NameToLetter => ModeSpec {
        prompt: FieldKind::Name,
        answer: FieldKind::Glyph,
        style: AnswerStyle::Choice,
      },
      Self::LetterToTransliteration => ModeSpec {
        prompt: FieldKind::Glyph,
        answer: FieldKind::Transliteration,
        style: AnswerStyle::Typed,
      },
      Self::TransliterationToLetter => ModeSpec {
        prompt: FieldKind::Transliteration,
        answer: FieldKind::Glyph,
        style: AnswerStyle::Choice,
      },
      Self::NameToForm => ModeSpec {
        prompt: FieldKind::Name,
        answer: FieldKind::Form,
        style: AnswerStyle::Choice,
      },
      Self::FormToName => ModeSpec {
        prompt: FieldKind::Form,
        answer: FieldKind::Name,
        style: AnswerStyle::Typed,
      },
    }
  }

  pub fn answer_style(&self) -> AnswerStyle {
    self.spec().style
  }

  /// Whether this mode samples a positional form on either side
  pub fn uses_forms(&self) -> bool {
    let spec = self.spec();
    spec.prompt == FieldKind::Form || spec.answer == FieldKind::Form
  }

  /// Typed drills run a long fixed-length session; choice drills walk the
  /// whole alphabet once.
  pub fn default_policy(&self) -> SessionPolicy {
    match self.answer_style() {
      AnswerStyle::Typed => SessionPolicy::FixedCount(config::FIXED_DRILL_LENGTH),
      AnswerStyle::Choice => SessionPolicy::FullCoverage,
    }
  }

  pub fn difficulty_label(&self) -> &'static str {
    match self.answer_style() {
      AnswerStyle::Typed => "Hard",
      AnswerStyle::Choice => "Easy",
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_mode_from_str_roundtrip() {
    for mode in QuizMode::ALL {
      assert_eq!(QuizMode::from_str(mode.as_str()), Some(mode));
    }
    assert_eq!(QuizMode::from_str("bogus"), None);
    assert_eq!(QuizMode::from_str(""), None);
  }

  #[test]
  fn test_glyph_and_form_answers_are_choice() {
    assert_eq!(QuizMode::NameToLetter.answer_style(), AnswerStyle::Choice);
    assert_eq!(QuizMode::TransliterationToLetter.answer_style(), AnswerStyle::Choice);
    assert_eq!(QuizMode::NameToForm.answer_style(), AnswerStyle::Choice);
  }

  #[test]
  fn test_latin_answers_are_typed() {
    assert_eq!(QuizMode::LetterToName.answer_style(), AnswerStyle::Typed);
    assert_eq!(QuizMode::LetterToTransliteration.answer_style(), AnswerStyle::Typed);
    assert_eq!(QuizMode::FormToName.answer_style(), AnswerStyle::Typed);
  }

  #[test]
  fn test_uses_forms() {
    assert!(QuizMode::NameToForm.uses_forms());
    assert!(QuizMode::FormToName.uses_forms());
    assert!(!QuizMode::LetterToName.uses_forms());
    assert!(!QuizMode::TransliterationToLetter.uses_forms());
  }

  #[test]
  fn test_default_policies() {
    assert_eq!(
      QuizMode::LetterToName.default_policy(),
      SessionPolicy::FixedCount(config::FIXED_DRILL_LENGTH)
    );
    assert_eq!(QuizMode::NameToForm.default_policy(), SessionPolicy::FullCoverage);
  }

  #[test]
  fn test_answer_field_never_matches_prompt_field() {
    for mode in QuizMode::ALL {
      let spec = mode.spec();
      assert_ne!(spec.prompt, spec.answer, "{:?}", mode);
    }
  }
}
