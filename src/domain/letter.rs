use serde::Serialize;

/// One of the four contextual renderings of an Arabic letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FormPosition {
  Isolated,
  Initial,
  Medial,
  Final,
}

impl FormPosition {
  pub const ALL: [FormPosition; 4] = [
    Self::Isolated,
    Self::Initial,
    Self::Medial,
    Self::Final,
  ];

  pub fn from_str(s: &str) -> Option<Self> {
    match s {
      "isolated" => Some(Self::Isolated),
      "initial" => Some(Self::Initial),
      "medial" => Some(Self::Medial),
      "final" => Some(Self::Final),
      _ => None,
    }
  }

  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Isolated => "isolated",
      Self::Initial => "initial",
      Self::Medial => "medial",
      Self::Final => "final",
    }
  }

  /// Learner-facing position label
  pub fn label(&self) -> &'static str {
    match self {
      Self::Isolated => "Isolated",
      Self::Initial => "Beginning",
      Self::Medial => "Middle",
      Self::Final => "End",
    }
  }
}

/// The four positional glyph variants of a letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LetterForms {
  pub isolated: &'static str,
  pub initial: &'static str,
  pub medial: &'static str,
  pub word_final: &'static str,
}

impl LetterForms {
  pub fn get(&self, position: FormPosition) -> &'static str {
    match position {
      FormPosition::Isolated => self.isolated,
      FormPosition::Initial => self.initial,
      FormPosition::Medial => self.medial,
      FormPosition::Final => self.word_final,
    }
  }
}

/// One reference-data record for a single alphabet character.
///
/// The alphabet is static, versioned in `content::alphabet`; entries are
/// identified by their isolated glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LetterEntry {
  /// The character itself (isolated display form)
  pub glyph: &'static str,
  /// Pedagogical name (e.g. "Alif")
  pub name: &'static str,
  /// Latin rendering (e.g. "a, ā")
  pub transliteration: &'static str,
  pub example_word: &'static str,
  pub example_translation: &'static str,
  pub example_meaning: &'static str,
  pub forms: LetterForms,
}
