//! Answer comparison rules for the alphabet quiz.
//!
//! Two rule sets, selected by the quiz mode's answer style:
//! - **choice**: the learner tapped one of the rendered options, so only an
//!   exact string (after trimming) counts
//! - **typed**: free-text entry, compared case-insensitively after trimming,
//!   with diacritic-stripped fallback and comma-separated alternatives
//!   (`"w, ū"` accepts "w", "ū" or "u")

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Exact-match comparison for selected options
pub fn choice_matches(user_answer: &str, correct_answer: &str) -> bool {
  let user = user_answer.trim();
  !user.is_empty() && user == correct_answer.trim()
}

/// Lenient comparison for typed answers
pub fn typed_matches(user_answer: &str, correct_answer: &str) -> bool {
  let user = normalize(user_answer);
  if user.is_empty() {
    return false;
  }

  let correct = normalize(correct_answer);
  if user == correct || strip_marks(&user) == strip_marks(&correct) {
    return true;
  }

  // Accept any single alternative of a comma-separated answer
  correct.split(',').any(|alt| {
    let alt = alt.trim();
    !alt.is_empty() && (user == alt || strip_marks(&user) == strip_marks(alt))
  })
}

fn normalize(s: &str) -> String {
  s.trim().to_lowercase()
}

/// Decompose and drop combining marks so "ḥa" compares equal to "ha"
fn strip_marks(s: &str) -> String {
  s.nfd().filter(|c| !is_combining_mark(*c)).collect()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_choice_exact_match() {
    assert!(choice_matches("ا", "ا"));
    assert!(choice_matches(" ا ", "ا"));
    assert!(!choice_matches("ب", "ا"));
  }

  #[test]
  fn test_choice_is_case_sensitive() {
    // Selected options must match the rendered string exactly
    assert!(!choice_matches("ALIF", "Alif"));
    assert!(!choice_matches("alif", "Alif"));
    assert!(choice_matches("Alif", "Alif"));
  }

  #[test]
  fn test_choice_empty_input() {
    assert!(!choice_matches("", "ا"));
    assert!(!choice_matches("   ", "ا"));
  }

  #[test]
  fn test_typed_case_and_whitespace() {
    assert!(typed_matches("Alif", "Alif"));
    assert!(typed_matches(" Alif ", "Alif"));
    assert!(typed_matches("ALIF", "Alif"));
    assert!(typed_matches("alif", "Alif"));
    assert!(!typed_matches("Ba", "Alif"));
  }

  #[test]
  fn test_typed_empty_input() {
    assert!(!typed_matches("", "Alif"));
    assert!(!typed_matches("   ", "Alif"));
  }

  #[test]
  fn test_typed_diacritic_stripping() {
    assert!(typed_matches("ha", "ḥ"));
    assert!(typed_matches("sad", "Ṣad"));
    assert!(typed_matches("a", "ā"));
  }

  #[test]
  fn test_typed_comma_alternatives() {
    assert!(typed_matches("w", "w, ū"));
    assert!(typed_matches("ū", "w, ū"));
    assert!(typed_matches("u", "w, ū"));
    assert!(typed_matches("w, ū", "w, ū"));
    assert!(!typed_matches("v", "w, ū"));
  }

  #[test]
  fn test_typed_arabic_text() {
    assert!(typed_matches("ا", "ا"));
    assert!(!typed_matches("ب", "ا"));
  }
}
