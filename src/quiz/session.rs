//! Quiz session state machine: sequencing, scoring and the answered log.
//!
//! Lifecycle: `start` → (`submit_answer` → `advance`)* → `Complete` →
//! `reset`/drop. Feedback for an answer is returned synchronously by
//! `submit_answer`; `advance` is the separate non-blocking transition the
//! caller invokes after its presentation delay, so the score and state stay
//! inspectable in between.

use rand::Rng;

use crate::domain::LetterEntry;
use crate::validation;

use super::generator::{self, GenerationError, Question};
use super::{AnswerStyle, QuizMode};

/// How a session sources its questions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPolicy {
  /// Pre-built batch covering every letter exactly once, shuffled
  FullCoverage,
  /// Lazily generated questions; letters may repeat across questions
  FixedCount(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
  Active,
  Complete,
}

/// What the back control should do given the current phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationSignal {
  ShowResults,
  ExitQuiz,
}

#[derive(Debug, Clone, PartialEq)]
pub enum QuizError {
  /// Operation invoked against an incompatible session phase. Callers should
  /// treat this as a contract violation to log, not a session-fatal crash.
  InvalidState(&'static str),
  Generation(GenerationError),
}

impl std::fmt::Display for QuizError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::InvalidState(msg) => write!(f, "invalid session state: {}", msg),
      Self::Generation(e) => write!(f, "question generation failed: {}", e),
    }
  }
}

impl std::error::Error for QuizError {}

impl From<GenerationError> for QuizError {
  fn from(e: GenerationError) -> Self {
    Self::Generation(e)
  }
}

/// A question together with the learner's response
#[derive(Debug, Clone, PartialEq)]
pub struct AnsweredQuestion {
  pub question: Question,
  pub user_answer: String,
  pub is_correct: bool,
}

/// Synchronous feedback returned by `submit_answer`
#[derive(Debug, Clone, PartialEq)]
pub struct AnswerFeedback {
  pub is_correct: bool,
  pub correct_answer: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreSummary {
  pub correct: usize,
  pub total: usize,
  /// `round(100 * correct / total)`, 0 when the session is empty
  pub percentage: u32,
}

/// One run-through of a quiz. Purely transient: owns its answered log and
/// current question, never persisted.
#[derive(Debug, Clone)]
pub struct QuizSession {
  mode: QuizMode,
  policy: SessionPolicy,
  letters: Vec<LetterEntry>,
  /// Remaining pre-built questions (FullCoverage only)
  pending: Vec<Question>,
  current: Option<Question>,
  answered: Vec<AnsweredQuestion>,
  total: usize,
  /// An answer was submitted for `current` but `advance` has not run yet
  feedback_pending: bool,
}

impl QuizSession {
  pub fn start(
    mode: QuizMode,
    letters: &[LetterEntry],
    policy: SessionPolicy,
    rng: &mut impl Rng,
  ) -> Result<Self, GenerationError> {
    let mut session = Self {
      mode,
      policy,
      letters: letters.to_vec(),
      pending: Vec::new(),
      current: None,
      answered: Vec::new(),
      total: 0,
      feedback_pending: false,
    };

    match policy {
      SessionPolicy::FullCoverage => {
        let mut questions = generator::generate_all(mode, letters, rng)?;
        // Draw from the back; generate_all already shuffled the order
        questions.reverse();
        session.total = questions.len();
        session.current = questions.pop();
        session.pending = questions;
      }
      SessionPolicy::FixedCount(count) => {
        session.total = count;
        if count > 0 {
          session.current = Some(generator::generate(mode, letters, rng)?);
        }
      }
    }

    Ok(session)
  }

  pub fn mode(&self) -> QuizMode {
    self.mode
  }

  pub fn policy(&self) -> SessionPolicy {
    self.policy
  }

  pub fn phase(&self) -> Phase {
    if self.answered.len() >= self.total {
      Phase::Complete
    } else {
      Phase::Active
    }
  }

  pub fn current(&self) -> Option<&Question> {
    self.current.as_ref()
  }

  pub fn answered(&self) -> &[AnsweredQuestion] {
    &self.answered
  }

  pub fn total(&self) -> usize {
    self.total
  }

  /// Whether feedback for the current question is showing (answer submitted,
  /// not yet advanced)
  pub fn feedback_pending(&self) -> bool {
    self.feedback_pending
  }

  /// Record the learner's answer against the current question and return
  /// feedback immediately. Rejects double submission and submission after
  /// completion without mutating the answered log.
  pub fn submit_answer(&mut self, user_answer: &str) -> Result<AnswerFeedback, QuizError> {
    if self.phase() == Phase::Complete {
      return Err(QuizError::InvalidState("session already complete"));
    }
    if self.feedback_pending {
      return Err(QuizError::InvalidState("answer already submitted for this question"));
    }
    let question = self
      .current
      .as_ref()
      .ok_or(QuizError::InvalidState("no active question"))?;

    let is_correct = match self.mode.answer_style() {
      AnswerStyle::Choice => validation::choice_matches(user_answer, &question.correct_answer),
      AnswerStyle::Typed => validation::typed_matches(user_answer, &question.correct_answer),
    };

    let feedback = AnswerFeedback {
      is_correct,
      correct_answer: question.correct_answer.clone(),
    };

    self.answered.push(AnsweredQuestion {
      question: question.clone(),
      user_answer: user_answer.to_string(),
      is_correct,
    });
    self.feedback_pending = true;

    Ok(feedback)
  }

  /// Move past the answered question: load the next one, or complete the
  /// session when the last answer is in. Invoked by the caller once its
  /// feedback delay has elapsed.
  pub fn advance(&mut self, rng: &mut impl Rng) -> Result<Phase, QuizError> {
    if !self.feedback_pending {
      return Err(QuizError::InvalidState("no answered question to advance past"));
    }
    self.feedback_pending = false;

    if self.answered.len() >= self.total {
      self.current = None;
      return Ok(Phase::Complete);
    }

    self.current = Some(match self.policy {
      SessionPolicy::FullCoverage => self
        .pending
        .pop()
        .ok_or(QuizError::InvalidState("question batch exhausted early"))?,
      SessionPolicy::FixedCount(_) => generator::generate(self.mode, &self.letters, rng)?,
    });

    Ok(Phase::Active)
  }

  /// Cumulative score, valid mid-session and at completion
  pub fn score(&self) -> ScoreSummary {
    let correct = self.answered.iter().filter(|a| a.is_correct).count();
    let total = self.total;
    let percentage = if total > 0 {
      (100.0 * correct as f64 / total as f64).round() as u32
    } else {
      0
    };

    ScoreSummary {
      correct,
      total,
      percentage,
    }
  }

  /// Discard all state and rebuild with the original (or a newly supplied)
  /// mode under the same policy
  pub fn reset(&mut self, mode: Option<QuizMode>, rng: &mut impl Rng) -> Result<(), GenerationError> {
    let mode = mode.unwrap_or(self.mode);
    *self = Self::start(mode, &self.letters, self.policy, rng)?;
    Ok(())
  }

  /// Back control: results view once complete, otherwise abandon the session
  pub fn back_action(&self) -> NavigationSignal {
    match self.phase() {
      Phase::Complete => NavigationSignal::ShowResults,
      Phase::Active => NavigationSignal::ExitQuiz,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::content::ALPHABET;
  use crate::domain::LetterForms;
  use rand::rngs::StdRng;
  use rand::SeedableRng;

  fn test_letter(
    glyph: &'static str,
    name: &'static str,
    translit: &'static str,
    forms: [&'static str; 4],
  ) -> LetterEntry {
    LetterEntry {
      glyph,
      name,
      transliteration: translit,
      example_word: "",
      example_translation: "",
      example_meaning: "",
      forms: LetterForms {
        isolated: forms[0],
        initial: forms[1],
        medial: forms[2],
        word_final: forms[3],
      },
    }
  }

  fn five_letters() -> Vec<LetterEntry> {
    vec![
      test_letter("ا", "Alif", "a", ["ا", "ا", "ـا", "ـا"]),
      test_letter("ب", "Ba", "b", ["ب", "بـ", "ـبـ", "ـب"]),
      test_letter("ت", "Ta", "t", ["ت", "تـ", "ـتـ", "ـت"]),
      test_letter("ث", "Tha", "th", ["ث", "ثـ", "ـثـ", "ـث"]),
      test_letter("ج", "Jim", "j", ["ج", "جـ", "ـجـ", "ـج"]),
    ]
  }

  fn answer_current_correctly(session: &mut QuizSession, rng: &mut StdRng) -> bool {
    let correct = session.current().unwrap().correct_answer.clone();
    let feedback = session.submit_answer(&correct).unwrap();
    session.advance(rng).unwrap();
    feedback.is_correct
  }

  #[test]
  fn test_fixed_count_all_correct_scores_100() {
    // Reference set of 5 known letters, name→letter, 5 questions, all
    // answered with the exact correct glyph
    let letters = five_letters();
    let mut rng = StdRng::seed_from_u64(21);
    let mut session = QuizSession::start(
      QuizMode::NameToLetter,
      &letters,
      SessionPolicy::FixedCount(5),
      &mut rng,
    )
    .unwrap();

    for _ in 0..5 {
      assert!(answer_current_correctly(&mut session, &mut rng));
    }

    assert_eq!(session.phase(), Phase::Complete);
    assert_eq!(session.answered().len(), 5);
    assert_eq!(
      session.score(),
      ScoreSummary { correct: 5, total: 5, percentage: 100 }
    );
  }

  #[test]
  fn test_one_wrong_answer_is_logged() {
    let letters = five_letters();
    let mut rng = StdRng::seed_from_u64(22);
    let mut session = QuizSession::start(
      QuizMode::NameToLetter,
      &letters,
      SessionPolicy::FixedCount(5),
      &mut rng,
    )
    .unwrap();

    // Answer the first question with a deliberately wrong glyph
    let correct = session.current().unwrap().correct_answer.clone();
    let wrong = if correct == "ا" { "ب" } else { "ا" };
    let feedback = session.submit_answer(wrong).unwrap();
    assert!(!feedback.is_correct);
    assert_eq!(feedback.correct_answer, correct);
    session.advance(&mut rng).unwrap();

    for _ in 0..4 {
      answer_current_correctly(&mut session, &mut rng);
    }

    assert!(!session.answered()[0].is_correct);
    assert_eq!(session.answered()[0].user_answer, wrong);
    let score = session.score();
    assert_eq!(score.correct, 4);
    assert_eq!(score.percentage, 80);
  }

  #[test]
  fn test_full_coverage_session() {
    let mut rng = StdRng::seed_from_u64(23);
    let mut session = QuizSession::start(
      QuizMode::TransliterationToLetter,
      &ALPHABET,
      SessionPolicy::FullCoverage,
      &mut rng,
    )
    .unwrap();

    assert_eq!(session.total(), ALPHABET.len());

    while session.phase() == Phase::Active {
      answer_current_correctly(&mut session, &mut rng);
    }

    let score = session.score();
    assert_eq!(score.correct, ALPHABET.len());
    assert_eq!(score.percentage, 100);
    assert!(session.current().is_none());
  }

  #[test]
  fn test_zero_correct_scores_zero_percent() {
    let letters = five_letters();
    let mut rng = StdRng::seed_from_u64(24);
    let mut session = QuizSession::start(
      QuizMode::LetterToName,
      &letters,
      SessionPolicy::FixedCount(4),
      &mut rng,
    )
    .unwrap();

    for _ in 0..4 {
      session.submit_answer("definitely wrong").unwrap();
      session.advance(&mut rng).unwrap();
    }

    assert_eq!(
      session.score(),
      ScoreSummary { correct: 0, total: 4, percentage: 0 }
    );
  }

  #[test]
  fn test_typed_answers_accept_case_and_whitespace_variants() {
    let letters = five_letters();
    let mut rng = StdRng::seed_from_u64(25);
    let mut session = QuizSession::start(
      QuizMode::LetterToName,
      &letters,
      SessionPolicy::FixedCount(3),
      &mut rng,
    )
    .unwrap();

    for variant in ["upper", "spaced", "lower"] {
      let correct = session.current().unwrap().correct_answer.clone();
      let answer = match variant {
        "upper" => correct.to_uppercase(),
        "spaced" => format!("  {}  ", correct),
        _ => correct.to_lowercase(),
      };
      let feedback = session.submit_answer(&answer).unwrap();
      assert!(feedback.is_correct, "variant {} rejected", variant);
      session.advance(&mut rng).unwrap();
    }
  }

  #[test]
  fn test_choice_answers_require_exact_option() {
    let letters = five_letters();
    let mut rng = StdRng::seed_from_u64(26);
    let mut session = QuizSession::start(
      QuizMode::NameToLetter,
      &letters,
      SessionPolicy::FixedCount(1),
      &mut rng,
    )
    .unwrap();

    let correct = session.current().unwrap().correct_answer.clone();
    // Anything that is not exactly a rendered option string is wrong
    let feedback = session.submit_answer(&format!("{}x", correct)).unwrap();
    assert!(!feedback.is_correct);
  }

  #[test]
  fn test_double_submission_rejected() {
    let letters = five_letters();
    let mut rng = StdRng::seed_from_u64(27);
    let mut session = QuizSession::start(
      QuizMode::NameToLetter,
      &letters,
      SessionPolicy::FixedCount(2),
      &mut rng,
    )
    .unwrap();

    let correct = session.current().unwrap().correct_answer.clone();
    session.submit_answer(&correct).unwrap();

    let err = session.submit_answer(&correct).unwrap_err();
    assert!(matches!(err, QuizError::InvalidState(_)));
    assert_eq!(session.answered().len(), 1, "double submit mutated the log");
  }

  #[test]
  fn test_submit_after_complete_rejected() {
    let letters = five_letters();
    let mut rng = StdRng::seed_from_u64(28);
    let mut session = QuizSession::start(
      QuizMode::NameToLetter,
      &letters,
      SessionPolicy::FixedCount(1),
      &mut rng,
    )
    .unwrap();

    answer_current_correctly(&mut session, &mut rng);
    assert_eq!(session.phase(), Phase::Complete);

    let err = session.submit_answer("ا").unwrap_err();
    assert!(matches!(err, QuizError::InvalidState(_)));
    assert_eq!(session.answered().len(), 1);
  }

  #[test]
  fn test_advance_without_submission_rejected() {
    let letters = five_letters();
    let mut rng = StdRng::seed_from_u64(29);
    let mut session = QuizSession::start(
      QuizMode::NameToLetter,
      &letters,
      SessionPolicy::FixedCount(2),
      &mut rng,
    )
    .unwrap();

    let err = session.advance(&mut rng).unwrap_err();
    assert!(matches!(err, QuizError::InvalidState(_)));
  }

  #[test]
  fn test_score_available_mid_session_and_during_feedback() {
    let letters = five_letters();
    let mut rng = StdRng::seed_from_u64(30);
    let mut session = QuizSession::start(
      QuizMode::NameToLetter,
      &letters,
      SessionPolicy::FixedCount(4),
      &mut rng,
    )
    .unwrap();

    answer_current_correctly(&mut session, &mut rng);
    assert_eq!(session.score().correct, 1);
    assert_eq!(session.score().total, 4);

    // Between submit and advance the score must still be readable
    let correct = session.current().unwrap().correct_answer.clone();
    session.submit_answer(&correct).unwrap();
    assert!(session.feedback_pending());
    assert_eq!(session.score().correct, 2);
  }

  #[test]
  fn test_reset_returns_to_active_with_cleared_log() {
    let letters = five_letters();
    let mut rng = StdRng::seed_from_u64(31);
    let mut session = QuizSession::start(
      QuizMode::NameToLetter,
      &letters,
      SessionPolicy::FixedCount(2),
      &mut rng,
    )
    .unwrap();

    answer_current_correctly(&mut session, &mut rng);
    answer_current_correctly(&mut session, &mut rng);
    assert_eq!(session.phase(), Phase::Complete);

    session.reset(None, &mut rng).unwrap();
    assert_eq!(session.phase(), Phase::Active);
    assert!(session.answered().is_empty());
    assert!(session.current().is_some());
    assert_eq!(session.mode(), QuizMode::NameToLetter);
  }

  #[test]
  fn test_reset_with_new_mode() {
    let letters = five_letters();
    let mut rng = StdRng::seed_from_u64(32);
    let mut session = QuizSession::start(
      QuizMode::NameToLetter,
      &letters,
      SessionPolicy::FixedCount(2),
      &mut rng,
    )
    .unwrap();

    session.reset(Some(QuizMode::LetterToName), &mut rng).unwrap();
    assert_eq!(session.mode(), QuizMode::LetterToName);
    assert!(session.current().unwrap().options.is_empty());
  }

  #[test]
  fn test_back_action_by_phase() {
    let letters = five_letters();
    let mut rng = StdRng::seed_from_u64(33);
    let mut session = QuizSession::start(
      QuizMode::NameToLetter,
      &letters,
      SessionPolicy::FixedCount(1),
      &mut rng,
    )
    .unwrap();

    assert_eq!(session.back_action(), NavigationSignal::ExitQuiz);
    answer_current_correctly(&mut session, &mut rng);
    assert_eq!(session.back_action(), NavigationSignal::ShowResults);
  }

  #[test]
  fn test_empty_fixed_count_session() {
    let letters = five_letters();
    let mut rng = StdRng::seed_from_u64(34);
    let session = QuizSession::start(
      QuizMode::NameToLetter,
      &letters,
      SessionPolicy::FixedCount(0),
      &mut rng,
    )
    .unwrap();

    assert_eq!(session.phase(), Phase::Complete);
    assert!(session.current().is_none());
    assert_eq!(
      session.score(),
      ScoreSummary { correct: 0, total: 0, percentage: 0 }
    );
  }

  #[test]
  fn test_start_fails_on_empty_reference_set() {
    let mut rng = StdRng::seed_from_u64(35);
    let result = QuizSession::start(
      QuizMode::NameToLetter,
      &[],
      SessionPolicy::FullCoverage,
      &mut rng,
    );
    assert_eq!(result.unwrap_err(), GenerationError::EmptyReferenceSet);
  }

  #[test]
  fn test_full_coverage_uses_each_letter_once() {
    let letters = five_letters();
    let mut rng = StdRng::seed_from_u64(36);
    let mut session = QuizSession::start(
      QuizMode::NameToLetter,
      &letters,
      SessionPolicy::FullCoverage,
      &mut rng,
    )
    .unwrap();

    let mut seen = Vec::new();
    while session.phase() == Phase::Active {
      seen.push(session.current().unwrap().entry.glyph);
      answer_current_correctly(&mut session, &mut rng);
    }

    seen.sort_unstable();
    let mut expected: Vec<&str> = letters.iter().map(|l| l.glyph).collect();
    expected.sort_unstable();
    assert_eq!(seen, expected);
  }
}
