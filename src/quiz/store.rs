//! Simple in-memory storage for active quiz sessions.
//!
//! Stores QuizSession state keyed by session ID (from cookie). Sessions
//! auto-expire after a configurable duration of inactivity and are removed
//! outright when the learner exits the quiz; nothing is ever persisted.

use crate::config;
use crate::quiz::QuizSession;
use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use std::sync::{LazyLock, Mutex};

/// Session entry with last access time for expiration
struct SessionEntry {
  session: QuizSession,
  last_access: DateTime<Utc>,
}

/// Global session store
static SESSIONS: LazyLock<Mutex<HashMap<String, SessionEntry>>> =
  LazyLock::new(|| Mutex::new(HashMap::new()));

/// Fetch a session by ID, refreshing its access time
pub fn get(session_id: &str) -> Option<QuizSession> {
  let mut sessions = SESSIONS.lock().expect("Quiz session store lock poisoned");

  // Clean up expired sessions occasionally (~10% chance)
  if rand::random::<u8>() < config::QUIZ_SESSION_CLEANUP_THRESHOLD {
    cleanup_expired(&mut sessions);
  }

  let entry = sessions.get_mut(session_id)?;
  entry.last_access = Utc::now();
  Some(entry.session.clone())
}

/// Insert or replace a session
pub fn put(session_id: &str, session: QuizSession) {
  let mut sessions = SESSIONS.lock().expect("Quiz session store lock poisoned");
  sessions.insert(
    session_id.to_string(),
    SessionEntry {
      session,
      last_access: Utc::now(),
    },
  );
}

/// Drop a session (learner exited the quiz)
pub fn remove(session_id: &str) {
  let mut sessions = SESSIONS.lock().expect("Quiz session store lock poisoned");
  sessions.remove(session_id);
}

/// Clean up expired sessions
fn cleanup_expired(sessions: &mut HashMap<String, SessionEntry>) {
  let expiry = Utc::now() - Duration::hours(config::QUIZ_SESSION_EXPIRY_HOURS);
  sessions.retain(|_, entry| entry.last_access > expiry);
}

/// Generate a new session ID
pub fn generate_session_id() -> String {
  use rand::Rng;
  let mut rng = rand::rng();
  (0..32)
    .map(|_| {
      let idx = rng.random_range(0..36);
      if idx < 10 {
        (b'0' + idx) as char
      } else {
        (b'a' + idx - 10) as char
      }
    })
    .collect()
}
