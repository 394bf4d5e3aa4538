pub mod devotion;
pub mod letter;

pub use devotion::{DhikrEntry, DhikrRecord, Streak, Surah};
pub use letter::{FormPosition, LetterEntry, LetterForms};
