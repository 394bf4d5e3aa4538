//! Static reference content.
//!
//! Unlike the devotional records in `db` (which are per-user, mutable state),
//! everything in this module is fixed reference data compiled into the
//! binary:
//!
//! - **alphabet**: the 28 Arabic letters with their four positional forms
//! - **names**: the 99 Names of Allah
//! - **surahs**: full text of the surahs carried for the memorization toolbelt

pub mod alphabet;
pub mod names;
pub mod surahs;

pub use alphabet::ALPHABET;
pub use names::{DivineName, ALLAH_NAMES};
pub use surahs::{SurahText, Verse, SURAH_TEXTS};
