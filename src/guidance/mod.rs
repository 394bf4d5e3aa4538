//! Guidance and enrichment contracts.
//!
//! Mirrors the two assisted flows of the dashboard: recommending Names for a
//! learner's situation, and enriching a saved dhikr with script and
//! translation. `GuidanceProvider` is the seam for a hosted text model; the
//! in-repo [`LexicalGuidance`] implementation is deterministic keyword and
//! token matching over the same reference data, so the feature works offline
//! and is exactly testable.

use crate::config;
use crate::content::{DivineName, ALLAH_NAMES};

#[derive(Debug, Clone, PartialEq)]
pub enum GuidanceError {
    /// The prompt was empty after trimming
    EmptyPrompt,
    /// Nothing in the reference data relates to the prompt
    NoMatch,
}

impl std::fmt::Display for GuidanceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyPrompt => write!(f, "guidance prompt is empty"),
            Self::NoMatch => write!(f, "no matching guidance found"),
        }
    }
}

impl std::error::Error for GuidanceError {}

/// One recommended Name with the reason it was chosen
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendedName {
    pub id: u8,
    pub name: &'static str,
    pub arabic: &'static str,
    pub meaning: &'static str,
    pub reasoning: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GuidanceResponse {
    /// 1 to 3 recommended Names, best match first
    pub names: Vec<RecommendedName>,
}

/// Script, translation and transliteration for a recognized dhikr
#[derive(Debug, Clone, PartialEq)]
pub struct DhikrEnrichment {
    pub arabic_text: String,
    pub translation: String,
    pub transliteration: String,
}

pub trait GuidanceProvider {
    fn seek_guidance(&self, prompt: &str) -> Result<GuidanceResponse, GuidanceError>;
    fn enrich_dhikr(&self, dhikr: &str) -> Result<DhikrEnrichment, GuidanceError>;
}

// ==================== Lexical implementation ====================

/// Curated feeling/quality keywords mapped to the Names they point at.
/// Table-driven so coverage grows by data addition.
static GUIDANCE_KEYWORDS: &[(&str, &[u8])] = &[
    ("patience", &[99]),
    ("patient", &[99]),
    ("impatient", &[99]),
    ("forgive", &[34, 14]),
    ("forgiveness", &[34, 14]),
    ("sin", &[80, 82]),
    ("repent", &[80]),
    ("regret", &[80, 82]),
    ("lost", &[94, 98]),
    ("guidance", &[94, 98]),
    ("direction", &[94, 98]),
    ("confused", &[94, 46]),
    ("peace", &[5]),
    ("anxious", &[5, 52]),
    ("anxiety", &[5, 52]),
    ("worry", &[52, 55]),
    ("stress", &[5, 52]),
    ("love", &[47]),
    ("lonely", &[47, 55]),
    ("provision", &[17]),
    ("sustenance", &[17]),
    ("poverty", &[17, 89]),
    ("money", &[17, 89]),
    ("weak", &[53, 54]),
    ("strength", &[53, 54]),
    ("tired", &[53, 39]),
    ("mercy", &[1, 2]),
    ("merciful", &[1, 2]),
    ("fear", &[55, 38]),
    ("afraid", &[55, 38]),
    ("protection", &[38, 55]),
    ("unsafe", &[6, 38]),
    ("justice", &[29, 28]),
    ("wronged", &[29, 28]),
    ("doubt", &[6, 51]),
    ("faith", &[6, 51]),
    ("grief", &[83, 30]),
    ("sad", &[83, 30]),
    ("comfort", &[83, 30]),
    ("sick", &[60, 39]),
    ("healing", &[60]),
    ("knowledge", &[19, 46]),
    ("study", &[19, 46]),
    ("wisdom", &[46]),
    ("gratitude", &[35]),
    ("thankful", &[35]),
];

/// Recognized dhikr phrases for offline enrichment
static DHIKR_TABLE: &[(&str, &str, &str, &str)] = &[
    (
        "subhanallah",
        "سُبْحَانَ ٱللَّٰهِ",
        "Glory be to Allah.",
        "Subhanallah",
    ),
    (
        "alhamdulillah",
        "ٱلْحَمْدُ لِلَّٰهِ",
        "All praise is due to Allah.",
        "Alhamdulillah",
    ),
    (
        "allahu akbar",
        "ٱللَّٰهُ أَكْبَرُ",
        "Allah is the greatest.",
        "Allahu Akbar",
    ),
    (
        "la ilaha illallah",
        "لَا إِلَٰهَ إِلَّا ٱللَّٰهُ",
        "There is no deity but Allah.",
        "La ilaha illallah",
    ),
    (
        "astaghfirullah",
        "أَسْتَغْفِرُ ٱللَّٰهَ",
        "I seek forgiveness from Allah.",
        "Astaghfirullah",
    ),
    (
        "hasbunallahu wa ni'mal wakeel",
        "حَسْبُنَا ٱللَّهُ وَنِعْمَ ٱلْوَكِيلُ",
        "Sufficient for us is Allah, and He is the best Disposer of affairs.",
        "Hasbunallahu wa ni'mal wakeel",
    ),
];

/// Deterministic guidance over the 99 Names: keyword table hits score high,
/// word overlap with the recorded meanings breaks ties.
#[derive(Debug, Clone, Copy, Default)]
pub struct LexicalGuidance;

impl LexicalGuidance {
    pub fn new() -> Self {
        Self
    }

    fn score(prompt_words: &[String], name: &DivineName) -> u32 {
        let mut score = 0;

        for word in prompt_words {
            for (keyword, ids) in GUIDANCE_KEYWORDS {
                if word == keyword && ids.contains(&name.id) {
                    score += 3;
                }
            }
        }

        let meaning = name.meaning.to_lowercase();
        let meaning_words: Vec<&str> = meaning
            .split(|c: char| !c.is_alphanumeric())
            .filter(|w| w.len() >= 4)
            .collect();
        for word in prompt_words {
            if word.len() >= 4 && meaning_words.contains(&word.as_str()) {
                score += 1;
            }
        }

        score
    }
}

fn prompt_words(prompt: &str) -> Vec<String> {
    prompt
        .to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(|w| w.to_string())
        .collect()
}

fn normalize_dhikr(s: &str) -> String {
    s.to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == ' ' || *c == '\'')
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

impl GuidanceProvider for LexicalGuidance {
    fn seek_guidance(&self, prompt: &str) -> Result<GuidanceResponse, GuidanceError> {
        let words = prompt_words(prompt);
        if words.is_empty() {
            return Err(GuidanceError::EmptyPrompt);
        }

        let mut scored: Vec<(u32, &DivineName)> = ALLAH_NAMES
            .iter()
            .map(|name| (Self::score(&words, name), name))
            .filter(|(score, _)| *score > 0)
            .collect();

        if scored.is_empty() {
            return Err(GuidanceError::NoMatch);
        }

        // Stable by id so equal scores keep catalog order
        scored.sort_by(|a, b| b.0.cmp(&a.0).then(a.1.id.cmp(&b.1.id)));
        scored.truncate(config::GUIDANCE_MAX_NAMES);

        let names = scored
            .into_iter()
            .map(|(_, name)| RecommendedName {
                id: name.id,
                name: name.name,
                arabic: name.arabic,
                meaning: name.meaning,
                reasoning: format!(
                    "{} — {}. Reflecting on this Name speaks to what you described.",
                    name.name, name.meaning
                ),
            })
            .collect();

        Ok(GuidanceResponse { names })
    }

    fn enrich_dhikr(&self, dhikr: &str) -> Result<DhikrEnrichment, GuidanceError> {
        let normalized = normalize_dhikr(dhikr);
        if normalized.is_empty() {
            return Err(GuidanceError::EmptyPrompt);
        }

        for (key, arabic, translation, transliteration) in DHIKR_TABLE {
            if normalized == *key {
                return Ok(DhikrEnrichment {
                    arabic_text: arabic.to_string(),
                    translation: translation.to_string(),
                    transliteration: transliteration.to_string(),
                });
            }
        }

        Err(GuidanceError::NoMatch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patience_recommends_as_sabur() {
        let response = LexicalGuidance::new().seek_guidance("I need patience").unwrap();
        assert!(!response.names.is_empty());
        assert_eq!(response.names[0].id, 99);
        assert_eq!(response.names[0].name, "Aṣ-Ṣabūr");
        assert!(response.names[0].reasoning.contains("Aṣ-Ṣabūr"));
    }

    #[test]
    fn test_meaning_overlap_scores_without_keyword() {
        // "light" appears only in An-Nūr's meaning, not the keyword table
        let response = LexicalGuidance::new().seek_guidance("show me the light").unwrap();
        assert!(response.names.iter().any(|n| n.id == 93));
    }

    #[test]
    fn test_at_most_three_names() {
        let response = LexicalGuidance::new()
            .seek_guidance("I feel lost and anxious, seeking forgiveness and mercy")
            .unwrap();
        assert!(response.names.len() <= 3);
        assert!(!response.names.is_empty());
    }

    #[test]
    fn test_empty_prompt_is_an_error() {
        assert_eq!(
            LexicalGuidance::new().seek_guidance("   "),
            Err(GuidanceError::EmptyPrompt)
        );
    }

    #[test]
    fn test_unrelated_prompt_is_no_match() {
        assert_eq!(
            LexicalGuidance::new().seek_guidance("zzzz qqqq"),
            Err(GuidanceError::NoMatch)
        );
    }

    #[test]
    fn test_guidance_is_deterministic() {
        let provider = LexicalGuidance::new();
        let a = provider.seek_guidance("patience in grief").unwrap();
        let b = provider.seek_guidance("patience in grief").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_enrich_known_dhikr() {
        let enriched = LexicalGuidance::new().enrich_dhikr("Alhamdulillah").unwrap();
        assert_eq!(enriched.translation, "All praise is due to Allah.");
        assert_eq!(enriched.transliteration, "Alhamdulillah");
        assert!(!enriched.arabic_text.is_empty());
    }

    #[test]
    fn test_enrich_is_case_and_punctuation_tolerant() {
        let provider = LexicalGuidance::new();
        assert!(provider.enrich_dhikr("  ALHAMDULILLAH! ").is_ok());
        assert!(provider.enrich_dhikr("Allahu Akbar").is_ok());
    }

    #[test]
    fn test_enrich_unknown_dhikr() {
        assert_eq!(
            LexicalGuidance::new().enrich_dhikr("my own phrase"),
            Err(GuidanceError::NoMatch)
        );
    }
}
