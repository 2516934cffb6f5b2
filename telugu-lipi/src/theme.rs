//! Keyword-based theme classification
//!
//! Coarse topical tagging used by the summarizer to pick a canned summary.
//! Keyword sets are checked in a fixed priority order and the first
//! non-empty intersection wins. The diagnostic set is checked first so a
//! recognition-failure placeholder is never mistaken for content.

/// Coarse topical category of a passage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    /// Recognition-failure placeholder text
    Diagnostic,
    Education,
    Family,
    Friendship,
    /// Language learning and reading
    Literature,
    /// Everyday narration (places, outings, weather)
    Narrative,
    General,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Diagnostic => "diagnostic",
            Theme::Education => "education",
            Theme::Family => "family",
            Theme::Friendship => "friendship",
            Theme::Literature => "literature",
            Theme::Narrative => "narrative",
            Theme::General => "general",
        }
    }
}

/// One theme with its trigger keywords (English and Telugu mixed, all
/// lowercase; matching is case-insensitive substring containment).
#[derive(Debug, Clone)]
struct ThemeKeywordSet {
    theme: Theme,
    keywords: &'static [&'static str],
}

/// Priority-ordered theme classifier. Built once, read-only afterwards.
#[derive(Debug, Clone)]
pub struct ThemeClassifier {
    sets: Vec<ThemeKeywordSet>,
}

impl ThemeClassifier {
    pub fn new() -> Self {
        // Order matters: diagnostic first, then the thematic categories.
        let sets = vec![
            ThemeKeywordSet {
                theme: Theme::Diagnostic,
                keywords: &[
                    "could not",
                    "failed",
                    "unable",
                    "error",
                    "గుర్తించలేకపోయాము",
                    "దోషం",
                ],
            },
            ThemeKeywordSet {
                theme: Theme::Education,
                keywords: &[
                    "school",
                    "study",
                    "homework",
                    "exam",
                    "marks",
                    "పాఠశాల",
                    "చదువు",
                    "హోంవర్క్",
                    "పరీక్ష",
                    "మార్కులు",
                ],
            },
            ThemeKeywordSet {
                theme: Theme::Family,
                keywords: &[
                    "family",
                    "mother",
                    "father",
                    "mom",
                    "dad",
                    "brother",
                    "sister",
                    "కుటుంబం",
                    "తల్లి",
                    "తండ్రి",
                    "అమ్మ",
                    "నాన్న",
                    "తమ్ముడు",
                ],
            },
            ThemeKeywordSet {
                theme: Theme::Friendship,
                keywords: &[
                    "friends",
                    "games",
                    "park",
                    "played",
                    "స్నేహితులు",
                    "ఆట",
                    "పార్కు",
                ],
            },
            ThemeKeywordSet {
                theme: Theme::Literature,
                keywords: &[
                    "learning",
                    "words",
                    "language",
                    "book",
                    "నేర్చుకుంటున్నాను",
                    "పదాలు",
                    "భాష",
                    "పుస్తక",
                ],
            },
            ThemeKeywordSet {
                theme: Theme::Narrative,
                keywords: &[
                    "temple",
                    "village",
                    "weather",
                    "went",
                    "today",
                    "ఆలయం",
                    "ఊరి",
                    "వాతావరణం",
                    "ఈరోజు",
                ],
            },
        ];
        Self { sets }
    }

    /// Tag the text with the first theme whose keywords intersect it.
    ///
    /// Case-insensitive substring containment, not tokenized word match;
    /// deterministic for a given input.
    pub fn classify(&self, text: &str) -> Theme {
        let haystack = text.to_lowercase();
        for set in &self.sets {
            if set.keywords.iter().any(|k| haystack.contains(k)) {
                return set.theme;
            }
        }
        Theme::General
    }
}

impl Default for ThemeClassifier {
    fn default() -> Self {
        Self::new()
    }
}
