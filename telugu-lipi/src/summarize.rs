//! Extractive summarization with theme-template override
//!
//! The fallback chain is deliberate: canned theme template, then sentences
//! carrying a salience cue phrase, then the first two sentences. This is
//! not statistical summarization.

use crate::theme::{Theme, ThemeClassifier};
use regex::Regex;

/// Which language the summary should be produced in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryLanguage {
    /// Summary of the original-script text
    Telugu,
    /// Summary of the translated gloss
    English,
}

/// Inputs shorter than this are returned unchanged (too short to summarize).
const MIN_SUMMARY_CHARS: usize = 30;

/// Sentence fragments shorter than this are discarded after splitting.
const MIN_SENTENCE_CHARS: usize = 6;

/// Phrases that mark a sentence as worth extracting.
const CUE_PHRASES: &[&str] = &[
    "I am",
    "We",
    "This is",
    "Today",
    "Every day",
    "నేను",
    "మేము",
    "ఈరోజు",
    "ప్రతిరోజూ",
];

/// Canned summary for a (theme, language) pair, when one exists.
fn template_for(theme: Theme, language: SummaryLanguage) -> Option<&'static str> {
    use SummaryLanguage::*;
    match (theme, language) {
        (Theme::Diagnostic, English) => {
            Some("The uploaded image did not yield readable text, so no content summary is available.")
        }
        (Theme::Diagnostic, Telugu) => Some("చిత్రం నుండి చదవగలిగే వచనం లభించలేదు."),
        (Theme::Education, English) => Some(
            "This text discusses education, school life, and academic activities in a student's daily routine.",
        ),
        (Theme::Education, Telugu) => {
            Some("ఈ వచనం విద్య మరియు పాఠశాల జీవితం గురించి చర్చిస్తుంది.")
        }
        (Theme::Family, English) => Some(
            "This text describes family relationships, home environment, and traditional family values.",
        ),
        (Theme::Family, Telugu) => {
            Some("ఈ వచనం కుటుంబ సంబంధాలు మరియు ఇంటి వాతావరణం గురించి వివరిస్తుంది.")
        }
        (Theme::Friendship, English) => Some(
            "This text talks about friendship, recreational activities, and social interactions.",
        ),
        (Theme::Friendship, Telugu) => {
            Some("ఈ వచనం స్నేహం మరియు వినోద కార్యకలాపాల గురించి మాట్లాడుతుంది.")
        }
        (Theme::Literature, English) => Some(
            "This text is about language learning, vocabulary building, and educational experiences.",
        ),
        (Theme::Literature, Telugu) => {
            Some("ఈ వచనం భాష నేర్చుకోవడం మరియు విద్యార్థి అనుభవాల గురించి చెబుతుంది.")
        }
        (Theme::Narrative, English) => Some(
            "This text narrates everyday experiences, places, and outings from the writer's life.",
        ),
        (Theme::Narrative, Telugu) => {
            Some("ఈ వచనం రోజువారీ జీవిత అనుభవాలు మరియు ప్రదేశాల గురించి తెలియజేస్తుంది.")
        }
        (Theme::General, _) => None,
    }
}

/// Sentence-level extractive summarizer. Build once, read-only afterwards.
#[derive(Debug, Clone)]
pub struct Summarizer {
    classifier: ThemeClassifier,
    /// Latin and Telugu sentence terminators
    sentence_split: Regex,
}

impl Summarizer {
    pub fn new() -> Self {
        Self {
            classifier: ThemeClassifier::new(),
            sentence_split: Regex::new(r"[.!?।]+").unwrap(),
        }
    }

    /// Summarize `text` in the requested language.
    ///
    /// Short inputs are returned unchanged; single-sentence inputs are
    /// returned trimmed. Everything else goes through the template → cue →
    /// lead fallback chain.
    pub fn summarize(&self, text: &str, language: SummaryLanguage) -> String {
        if text.chars().count() < MIN_SUMMARY_CHARS {
            return text.to_string();
        }

        let sentences = self.split_sentences(text);
        if sentences.len() <= 1 {
            return text.trim().to_string();
        }

        let theme = self.classifier.classify(text);
        if let Some(template) = template_for(theme, language) {
            return template.to_string();
        }

        let cued: Vec<&str> = sentences
            .iter()
            .map(|s| s.as_str())
            .filter(|s| CUE_PHRASES.iter().any(|cue| s.contains(cue)))
            .take(2)
            .collect();

        let chosen: Vec<&str> = if cued.is_empty() {
            sentences.iter().map(|s| s.as_str()).take(2).collect()
        } else {
            cued
        };

        format!("{}.", chosen.join(". "))
    }

    /// Split on sentence-terminal punctuation and drop short fragments.
    fn split_sentences(&self, text: &str) -> Vec<String> {
        self.sentence_split
            .split(text)
            .map(str::trim)
            .filter(|s| s.chars().count() >= MIN_SENTENCE_CHARS)
            .map(str::to_string)
            .collect()
    }
}

impl Default for Summarizer {
    fn default() -> Self {
        Self::new()
    }
}
