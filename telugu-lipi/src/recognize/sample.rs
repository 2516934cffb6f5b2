//! Deterministic sample recognizer
//!
//! An API-free backend for demos and tests, in the spirit of a mock
//! provider: it returns realistic Telugu passages without touching the
//! network. Selection is derived from the image bytes, so the same upload
//! always yields the same text.

use crate::error::{LipiError, LipiResult};
use crate::recognize::TextRecognizer;
use async_trait::async_trait;
use std::time::Duration;

/// Realistic handwritten-note style Telugu passages.
const SAMPLE_TEXTS: &[&str] = &[
    "నమస్కారం, నేను తెలుగు భాష నేర్చుకుంటున్నాను. ఇది చాలా అందమైన భాష. నా తల్లి తండ్రులు తెలుగులో మాట్లాడతారు.",
    "మా ఇల్లు హైదరాబాద్ లో ఉంది. నేను ప్రతిరోజూ పాఠశాలకు వెళ్తాను. సాయంత్రం ఇంటికి వచ్చి హోంవర్క్ చేస్తాను.",
    "నాకు తెలుగు పుస్తకాలు చదవడం చాలా ఇష్టం. గురువు చాలా మంచిగా చెప్పుతారు. నేను పరీక్షలో మంచి మార్కులు తెచ్చుకుంటాను.",
    "మా కుటుంబంలో అన్నా, అక్క, తమ్ముడు ఉన్నారు. మేము అందరం కలిసి భోజనం చేస్తాము. అమ్మ చాలా రుచిగా వంట చేస్తుంది.",
    "ఈరోజు వాతావరణం చాలా బాగుంది. నేను నా స్నేహితులతో కలిసి పార్కుకు వెళ్ళాను. మేము చాలా ఆటలు ఆడాము.",
    "నేను కొత్త తెలుగు పదాలు నేర్చుకుంటున్నాను. ప్రతిరోజూ దశ కొత్త పదాలు రాసుకుంటాను. గురువు చాలా సహాయం చేస్తారు.",
    "మా ఊరిలో చాలా అందమైన ఆలయం ఉంది. మేము వారంలో ఒకసారి అక్కడకు వెళ్తాము. అక్కడ చాలా శాంతిగా ఉంటుంది.",
];

/// Selection behavior of the sample backend.
#[derive(Debug, Clone)]
pub enum SampleMode {
    /// Pick a passage deterministically from the image bytes
    Rotate,
    /// Always return the passage at the given index (modulo corpus size)
    Fixed(usize),
    /// Simulate a backend failure
    Error(String),
}

/// Canned-corpus recognition backend.
#[derive(Debug, Clone)]
pub struct SampleRecognizer {
    mode: SampleMode,
    /// Optional simulated latency in milliseconds
    delay_ms: u64,
}

impl SampleRecognizer {
    pub fn new(mode: SampleMode) -> Self {
        Self { mode, delay_ms: 0 }
    }

    /// Add a simulated recognition delay, e.g. for UI testing.
    pub fn with_delay(mode: SampleMode, delay_ms: u64) -> Self {
        Self { mode, delay_ms }
    }

    /// Number of passages in the corpus.
    pub fn corpus_len() -> usize {
        SAMPLE_TEXTS.len()
    }

    async fn apply_delay(&self) {
        if self.delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;
        }
    }

    /// Fold the image bytes into a corpus index.
    fn index_for(image: &[u8]) -> usize {
        let sum: usize = image.iter().map(|&b| b as usize).sum();
        (sum + image.len()) % SAMPLE_TEXTS.len()
    }
}

#[async_trait]
impl TextRecognizer for SampleRecognizer {
    async fn recognize(&self, image: &[u8]) -> LipiResult<String> {
        self.apply_delay().await;

        match &self.mode {
            SampleMode::Error(msg) => Err(LipiError::RecognitionError(msg.clone())),
            _ if image.is_empty() => Err(LipiError::RecognitionError(
                "empty image input".to_string(),
            )),
            SampleMode::Fixed(index) => Ok(SAMPLE_TEXTS[index % SAMPLE_TEXTS.len()].to_string()),
            SampleMode::Rotate => Ok(SAMPLE_TEXTS[Self::index_for(image)].to_string()),
        }
    }

    fn recognizer_name(&self) -> &str {
        "Sample Recognizer"
    }
}
