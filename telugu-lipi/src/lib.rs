//! Telugu text digitization pipeline
//!
//! Takes an image of Telugu-script text, extracts the text through a
//! pluggable recognition backend, produces a best-effort English gloss via
//! dictionary and suffix-rule substitution, and summarizes both languages
//! with theme-keyword heuristics.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use telugu_lipi::{Pipeline, ProcessingMode, SampleMode, SampleRecognizer};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let pipeline = Pipeline::new(Arc::new(SampleRecognizer::new(SampleMode::Rotate)));
//!     let image = std::fs::read("note.jpg")?;
//!     let result = pipeline.process_image(&image, ProcessingMode::Summarize).await?;
//!     println!("{}", result.original_text);
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod grammar;
pub mod lexicon;
pub mod link;
pub mod pipeline;
pub mod recognize;
pub mod summarize;
pub mod theme;
pub mod translate;


// Re-export main types for convenient access
pub use error::{LipiError, LipiResult};
pub use grammar::{GrammarRule, apply_all, suffix_rules};
pub use lexicon::Lexicon;
pub use link::{external_translation_url, normalize_language, validate_language};
pub use pipeline::{
    Pipeline, PipelineConfig, ProcessingMode, ProcessingResult, RECOGNITION_PLACEHOLDER,
    RecognitionPolicy,
};
pub use recognize::{RemoteOcrProvider, SampleMode, SampleRecognizer, TextRecognizer};
pub use summarize::{Summarizer, SummaryLanguage};
pub use theme::{Theme, ThemeClassifier};
pub use translate::{GlossTranslator, change_ratio, contextual_gloss};
