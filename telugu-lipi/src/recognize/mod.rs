//! Text recognition backends
//!
//! Recognition is an external collaborator: the crate contains no OCR
//! algorithm of its own. The `TextRecognizer` trait abstracts over
//! backends so the pipeline can run against a deterministic sample corpus
//! or a remote pre-trained recognition service without changing shape.

use crate::error::LipiResult;
use async_trait::async_trait;

pub mod remote;
pub mod sample;

pub use remote::RemoteOcrProvider;
pub use sample::{SampleMode, SampleRecognizer};

/// Strategy trait for image-to-text backends.
///
/// The method is async because real backends are I/O bound; the rest of
/// the pipeline is pure synchronous computation.
#[async_trait]
pub trait TextRecognizer: Send + Sync {
    /// Extract the source-script text from raw PNG/JPEG bytes.
    ///
    /// Fails with a typed error when the backend cannot produce usable
    /// text; it never smuggles a diagnostic sentence in-band. The caller
    /// decides what a failure means (see `RecognitionPolicy`).
    async fn recognize(&self, image: &[u8]) -> LipiResult<String>;

    /// Name of this backend, for logging and diagnostics.
    fn recognizer_name(&self) -> &str;
}
