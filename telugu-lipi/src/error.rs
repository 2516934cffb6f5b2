/// Error types for the Telugu digitization pipeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LipiError {
    /// The recognition backend could not extract text from the image
    RecognitionError(String),
    /// Language code rejected by the deep-link builder
    InvalidLanguage(String),
    /// Missing or invalid configuration (endpoint, API key)
    ConfigError(String),
    /// Network failure while talking to the recognition service
    NetworkError(String),
    /// A stage failed; carries the processing mode that was running
    PipelineError { mode: String, message: String },
}

impl std::fmt::Display for LipiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LipiError::RecognitionError(msg) => write!(f, "Recognition error: {}", msg),
            LipiError::InvalidLanguage(msg) => write!(f, "Invalid language code: {}", msg),
            LipiError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            LipiError::NetworkError(msg) => write!(f, "Network error: {}", msg),
            LipiError::PipelineError { mode, message } => {
                write!(f, "Processing failed in {} mode: {}", mode, message)
            }
        }
    }
}

impl std::error::Error for LipiError {}

impl From<reqwest::Error> for LipiError {
    fn from(err: reqwest::Error) -> Self {
        LipiError::NetworkError(err.to_string())
    }
}

/// Result type for pipeline operations
pub type LipiResult<T> = Result<T, LipiError>;
