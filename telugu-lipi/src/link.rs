//! External translation deep link
//!
//! The pipeline does not call a translation API; for full-sentence
//! translation it hands the user a deep link into a public translation
//! service with the original text carried in the query string. The link is
//! never fetched by this crate.

use crate::error::{LipiError, LipiResult};
use url::Url;

/// Base URL of the external translation service.
pub const TRANSLATION_BASE_URL: &str = "https://translate.google.com/";

/// Normalize a language code by stripping region information
///
/// Converts BCP 47 style codes to the bare language subtag:
/// - `te-IN` → `te`
/// - `en-US` → `en`
/// - `te` → `te` (unchanged)
pub fn normalize_language(code: &str) -> String {
    code.split('-').next().unwrap_or(code).to_lowercase()
}

/// Validate that a language code is in acceptable format
///
/// Accepts alphanumeric characters, hyphens, and underscores only.
pub fn validate_language(code: &str) -> LipiResult<()> {
    if code.is_empty() {
        return Err(LipiError::InvalidLanguage(
            "Language code is empty".to_string(),
        ));
    }

    if !code
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(LipiError::InvalidLanguage(format!(
            "Invalid characters in language code: {}",
            code
        )));
    }

    Ok(())
}

/// Build the deep link for translating `text` from `source` to `target`.
///
/// The text lands percent-encoded in the `text` query parameter:
/// `https://translate.google.com/?sl=te&tl=en&text=…&op=translate`
pub fn external_translation_url(source: &str, target: &str, text: &str) -> LipiResult<String> {
    validate_language(source)?;
    validate_language(target)?;

    let url = Url::parse_with_params(
        TRANSLATION_BASE_URL,
        &[
            ("sl", normalize_language(source)),
            ("tl", normalize_language(target)),
            ("text", text.to_string()),
            ("op", "translate".to_string()),
        ],
    )
    .map_err(|e| LipiError::ConfigError(format!("Failed to build translation URL: {}", e)))?;

    Ok(url.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_language() {
        assert_eq!(normalize_language("te-IN"), "te");
        assert_eq!(normalize_language("en-US"), "en");
        assert_eq!(normalize_language("TE"), "te");
        assert_eq!(normalize_language("en"), "en");
    }

    #[test]
    fn test_validate_language() {
        assert!(validate_language("te").is_ok());
        assert!(validate_language("en-US").is_ok());
        assert!(validate_language("").is_err());
        assert!(validate_language("te@IN").is_err());
    }

    #[test]
    fn test_url_shape() {
        let url = external_translation_url("te", "en", "నమస్కారం").unwrap();
        assert!(url.starts_with("https://translate.google.com/?sl=te&tl=en&text="));
        assert!(url.ends_with("&op=translate"));
    }

    #[test]
    fn test_text_round_trips_through_encoding() {
        let url = external_translation_url("te", "en", "పరీక్ష").unwrap();
        let parsed = Url::parse(&url).unwrap();
        let text = parsed
            .query_pairs()
            .find(|(k, _)| k == "text")
            .map(|(_, v)| v.into_owned())
            .unwrap();
        assert_eq!(text, "పరీక్ష");
    }

    #[test]
    fn test_region_codes_normalized_into_link() {
        let url = external_translation_url("te-IN", "en-US", "అది").unwrap();
        assert!(url.contains("sl=te"));
        assert!(url.contains("tl=en"));
    }

    #[test]
    fn test_invalid_code_rejected() {
        assert!(external_translation_url("t e", "en", "x").is_err());
    }
}
