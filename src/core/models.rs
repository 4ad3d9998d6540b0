//! Core data models for translation

use serde::{Deserialize, Serialize};

/// Source language sent to the provider (Arabic)
pub const SOURCE_LANGUAGE: &str = "ar";

/// Target language sent to the provider (English)
pub const TARGET_LANGUAGE: &str = "en";

/// Placed in `english` when the provider client failed to initialize
pub const NOT_AUTHENTICATED_MESSAGE: &str =
    "Translation Service Not Authenticated. Check Server Logs.";

/// Inbound payload shared by `/test` and `/arabic-to-english`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextRequest {
    /// Source-language content, forwarded as-is
    pub text: String,
}

/// Translation request handed to a provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationRequest {
    pub text: String,
    pub source_lang: String,
    pub target_lang: String,
}

impl TranslationRequest {
    /// Build a request for the relay's fixed language pair
    pub fn arabic_to_english(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            source_lang: SOURCE_LANGUAGE.to_string(),
            target_lang: TARGET_LANGUAGE.to_string(),
        }
    }
}

/// What happened to a single Translate call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslationOutcome {
    /// Provider returned this text
    Translated(String),
    /// Provider client never initialized
    ProviderUnavailable,
    /// Provider call failed with this detail
    ProviderError(String),
}

impl TranslationOutcome {
    /// Render the outcome as displayable text for the wire
    pub fn into_display_text(self) -> String {
        match self {
            TranslationOutcome::Translated(text) => text,
            TranslationOutcome::ProviderUnavailable => NOT_AUTHENTICATED_MESSAGE.to_string(),
            TranslationOutcome::ProviderError(detail) => format!("Error translating: {}", detail),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, TranslationOutcome::Translated(_))
    }
}

/// Original text paired with its translation (or a failure message)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationResult {
    /// Echo of the input
    #[serde(rename = "arabic")]
    pub source_text: String,
    /// Provider output or human-readable error
    #[serde(rename = "english")]
    pub translated_text: String,
}

impl TranslationResult {
    /// Pair the source text with an outcome
    pub fn new(source_text: String, outcome: TranslationOutcome) -> Self {
        Self {
            source_text,
            translated_text: outcome.into_display_text(),
        }
    }
}
