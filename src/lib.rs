//! Translation Relay - Arabic to English over HTTP
//!
//! Accepts text on one endpoint, forwards it to Google Cloud Translation and
//! returns the translation next to the original. Provider failures are
//! reported inside the response body, never as HTTP errors.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod cli;
pub mod core;
pub mod server;

// Re-export key types for convenience
pub use crate::core::{
    client::{GoogleTranslator, ProviderClient, TranslationProvider},
    config::{Credentials, RelayConfig},
    errors::TranslationError,
    models::{TextRequest, TranslationOutcome, TranslationResult},
    relay::TranslationRelay,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
