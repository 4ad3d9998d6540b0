//! The translation relay: fixed-pair translation with in-band failures

use tracing::debug;

use crate::core::client::ProviderClient;
use crate::core::models::{TextRequest, TranslationResult};

/// Liveness payload message
pub const HEALTH_MESSAGE: &str = "Backend running";

/// Relays text to the provider and pairs the answer with the original
#[derive(Debug, Clone)]
pub struct TranslationRelay {
    provider: ProviderClient,
}

impl TranslationRelay {
    pub fn new(provider: ProviderClient) -> Self {
        Self { provider }
    }

    /// Fixed acknowledgement that the process is up
    pub fn health(&self) -> &'static str {
        HEALTH_MESSAGE
    }

    /// Diagnostic echo; never touches the provider
    pub fn echo(&self, request: &TextRequest) -> String {
        format!("Received: {}", request.text)
    }

    /// Translate Arabic to English. Never fails: provider problems are
    /// reported through `translated_text` and the source is always echoed.
    pub async fn translate(&self, request: TextRequest) -> TranslationResult {
        let outcome = self.provider.translate(&request.text).await;
        debug!("Translation finished, success={}", outcome.is_success());
        TranslationResult::new(request.text, outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::client::TranslationProvider;
    use crate::core::errors::{Result, TranslationError};
    use crate::core::models::{TranslationRequest, NOT_AUTHENTICATED_MESSAGE};
    use async_trait::async_trait;

    #[derive(Debug)]
    struct Upper;

    #[async_trait]
    impl TranslationProvider for Upper {
        async fn translate(&self, request: &TranslationRequest) -> Result<String> {
            Ok(request.text.to_uppercase())
        }

        fn name(&self) -> &str {
            "upper"
        }
    }

    #[derive(Debug)]
    struct Broken;

    #[async_trait]
    impl TranslationProvider for Broken {
        async fn translate(&self, _request: &TranslationRequest) -> Result<String> {
            Err(TranslationError::QuotaExceededError {
                message: "Daily Limit Exceeded".to_string(),
            })
        }

        fn name(&self) -> &str {
            "broken"
        }
    }

    fn request(text: &str) -> TextRequest {
        TextRequest {
            text: text.to_string(),
        }
    }

    #[test]
    fn test_echo_and_health() {
        let relay = TranslationRelay::new(ProviderClient::Unavailable {
            reason: "none".to_string(),
        });

        assert_eq!(relay.health(), "Backend running");
        assert_eq!(relay.echo(&request("")), "Received: ");
        assert_eq!(relay.echo(&request("سلام")), "Received: سلام");
    }

    #[tokio::test]
    async fn test_translate_success_is_untransformed() {
        let relay = TranslationRelay::new(ProviderClient::ready(Upper));
        let result = relay.translate(request("peace")).await;

        assert_eq!(result.source_text, "peace");
        assert_eq!(result.translated_text, "PEACE");
    }

    #[tokio::test]
    async fn test_translate_unavailable_uses_sentinel() {
        let relay = TranslationRelay::new(ProviderClient::Unavailable {
            reason: "none".to_string(),
        });
        let result = relay.translate(request("مرحبا")).await;

        assert_eq!(result.source_text, "مرحبا");
        assert_eq!(result.translated_text, NOT_AUTHENTICATED_MESSAGE);
    }

    #[tokio::test]
    async fn test_translate_failure_embeds_detail() {
        let relay = TranslationRelay::new(ProviderClient::ready(Broken));
        let result = relay.translate(request("")).await;

        assert_eq!(result.source_text, "");
        assert_eq!(
            result.translated_text,
            "Error translating: Quota exceeded: Daily Limit Exceeded"
        );
    }
}
