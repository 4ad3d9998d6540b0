//! Provider client for Google Cloud Translation

use async_trait::async_trait;
use gcp_auth::{CustomServiceAccount, TokenProvider};
use reqwest::StatusCode;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info, warn};

use crate::core::config::{Credentials, RelayConfig};
use crate::core::errors::{Result, TranslationError};
use crate::core::models::{TranslationOutcome, TranslationRequest};

/// A remote service that turns source text into target-language text
#[async_trait]
pub trait TranslationProvider: Send + Sync + fmt::Debug {
    /// Translate one request, returning the provider's text untouched
    async fn translate(&self, request: &TranslationRequest) -> Result<String>;

    /// Name used in log lines
    fn name(&self) -> &str;
}

/// OAuth scope for Cloud Translation
pub const TRANSLATION_SCOPE: &str = "https://www.googleapis.com/auth/cloud-translation";

/// How each provider request is authenticated
#[derive(Clone)]
enum Auth {
    ApiKey(String),
    Bearer(String),
    ServiceAccount(Arc<CustomServiceAccount>),
}

/// Google Cloud Translation (v2 REST) provider
#[derive(Clone)]
pub struct GoogleTranslator {
    client: reqwest::Client,
    api_endpoint: String,
    auth: Auth,
}

impl fmt::Debug for GoogleTranslator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let auth = match self.auth {
            Auth::ApiKey(_) => "api-key",
            Auth::Bearer(_) => "access-token",
            Auth::ServiceAccount(_) => "service-account",
        };
        f.debug_struct("GoogleTranslator")
            .field("api_endpoint", &self.api_endpoint)
            .field("auth", &auth)
            .finish()
    }
}

impl GoogleTranslator {
    /// Create a new translator; fails when no credentials are configured
    pub fn new(config: &RelayConfig) -> Result<Self> {
        config.validate().map_err(|e| TranslationError::ConfigError {
            message: e.to_string(),
        })?;

        let auth = match &config.credentials {
            Some(Credentials::ApiKey(key)) => Auth::ApiKey(key.clone()),
            Some(Credentials::AccessToken(token)) => Auth::Bearer(token.clone()),
            Some(Credentials::ServiceAccountFile(path)) => {
                let account = CustomServiceAccount::from_file(path).map_err(|e| {
                    TranslationError::AuthenticationError {
                        message: format!("cannot load {}: {}", path.display(), e),
                    }
                })?;
                Auth::ServiceAccount(Arc::new(account))
            }
            None => {
                return Err(TranslationError::ConfigError {
                    message: "no credentials found; set GOOGLE_APPLICATION_CREDENTIALS, GOOGLE_TRANSLATE_API_KEY, GOOGLE_API_KEY or GOOGLE_OAUTH_ACCESS_TOKEN"
                        .to_string(),
                })
            }
        };

        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .pool_idle_timeout(Some(Duration::from_secs(30)))
            .pool_max_idle_per_host(10)
            .build()?;

        Ok(Self {
            client,
            api_endpoint: config.api_endpoint.clone(),
            auth,
        })
    }

    /// Send actual HTTP request
    async fn send_request(&self, request: &TranslationRequest) -> Result<String> {
        let body = serde_json::json!({
            "q": request.text,
            "source": request.source_lang,
            "target": request.target_lang,
            "format": "text",
        });

        let builder = self.client.post(&self.api_endpoint).json(&body);
        // Keep keys out of the URL: reqwest errors display it
        let builder = match &self.auth {
            Auth::ApiKey(key) => builder.header("x-goog-api-key", key),
            Auth::Bearer(token) => builder.bearer_auth(token),
            Auth::ServiceAccount(account) => {
                let token = account.token(&[TRANSLATION_SCOPE]).await.map_err(|e| {
                    TranslationError::AuthenticationError {
                        message: e.to_string(),
                    }
                })?;
                builder.bearer_auth(token.as_str())
            }
        };

        let response = builder.send().await.map_err(transport_error)?;
        let status = response.status();

        if status.is_success() {
            let json: serde_json::Value = response.json().await.map_err(|e| {
                if e.is_timeout() {
                    TranslationError::TimeoutError
                } else {
                    TranslationError::InvalidResponseError {
                        message: e.without_url().to_string(),
                    }
                }
            })?;

            let translation = json["data"]["translations"]
                .get(0)
                .and_then(|t| t["translatedText"].as_str())
                .ok_or_else(|| TranslationError::InvalidResponseError {
                    message: "No translation in response".to_string(),
                })?
                .to_string();

            if let Some(detected) = json["data"]["translations"][0]["detectedSourceLanguage"].as_str() {
                debug!("Provider detected source language: {}", detected);
            }

            Ok(translation)
        } else {
            // Read headers before the body consumes the response
            let retry_after = response
                .headers()
                .get(reqwest::header::RETRY_AFTER)
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.trim().parse::<u64>().ok());

            let error_text = response.text().await.unwrap_or_default();
            Err(classify_error(status, retry_after, &error_text))
        }
    }
}

#[async_trait]
impl TranslationProvider for GoogleTranslator {
    async fn translate(&self, request: &TranslationRequest) -> Result<String> {
        debug!(
            "Translating {} bytes {} -> {}",
            request.text.len(),
            request.source_lang,
            request.target_lang
        );
        self.send_request(request).await
    }

    fn name(&self) -> &str {
        "Google Cloud Translation"
    }
}

fn transport_error(e: reqwest::Error) -> TranslationError {
    if e.is_timeout() {
        TranslationError::TimeoutError
    } else {
        TranslationError::NetworkError {
            message: e.without_url().to_string(),
        }
    }
}

/// Map a non-2xx provider response onto the error taxonomy
fn classify_error(status: StatusCode, retry_after: Option<u64>, body: &str) -> TranslationError {
    // Google wraps failures as {"error": {"code", "message", "errors": [...]}}
    let message = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v["error"]["message"].as_str().map(|s| s.to_string()))
        .unwrap_or_else(|| body.to_string());

    let lowered = message.to_lowercase();

    match status {
        StatusCode::TOO_MANY_REQUESTS => TranslationError::RateLimitError { retry_after },
        StatusCode::UNAUTHORIZED => TranslationError::AuthenticationError { message },
        StatusCode::FORBIDDEN if lowered.contains("quota") || lowered.contains("limit") => {
            TranslationError::QuotaExceededError { message }
        }
        StatusCode::FORBIDDEN => TranslationError::AuthenticationError { message },
        _ => TranslationError::ApiError {
            status: status.as_u16(),
            message,
        },
    }
}

/// Process-wide handle to the translation provider
///
/// Built once at startup and never re-evaluated. A failed initialization
/// leaves the handle `Unavailable` for the life of the process.
#[derive(Debug, Clone)]
pub enum ProviderClient {
    /// Authenticated and ready to serve calls
    Ready(Arc<dyn TranslationProvider>),
    /// Initialization failed with this reason
    Unavailable {
        /// Why the client could not be built
        reason: String,
    },
}

impl ProviderClient {
    /// Attempt to build the Google client from configuration
    pub fn initialize(config: &RelayConfig) -> Self {
        match GoogleTranslator::new(config) {
            Ok(translator) => {
                info!("Initialized {} client ({})", translator.name(), config.api_endpoint);
                Self::Ready(Arc::new(translator))
            }
            Err(e) => {
                error!("Failed to initialize Google Translation client: {}", e);
                Self::Unavailable {
                    reason: e.to_string(),
                }
            }
        }
    }

    /// Wrap an already-built provider
    pub fn ready(provider: impl TranslationProvider + 'static) -> Self {
        Self::Ready(Arc::new(provider))
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    /// Translate Arabic text into English, recording failures instead of returning them
    pub async fn translate(&self, text: &str) -> TranslationOutcome {
        let provider = match self {
            Self::Ready(provider) => provider,
            Self::Unavailable { .. } => return TranslationOutcome::ProviderUnavailable,
        };

        let request = TranslationRequest::arabic_to_english(text);
        match provider.translate(&request).await {
            Ok(translation) => TranslationOutcome::Translated(translation),
            Err(e) => {
                warn!("{} API error: {}", provider.name(), e);
                TranslationOutcome::ProviderError(e.to_string())
            }
        }
    }
}
