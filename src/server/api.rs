//! HTTP API server implementation

use axum::{
    extract::{Json, State},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::core::client::ProviderClient;
use crate::core::config::RelayConfig;
use crate::core::models::{TextRequest, TranslationResult};
use crate::core::relay::TranslationRelay;

/// Application state
#[derive(Clone)]
pub struct AppState {
    relay: Arc<TranslationRelay>,
}

impl AppState {
    /// Share a relay between all request tasks
    pub fn new(relay: TranslationRelay) -> Self {
        Self {
            relay: Arc::new(relay),
        }
    }
}

/// Health check response
#[derive(Serialize, Deserialize)]
struct HealthResponse {
    message: String,
}

/// Echo response
#[derive(Serialize, Deserialize)]
struct EchoResponse {
    reply: String,
}

/// Health check handler
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        message: state.relay.health().to_string(),
    })
}

/// Echo handler for client diagnostics
async fn echo(
    State(state): State<AppState>,
    Json(payload): Json<TextRequest>,
) -> Json<EchoResponse> {
    Json(EchoResponse {
        reply: state.relay.echo(&payload),
    })
}

/// Arabic to English handler; always 200, failures travel in `english`
async fn arabic_to_english(
    State(state): State<AppState>,
    Json(payload): Json<TextRequest>,
) -> Json<TranslationResult> {
    Json(state.relay.translate(payload).await)
}

/// Allow every origin, method and header, with credentials.
///
/// `*` is not permitted alongside credentials, so each list mirrors the request.
fn permissive_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

/// Build the router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health_check))
        .route("/test", post(echo))
        .route("/arabic-to-english", post(arabic_to_english))
        .layer(permissive_cors())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Run the HTTP server
pub async fn run_server(config: RelayConfig) -> anyhow::Result<()> {
    let provider = ProviderClient::initialize(&config);
    let state = AppState::new(TranslationRelay::new(provider));
    let app = create_router(state);

    // Bind address
    let addr: SocketAddr = config.bind_address().parse()?;

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
