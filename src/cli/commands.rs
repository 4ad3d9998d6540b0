//! CLI command definitions and handlers

use clap::Subcommand;
use tracing::info;

use crate::core::client::ProviderClient;
use crate::core::config::RelayConfig;
use crate::core::models::TextRequest;
use crate::core::relay::TranslationRelay;

/// Commands for the translation relay
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start HTTP API server
    Server {
        /// Bind address (default: HOST env or 0.0.0.0)
        #[arg(long)]
        host: Option<String>,

        /// Listen port (default: PORT env or 8000)
        #[arg(short, long)]
        port: Option<u16>,

        /// Enable debug mode
        #[arg(long)]
        debug: bool,
    },

    /// Translate one piece of Arabic text and print the result as JSON
    Translate {
        /// Text to translate
        text: String,
    },
}

/// Handle server command
pub async fn handle_server(
    mut config: RelayConfig,
    host: Option<String>,
    port: Option<u16>,
) -> anyhow::Result<()> {
    use crate::server::api::run_server;

    if let Some(host) = host {
        config.host = host;
    }
    if let Some(port) = port {
        config.port = port;
    }

    info!("Starting HTTP server on {}", config.bind_address());
    println!("🚀 Server starting on http://{}", config.bind_address());

    run_server(config).await
}

/// Handle one-shot translate command
pub async fn handle_translate(config: RelayConfig, text: String) -> anyhow::Result<()> {
    let relay = TranslationRelay::new(ProviderClient::initialize(&config));
    let result = relay.translate(TextRequest { text }).await;

    println!("{}", serde_json::to_string_pretty(&result)?);

    Ok(())
}
