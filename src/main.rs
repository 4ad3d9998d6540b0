//! Main entry point for the translation relay

#![forbid(unsafe_code)]

use clap::Parser;
use dotenvy::dotenv;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use translation_relay::cli::commands::{self, Commands};
use translation_relay::RelayConfig;

/// Arabic to English translation relay
#[derive(Parser, Debug)]
#[command(name = "translation-relay", version, about, long_about = None)]
struct Args {
    /// Google API key (optional, defaults to GOOGLE_TRANSLATE_API_KEY / GOOGLE_API_KEY env var)
    #[arg(long)]
    api_key: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    let args = Args::parse();

    let debug = args.verbose || matches!(args.command, Some(Commands::Server { debug: true, .. }));
    let log_level = if debug { "debug" } else { "info" };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("translation_relay={},tower_http={}", log_level, log_level).into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut config = RelayConfig::from_env()?;
    if let Some(api_key) = args.api_key {
        config = config.with_api_key(api_key);
    }

    match args.command {
        Some(Commands::Server { host, port, .. }) => {
            commands::handle_server(config, host, port).await?;
        }
        Some(Commands::Translate { text }) => {
            commands::handle_translate(config, text).await?;
        }
        None => {
            commands::handle_server(config, None, None).await?;
        }
    }

    Ok(())
}
