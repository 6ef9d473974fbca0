//! CivicConnect API server binary.
//!
//! Serves the chat endpoints and forwards prompts to the Gemini API.

use std::sync::Arc;

use civic_api::config::ApiConfig;
use civic_core::gemini::{GeminiClient, GeminiConfig};
use clap::Parser;
use tracing::{error, info};

/// CLI arguments for the API server.
#[derive(Parser, Debug)]
#[command(name = "civic_api_server", about = "CivicConnect API server")]
struct Args {
    /// Interface to bind.
    #[arg(long, env = "BIND_HOST", default_value = ApiConfig::DEFAULT_HOST)]
    host: String,

    /// Port to listen on (0 = ephemeral).
    #[arg(long, env = "PORT", default_value_t = ApiConfig::DEFAULT_PORT)]
    port: u16,

    /// Gemini model name. Overrides `MODEL_NAME`.
    #[arg(long)]
    model: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,civic_api=debug,civic_core=debug".into()),
        )
        .init();

    let args = Args::parse();

    let mut gemini = GeminiConfig::from_env();
    if let Some(model) = args.model {
        gemini = gemini.with_model(model);
    }

    let key_status = if gemini.has_api_key() { "loaded" } else { "not found" };
    info!(
        model = %gemini.model,
        api_key = key_status,
        url = %gemini.endpoint(),
        "Gemini configuration"
    );
    if !gemini.has_api_key() {
        error!("GEMINI_API_KEY is not set in environment variables");
    }

    let config = ApiConfig::new(&args.host, args.port);
    let state = civic_api::AppState {
        model: Arc::new(GeminiClient::new(gemini)),
    };

    let app = civic_api::router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    let local_addr = listener.local_addr()?;
    info!(addr = %local_addr, "REST API listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}

/// Resolves on Ctrl-C.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
