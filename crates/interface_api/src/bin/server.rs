//! Claim Decision Service - API Server Binary
//!
//! This binary starts the HTTP API server for the claim decision system.
//!
//! # Usage
//!
//! ```bash
//! # Run with default configuration
//! cargo run --bin claim-decision-api
//!
//! # Run with environment variables
//! API_HOST=0.0.0.0 API_PORT=8080 API_MODEL_PATH=artifacts/fraud_model.json \
//!     cargo run --bin claim-decision-api
//! ```
//!
//! # Environment Variables
//!
//! * `API_HOST` - Server host (default: 0.0.0.0)
//! * `API_PORT` - Server port (default: 8080)
//! * `API_MODEL_PATH` - Path to the fraud model artifact JSON
//!   (default: artifacts/fraud_model.json)
//! * `API_RULES_PATH` - Optional path to a rule-threshold override file
//! * `API_LOG_LEVEL` - Log level: trace, debug, info, warn, error (default: info)

use anyhow::Context;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use domain_decision::{FraudModel, RuleConfig};
use interface_api::{config::ApiConfig, create_router, AppState};

/// Main entry point for the API server.
///
/// Loads configuration, loads the model artifact, and starts the HTTP
/// server. A missing or unloadable model artifact aborts startup before
/// the listener binds: the process must not serve without a model.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    let config = load_config();
    init_tracing(&config.log_level);

    tracing::info!(
        host = %config.host,
        port = %config.port,
        model_path = %config.model_path,
        "Starting Claim Decision API Server"
    );

    // Fatal if the artifact is missing or malformed
    let model = FraudModel::load(&config.model_path)
        .with_context(|| format!("loading model artifact from {}", config.model_path))?;
    tracing::info!(
        model_id = model.model_id(),
        features = model.feature_count(),
        "Fraud model loaded"
    );

    let rules = match &config.rules_path {
        Some(path) => RuleConfig::from_json_file(path)
            .with_context(|| format!("loading rule configuration from {path}"))?,
        None => RuleConfig::default(),
    };

    let state = AppState::new(model, rules, config.clone());
    let app = create_router(state);

    let addr: SocketAddr = config.server_addr().parse()?;
    tracing::info!(%addr, "Server listening");

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Loads API configuration from environment variables.
///
/// Falls back to individual env vars, then defaults, if the prefixed
/// source is incomplete.
fn load_config() -> ApiConfig {
    ApiConfig::from_env().unwrap_or_else(|_| {
        let defaults = ApiConfig::default();
        ApiConfig {
            host: std::env::var("API_HOST").unwrap_or(defaults.host),
            port: std::env::var("API_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            model_path: std::env::var("API_MODEL_PATH").unwrap_or(defaults.model_path),
            rules_path: std::env::var("API_RULES_PATH").ok(),
            log_level: std::env::var("API_LOG_LEVEL")
                .or_else(|_| std::env::var("RUST_LOG"))
                .unwrap_or(defaults.log_level),
        }
    })
}

/// Initializes the tracing subscriber for structured logging.
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
///
/// This enables graceful shutdown of the server, allowing in-flight
/// requests to complete before the process exits.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
