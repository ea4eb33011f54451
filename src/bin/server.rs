//! Reorder prediction server
//!
//! Loads the classifier artifact once and serves predictions over HTTP.
//! A missing or unreadable artifact does not stop the server: it starts in
//! degraded mode and prediction endpoints answer 503 until restarted with a
//! valid model.
//!
//! # Usage
//! ```sh
//! MODEL_PATH=tests/fixtures/stock_reorder_model.json cargo run --bin server
//! ```
//!
//! # Environment Variables
//! - `MODEL_PATH` - Model artifact location (default: stock_reorder_model.pkl)
//! - `PORT` - Listen port (default: 8000)
//! - `BIND_ADDRESS` - Listen address (default: 0.0.0.0)
//! - `MODEL_ACCURACY`, `MODEL_PRECISION`, `MODEL_RECALL`, `MODEL_F1_SCORE` - Reported training scores
//! - `RUST_LOG` - Log filter (default: info)

use anyhow::{Context, Result};
use clap::Parser;
use reorder_predictor::application::service_context::{SERVICE_NAME, ServiceContext};
use reorder_predictor::config::Config;
use reorder_predictor::infrastructure::observability::init_tracing;
use reorder_predictor::interfaces::http;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the model artifact (overrides MODEL_PATH)
    #[arg(long)]
    model_path: Option<PathBuf>,

    /// Port to listen on (overrides PORT)
    #[arg(long)]
    port: Option<u16>,

    /// Address to bind (overrides BIND_ADDRESS)
    #[arg(long)]
    bind_address: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let args = Args::parse();

    init_tracing();

    info!("{} {} starting...", SERVICE_NAME, env!("CARGO_PKG_VERSION"));

    let mut config = Config::from_env()?;
    if let Some(model_path) = args.model_path {
        config.model.model_path = model_path;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(bind_address) = args.bind_address {
        config.server.bind_address = bind_address;
    }
    info!(
        "Configuration loaded: model_path={:?}, listen={}",
        config.model.model_path,
        config.server.listen_address()
    );

    let context = ServiceContext::bootstrap(&config.model)?;
    info!("Model status: {}", context.status().as_str());

    let app = http::router(Arc::new(context));

    let addr = config.server.listen_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped.");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received. Draining in-flight requests...");
}
