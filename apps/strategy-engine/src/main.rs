//! Strategy Engine Binary
//!
//! Starts the Algofax strategy engine.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin strategy-engine
//! ```
//!
//! # Environment Variables
//!
//! - `CONFIG_PATH`: Path to a YAML config file (default: config.yaml if present)
//! - `HTTP_PORT`: HTTP server port (overrides config)
//! - `RUST_LOG`: Log filter (overrides the configured level)

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use strategy_engine::alerts::AlertStore;
use strategy_engine::config::{Config, load_config};
use strategy_engine::events::NotificationBus;
use strategy_engine::positions::InMemoryPositionRepository;
use strategy_engine::server::{AppState, create_router};
use strategy_engine::session::{AuthService, InMemoryTokenStore, SessionService};
use strategy_engine::strategy::{StrategyAnalyzer, UniformProbability};
use strategy_engine::{StaticChainProvider, telemetry};
use tokio::net::TcpListener;
use tokio::signal;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = parse_config()?;
    telemetry::init_tracing(&config.logging);

    tracing::info!("Starting Algofax Strategy Engine");
    log_config(&config);

    let state = build_state(&config);
    let app = create_router(state);

    let http_addr: SocketAddr = format!("{}:{}", config.server.bind_address, config.server.http_port)
        .parse()
        .context("invalid bind address")?;

    tracing::info!(%http_addr, "HTTP server starting");
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /health");
    tracing::info!("  GET  /v1/strategies");
    tracing::info!("  POST /v1/analyze");
    tracing::info!("  GET  /v1/chain");
    tracing::info!("  GET|POST /v1/positions");
    tracing::info!("  POST /v1/auth/login|signup|logout");
    tracing::info!("  POST /v1/session/guard");
    tracing::info!("  GET|POST /v1/alerts");

    let listener = TcpListener::bind(http_addr)
        .await
        .context("failed to bind HTTP listener")?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    tracing::info!("Strategy engine stopped");
    Ok(())
}

/// Load configuration and apply environment overrides.
fn parse_config() -> anyhow::Result<Config> {
    let path = std::env::var("CONFIG_PATH").ok();
    let mut config = load_config(path.as_deref()).context("failed to load configuration")?;

    if let Ok(port) = std::env::var("HTTP_PORT") {
        config.server.http_port = port
            .parse()
            .with_context(|| format!("invalid HTTP_PORT '{port}'"))?;
    }

    Ok(config)
}

/// Log the effective configuration.
fn log_config(config: &Config) {
    tracing::info!(
        http_port = config.server.http_port,
        underlying = %config.market.underlying,
        strike_interval = config.market.strike_interval,
        lot_size = config.market.lot_size,
        "Configuration loaded"
    );
}

/// Wire the application state together.
fn build_state(config: &Config) -> AppState {
    let tokens = Arc::new(InMemoryTokenStore::new());

    AppState {
        analyzer: StrategyAnalyzer::new(
            config.market.strike_interval,
            Arc::new(UniformProbability),
        ),
        chain: Arc::new(StaticChainProvider::new()),
        auth: Arc::new(AuthService::new(config.auth.simulated_latency())),
        session: Arc::new(SessionService::new(tokens)),
        positions: Arc::new(InMemoryPositionRepository::new()),
        alerts: Arc::new(AlertStore::new()),
        bus: NotificationBus::default(),
        lot_size: config.market.lot_size,
        version: env!("CARGO_PKG_VERSION").to_string(),
    }
}

/// Wait for shutdown signal (SIGTERM or SIGINT).
///
/// # Panics
///
/// Panics if signal handlers cannot be installed; a process that cannot
/// respond to termination signals should fail fast at startup.
#[allow(clippy::expect_used)]
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("signal handler installation is critical for graceful shutdown");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("SIGTERM handler installation is critical for graceful shutdown")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, initiating shutdown");
        }
    }
}
