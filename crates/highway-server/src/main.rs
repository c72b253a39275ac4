//! highway server
//!
//! - `GET /version` : hostname, version, revision (plain text or JSON)
//! - `/healthz`, `/readyz`, `/metrics`
//!
//! Config path: `HIGHWAY_CONFIG` (default `highway.yaml`).

use tracing_subscriber::{fmt, EnvFilter};

use highway_core::error::{HighwayError, Result};
use highway_server::{app_state, config, router};

#[tokio::main]
async fn main() {
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "highway-server failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cfg = config::load_from_env(std::env::var(config::CONFIG_ENV))?;

    let state = app_state::AppState::new(cfg)?;
    let listen = state.cfg().listen_addr()?;
    let report = state.report();
    tracing::info!(
        hostname = %report.hostname,
        version = %report.version,
        revision = %report.revision,
        "version report resolved"
    );

    let app = router::build_router(state.clone());

    tracing::info!(%listen, "highway-server starting");
    let listener = tokio::net::TcpListener::bind(listen)
        .await
        .map_err(|e| HighwayError::Internal(format!("bind {listen} failed: {e}")))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(state))
        .await
        .map_err(|e| HighwayError::Internal(format!("server failed: {e}")))
}

async fn shutdown_signal(state: app_state::AppState) {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to install SIGTERM handler");
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
    state.set_draining();
    tracing::info!("signal received, draining and starting graceful shutdown");
}
