//! Taskboard server binary.
//!
//! Loads configuration from the environment, opens the task store, and
//! serves the task API until SIGINT or SIGTERM.

use std::process::ExitCode;
use std::sync::Arc;

use taskboard::api::{AppState, build_router};
use taskboard::config::AppConfig;
use taskboard::task::adapters::open_task_store;
use taskboard::telemetry::init_tracing;
use tokio::signal;

fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(error) => {
            report_startup_failure(&format!("failed to create tokio runtime: {error}"));
            return ExitCode::FAILURE;
        }
    };
    runtime.block_on(run())
}

async fn run() -> ExitCode {
    if let Err(error) = init_tracing() {
        report_startup_failure(&format!("failed to initialise logging: {error}"));
        return ExitCode::FAILURE;
    }

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(error) => {
            tracing::error!(%error, "configuration error");
            return ExitCode::FAILURE;
        }
    };
    let address = match config.socket_addr() {
        Ok(address) => address,
        Err(error) => {
            tracing::error!(%error, "configuration error");
            return ExitCode::FAILURE;
        }
    };

    let store = match open_task_store(&config).await {
        Ok(store) => store,
        Err(error) => {
            tracing::error!(%error, "failed to open task store");
            return ExitCode::FAILURE;
        }
    };
    let application = build_router(AppState::new(Arc::clone(&store)));

    let listener = match tokio::net::TcpListener::bind(address).await {
        Ok(listener) => listener,
        Err(error) => {
            tracing::error!(%error, %address, "failed to bind listener");
            return ExitCode::FAILURE;
        }
    };
    match listener.local_addr() {
        Ok(local) => tracing::info!(address = %local, "listening"),
        Err(error) => tracing::warn!(%error, "could not determine local address"),
    }

    let served = axum::serve(listener, application)
        .with_graceful_shutdown(shutdown_signal())
        .await;

    tracing::info!(storage = ?config.storage_mode, "closing task store");
    drop(store);
    match served {
        Ok(()) => {
            tracing::info!("server shutdown complete");
            ExitCode::SUCCESS
        }
        Err(error) => {
            tracing::error!(%error, "server error");
            ExitCode::FAILURE
        }
    }
}

#[expect(clippy::print_stderr, reason = "no subscriber is installed yet")]
fn report_startup_failure(message: &str) {
    eprintln!("{message}");
}

/// Completes on SIGINT, or on SIGTERM where supported.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(error) = signal::ctrl_c().await {
            tracing::warn!(%error, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(error) => {
                tracing::warn!(%error, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("received Ctrl+C, shutting down"),
        () = terminate => tracing::info!("received SIGTERM, shutting down"),
    }
}
