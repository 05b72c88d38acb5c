use std::time::Duration;
use tokio::signal;

/// Resolves once the process receives Ctrl+C or SIGTERM.
/// Axum keeps serving in-flight requests for `drain` afterwards.
pub async fn shutdown_signal(drain: Duration) {
    let signal_name = wait_for_signal().await;
    tracing::info!(
        signal = signal_name,
        drain_secs = drain.as_secs(),
        "shutting down, draining open connections"
    );
}

async fn wait_for_signal() -> &'static str {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => "ctrl-c",
        _ = terminate => "sigterm",
    }
}
