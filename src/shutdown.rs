use futures::future;
use tokio::select;
use tokio::signal;
use tracing::{info, warn};

/// Resolves with the signal name once SIGINT or SIGTERM is received.
///
/// Init containers usually run as PID 1, where SIGTERM has no default
/// action, so the signal has to be handled for the orchestrator's kill to
/// take effect.
pub(crate) async fn shutdown_signal() -> &'static str {
    let mut sigterm = match signal::unix::signal(signal::unix::SignalKind::terminate()) {
        Ok(sigterm) => Some(sigterm),
        Err(e) => {
            warn!("Failed to listen for SIGTERM: {}", e);
            None
        }
    };

    let term_future = async {
        if let Some(ref mut sigterm) = sigterm {
            sigterm.recv().await;
            "SIGTERM"
        } else {
            future::pending::<&'static str>().await
        }
    };

    let int_future = async {
        match signal::ctrl_c().await {
            Ok(()) => "SIGINT",
            Err(e) => {
                warn!("Failed to listen for SIGINT: {:?}", e);
                future::pending::<&'static str>().await
            }
        }
    };

    let name = select! {
        name = int_future => name,
        name = term_future => name,
    };
    info!("Received {}.", name);
    name
}
