use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;
use tracing::info;

/// Serves `router` on `listener` until SIGTERM or Ctrl-C, then drains
/// in-flight requests.
///
/// Peer addresses are exposed to handlers through
/// [`ConnectInfo`](axum::extract::ConnectInfo).
pub async fn serve(listener: TcpListener, router: Router) -> std::io::Result<()> {
    info!(listen_addr = %listener.local_addr()?, "starting gateway server");

    axum::serve(
        listener,
        router.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    info!("gateway server stopped");
    Ok(())
}

/// Resolves on SIGTERM (Unix) or Ctrl-C, whichever comes first.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let sigterm = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let sigterm = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = sigterm => {}
    }

    info!("shutdown signal received, draining connections");
}
