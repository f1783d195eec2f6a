//! Serving the intake router on a TCP listener.
//!
//! The router runs on its own tokio task; the returned [`IntakeServer`] is
//! the only way to stop it.

use std::net::SocketAddr;

use tokio::sync::oneshot;

use crate::api::router::intake_api_router;
use crate::api::types::ApiContext;

/// A running intake server.
pub struct IntakeServer {
    addr: SocketAddr,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl IntakeServer {
    /// Address actually bound, with the ephemeral port resolved.
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Stop accepting connections and drain in-flight requests.
    /// Calling it again is a no-op.
    pub fn shutdown(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
            tracing::info!(addr = %self.addr, "Intake server stopping");
        }
    }
}

/// Bind `addr` and serve the intake API until [`IntakeServer::shutdown`].
///
/// Port 0 picks an ephemeral port; read it back with [`IntakeServer::addr`].
pub async fn start_server(addr: SocketAddr, ctx: ApiContext) -> Result<IntakeServer, String> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| format!("Cannot bind {addr}: {e}"))?;
    let addr = listener
        .local_addr()
        .map_err(|e| format!("Cannot read bound address: {e}"))?;

    let app = intake_api_router(ctx);
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    tokio::spawn(async move {
        tracing::info!(%addr, "Intake server listening");
        let stopped = axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                let _ = shutdown_rx.await;
            })
            .await;
        match stopped {
            Ok(()) => tracing::info!(%addr, "Intake server stopped"),
            Err(e) => tracing::error!(%addr, "Intake server failed: {e}"),
        }
    });

    Ok(IntakeServer {
        addr,
        shutdown_tx: Some(shutdown_tx),
    })
}

// ═══════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════
