//! HTTP server for camphub.
//!
//! An axum REST API over [`crate::storage::Storage`]:
//!
//! ```text
//! handlers (parse body, validate) -> AppState::with_storage -> Storage
//!          <- response DTOs <-
//! ```

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

use std::net::SocketAddr;

use tokio::net::TcpListener;
use tracing::info;

pub use error::AppError;
pub use router::create_router;
pub use state::AppState;

use crate::error::Result;
use crate::storage::Storage;

/// Serve the API on `addr` until Ctrl-C is received.
///
/// # Errors
///
/// Returns an error if the address cannot be bound or the server fails.
pub async fn serve(addr: SocketAddr, storage: Storage) -> Result<()> {
    let app = create_router(AppState::new(storage));

    let listener = TcpListener::bind(addr).await?;
    info!("Server listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
