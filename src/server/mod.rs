//! # HTTP Server for Receipt Printing
//!
//! Exposes the printer registry and the receipt compiler over JSON.
//!
//! ## Usage
//!
//! ```bash
//! recibo serve --listen 0.0.0.0:8080
//! ```
//!
//! ```bash
//! curl -X POST localhost:8080/api/printers/connect \
//!      -H 'content-type: application/json' -d '{"identifier": "192.168.1.50"}'
//! curl -X POST localhost:8080/api/print/receipt \
//!      -H 'content-type: application/json' \
//!      -d '{"identifier": "192.168.1.50", "template": {"kitchen": [{"name": "Tea", "qty": 2}]}}'
//! ```

mod handlers;
mod state;

pub use state::{AppState, ServerConfig};

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::error::ReciboError;

/// Build the API router over shared state.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        // Printers
        .route("/api/printers", get(handlers::printers::list))
        .route("/api/printers/connect", post(handlers::printers::connect))
        .route(
            "/api/printers/disconnect",
            post(handlers::printers::disconnect),
        )
        .route("/api/printers/status", post(handlers::printers::status))
        // Printing
        .route("/api/print/receipt", post(handlers::print::receipt))
        .route("/api/print/text", post(handlers::print::text))
        .route("/api/receipt/compile", post(handlers::print::compile))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the HTTP server.
///
/// ## Example
///
/// ```no_run
/// use recibo::server::{serve, ServerConfig};
///
/// # async fn example() -> Result<(), recibo::ReciboError> {
/// let config = ServerConfig {
///     listen_addr: "0.0.0.0:8080".to_string(),
///     ..ServerConfig::default()
/// };
///
/// serve(config).await?;
/// # Ok(())
/// # }
/// ```
pub async fn serve(config: ServerConfig) -> Result<(), ReciboError> {
    let listener = tokio::net::TcpListener::bind(&config.listen_addr).await?;
    info!(
        listen = %config.listen_addr,
        paper = config.printer.name,
        columns = config.printer.columns,
        encoding = config.printer.encoding.name(),
        "Recibo HTTP server listening"
    );

    let app = router(Arc::new(AppState::new(config)));
    axum::serve(listener, app).await?;
    Ok(())
}
