//! Printer connection handlers.

use axum::{Json, extract::State};
use serde::Deserialize;
use serde_json::{Value, json};
use std::sync::Arc;

use super::super::state::AppState;
use super::ApiError;
use crate::transport::PrinterStatus;

/// Body naming one printer.
#[derive(Debug, Deserialize)]
pub struct PrinterRequest {
    /// IP address, MAC address or device path
    pub identifier: String,
}

/// Handle POST /api/printers/connect
pub async fn connect(
    State(state): State<Arc<AppState>>,
    Json(req): Json<PrinterRequest>,
) -> Result<Json<Value>, ApiError> {
    let kind = state.printers.connect(&req.identifier).await?;
    Ok(Json(json!({
        "success": true,
        "identifier": req.identifier,
        "kind": kind,
    })))
}

/// Handle POST /api/printers/disconnect
pub async fn disconnect(
    State(state): State<Arc<AppState>>,
    Json(req): Json<PrinterRequest>,
) -> Result<Json<Value>, ApiError> {
    state.printers.disconnect(&req.identifier).await?;
    Ok(Json(json!({"success": true})))
}

/// Handle POST /api/printers/status
pub async fn status(
    State(state): State<Arc<AppState>>,
    Json(req): Json<PrinterRequest>,
) -> Json<PrinterStatus> {
    Json(state.printers.status(&req.identifier).await)
}

/// Handle GET /api/printers
pub async fn list(State(state): State<Arc<AppState>>) -> Json<Value> {
    Json(json!({"printers": state.printers.connected().await}))
}
