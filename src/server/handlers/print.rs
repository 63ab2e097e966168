//! Print and compile handlers.

use axum::{
    Json,
    extract::State,
    http::header,
    response::IntoResponse,
};
use serde::Deserialize;
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use super::super::state::AppState;
use super::ApiError;

/// Body for POST /api/print/receipt.
#[derive(Debug, Deserialize)]
pub struct ReceiptRequest {
    pub identifier: String,
    /// Receipt template, in any supported shape
    pub template: Value,
}

/// Body for POST /api/print/text.
#[derive(Debug, Deserialize)]
pub struct TextRequest {
    pub identifier: String,
    pub text: String,
}

/// Handle POST /api/print/receipt
pub async fn receipt(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ReceiptRequest>,
) -> Result<Json<Value>, ApiError> {
    let job_id = Uuid::new_v4();
    state
        .printers
        .print_receipt(&req.template, &req.identifier)
        .await?;
    info!(%job_id, identifier = %req.identifier, "Receipt printed");
    Ok(Json(json!({"success": true, "jobId": job_id.to_string()})))
}

/// Handle POST /api/print/text
pub async fn text(
    State(state): State<Arc<AppState>>,
    Json(req): Json<TextRequest>,
) -> Result<Json<Value>, ApiError> {
    if req.text.trim().is_empty() {
        return Err(ApiError::bad_request("Text cannot be empty"));
    }
    let job_id = Uuid::new_v4();
    state.printers.print_text(&req.text, &req.identifier).await?;
    info!(%job_id, identifier = %req.identifier, "Text printed");
    Ok(Json(json!({"success": true, "jobId": job_id.to_string()})))
}

/// Handle POST /api/receipt/compile - return the printer bytes without sending.
pub async fn compile(
    State(state): State<Arc<AppState>>,
    Json(template): Json<Value>,
) -> Result<impl IntoResponse, ApiError> {
    let data = state
        .printers
        .compiler()
        .compile(&template)
        .map_err(crate::error::ReciboError::from)?;
    Ok(([(header::CONTENT_TYPE, "application/octet-stream")], data))
}
