//! Registry of open printer sessions, keyed by the identifier they were
//! opened with.

use std::collections::HashMap;
use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;
use tokio::sync::RwLock;
use tracing::{info, instrument, warn};

use super::{ConnectionTarget, DeviceSession};
use crate::compiler::ReceiptCompiler;
use crate::error::{ReciboError, TransportError};
use crate::printer::{PrinterConfig, PrinterKind};
use crate::protocol::commands;

/// Two-state printer report. Nothing beyond "reachable or not" is parsed
/// from the device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PrinterStatus {
    pub status: &'static str,
    pub paper_status: &'static str,
    pub connected: bool,
}

impl PrinterStatus {
    pub const READY: Self = Self {
        status: "ready",
        paper_status: "ok",
        connected: true,
    };

    pub const OFFLINE: Self = Self {
        status: "offline",
        paper_status: "unknown",
        connected: false,
    };
}

/// One registered printer, as listed by [`PrinterManager::connected`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConnectedPrinter {
    pub identifier: String,
    pub kind: PrinterKind,
}

/// Open sessions plus the compiler used for every print.
pub struct PrinterManager {
    sessions: RwLock<HashMap<String, Arc<dyn DeviceSession>>>,
    compiler: ReceiptCompiler,
}

impl PrinterManager {
    pub fn new(config: PrinterConfig) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            compiler: ReceiptCompiler::new(config),
        }
    }

    pub fn compiler(&self) -> &ReceiptCompiler {
        &self.compiler
    }

    /// Route `identifier` to a transport, open it and register the session.
    ///
    /// An existing session under the same identifier is closed first.
    #[instrument(skip(self))]
    pub async fn connect(&self, identifier: &str) -> Result<PrinterKind, TransportError> {
        let target = ConnectionTarget::parse(identifier)?;
        info!(target = %target, "Connecting");
        let session = target.open(identifier).await?;
        let kind = session.kind();
        self.attach(identifier, session).await;
        Ok(kind)
    }

    /// Register a session opened elsewhere.
    pub async fn attach(&self, identifier: &str, session: Arc<dyn DeviceSession>) {
        let previous = self
            .sessions
            .write()
            .await
            .insert(identifier.to_string(), session);
        if let Some(previous) = previous {
            if let Err(e) = previous.disconnect().await {
                warn!(identifier, error = %e, "Failed to close replaced session");
            }
        }
    }

    /// Close and forget a session. Unknown identifiers are ignored.
    #[instrument(skip(self))]
    pub async fn disconnect(&self, identifier: &str) -> Result<(), TransportError> {
        let session = self.sessions.write().await.remove(identifier);
        match session {
            Some(session) => {
                session.disconnect().await?;
                info!("Disconnected");
            }
            None => info!("Not connected, nothing to do"),
        }
        Ok(())
    }

    pub async fn is_connected(&self, identifier: &str) -> bool {
        match self.session(identifier).await {
            Ok(session) => session.is_connected().await,
            Err(_) => false,
        }
    }

    /// Registered printers, sorted by identifier.
    pub async fn connected(&self) -> Vec<ConnectedPrinter> {
        let mut printers: Vec<ConnectedPrinter> = self
            .sessions
            .read()
            .await
            .iter()
            .map(|(identifier, session)| ConnectedPrinter {
                identifier: identifier.clone(),
                kind: session.kind(),
            })
            .collect();
        printers.sort_by(|a, b| a.identifier.cmp(&b.identifier));
        printers
    }

    /// Probe the printer with a status request.
    ///
    /// A successful write means ready. Any failure, or no session, means
    /// offline. The reply is not read.
    #[instrument(skip(self))]
    pub async fn status(&self, identifier: &str) -> PrinterStatus {
        let Ok(session) = self.session(identifier).await else {
            return PrinterStatus::OFFLINE;
        };
        match session.send(&commands::status_request()).await {
            Ok(()) => PrinterStatus::READY,
            Err(e) => {
                warn!(error = %e, "Status probe failed");
                PrinterStatus::OFFLINE
            }
        }
    }

    /// Compile `template` and send it as one job.
    ///
    /// Compilation finishes before the session is looked up, so a template
    /// that cannot be encoded never reaches the device.
    #[instrument(skip(self, template))]
    pub async fn print_receipt(&self, template: &Value, identifier: &str) -> Result<(), ReciboError> {
        let data = self.compiler.compile(template)?;
        self.send(identifier, &data).await?;
        Ok(())
    }

    /// Print plain text followed by a cut.
    #[instrument(skip(self, text), fields(text_len = text.len()))]
    pub async fn print_text(&self, text: &str, identifier: &str) -> Result<(), ReciboError> {
        let data = self.compiler.compile_text(text)?;
        self.send(identifier, &data).await?;
        Ok(())
    }

    /// Send raw bytes to a registered printer.
    #[instrument(skip(self, data), fields(data_len = data.len()))]
    pub async fn send(&self, identifier: &str, data: &[u8]) -> Result<(), TransportError> {
        let session = self.session(identifier).await?;
        session.send(data).await?;
        info!("Job sent");
        Ok(())
    }

    async fn session(&self, identifier: &str) -> Result<Arc<dyn DeviceSession>, TransportError> {
        self.sessions
            .read()
            .await
            .get(identifier)
            .cloned()
            .ok_or_else(|| TransportError::NotConnected(identifier.to_string()))
    }
}

impl Default for PrinterManager {
    fn default() -> Self {
        Self::new(PrinterConfig::default())
    }
}
