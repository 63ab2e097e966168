//! Server state and configuration.

use crate::printer::PrinterConfig;
use crate::transport::PrinterManager;

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to listen on (e.g., "0.0.0.0:8080")
    pub listen_addr: String,
    /// Paper width, separator and text encoding used for every print
    pub printer: PrinterConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: "127.0.0.1:8080".to_string(),
            printer: PrinterConfig::default(),
        }
    }
}

/// Application state shared across handlers.
pub struct AppState {
    pub printers: PrinterManager,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            printers: PrinterManager::new(config.printer),
        }
    }
}
