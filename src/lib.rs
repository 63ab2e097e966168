//! # Recibo - ESC/POS Receipt Compiler
//!
//! Recibo turns loosely-typed receipt templates (JSON) into byte streams for
//! ESC/POS thermal receipt printers, and sends them over TCP, Bluetooth or
//! USB. It provides:
//!
//! - **Template normalization**: legacy, formatted, sectioned and kitchen
//!   shapes all become one [`ReceiptTemplate`]
//! - **Compiler**: section encoders with scoped bold/size state
//! - **Protocol implementation**: ESC/POS command builders
//! - **Transport**: device sessions and a registry keyed by identifier
//!
//! ## Quick Start
//!
//! ```no_run
//! use recibo::{PrinterManager, PrinterConfig};
//! use serde_json::json;
//!
//! # async fn example() -> Result<(), recibo::ReciboError> {
//! let printers = PrinterManager::new(PrinterConfig::PAPER_80MM);
//! printers.connect("192.168.1.50").await?;
//!
//! let template = json!({
//!     "header": {"restaurant_name": "CAFE", "size": "2", "bold": true},
//!     "kitchen": [{"name": "Tea", "qty": 2}],
//!     "total": "5.00",
//! });
//! printers.print_receipt(&template, "192.168.1.50").await?;
//! # Ok(())
//! # }
//! ```
//!
//! Compiling without a printer:
//!
//! ```
//! let bytes = recibo::compile(&serde_json::json!({"total": "5.00"})).unwrap();
//! assert_eq!(&bytes[..2], &[0x1B, 0x40]);
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`template`] | Shape detection and normalization |
//! | [`compiler`] | Section encoders and framing |
//! | [`ir`] | Op stream and byte generation |
//! | [`protocol`] | ESC/POS command builders and text encodings |
//! | [`transport`] | Device sessions and the printer registry |
//! | [`server`] | HTTP API |
//! | [`printer`] | Paper presets |
//! | [`error`] | Error types |

pub mod compiler;
pub mod error;
pub mod ir;
pub mod layout;
pub mod printer;
pub mod protocol;
pub mod samples;
pub mod server;
pub mod template;
pub mod timestamp;
pub mod transport;

// Re-exports for convenience
pub use compiler::{ReceiptCompiler, compile};
pub use error::{CompileError, ReciboError, TransportError};
pub use printer::{PrinterConfig, PrinterKind};
pub use protocol::TextEncoding;
pub use template::ReceiptTemplate;
pub use transport::{DeviceSession, PrinterManager, PrinterStatus};
