//! # Error Types
//!
//! This module defines error types used throughout the recibo library.
//!
//! Errors are split by layer so callers can tell a receipt that could not be
//! built ([`CompileError`]) from one that was built but never reached the
//! printer ([`TransportError`]).

use thiserror::Error;

/// Failure while turning a template into printer bytes.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CompileError {
    /// A character in a text field has no representation in the target encoding
    #[error("cannot encode '{ch}' (U+{code:04X}) as {encoding} in {text:?}")]
    Encoding {
        ch: char,
        code: u32,
        encoding: &'static str,
        text: String,
    },
}

/// Failure while talking to a printer.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Could not open the connection
    #[error("connection to {target} failed: {reason}")]
    Connection { target: String, reason: String },

    /// Connect or write took too long
    #[error("timed out after {0:?}")]
    Timeout(std::time::Duration),

    /// Write or flush failed on an open connection
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The device is known but not reachable
    #[error("printer offline: {0}")]
    Offline(String),

    /// Nothing is registered under this identifier
    #[error("no printer connected as {0}")]
    NotConnected(String),

    /// The identifier does not name any supported transport
    #[error("invalid printer identifier: {0}")]
    InvalidIdentifier(String),

    /// The transport exists but this platform cannot drive it
    #[error("unsupported: {0}")]
    Unsupported(String),
}

/// Main error type for recibo operations
#[derive(Debug, Error)]
pub enum ReciboError {
    /// The receipt could not be built
    #[error("compile error: {0}")]
    Compile(#[from] CompileError),

    /// The receipt was built but the printer rejected it or was unreachable
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// The template file is not valid JSON
    #[error("template error: {0}")]
    Template(#[from] serde_json::Error),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ReciboError {
    /// True when nothing was sent because the receipt could not be built.
    pub fn is_compile(&self) -> bool {
        matches!(self, Self::Compile(_) | Self::Template(_))
    }

    /// True when the receipt was built but delivery failed.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}
