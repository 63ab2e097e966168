//! # Printer Module
//!
//! Printer-side settings shared by the compiler and the transports.
//!
//! ## Modules
//!
//! - [`config`]: Paper width, separator and text encoding

pub mod config;

pub use config::{PrinterConfig, PrinterKind};
