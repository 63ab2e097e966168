//! # USB Printer-Class Transport
//!
//! USB receipt printers show up as line-printer devices (`/dev/usb/lpN`)
//! through the kernel `usblp` driver and take raw ESC/POS writes.

use std::fs::OpenOptions;
use std::path::Path;

use tracing::info;

use super::device_file::DeviceFileSession;
use crate::error::TransportError;
use crate::printer::PrinterKind;

/// Identifier prefix for USB devices, e.g. `usb:/dev/usb/lp0`.
pub const PREFIX: &str = "usb:";

/// Whether `path` looks like a line-printer device.
pub fn is_printer_path(path: &str) -> bool {
    path.starts_with("/dev/usb/lp") || path.starts_with("/dev/lp")
}

/// Open a USB printer device for writing.
pub fn open(target: &str, device: &Path) -> Result<DeviceFileSession, TransportError> {
    let file = OpenOptions::new()
        .write(true)
        .open(device)
        .map_err(|e| TransportError::Connection {
            target: device.display().to_string(),
            reason: e.to_string(),
        })?;

    info!(device = %device.display(), "Opened USB printer");
    Ok(DeviceFileSession::new(PrinterKind::Usb, target, device, file))
}
