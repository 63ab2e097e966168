//! # Bluetooth RFCOMM Transport
//!
//! Bluetooth receipt printers expose the Serial Port Profile. On Linux the
//! printer is paired and bound to an RFCOMM TTY, which this module opens in
//! raw mode.
//!
//! ## Bluetooth Setup (Linux)
//!
//! ```bash
//! $ bluetoothctl
//! [bluetooth]# scan on
//! [bluetooth]# pair 66:22:XX:XX:XX:XX
//!
//! $ sudo rfcomm bind 0 66:22:XX:XX:XX:XX
//! # This creates /dev/rfcomm0
//! ```
//!
//! A printer can then be addressed either by its device path or by its MAC
//! address, which is resolved through `/proc/net/rfcomm`.
//!
//! ## TTY Configuration
//!
//! - **No input processing**, including XON/XOFF: 0x11 and 0x13 appear in
//!   ESC/POS size codes and must reach the printer unchanged
//! - **No output processing**: no CR/LF translation
//! - **8-bit characters**, no parity, no echo, non-canonical

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

use tracing::info;

use super::device_file::DeviceFileSession;
use crate::error::TransportError;
use crate::printer::PrinterKind;

/// Default RFCOMM device path
pub const DEFAULT_DEVICE: &str = "/dev/rfcomm0";

/// Where the kernel lists RFCOMM bindings
const RFCOMM_TABLE: &str = "/proc/net/rfcomm";

/// Open a bound RFCOMM device in raw mode.
///
/// `target` is the identifier the session is registered under (MAC or
/// device path).
pub fn open(target: &str, device: &Path) -> Result<DeviceFileSession, TransportError> {
    let file = OpenOptions::new()
        .write(true)
        .open(device)
        .map_err(|e| TransportError::Connection {
            target: device.display().to_string(),
            reason: e.to_string(),
        })?;

    configure_tty_raw(&file)?;

    info!(device = %device.display(), "Opened RFCOMM device");
    Ok(DeviceFileSession::new(
        PrinterKind::Bluetooth,
        target,
        device,
        file,
    ))
}

/// Resolve a MAC address to its bound device and open it.
pub fn open_mac(mac: &str) -> Result<DeviceFileSession, TransportError> {
    let device = find_rfcomm_for_mac(mac)?.ok_or_else(|| {
        TransportError::Offline(format!(
            "{mac} is not bound to an RFCOMM device (run `rfcomm bind 0 {mac}`)"
        ))
    })?;
    open(mac, &device)
}

#[cfg(unix)]
fn configure_tty_raw(file: &fs::File) -> Result<(), TransportError> {
    use std::mem::MaybeUninit;
    use std::os::unix::io::AsRawFd;

    let fd = file.as_raw_fd();
    let mut termios = MaybeUninit::uninit();
    // SAFETY: fd is a valid open descriptor owned by `file`.
    if unsafe { libc::tcgetattr(fd, termios.as_mut_ptr()) } != 0 {
        return Err(tty_error("tcgetattr"));
    }
    // SAFETY: tcgetattr succeeded and filled the struct.
    let mut termios = unsafe { termios.assume_init() };

    termios.c_iflag &= !(libc::IGNBRK
        | libc::BRKINT
        | libc::PARMRK
        | libc::ISTRIP
        | libc::INLCR
        | libc::IGNCR
        | libc::ICRNL
        | libc::IXON
        | libc::IXOFF
        | libc::IXANY);
    termios.c_oflag &= !libc::OPOST;
    termios.c_lflag &= !(libc::ECHO | libc::ECHONL | libc::ICANON | libc::ISIG | libc::IEXTEN);
    termios.c_cflag &= !(libc::CSIZE | libc::PARENB);
    termios.c_cflag |= libc::CS8;

    // SAFETY: termios is fully initialized.
    if unsafe { libc::tcsetattr(fd, libc::TCSANOW, &termios) } != 0 {
        return Err(tty_error("tcsetattr"));
    }
    Ok(())
}

#[cfg(unix)]
fn tty_error(call: &str) -> TransportError {
    let err = std::io::Error::last_os_error();
    TransportError::Io(std::io::Error::new(err.kind(), format!("{call} failed: {err}")))
}

#[cfg(not(unix))]
fn configure_tty_raw(_file: &fs::File) -> Result<(), TransportError> {
    Ok(())
}

// ============================================================================
// RFCOMM HELPERS
// ============================================================================

/// Validate a Bluetooth MAC address format (XX:XX:XX:XX:XX:XX).
pub fn is_valid_mac(mac: &str) -> bool {
    let parts: Vec<&str> = mac.split(':').collect();
    parts.len() == 6
        && parts
            .iter()
            .all(|part| part.len() == 2 && part.chars().all(|c| c.is_ascii_hexdigit()))
}

/// Whether `path` names an RFCOMM TTY (`/dev/rfcommN`).
pub fn is_rfcomm_path(path: &str) -> bool {
    path.strip_prefix("/dev/rfcomm")
        .is_some_and(|n| !n.is_empty() && n.chars().all(|c| c.is_ascii_digit()))
}

/// Find the RFCOMM device bound to `mac`, if any.
pub fn find_rfcomm_for_mac(mac: &str) -> Result<Option<PathBuf>, TransportError> {
    let table = match fs::read_to_string(RFCOMM_TABLE) {
        Ok(table) => table,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };
    Ok(parse_rfcomm_table(&table, mac)
        .map(|name| Path::new("/dev").join(name))
        .filter(|path| path.exists()))
}

/// Lines look like `rfcomm0: 66:22:AA:BB:CC:DD channel 1 clean`.
fn parse_rfcomm_table<'a>(table: &'a str, mac: &str) -> Option<&'a str> {
    let mac = mac.to_ascii_uppercase();
    table.lines().find_map(|line| {
        let (name, rest) = line.split_once(':')?;
        rest.to_ascii_uppercase()
            .contains(&mac)
            .then_some(name.trim())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_device_path() {
        assert!(is_rfcomm_path(DEFAULT_DEVICE));
    }

    #[test]
    fn test_valid_mac_addresses() {
        assert!(is_valid_mac("00:11:22:33:44:55"));
        assert!(is_valid_mac("AA:BB:CC:DD:EE:FF"));
        assert!(is_valid_mac("aa:bb:cc:dd:ee:ff"));
    }

    #[test]
    fn test_invalid_mac_addresses() {
        assert!(!is_valid_mac("00:11:22:33:44"));
        assert!(!is_valid_mac("00:11:22:33:44:55:66"));
        assert!(!is_valid_mac("00-11-22-33-44-55"));
        assert!(!is_valid_mac("GG:HH:II:JJ:KK:LL"));
        assert!(!is_valid_mac(""));
    }

    #[test]
    fn test_rfcomm_paths() {
        assert!(is_rfcomm_path("/dev/rfcomm12"));
        assert!(!is_rfcomm_path("/dev/rfcomm"));
        assert!(!is_rfcomm_path("/dev/ttyUSB0"));
    }

    #[test]
    fn test_parse_rfcomm_table() {
        let table = "rfcomm0: 00:11:22:33:44:55 channel 1 clean\n\
                     rfcomm1: 66:22:AA:BB:CC:DD channel 1 connected [tty-attached]\n";
        assert_eq!(parse_rfcomm_table(table, "66:22:aa:bb:cc:dd"), Some("rfcomm1"));
        assert_eq!(parse_rfcomm_table(table, "00:11:22:33:44:55"), Some("rfcomm0"));
        assert_eq!(parse_rfcomm_table(table, "01:02:03:04:05:06"), None);
    }
}
