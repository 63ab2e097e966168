//! # Device Sessions
//!
//! A [`DeviceSession`] is an open connection to one physical printer that
//! accepts raw ESC/POS bytes. Printers are addressed by an identifier
//! string, parsed into a [`ConnectionTarget`]:
//!
//! | Identifier                         | Kind      | Transport            |
//! |------------------------------------|-----------|----------------------|
//! | `192.168.1.50`, `10.0.0.7:9100`    | WiFi      | TCP, port 9100       |
//! | `66:22:AA:BB:CC:DD`                | Bluetooth | bound RFCOMM device  |
//! | `/dev/rfcomm0`                     | Bluetooth | RFCOMM device        |
//! | `/dev/usb/lp0`, `usb:/dev/lp0`     | USB       | line-printer device  |
//!
//! A peripheral UUID (as reported by BLE stacks) is recognized as Bluetooth
//! but cannot be opened here, since BLE GATT printing is not available on
//! this platform.

pub mod bluetooth;
pub mod device_file;
pub mod manager;
pub mod memory;
pub mod tcp;
pub mod usb;

use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;

use crate::error::TransportError;
use crate::printer::PrinterKind;

pub use device_file::DeviceFileSession;
pub use manager::{PrinterManager, PrinterStatus};
pub use memory::MemorySession;
pub use tcp::TcpSession;

/// An open connection to a printer.
#[async_trait]
pub trait DeviceSession: Send + Sync {
    fn kind(&self) -> PrinterKind;

    /// The identifier this session was opened with.
    fn target(&self) -> &str;

    /// Write one complete job. Bytes are passed through untouched.
    async fn send(&self, data: &[u8]) -> Result<(), TransportError>;

    async fn is_connected(&self) -> bool;

    /// Close the connection. Closing twice is not an error.
    async fn disconnect(&self) -> Result<(), TransportError>;
}

/// Where a printer identifier points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectionTarget {
    Network(SocketAddr),
    BluetoothMac(String),
    BluetoothDevice(PathBuf),
    BluetoothPeripheral(uuid::Uuid),
    Usb(PathBuf),
}

impl ConnectionTarget {
    /// Classify a printer identifier.
    pub fn parse(identifier: &str) -> Result<Self, TransportError> {
        let id = identifier.trim();

        if let Ok(addr) = id.parse::<SocketAddr>() {
            return Ok(Self::Network(addr));
        }
        if let Ok(ip) = id.parse::<IpAddr>() {
            return Ok(Self::Network(SocketAddr::new(ip, tcp::DEFAULT_PORT)));
        }
        if bluetooth::is_valid_mac(id) {
            return Ok(Self::BluetoothMac(id.to_ascii_uppercase()));
        }
        if bluetooth::is_rfcomm_path(id) {
            return Ok(Self::BluetoothDevice(PathBuf::from(id)));
        }
        if let Some(path) = id.strip_prefix(usb::PREFIX) {
            if !path.is_empty() {
                return Ok(Self::Usb(PathBuf::from(path)));
            }
        }
        if usb::is_printer_path(id) {
            return Ok(Self::Usb(PathBuf::from(id)));
        }
        if let Ok(uuid) = uuid::Uuid::parse_str(id) {
            return Ok(Self::BluetoothPeripheral(uuid));
        }

        Err(TransportError::InvalidIdentifier(identifier.to_string()))
    }

    pub fn kind(&self) -> PrinterKind {
        match self {
            Self::Network(_) => PrinterKind::Wifi,
            Self::BluetoothMac(_) | Self::BluetoothDevice(_) | Self::BluetoothPeripheral(_) => {
                PrinterKind::Bluetooth
            }
            Self::Usb(_) => PrinterKind::Usb,
        }
    }

    /// Open a session to this target.
    pub async fn open(&self, identifier: &str) -> Result<Arc<dyn DeviceSession>, TransportError> {
        match self {
            Self::Network(addr) => Ok(Arc::new(TcpSession::connect(*addr).await?)),
            Self::BluetoothMac(mac) => {
                let mac = mac.clone();
                let session = run_blocking(move || bluetooth::open_mac(&mac)).await?;
                Ok(Arc::new(session))
            }
            Self::BluetoothDevice(path) => {
                let (id, path) = (identifier.to_string(), path.clone());
                let session = run_blocking(move || bluetooth::open(&id, &path)).await?;
                Ok(Arc::new(session))
            }
            Self::BluetoothPeripheral(uuid) => Err(TransportError::Unsupported(format!(
                "BLE peripheral {uuid}: pair the printer and use its MAC address or RFCOMM device"
            ))),
            Self::Usb(path) => {
                let (id, path) = (identifier.to_string(), path.clone());
                let session = run_blocking(move || usb::open(&id, &path)).await?;
                Ok(Arc::new(session))
            }
        }
    }
}

impl fmt::Display for ConnectionTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Network(addr) => write!(f, "tcp://{addr}"),
            Self::BluetoothMac(mac) => write!(f, "bt://{mac}"),
            Self::BluetoothDevice(path) => write!(f, "bt://{}", path.display()),
            Self::BluetoothPeripheral(uuid) => write!(f, "ble://{uuid}"),
            Self::Usb(path) => write!(f, "usb://{}", path.display()),
        }
    }
}

/// Device opens touch the filesystem and TTY layer.
async fn run_blocking<T, F>(f: F) -> Result<T, TransportError>
where
    F: FnOnce() -> Result<T, TransportError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| TransportError::Io(std::io::Error::other(e)))?
}
