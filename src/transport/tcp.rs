//! # Network Transport (TCP port 9100)
//!
//! Most WiFi/Ethernet receipt printers accept raw ESC/POS on TCP port 9100.
//! The session keeps one stream open from connect until disconnect.

use std::net::SocketAddr;
use std::time::Duration;

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;
use tokio::sync::Mutex;
use tracing::{info, instrument, warn};

use super::DeviceSession;
use crate::error::TransportError;
use crate::printer::PrinterKind;

/// Raw printing port used when the identifier has none.
pub const DEFAULT_PORT: u16 = 9100;

/// Default connect timeout.
pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Default limit for one write plus flush. A printer that stops reading
/// must not hold the session lock forever.
pub const WRITE_TIMEOUT: Duration = Duration::from_secs(10);

/// An open TCP connection to a network printer.
#[derive(Debug)]
pub struct TcpSession {
    addr: SocketAddr,
    target: String,
    stream: Mutex<Option<TcpStream>>,
    write_timeout: Duration,
}

impl TcpSession {
    /// Connect with the default timeout.
    pub async fn connect(addr: SocketAddr) -> Result<Self, TransportError> {
        Self::connect_with_timeout(addr, CONNECT_TIMEOUT).await
    }

    #[instrument(skip_all, fields(addr = %addr))]
    pub async fn connect_with_timeout(
        addr: SocketAddr,
        timeout: Duration,
    ) -> Result<Self, TransportError> {
        let stream = tokio::time::timeout(timeout, TcpStream::connect(addr))
            .await
            .map_err(|_| TransportError::Timeout(timeout))?
            .map_err(|e| TransportError::Connection {
                target: addr.to_string(),
                reason: e.to_string(),
            })?;
        stream.set_nodelay(true)?;

        info!("Connected to network printer");
        Ok(Self {
            addr,
            target: addr.to_string(),
            stream: Mutex::new(Some(stream)),
            write_timeout: WRITE_TIMEOUT,
        })
    }

    pub fn with_write_timeout(mut self, timeout: Duration) -> Self {
        self.write_timeout = timeout;
        self
    }
}

#[async_trait]
impl DeviceSession for TcpSession {
    fn kind(&self) -> PrinterKind {
        PrinterKind::Wifi
    }

    fn target(&self) -> &str {
        &self.target
    }

    #[instrument(skip(self, data), fields(addr = %self.addr, data_len = data.len()))]
    async fn send(&self, data: &[u8]) -> Result<(), TransportError> {
        let mut guard = self.stream.lock().await;
        let stream = guard
            .as_mut()
            .ok_or_else(|| TransportError::NotConnected(self.target.clone()))?;

        let write = async {
            stream.write_all(data).await?;
            stream.flush().await
        };

        match tokio::time::timeout(self.write_timeout, write).await {
            Ok(Ok(())) => Ok(()),
            Ok(Err(e)) => {
                warn!(error = %e, "Write failed, dropping connection");
                *guard = None;
                Err(TransportError::Io(e))
            }
            Err(_) => {
                warn!(timeout = ?self.write_timeout, "Write timed out, dropping connection");
                *guard = None;
                Err(TransportError::Timeout(self.write_timeout))
            }
        }
    }

    async fn is_connected(&self) -> bool {
        self.stream.lock().await.is_some()
    }

    #[instrument(skip(self), fields(addr = %self.addr))]
    async fn disconnect(&self) -> Result<(), TransportError> {
        if let Some(mut stream) = self.stream.lock().await.take() {
            if let Err(e) = stream.shutdown().await {
                warn!(error = %e, "Shutdown failed");
            }
            info!("Disconnected");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::AsyncReadExt;
    use tokio::net::TcpListener;

    #[tokio::test]
    async fn test_send_reaches_listener() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let server = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut received = Vec::new();
            socket.read_to_end(&mut received).await.unwrap();
            received
        });

        let session = TcpSession::connect(addr).await.unwrap();
        assert_eq!(session.kind(), PrinterKind::Wifi);
        session.send(&[0x1B, 0x40]).await.unwrap();
        session.send(b"hi").await.unwrap();
        session.disconnect().await.unwrap();

        assert_eq!(server.await.unwrap(), vec![0x1B, 0x40, b'h', b'i']);
    }

    #[tokio::test]
    async fn test_send_after_disconnect_fails() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (_socket, _) = listener.accept().await.unwrap();
            tokio::time::sleep(Duration::from_secs(1)).await;
        });

        let session = TcpSession::connect(addr).await.unwrap();
        assert!(session.is_connected().await);
        session.disconnect().await.unwrap();
        assert!(!session.is_connected().await);
        let err = session.send(b"x").await.unwrap_err();
        assert!(matches!(err, TransportError::NotConnected(_)));
    }

    #[tokio::test]
    async fn test_stalled_printer_times_out() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (release, held) = tokio::sync::oneshot::channel::<()>();
        tokio::spawn(async move {
            // Accept and never read, so the send buffers fill up.
            let (_socket, _) = listener.accept().await.unwrap();
            let _ = held.await;
        });

        let session = TcpSession::connect(addr)
            .await
            .unwrap()
            .with_write_timeout(Duration::from_millis(200));
        let job = vec![0u8; 64 * 1024 * 1024];

        let err = tokio::time::timeout(Duration::from_secs(5), session.send(&job))
            .await
            .expect("send should give up on its own")
            .unwrap_err();
        assert!(matches!(err, TransportError::Timeout(t) if t == Duration::from_millis(200)));
        assert!(!session.is_connected().await);
        let _ = release.send(());
    }

    #[tokio::test]
    async fn test_connect_refused() {
        // Bind then drop to get a port nothing listens on.
        let addr = {
            let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
            listener.local_addr().unwrap()
        };
        let err = TcpSession::connect(addr).await.unwrap_err();
        assert!(matches!(err, TransportError::Connection { .. }));
    }
}
