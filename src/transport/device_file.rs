//! Sessions backed by a character device (`/dev/rfcommN`, `/dev/usb/lpN`).
//!
//! Writes are blocking file I/O, so they run on tokio's blocking pool.
//! Large jobs are written in chunks with a short pause between them to
//! avoid overrunning small device buffers.
//!
//! Connection state lives in an atomic flag next to the file, so status
//! checks and disconnects never wait behind a long write. A disconnect
//! stops an in-flight job at the next chunk boundary.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, instrument};

use super::DeviceSession;
use crate::error::TransportError;
use crate::printer::PrinterKind;

/// Default chunk size for writes (bytes)
pub const CHUNK_SIZE: usize = 4096;

/// Default pause between chunks
pub const CHUNK_DELAY: Duration = Duration::from_millis(2);

/// An open printer device file.
#[derive(Debug)]
pub struct DeviceFileSession {
    kind: PrinterKind,
    target: String,
    path: PathBuf,
    file: Arc<Mutex<Option<File>>>,
    connected: Arc<AtomicBool>,
    chunk_size: usize,
    chunk_delay: Duration,
}

impl DeviceFileSession {
    /// Wrap an already opened and configured device file.
    pub fn new(kind: PrinterKind, target: impl Into<String>, path: &Path, file: File) -> Self {
        Self {
            kind,
            target: target.into(),
            path: path.to_path_buf(),
            file: Arc::new(Mutex::new(Some(file))),
            connected: Arc::new(AtomicBool::new(true)),
            chunk_size: CHUNK_SIZE,
            chunk_delay: CHUNK_DELAY,
        }
    }

    /// Larger chunks are faster but may overflow the device buffer.
    pub fn with_chunking(mut self, chunk_size: usize, chunk_delay: Duration) -> Self {
        self.chunk_size = chunk_size.max(1);
        self.chunk_delay = chunk_delay;
        self
    }
}

fn write_chunked(
    file: &mut File,
    data: &[u8],
    chunk_size: usize,
    delay: Duration,
    connected: &AtomicBool,
    target: &str,
) -> Result<(), TransportError> {
    if data.len() <= chunk_size {
        file.write_all(data)?;
    } else {
        for chunk in data.chunks(chunk_size) {
            if !connected.load(Ordering::Acquire) {
                return Err(TransportError::NotConnected(target.to_string()));
            }
            file.write_all(chunk)?;
            if !delay.is_zero() {
                thread::sleep(delay);
            }
        }
    }
    file.flush()?;
    Ok(())
}

#[async_trait]
impl DeviceSession for DeviceFileSession {
    fn kind(&self) -> PrinterKind {
        self.kind
    }

    fn target(&self) -> &str {
        &self.target
    }

    #[instrument(skip(self, data), fields(device = %self.path.display(), data_len = data.len()))]
    async fn send(&self, data: &[u8]) -> Result<(), TransportError> {
        if !self.connected.load(Ordering::Acquire) {
            return Err(TransportError::NotConnected(self.target.clone()));
        }
        let file = Arc::clone(&self.file);
        let connected = Arc::clone(&self.connected);
        let data = data.to_vec();
        let (chunk_size, delay) = (self.chunk_size, self.chunk_delay);
        let target = self.target.clone();

        tokio::task::spawn_blocking(move || {
            let mut guard = file.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
            let file = match guard.as_mut() {
                Some(file) if connected.load(Ordering::Acquire) => file,
                _ => return Err(TransportError::NotConnected(target)),
            };
            write_chunked(file, &data, chunk_size, delay, &connected, &target)
        })
        .await
        .map_err(|e| TransportError::Io(std::io::Error::other(e)))??;

        debug!("Device write complete");
        Ok(())
    }

    async fn is_connected(&self) -> bool {
        self.connected.load(Ordering::Acquire)
    }

    #[instrument(skip(self), fields(device = %self.path.display()))]
    async fn disconnect(&self) -> Result<(), TransportError> {
        if !self.connected.swap(false, Ordering::AcqRel) {
            return Ok(());
        }
        // A writer in progress holds the lock until its next chunk boundary.
        let file = Arc::clone(&self.file);
        tokio::task::spawn_blocking(move || {
            file.lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner())
                .take();
        })
        .await
        .map_err(|e| TransportError::Io(std::io::Error::other(e)))?;
        debug!("Device closed");
        Ok(())
    }
}
