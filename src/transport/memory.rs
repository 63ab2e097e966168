//! In-memory session that records every job instead of printing it.

use std::sync::Mutex;

use async_trait::async_trait;

use super::DeviceSession;
use crate::error::TransportError;
use crate::printer::PrinterKind;

/// Records sent jobs. Can be told to reject writes to simulate an
/// unreachable printer.
#[derive(Debug)]
pub struct MemorySession {
    kind: PrinterKind,
    target: String,
    state: Mutex<State>,
}

#[derive(Debug, Default)]
struct State {
    jobs: Vec<Vec<u8>>,
    connected: bool,
    offline: bool,
}

impl MemorySession {
    pub fn new(kind: PrinterKind, target: impl Into<String>) -> Self {
        Self {
            kind,
            target: target.into(),
            state: Mutex::new(State {
                connected: true,
                ..State::default()
            }),
        }
    }

    /// Make subsequent sends fail with [`TransportError::Offline`].
    pub fn set_offline(&self, offline: bool) {
        self.lock().offline = offline;
    }

    /// Every job sent so far, oldest first.
    pub fn jobs(&self) -> Vec<Vec<u8>> {
        self.lock().jobs.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl DeviceSession for MemorySession {
    fn kind(&self) -> PrinterKind {
        self.kind
    }

    fn target(&self) -> &str {
        &self.target
    }

    async fn send(&self, data: &[u8]) -> Result<(), TransportError> {
        let mut state = self.lock();
        if !state.connected {
            return Err(TransportError::NotConnected(self.target.clone()));
        }
        if state.offline {
            return Err(TransportError::Offline(self.target.clone()));
        }
        state.jobs.push(data.to_vec());
        Ok(())
    }

    async fn is_connected(&self) -> bool {
        self.lock().connected
    }

    async fn disconnect(&self) -> Result<(), TransportError> {
        self.lock().connected = false;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_records_jobs() {
        let session = MemorySession::new(PrinterKind::Wifi, "10.0.0.5");
        session.send(b"one").await.unwrap();
        session.send(b"two").await.unwrap();
        assert_eq!(session.jobs(), vec![b"one".to_vec(), b"two".to_vec()]);
    }

    #[tokio::test]
    async fn test_offline_rejects() {
        let session = MemorySession::new(PrinterKind::Bluetooth, "AA:BB:CC:DD:EE:FF");
        session.set_offline(true);
        assert!(matches!(
            session.send(b"x").await,
            Err(TransportError::Offline(_))
        ));
        assert!(session.jobs().is_empty());
    }
}
