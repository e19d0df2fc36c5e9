//! Shutdown coordination.

use tokio::sync::broadcast;

use crate::lifecycle::signals;

/// Broadcast trigger for graceful shutdown.
///
/// The server subscribes once; tests and embedding code call
/// [`Shutdown::trigger`] instead of sending a signal to the process.
#[derive(Clone)]
pub struct Shutdown {
    tx: broadcast::Sender<()>,
}

impl Shutdown {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self { tx }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.tx.subscribe()
    }

    pub fn trigger(&self) {
        let _ = self.tx.send(());
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolve on the first of: an OS termination signal, or a trigger on `rx`.
///
/// A dropped sender counts as a trigger.
pub async fn wait_for_shutdown(mut rx: broadcast::Receiver<()>) {
    tokio::select! {
        _ = signals::terminate() => {}
        _ = rx.recv() => tracing::info!("Shutdown triggered"),
    }
}
