use std::sync::{mpsc, Arc, Mutex};
use std::thread;

use simplify_logging::simplify_debug;

use crate::client::{ClientSettings, ReqwestSnapshotClient, SnapshotClient};
use crate::EngineEvent;

enum EngineCommand {
    Clean { html: String },
}

/// Handle to the fetch thread.
///
/// Commands go to a dedicated thread that owns a tokio runtime; completions
/// come back over an event channel polled by the host layer. The state
/// machine guarantees at most one clean request per page lifetime, so the
/// engine does no in-flight bookkeeping of its own.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: Mutex<mpsc::Receiver<EngineEvent>>,
}

impl EngineHandle {
    pub fn new(settings: ClientSettings) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let client = Arc::new(ReqwestSnapshotClient::new(settings));

        thread::spawn(move || {
            let runtime = match tokio::runtime::Runtime::new() {
                Ok(runtime) => runtime,
                Err(err) => {
                    simplify_logging::simplify_error!("engine runtime unavailable: {err}");
                    return;
                }
            };
            while let Ok(command) = cmd_rx.recv() {
                let client = client.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(client.as_ref(), command, event_tx).await;
                });
            }
        });

        Self {
            cmd_tx,
            event_rx: Mutex::new(event_rx),
        }
    }

    /// Enqueues one cleaning request for the given document text.
    pub fn enqueue_clean(&self, html: impl Into<String>) {
        let _ = self.cmd_tx.send(EngineCommand::Clean { html: html.into() });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx
            .lock()
            .ok()
            .and_then(|rx| rx.try_recv().ok())
    }
}

async fn handle_command(
    client: &dyn SnapshotClient,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Clean { html } => {
            simplify_debug!("cleaning request started ({} bytes)", html.len());
            let result = client.fetch_cleaned(&html).await;
            let _ = event_tx.send(EngineEvent::CleanCompleted { result });
        }
    }
}
