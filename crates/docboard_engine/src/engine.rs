use std::io;
use std::sync::{mpsc, Arc};
use std::thread;

use docboard_logging::{board_debug, board_info};
use thiserror::Error;

use crate::client::{ClientSettings, DocumentApi, DocumentSource, ProcessingService};
use crate::{ApiError, EngineEvent, ProcessItem};

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("http client setup failed: {0}")]
    Client(#[from] ApiError),
    #[error("async runtime setup failed: {0}")]
    Runtime(#[from] io::Error),
    #[error("engine worker thread failed to start: {0}")]
    Thread(String),
}

/// Receives engine results, from the worker thread.
pub trait EventSink: Send + Sync {
    fn emit(&self, event: EngineEvent);
}

pub struct ChannelEventSink {
    tx: mpsc::Sender<EngineEvent>,
}

impl ChannelEventSink {
    pub fn new(tx: mpsc::Sender<EngineEvent>) -> Self {
        Self { tx }
    }
}

impl EventSink for ChannelEventSink {
    fn emit(&self, event: EngineEvent) {
        // Receiver gone means the owner was torn down; the result is discarded.
        let _ = self.tx.send(event);
    }
}

enum EngineCommand {
    FetchDocuments { property_type_id: Option<u64> },
    SubmitProcessing { batch: Vec<ProcessItem> },
}

/// Handle to the IO worker. Commands are fire-and-forget; each produces
/// exactly one `EngineEvent` on the sink.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
}

impl EngineHandle {
    pub fn spawn(settings: ClientSettings, sink: Arc<dyn EventSink>) -> Result<Self, EngineError> {
        let api = Arc::new(DocumentApi::new(settings)?);
        Self::with_api(api, sink)
    }

    /// Runs commands against any pair of collaborators (one type implementing both).
    pub fn with_api<A>(api: Arc<A>, sink: Arc<dyn EventSink>) -> Result<Self, EngineError>
    where
        A: DocumentSource + ProcessingService + 'static,
    {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let runtime = tokio::runtime::Runtime::new()?;

        thread::Builder::new()
            .name("docboard-engine".to_string())
            .spawn(move || {
                while let Ok(command) = cmd_rx.recv() {
                    let api = api.clone();
                    let sink = sink.clone();
                    runtime.spawn(async move {
                        let event = handle_command(api.as_ref(), command).await;
                        sink.emit(event);
                    });
                }
                board_debug!("engine command channel closed; worker exiting");
            })
            .map_err(|err| EngineError::Thread(err.to_string()))?;

        Ok(Self { cmd_tx })
    }

    pub fn fetch_documents(&self, property_type_id: Option<u64>) {
        let _ = self
            .cmd_tx
            .send(EngineCommand::FetchDocuments { property_type_id });
    }

    pub fn submit_processing(&self, batch: Vec<ProcessItem>) {
        let _ = self.cmd_tx.send(EngineCommand::SubmitProcessing { batch });
    }
}

async fn handle_command<A>(api: &A, command: EngineCommand) -> EngineEvent
where
    A: DocumentSource + ProcessingService,
{
    match command {
        EngineCommand::FetchDocuments { property_type_id } => {
            let result = api.fetch_documents(property_type_id).await;
            if let Ok(records) = &result {
                board_info!("fetched {} documents", records.len());
            }
            EngineEvent::DocumentsFetched(result)
        }
        EngineCommand::SubmitProcessing { batch } => {
            let result = api.submit(&batch).await;
            EngineEvent::ProcessingCompleted(result)
        }
    }
}
