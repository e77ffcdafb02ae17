use std::sync::{mpsc, Arc};

use docboard_core::{Document, DocumentStatus, Effect, Msg, ProcessDescriptor};
use docboard_engine::{
    ClientSettings, DocumentRecord, EngineError, EngineEvent, EngineHandle, EventSink,
    ProcessItem,
};
use docboard_logging::{board_info, board_warn};

use super::app::AppEvent;
use super::locale::Catalog;
use super::ui::render;

/// Executes core effects: IO goes to the engine, notifications and
/// navigation are printed.
pub(crate) struct EffectRunner {
    engine: EngineHandle,
    catalog: Catalog,
}

impl EffectRunner {
    pub fn new(
        settings: ClientSettings,
        events: mpsc::Sender<AppEvent>,
        catalog: Catalog,
    ) -> Result<Self, EngineError> {
        let engine = EngineHandle::spawn(settings, Arc::new(MsgSink { tx: events }))?;
        Ok(Self { engine, catalog })
    }

    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::FetchDocuments { property_type_id } => {
                    board_info!("FetchDocuments property_type_id={:?}", property_type_id);
                    self.engine.fetch_documents(property_type_id);
                }
                Effect::SubmitProcessing { batch } => {
                    board_info!("SubmitProcessing items={}", batch.len());
                    self.engine
                        .submit_processing(batch.iter().map(to_process_item).collect());
                }
                Effect::Navigate(route) => {
                    board_info!("Navigate {}", route);
                    println!("{} {}", self.catalog.text("navigating_to"), route);
                }
                Effect::Notify { severity, text } => {
                    println!(
                        "{}",
                        render::notification(severity, &self.catalog.notification(&text))
                    );
                }
            }
        }
    }
}

/// Turns engine results into messages for the app loop.
struct MsgSink {
    tx: mpsc::Sender<AppEvent>,
}

impl EventSink for MsgSink {
    fn emit(&self, event: EngineEvent) {
        let _ = self.tx.send(AppEvent::Msg(map_event(event)));
    }
}

fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::DocumentsFetched(Ok(records)) => {
            Msg::DocumentsLoaded(records.into_iter().filter_map(map_record).collect())
        }
        EngineEvent::DocumentsFetched(Err(err)) => {
            board_warn!("document fetch failed: {}", err);
            Msg::DocumentsLoadFailed(err.message)
        }
        EngineEvent::ProcessingCompleted(Ok(())) => Msg::ProcessingSettled(Ok(())),
        EngineEvent::ProcessingCompleted(Err(err)) => {
            board_warn!("processing request failed: {}", err);
            Msg::ProcessingSettled(Err(err.message))
        }
    }
}

/// Records with a status outside the known lifecycle are skipped.
fn map_record(record: DocumentRecord) -> Option<Document> {
    let status: DocumentStatus = match record.status.parse() {
        Ok(status) => status,
        Err(err) => {
            board_warn!("skipping document {}: {}", record.id, err);
            return None;
        }
    };
    Some(Document {
        id: record.id,
        file_name: record.file_name,
        type_name: record.type_name.unwrap_or_default(),
        property_name: record.property_name.unwrap_or_default(),
        created_at: record.created_at.unwrap_or_default(),
        status,
        permissions: record.permissions,
        property_type_id: record.property_type_id,
        document_type_id: record.document_type_id,
    })
}

fn to_process_item(descriptor: &ProcessDescriptor) -> ProcessItem {
    ProcessItem {
        id: descriptor.id,
        property_type_id: descriptor.property_type_id,
        document_type_id: descriptor.document_type_id,
    }
}
