//! Document board engine: HTTP collaborators and effect execution.
mod client;
mod engine;
mod types;

pub use client::{ClientSettings, DocumentApi, DocumentSource, ProcessingService};
pub use engine::{ChannelEventSink, EngineError, EngineHandle, EventSink};
pub use types::{ApiError, DocumentRecord, EngineEvent, FailureKind, ProcessItem};
