use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Document as delivered by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentRecord {
    pub id: u64,
    pub file_name: String,
    #[serde(default)]
    pub type_name: Option<String>,
    #[serde(default)]
    pub property_name: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    pub status: String,
    #[serde(default)]
    pub permissions: Vec<String>,
    #[serde(default)]
    pub property_type_id: Option<u64>,
    #[serde(default)]
    pub document_type_id: Option<u64>,
}

/// One entry of a `/process-documents` batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessItem {
    pub id: u64,
    pub property_type_id: Option<u64>,
    pub document_type_id: Option<u64>,
}

/// Listing payloads come either bare or wrapped.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum DocumentsPayload {
    Bare(Vec<DocumentRecord>),
    Wrapped { documents: Vec<DocumentRecord> },
}

impl DocumentsPayload {
    pub(crate) fn into_records(self) -> Vec<DocumentRecord> {
        match self {
            DocumentsPayload::Bare(records) => records,
            DocumentsPayload::Wrapped { documents } => documents,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    DocumentsFetched(Result<Vec<DocumentRecord>, ApiError>),
    ProcessingCompleted(Result<(), ApiError>),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct ApiError {
    pub kind: FailureKind,
    pub message: String,
}

impl ApiError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    HttpStatus(u16),
    Timeout,
    TooLarge { max_bytes: u64, actual: Option<u64> },
    Decode,
    Encode,
    Network,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::TooLarge { max_bytes, actual } => {
                write!(f, "response too large (max {max_bytes}, actual {actual:?})")
            }
            FailureKind::Decode => write!(f, "malformed response"),
            FailureKind::Encode => write!(f, "request encoding failed"),
            FailureKind::Network => write!(f, "network error"),
        }
    }
}
