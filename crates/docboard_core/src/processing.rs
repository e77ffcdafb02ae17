use crate::{Document, DocumentId, Selection};

/// Minimal per-document payload for the processing backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessDescriptor {
    pub id: DocumentId,
    pub property_type_id: Option<u64>,
    pub document_type_id: Option<u64>,
}

impl From<&Document> for ProcessDescriptor {
    fn from(doc: &Document) -> Self {
        Self {
            id: doc.id,
            property_type_id: doc.property_type_id,
            document_type_id: doc.document_type_id,
        }
    }
}

/// Descriptors for rows that are selected and still eligible, in load order.
///
/// A row selected while `Received` that has since moved on is left out.
pub fn build_batch(rows: &[Document], selection: &Selection) -> Vec<ProcessDescriptor> {
    rows.iter()
        .filter(|doc| doc.status.is_processable() && selection.contains(doc.id))
        .map(ProcessDescriptor::from)
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessingOutcome {
    Succeeded,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ProcessingState {
    #[default]
    Idle,
    InFlight,
    Settled(ProcessingOutcome),
}

impl ProcessingState {
    pub fn is_in_flight(&self) -> bool {
        matches!(self, ProcessingState::InFlight)
    }
}
