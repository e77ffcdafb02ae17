use crate::{NotificationText, ProcessDescriptor, Route};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    FetchDocuments { property_type_id: Option<u64> },
    SubmitProcessing { batch: Vec<ProcessDescriptor> },
    Navigate(Route),
    Notify { severity: Severity, text: NotificationText },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Info,
    Error,
}
