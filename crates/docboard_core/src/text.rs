//! Localization keys. Core state never holds display text, only these keys
//! or messages passed through verbatim from the backend.

pub const LIST: &str = "list";
pub const DASHBOARD: &str = "dashboard";
pub const DOCUMENTS: &str = "documents";
pub const NAME: &str = "name";
pub const DOCUMENT_TYPE: &str = "document_type";
pub const CREATED_AT: &str = "created_at";
pub const STATUS: &str = "status";
pub const PROCESS: &str = "process";
pub const NO_DATA: &str = "no_data";
pub const NO_MATCHES: &str = "no_matches";
pub const RESULTS_FOUND: &str = "results_found";
pub const RESET: &str = "reset";
pub const SELECTED: &str = "selected";
pub const LOADING: &str = "loading";
pub const RISKY_CLAUSES: &str = "risky_clauses";
pub const CONFIRMATION_HEADING: &str = "confirmation_heading";
pub const CONFIRMATION_SUBHEADING: &str = "confirmation_subheading";
pub const DOCUMENTS_PROCESSED_SUCCESSFULLY: &str = "documents_processed_successfully";
pub const ERROR_PROCESSING_DOCUMENTS: &str = "error_processing_documents";
pub const ERROR_LOADING_DOCUMENTS: &str = "error_loading_documents";
pub const NOTHING_TO_PROCESS: &str = "nothing_to_process";

/// Notification body: either a key to localize or a backend message shown as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationText {
    Key(&'static str),
    Raw(String),
}

impl NotificationText {
    /// Backend message if it says anything, otherwise the fallback key.
    pub fn message_or(message: String, fallback: &'static str) -> Self {
        if message.trim().is_empty() {
            NotificationText::Key(fallback)
        } else {
            NotificationText::Raw(message)
        }
    }
}
