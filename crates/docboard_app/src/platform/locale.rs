use std::collections::BTreeMap;

use docboard_core::text::{self, NotificationText};

const ENGLISH: &[(&str, &str)] = &[
    (text::LIST, "List"),
    (text::DASHBOARD, "Dashboard"),
    (text::DOCUMENTS, "Documents"),
    (text::NAME, "Name"),
    (text::DOCUMENT_TYPE, "Document type"),
    (text::CREATED_AT, "Created at"),
    (text::STATUS, "Status"),
    (text::PROCESS, "Process"),
    (text::NO_DATA, "No documents yet"),
    (text::NO_MATCHES, "No documents match the current filters"),
    (text::RESULTS_FOUND, "results found"),
    (text::RESET, "reset"),
    (text::SELECTED, "selected"),
    (text::LOADING, "Loading..."),
    (text::RISKY_CLAUSES, "Risky clauses"),
    (text::CONFIRMATION_HEADING, "Process documents"),
    (
        text::CONFIRMATION_SUBHEADING,
        "Send the selected documents for processing?",
    ),
    (
        text::DOCUMENTS_PROCESSED_SUCCESSFULLY,
        "Documents sent for processing",
    ),
    (
        text::ERROR_PROCESSING_DOCUMENTS,
        "Processing failed, please try again",
    ),
    (text::ERROR_LOADING_DOCUMENTS, "Could not load documents"),
    (text::NOTHING_TO_PROCESS, "Select at least one received document"),
    ("all", "All"),
    ("received", "Received"),
    ("in_progress", "In progress"),
    ("processed", "Processed"),
    ("failed", "Failed"),
    ("navigating_to", "Opening"),
    ("page", "Page"),
    ("of", "of"),
    ("rows_per_page", "Rows per page"),
];

/// Display text lookup. Unknown keys render as the key itself.
#[derive(Debug, Clone)]
pub(crate) struct Catalog {
    strings: BTreeMap<String, String>,
}

impl Catalog {
    pub fn english() -> Self {
        Self {
            strings: ENGLISH
                .iter()
                .map(|(key, value)| (key.to_string(), value.to_string()))
                .collect(),
        }
    }

    pub fn with_overrides(mut self, overrides: impl IntoIterator<Item = (String, String)>) -> Self {
        self.strings.extend(overrides);
        self
    }

    pub fn text<'a>(&'a self, key: &'a str) -> &'a str {
        self.strings.get(key).map(String::as_str).unwrap_or(key)
    }

    pub fn notification(&self, text: &NotificationText) -> String {
        match text {
            NotificationText::Key(key) => self.text(key).to_string(),
            NotificationText::Raw(message) => message.clone(),
        }
    }
}
