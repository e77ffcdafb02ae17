use std::fmt;
use std::str::FromStr;

use crate::ConfigError;

pub type DocumentId = u64;

/// Lifecycle state of a document as reported by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DocumentStatus {
    Received,
    InProgress,
    Processed,
    Failed,
}

impl DocumentStatus {
    pub const ALL: [DocumentStatus; 4] = [
        DocumentStatus::Received,
        DocumentStatus::InProgress,
        DocumentStatus::Processed,
        DocumentStatus::Failed,
    ];

    /// Wire and search representation.
    pub fn as_str(self) -> &'static str {
        match self {
            DocumentStatus::Received => "Received",
            DocumentStatus::InProgress => "InProgress",
            DocumentStatus::Processed => "Processed",
            DocumentStatus::Failed => "Failed",
        }
    }

    /// Localization key for the status tab label.
    pub fn label_key(self) -> &'static str {
        match self {
            DocumentStatus::Received => "received",
            DocumentStatus::InProgress => "in_progress",
            DocumentStatus::Processed => "processed",
            DocumentStatus::Failed => "failed",
        }
    }

    /// Only freshly received documents may be submitted for processing.
    pub fn is_processable(self) -> bool {
        matches!(self, DocumentStatus::Received)
    }
}

impl fmt::Display for DocumentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocumentStatus {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DocumentStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| ConfigError::UnknownStatus(s.to_string()))
    }
}

/// One document row as loaded from the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub id: DocumentId,
    pub file_name: String,
    pub type_name: String,
    pub property_name: String,
    /// RFC 3339 timestamp; lexicographic order is chronological order.
    pub created_at: String,
    pub status: DocumentStatus,
    pub permissions: Vec<String>,
    pub property_type_id: Option<u64>,
    pub document_type_id: Option<u64>,
}

impl Document {
    pub fn new(id: DocumentId, file_name: impl Into<String>, status: DocumentStatus) -> Self {
        Self {
            id,
            file_name: file_name.into(),
            type_name: String::new(),
            property_name: String::new(),
            created_at: String::new(),
            status,
            permissions: Vec::new(),
            property_type_id: None,
            document_type_id: None,
        }
    }

    pub fn with_type_name(mut self, type_name: impl Into<String>) -> Self {
        self.type_name = type_name.into();
        self
    }

    pub fn with_property_name(mut self, property_name: impl Into<String>) -> Self {
        self.property_name = property_name.into();
        self
    }

    pub fn with_created_at(mut self, created_at: impl Into<String>) -> Self {
        self.created_at = created_at.into();
        self
    }

    pub fn with_permissions<I, S>(mut self, permissions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.permissions = permissions.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_foreign_keys(mut self, property_type_id: u64, document_type_id: u64) -> Self {
        self.property_type_id = Some(property_type_id);
        self.document_type_id = Some(document_type_id);
        self
    }

    /// True if any scalar field contains `needle_lower`, which must already be lowercase.
    pub(crate) fn contains_text(&self, needle_lower: &str) -> bool {
        let text_fields = [
            self.file_name.as_str(),
            self.type_name.as_str(),
            self.property_name.as_str(),
            self.created_at.as_str(),
            self.status.as_str(),
        ];
        if text_fields
            .iter()
            .any(|field| field.to_lowercase().contains(needle_lower))
        {
            return true;
        }

        [Some(self.id), self.property_type_id, self.document_type_id]
            .into_iter()
            .flatten()
            .any(|number| number.to_string().contains(needle_lower))
    }
}
