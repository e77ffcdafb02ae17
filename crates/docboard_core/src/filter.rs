use std::collections::{BTreeMap, BTreeSet};
use std::str::FromStr;

use crate::{ConfigError, Document, DocumentStatus};

const DEFAULT_ROLES: &[(&str, &str)] = &[
    ("production_head", "Production Head"),
    ("initiator", "Initiator"),
    ("validator", "Validator"),
];

/// Status tab selection; `All` never appears on a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(DocumentStatus),
}

impl StatusFilter {
    pub fn matches(self, status: DocumentStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => wanted == status,
        }
    }

    pub fn label_key(self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Only(status) => status.label_key(),
        }
    }
}

impl FromStr for StatusFilter {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            Ok(StatusFilter::All)
        } else {
            s.parse().map(StatusFilter::Only)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterCriteria {
    /// Free-text substring, matched case-insensitively.
    pub name: String,
    /// Role labels (not codes).
    pub roles: BTreeSet<String>,
    pub status: StatusFilter,
}

impl FilterCriteria {
    pub fn with_status(mut self, status: StatusFilter) -> Self {
        self.status = status;
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_roles<I, S>(mut self, roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.roles = roles.into_iter().map(Into::into).collect();
        self
    }
}

/// Fixed mapping from permission codes stored on documents to role labels
/// offered in the toolbar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleTable {
    labels: BTreeMap<String, String>,
}

impl Default for RoleTable {
    fn default() -> Self {
        DEFAULT_ROLES
            .iter()
            .fold(Self::empty(), |table, (code, label)| {
                table.with_entry(*code, *label)
            })
    }
}

impl RoleTable {
    pub fn empty() -> Self {
        Self {
            labels: BTreeMap::new(),
        }
    }

    pub fn with_entry(mut self, code: impl Into<String>, label: impl Into<String>) -> Self {
        self.labels.insert(code.into(), label.into());
        self
    }

    pub fn label_for(&self, code: &str) -> Option<&str> {
        self.labels.get(code).map(String::as_str)
    }

    /// Labels in code order, for the role picker.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.labels.values().map(String::as_str)
    }

    /// True if any of the document's permissions maps to a wanted label.
    pub(crate) fn grants_any(&self, document: &Document, wanted: &BTreeSet<String>) -> bool {
        document
            .permissions
            .iter()
            .filter_map(|code| self.label_for(code))
            .any(|label| wanted.contains(label))
    }
}
