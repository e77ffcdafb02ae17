use std::cmp::Ordering;
use std::str::FromStr;

use crate::{ConfigError, Document};

/// Sortable table columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortField {
    Id,
    FileName,
    TypeName,
    PropertyName,
    CreatedAt,
    Status,
}

impl SortField {
    pub const ALL: [SortField; 6] = [
        SortField::Id,
        SortField::FileName,
        SortField::TypeName,
        SortField::PropertyName,
        SortField::CreatedAt,
        SortField::Status,
    ];

    /// Column key as used in configuration and table headers.
    pub fn as_str(self) -> &'static str {
        match self {
            SortField::Id => "id",
            SortField::FileName => "file_name",
            SortField::TypeName => "type_name",
            SortField::PropertyName => "property_name",
            SortField::CreatedAt => "created_at",
            SortField::Status => "status",
        }
    }

    fn compare(self, a: &Document, b: &Document) -> Ordering {
        match self {
            SortField::Id => a.id.cmp(&b.id),
            SortField::FileName => a.file_name.cmp(&b.file_name),
            SortField::TypeName => a.type_name.cmp(&b.type_name),
            SortField::PropertyName => a.property_name.cmp(&b.property_name),
            SortField::CreatedAt => a.created_at.cmp(&b.created_at),
            SortField::Status => a.status.as_str().cmp(b.status.as_str()),
        }
    }
}

impl FromStr for SortField {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortField::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| ConfigError::UnknownSortField(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortDirection {
    Ascending,
    #[default]
    Descending,
}

impl SortDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        }
    }
}

impl FromStr for SortDirection {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortDirection::Ascending),
            "desc" => Ok(SortDirection::Descending),
            other => Err(ConfigError::UnknownSortDirection(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SortCriteria {
    pub field: SortField,
    pub direction: SortDirection,
}

impl Default for SortCriteria {
    fn default() -> Self {
        Self {
            field: SortField::CreatedAt,
            direction: SortDirection::Descending,
        }
    }
}

impl SortCriteria {
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// Header click: the active ascending column flips to descending,
    /// anything else sorts ascending on the clicked column.
    pub fn toggled(self, field: SortField) -> Self {
        let direction = if self.field == field && self.direction == SortDirection::Ascending {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        };
        Self { field, direction }
    }

    pub fn compare(&self, a: &Document, b: &Document) -> Ordering {
        let ordering = self.field.compare(a, b);
        match self.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}
