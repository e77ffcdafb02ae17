use std::fmt;

use crate::DocumentId;

/// Navigation targets reachable from a table row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Edit(DocumentId),
    ExtractedData(DocumentId),
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Route::Edit(id) => format!("/dashboard/documents/{id}/edit"),
            Route::ExtractedData(id) => format!("/dashboard/documents/{id}/extracted-data"),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
