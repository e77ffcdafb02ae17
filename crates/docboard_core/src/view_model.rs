use crate::{Document, DocumentId, FilterCriteria, ProcessingState, SortCriteria, StatusFilter};

/// Why the table body is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyState {
    /// Nothing has been loaded.
    NoData,
    /// Rows exist but active filters hide all of them.
    NoMatches,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusTab {
    pub filter: StatusFilter,
    pub count: usize,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentRowView {
    pub document: Document,
    pub selected: bool,
    pub selectable: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub rows: Vec<DocumentRowView>,
    pub filtered_count: usize,
    pub total_count: usize,
    pub status_tabs: Vec<StatusTab>,
    pub filters: FilterCriteria,
    pub sort: SortCriteria,
    pub role_options: Vec<String>,
    pub can_reset: bool,
    pub empty_state: Option<EmptyState>,
    pub page: usize,
    pub rows_per_page: usize,
    pub rows_per_page_options: Vec<usize>,
    pub dense: bool,
    pub empty_rows: usize,
    pub selected_count: usize,
    pub selectable_count: usize,
    pub loading: bool,
    pub processing: ProcessingState,
    pub confirm_open: bool,
    pub risky_clause: Option<DocumentId>,
}
