use std::collections::BTreeSet;
use std::sync::Arc;

use docboard_logging::board_debug;

use crate::pipeline::{self, PageWindow};
use crate::view_model::{AppViewModel, DocumentRowView, EmptyState, StatusTab};
use crate::{
    Document, DocumentId, FilterCriteria, ProcessingOutcome, ProcessingState, Selection,
    SortCriteria, SortField, StatusFilter, ViewConfig,
};

/// View state owned by a single event loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    config: Arc<ViewConfig>,
    rows: Vec<Document>,
    loading: bool,
    filters: FilterCriteria,
    sort: SortCriteria,
    page: usize,
    rows_per_page: usize,
    dense: bool,
    selection: Selection,
    processing: ProcessingState,
    confirm_open: bool,
    risky_clause: Option<DocumentId>,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ViewConfig::default())
    }
}

impl AppState {
    pub fn new(config: ViewConfig) -> Self {
        Self::with_shared_config(Arc::new(config))
    }

    pub fn with_shared_config(config: Arc<ViewConfig>) -> Self {
        Self {
            rows: Vec::new(),
            loading: false,
            filters: config.default_filters().clone(),
            sort: config.default_sort(),
            page: 0,
            rows_per_page: config.rows_per_page(),
            dense: false,
            selection: Selection::new(),
            processing: ProcessingState::Idle,
            confirm_open: false,
            risky_clause: None,
            dirty: false,
            config,
        }
    }

    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    pub fn rows(&self) -> &[Document] {
        &self.rows
    }

    pub fn filters(&self) -> &FilterCriteria {
        &self.filters
    }

    pub fn sort(&self) -> SortCriteria {
        self.sort
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn processing(&self) -> &ProcessingState {
        &self.processing
    }

    /// True while a document fetch is outstanding.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_confirm_open(&self) -> bool {
        self.confirm_open
    }

    pub fn page_window(&self) -> PageWindow {
        PageWindow::new(self.page, self.rows_per_page)
    }

    pub fn can_reset(&self) -> bool {
        self.filters != *self.config.default_filters()
    }

    pub fn contains(&self, id: DocumentId) -> bool {
        self.rows.iter().any(|doc| doc.id == id)
    }

    /// Returns the dirty flag and clears it.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub fn view(&self) -> AppViewModel {
        let filtered = self.filtered();
        let window = self.page_window();
        let rows = pipeline::page_slice(&filtered, window)
            .iter()
            .map(|doc| DocumentRowView {
                document: (*doc).clone(),
                selected: self.selection.contains(doc.id),
                selectable: doc.status.is_processable(),
            })
            .collect();

        let empty_state = match (self.rows.is_empty(), filtered.is_empty()) {
            (true, _) => Some(EmptyState::NoData),
            (false, true) => Some(EmptyState::NoMatches),
            (false, false) => None,
        };

        let status_tabs = pipeline::status_counts(&self.rows)
            .into_iter()
            .map(|(filter, count)| StatusTab {
                filter,
                count,
                active: filter == self.filters.status,
            })
            .collect();

        AppViewModel {
            rows,
            filtered_count: filtered.len(),
            total_count: self.rows.len(),
            status_tabs,
            filters: self.filters.clone(),
            sort: self.sort,
            role_options: self.config.roles().labels().map(str::to_string).collect(),
            can_reset: self.can_reset(),
            empty_state,
            page: self.page,
            rows_per_page: self.rows_per_page,
            rows_per_page_options: self.config.rows_per_page_options().to_vec(),
            dense: self.dense,
            empty_rows: pipeline::empty_rows(self.page, self.rows_per_page, filtered.len()),
            selected_count: self.selection.len(),
            selectable_count: self.eligible_ids().count(),
            loading: self.loading,
            processing: self.processing.clone(),
            confirm_open: self.confirm_open,
            risky_clause: self.risky_clause,
        }
    }

    fn filtered(&self) -> Vec<&Document> {
        pipeline::filtered_rows(&self.rows, &self.filters, self.config.roles(), self.sort)
    }

    fn eligible_ids(&self) -> impl Iterator<Item = DocumentId> + '_ {
        self.rows
            .iter()
            .filter(|doc| doc.status.is_processable())
            .map(|doc| doc.id)
    }

    fn clamp_page(&mut self) {
        let total = self.filtered().len();
        self.page = pipeline::clamp_page(self.page, self.rows_per_page, total);
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn begin_loading(&mut self) {
        self.loading = true;
        self.mark_dirty();
    }

    pub(crate) fn finish_loading(&mut self) {
        self.loading = false;
        self.mark_dirty();
    }

    /// Replaces every row; stale selections and an
    /// open inspector for a vanished row are dropped.
    pub(crate) fn replace_rows(&mut self, rows: Vec<Document>) {
        self.rows = rows;
        self.loading = false;
        let known: BTreeSet<DocumentId> = self.rows.iter().map(|doc| doc.id).collect();
        let dropped = self.selection.retain_known(|id| known.contains(&id));
        if dropped > 0 {
            board_debug!("dropped {} stale selections after reload", dropped);
        }
        if self.risky_clause.is_some_and(|id| !known.contains(&id)) {
            self.risky_clause = None;
        }
        self.clamp_page();
        self.mark_dirty();
    }

    pub(crate) fn set_filter_name(&mut self, name: String) {
        self.filters.name = name;
        self.page = 0;
        self.mark_dirty();
    }

    pub(crate) fn set_filter_roles(&mut self, roles: BTreeSet<String>) {
        self.filters.roles = roles;
        self.page = 0;
        self.mark_dirty();
    }

    pub(crate) fn set_filter_status(&mut self, status: StatusFilter) {
        self.filters.status = status;
        self.page = 0;
        self.mark_dirty();
    }

    pub(crate) fn reset_filters(&mut self) {
        self.filters = self.config.default_filters().clone();
        self.clamp_page();
        self.mark_dirty();
    }

    pub(crate) fn sort_by(&mut self, field: SortField) {
        self.sort = self.sort.toggled(field);
        self.mark_dirty();
    }

    pub(crate) fn set_page(&mut self, page: usize) {
        self.page = page;
        self.clamp_page();
        self.mark_dirty();
    }

    /// Returns false if `size` is not an allowed option.
    pub(crate) fn set_rows_per_page(&mut self, size: usize) -> bool {
        if !self.config.rows_per_page_options().contains(&size) {
            return false;
        }
        self.rows_per_page = size;
        self.page = 0;
        self.mark_dirty();
        true
    }

    pub(crate) fn set_dense(&mut self, dense: bool) {
        self.dense = dense;
        self.mark_dirty();
    }

    /// Returns false if `id` is unknown or not eligible.
    pub(crate) fn toggle_row(&mut self, id: DocumentId) -> bool {
        let eligible = self
            .rows
            .iter()
            .any(|doc| doc.id == id && doc.status.is_processable());
        if !eligible {
            return false;
        }
        self.selection.toggle(id);
        self.mark_dirty();
        true
    }

    pub(crate) fn select_all(&mut self, checked: bool) {
        let eligible: Vec<DocumentId> = self.eligible_ids().collect();
        self.selection.select_all(checked, eligible);
        self.mark_dirty();
    }

    /// Removes one row locally. Steps back a page when the row was the last
    /// one on a non-first page. Returns false if `id` is unknown.
    pub(crate) fn delete_row(&mut self, id: DocumentId) -> bool {
        let rows_in_page = {
            let filtered = self.filtered();
            pipeline::page_slice(&filtered, self.page_window()).len()
        };
        let before = self.rows.len();
        self.rows.retain(|doc| doc.id != id);
        if self.rows.len() == before {
            return false;
        }
        self.selection.retain_known(|selected| selected != id);
        if self.risky_clause == Some(id) {
            self.risky_clause = None;
        }
        if self.page > 0 && rows_in_page < 2 {
            self.page -= 1;
        }
        self.mark_dirty();
        true
    }

    pub(crate) fn open_risky_clauses(&mut self, id: DocumentId) {
        self.risky_clause = Some(id);
        self.mark_dirty();
    }

    pub(crate) fn close_risky_clauses(&mut self) {
        self.risky_clause = None;
        self.mark_dirty();
    }

    pub(crate) fn set_confirm_open(&mut self, open: bool) {
        self.confirm_open = open;
        self.mark_dirty();
    }

    pub(crate) fn begin_processing(&mut self) {
        self.processing = ProcessingState::InFlight;
        self.mark_dirty();
    }

    pub(crate) fn settle_success(&mut self) {
        self.processing = ProcessingState::Settled(ProcessingOutcome::Succeeded);
        self.selection.clear();
        self.confirm_open = false;
        self.loading = true;
        self.mark_dirty();
    }

    pub(crate) fn settle_failure(&mut self, message: String) {
        self.processing = ProcessingState::Settled(ProcessingOutcome::Failed(message));
        self.mark_dirty();
    }
}
