//! Filter/sort/paginate pipeline deriving table rows from the loaded documents.
//!
//! Every function here is pure: the input slice is never reordered and each
//! call builds a fresh sequence of borrows, so it is safe to run on every
//! keystroke.

use crate::{Document, DocumentStatus, FilterCriteria, RoleTable, SortCriteria, StatusFilter};

/// Zero-based page index and page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub index: usize,
    pub size: usize,
}

impl PageWindow {
    pub fn new(index: usize, size: usize) -> Self {
        Self { index, size }
    }

    pub fn start(&self) -> usize {
        self.index.saturating_mul(self.size)
    }

    pub fn end(&self) -> usize {
        self.start().saturating_add(self.size)
    }
}

/// Stable sort, then text, status and role filters, in that order.
pub fn filtered_rows<'a>(
    rows: &'a [Document],
    filters: &FilterCriteria,
    roles: &RoleTable,
    sort: SortCriteria,
) -> Vec<&'a Document> {
    let mut ordered: Vec<&Document> = rows.iter().collect();
    // `sort_by` is stable: equal keys keep their load order.
    ordered.sort_by(|a, b| sort.compare(a, b));

    if !filters.name.is_empty() {
        let needle = filters.name.to_lowercase();
        ordered.retain(|doc| doc.contains_text(&needle));
    }

    if filters.status != StatusFilter::All {
        ordered.retain(|doc| filters.status.matches(doc.status));
    }

    if !filters.roles.is_empty() {
        ordered.retain(|doc| roles.grants_any(doc, &filters.roles));
    }

    ordered
}

/// The slice of `rows` covered by `page`; empty when the window starts past the end.
pub fn page_slice<T>(rows: &[T], page: PageWindow) -> &[T] {
    let start = page.start().min(rows.len());
    let end = page.end().min(rows.len());
    &rows[start..end]
}

/// Rows shown on one page of the table.
pub fn visible_rows<'a>(
    rows: &'a [Document],
    filters: &FilterCriteria,
    roles: &RoleTable,
    sort: SortCriteria,
    page: PageWindow,
) -> Vec<&'a Document> {
    let filtered = filtered_rows(rows, filters, roles, sort);
    page_slice(&filtered, page).to_vec()
}

/// Largest page index that still holds rows, capped at `index`.
pub fn clamp_page(index: usize, size: usize, total: usize) -> usize {
    if size == 0 || total == 0 {
        return 0;
    }
    index.min((total - 1) / size)
}

/// Blank filler rows keeping the table height constant on trailing pages.
pub fn empty_rows(index: usize, size: usize, total: usize) -> usize {
    if index == 0 {
        return 0;
    }
    (index + 1).saturating_mul(size).saturating_sub(total)
}

/// Row counts per status tab, starting with `All`.
pub fn status_counts(rows: &[Document]) -> Vec<(StatusFilter, usize)> {
    let mut counts = Vec::with_capacity(DocumentStatus::ALL.len() + 1);
    counts.push((StatusFilter::All, rows.len()));
    for status in DocumentStatus::ALL {
        let count = rows.iter().filter(|doc| doc.status == status).count();
        counts.push((StatusFilter::Only(status), count));
    }
    counts
}
