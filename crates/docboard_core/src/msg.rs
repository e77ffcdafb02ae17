use std::collections::BTreeSet;

use crate::{Document, DocumentId, SortField, StatusFilter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Data source reported the full current document set.
    DocumentsLoaded(Vec<Document>),
    /// Data source failed; carries the backend message.
    DocumentsLoadFailed(String),
    /// User or startup asked for fresh data.
    RefreshRequested,
    /// User typed in the search box.
    FilterNameChanged(String),
    /// User changed the role picker (labels).
    FilterRolesChanged(BTreeSet<String>),
    /// User clicked a status tab.
    FilterStatusChanged(StatusFilter),
    /// User clicked "reset" in the filter summary.
    FiltersReset,
    /// User clicked a column header.
    SortRequested(SortField),
    PageChanged(usize),
    RowsPerPageChanged(usize),
    DenseToggled(bool),
    /// User ticked or unticked one row checkbox.
    RowToggled(DocumentId),
    /// User ticked or unticked the header checkbox.
    AllRowsToggled(bool),
    /// Row removed locally.
    RowDeleted(DocumentId),
    EditRequested(DocumentId),
    ExtractedDataRequested(DocumentId),
    RiskyClausesOpened(DocumentId),
    RiskyClausesClosed,
    /// User clicked "process" in the selection bar.
    ProcessConfirmOpened,
    ProcessConfirmClosed,
    /// User confirmed processing of the selected rows.
    ProcessConfirmed,
    /// Remote processing call finished.
    ProcessingSettled(Result<(), String>),
    /// UI/render tick to coalesce rendering.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}
