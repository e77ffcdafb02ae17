use docboard_logging::{board_debug, board_info, board_warn};

use crate::text::{
    DOCUMENTS_PROCESSED_SUCCESSFULLY, ERROR_LOADING_DOCUMENTS, ERROR_PROCESSING_DOCUMENTS,
    NOTHING_TO_PROCESS,
};
use crate::{build_batch, AppState, Effect, Msg, NotificationText, Route, Severity};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::DocumentsLoaded(rows) => {
            board_debug!("row store replaced with {} documents", rows.len());
            state.replace_rows(rows);
            Vec::new()
        }
        Msg::DocumentsLoadFailed(message) => {
            board_warn!("document fetch failed: {}", message);
            state.finish_loading();
            vec![Effect::Notify {
                severity: Severity::Error,
                text: NotificationText::message_or(message, ERROR_LOADING_DOCUMENTS),
            }]
        }
        Msg::RefreshRequested => {
            if state.is_loading() {
                board_debug!("fetch already in flight; ignoring refresh");
                return (state, Vec::new());
            }
            state.begin_loading();
            vec![Effect::FetchDocuments {
                property_type_id: state.config().property_type_id(),
            }]
        }
        Msg::FilterNameChanged(name) => {
            state.set_filter_name(name);
            Vec::new()
        }
        Msg::FilterRolesChanged(roles) => {
            state.set_filter_roles(roles);
            Vec::new()
        }
        Msg::FilterStatusChanged(status) => {
            state.set_filter_status(status);
            Vec::new()
        }
        Msg::FiltersReset => {
            state.reset_filters();
            Vec::new()
        }
        Msg::SortRequested(field) => {
            state.sort_by(field);
            Vec::new()
        }
        Msg::PageChanged(page) => {
            state.set_page(page);
            Vec::new()
        }
        Msg::RowsPerPageChanged(size) => {
            if !state.set_rows_per_page(size) {
                board_warn!("ignoring rows-per-page {} outside configured options", size);
            }
            Vec::new()
        }
        Msg::DenseToggled(dense) => {
            state.set_dense(dense);
            Vec::new()
        }
        Msg::RowToggled(id) => {
            if !state.toggle_row(id) {
                board_debug!("row {} is not selectable", id);
            }
            Vec::new()
        }
        Msg::AllRowsToggled(checked) => {
            state.select_all(checked);
            Vec::new()
        }
        Msg::RowDeleted(id) => {
            if !state.delete_row(id) {
                board_debug!("delete of unknown row {}", id);
            }
            Vec::new()
        }
        Msg::EditRequested(id) => navigate_if_known(&state, Route::Edit(id), id),
        Msg::ExtractedDataRequested(id) => {
            navigate_if_known(&state, Route::ExtractedData(id), id)
        }
        Msg::RiskyClausesOpened(id) => {
            if state.contains(id) {
                state.open_risky_clauses(id);
            }
            Vec::new()
        }
        Msg::RiskyClausesClosed => {
            state.close_risky_clauses();
            Vec::new()
        }
        Msg::ProcessConfirmOpened => {
            state.set_confirm_open(true);
            Vec::new()
        }
        Msg::ProcessConfirmClosed => {
            state.set_confirm_open(false);
            Vec::new()
        }
        Msg::ProcessConfirmed => {
            if state.processing().is_in_flight() {
                board_warn!("processing already in flight; ignoring duplicate submission");
                return (state, Vec::new());
            }
            if !state.is_confirm_open() {
                board_debug!("processing confirmed without an open confirmation; ignored");
                return (state, Vec::new());
            }
            let batch = build_batch(state.rows(), state.selection());
            if batch.is_empty() {
                return (
                    state,
                    vec![Effect::Notify {
                        severity: Severity::Info,
                        text: NotificationText::Key(NOTHING_TO_PROCESS),
                    }],
                );
            }
            board_info!("submitting {} documents for processing", batch.len());
            state.begin_processing();
            vec![Effect::SubmitProcessing { batch }]
        }
        Msg::ProcessingSettled(result) => {
            if !state.processing().is_in_flight() {
                board_warn!("processing result arrived with nothing in flight; discarded");
                return (state, Vec::new());
            }
            match result {
                Ok(()) => {
                    state.settle_success();
                    vec![
                        Effect::FetchDocuments {
                            property_type_id: state.config().property_type_id(),
                        },
                        Effect::Notify {
                            severity: Severity::Success,
                            text: NotificationText::Key(DOCUMENTS_PROCESSED_SUCCESSFULLY),
                        },
                    ]
                }
                Err(message) => {
                    board_warn!("processing failed: {}", message);
                    state.settle_failure(message.clone());
                    vec![Effect::Notify {
                        severity: Severity::Error,
                        text: NotificationText::message_or(message, ERROR_PROCESSING_DOCUMENTS),
                    }]
                }
            }
        }
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn navigate_if_known(state: &AppState, route: Route, id: crate::DocumentId) -> Vec<Effect> {
    if state.contains(id) {
        vec![Effect::Navigate(route)]
    } else {
        board_debug!("navigation to unknown row {}", id);
        Vec::new()
    }
}
