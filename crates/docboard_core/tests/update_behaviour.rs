use std::collections::BTreeSet;
use std::sync::Once;

use docboard_core::{
    update, AppState, Document, DocumentId, DocumentStatus, Effect, EmptyState, Msg, Route,
    SortCriteria, SortDirection, SortField, StatusFilter, ViewConfig,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(docboard_logging::initialize_for_tests);
}

/// Rows `1..=count`, later ids created later, all `Received`.
fn numbered_rows(count: u64) -> Vec<Document> {
    (1..=count)
        .map(|id| {
            Document::new(id, format!("Doc {id:02}"), DocumentStatus::Received)
                .with_created_at(format!("2024-02-{id:02}T08:00:00Z"))
        })
        .collect()
}

fn loaded(rows: Vec<Document>) -> AppState {
    let (state, effects) = update(AppState::default(), Msg::DocumentsLoaded(rows));
    assert!(effects.is_empty());
    state
}

fn apply(state: AppState, msgs: impl IntoIterator<Item = Msg>) -> AppState {
    msgs.into_iter()
        .fold(state, |state, msg| update(state, msg).0)
}

fn visible_ids(state: &AppState) -> Vec<DocumentId> {
    state.view().rows.iter().map(|row| row.document.id).collect()
}

#[test]
fn refresh_requests_fetch_scoped_to_property_type() {
    init_logging();
    let state = AppState::new(ViewConfig::new().with_property_type(Some(42)));

    let (mut next, effects) = update(state, Msg::RefreshRequested);

    assert_eq!(
        effects,
        vec![Effect::FetchDocuments {
            property_type_id: Some(42)
        }]
    );
    assert!(next.view().loading);
    assert!(next.consume_dirty());
}

#[test]
fn refresh_while_fetch_outstanding_is_ignored() {
    init_logging();
    let (state, first) = update(AppState::default(), Msg::RefreshRequested);
    assert_eq!(
        first,
        vec![Effect::FetchDocuments {
            property_type_id: None
        }]
    );

    let (state, second) = update(state, Msg::RefreshRequested);
    assert!(second.is_empty());
    assert!(state.is_loading());

    // Either outcome of the fetch re-arms refresh.
    let (state, _) = update(state, Msg::DocumentsLoaded(numbered_rows(2)));
    let (state, effects) = update(state, Msg::RefreshRequested);
    assert_eq!(effects.len(), 1);
    let (state, _) = update(state, Msg::DocumentsLoadFailed("timeout".to_string()));
    let (_state, effects) = update(state, Msg::RefreshRequested);
    assert_eq!(effects.len(), 1);
}

#[test]
fn refresh_during_post_processing_reload_is_ignored() {
    init_logging();
    let state = apply(
        loaded(numbered_rows(2)),
        [
            Msg::AllRowsToggled(true),
            Msg::ProcessConfirmOpened,
            Msg::ProcessConfirmed,
        ],
    );
    let (state, effects) = update(state, Msg::ProcessingSettled(Ok(())));
    assert!(effects
        .iter()
        .any(|effect| matches!(effect, Effect::FetchDocuments { .. })));

    let (state, effects) = update(state, Msg::RefreshRequested);

    assert!(effects.is_empty());
    assert!(state.is_loading());
    let (state, _) = update(state, Msg::DocumentsLoaded(numbered_rows(3)));
    assert_eq!(state.rows().len(), 3);
    assert!(!state.is_loading());
}

#[test]
fn documents_loaded_replaces_row_store_wholesale() {
    init_logging();
    let state = loaded(numbered_rows(3));
    let (state, _) = update(state, Msg::DocumentsLoaded(numbered_rows(2)));

    let view = state.view();
    assert_eq!(view.total_count, 2);
    assert_eq!(visible_ids(&state), vec![2, 1]);
    assert!(!view.loading);
}

#[test]
fn filter_changes_reset_page() {
    init_logging();
    let state = loaded(numbered_rows(12));
    let (state, _) = update(state, Msg::PageChanged(2));
    assert_eq!(state.view().page, 2);
    assert_eq!(visible_ids(&state), vec![2, 1]);

    let (state, _) = update(state, Msg::FilterNameChanged("doc".to_string()));
    assert_eq!(state.view().page, 0);

    let (state, _) = update(state, Msg::PageChanged(1));
    let (state, _) = update(
        state,
        Msg::FilterStatusChanged(StatusFilter::Only(DocumentStatus::Received)),
    );
    assert_eq!(state.view().page, 0);

    let (state, _) = update(state, Msg::PageChanged(1));
    let (state, _) = update(state, Msg::FilterRolesChanged(BTreeSet::new()));
    assert_eq!(state.view().page, 0);
}

#[test]
fn page_requests_past_the_end_are_clamped() {
    init_logging();
    let state = loaded(numbered_rows(7));
    let (state, _) = update(state, Msg::PageChanged(9));

    assert_eq!(state.view().page, 1);
    assert_eq!(visible_ids(&state), vec![2, 1]);
    assert_eq!(state.view().empty_rows, 3);
}

#[test]
fn reset_restores_unfiltered_sorted_rows() {
    init_logging();
    let state = loaded(numbered_rows(4));
    let initial = visible_ids(&state);

    let state = apply(
        state,
        [
            Msg::FilterNameChanged("03".to_string()),
            Msg::FilterStatusChanged(StatusFilter::Only(DocumentStatus::Processed)),
            Msg::FilterRolesChanged(["Validator".to_string()].into_iter().collect()),
        ],
    );
    assert!(state.view().can_reset);
    assert_eq!(state.view().empty_state, Some(EmptyState::NoMatches));

    let (state, _) = update(state, Msg::FiltersReset);

    assert!(!state.view().can_reset);
    assert_eq!(visible_ids(&state), initial);
    assert_eq!(state.view().empty_state, None);
}

#[test]
fn empty_states_are_distinct() {
    init_logging();
    let empty = loaded(Vec::new());
    assert_eq!(empty.view().empty_state, Some(EmptyState::NoData));
    assert!(!empty.view().can_reset);

    let (filtered, _) = update(empty, Msg::FilterNameChanged("lease".to_string()));
    // Still no data at all, even with an active filter.
    assert_eq!(filtered.view().empty_state, Some(EmptyState::NoData));
    assert!(filtered.view().can_reset);

    let (filtered, _) = update(filtered, Msg::DocumentsLoaded(numbered_rows(2)));
    assert_eq!(filtered.view().empty_state, Some(EmptyState::NoMatches));
}

#[test]
fn configured_default_filters_apply_and_reset_back() {
    init_logging();
    let config = ViewConfig::new().with_default_filters(
        docboard_core::FilterCriteria::default()
            .with_status(StatusFilter::Only(DocumentStatus::Processed)),
    );
    let mut rows = numbered_rows(3);
    rows[1].status = DocumentStatus::Processed;
    let (state, _) = update(AppState::new(config), Msg::DocumentsLoaded(rows));
    assert_eq!(visible_ids(&state), vec![2]);
    assert!(!state.view().can_reset);

    let (state, _) = update(state, Msg::FilterStatusChanged(StatusFilter::All));
    assert!(state.view().can_reset);
    let (state, _) = update(state, Msg::FiltersReset);
    assert_eq!(visible_ids(&state), vec![2]);
}

#[test]
fn sort_header_clicks_toggle_direction() {
    init_logging();
    let state = loaded(numbered_rows(3));
    assert_eq!(state.sort(), SortCriteria::default());

    let (state, _) = update(state, Msg::SortRequested(SortField::FileName));
    assert_eq!(
        state.sort(),
        SortCriteria::new(SortField::FileName, SortDirection::Ascending)
    );
    assert_eq!(visible_ids(&state), vec![1, 2, 3]);

    let (state, _) = update(state, Msg::SortRequested(SortField::FileName));
    assert_eq!(state.sort().direction, SortDirection::Descending);
    assert_eq!(visible_ids(&state), vec![3, 2, 1]);

    let (state, _) = update(state, Msg::SortRequested(SortField::FileName));
    assert_eq!(state.sort().direction, SortDirection::Ascending);

    let (state, _) = update(state, Msg::SortRequested(SortField::CreatedAt));
    assert_eq!(
        state.sort(),
        SortCriteria::new(SortField::CreatedAt, SortDirection::Ascending)
    );
}

#[test]
fn rows_per_page_outside_options_is_ignored() {
    init_logging();
    let state = loaded(numbered_rows(12));
    let (state, _) = update(state, Msg::PageChanged(1));

    let (state, _) = update(state, Msg::RowsPerPageChanged(7));
    assert_eq!(state.view().rows_per_page, 5);
    assert_eq!(state.view().page, 1);

    let (state, _) = update(state, Msg::RowsPerPageChanged(10));
    assert_eq!(state.view().rows_per_page, 10);
    assert_eq!(state.view().page, 0);
    assert_eq!(state.view().rows.len(), 10);
}

#[test]
fn deleting_last_row_on_page_steps_back() {
    init_logging();
    let state = loaded(numbered_rows(6));
    let (state, _) = update(state, Msg::PageChanged(1));
    assert_eq!(visible_ids(&state), vec![1]);

    let (state, _) = update(state, Msg::RowDeleted(1));

    assert_eq!(state.view().page, 0);
    assert_eq!(state.view().total_count, 5);
    assert_eq!(visible_ids(&state), vec![6, 5, 4, 3, 2]);
}

#[test]
fn deleting_a_row_drops_it_from_selection() {
    init_logging();
    let state = loaded(numbered_rows(3));
    let state = apply(state, [Msg::RowToggled(1), Msg::RowToggled(2)]);
    assert_eq!(state.view().selected_count, 2);

    let (state, _) = update(state, Msg::RowDeleted(2));

    assert!(state.selection().contains(1));
    assert!(!state.selection().contains(2));
}

#[test]
fn reload_reconciles_selection() {
    init_logging();
    let state = loaded(numbered_rows(4));
    let (state, _) = update(state, Msg::AllRowsToggled(true));
    assert_eq!(state.view().selected_count, 4);

    let (state, _) = update(state, Msg::DocumentsLoaded(numbered_rows(2)));

    assert_eq!(state.selection().iter().collect::<Vec<_>>(), vec![1, 2]);
}

#[test]
fn status_tabs_count_the_whole_row_store() {
    init_logging();
    let mut rows = numbered_rows(4);
    rows[0].status = DocumentStatus::Processed;
    let (state, _) = update(loaded(rows), Msg::FilterNameChanged("01".to_string()));

    let tabs = state.view().status_tabs;
    assert_eq!(tabs[0].filter, StatusFilter::All);
    assert_eq!(tabs[0].count, 4);
    assert!(tabs[0].active);
    let received = tabs
        .iter()
        .find(|tab| tab.filter == StatusFilter::Only(DocumentStatus::Received))
        .unwrap();
    assert_eq!(received.count, 3);
    assert!(!received.active);
}

#[test]
fn row_navigation_emits_routes_for_known_rows() {
    init_logging();
    let state = loaded(numbered_rows(2));

    let (state, effects) = update(state, Msg::EditRequested(2));
    assert_eq!(effects, vec![Effect::Navigate(Route::Edit(2))]);

    let (state, effects) = update(state, Msg::ExtractedDataRequested(1));
    assert_eq!(effects, vec![Effect::Navigate(Route::ExtractedData(1))]);
    assert_eq!(
        Route::ExtractedData(1).path(),
        "/dashboard/documents/1/extracted-data"
    );

    let (_state, effects) = update(state, Msg::EditRequested(99));
    assert!(effects.is_empty());
}

#[test]
fn risky_clause_inspector_follows_row_lifetime() {
    init_logging();
    let state = loaded(numbered_rows(3));

    let (state, _) = update(state, Msg::RiskyClausesOpened(3));
    assert_eq!(state.view().risky_clause, Some(3));

    let (state, _) = update(state, Msg::DocumentsLoaded(numbered_rows(2)));
    assert_eq!(state.view().risky_clause, None);

    let (state, _) = update(state, Msg::RiskyClausesOpened(1));
    let (state, _) = update(state, Msg::RiskyClausesClosed);
    assert_eq!(state.view().risky_clause, None);
}

#[test]
fn dense_toggle_marks_dirty() {
    init_logging();
    let mut state = loaded(numbered_rows(1));
    assert!(state.consume_dirty());

    let (mut state, _) = update(state, Msg::DenseToggled(true));

    assert!(state.view().dense);
    assert!(state.consume_dirty());
    assert!(!state.consume_dirty());
}
