use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::sync::Once;

use docboard_core::pipeline::{clamp_page, empty_rows, status_counts};
use docboard_core::{
    filtered_rows, visible_rows, Document, DocumentId, DocumentStatus, FilterCriteria, PageWindow,
    RoleTable, SortCriteria, SortDirection, SortField, StatusFilter,
};
use pretty_assertions::assert_eq;

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(docboard_logging::initialize_for_tests);
}

fn sample_rows() -> Vec<Document> {
    vec![
        Document::new(1, "Lease A", DocumentStatus::Received)
            .with_type_name("Lease")
            .with_created_at("2024-01-03T10:00:00Z")
            .with_permissions(["initiator"])
            .with_foreign_keys(10, 100),
        Document::new(2, "Lease B", DocumentStatus::Processed)
            .with_type_name("Lease")
            .with_created_at("2024-01-01T10:00:00Z")
            .with_permissions(["validator"]),
        Document::new(3, "Invoice 7", DocumentStatus::Received)
            .with_type_name("Invoice")
            .with_created_at("2024-01-02T10:00:00Z"),
        Document::new(4, "Deed", DocumentStatus::Received)
            .with_type_name("Deed")
            .with_created_at("2024-01-02T10:00:00Z")
            .with_permissions(["auditor"]),
        Document::new(5, "Permit", DocumentStatus::Failed)
            .with_type_name("Permit")
            .with_created_at("2024-01-05T10:00:00Z")
            .with_permissions(["production_head", "validator"]),
    ]
}

fn ids(rows: &[&Document]) -> Vec<DocumentId> {
    rows.iter().map(|doc| doc.id).collect()
}

fn default_sort() -> SortCriteria {
    SortCriteria::default()
}

#[test]
fn status_filter_keeps_exact_matches() {
    init_logging();
    let rows = vec![
        Document::new(1, "Lease A", DocumentStatus::Received),
        Document::new(2, "Lease B", DocumentStatus::Processed),
    ];
    let filters = FilterCriteria::default().with_status(StatusFilter::Only(DocumentStatus::Received));

    let out = filtered_rows(&rows, &filters, &RoleTable::default(), default_sort());

    assert_eq!(ids(&out), vec![1]);
}

#[test]
fn default_sort_is_created_at_descending_with_stable_ties() {
    let rows = sample_rows();
    let out = filtered_rows(&rows, &FilterCriteria::default(), &RoleTable::default(), default_sort());

    // 3 and 4 share a timestamp and keep their input order.
    assert_eq!(ids(&out), vec![5, 1, 3, 4, 2]);
}

#[test]
fn repeated_calls_are_identical() {
    let rows = sample_rows();
    let filters = FilterCriteria::default().with_name("e");
    let sort = SortCriteria::new(SortField::TypeName, SortDirection::Ascending);
    let page = PageWindow::new(0, 3);

    let first = visible_rows(&rows, &filters, &RoleTable::default(), sort, page);
    let second = visible_rows(&rows, &filters, &RoleTable::default(), sort, page);

    assert_eq!(first, second);
}

#[test]
fn equal_keys_keep_input_order_for_every_field_and_direction() {
    let rows = sample_rows();
    let position = |id: DocumentId| rows.iter().position(|doc| doc.id == id).unwrap();

    for field in SortField::ALL {
        for direction in [SortDirection::Ascending, SortDirection::Descending] {
            let sort = SortCriteria::new(field, direction);
            let out = filtered_rows(&rows, &FilterCriteria::default(), &RoleTable::default(), sort);
            for (i, a) in out.iter().enumerate() {
                for b in &out[i + 1..] {
                    if sort.compare(a, b) == Ordering::Equal {
                        assert!(
                            position(a.id) < position(b.id),
                            "{field:?} {direction:?}: {} reordered after {}",
                            a.id,
                            b.id
                        );
                    }
                }
            }
        }
    }
}

#[test]
fn pipeline_does_not_touch_the_row_store() {
    let rows = sample_rows();
    let before = rows.clone();
    let sort = SortCriteria::new(SortField::FileName, SortDirection::Ascending);
    let _ = filtered_rows(&rows, &FilterCriteria::default(), &RoleTable::default(), sort);
    assert_eq!(rows, before);
}

#[test]
fn status_filter_is_idempotent() {
    let rows = sample_rows();
    let filters = FilterCriteria::default().with_status(StatusFilter::Only(DocumentStatus::Received));
    let roles = RoleTable::default();

    let once: Vec<Document> = filtered_rows(&rows, &filters, &roles, default_sort())
        .into_iter()
        .cloned()
        .collect();
    let twice = filtered_rows(&once, &filters, &roles, default_sort());

    assert_eq!(ids(&twice), once.iter().map(|doc| doc.id).collect::<Vec<_>>());
}

#[test]
fn text_filter_is_case_insensitive_across_scalar_fields() {
    let rows = sample_rows();
    let roles = RoleTable::default();
    let by_name = |text: &str| {
        ids(&filtered_rows(
            &rows,
            &FilterCriteria::default().with_name(text),
            &roles,
            default_sort(),
        ))
    };

    assert_eq!(by_name("LEASE"), vec![1, 2]);
    assert_eq!(by_name("invoice"), vec![3]);
    // Status text and foreign keys are searchable too.
    assert_eq!(by_name("failed"), vec![5]);
    assert_eq!(by_name("100"), vec![1]);
    assert_eq!(by_name("no such document"), Vec::<DocumentId>::new());
}

#[test]
fn role_filter_maps_codes_to_labels() {
    let rows = sample_rows();
    let roles = RoleTable::default();
    let by_roles = |labels: &[&str]| {
        ids(&filtered_rows(
            &rows,
            &FilterCriteria::default().with_roles(labels.iter().copied()),
            &roles,
            default_sort(),
        ))
    };

    assert_eq!(by_roles(&["Validator"]), vec![5, 2]);
    assert_eq!(by_roles(&["Initiator", "Production Head"]), vec![5, 1]);
    // Codes are not labels.
    assert_eq!(by_roles(&["validator"]), Vec::<DocumentId>::new());
    // Unknown code "auditor" on row 4 never matches, even for its own text.
    assert_eq!(by_roles(&["auditor"]), Vec::<DocumentId>::new());
}

#[test]
fn extended_role_table_is_honoured() {
    let rows = sample_rows();
    let roles = RoleTable::default().with_entry("auditor", "Auditor");
    let filters = FilterCriteria::default().with_roles(["Auditor"]);

    let out = filtered_rows(&rows, &filters, &roles, default_sort());

    assert_eq!(ids(&out), vec![4]);
}

#[test]
fn combined_filters_equal_intersection_of_single_filters() {
    let rows = sample_rows();
    let roles = RoleTable::default();
    let name = FilterCriteria::default().with_name("lease");
    let status = FilterCriteria::default().with_status(StatusFilter::Only(DocumentStatus::Received));
    let role = FilterCriteria::default().with_roles(["Initiator", "Validator"]);
    let combined = FilterCriteria::default()
        .with_name("lease")
        .with_status(StatusFilter::Only(DocumentStatus::Received))
        .with_roles(["Initiator", "Validator"]);

    let as_set = |filters: &FilterCriteria| -> BTreeSet<DocumentId> {
        filtered_rows(&rows, filters, &roles, default_sort())
            .iter()
            .map(|doc| doc.id)
            .collect()
    };
    let sorted_all = filtered_rows(&rows, &FilterCriteria::default(), &roles, default_sort());
    let (a, b, c) = (as_set(&name), as_set(&status), as_set(&role));
    let expected: Vec<DocumentId> = sorted_all
        .iter()
        .map(|doc| doc.id)
        .filter(|id| a.contains(id) && b.contains(id) && c.contains(id))
        .collect();

    let out = filtered_rows(&rows, &combined, &roles, default_sort());

    assert_eq!(ids(&out), expected);
    assert_eq!(ids(&out), vec![1]);
}

#[test]
fn page_past_the_end_is_empty() {
    let rows = sample_rows();
    let filters = FilterCriteria::default().with_status(StatusFilter::Only(DocumentStatus::Received));

    let filtered = filtered_rows(&rows, &filters, &RoleTable::default(), default_sort());
    assert_eq!(filtered.len(), 3);

    let page = visible_rows(
        &rows,
        &filters,
        &RoleTable::default(),
        default_sort(),
        PageWindow::new(5, 5),
    );
    assert!(page.is_empty());
}

#[test]
fn pages_slice_the_sorted_result() {
    let rows = sample_rows();
    let roles = RoleTable::default();
    let page = |index| {
        ids(&visible_rows(
            &rows,
            &FilterCriteria::default(),
            &roles,
            default_sort(),
            PageWindow::new(index, 2),
        ))
    };

    assert_eq!(page(0), vec![5, 1]);
    assert_eq!(page(1), vec![3, 4]);
    assert_eq!(page(2), vec![2]);
    assert_eq!(page(3), Vec::<DocumentId>::new());
}

#[test]
fn clamp_page_and_padding_rows() {
    assert_eq!(clamp_page(5, 5, 3), 0);
    assert_eq!(clamp_page(2, 5, 11), 2);
    assert_eq!(clamp_page(3, 5, 11), 2);
    assert_eq!(clamp_page(4, 5, 0), 0);

    assert_eq!(empty_rows(0, 5, 2), 0);
    assert_eq!(empty_rows(1, 5, 7), 3);
    assert_eq!(empty_rows(1, 5, 12), 0);
}

#[test]
fn status_counts_cover_every_tab() {
    let counts = status_counts(&sample_rows());
    assert_eq!(
        counts,
        vec![
            (StatusFilter::All, 5),
            (StatusFilter::Only(DocumentStatus::Received), 3),
            (StatusFilter::Only(DocumentStatus::InProgress), 0),
            (StatusFilter::Only(DocumentStatus::Processed), 1),
            (StatusFilter::Only(DocumentStatus::Failed), 1),
        ]
    );
}
