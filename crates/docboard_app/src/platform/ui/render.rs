use std::fmt::Write as _;

use chrono::DateTime;
use docboard_core::text;
use docboard_core::{
    AppViewModel, DocumentRowView, EmptyState, ProcessingState, Severity, SortDirection, SortField,
    StatusFilter,
};

use crate::platform::locale::Catalog;

const ID_WIDTH: usize = 6;
const NAME_WIDTH: usize = 28;
const TYPE_WIDTH: usize = 18;
const CREATED_WIDTH: usize = 18;
const STATUS_WIDTH: usize = 12;

pub(crate) fn notification(severity: Severity, message: &str) -> String {
    let tag = match severity {
        Severity::Success => "ok",
        Severity::Info => "info",
        Severity::Error => "error",
    };
    format!("[{tag}] {message}")
}

/// Full text rendering of the document list.
pub(crate) fn render(view: &AppViewModel, catalog: &Catalog) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "{} / {} / {}",
        catalog.text(text::DASHBOARD),
        catalog.text(text::DOCUMENTS),
        catalog.text(text::LIST)
    );
    let _ = writeln!(out, "{}", status_tabs(view, catalog));

    if view.can_reset {
        let _ = writeln!(out, "{}", filter_summary(view, catalog));
    }
    if view.selected_count > 0 {
        let _ = writeln!(
            out,
            "{} {} / {}  (`process`)",
            view.selected_count,
            catalog.text(text::SELECTED),
            view.selectable_count
        );
    }
    if view.loading {
        let _ = writeln!(out, "{}", catalog.text(text::LOADING));
    }

    let _ = writeln!(out, "{}", header(view, catalog));
    for row in &view.rows {
        let _ = writeln!(out, "{}", table_row(row, catalog));
        if !view.dense {
            out.push('\n');
        }
    }
    if !view.dense {
        for _ in 0..view.empty_rows {
            out.push_str("\n\n");
        }
    }

    match view.empty_state {
        Some(EmptyState::NoData) => {
            let _ = writeln!(out, "  {}", catalog.text(text::NO_DATA));
        }
        Some(EmptyState::NoMatches) => {
            let _ = writeln!(
                out,
                "  {} (`{}`)",
                catalog.text(text::NO_MATCHES),
                catalog.text(text::RESET)
            );
        }
        None => {}
    }

    let _ = writeln!(out, "{}", footer(view, catalog));

    if view.confirm_open {
        let _ = writeln!(out, "{}", confirmation(view, catalog));
    }
    if let Some(id) = view.risky_clause {
        let _ = writeln!(
            out,
            "== {} #{} ==  (`close`)",
            catalog.text(text::RISKY_CLAUSES),
            id
        );
    }

    out
}

fn status_tabs(view: &AppViewModel, catalog: &Catalog) -> String {
    view.status_tabs
        .iter()
        .map(|tab| {
            let label = catalog.text(tab.filter.label_key());
            if tab.active {
                format!("[{} {}]", label, tab.count)
            } else {
                format!(" {} {} ", label, tab.count)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn filter_summary(view: &AppViewModel, catalog: &Catalog) -> String {
    let mut parts = vec![format!(
        "{} {}",
        view.filtered_count,
        catalog.text(text::RESULTS_FOUND)
    )];
    if !view.filters.name.is_empty() {
        parts.push(format!("{}: \"{}\"", catalog.text(text::NAME), view.filters.name));
    }
    if let StatusFilter::Only(status) = view.filters.status {
        parts.push(format!(
            "{}: {}",
            catalog.text(text::STATUS),
            catalog.text(status.label_key())
        ));
    }
    if !view.filters.roles.is_empty() {
        let roles: Vec<&str> = view.filters.roles.iter().map(String::as_str).collect();
        parts.push(format!("roles: {}", roles.join(", ")));
    }
    parts.push(format!("(`{}`)", catalog.text(text::RESET)));
    parts.join(" | ")
}

fn header(view: &AppViewModel, catalog: &Catalog) -> String {
    let column = |field: SortField, label: &str, width: usize| {
        let marker = if view.sort.field == field {
            match view.sort.direction {
                SortDirection::Ascending => " ^",
                SortDirection::Descending => " v",
            }
        } else {
            ""
        };
        pad(&format!("{label}{marker}"), width)
    };
    format!(
        "    {} {} {} {} {}",
        column(SortField::Id, "#", ID_WIDTH),
        column(SortField::FileName, catalog.text(text::NAME), NAME_WIDTH),
        column(SortField::TypeName, catalog.text(text::DOCUMENT_TYPE), TYPE_WIDTH),
        column(SortField::CreatedAt, catalog.text(text::CREATED_AT), CREATED_WIDTH),
        column(SortField::Status, catalog.text(text::STATUS), STATUS_WIDTH),
    )
}

fn table_row(row: &DocumentRowView, catalog: &Catalog) -> String {
    let checkbox = match (row.selectable, row.selected) {
        (true, true) => "[x]",
        (true, false) => "[ ]",
        (false, _) => "   ",
    };
    let doc = &row.document;
    format!(
        "{} {} {} {} {} {}",
        checkbox,
        pad(&doc.id.to_string(), ID_WIDTH),
        pad(&doc.file_name, NAME_WIDTH),
        pad(&doc.type_name, TYPE_WIDTH),
        pad(&format_created_at(&doc.created_at), CREATED_WIDTH),
        pad(catalog.text(doc.status.label_key()), STATUS_WIDTH),
    )
}

fn footer(view: &AppViewModel, catalog: &Catalog) -> String {
    let pages = if view.rows_per_page == 0 {
        1
    } else {
        view.filtered_count.div_ceil(view.rows_per_page).max(1)
    };
    let options: Vec<String> = view
        .rows_per_page_options
        .iter()
        .map(|size| {
            if *size == view.rows_per_page {
                format!("[{size}]")
            } else {
                size.to_string()
            }
        })
        .collect();
    format!(
        "{} {} {} {} | {} {} | {}/{}",
        catalog.text("page"),
        view.page + 1,
        catalog.text("of"),
        pages,
        catalog.text("rows_per_page"),
        options.join(" "),
        view.filtered_count,
        view.total_count,
    )
}

fn confirmation(view: &AppViewModel, catalog: &Catalog) -> String {
    let action = if matches!(view.processing, ProcessingState::InFlight) {
        catalog.text(text::LOADING).to_string()
    } else {
        format!("`confirm` {} / `cancel`", catalog.text(text::PROCESS))
    };
    format!(
        "== {} ==\n{}\n{}",
        catalog.text(text::CONFIRMATION_HEADING),
        catalog.text(text::CONFIRMATION_SUBHEADING),
        action
    )
}

fn format_created_at(raw: &str) -> String {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.format("%d %b %Y %H:%M").to_string())
        .unwrap_or_else(|_| raw.to_string())
}

/// Left-aligns `text` in `width` columns, cutting with an ellipsis when too long.
fn pad(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len <= width {
        return format!("{text:<width$}");
    }
    let cut: String = text.chars().take(width.saturating_sub(1)).collect();
    format!("{cut}…")
}
