//! Document board core: pure state machine, filter/sort/paginate pipeline and view-model helpers.
mod config;
mod document;
mod effect;
mod filter;
mod msg;
pub mod pipeline;
mod processing;
mod route;
mod selection;
mod sort;
mod state;
pub mod text;
mod update;
mod view_model;

pub use config::{ConfigError, ViewConfig, DEFAULT_ROWS_PER_PAGE, ROWS_PER_PAGE_OPTIONS};
pub use document::{Document, DocumentId, DocumentStatus};
pub use effect::{Effect, Severity};
pub use filter::{FilterCriteria, RoleTable, StatusFilter};
pub use msg::Msg;
pub use pipeline::{filtered_rows, visible_rows, PageWindow};
pub use processing::{build_batch, ProcessDescriptor, ProcessingOutcome, ProcessingState};
pub use route::Route;
pub use selection::Selection;
pub use sort::{SortCriteria, SortDirection, SortField};
pub use state::AppState;
pub use text::NotificationText;
pub use update::update;
pub use view_model::{AppViewModel, DocumentRowView, EmptyState, StatusTab};
