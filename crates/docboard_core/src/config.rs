use std::sync::Arc;

use thiserror::Error;

use crate::{FilterCriteria, RoleTable, SortCriteria};

pub const ROWS_PER_PAGE_OPTIONS: [usize; 3] = [5, 10, 25];
pub const DEFAULT_ROWS_PER_PAGE: usize = 5;

/// Rejected configuration. These are setup-time errors; the pipeline itself
/// only ever sees closed enums.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("unknown sort field: {0}")]
    UnknownSortField(String),
    #[error("unknown sort direction: {0}")]
    UnknownSortDirection(String),
    #[error("unknown document status: {0}")]
    UnknownStatus(String),
    #[error("rows per page {size} is not one of {options:?}")]
    InvalidRowsPerPage { size: usize, options: Vec<usize> },
}

/// Immutable settings for one document board view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewConfig {
    default_filters: FilterCriteria,
    default_sort: SortCriteria,
    rows_per_page: usize,
    rows_per_page_options: Vec<usize>,
    property_type_id: Option<u64>,
    roles: RoleTable,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            default_filters: FilterCriteria::default(),
            default_sort: SortCriteria::default(),
            rows_per_page: DEFAULT_ROWS_PER_PAGE,
            rows_per_page_options: ROWS_PER_PAGE_OPTIONS.to_vec(),
            property_type_id: None,
            roles: RoleTable::default(),
        }
    }
}

impl ViewConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_default_filters(mut self, filters: FilterCriteria) -> Self {
        self.default_filters = filters;
        self
    }

    pub fn with_default_sort(mut self, sort: SortCriteria) -> Self {
        self.default_sort = sort;
        self
    }

    pub fn with_rows_per_page(mut self, size: usize) -> Result<Self, ConfigError> {
        if !self.rows_per_page_options.contains(&size) {
            return Err(ConfigError::InvalidRowsPerPage {
                size,
                options: self.rows_per_page_options.clone(),
            });
        }
        self.rows_per_page = size;
        Ok(self)
    }

    /// Scope the data source to one property type.
    pub fn with_property_type(mut self, property_type_id: Option<u64>) -> Self {
        self.property_type_id = property_type_id;
        self
    }

    pub fn with_roles(mut self, roles: RoleTable) -> Self {
        self.roles = roles;
        self
    }

    pub fn default_filters(&self) -> &FilterCriteria {
        &self.default_filters
    }

    pub fn default_sort(&self) -> SortCriteria {
        self.default_sort
    }

    pub fn rows_per_page(&self) -> usize {
        self.rows_per_page
    }

    pub fn rows_per_page_options(&self) -> &[usize] {
        &self.rows_per_page_options
    }

    pub fn property_type_id(&self) -> Option<u64> {
        self.property_type_id
    }

    pub fn roles(&self) -> &RoleTable {
        &self.roles
    }

    pub fn into_shared(self) -> Arc<ViewConfig> {
        Arc::new(self)
    }
}
