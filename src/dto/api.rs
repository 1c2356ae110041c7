//! Query parameters accepted by the `/clients` endpoints.

use serde::Deserialize;

use crate::domain::types::TypeConstraintError;
use crate::pagination::{PageRequest, SortDirection, SortField};

/// Page size used when the caller does not pass `linesPerPage`.
pub const DEFAULT_LINES_PER_PAGE: usize = 12;

/// Paging and ordering of a client listing.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientPageQuery {
    /// Zero-based page index.
    pub page: Option<usize>,
    pub lines_per_page: Option<usize>,
    /// `ASC` or `DESC`.
    pub direction: Option<String>,
    /// Client field to sort by, e.g. `name` or `birthDate`.
    pub order_by: Option<String>,
}

impl ClientPageQuery {
    pub fn to_page_request(&self) -> Result<PageRequest, TypeConstraintError> {
        let field = match self.order_by.as_deref() {
            Some(order_by) => order_by.parse::<SortField>()?,
            None => SortField::default(),
        };
        let direction = match self.direction.as_deref() {
            Some(direction) => direction.parse::<SortDirection>()?,
            None => SortDirection::default(),
        };

        Ok(PageRequest::of(
            self.page.unwrap_or(0),
            self.lines_per_page.unwrap_or(DEFAULT_LINES_PER_PAGE),
        )
        .sorted_by(field, direction))
    }
}

/// Income threshold for `/clients/income`.
#[derive(Debug, Deserialize)]
pub struct IncomeQuery {
    pub income: f64,
}
