//! Page requests and result pages shared by the repository and service layers.

use std::str::FromStr;

use serde::Serialize;

use crate::domain::types::TypeConstraintError;

/// Largest page size a caller may request.
pub const MAX_PAGE_SIZE: usize = 100;

/// Column used to order a page of clients.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortField {
    Id,
    #[default]
    Name,
    Cpf,
    Income,
    BirthDate,
    Children,
}

impl FromStr for SortField {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "id" => Ok(Self::Id),
            "name" => Ok(Self::Name),
            "cpf" => Ok(Self::Cpf),
            "income" => Ok(Self::Income),
            "birthdate" | "birth_date" => Ok(Self::BirthDate),
            "children" => Ok(Self::Children),
            other => Err(TypeConstraintError::InvalidValue(format!(
                "unknown sort field `{other}`"
            ))),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl FromStr for SortDirection {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            other => Err(TypeConstraintError::InvalidValue(format!(
                "unknown sort direction `{other}`"
            ))),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ClientSort {
    pub field: SortField,
    pub direction: SortDirection,
}

/// Zero-based page request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageRequest {
    pub page: usize,
    pub size: usize,
    pub sort: ClientSort,
}

impl PageRequest {
    /// Request for `page` with `size` items sorted by name ascending.
    ///
    /// `size` is clamped to `1..=MAX_PAGE_SIZE`.
    pub fn of(page: usize, size: usize) -> Self {
        Self {
            page,
            size: size.clamp(1, MAX_PAGE_SIZE),
            sort: ClientSort::default(),
        }
    }

    pub fn sorted_by(mut self, field: SortField, direction: SortDirection) -> Self {
        self.sort = ClientSort { field, direction };
        self
    }

    /// Number of rows to skip before this page.
    pub fn offset(&self) -> usize {
        self.page.saturating_mul(self.size)
    }
}

/// A slice of a larger result set together with its position in it.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    /// Zero-based page index.
    pub number: usize,
    /// Requested page size.
    pub size: usize,
    pub total_elements: usize,
    total_pages: usize,
}

impl<T> Page<T> {
    pub fn new(content: Vec<T>, request: &PageRequest, total_elements: usize) -> Self {
        Self {
            content,
            number: request.page,
            size: request.size,
            total_elements,
            total_pages: total_elements.div_ceil(request.size.max(1)),
        }
    }

    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn is_first(&self) -> bool {
        self.number == 0
    }

    pub fn is_last(&self) -> bool {
        self.number.saturating_add(1) >= self.total_pages
    }

    /// Converts every item while keeping the page metadata.
    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            content: self.content.into_iter().map(f).collect(),
            number: self.number,
            size: self.size,
            total_elements: self.total_elements,
            total_pages: self.total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_request_clamps_size() {
        assert_eq!(PageRequest::of(0, 0).size, 1);
        assert_eq!(PageRequest::of(0, 1000).size, MAX_PAGE_SIZE);
        assert_eq!(PageRequest::of(3, 12).offset(), 36);
    }

    #[test]
    fn page_metadata() {
        let request = PageRequest::of(1, 6);
        let page = Page::new(vec![7, 8, 9, 10, 11, 12], &request, 13);
        assert_eq!(page.total_pages(), 3);
        assert!(!page.is_first());
        assert!(!page.is_last());
        assert!(!page.is_empty());

        let last = Page::new(vec![13], &PageRequest::of(2, 6), 13);
        assert!(last.is_last());

        let empty: Page<i32> = Page::new(vec![], &PageRequest::of(0, 6), 0);
        assert_eq!(empty.total_pages(), 0);
        assert!(empty.is_last());
        assert!(empty.is_empty());
    }

    #[test]
    fn last_page_check_does_not_overflow() {
        let page: Page<i32> = Page::new(vec![], &PageRequest::of(usize::MAX, 12), 24);
        assert!(page.is_last());
        assert!(!page.is_first());
    }

    #[test]
    fn map_keeps_metadata() {
        let page = Page::new(vec![1, 2], &PageRequest::of(4, 2), 10);
        let mapped = page.map(|n| n.to_string());
        assert_eq!(mapped.content, vec!["1", "2"]);
        assert_eq!(mapped.number, 4);
        assert_eq!(mapped.size, 2);
        assert_eq!(mapped.total_elements, 10);
        assert_eq!(mapped.total_pages(), 5);
    }

    #[test]
    fn sort_parsing() {
        assert_eq!("birthDate".parse::<SortField>(), Ok(SortField::BirthDate));
        assert_eq!("INCOME".parse::<SortField>(), Ok(SortField::Income));
        assert!("salary".parse::<SortField>().is_err());
        assert_eq!("DESC".parse::<SortDirection>(), Ok(SortDirection::Desc));
        assert!("sideways".parse::<SortDirection>().is_err());
    }

    #[test]
    fn serializes_total_pages() {
        let page = Page::new(vec![1], &PageRequest::of(0, 12), 1);
        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(json["totalPages"], 1);
        assert_eq!(json["totalElements"], 1);
        assert_eq!(json["content"][0], 1);
    }
}
