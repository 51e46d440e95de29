//! Offset pagination pushed down to the database.
//!
//! A request arrives as [`PageParams`] (`?page=0&size=20&sort=name,desc`),
//! is resolved against a domain's sortable properties into a
//! [`PageRequest`], and comes back as a [`Page`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

pub const DEFAULT_PAGE_SIZE: u64 = 20;
pub const MAX_PAGE_SIZE: u64 = 1000;

fn default_size() -> u64 {
    DEFAULT_PAGE_SIZE
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PagingError {
    #[error("Unknown sort property '{0}'")]
    UnknownSortProperty(String),

    #[error("Invalid sort direction '{0}', expected 'asc' or 'desc'")]
    InvalidSortDirection(String),

    #[error("Page {page} is out of range for size {size}")]
    PageOutOfRange { page: u64, size: u64 },
}

/// Raw paging query parameters.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageParams {
    /// Zero-based page index
    #[serde(default)]
    #[param(default = 0, minimum = 0)]
    pub page: u64,

    /// Page size
    #[serde(default = "default_size")]
    #[validate(range(min = 1, max = 1000, message = "must be between 1 and 1000"))]
    #[param(default = 20, minimum = 1, maximum = 1000)]
    pub size: u64,

    /// `property` or `property,asc|desc`
    #[param(example = "name,asc")]
    pub sort: Option<String>,
}

impl Default for PageParams {
    fn default() -> Self {
        Self {
            page: 0,
            size: DEFAULT_PAGE_SIZE,
            sort: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl FromStr for SortDirection {
    type Err = PagingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            _ => Err(PagingError::InvalidSortDirection(s.to_string())),
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Asc => write!(f, "asc"),
            Self::Desc => write!(f, "desc"),
        }
    }
}

/// Sort order over a domain's sortable property `P`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sort<P> {
    pub property: P,
    pub direction: SortDirection,
}

impl<P: FromStr> Sort<P> {
    /// Parses `property` or `property,asc|desc`.
    pub fn parse(raw: &str) -> Result<Self, PagingError> {
        let (name, direction) = match raw.split_once(',') {
            Some((name, direction)) => (name.trim(), direction.parse()?),
            None => (raw.trim(), SortDirection::Asc),
        };

        let property = name
            .parse()
            .map_err(|_| PagingError::UnknownSortProperty(name.to_string()))?;

        Ok(Self {
            property,
            direction,
        })
    }
}

const MAX_OFFSET: u64 = i64::MAX as u64;

/// Validated paging request for one domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest<P> {
    pub page: u64,
    pub size: u64,
    pub sort: Sort<P>,
}

impl<P: FromStr> PageRequest<P> {
    /// Resolves raw params, sorting by `default_property` ascending when no
    /// sort is given.
    pub fn from_params(params: PageParams, default_property: P) -> Result<Self, PagingError> {
        let sort = match params.sort.as_deref().map(str::trim) {
            Some(raw) if !raw.is_empty() => Sort::parse(raw)?,
            _ => Sort {
                property: default_property,
                direction: SortDirection::Asc,
            },
        };

        let request = Self {
            page: params.page,
            size: params.size,
            sort,
        };
        request.offset()?;
        Ok(request)
    }
}

impl<P> PageRequest<P> {
    /// Row offset of the first element, `page * size`.
    ///
    /// Bounded by `i64::MAX`, the largest OFFSET Postgres binds.
    pub fn offset(&self) -> Result<u64, PagingError> {
        self.page
            .checked_mul(self.size)
            .filter(|offset| *offset <= MAX_OFFSET)
            .ok_or(PagingError::PageOutOfRange {
                page: self.page,
                size: self.size,
            })
    }

    pub fn limit(&self) -> u64 {
        self.size
    }
}

/// One page of results plus totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    pub page: u64,
    pub size: u64,
    pub total_elements: u64,
    pub total_pages: u64,
}

impl<T> Page<T> {
    pub fn new(content: Vec<T>, page: u64, size: u64, total_elements: u64) -> Self {
        Self {
            content,
            page,
            size,
            total_elements,
            total_pages: total_pages(total_elements, size),
        }
    }

    /// Maps every element, keeping order and paging metadata.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            content: self.content.into_iter().map(f).collect(),
            page: self.page,
            size: self.size,
            total_elements: self.total_elements,
            total_pages: self.total_pages,
        }
    }
}

/// `ceil(total / size)`; zero when `size` is zero.
pub fn total_pages(total_elements: u64, size: u64) -> u64 {
    if size == 0 {
        0
    } else {
        total_elements.div_ceil(size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::EnumString;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString)]
    #[strum(serialize_all = "camelCase")]
    enum Field {
        Name,
        CreatedAt,
    }

    #[test]
    fn test_sort_parses_property_only() {
        let sort: Sort<Field> = Sort::parse("name").unwrap();
        assert_eq!(sort.property, Field::Name);
        assert_eq!(sort.direction, SortDirection::Asc);
    }

    #[test]
    fn test_sort_parses_direction_case_insensitively() {
        let sort: Sort<Field> = Sort::parse("createdAt,DESC").unwrap();
        assert_eq!(sort.property, Field::CreatedAt);
        assert_eq!(sort.direction, SortDirection::Desc);
    }

    #[test]
    fn test_sort_rejects_unknown_property() {
        let err = Sort::<Field>::parse("colour,asc").unwrap_err();
        assert_eq!(err, PagingError::UnknownSortProperty("colour".into()));
        assert_eq!(err.to_string(), "Unknown sort property 'colour'");
    }

    #[test]
    fn test_sort_rejects_bad_direction() {
        let err = Sort::<Field>::parse("name,sideways").unwrap_err();
        assert!(matches!(err, PagingError::InvalidSortDirection(_)));
    }

    #[test]
    fn test_page_request_defaults_sort() {
        let request = PageRequest::from_params(PageParams::default(), Field::Name).unwrap();
        assert_eq!(request.page, 0);
        assert_eq!(request.size, 20);
        assert_eq!(request.sort.property, Field::Name);
        assert_eq!(request.offset().unwrap(), 0);
    }

    #[test]
    fn test_page_request_offset_is_page_times_size() {
        let params = PageParams {
            page: 3,
            size: 25,
            sort: Some("createdAt,desc".into()),
        };
        let request = PageRequest::from_params(params, Field::Name).unwrap();
        assert_eq!(request.offset().unwrap(), 75);
        assert_eq!(request.limit(), 25);
    }

    #[test]
    fn test_page_request_rejects_overflowing_offset() {
        let params = PageParams {
            page: u64::MAX,
            size: 2,
            sort: None,
        };
        assert!(matches!(
            PageRequest::from_params(params, Field::Name),
            Err(PagingError::PageOutOfRange { .. })
        ));
    }

    #[test]
    fn test_page_request_rejects_offset_beyond_i64() {
        let params = PageParams {
            page: 9_223_372_036_854_776,
            size: 1000,
            sort: None,
        };
        assert_eq!(
            PageRequest::from_params(params, Field::Name).unwrap_err(),
            PagingError::PageOutOfRange {
                page: 9_223_372_036_854_776,
                size: 1000,
            }
        );

        let last = PageParams {
            page: i64::MAX as u64 / 1000,
            size: 1000,
            sort: None,
        };
        assert!(PageRequest::from_params(last, Field::Name).is_ok());
    }

    #[test]
    fn test_page_params_size_bounds() {
        let mut params = PageParams::default();
        assert!(params.validate().is_ok());

        params.size = 0;
        assert!(params.validate().is_err());

        params.size = 1001;
        assert!(params.validate().is_err());

        params.size = 1000;
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_total_pages_rounds_up() {
        assert_eq!(total_pages(0, 20), 0);
        assert_eq!(total_pages(40, 20), 2);
        assert_eq!(total_pages(42, 20), 3);
        assert_eq!(total_pages(1, 1000), 1);
    }

    #[test]
    fn test_page_map_keeps_metadata() {
        let page = Page::new(vec![1, 2, 3], 1, 3, 7).map(|n| n * 10);
        assert_eq!(page.content, vec![10, 20, 30]);
        assert_eq!(page.page, 1);
        assert_eq!(page.total_elements, 7);
        assert_eq!(page.total_pages, 3);
    }

    #[test]
    fn test_page_serializes_camel_case() {
        let json = serde_json::to_value(Page::new(vec!["a"], 0, 20, 42)).unwrap();
        assert_eq!(json["totalElements"], 42);
        assert_eq!(json["totalPages"], 3);
        assert_eq!(json["content"][0], "a");
    }
}
