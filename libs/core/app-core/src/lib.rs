//! Application-layer primitives shared by the domain crates.
//!
//! - [`use_case`]: the `UseCase` trait every operation implements
//! - [`pagination`]: paging parameters, sort parsing and the page body
//! - [`validation`]: custom `validator` rules

pub mod pagination;
pub mod use_case;
pub mod validation;

pub use pagination::{Page, PageParams, PageRequest, PagingError, Sort, SortDirection};
pub use use_case::UseCase;
