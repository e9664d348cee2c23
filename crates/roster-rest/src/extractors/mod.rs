//! Request extractors.

pub mod pagination;

pub use pagination::PaginationQuery;
