// wealthscope-core/src/domain/query/mod.rs

pub mod filter;
pub mod pagination;
pub mod sort;

pub use filter::FilterCriteria;
pub use pagination::{DEFAULT_PAGE_SIZE, Page, paginate, total_pages};
pub use sort::{SortConfig, SortDirection};
