//! DataTable Component
//!
//! A reusable data table with client-side or server-driven pagination.

pub mod column;
pub mod data_provider;
pub mod data_table;
pub mod page_state;
pub mod pagination;

pub use column::{Column, ColumnHeader, ColumnWidth};
pub use data_provider::{PageMeta, PageRequest, PagedSource, RowPage, RowSource, VecSource};
pub use data_table::{DataTable, TableBody, TableLabels};
pub use page_state::{FooterSummary, NavOutcome, PageNav, PageState, PaginationMode};
pub use pagination::{ManualPagination, PageChangeHandler, Pagination};
