//! DataTable Component
//!
//! A header row plus pre-rendered cells, rebuilt every render so cells can
//! carry view listeners.

pub mod column;
pub mod data_table;
pub mod pagination;

pub use column::{Column, ColumnWidth};
pub use data_table::DataTable;
pub use pagination::Pagination;
