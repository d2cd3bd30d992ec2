//! CRUD - The List/Detail Page Shared by Every Entity
//!
//! One controller and one view, specialized through the entity's
//! [`TableSchema`](table::TableSchema) and form traits.

pub mod controller;
#[cfg(feature = "gui")]
pub mod page;
pub mod table;

pub use controller::{CrudController, Outcome};
pub use table::{ColumnKind, ColumnSpec, TableSchema};
