//! Composite Components
//!
//! Modals, tables, and toasts assembled from primitives.

pub mod confirm_dialog;
pub mod data_table;
pub mod modal;
pub mod toast;
