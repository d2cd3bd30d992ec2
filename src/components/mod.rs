//! Components - Reusable UI Components
//!
//! Pure UI components that hold no application state.

pub mod composite;
pub mod layout;
pub mod primitives;
