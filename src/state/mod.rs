//! State - Entity State Modules
//!
//! Each state module represents a distinct piece of application state,
//! split by update frequency to avoid unnecessary re-renders. None of them
//! depend on GPUI; the app layer wraps them in entities.

pub mod activity_state;
pub mod config_state;
pub mod i18n_state;
pub mod navigation_state;
pub mod notification_state;
pub mod page_state;
