//! UI Constants
//!
//! Centralized UI constants for consistent layout across the application.

/// Console title shown in the sidebar and window title
pub const APP_TITLE: &str = "AHSS-PP Admin";

/// Sidebar navigation width in pixels
pub const SIDEBAR_WIDTH: f32 = 200.0;

/// Header height in pixels
pub const HEADER_HEIGHT: f32 = 56.0;

/// Table geometry
pub const TABLE_HEADER_HEIGHT: f32 = 44.0;
pub const TABLE_ROW_HEIGHT: f32 = 52.0;

/// Form modal width
pub const MODAL_WIDTH: f32 = 520.0;

/// Minimum window dimensions
pub const MIN_WINDOW_WIDTH: f32 = 960.0;
pub const MIN_WINDOW_HEIGHT: f32 = 600.0;

/// Toasts stacked at once; older ones wait in the queue until dismissed
pub const MAX_VISIBLE_TOASTS: usize = 4;

/// Recent activity entries kept for the dashboard
pub const ACTIVITY_CAPACITY: usize = 100;
