//! Application Layer
//!
//! Routes are plain data; window setup, global entities and the workspace
//! shell need the `gui` feature.

#[cfg(feature = "gui")]
pub mod application;
#[cfg(feature = "gui")]
pub mod entities;
pub mod navigation;
#[cfg(feature = "gui")]
pub mod workspace;
