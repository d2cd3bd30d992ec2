//! Utils - Formatting, Bounded Buffers and Settings Storage

pub mod bounded;
pub mod config_store;
pub mod format;
