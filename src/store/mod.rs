//! Store - In-Memory Entity Stores
//!
//! One generic store type holds each catalog entity. Stores are leaves: they
//! know nothing about pages, notifications or each other.

pub mod command;
pub mod entity_store;
pub mod fixtures;
pub mod references;

pub use command::{CommandOutcome, StoreCommand};
pub use entity_store::EntityStore;
pub use references::{MISSING_REFERENCE, References};
