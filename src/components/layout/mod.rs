//! Layout Components
//!
//! Header and sidebar of the console shell.

pub mod header;
pub mod sidebar;
