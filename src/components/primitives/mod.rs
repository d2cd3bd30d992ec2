//! Primitive Components
//!
//! Basic building blocks like buttons and pickers. Text entry uses
//! `gpui_component::input` directly.

pub mod button;
pub mod select;

pub use button::{Button, ButtonVariant};
pub use select::{Select, SelectOption};
