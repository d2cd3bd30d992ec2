//! Pricing Admin Library
//!
//! Core of a desktop console for a SaaS pricing catalog: plans, products,
//! packages, modules and tenant plan assignments. Everything outside the
//! `gui` feature is plain Rust and can be tested headless.

rust_i18n::i18n!("locales", fallback = "en");

pub mod app;
#[cfg(feature = "gui")]
pub mod components;
#[cfg(feature = "gui")]
pub mod constants;
pub mod domain;
pub mod error;
pub mod features;
pub mod i18n;
pub mod logging;
pub mod state;
pub mod store;
#[cfg(feature = "gui")]
pub mod theme;
pub mod utils;
