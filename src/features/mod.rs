//! Features - Vertical Feature Slices
//!
//! Each feature contains its page and the pure logic behind it.

pub mod crud;
pub mod dashboard;
pub mod modules;
pub mod packages;
pub mod plans;
pub mod products;
pub mod tenant_plans;
