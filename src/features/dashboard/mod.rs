//! Dashboard - Catalog Overview

#[cfg(feature = "gui")]
pub mod page;
pub mod summary;

#[cfg(feature = "gui")]
pub use page::DashboardPage;
pub use summary::{DashboardSummary, StatusCounts};
