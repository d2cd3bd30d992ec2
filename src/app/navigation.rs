//! Navigation - Routes and the Sidebar Menu Table

use serde::{Deserialize, Serialize};

/// Pages reachable from the sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Route {
    /// Totals, status distribution and recent activity
    #[default]
    Dashboard,
    Plans,
    Products,
    Packages,
    Modules,
    TenantPlans,
}

impl Route {
    /// Menu key used by the sidebar
    pub fn key(&self) -> &'static str {
        match self {
            Route::Dashboard => "dashboard",
            Route::Plans => "plans",
            Route::Products => "products",
            Route::Packages => "packages",
            Route::Modules => "modules",
            Route::TenantPlans => "tenant-plans",
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Route::Dashboard => "/",
            Route::Plans => "/plans",
            Route::Products => "/products",
            Route::Packages => "/packages",
            Route::Modules => "/modules",
            Route::TenantPlans => "/tenant-plans",
        }
    }

    /// Get the translation key for the menu label
    pub fn label_key(&self) -> &'static str {
        match self {
            Route::Dashboard => "nav.dashboard",
            Route::Plans => "nav.plans",
            Route::Products => "nav.products",
            Route::Packages => "nav.packages",
            Route::Modules => "nav.modules",
            Route::TenantPlans => "nav.tenant_plans",
        }
    }

    /// Glyph shown next to the menu label
    pub fn icon(&self) -> &'static str {
        match self {
            Route::Dashboard => "◧",
            Route::Plans => "◷",
            Route::Products => "▣",
            Route::Packages => "▤",
            Route::Modules => "▦",
            Route::TenantPlans => "◉",
        }
    }

    pub fn from_key(key: &str) -> Option<Route> {
        Route::all().iter().copied().find(|route| route.key() == key)
    }

    /// Resolve a path, ignoring a trailing slash
    pub fn from_path(path: &str) -> Option<Route> {
        let trimmed = path.trim_end_matches('/');
        let normalized = if trimmed.is_empty() { "/" } else { trimmed };
        Route::all()
            .iter()
            .copied()
            .find(|route| route.path() == normalized)
    }

    /// Menu order
    pub fn all() -> &'static [Route] {
        &[
            Route::Dashboard,
            Route::Plans,
            Route::Products,
            Route::Packages,
            Route::Modules,
            Route::TenantPlans,
        ]
    }
}
