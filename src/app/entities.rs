//! AppEntities - Global Entity Handles
//!
//! All global GPUI entities are collected here. Each record collection is its
//! own entity so a page only re-renders for the stores it observes.

use std::path::PathBuf;

use gpui::{App, AppContext, Entity, Global};
use tracing::debug;

use crate::constants::ACTIVITY_CAPACITY;
use crate::domain::config::AdminConfig;
use crate::domain::module::Module;
use crate::domain::package::Package;
use crate::domain::plan::Plan;
use crate::domain::product::Product;
use crate::domain::tenant_plan::TenantPlan;
use crate::features::crud::{Outcome, TableSchema};
use crate::i18n::Locale;
use crate::state::{
    activity_state::ActivityState, config_state::ConfigState, i18n_state::I18nState,
    navigation_state::NavigationState,
    notification_state::{NotificationMessage, NotificationState},
};
use crate::store::{fixtures, EntityStore};

/// Collection of all global Entity handles
#[derive(Clone)]
pub struct AppEntities {
    pub plans: Entity<EntityStore<Plan>>,
    pub products: Entity<EntityStore<Product>>,
    pub packages: Entity<EntityStore<Package>>,
    pub modules: Entity<EntityStore<Module>>,
    pub tenant_plans: Entity<EntityStore<TenantPlan>>,
    /// Selected sidebar route
    pub navigation: Entity<NavigationState>,
    /// Visible toasts
    pub notifications: Entity<NotificationState>,
    /// Dashboard feed
    pub activity: Entity<ActivityState>,
    pub i18n: Entity<I18nState>,
    /// Loaded settings and their file location
    pub config: Entity<ConfigState>,
}

impl Global for AppEntities {}

impl AppEntities {
    /// Initialize every entity, seeding stores with the sample catalog
    pub fn init(cx: &mut App, config: AdminConfig, path: Option<PathBuf>) -> Self {
        let locale = Locale::resolve(config.locale.as_deref());
        let capacity = config.notifications.capacity;
        debug!(locale = locale.code(), capacity, "initializing entities");

        Self {
            plans: cx.new(|_| EntityStore::with_records(fixtures::plans())),
            products: cx.new(|_| EntityStore::with_records(fixtures::products())),
            packages: cx.new(|_| EntityStore::with_records(fixtures::packages())),
            modules: cx.new(|_| EntityStore::with_records(fixtures::modules())),
            tenant_plans: cx.new(|_| EntityStore::with_records(fixtures::tenant_plans())),
            navigation: cx.new(|_| NavigationState::default()),
            notifications: cx.new(|_| NotificationState::new(capacity)),
            activity: cx.new(|_| ActivityState::seeded(ACTIVITY_CAPACITY)),
            i18n: cx.new(|_| I18nState::new(locale)),
            config: cx.new(|_| ConfigState::new(config, path)),
        }
    }

    /// Apply the side effects of a controller call
    pub fn deliver(&self, outcome: Outcome, cx: &mut App) {
        if let Some(activity) = outcome.activity {
            self.activity.update(cx, |state, cx| {
                state.record(activity);
                cx.notify();
            });
        }
        if let Some(message) = outcome.notification {
            self.notify(message, cx);
        }
    }

    /// Show a toast and dismiss it once its time to live has elapsed
    pub fn notify(&self, message: NotificationMessage, cx: &mut App) {
        let id = self.notifications.update(cx, |state, cx| {
            let id = state.push(message);
            cx.notify();
            id
        });

        let ttl = self.config.read(cx).config.notifications.ttl();
        let notifications = self.notifications.clone();
        cx.spawn(async move |cx| {
            cx.background_executor().timer(ttl).await;
            let _ = notifications.update(cx, |state, cx| {
                if state.dismiss(id) {
                    cx.notify();
                }
            });
        })
        .detach();
    }
}

/// Maps a record type to its store entity
pub trait HasStore: TableSchema {
    fn store(entities: &AppEntities) -> &Entity<EntityStore<Self>>;
}

impl HasStore for Plan {
    fn store(entities: &AppEntities) -> &Entity<EntityStore<Self>> {
        &entities.plans
    }
}

impl HasStore for Product {
    fn store(entities: &AppEntities) -> &Entity<EntityStore<Self>> {
        &entities.products
    }
}

impl HasStore for Package {
    fn store(entities: &AppEntities) -> &Entity<EntityStore<Self>> {
        &entities.packages
    }
}

impl HasStore for Module {
    fn store(entities: &AppEntities) -> &Entity<EntityStore<Self>> {
        &entities.modules
    }
}

impl HasStore for TenantPlan {
    fn store(entities: &AppEntities) -> &Entity<EntityStore<Self>> {
        &entities.tenant_plans
    }
}
