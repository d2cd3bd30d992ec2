//! Workspace - Console Shell
//!
//! Sidebar on the left, header and the routed page on the right, toasts
//! floating on top. Pages are created the first time their route is shown
//! and kept afterwards so open forms survive navigation.

use gpui::{
    div, prelude::*, AnyElement, Context, Entity, IntoElement, ParentElement, Render,
    SharedString, Styled, Window,
};

use crate::app::entities::AppEntities;
use crate::app::navigation::Route;
use crate::components::composite::toast::{ToastItem, ToastStack};
use crate::components::layout::header::Header;
use crate::components::layout::sidebar::Sidebar;
use crate::constants::MAX_VISIBLE_TOASTS;
use crate::features::dashboard::DashboardPage;
use crate::features::modules::ModulesPage;
use crate::features::packages::PackagesPage;
use crate::features::plans::PlansPage;
use crate::features::products::ProductsPage;
use crate::features::tenant_plans::TenantPlansPage;
use crate::theme::colors::AdminColors;
use crate::utils::format::format_time;

/// Main workspace containing the application layout
pub struct Workspace {
    entities: AppEntities,
    header: Entity<Header>,
    sidebar: Entity<Sidebar>,
    dashboard_page: Option<Entity<DashboardPage>>,
    plans_page: Option<Entity<PlansPage>>,
    products_page: Option<Entity<ProductsPage>>,
    packages_page: Option<Entity<PackagesPage>>,
    modules_page: Option<Entity<ModulesPage>>,
    tenant_plans_page: Option<Entity<TenantPlansPage>>,
}

/// Fetch a cached page view, creating it on first use
fn cached<V: Render>(
    slot: &mut Option<Entity<V>>,
    cx: &mut Context<Workspace>,
    create: impl FnOnce(&mut Context<V>) -> V,
) -> AnyElement {
    slot.get_or_insert_with(|| cx.new(create))
        .clone()
        .into_any_element()
}

impl Workspace {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        let header = cx.new(|cx| Header::new(entities.clone(), cx));
        let sidebar = cx.new(|cx| Sidebar::new(entities.clone(), cx));

        cx.observe(&entities.navigation, |_this, _, cx| cx.notify())
            .detach();
        cx.observe(&entities.notifications, |_this, _, cx| cx.notify())
            .detach();
        cx.observe(&entities.i18n, |_this, _, cx| cx.notify())
            .detach();

        Self {
            entities,
            header,
            sidebar,
            dashboard_page: None,
            plans_page: None,
            products_page: None,
            packages_page: None,
            modules_page: None,
            tenant_plans_page: None,
        }
    }

    fn page_for(&mut self, route: Route, cx: &mut Context<Self>) -> AnyElement {
        let entities = self.entities.clone();
        match route {
            Route::Dashboard => cached(&mut self.dashboard_page, cx, |cx| {
                DashboardPage::new(entities, cx)
            }),
            Route::Plans => cached(&mut self.plans_page, cx, |cx| PlansPage::new(entities, cx)),
            Route::Products => cached(&mut self.products_page, cx, |cx| {
                ProductsPage::new(entities, cx)
            }),
            Route::Packages => cached(&mut self.packages_page, cx, |cx| {
                PackagesPage::new(entities, cx)
            }),
            Route::Modules => cached(&mut self.modules_page, cx, |cx| {
                ModulesPage::new(entities, cx)
            }),
            Route::TenantPlans => cached(&mut self.tenant_plans_page, cx, |cx| {
                TenantPlansPage::new(entities, cx)
            }),
        }
    }

    fn toasts(&self, cx: &mut Context<Self>) -> ToastStack {
        let locale = self.entities.i18n.read(cx).locale;
        let items = self
            .entities
            .notifications
            .read(cx)
            .latest(MAX_VISIBLE_TOASTS)
            .map(|n| ToastItem {
                id: n.id,
                level: n.level,
                text: SharedString::from(n.message.localize(locale)),
                time: SharedString::from(format_time(&n.created_at)),
            })
            .collect();

        let notifications = self.entities.notifications.clone();
        ToastStack::new(items).on_dismiss(move |id, cx| {
            notifications.update(cx, |state, cx| {
                if state.dismiss(id) {
                    cx.notify();
                }
            });
        })
    }
}

impl Render for Workspace {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let route = self.entities.navigation.read(cx).route();
        let content = self.page_for(route, cx);
        let toasts = self.toasts(cx);

        div()
            .size_full()
            .relative()
            .flex()
            .flex_row()
            .bg(AdminColors::background())
            .child(self.sidebar.clone())
            .child(
                div()
                    .flex_1()
                    .flex()
                    .flex_col()
                    .overflow_hidden()
                    .child(self.header.clone())
                    // Pages fill this area and position their own modals in it
                    .child(div().flex_1().relative().overflow_hidden().child(content)),
            )
            .child(toasts)
    }
}
