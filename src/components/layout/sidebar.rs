//! Sidebar Component
//!
//! Dark navigation menu. Exactly one entry is selected and it always matches
//! the visible page.

use gpui::{
    div, prelude::*, px, ClickEvent, Context, InteractiveElement, IntoElement, ParentElement,
    Render, SharedString, StatefulInteractiveElement, Styled, Window,
};

use crate::app::entities::AppEntities;
use crate::app::navigation::Route;
use crate::constants::{APP_TITLE, SIDEBAR_WIDTH};
use crate::i18n::{t, Locale};
use crate::theme::colors::AdminColors;

/// Sidebar component
pub struct Sidebar {
    entities: AppEntities,
}

impl Sidebar {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        cx.observe(&entities.i18n, |_this, _, cx| cx.notify())
            .detach();
        cx.observe(&entities.navigation, |_this, _, cx| cx.notify())
            .detach();

        Self { entities }
    }

    fn render_nav_item(&self, route: Route, locale: Locale, selected: Route) -> impl IntoElement {
        let is_active = route == selected;
        let label = t(locale, route.label_key());
        let entities = self.entities.clone();

        let (bg, text) = if is_active {
            (AdminColors::primary(), AdminColors::text_light())
        } else {
            (gpui::rgba(0x00000000), AdminColors::text_sidebar())
        };

        div()
            .id(SharedString::from(format!("nav-{}", route.key())))
            .mx_2()
            .px_4()
            .py_2()
            .rounded_md()
            .bg(bg)
            .text_color(text)
            .text_size(px(14.0))
            .flex()
            .items_center()
            .gap_3()
            .cursor_pointer()
            .when(!is_active, |el| {
                el.hover(|s| {
                    s.bg(AdminColors::sidebar_hover())
                        .text_color(AdminColors::text_light())
                })
            })
            .on_click(move |_event: &ClickEvent, _window, cx| {
                entities.navigation.update(cx, |nav, cx| {
                    if nav.select_key(route.key()).is_some() {
                        cx.notify();
                    }
                });
            })
            .child(div().w(px(16.0)).child(route.icon()))
            .child(label)
    }
}

impl Render for Sidebar {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale;
        let selected = self.entities.navigation.read(cx).route();

        div()
            .w(px(SIDEBAR_WIDTH))
            .h_full()
            .flex_none()
            .bg(AdminColors::sidebar_bg())
            .flex()
            .flex_col()
            .gap_1()
            .child(
                div()
                    .h(px(64.0))
                    .flex()
                    .items_center()
                    .justify_center()
                    .text_color(AdminColors::text_light())
                    .text_size(px(18.0))
                    .font_weight(gpui::FontWeight::BOLD)
                    .child(APP_TITLE),
            )
            .children(
                Route::all()
                    .iter()
                    .map(|route| self.render_nav_item(*route, locale, selected)),
            )
    }
}
