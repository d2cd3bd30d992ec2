//! Header Component
//!
//! Page title on the left, language switcher on the right.

use gpui::{
    div, px, App, ClickEvent, Context, InteractiveElement, IntoElement, ParentElement, Render,
    StatefulInteractiveElement, Styled, Window,
};
use tracing::{info, warn};

use crate::app::entities::AppEntities;
use crate::constants::HEADER_HEIGHT;
use crate::i18n::t;
use crate::state::notification_state::NotificationMessage;
use crate::theme::colors::AdminColors;

/// Header component
pub struct Header {
    entities: AppEntities,
}

impl Header {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        cx.observe(&entities.i18n, |_this, _, cx| cx.notify())
            .detach();
        cx.observe(&entities.navigation, |_this, _, cx| cx.notify())
            .detach();

        Self { entities }
    }
}

/// Switch the language and remember it in the settings file
fn toggle_locale(entities: &AppEntities, cx: &mut App) {
    let locale = entities.i18n.update(cx, |i18n, cx| {
        let locale = i18n.toggle_locale();
        cx.notify();
        locale
    });
    info!(locale = locale.code(), "locale switched");

    let saved = entities
        .config
        .update(cx, |config, _cx| config.set_locale(locale));
    if let Err(e) = saved {
        warn!(error = %e, "failed to save locale");
        entities.notify(NotificationMessage::SettingsSaveFailed, cx);
    }
}

impl Render for Header {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale;
        let route = self.entities.navigation.read(cx).route();
        let title = t(locale, route.label_key());
        // Offer the language we would switch to
        let lang_label = locale.toggle().display_name();

        let entities = self.entities.clone();

        div()
            .h(px(HEADER_HEIGHT))
            .w_full()
            .flex_none()
            .bg(AdminColors::header_bg())
            .border_b_1()
            .border_color(AdminColors::border())
            .flex()
            .items_center()
            .justify_between()
            .px_6()
            .child(
                div()
                    .text_color(AdminColors::text_primary())
                    .text_size(px(18.0))
                    .font_weight(gpui::FontWeight::SEMIBOLD)
                    .child(title),
            )
            .child(
                div()
                    .id("lang-switcher")
                    .px_3()
                    .py_1()
                    .rounded_md()
                    .border_1()
                    .border_color(AdminColors::input_border())
                    .text_color(AdminColors::text_secondary())
                    .text_size(px(13.0))
                    .cursor_pointer()
                    .hover(|s| s.bg(AdminColors::table_row_hover()))
                    .on_click(move |_event: &ClickEvent, _window, cx| {
                        toggle_locale(&entities, cx);
                    })
                    .child(lang_label),
            )
    }
}
