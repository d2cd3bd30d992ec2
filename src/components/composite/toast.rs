//! Toast - Stacked Transient Notifications

use std::rc::Rc;

use gpui::{
    div, prelude::*, px, App, ClickEvent, InteractiveElement, IntoElement, ParentElement,
    RenderOnce, SharedString, StatefulInteractiveElement, Styled, Window,
};

use crate::state::notification_state::NotificationLevel;
use crate::theme::colors::AdminColors;

/// A rendered toast line
#[derive(Debug, Clone)]
pub struct ToastItem {
    pub id: u64,
    pub level: NotificationLevel,
    pub text: SharedString,
    /// Creation time, `HH:MM:SS`
    pub time: SharedString,
}

/// Top-center stack of toasts, newest on top
#[derive(IntoElement)]
pub struct ToastStack {
    items: Vec<ToastItem>,
    on_dismiss: Option<Rc<dyn Fn(u64, &mut App) + 'static>>,
}

impl ToastStack {
    pub fn new(items: Vec<ToastItem>) -> Self {
        Self {
            items,
            on_dismiss: None,
        }
    }

    pub fn on_dismiss(mut self, handler: impl Fn(u64, &mut App) + 'static) -> Self {
        self.on_dismiss = Some(Rc::new(handler));
        self
    }
}

fn level_glyph(level: NotificationLevel) -> &'static str {
    match level {
        NotificationLevel::Info => "ℹ",
        NotificationLevel::Success => "✓",
        NotificationLevel::Warning => "!",
        NotificationLevel::Error => "✕",
    }
}

impl RenderOnce for ToastStack {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let on_dismiss = self.on_dismiss;

        div()
            .absolute()
            .top(px(16.0))
            .left_0()
            .right_0()
            .flex()
            .flex_col()
            .items_center()
            .gap_2()
            .children(self.items.into_iter().map(|item| {
                let accent = AdminColors::notification(item.level);
                let handler = on_dismiss.clone();
                let id = item.id;

                div()
                    .id(("toast", id as usize))
                    .min_w(px(240.0))
                    .max_w(px(480.0))
                    .px_4()
                    .py_2()
                    .bg(AdminColors::content_bg())
                    .rounded_md()
                    .shadow_md()
                    .border_l_4()
                    .border_color(accent)
                    .flex()
                    .items_center()
                    .gap_2()
                    .cursor_pointer()
                    .when_some(handler, move |el, handler| {
                        el.on_click(move |_event: &ClickEvent, _window, cx| handler(id, cx))
                    })
                    .child(div().text_color(accent).child(level_glyph(item.level)))
                    .child(
                        div()
                            .text_size(px(14.0))
                            .text_color(AdminColors::text_primary())
                            .child(item.text),
                    )
                    .child(
                        div()
                            .text_size(px(12.0))
                            .text_color(AdminColors::text_muted())
                            .child(item.time),
                    )
            }))
    }
}
