//! Pagination Component
//!
//! Page navigation below a table. Pages are 1-based.

use std::rc::Rc;

use gpui::{
    div, prelude::*, App, ClickEvent, InteractiveElement, IntoElement, ParentElement, RenderOnce,
    SharedString, StatefulInteractiveElement, Styled, Window,
};

use crate::theme::colors::AdminColors;

type PageHandler = Rc<dyn Fn(usize, &mut App) + 'static>;

/// Pagination component
#[derive(IntoElement)]
pub struct Pagination {
    current_page: usize,
    total_pages: usize,
    total_items: usize,
    items_label: SharedString,
    on_page_change: Option<PageHandler>,
}

impl Pagination {
    pub fn new(current_page: usize, total_pages: usize, total_items: usize) -> Self {
        Self {
            current_page,
            total_pages: total_pages.max(1),
            total_items,
            items_label: "items".into(),
            on_page_change: None,
        }
    }

    pub fn items_label(mut self, label: impl Into<SharedString>) -> Self {
        self.items_label = label.into();
        self
    }

    pub fn on_page_change(mut self, handler: impl Fn(usize, &mut App) + 'static) -> Self {
        self.on_page_change = Some(Rc::new(handler));
        self
    }
}

fn page_button(
    id: &'static str,
    glyph: &'static str,
    target: Option<usize>,
    handler: Option<PageHandler>,
) -> impl IntoElement {
    let enabled = target.is_some();
    div()
        .id(id)
        .px_2()
        .py_1()
        .rounded_sm()
        .text_sm()
        .text_color(if enabled {
            AdminColors::text_primary()
        } else {
            AdminColors::text_muted()
        })
        .when(enabled, |el| {
            el.cursor_pointer()
                .hover(|s| s.bg(AdminColors::table_row_hover()))
        })
        .when_some(target.zip(handler), |el, (page, handler)| {
            el.on_click(move |_event: &ClickEvent, _window, cx| handler(page, cx))
        })
        .child(glyph)
}

impl RenderOnce for Pagination {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let current = self.current_page;
        let total = self.total_pages;
        let prev = (current > 1).then(|| current - 1);
        let next = (current < total).then(|| current + 1);

        div()
            .w_full()
            .px_4()
            .py_2()
            .flex()
            .items_center()
            .justify_between()
            .border_t_1()
            .border_color(AdminColors::border())
            // Item count
            .child(
                div()
                    .text_sm()
                    .text_color(AdminColors::text_secondary())
                    .child(format!("{} {}", self.total_items, self.items_label)),
            )
            // Page navigation
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_2()
                    .child(page_button("prev-page", "←", prev, self.on_page_change.clone()))
                    .child(
                        div()
                            .text_sm()
                            .text_color(AdminColors::text_primary())
                            .child(format!("{} / {}", current, total)),
                    )
                    .child(page_button("next-page", "→", next, self.on_page_change)),
            )
    }
}
