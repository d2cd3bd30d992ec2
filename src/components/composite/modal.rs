//! Modal Component
//!
//! A modal dialog with a title bar, body, and optional footer.

use gpui::{
    div, prelude::*, px, AnyElement, App, ClickEvent, InteractiveElement, IntoElement,
    ParentElement, RenderOnce, SharedString, StatefulInteractiveElement, Styled, Window,
};

use crate::constants::MODAL_WIDTH;
use crate::theme::colors::AdminColors;

/// Modal component
#[derive(IntoElement)]
pub struct Modal {
    title: SharedString,
    width: f32,
    children: Vec<AnyElement>,
    footer: Vec<AnyElement>,
    on_close: Option<Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>>,
}

impl Modal {
    pub fn new(title: impl Into<SharedString>) -> Self {
        Self {
            title: title.into(),
            width: MODAL_WIDTH,
            children: Vec::new(),
            footer: Vec::new(),
            on_close: None,
        }
    }

    pub fn width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }

    pub fn child(mut self, child: impl IntoElement) -> Self {
        self.children.push(child.into_any_element());
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = impl IntoElement>) -> Self {
        self.children
            .extend(children.into_iter().map(IntoElement::into_any_element));
        self
    }

    /// Right-aligned footer element, usually a button
    pub fn footer(mut self, element: impl IntoElement) -> Self {
        self.footer.push(element.into_any_element());
        self
    }

    /// Shows the close button
    pub fn on_close(
        mut self,
        handler: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_close = Some(Box::new(handler));
        self
    }
}

impl RenderOnce for Modal {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let has_footer = !self.footer.is_empty();

        // Backdrop
        div()
            .id("modal-backdrop")
            .absolute()
            .inset_0()
            .bg(AdminColors::overlay())
            .flex()
            .items_center()
            .justify_center()
            .occlude()
            .child(
                div()
                    .id("modal-container")
                    .bg(AdminColors::content_bg())
                    .rounded_lg()
                    .shadow_lg()
                    .w(px(self.width))
                    .max_h(px(680.0))
                    .flex()
                    .flex_col()
                    // Header
                    .child(
                        div()
                            .px_6()
                            .py_4()
                            .flex()
                            .items_center()
                            .justify_between()
                            .child(
                                div()
                                    .text_size(px(16.0))
                                    .font_weight(gpui::FontWeight::SEMIBOLD)
                                    .text_color(AdminColors::text_primary())
                                    .child(self.title),
                            )
                            .when_some(self.on_close, |el, handler| {
                                el.child(
                                    div()
                                        .id("modal-close")
                                        .size(px(24.0))
                                        .rounded_sm()
                                        .flex()
                                        .items_center()
                                        .justify_center()
                                        .text_color(AdminColors::text_muted())
                                        .text_size(px(16.0))
                                        .cursor_pointer()
                                        .hover(|s| s.bg(AdminColors::table_row_hover()))
                                        .on_click(handler)
                                        .child("×"),
                                )
                            }),
                    )
                    // Content
                    .child(
                        div()
                            .id("modal-body")
                            .px_6()
                            .pb_4()
                            .flex()
                            .flex_col()
                            .gap_4()
                            .overflow_y_scroll()
                            .children(self.children),
                    )
                    .when(has_footer, |el| {
                        el.child(
                            div()
                                .px_6()
                                .py_3()
                                .border_t_1()
                                .border_color(AdminColors::border())
                                .flex()
                                .justify_end()
                                .gap_2()
                                .children(self.footer),
                        )
                    }),
            )
    }
}
