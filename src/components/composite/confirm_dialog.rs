//! ConfirmDialog - Yes/No Question before a Destructive Action

use gpui::{
    div, px, App, ClickEvent, IntoElement, ParentElement, RenderOnce, SharedString, Styled, Window,
};

use super::modal::Modal;
use crate::components::primitives::button::Button;
use crate::theme::colors::AdminColors;

type Handler = Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>;

#[derive(IntoElement)]
pub struct ConfirmDialog {
    title: SharedString,
    description: SharedString,
    confirm_label: SharedString,
    cancel_label: SharedString,
    on_confirm: Option<Handler>,
    on_cancel: Option<Handler>,
}

impl ConfirmDialog {
    pub fn new(title: impl Into<SharedString>) -> Self {
        Self {
            title: title.into(),
            description: SharedString::default(),
            confirm_label: "Yes".into(),
            cancel_label: "No".into(),
            on_confirm: None,
            on_cancel: None,
        }
    }

    pub fn description(mut self, description: impl Into<SharedString>) -> Self {
        self.description = description.into();
        self
    }

    pub fn labels(
        mut self,
        confirm: impl Into<SharedString>,
        cancel: impl Into<SharedString>,
    ) -> Self {
        self.confirm_label = confirm.into();
        self.cancel_label = cancel.into();
        self
    }

    pub fn on_confirm(
        mut self,
        handler: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_confirm = Some(Box::new(handler));
        self
    }

    pub fn on_cancel(
        mut self,
        handler: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_cancel = Some(Box::new(handler));
        self
    }
}

impl RenderOnce for ConfirmDialog {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let mut cancel = Button::outlined("confirm-cancel", self.cancel_label).small();
        if let Some(handler) = self.on_cancel {
            cancel = cancel.on_click(handler);
        }
        let mut confirm = Button::danger("confirm-ok", self.confirm_label).small();
        if let Some(handler) = self.on_confirm {
            confirm = confirm.on_click(handler);
        }

        let mut modal = Modal::new(self.title).width(420.0);
        if !self.description.is_empty() {
            modal = modal.child(
                div()
                    .text_size(px(14.0))
                    .text_color(AdminColors::text_secondary())
                    .child(self.description),
            );
        }
        modal.footer(cancel).footer(confirm)
    }
}
