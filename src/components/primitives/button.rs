//! Button Component

use gpui::{
    div, prelude::*, px, rgba, App, ClickEvent, ElementId, InteractiveElement, IntoElement,
    ParentElement, RenderOnce, SharedString, StatefulInteractiveElement, Styled, Window,
};

use crate::theme::colors::AdminColors;

/// Button variant
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Filled blue, one per view
    #[default]
    Primary,
    /// Outlined
    Default,
    /// Filled red for destructive confirmation
    Danger,
    /// Text-only link style used inside table rows
    Link,
    /// Red text-only link
    DangerLink,
}

/// A styled button component
#[derive(IntoElement)]
pub struct Button {
    id: ElementId,
    label: SharedString,
    variant: ButtonVariant,
    small: bool,
    on_click: Option<Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>>,
}

impl Button {
    pub fn new(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            variant: ButtonVariant::Primary,
            small: false,
            on_click: None,
        }
    }

    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn small(mut self) -> Self {
        self.small = true;
        self
    }

    pub fn on_click(
        mut self,
        handler: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_click = Some(Box::new(handler));
        self
    }

    pub fn primary(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self::new(id, label).variant(ButtonVariant::Primary)
    }

    pub fn outlined(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self::new(id, label).variant(ButtonVariant::Default)
    }

    pub fn danger(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self::new(id, label).variant(ButtonVariant::Danger)
    }

    pub fn link(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self::new(id, label).variant(ButtonVariant::Link)
    }

    pub fn danger_link(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self::new(id, label).variant(ButtonVariant::DangerLink)
    }
}

impl RenderOnce for Button {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let transparent = rgba(0x00000000);
        // (background, text, border, hover background)
        let (bg, text, border, hover_bg) = match self.variant {
            ButtonVariant::Primary => (
                AdminColors::primary(),
                AdminColors::text_light(),
                AdminColors::primary(),
                AdminColors::primary_hover(),
            ),
            ButtonVariant::Default => (
                AdminColors::content_bg(),
                AdminColors::text_primary(),
                AdminColors::input_border(),
                AdminColors::table_row_hover(),
            ),
            ButtonVariant::Danger => (
                AdminColors::danger(),
                AdminColors::text_light(),
                AdminColors::danger(),
                AdminColors::danger_hover(),
            ),
            ButtonVariant::Link => (
                transparent,
                AdminColors::primary(),
                transparent,
                AdminColors::primary_soft(),
            ),
            ButtonVariant::DangerLink => (
                transparent,
                AdminColors::danger(),
                transparent,
                rgba(0xff4d4f1a),
            ),
        };

        let (padding_x, padding_y, font_size) = if self.small {
            (px(8.0), px(2.0), px(13.0))
        } else {
            (px(15.0), px(5.0), px(14.0))
        };

        div()
            .id(self.id)
            .px(padding_x)
            .py(padding_y)
            .bg(bg)
            .text_color(text)
            .text_size(font_size)
            .border_1()
            .border_color(border)
            .rounded_md()
            .cursor_pointer()
            .hover(move |s| s.bg(hover_bg))
            .when_some(self.on_click, |el, handler| el.on_click(handler))
            .child(self.label)
    }
}
