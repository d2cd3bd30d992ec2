//! Select Component
//!
//! A segmented picker: every option is visible and the selected one is
//! highlighted. Enumerations here are short, so no dropdown is needed.

use std::rc::Rc;

use gpui::{
    div, prelude::*, px, App, ClickEvent, ElementId, InteractiveElement, IntoElement,
    ParentElement, RenderOnce, SharedString, StatefulInteractiveElement, Styled, Window,
};

use crate::theme::colors::AdminColors;

type ChangeHandler = Rc<dyn Fn(&String, &mut Window, &mut App) + 'static>;

/// A select option
#[derive(Debug, Clone)]
pub struct SelectOption {
    pub value: String,
    pub label: SharedString,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<SharedString>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

#[derive(IntoElement)]
pub struct Select {
    id: ElementId,
    selected: Option<String>,
    options: Vec<SelectOption>,
    placeholder: SharedString,
    invalid: bool,
    small: bool,
    on_change: Option<ChangeHandler>,
}

impl Select {
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            selected: None,
            options: Vec::new(),
            placeholder: SharedString::default(),
            invalid: false,
            small: false,
            on_change: None,
        }
    }

    pub fn selected(mut self, value: Option<impl Into<String>>) -> Self {
        self.selected = value.map(Into::into);
        self
    }

    pub fn options(mut self, options: Vec<SelectOption>) -> Self {
        self.options = options;
        self
    }

    /// Shown when there are no options at all
    pub fn placeholder(mut self, placeholder: impl Into<SharedString>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Red outline for a field with a validation error
    pub fn invalid(mut self, invalid: bool) -> Self {
        self.invalid = invalid;
        self
    }

    /// Compact variant for table cells
    pub fn small(mut self) -> Self {
        self.small = true;
        self
    }

    /// Called with the option value; not called when the selected option is clicked again
    pub fn on_change(mut self, handler: impl Fn(&String, &mut Window, &mut App) + 'static) -> Self {
        self.on_change = Some(Rc::new(handler));
        self
    }
}

impl RenderOnce for Select {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let border = if self.invalid {
            AdminColors::danger()
        } else {
            AdminColors::input_border()
        };
        let (padding_x, font_size) = if self.small {
            (px(6.0), px(12.0))
        } else {
            (px(10.0), px(13.0))
        };

        if self.options.is_empty() {
            return div()
                .id(self.id)
                .px_3()
                .py_1()
                .border_1()
                .border_color(border)
                .rounded_md()
                .text_size(font_size)
                .text_color(AdminColors::text_muted())
                .child(self.placeholder);
        }

        let selected = self.selected;
        let on_change = self.on_change;

        div()
            .id(self.id)
            .flex()
            .flex_wrap()
            .border_1()
            .border_color(border)
            .rounded_md()
            .overflow_hidden()
            .children(self.options.into_iter().enumerate().map(|(index, option)| {
                let is_selected = selected.as_deref() == Some(option.value.as_str());
                let (bg, text) = if is_selected {
                    (AdminColors::primary(), AdminColors::text_light())
                } else {
                    (AdminColors::content_bg(), AdminColors::text_secondary())
                };
                let handler = on_change.clone();
                let value = option.value;

                div()
                    .id(("option", index))
                    .px(padding_x)
                    .py(px(3.0))
                    .bg(bg)
                    .text_color(text)
                    .text_size(font_size)
                    .when(index > 0, |el| el.border_l_1().border_color(AdminColors::input_border()))
                    .when(!is_selected, |el| {
                        el.cursor_pointer()
                            .hover(|s| s.bg(AdminColors::table_row_hover()))
                            .when_some(handler, move |el, handler| {
                                el.on_click(move |_event: &ClickEvent, window, cx| {
                                    handler(&value, window, cx);
                                })
                            })
                    })
                    .child(option.label)
            }))
    }
}
