//! DataTable Component

use gpui::{
    div, prelude::*, px, AnyElement, App, Div, IntoElement, ParentElement, RenderOnce,
    SharedString, Styled, Window,
};

use super::column::{Column, ColumnWidth};
use crate::constants::{TABLE_HEADER_HEIGHT, TABLE_ROW_HEIGHT};
use crate::theme::colors::AdminColors;

/// DataTable component
#[derive(IntoElement)]
pub struct DataTable {
    columns: Vec<Column>,
    rows: Vec<Vec<AnyElement>>,
    row_height: f32,
    header_height: f32,
    empty_message: SharedString,
}

impl DataTable {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            row_height: TABLE_ROW_HEIGHT,
            header_height: TABLE_HEADER_HEIGHT,
            empty_message: "No data".into(),
        }
    }

    /// Append a row; cells beyond the column count are dropped
    pub fn row(mut self, cells: Vec<AnyElement>) -> Self {
        self.rows.push(cells);
        self
    }

    pub fn rows(mut self, rows: impl IntoIterator<Item = Vec<AnyElement>>) -> Self {
        self.rows.extend(rows);
        self
    }

    pub fn row_height(mut self, height: f32) -> Self {
        self.row_height = height;
        self
    }

    pub fn empty_message(mut self, message: impl Into<SharedString>) -> Self {
        self.empty_message = message.into();
        self
    }
}

fn sized_cell(width: ColumnWidth) -> Div {
    let cell = div().px_3().flex().items_center().overflow_hidden();
    match width {
        ColumnWidth::Fixed(w) => cell.w(px(w)).flex_none(),
        ColumnWidth::Flex { min } => cell.flex_1().min_w(px(min)),
    }
}

impl RenderOnce for DataTable {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let widths: Vec<ColumnWidth> = self.columns.iter().map(|c| c.width).collect();

        let header = div()
            .h(px(self.header_height))
            .w_full()
            .flex()
            .items_center()
            .bg(AdminColors::table_header_bg())
            .border_b_1()
            .border_color(AdminColors::border())
            .children(self.columns.into_iter().map(|col| {
                sized_cell(col.width)
                    .text_sm()
                    .font_weight(gpui::FontWeight::MEDIUM)
                    .text_color(AdminColors::text_primary())
                    .child(col.label)
            }));

        let body = if self.rows.is_empty() {
            div()
                .id("data-table-rows")
                .py_8()
                .flex()
                .justify_center()
                .text_color(AdminColors::text_muted())
                .child(self.empty_message)
        } else {
            let row_height = self.row_height;
            div()
                .id("data-table-rows")
                .flex_1()
                .overflow_y_scroll()
                .children(self.rows.into_iter().map(|cells| {
                    div()
                        .min_h(px(row_height))
                        .w_full()
                        .flex()
                        .items_center()
                        .hover(|s| s.bg(AdminColors::table_row_hover()))
                        .border_b_1()
                        .border_color(AdminColors::border())
                        .children(cells.into_iter().zip(widths.iter()).map(|(cell, width)| {
                            sized_cell(*width)
                                .py_2()
                                .text_sm()
                                .text_color(AdminColors::text_primary())
                                .child(cell)
                        }))
                }))
        };

        div()
            .w_full()
            .flex()
            .flex_col()
            .bg(AdminColors::content_bg())
            .border_1()
            .border_color(AdminColors::border())
            .rounded_md()
            .overflow_hidden()
            .child(header)
            .child(body)
    }
}
