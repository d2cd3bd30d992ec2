//! Dashboard Page
//!
//! Totals per record type, status distribution for plans and products, and
//! the recent activity table.

use gpui::{
    div, prelude::*, px, AnyElement, Context, IntoElement, ParentElement, Render, Styled,
    Subscription, Window,
};

use super::summary::{DashboardSummary, StatusCounts};
use crate::app::entities::AppEntities;
use crate::components::composite::data_table::{Column, DataTable, Pagination};
use crate::domain::activity::RecentActivity;
use crate::domain::form::format_date;
use crate::domain::status::Status;
use crate::i18n::{t, Locale};
use crate::theme::colors::AdminColors;

pub struct DashboardPage {
    entities: AppEntities,
    /// Zero-based activity page
    activity_page: usize,
    _subscriptions: Vec<Subscription>,
}

impl DashboardPage {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        let subscriptions = vec![
            cx.observe(&entities.plans, |_this, _, cx| cx.notify()),
            cx.observe(&entities.products, |_this, _, cx| cx.notify()),
            cx.observe(&entities.packages, |_this, _, cx| cx.notify()),
            cx.observe(&entities.modules, |_this, _, cx| cx.notify()),
            cx.observe(&entities.i18n, |_this, _, cx| cx.notify()),
            // New entries appear on the first page
            cx.observe(&entities.activity, |this, _, cx| {
                this.activity_page = 0;
                cx.notify();
            }),
        ];

        Self {
            entities,
            activity_page: 0,
            _subscriptions: subscriptions,
        }
    }

    fn summary(&self, cx: &Context<Self>) -> DashboardSummary {
        DashboardSummary::collect(
            self.entities.plans.read(cx),
            self.entities.products.read(cx),
            self.entities.packages.read(cx),
            self.entities.modules.read(cx),
        )
    }
}

fn card(title: String) -> gpui::Div {
    div()
        .flex_1()
        .p_5()
        .bg(AdminColors::content_bg())
        .rounded_lg()
        .border_1()
        .border_color(AdminColors::border())
        .flex()
        .flex_col()
        .gap_2()
        .child(
            div()
                .text_size(px(14.0))
                .text_color(AdminColors::text_secondary())
                .child(title),
        )
}

fn total_card(title: String, value: usize) -> impl IntoElement {
    card(title).child(
        div()
            .text_size(px(30.0))
            .font_weight(gpui::FontWeight::SEMIBOLD)
            .text_color(AdminColors::text_primary())
            .child(value.to_string()),
    )
}

fn distribution_card(title: String, counts: StatusCounts, locale: Locale) -> impl IntoElement {
    let total = counts.total().max(1) as f32;
    card(title).children(Status::all().iter().map(|status| {
        let count = counts.get(*status);
        let share = count as f32 / total;
        div()
            .flex()
            .items_center()
            .gap_3()
            .child(
                div()
                    .w(px(96.0))
                    .text_sm()
                    .text_color(AdminColors::text_secondary())
                    .child(t(locale, status.label_key())),
            )
            .child(
                div()
                    .flex_1()
                    .h(px(8.0))
                    .rounded_full()
                    .bg(AdminColors::table_row_hover())
                    .child(
                        div()
                            .h_full()
                            .w(gpui::relative(share))
                            .rounded_full()
                            .bg(AdminColors::status(*status)),
                    ),
            )
            .child(
                div()
                    .w(px(32.0))
                    .text_sm()
                    .text_color(AdminColors::text_primary())
                    .child(count.to_string()),
            )
    }))
}

fn status_tag(status: Option<Status>, locale: Locale) -> AnyElement {
    match status {
        Some(status) => div()
            .px_2()
            .rounded_sm()
            .border_1()
            .border_color(AdminColors::status(status))
            .text_color(AdminColors::status(status))
            .text_size(px(12.0))
            .child(t(locale, status.label_key()))
            .into_any_element(),
        None => div().child("-").into_any_element(),
    }
}

fn activity_row(activity: &RecentActivity, locale: Locale) -> Vec<AnyElement> {
    vec![
        div().child(t(locale, activity.kind.label_key())).into_any_element(),
        div().child(activity.name.clone()).into_any_element(),
        status_tag(activity.status, locale),
        div().child(t(locale, activity.action.label_key())).into_any_element(),
        div().child(format_date(activity.updated_at)).into_any_element(),
    ]
}

impl Render for DashboardPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale;
        let summary = self.summary(cx);

        let activity = self.entities.activity.read(cx);
        let page_count = activity.page_count();
        let total_entries = activity.len();
        let page = self.activity_page.min(page_count - 1);
        let rows: Vec<Vec<AnyElement>> = activity
            .page(page)
            .into_iter()
            .map(|entry| activity_row(entry, locale))
            .collect();

        let columns = vec![
            Column::new(t(locale, "column.type")).fixed_width(120.0),
            Column::new(t(locale, "column.name")).flex_width(180.0),
            Column::new(t(locale, "column.status")).fixed_width(120.0),
            Column::new(t(locale, "column.action")).fixed_width(140.0),
            Column::new(t(locale, "column.updated_at")).fixed_width(140.0),
        ];

        let view = cx.entity().downgrade();
        let pagination = Pagination::new(page + 1, page_count, total_entries)
            .items_label(t(locale, "dashboard.entries"))
            .on_page_change(move |page, cx| {
                let _ = view.update(cx, |this, cx| {
                    this.activity_page = page.saturating_sub(1);
                    cx.notify();
                });
            });

        div()
            .id("dashboard")
            .size_full()
            .overflow_y_scroll()
            .p_6()
            .flex()
            .flex_col()
            .gap_4()
            .child(
                div()
                    .flex()
                    .gap_4()
                    .child(total_card(t(locale, "dashboard.total_plans"), summary.plans))
                    .child(total_card(t(locale, "dashboard.total_products"), summary.products))
                    .child(total_card(t(locale, "dashboard.total_packages"), summary.packages))
                    .child(total_card(t(locale, "dashboard.total_modules"), summary.modules)),
            )
            .child(
                div()
                    .flex()
                    .gap_4()
                    .child(distribution_card(
                        t(locale, "dashboard.plan_status"),
                        summary.plan_status,
                        locale,
                    ))
                    .child(distribution_card(
                        t(locale, "dashboard.product_status"),
                        summary.product_status,
                        locale,
                    )),
            )
            .child(
                card(t(locale, "dashboard.recent_activity"))
                    .child(
                        DataTable::new(columns)
                            .rows(rows)
                            .empty_message(t(locale, "table.empty")),
                    )
                    .child(pagination),
            )
    }
}
