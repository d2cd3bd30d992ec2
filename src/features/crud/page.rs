//! CrudPage - List/Detail View of One Record Type
//!
//! A toolbar with "Add New", the record table with inline status selector
//! and edit/delete actions, the create/edit form modal, and the delete
//! confirmation. All mutations go through [`CrudController`]; this view only
//! gathers input and renders state.

use gpui::{
    div, prelude::*, px, AnyElement, ClickEvent, Context, Entity, IntoElement, ParentElement,
    Render, SharedString, Styled, Subscription, Window,
};
use gpui_component::input::{Input, InputEvent, InputState};
use tracing::warn;

use super::controller::CrudController;
use super::table::ColumnKind;
use crate::app::entities::{AppEntities, HasStore};
use crate::components::composite::confirm_dialog::ConfirmDialog;
use crate::components::composite::data_table::{Column, DataTable};
use crate::components::composite::modal::Modal;
use crate::components::primitives::button::Button;
use crate::components::primitives::select::{Select, SelectOption};
use crate::domain::form::{FieldKind, FieldSpec};
use crate::domain::record::{FormData, Record, RecordId};
use crate::domain::status::Status;
use crate::i18n::{t, t_count, t_entity, Locale};
use crate::state::page_state::{PageMode, PageState};
use crate::store::References;
use crate::theme::colors::AdminColors;

const DATE_PLACEHOLDER: &str = "YYYY-MM-DD";

pub struct CrudPage<R: HasStore> {
    entities: AppEntities,
    state: PageState<R>,
    controller: CrudController<R>,
    /// Text inputs of the open form, keyed by field
    inputs: Vec<(&'static str, Entity<InputState>)>,
    _input_subscriptions: Vec<Subscription>,
    _subscriptions: Vec<Subscription>,
}

impl<R: HasStore> CrudPage<R> {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        let policy = entities.config.read(cx).inline_status_policy(R::KIND);

        let subscriptions = vec![
            cx.observe(R::store(&entities), |_this, _, cx| cx.notify()),
            // Reference names shown in cells and form options
            cx.observe(&entities.products, |_this, _, cx| cx.notify()),
            cx.observe(&entities.plans, |_this, _, cx| cx.notify()),
            cx.observe(&entities.i18n, |_this, _, cx| cx.notify()),
            cx.observe(&entities.config, |this, config, cx| {
                let policy = config.read(cx).inline_status_policy(R::KIND);
                this.controller.set_policy(policy);
            }),
        ];

        Self {
            entities,
            state: PageState::default(),
            controller: CrudController::new(policy),
            inputs: Vec::new(),
            _input_subscriptions: Vec::new(),
            _subscriptions: subscriptions,
        }
    }

    fn locale(&self, cx: &Context<Self>) -> Locale {
        self.entities.i18n.read(cx).locale
    }

    fn open_create(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        self.controller.open_create(&mut self.state);
        self.rebuild_inputs(window, cx);
        cx.notify();
    }

    fn open_edit(&mut self, id: RecordId, window: &mut Window, cx: &mut Context<Self>) {
        let store = R::store(&self.entities).read(cx);
        if let Err(e) = self.controller.open_edit(&mut self.state, store, id) {
            warn!(kind = %R::KIND, error = %e, "edit requested for a missing record");
            return;
        }
        self.rebuild_inputs(window, cx);
        cx.notify();
    }

    fn request_delete(&mut self, id: RecordId, cx: &mut Context<Self>) {
        self.controller.request_delete(&mut self.state, id);
        self.drop_inputs();
        cx.notify();
    }

    fn cancel(&mut self, cx: &mut Context<Self>) {
        self.controller.cancel(&mut self.state);
        self.drop_inputs();
        cx.notify();
    }

    fn submit(&mut self, cx: &mut Context<Self>) {
        // Inputs normally sync on change; read them once more for the latest keystroke
        for (key, input) in &self.inputs {
            let value = input.read(cx).value().to_string();
            self.state.set_field(key, value);
        }

        let store = R::store(&self.entities).clone();
        let outcome = store.update(cx, |store, cx| {
            let outcome = self.controller.submit(&mut self.state, store);
            if outcome.activity.is_some() {
                cx.notify();
            }
            outcome
        });

        if !self.state.is_form_open() {
            self.drop_inputs();
        }
        self.entities.deliver(outcome, cx);
        cx.notify();
    }

    fn confirm_delete(&mut self, cx: &mut Context<Self>) {
        let store = R::store(&self.entities).clone();
        let outcome = store.update(cx, |store, cx| {
            let outcome = self.controller.confirm_delete(&mut self.state, store);
            if outcome.activity.is_some() {
                cx.notify();
            }
            outcome
        });
        self.entities.deliver(outcome, cx);
        cx.notify();
    }

    fn change_status(&mut self, id: RecordId, status: Status, cx: &mut Context<Self>) {
        let store = R::store(&self.entities).clone();
        let outcome = store.update(cx, |store, cx| {
            let outcome = self.controller.change_status(store, id, status);
            if outcome.activity.is_some() {
                cx.notify();
            }
            outcome
        });
        self.entities.deliver(outcome, cx);
    }

    fn set_choice(&mut self, key: &'static str, value: &str, cx: &mut Context<Self>) {
        self.state.set_field(key, value);
        cx.notify();
    }

    /// Fresh input widgets seeded from the draft
    fn rebuild_inputs(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        self.drop_inputs();
        let locale = self.locale(cx);

        for spec in R::Form::fields().iter().filter(|s| s.kind.is_text_input()) {
            let value = self.state.draft().raw(spec.key).to_string();
            let placeholder = match spec.kind {
                FieldKind::Date => DATE_PLACEHOLDER.to_string(),
                _ => t(locale, spec.label_key),
            };
            let input = cx.new(|cx| {
                InputState::new(window, cx)
                    .default_value(value)
                    .placeholder(placeholder)
            });

            let key = spec.key;
            self._input_subscriptions
                .push(cx.subscribe(&input, move |this, input, event: &InputEvent, cx| {
                    if matches!(event, InputEvent::Change) {
                        let value = input.read(cx).value().to_string();
                        this.state.set_field(key, value);
                        cx.notify();
                    }
                }));
            self.inputs.push((key, input));
        }
    }

    fn drop_inputs(&mut self) {
        self.inputs.clear();
        self._input_subscriptions.clear();
    }

    fn input_for(&self, key: &str) -> Option<&Entity<InputState>> {
        self.inputs
            .iter()
            .find(|(field, _)| *field == key)
            .map(|(_, input)| input)
    }

    fn render_toolbar(&self, count: usize, locale: Locale, cx: &Context<Self>) -> impl IntoElement {
        div()
            .flex()
            .items_center()
            .justify_between()
            .child(
                div()
                    .text_sm()
                    .text_color(AdminColors::text_secondary())
                    .child(t_count(locale, "table.total", count)),
            )
            .child(
                Button::primary("add-new", t(locale, "button.add_new")).on_click(cx.listener(
                    |this, _: &ClickEvent, window, cx| this.open_create(window, cx),
                )),
            )
    }

    fn render_status_cell(
        &self,
        id: RecordId,
        status: Status,
        locale: Locale,
        cx: &Context<Self>,
    ) -> AnyElement {
        let options = Status::all()
            .iter()
            .map(|s| SelectOption::new(s.as_str(), t(locale, s.label_key())))
            .collect();

        Select::new(SharedString::from(format!("status-{id}")))
            .small()
            .options(options)
            .selected(Some(status.as_str()))
            .on_change(cx.listener(move |this, value: &String, _window, cx| {
                match value.parse::<Status>() {
                    Ok(status) => this.change_status(id, status, cx),
                    Err(e) => warn!(error = %e, "unknown status option"),
                }
            }))
            .into_any_element()
    }

    fn render_actions_cell(&self, id: RecordId, locale: Locale, cx: &Context<Self>) -> AnyElement {
        div()
            .flex()
            .gap_1()
            .child(
                Button::link(SharedString::from(format!("edit-{id}")), t(locale, "button.edit"))
                    .small()
                    .on_click(cx.listener(move |this, _: &ClickEvent, window, cx| {
                        this.open_edit(id, window, cx)
                    })),
            )
            .child(
                Button::danger_link(
                    SharedString::from(format!("delete-{id}")),
                    t(locale, "button.delete"),
                )
                .small()
                .on_click(cx.listener(move |this, _: &ClickEvent, _window, cx| {
                    this.request_delete(id, cx)
                })),
            )
            .into_any_element()
    }

    fn render_table(
        &self,
        records: &[R],
        refs: &References,
        locale: Locale,
        cx: &Context<Self>,
    ) -> DataTable {
        let columns = R::columns()
            .iter()
            .map(|spec| {
                let column = Column::new(t(locale, spec.label_key));
                match spec.kind {
                    ColumnKind::Text => column.flex_width(spec.width),
                    ColumnKind::Status | ColumnKind::Actions => column.fixed_width(spec.width),
                }
            })
            .collect();

        let rows: Vec<Vec<AnyElement>> = records
            .iter()
            .map(|record| {
                R::columns()
                    .iter()
                    .map(|spec| match spec.kind {
                        ColumnKind::Text => div()
                            .child(record.cell_text(spec.key, refs, locale))
                            .into_any_element(),
                        ColumnKind::Status => match record.status() {
                            Some(status) => {
                                self.render_status_cell(record.id(), status, locale, cx)
                            }
                            None => div().into_any_element(),
                        },
                        ColumnKind::Actions => self.render_actions_cell(record.id(), locale, cx),
                    })
                    .collect()
            })
            .collect();

        DataTable::new(columns)
            .rows(rows)
            .empty_message(t(locale, "table.empty"))
    }

    fn render_field(
        &self,
        spec: &FieldSpec,
        refs: &References,
        locale: Locale,
        cx: &Context<Self>,
    ) -> AnyElement {
        let error = self.state.errors().for_field(spec.key);
        let selected = self.state.draft().get(spec.key).map(str::to_string);
        let key = spec.key;
        let select_id = SharedString::from(format!("field-{key}"));

        let control = match spec.kind {
            FieldKind::Choice(set) => Select::new(select_id)
                .options(
                    set.options()
                        .into_iter()
                        .map(|(value, label_key)| SelectOption::new(value, t(locale, label_key)))
                        .collect(),
                )
                .selected(selected)
                .invalid(error.is_some())
                .on_change(cx.listener(move |this, value: &String, _window, cx| {
                    this.set_choice(key, value, cx)
                }))
                .into_any_element(),
            FieldKind::Reference(kind) => Select::new(select_id)
                .options(
                    refs.options(kind)
                        .iter()
                        .map(|(id, name)| SelectOption::new(id.to_string(), name.clone()))
                        .collect(),
                )
                .placeholder(t(locale, "table.empty"))
                .selected(selected)
                .invalid(error.is_some())
                .on_change(cx.listener(move |this, value: &String, _window, cx| {
                    this.set_choice(key, value, cx)
                }))
                .into_any_element(),
            _ => match self.input_for(key) {
                Some(input) => div()
                    .rounded_md()
                    .when(error.is_some(), |el| el.border_1().border_color(AdminColors::danger()))
                    .child(Input::new(input))
                    .into_any_element(),
                None => div().into_any_element(),
            },
        };

        div()
            .flex()
            .flex_col()
            .gap_1()
            .child(
                div()
                    .flex()
                    .gap_1()
                    .text_size(px(14.0))
                    .text_color(AdminColors::text_primary())
                    .child(div().text_color(AdminColors::danger()).child("*"))
                    .child(t(locale, spec.label_key)),
            )
            .child(control)
            .when_some(error, |el, error| {
                el.child(
                    div()
                        .text_size(px(12.0))
                        .text_color(AdminColors::danger())
                        .child(t(locale, error.message_key)),
                )
            })
            .into_any_element()
    }

    fn render_form(&self, refs: &References, locale: Locale, cx: &Context<Self>) -> Option<Modal> {
        let title_key = self.state.form_title_key()?;
        let submit_key = match self.state.mode() {
            PageMode::Editing(_) => "button.update",
            _ => "button.create",
        };

        let fields: Vec<AnyElement> = R::Form::fields()
            .iter()
            .map(|spec| self.render_field(spec, refs, locale, cx))
            .collect();

        Some(
            Modal::new(t_entity(locale, title_key, R::KIND.label_key()))
                .on_close(cx.listener(|this, _: &ClickEvent, _window, cx| this.cancel(cx)))
                .children(fields)
                .footer(
                    Button::outlined("form-cancel", t(locale, "button.cancel"))
                        .on_click(cx.listener(|this, _: &ClickEvent, _window, cx| this.cancel(cx))),
                )
                .footer(
                    Button::primary("form-submit", t(locale, submit_key))
                        .on_click(cx.listener(|this, _: &ClickEvent, _window, cx| this.submit(cx))),
                ),
        )
    }

    fn render_confirm(&self, locale: Locale, cx: &Context<Self>) -> Option<ConfirmDialog> {
        let PageMode::ConfirmDelete(_) = self.state.mode() else {
            return None;
        };
        Some(
            ConfirmDialog::new(t_entity(locale, "confirm.delete_title", R::KIND.label_key()))
                .description(t(locale, "confirm.delete_description"))
                .labels(t(locale, "button.yes"), t(locale, "button.no"))
                .on_confirm(cx.listener(|this, _: &ClickEvent, _window, cx| {
                    this.confirm_delete(cx)
                }))
                .on_cancel(cx.listener(|this, _: &ClickEvent, _window, cx| this.cancel(cx))),
        )
    }
}

impl<R: HasStore> Render for CrudPage<R> {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.locale(cx);
        let records = R::store(&self.entities).read(cx).to_vec();
        let refs = References::new(
            self.entities.products.read(cx),
            self.entities.plans.read(cx),
        );

        let toolbar = self.render_toolbar(records.len(), locale, cx);
        let table = self.render_table(&records, &refs, locale, cx);
        let form = self.render_form(&refs, locale, cx);
        let confirm = self.render_confirm(locale, cx);

        div()
            .size_full()
            .relative()
            .child(
                div()
                    .id("crud-page")
                    .size_full()
                    .overflow_y_scroll()
                    .p_6()
                    .flex()
                    .flex_col()
                    .gap_4()
                    .child(toolbar)
                    .child(table),
            )
            .children(form)
            .children(confirm)
    }
}
