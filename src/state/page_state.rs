//! PageState - Modal Lifecycle of a List/Detail Page
//!
//! ```text
//! Idle ──open_create──▶ Creating ──submit ok──▶ Idle
//!  │ ──open_edit(id)──▶ Editing(id) ──submit ok──▶ Idle
//!  └──request_delete(id)──▶ ConfirmDelete(id) ──confirm/cancel──▶ Idle
//! ```
//!
//! A failed submit keeps the modal open with per-field errors.

use std::marker::PhantomData;

use crate::domain::form::{FormValues, ValidationErrors};
use crate::domain::record::{FormData, Record, RecordId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageMode {
    #[default]
    Idle,
    Creating,
    Editing(RecordId),
    ConfirmDelete(RecordId),
}

#[derive(Debug, Clone)]
pub struct PageState<R: Record> {
    mode: PageMode,
    draft: FormValues,
    errors: ValidationErrors,
    _record: PhantomData<R>,
}

impl<R: Record> Default for PageState<R> {
    fn default() -> Self {
        Self {
            mode: PageMode::Idle,
            draft: FormValues::new(),
            errors: ValidationErrors::new(),
            _record: PhantomData,
        }
    }
}

impl<R: Record> PageState<R> {
    pub fn mode(&self) -> PageMode {
        self.mode
    }

    pub fn draft(&self) -> &FormValues {
        &self.draft
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Whether the create/edit form is showing
    pub fn is_form_open(&self) -> bool {
        matches!(self.mode, PageMode::Creating | PageMode::Editing(_))
    }

    /// Title key of the open form
    pub fn form_title_key(&self) -> Option<&'static str> {
        match self.mode {
            PageMode::Creating => Some("modal.create_title"),
            PageMode::Editing(_) => Some("modal.edit_title"),
            _ => None,
        }
    }

    /// Open an empty form
    pub fn open_create(&mut self) {
        self.reset();
        self.mode = PageMode::Creating;
    }

    /// Open the form prefilled from a record
    pub fn open_edit(&mut self, record: &R) {
        self.reset();
        self.draft = record.to_form().to_values();
        self.mode = PageMode::Editing(record.id());
    }

    pub fn request_delete(&mut self, id: RecordId) {
        self.reset();
        self.mode = PageMode::ConfirmDelete(id);
    }

    /// Edit one draft field, clearing its stale error
    pub fn set_field(&mut self, key: &str, value: impl Into<String>) {
        self.draft.set(key, value);
        if self.errors.for_field(key).is_some() {
            let remaining: Vec<_> = self
                .errors
                .iter()
                .filter(|e| e.field != key)
                .copied()
                .collect();
            self.errors.clear();
            for error in remaining {
                self.errors.push(error.field, error.message_key);
            }
        }
    }

    pub fn set_errors(&mut self, errors: ValidationErrors) {
        self.errors = errors;
    }

    /// Close any modal and discard the draft
    pub fn cancel(&mut self) {
        self.reset();
        self.mode = PageMode::Idle;
    }

    fn reset(&mut self) {
        self.draft.clear();
        self.errors.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::plan::Plan;
    use crate::store::fixtures;

    #[test]
    fn test_open_edit_prefills_draft() {
        let plans = fixtures::plans();
        let mut page = PageState::<Plan>::default();

        page.open_edit(&plans[1]);

        assert_eq!(page.mode(), PageMode::Editing(RecordId(2)));
        assert_eq!(page.draft().get("name"), Some("Premium"));
        assert_eq!(page.draft().get("end_date"), Some("2022-12-31"));
        assert_eq!(page.form_title_key(), Some("modal.edit_title"));
    }

    #[test]
    fn test_cancel_resets_from_any_mode() {
        let mut page = PageState::<Plan>::default();
        page.open_create();
        page.set_field("name", "Draft");
        page.cancel();
        assert_eq!(page.mode(), PageMode::Idle);
        assert!(page.draft().is_empty());

        page.request_delete(RecordId(1));
        assert!(!page.is_form_open());
        page.cancel();
        assert_eq!(page.mode(), PageMode::Idle);
    }

    #[test]
    fn test_set_field_clears_its_error() {
        let mut page = PageState::<Plan>::default();
        page.open_create();
        let mut errors = ValidationErrors::new();
        errors.push("name", "form.plan.name_required");
        errors.push("discount_rate", "form.plan.discount_rate_required");
        page.set_errors(errors);

        page.set_field("name", "Gold");

        assert!(page.errors().for_field("name").is_none());
        assert!(page.errors().for_field("discount_rate").is_some());
    }
}
