//! CRUD Controller
//!
//! Drives a page's modal lifecycle against its entity store. Works on plain
//! state so every page action can be exercised without a window; the page
//! view applies the returned [`Outcome`] to the notification queue and the
//! activity feed.

use std::marker::PhantomData;

use tracing::{debug, error, warn};

use crate::domain::activity::{ActivityAction, RecentActivity};
use crate::domain::config::InlineStatusPolicy;
use crate::domain::record::{FormData, Record, RecordId};
use crate::domain::status::Status;
use crate::error::{Error, Result};
use crate::state::notification_state::NotificationMessage;
use crate::state::page_state::{PageMode, PageState};
use crate::store::EntityStore;

/// Side effects of one page action
#[derive(Debug, Default)]
pub struct Outcome {
    pub notification: Option<NotificationMessage>,
    pub activity: Option<RecentActivity>,
}

impl Outcome {
    fn none() -> Self {
        Self::default()
    }

    fn notify(message: NotificationMessage) -> Self {
        Self {
            notification: Some(message),
            activity: None,
        }
    }

    fn changed<R: Record>(
        message: NotificationMessage,
        record: &R,
        action: ActivityAction,
    ) -> Self {
        Self {
            notification: Some(message),
            activity: Some(RecentActivity::now(
                R::KIND,
                record.display_name(),
                record.status(),
                action,
            )),
        }
    }
}

/// Page controller shared by every entity page
#[derive(Debug, Clone)]
pub struct CrudController<R: Record> {
    policy: InlineStatusPolicy,
    _record: PhantomData<R>,
}

impl<R: Record> CrudController<R> {
    pub fn new(policy: InlineStatusPolicy) -> Self {
        Self {
            policy,
            _record: PhantomData,
        }
    }

    pub fn policy(&self) -> InlineStatusPolicy {
        self.policy
    }

    pub fn set_policy(&mut self, policy: InlineStatusPolicy) {
        self.policy = policy;
    }

    pub fn open_create(&self, page: &mut PageState<R>) {
        page.open_create();
    }

    /// Open the edit form for a record still in the store
    pub fn open_edit(
        &self,
        page: &mut PageState<R>,
        store: &EntityStore<R>,
        id: RecordId,
    ) -> Result<()> {
        let record = store.get(id).ok_or(Error::NotFound { kind: R::KIND, id })?;
        page.open_edit(record);
        Ok(())
    }

    pub fn request_delete(&self, page: &mut PageState<R>, id: RecordId) {
        page.request_delete(id);
    }

    pub fn cancel(&self, page: &mut PageState<R>) {
        page.cancel();
    }

    /// Validate the draft and create or update the record
    ///
    /// Field errors keep the form open and leave the store untouched. A store
    /// failure raises an error notification and also keeps the form open.
    pub fn submit(&self, page: &mut PageState<R>, store: &mut EntityStore<R>) -> Outcome {
        let target = match page.mode() {
            PageMode::Creating => None,
            PageMode::Editing(id) => Some(id),
            mode => {
                debug!(kind = %R::KIND, ?mode, "submit without an open form ignored");
                return Outcome::none();
            }
        };

        let form = match R::Form::from_values(page.draft()) {
            Ok(form) => form,
            Err(errors) => {
                debug!(kind = %R::KIND, count = errors.len(), "form rejected");
                page.set_errors(errors);
                return Outcome::none();
            }
        };

        let saved = match target {
            None => store.create(form).map(|record| {
                (
                    record.clone(),
                    NotificationMessage::Created(R::KIND),
                    ActivityAction::Created,
                )
            }),
            Some(id) => store.update(id, form).map(|record| {
                (
                    record.clone(),
                    NotificationMessage::Updated(R::KIND),
                    ActivityAction::Updated,
                )
            }),
        };

        match saved {
            Ok((record, message, action)) => {
                page.cancel();
                Outcome::changed(message, &record, action)
            }
            Err(Error::Validation { errors }) => {
                page.set_errors(errors);
                Outcome::none()
            }
            Err(e) => {
                error!(kind = %R::KIND, error = %e, "save failed");
                Outcome::notify(NotificationMessage::SaveFailed(R::KIND))
            }
        }
    }

    /// Remove the record awaiting confirmation
    pub fn confirm_delete(&self, page: &mut PageState<R>, store: &mut EntityStore<R>) -> Outcome {
        let PageMode::ConfirmDelete(id) = page.mode() else {
            return Outcome::none();
        };
        page.cancel();
        match store.delete(id) {
            Some(record) => Outcome::changed(
                NotificationMessage::Deleted(R::KIND),
                &record,
                ActivityAction::Deleted,
            ),
            None => Outcome::none(),
        }
    }

    /// React to the status selector inside a table row
    pub fn change_status(
        &self,
        store: &mut EntityStore<R>,
        id: RecordId,
        status: Status,
    ) -> Outcome {
        let Some(from) = store.get(id).and_then(Record::status) else {
            warn!(kind = %R::KIND, id = %id, "status change for unknown record");
            return Outcome::notify(NotificationMessage::SaveFailed(R::KIND));
        };
        if from == status {
            return Outcome::none();
        }

        match self.policy {
            InlineStatusPolicy::NotifyOnly => {
                Outcome::notify(NotificationMessage::StatusChanged { from, to: status })
            }
            InlineStatusPolicy::Persist => match store.set_status(id, status) {
                Ok(_) => match store.get(id) {
                    Some(record) => Outcome::changed(
                        NotificationMessage::StatusUpdated,
                        record,
                        ActivityAction::StatusChanged,
                    ),
                    None => Outcome::notify(NotificationMessage::StatusUpdated),
                },
                Err(e) => {
                    error!(kind = %R::KIND, id = %id, error = %e, "status update failed");
                    Outcome::notify(NotificationMessage::SaveFailed(R::KIND))
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::config::InlineStatusConfig;
    use crate::domain::module::Module;
    use crate::domain::package::Package;
    use crate::domain::plan::Plan;
    use crate::domain::product::Product;
    use crate::domain::record::EntityKind;
    use crate::store::fixtures;

    fn controller<R: Record>() -> CrudController<R> {
        CrudController::new(InlineStatusConfig::default().policy_for(R::KIND))
    }

    fn fill_gold(page: &mut PageState<Plan>) {
        page.set_field("name", "Gold");
        page.set_field("discount_rate", "20");
        page.set_field("start_date", "2024-01-01");
        page.set_field("end_date", "2024-12-31");
        page.set_field("plan_type", "SUBSCRIPTION");
        page.set_field("plan_status", "ACTIVE");
    }

    #[test]
    fn test_create_gold_plan() {
        let controller = controller::<Plan>();
        let mut store = EntityStore::with_records(fixtures::plans());
        let mut page = PageState::default();

        controller.open_create(&mut page);
        fill_gold(&mut page);
        let outcome = controller.submit(&mut page, &mut store);

        let plans = store.to_vec();
        assert_eq!(plans.len(), 3);
        assert_eq!(&plans[..2], &fixtures::plans()[..]);
        assert_eq!(plans[2].name, "Gold");
        assert_eq!(plans[2].discount_rate, 20.0);
        assert!(plans[2].plan_id != RecordId(1) && plans[2].plan_id != RecordId(2));

        assert_eq!(page.mode(), PageMode::Idle);
        assert_eq!(outcome.notification, Some(NotificationMessage::Created(EntityKind::Plan)));
        let activity = outcome.activity.expect("activity recorded");
        assert_eq!(activity.name, "Gold");
        assert_eq!(activity.action, ActivityAction::Created);
    }

    #[test]
    fn test_missing_required_field_does_not_mutate() {
        let controller = controller::<Plan>();
        let mut store = EntityStore::with_records(fixtures::plans());
        let before = store.to_vec();
        let mut page = PageState::default();

        controller.open_create(&mut page);
        fill_gold(&mut page);
        page.set_field("name", "");
        let outcome = controller.submit(&mut page, &mut store);

        assert_eq!(store.to_vec(), before);
        assert_eq!(page.mode(), PageMode::Creating, "form stays open");
        assert_eq!(
            page.errors().for_field("name").map(|e| e.message_key),
            Some("form.plan.name_required")
        );
        assert!(outcome.notification.is_none());
    }

    #[test]
    fn test_edit_replaces_only_target() {
        let controller = controller::<Plan>();
        let mut store = EntityStore::with_records(fixtures::plans());
        let mut page = PageState::default();

        controller
            .open_edit(&mut page, &store, RecordId(2))
            .expect("open edit");
        page.set_field("discount_rate", "18");
        let outcome = controller.submit(&mut page, &mut store);

        let plans = store.to_vec();
        assert_eq!(plans[0], fixtures::plans()[0]);
        assert_eq!(plans[1].plan_id, RecordId(2));
        assert_eq!(plans[1].discount_rate, 18.0);
        assert_eq!(plans[1].name, "Premium");
        assert_eq!(outcome.notification, Some(NotificationMessage::Updated(EntityKind::Plan)));
    }

    #[test]
    fn test_edit_of_vanished_record_reports_failure() {
        let controller = controller::<Plan>();
        let mut store = EntityStore::with_records(fixtures::plans());
        let mut page = PageState::default();

        controller
            .open_edit(&mut page, &store, RecordId(1))
            .expect("open edit");
        store.delete(RecordId(1));
        let outcome = controller.submit(&mut page, &mut store);

        assert_eq!(outcome.notification, Some(NotificationMessage::SaveFailed(EntityKind::Plan)));
        assert_eq!(store.len(), 1);
        assert!(controller.open_edit(&mut page, &store, RecordId(1)).is_err());
    }

    #[test]
    fn test_delete_flow() {
        let controller = controller::<Product>();
        let mut store = EntityStore::with_records(fixtures::products());
        let mut page = PageState::default();

        controller.request_delete(&mut page, RecordId(1));
        controller.cancel(&mut page);
        assert_eq!(controller.confirm_delete(&mut page, &mut store).notification, None);
        assert_eq!(store.len(), 1, "cancel keeps the record");

        controller.request_delete(&mut page, RecordId(1));
        let outcome = controller.confirm_delete(&mut page, &mut store);
        assert!(store.is_empty());
        assert_eq!(outcome.notification, Some(NotificationMessage::Deleted(EntityKind::Product)));

        controller.request_delete(&mut page, RecordId(1));
        let outcome = controller.confirm_delete(&mut page, &mut store);
        assert!(outcome.notification.is_none(), "missing id is a no-op");
        assert_eq!(page.mode(), PageMode::Idle);
    }

    #[test]
    fn test_package_status_change_persists() {
        let controller = controller::<Package>();
        let mut store = EntityStore::with_records(fixtures::packages());

        let outcome = controller.change_status(&mut store, RecordId(1), Status::Inactive);

        assert_eq!(store.get(RecordId(1)).map(|p| p.package_status), Some(Status::Inactive));
        assert_eq!(outcome.notification, Some(NotificationMessage::StatusUpdated));
        assert!(outcome.activity.is_some());
    }

    #[test]
    fn test_other_status_changes_only_notify() {
        let plans = controller::<Plan>();
        let mut plan_store = EntityStore::with_records(fixtures::plans());
        let outcome = plans.change_status(&mut plan_store, RecordId(1), Status::Deprecated);
        assert_eq!(plan_store.to_vec(), fixtures::plans());
        assert_eq!(
            outcome.notification,
            Some(NotificationMessage::StatusChanged {
                from: Status::Active,
                to: Status::Deprecated
            })
        );
        assert!(outcome.activity.is_none());

        let modules = controller::<Module>();
        let mut module_store = EntityStore::with_records(fixtures::modules());
        modules.change_status(&mut module_store, RecordId(2), Status::Inactive);
        assert_eq!(module_store.to_vec(), fixtures::modules());

        let products = controller::<Product>();
        let mut product_store = EntityStore::with_records(fixtures::products());
        products.change_status(&mut product_store, RecordId(1), Status::Inactive);
        assert_eq!(product_store.to_vec(), fixtures::products());
    }

    #[test]
    fn test_policy_override_persists_plans() {
        let controller = CrudController::<Plan>::new(InlineStatusPolicy::Persist);
        let mut store = EntityStore::with_records(fixtures::plans());

        controller.change_status(&mut store, RecordId(2), Status::Inactive);

        assert_eq!(store.get(RecordId(2)).map(|p| p.plan_status), Some(Status::Inactive));
    }

    #[test]
    fn test_unchanged_status_is_silent() {
        let controller = controller::<Package>();
        let mut store = EntityStore::with_records(fixtures::packages());
        let outcome = controller.change_status(&mut store, RecordId(1), Status::Active);
        assert!(outcome.notification.is_none());
    }
}
