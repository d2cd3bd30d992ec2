//! EntityStore - Ordered In-Memory Records of One Entity Type
//!
//! Records are keyed by id and kept in insertion order. Ids come from a
//! monotonic counter that starts past the largest seeded id and never hands
//! out the same value twice.

use hashlink::LinkedHashMap;
use tracing::{debug, info};

use super::command::{CommandOutcome, StoreCommand};
use crate::domain::record::{FormData, Record, RecordId};
use crate::domain::status::Status;
use crate::error::{Error, Result};

type RecordMap<R> = LinkedHashMap<RecordId, R, ahash::RandomState>;

/// Owned, ordered store of one record type
#[derive(Debug, Clone)]
pub struct EntityStore<R: Record> {
    records: RecordMap<R>,
    /// `None` once the id space is used up
    next_id: Option<u64>,
    /// Bumped on every change so views can cheaply detect staleness
    revision: u64,
}

impl<R: Record> Default for EntityStore<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Record> EntityStore<R> {
    pub fn new() -> Self {
        Self {
            records: LinkedHashMap::with_hasher(ahash::RandomState::new()),
            next_id: Some(1),
            revision: 0,
        }
    }

    /// Seed a store with existing records
    pub fn with_records(records: Vec<R>) -> Self {
        let mut store = Self::new();
        store.load(records);
        store
    }

    /// Current records in display order
    pub fn records(&self) -> impl Iterator<Item = &R> {
        self.records.values()
    }

    pub fn to_vec(&self) -> Vec<R> {
        self.records.values().cloned().collect()
    }

    pub fn get(&self, id: RecordId) -> Option<&R> {
        self.records.get(&id)
    }

    pub fn contains(&self, id: RecordId) -> bool {
        self.records.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Swap the whole sequence at once
    pub fn replace_all(&mut self, records: Vec<R>) {
        self.records.clear();
        self.load(records);
        self.revision += 1;
        info!(kind = %R::KIND, count = self.records.len(), "store replaced");
    }

    fn load(&mut self, records: Vec<R>) {
        for record in records {
            let id = record.id();
            // Duplicate ids collapse onto the first position, last value wins
            if let Some(slot) = self.records.get_mut(&id) {
                *slot = record;
            } else {
                self.records.insert(id, record);
            }
            self.next_id = match (self.next_id, id.0.checked_add(1)) {
                (Some(next), Some(after)) => Some(next.max(after)),
                _ => None,
            };
        }
    }

    fn allocate_id(&mut self) -> Result<RecordId> {
        let id = self.next_id.ok_or_else(|| Error::Invalid {
            message: format!("no {} ids left to allocate", R::KIND),
        })?;
        self.next_id = id.checked_add(1);
        Ok(RecordId(id))
    }

    /// Validate the form and append it under a fresh id
    pub fn create(&mut self, form: R::Form) -> Result<&R> {
        form.validate()?;
        let id = self.allocate_id()?;
        self.records.insert(id, form.into_record(id));
        self.revision += 1;
        info!(kind = %R::KIND, id = %id, "record created");
        self.records.get(&id).ok_or(Error::NotFound { kind: R::KIND, id })
    }

    /// Validate the form and overwrite the record's fields, keeping id and position
    pub fn update(&mut self, id: RecordId, form: R::Form) -> Result<&R> {
        form.validate()?;
        let Some(slot) = self.records.get_mut(&id) else {
            return Err(Error::NotFound { kind: R::KIND, id });
        };
        *slot = form.into_record(id);
        self.revision += 1;
        info!(kind = %R::KIND, id = %id, "record updated");
        Ok(&*slot)
    }

    /// Remove a record; deleting a missing id changes nothing
    pub fn delete(&mut self, id: RecordId) -> Option<R> {
        let removed = self.records.remove(&id);
        if removed.is_some() {
            self.revision += 1;
            info!(kind = %R::KIND, id = %id, "record deleted");
        } else {
            debug!(kind = %R::KIND, id = %id, "delete of missing record ignored");
        }
        removed
    }

    /// Change only the status field, returning the previous status
    pub fn set_status(&mut self, id: RecordId, status: Status) -> Result<Status> {
        let Some(record) = self.records.get_mut(&id) else {
            return Err(Error::NotFound { kind: R::KIND, id });
        };
        let Some(previous) = record.status() else {
            return Err(Error::NoStatus { kind: R::KIND });
        };
        record.set_status(status);
        if previous != status {
            self.revision += 1;
        }
        info!(kind = %R::KIND, id = %id, from = %previous, to = %status, "status updated");
        Ok(previous)
    }

    /// Apply a command, reporting what changed
    pub fn apply(&mut self, command: StoreCommand<R>) -> Result<CommandOutcome<R>> {
        match command {
            StoreCommand::Create(form) => self.create(form).cloned().map(CommandOutcome::Created),
            StoreCommand::Update { id, form } => {
                self.update(id, form).cloned().map(CommandOutcome::Updated)
            }
            StoreCommand::Delete(id) => Ok(CommandOutcome::Deleted(self.delete(id))),
            StoreCommand::SetStatus { id, status } => {
                let previous = self.set_status(id, status)?;
                let record = self
                    .get(id)
                    .cloned()
                    .ok_or(Error::NotFound { kind: R::KIND, id })?;
                Ok(CommandOutcome::StatusChanged { record, previous })
            }
            StoreCommand::ReplaceAll(records) => {
                self.replace_all(records);
                Ok(CommandOutcome::Replaced(self.len()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::domain::plan::{Plan, PlanForm};
    use crate::domain::record::EntityKind;
    use crate::domain::status::OfferingType;
    use crate::store::fixtures;

    fn plan_form(name: &str, rate: f64) -> PlanForm {
        PlanForm {
            name: name.to_string(),
            discount_rate: rate,
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).expect("date"),
            end_date: NaiveDate::from_ymd_opt(2024, 12, 31).expect("date"),
            plan_type: OfferingType::Subscription,
            plan_status: Status::Active,
        }
    }

    fn names(store: &EntityStore<Plan>) -> Vec<String> {
        store.records().map(|p| p.name.clone()).collect()
    }

    #[test]
    fn test_create_appends_with_fresh_id() {
        let mut store = EntityStore::with_records(fixtures::plans());
        let before = store.to_vec();

        let id = store.create(plan_form("Gold", 20.0)).expect("create").plan_id;

        assert_eq!(store.len(), 3);
        assert!(before.iter().all(|p| p.plan_id != id));
        assert_eq!(&store.to_vec()[..2], &before[..]);
        let gold = store.get(id).expect("gold present");
        assert_eq!(gold.name, "Gold");
        assert_eq!(gold.discount_rate, 20.0);
    }

    #[test]
    fn test_ids_are_never_reused() {
        let mut store = EntityStore::with_records(fixtures::plans());
        let first = store.create(plan_form("Gold", 20.0)).expect("create").plan_id;
        store.delete(first);
        let second = store.create(plan_form("Silver", 5.0)).expect("create").plan_id;

        assert_ne!(first, second);
        assert!(second > first);
    }

    #[test]
    fn test_update_replaces_only_matching_record() {
        let mut store = EntityStore::with_records(fixtures::plans());
        let premium_before = store.get(RecordId(2)).cloned().expect("premium");

        store
            .update(RecordId(1), plan_form("Basic+", 12.5))
            .expect("update");

        assert_eq!(names(&store), vec!["Basic+", "Premium"]);
        assert_eq!(store.get(RecordId(1)).map(|p| p.discount_rate), Some(12.5));
        assert_eq!(store.get(RecordId(2)), Some(&premium_before));
    }

    #[test]
    fn test_update_missing_id_is_not_found() {
        let mut store = EntityStore::with_records(fixtures::plans());
        let revision = store.revision();

        let err = store
            .update(RecordId(99), plan_form("Ghost", 1.0))
            .expect_err("missing id");

        assert!(matches!(
            err,
            Error::NotFound { kind: EntityKind::Plan, id } if id == RecordId(99)
        ));
        assert_eq!(store.revision(), revision);
    }

    #[test]
    fn test_delete_missing_id_is_noop() {
        let mut store = EntityStore::with_records(fixtures::plans());
        let before = store.to_vec();
        let revision = store.revision();

        assert!(store.delete(RecordId(42)).is_none());
        assert_eq!(store.to_vec(), before);
        assert_eq!(store.revision(), revision);

        assert!(store.delete(RecordId(1)).is_some());
        assert_eq!(names(&store), vec!["Premium"]);
    }

    #[test]
    fn test_invalid_form_does_not_mutate() {
        let mut store = EntityStore::with_records(fixtures::plans());
        let before = store.to_vec();

        assert!(store.create(plan_form("  ", 10.0)).is_err());
        assert!(store.update(RecordId(1), plan_form("Basic", 150.0)).is_err());
        assert_eq!(store.to_vec(), before);
    }

    #[test]
    fn test_set_status_changes_only_status() {
        let mut store = EntityStore::with_records(fixtures::plans());

        let previous = store
            .set_status(RecordId(2), Status::Deprecated)
            .expect("set status");

        assert_eq!(previous, Status::Active);
        let premium = store.get(RecordId(2)).expect("premium");
        assert_eq!(premium.plan_status, Status::Deprecated);
        assert_eq!(premium.name, "Premium");
    }

    #[test]
    fn test_set_status_without_status_field() {
        let mut store = EntityStore::with_records(fixtures::tenant_plans());
        let err = store
            .set_status(RecordId(1), Status::Inactive)
            .expect_err("tenant plans have no status");
        assert!(matches!(err, Error::NoStatus { .. }));
    }

    #[test]
    fn test_replace_all_keeps_counter_monotonic() {
        let mut store = EntityStore::with_records(fixtures::plans());
        store.create(plan_form("Gold", 20.0)).expect("create");
        store.replace_all(fixtures::plans());

        let id = store.create(plan_form("Silver", 5.0)).expect("create").plan_id;
        assert_eq!(id, RecordId(4));
    }

    #[test]
    fn test_exhausted_id_space_refuses_create() {
        let last = plan_form("Edge", 1.0).into_record(RecordId(u64::MAX));
        let mut store = EntityStore::with_records(fixtures::plans());
        store.replace_all(vec![last]);

        let result = store.create(plan_form("Gold", 20.0));
        assert!(matches!(result, Err(Error::Invalid { .. })));
        assert_eq!(store.len(), 1);
        assert_eq!(names(&store), vec!["Edge".to_string()]);
    }

    #[test]
    fn test_highest_id_is_still_allocated_once() {
        let near = plan_form("Edge", 1.0).into_record(RecordId(u64::MAX - 1));
        let mut store = EntityStore::with_records(vec![near]);

        let id = store.create(plan_form("Gold", 20.0)).expect("create").plan_id;
        assert_eq!(id, RecordId(u64::MAX));
        assert!(store.create(plan_form("Silver", 5.0)).is_err());
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_apply_reports_outcomes() {
        let mut store = EntityStore::with_records(fixtures::plans());

        let outcome = store
            .apply(StoreCommand::Create(plan_form("Gold", 20.0)))
            .expect("create");
        assert!(matches!(outcome, CommandOutcome::Created(ref plan) if plan.name == "Gold"));

        let outcome = store.apply(StoreCommand::Delete(RecordId(77))).expect("delete");
        assert!(!outcome.changed());

        let outcome = store
            .apply(StoreCommand::SetStatus {
                id: RecordId(1),
                status: Status::Inactive,
            })
            .expect("status");
        assert!(outcome.changed());

        let outcome = store
            .apply(StoreCommand::ReplaceAll(Vec::new()))
            .expect("replace");
        assert_eq!(outcome, CommandOutcome::Replaced(0));
        assert!(store.is_empty());
    }
}
