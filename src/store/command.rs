//! StoreCommand - Mutations Applied to an Entity Store

use crate::domain::record::{Record, RecordId};
use crate::domain::status::Status;

/// One mutation of an entity store
#[derive(Debug, Clone, PartialEq)]
pub enum StoreCommand<R: Record> {
    /// Append a record under a freshly allocated id
    Create(R::Form),
    /// Overwrite the fields of an existing record in place
    Update { id: RecordId, form: R::Form },
    /// Remove a record; a missing id is a no-op
    Delete(RecordId),
    /// Change only the status of a record
    SetStatus { id: RecordId, status: Status },
    /// Swap the whole sequence
    ReplaceAll(Vec<R>),
}

/// What a successfully applied command did
#[derive(Debug, Clone, PartialEq)]
pub enum CommandOutcome<R: Record> {
    Created(R),
    Updated(R),
    /// `None` when the id was not present
    Deleted(Option<R>),
    StatusChanged {
        record: R,
        previous: Status,
    },
    Replaced(usize),
}

impl<R: Record> CommandOutcome<R> {
    /// Whether the store contents changed
    pub fn changed(&self) -> bool {
        match self {
            CommandOutcome::Deleted(removed) => removed.is_some(),
            CommandOutcome::StatusChanged { record, previous } => {
                record.status() != Some(*previous)
            }
            _ => true,
        }
    }
}
