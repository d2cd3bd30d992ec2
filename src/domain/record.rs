//! Record - Shared Identity and Form Traits for Catalog Entities

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::form::{FieldSpec, FormReader, FormValues, ValidationErrors};
use super::status::Status;
use crate::error::Error;

/// Store-assigned record identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(pub u64);

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RecordId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(RecordId)
            .map_err(|e| Error::Invalid {
                message: format!("invalid record id {s:?}: {e}"),
            })
    }
}

/// The five catalog entity types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntityKind {
    Plan,
    Product,
    Package,
    Module,
    TenantPlan,
}

impl EntityKind {
    /// Translation key for the singular entity name
    pub fn label_key(&self) -> &'static str {
        match self {
            EntityKind::Plan => "entity.plan",
            EntityKind::Product => "entity.product",
            EntityKind::Package => "entity.package",
            EntityKind::Module => "entity.module",
            EntityKind::TenantPlan => "entity.tenant_plan",
        }
    }

    pub fn all() -> &'static [EntityKind] {
        &[
            EntityKind::Plan,
            EntityKind::Product,
            EntityKind::Package,
            EntityKind::Module,
            EntityKind::TenantPlan,
        ]
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            EntityKind::Plan => "Plan",
            EntityKind::Product => "Product",
            EntityKind::Package => "Package",
            EntityKind::Module => "Module",
            EntityKind::TenantPlan => "Tenant Plan",
        })
    }
}

/// A record held by an entity store
pub trait Record: Clone + fmt::Debug + PartialEq + 'static {
    /// Typed, validated form that creates or overwrites this record
    type Form: FormData<Record = Self>;

    const KIND: EntityKind;

    fn id(&self) -> RecordId;

    /// Name shown in joins, notifications and the activity feed
    fn display_name(&self) -> &str;

    fn status(&self) -> Option<Status> {
        None
    }

    /// Returns `false` when the record type has no status field
    fn set_status(&mut self, _status: Status) -> bool {
        false
    }

    /// Snapshot of the editable fields, used to prefill the edit modal
    fn to_form(&self) -> Self::Form;
}

/// Typed payload of a create or edit submission
pub trait FormData: Sized + Clone + fmt::Debug + PartialEq {
    type Record: Record<Form = Self>;

    /// Field layout of the modal, in display order
    fn fields() -> &'static [FieldSpec];

    /// Pull every field out of the draft; failures are collected by the reader
    fn read(reader: &mut FormReader<'_>) -> Self;

    /// Constraints beyond presence: numeric bounds, period order
    fn validate(&self) -> Result<(), ValidationErrors>;

    fn to_values(&self) -> FormValues;

    fn into_record(self, id: RecordId) -> Self::Record;

    /// Parse and validate a draft in one go
    fn from_values(values: &FormValues) -> Result<Self, ValidationErrors> {
        let mut reader = FormReader::new(values);
        let form = Self::read(&mut reader);
        let form = reader.finish(form)?;
        form.validate()?;
        Ok(form)
    }
}
