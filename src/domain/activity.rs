//! Activity - Recent Catalog Changes Shown on the Dashboard

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use super::record::EntityKind;
use super::status::Status;

/// What happened to the record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActivityAction {
    #[default]
    Created,
    Updated,
    Deleted,
    StatusChanged,
}

impl ActivityAction {
    pub fn label_key(&self) -> &'static str {
        match self {
            ActivityAction::Created => "activity.created",
            ActivityAction::Updated => "activity.updated",
            ActivityAction::Deleted => "activity.deleted",
            ActivityAction::StatusChanged => "activity.status_changed",
        }
    }
}

/// One row of the recent activity table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentActivity {
    pub key: String,
    #[serde(rename = "type")]
    pub kind: EntityKind,
    pub name: String,
    /// Absent for records without a status (tenant plans)
    pub status: Option<Status>,
    #[serde(default)]
    pub action: ActivityAction,
    pub updated_at: NaiveDate,
}

impl RecentActivity {
    /// Record an activity that happened today
    pub fn now(
        kind: EntityKind,
        name: impl Into<String>,
        status: Option<Status>,
        action: ActivityAction,
    ) -> Self {
        Self {
            key: uuid::Uuid::now_v7().to_string(),
            kind,
            name: name.into(),
            status,
            action,
            updated_at: Local::now().date_naive(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activity_keys_are_unique() {
        let active = Some(Status::Active);
        let first = RecentActivity::now(EntityKind::Plan, "Gold", active, ActivityAction::Created);
        let second = RecentActivity::now(EntityKind::Plan, "Gold", active, ActivityAction::Created);

        assert_ne!(first.key, second.key);
        assert_eq!(first.updated_at, Local::now().date_naive());
    }
}
