//! NotificationState - Transient Toasts with a Bounded Queue

use chrono::{DateTime, Local};

use crate::domain::record::EntityKind;
use crate::domain::status::Status;
use crate::i18n::{t, t_entity, t_status_change, Locale};
use crate::utils::bounded::BoundedDeque;

/// Notification severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// Message of a notification, localized when rendered
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationMessage {
    Created(EntityKind),
    Updated(EntityKind),
    Deleted(EntityKind),
    SaveFailed(EntityKind),
    /// Inline status persisted to the store
    StatusUpdated,
    /// Inline status announced but not stored
    StatusChanged { from: Status, to: Status },
    SettingsSaveFailed,
}

impl NotificationMessage {
    pub fn level(&self) -> NotificationLevel {
        match self {
            NotificationMessage::SaveFailed(_) | NotificationMessage::SettingsSaveFailed => {
                NotificationLevel::Error
            }
            NotificationMessage::StatusChanged { .. } => NotificationLevel::Info,
            _ => NotificationLevel::Success,
        }
    }

    pub fn localize(&self, locale: Locale) -> String {
        match self {
            NotificationMessage::Created(kind) => {
                t_entity(locale, "notify.created", kind.label_key())
            }
            NotificationMessage::Updated(kind) => {
                t_entity(locale, "notify.updated", kind.label_key())
            }
            NotificationMessage::Deleted(kind) => {
                t_entity(locale, "notify.deleted", kind.label_key())
            }
            NotificationMessage::SaveFailed(kind) => {
                t_entity(locale, "notify.save_failed", kind.label_key())
            }
            NotificationMessage::StatusUpdated => t(locale, "notify.status_updated"),
            NotificationMessage::StatusChanged { from, to } => t_status_change(
                locale,
                &t(locale, from.label_key()),
                &t(locale, to.label_key()),
            ),
            NotificationMessage::SettingsSaveFailed => t(locale, "notify.settings_save_failed"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub id: u64,
    pub level: NotificationLevel,
    pub message: NotificationMessage,
    pub created_at: DateTime<Local>,
}

/// Visible toasts, oldest evicted first
#[derive(Debug)]
pub struct NotificationState {
    entries: BoundedDeque<Notification>,
    next_id: u64,
}

impl NotificationState {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: BoundedDeque::new(capacity),
            next_id: 1,
        }
    }

    /// Queue a notification, returning its id for later dismissal
    pub fn push(&mut self, message: NotificationMessage) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(Notification {
            id,
            level: message.level(),
            message,
            created_at: Local::now(),
        });
        id
    }

    pub fn dismiss(&mut self, id: u64) -> bool {
        self.entries.remove_where(|n| n.id == id).is_some()
    }

    /// Newest first, at most `limit`
    pub fn latest(&self, limit: usize) -> impl Iterator<Item = &Notification> {
        self.entries.iter_newest().take(limit)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for NotificationState {
    fn default() -> Self {
        Self::new(50)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacity_evicts_oldest() {
        let mut state = NotificationState::new(2);
        let first = state.push(NotificationMessage::Created(EntityKind::Plan));
        state.push(NotificationMessage::Updated(EntityKind::Plan));
        state.push(NotificationMessage::Deleted(EntityKind::Plan));

        assert_eq!(state.len(), 2);
        assert!(!state.dismiss(first));
        let newest: Vec<_> = state.latest(1).map(|n| n.message.clone()).collect();
        assert_eq!(newest, vec![NotificationMessage::Deleted(EntityKind::Plan)]);
    }

    #[test]
    fn test_dismiss_by_id() {
        let mut state = NotificationState::default();
        let id = state.push(NotificationMessage::StatusUpdated);
        assert!(state.dismiss(id));
        assert!(state.is_empty());
    }

    #[test]
    fn test_levels_and_messages() {
        let failed = NotificationMessage::SaveFailed(EntityKind::Package);
        assert_eq!(failed.level(), NotificationLevel::Error);
        assert_eq!(failed.localize(Locale::En), "Error saving Package");

        let changed = NotificationMessage::StatusChanged {
            from: Status::Active,
            to: Status::Deprecated,
        };
        assert_eq!(changed.level(), NotificationLevel::Info);
        assert_eq!(
            changed.localize(Locale::En),
            "Status changed from Active to Deprecated"
        );
        assert_eq!(
            NotificationMessage::Created(EntityKind::Plan).localize(Locale::En),
            "Plan created successfully"
        );
    }
}
