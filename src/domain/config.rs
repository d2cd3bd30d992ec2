//! Config - Console Preferences
//!
//! Persisted as TOML; every section falls back to its defaults when absent.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::record::EntityKind;

/// Main console configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct AdminConfig {
    /// Locale code (`en`, `zh-CN`); detected from the system when unset
    pub locale: Option<String>,
    pub window: WindowConfig,
    pub notifications: NotificationConfig,
    pub inline_status: InlineStatusConfig,
    pub log: LogConfig,
}

/// Initial window size
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 820.0,
        }
    }
}

/// Toast queue settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct NotificationConfig {
    /// Oldest notifications are evicted past this many
    pub capacity: usize,
    /// How long a toast stays visible
    pub ttl_ms: u64,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            capacity: 50,
            ttl_ms: 3000,
        }
    }
}

impl NotificationConfig {
    pub fn ttl(&self) -> Duration {
        Duration::from_millis(self.ttl_ms)
    }
}

/// What the status selector inside a table row does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InlineStatusPolicy {
    /// Write the new status to the store
    Persist,
    /// Only announce the change; the record keeps its status
    NotifyOnly,
}

/// Which entity kinds persist inline status changes
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct InlineStatusConfig {
    pub persist: Vec<EntityKind>,
}

impl Default for InlineStatusConfig {
    fn default() -> Self {
        Self {
            persist: vec![EntityKind::Package],
        }
    }
}

impl InlineStatusConfig {
    pub fn policy_for(&self, kind: EntityKind) -> InlineStatusPolicy {
        if self.persist.contains(&kind) {
            InlineStatusPolicy::Persist
        } else {
            InlineStatusPolicy::NotifyOnly
        }
    }
}

/// Logging settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LogConfig {
    /// Default filter directive; `RUST_LOG` takes precedence
    pub level: String,
    /// Also write a daily rolling log file
    pub file: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy_persists_packages_only() {
        let config = InlineStatusConfig::default();
        assert_eq!(config.policy_for(EntityKind::Package), InlineStatusPolicy::Persist);
        assert_eq!(config.policy_for(EntityKind::Plan), InlineStatusPolicy::NotifyOnly);
        assert_eq!(config.policy_for(EntityKind::Product), InlineStatusPolicy::NotifyOnly);
        assert_eq!(config.policy_for(EntityKind::Module), InlineStatusPolicy::NotifyOnly);
    }

    #[test]
    fn test_partial_toml_falls_back_to_defaults() {
        let config: AdminConfig = toml::from_str(
            r#"
locale = "zh-CN"

[inline_status]
persist = ["PLAN", "PACKAGE"]
"#,
        )
        .expect("parse");

        assert_eq!(config.locale.as_deref(), Some("zh-CN"));
        assert_eq!(config.notifications, NotificationConfig::default());
        assert_eq!(
            config.inline_status.policy_for(EntityKind::Plan),
            InlineStatusPolicy::Persist
        );
        assert_eq!(config.notifications.ttl(), Duration::from_millis(3000));
    }
}
