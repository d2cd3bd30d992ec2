//! ConfigState - Loaded Preferences and Where to Save Them

use std::path::PathBuf;

use crate::domain::config::{AdminConfig, InlineStatusPolicy};
use crate::domain::record::EntityKind;
use crate::error::{Error, Result};
use crate::i18n::Locale;
use crate::utils::config_store;

#[derive(Debug, Clone, Default)]
pub struct ConfigState {
    /// Current configuration
    pub config: AdminConfig,
    /// Settings file; `None` when the platform directory is unavailable
    pub path: Option<PathBuf>,
}

impl ConfigState {
    pub fn new(config: AdminConfig, path: Option<PathBuf>) -> Self {
        Self { config, path }
    }

    pub fn inline_status_policy(&self, kind: EntityKind) -> InlineStatusPolicy {
        self.config.inline_status.policy_for(kind)
    }

    /// Remember the chosen locale and write the settings file
    pub fn set_locale(&mut self, locale: Locale) -> Result<()> {
        self.config.locale = Some(locale.code().to_string());
        self.save()
    }

    pub fn save(&self) -> Result<()> {
        let Some(path) = &self.path else {
            return Err(Error::Invalid {
                message: "no settings location".to_string(),
            });
        };
        config_store::save_to(path, &self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_locale_persists() {
        let path = std::env::temp_dir()
            .join(format!("pricing-admin-state-{}", std::process::id()))
            .join(config_store::CONFIG_FILE);
        let mut state = ConfigState::new(AdminConfig::default(), Some(path.clone()));

        state.set_locale(Locale::ZhCn).expect("save");

        let loaded = config_store::load_from(&path).expect("load");
        assert_eq!(loaded.locale.as_deref(), Some("zh-CN"));
        if let Some(dir) = path.parent() {
            let _ = std::fs::remove_dir_all(dir);
        }
    }

    #[test]
    fn test_save_without_location_fails() {
        let state = ConfigState::default();
        assert!(matches!(state.save(), Err(Error::Invalid { .. })));
    }
}
