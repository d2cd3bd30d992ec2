//! ConfigStore - Local Settings Storage
//!
//! Preferences live in `pricing-admin.toml` under the platform config
//! directory; logs go to the platform data directory.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use tracing::{info, warn};

use crate::domain::config::AdminConfig;
use crate::error::{Error, Result};

pub const CONFIG_FILE: &str = "pricing-admin.toml";

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("com", "pricing", "pricing-admin").ok_or_else(|| Error::Invalid {
        message: "Could not determine project directories".to_string(),
    })
}

fn ensure_dir(dir: &Path) -> Result<PathBuf> {
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(dir.to_path_buf())
}

/// Get or create the configuration directory
///
/// - **Linux**: `~/.config/pricing-admin/`
/// - **macOS**: `~/Library/Application Support/com.pricing.pricing-admin/`
/// - **Windows**: `C:\Users\<User>\AppData\Roaming\pricing\pricing-admin\config\`
pub fn config_dir() -> Result<PathBuf> {
    ensure_dir(project_dirs()?.config_dir())
}

/// Get or create the log directory
pub fn log_dir() -> Result<PathBuf> {
    ensure_dir(&project_dirs()?.data_local_dir().join("logs"))
}

pub fn config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE))
}

/// Read settings from a file; a missing file yields defaults
pub fn load_from(path: &Path) -> Result<AdminConfig> {
    if !path.exists() {
        return Ok(AdminConfig::default());
    }
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Write settings to a file, creating its directory when needed
pub fn save_to(path: &Path, config: &AdminConfig) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    info!(path = ?path, "settings saved");
    Ok(())
}

/// Settings resolved at startup
///
/// Loading happens before the subscriber is installed, so the outcome is
/// kept here and reported through [`LoadedSettings::log`] afterwards.
#[derive(Debug)]
pub struct LoadedSettings {
    pub config: AdminConfig,
    pub path: Option<PathBuf>,
    /// Why defaults were used instead of the file
    pub fallback: Option<Error>,
}

impl LoadedSettings {
    /// Load from `path`, substituting defaults when the file is unreadable
    pub fn from_path(path: PathBuf) -> Self {
        match load_from(&path) {
            Ok(config) => Self {
                config,
                path: Some(path),
                fallback: None,
            },
            Err(e) => Self {
                config: AdminConfig::default(),
                path: Some(path),
                fallback: Some(e),
            },
        }
    }

    pub fn log(&self) {
        match (&self.path, &self.fallback) {
            (Some(path), Some(e)) => {
                warn!(path = ?path, error = %e, "settings unreadable, using defaults")
            }
            (None, Some(e)) => warn!(error = %e, "settings directory unavailable, using defaults"),
            (Some(path), None) if path.exists() => info!(path = ?path, "settings loaded"),
            (Some(path), None) => info!(path = ?path, "no settings file, using defaults"),
            (None, None) => info!("using default settings"),
        }
    }
}

/// Load settings from the platform location, falling back to defaults on any error
pub fn load_or_default() -> LoadedSettings {
    match config_path() {
        Ok(path) => LoadedSettings::from_path(path),
        Err(e) => LoadedSettings {
            config: AdminConfig::default(),
            path: None,
            fallback: Some(e),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::record::EntityKind;

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("pricing-admin-test-{}-{name}", std::process::id()))
            .join(CONFIG_FILE)
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let path = scratch_path("missing");
        let config = load_from(&path).expect("defaults");
        assert_eq!(config, AdminConfig::default());
    }

    #[test]
    fn test_round_trip_through_toml() {
        let path = scratch_path("round-trip");
        let mut config = AdminConfig::default();
        config.locale = Some("zh-CN".to_string());
        config.notifications.capacity = 5;
        config.inline_status.persist = vec![EntityKind::Package, EntityKind::Module];

        save_to(&path, &config).expect("save");
        let loaded = load_from(&path).expect("load");
        assert_eq!(loaded, config);

        if let Some(dir) = path.parent() {
            let _ = fs::remove_dir_all(dir);
        }
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let path = scratch_path("malformed");
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).expect("mkdir");
        }
        fs::write(&path, "locale = [").expect("write");

        assert!(matches!(load_from(&path), Err(Error::TomlDe { .. })));

        if let Some(dir) = path.parent() {
            let _ = fs::remove_dir_all(dir);
        }
    }

    #[test]
    fn test_unreadable_settings_keep_the_reason() {
        let path = scratch_path("fallback");
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).expect("mkdir");
        }
        fs::write(&path, "[notifications]\ncapacity = \"many\"").expect("write");

        let loaded = LoadedSettings::from_path(path.clone());
        assert_eq!(loaded.config, AdminConfig::default());
        assert_eq!(loaded.path.as_deref(), Some(path.as_path()));
        assert!(matches!(loaded.fallback, Some(Error::TomlDe { .. })));

        if let Some(dir) = path.parent() {
            let _ = fs::remove_dir_all(dir);
        }
    }

    #[test]
    fn test_missing_settings_are_not_a_fallback() {
        let loaded = LoadedSettings::from_path(scratch_path("absent"));
        assert_eq!(loaded.config, AdminConfig::default());
        assert!(loaded.fallback.is_none());
    }
}
