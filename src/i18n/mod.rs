//! i18n - Internationalization Module
//!
//! Translations live in `locales/*.yml` and are compiled in by `rust-i18n`.

/// Supported locales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    /// English
    #[default]
    En,
    /// Chinese (Simplified)
    ZhCn,
}

impl Locale {
    /// Code used by the translation files and the settings file
    pub fn code(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::ZhCn => "zh-CN",
        }
    }

    /// Name shown on the language switcher
    pub fn display_name(&self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::ZhCn => "中文",
        }
    }

    pub fn toggle(&self) -> Locale {
        match self {
            Locale::En => Locale::ZhCn,
            Locale::ZhCn => Locale::En,
        }
    }

    /// Match a locale code loosely (`zh`, `zh_CN`, `zh-Hans-CN` all map to Chinese)
    pub fn from_code(code: &str) -> Option<Locale> {
        let lang = code
            .split(['-', '_', '.'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match lang.as_str() {
            "en" => Some(Locale::En),
            "zh" => Some(Locale::ZhCn),
            _ => None,
        }
    }

    /// Configured code first, then the system locale, then English
    pub fn resolve(configured: Option<&str>) -> Locale {
        configured
            .and_then(Locale::from_code)
            .or_else(Locale::system)
            .unwrap_or_default()
    }

    fn system() -> Option<Locale> {
        Locale::from_code(&locale_config::Locale::current().to_string())
    }
}

/// Translate a key
pub fn t(locale: Locale, key: &str) -> String {
    rust_i18n::t!(key, locale = locale.code()).into_owned()
}

/// Translate a key naming an entity, e.g. `notify.created` with `Plan`
pub fn t_entity(locale: Locale, key: &str, entity_key: &str) -> String {
    let entity = t(locale, entity_key);
    rust_i18n::t!(key, locale = locale.code(), entity = entity).into_owned()
}

/// Translate a key taking a `count` argument
pub fn t_count(locale: Locale, key: &str, count: usize) -> String {
    rust_i18n::t!(key, locale = locale.code(), count = count).into_owned()
}

/// Translate the status-change message
pub fn t_status_change(locale: Locale, from: &str, to: &str) -> String {
    rust_i18n::t!("notify.status_changed", locale = locale.code(), from = from, to = to)
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_codes() {
        assert_eq!(Locale::from_code("zh_CN.UTF-8"), Some(Locale::ZhCn));
        assert_eq!(Locale::from_code("en-US"), Some(Locale::En));
        assert_eq!(Locale::from_code("fr-FR"), None);
        assert_eq!(Locale::resolve(Some("zh-CN")), Locale::ZhCn);
        assert_eq!(Locale::En.toggle(), Locale::ZhCn);
    }

    #[test]
    fn test_translations_with_arguments() {
        assert_eq!(t(Locale::En, "nav.plans"), "Plans");
        assert_eq!(
            t_entity(Locale::En, "notify.created", "entity.plan"),
            "Plan created successfully"
        );
        assert_eq!(
            t_status_change(Locale::En, "Active", "Inactive"),
            "Status changed from Active to Inactive"
        );
        assert_eq!(t_count(Locale::En, "table.total", 3), "3 records");
    }

    #[test]
    fn test_chinese_labels() {
        assert_eq!(t(Locale::ZhCn, "nav.plans"), "计划");
        assert_eq!(t(Locale::ZhCn, "entity.tenant_plan"), "租户计划");
    }
}
