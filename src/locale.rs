//! Locale resolution for date patterns and user-facing strings.
//!
//! Translations live in `locales/*.json` and are looked up with
//! `rust_i18n::t!()`. Requested tags are matched exactly, then by language,
//! then fall back to English.

pub const FALLBACK_LOCALE: &str = "en";

/// Strips POSIX decorations (`en_US.UTF-8@euro`) and uses `-` as separator.
fn normalize_tag(tag: &str) -> String {
    let base = tag.split(['.', '@']).next().unwrap_or_default();
    base.trim().replace('_', "-")
}

/// Maps a requested tag onto one of the bundled locales.
pub fn resolve_locale(requested: &str) -> String {
    let tag = normalize_tag(requested);
    let available = rust_i18n::available_locales!();

    if let Some(exact) = available.iter().find(|l| l.eq_ignore_ascii_case(&tag)) {
        return exact.to_string();
    }

    let language = tag.split('-').next().unwrap_or_default();
    if let Some(lang) = available.iter().find(|l| l.eq_ignore_ascii_case(language)) {
        return lang.to_string();
    }

    FALLBACK_LOCALE.to_string()
}

/// The operating system's preferred locale, or English.
pub fn system_locale() -> String {
    sys_locale::get_locale().unwrap_or_else(|| FALLBACK_LOCALE.to_string())
}

/// Resolves and installs the locale used by untagged `t!()` calls.
pub fn apply_locale(requested: Option<&str>) -> String {
    let resolved = match requested {
        Some(tag) => resolve_locale(tag),
        None => resolve_locale(&system_locale()),
    };
    rust_i18n::set_locale(&resolved);
    log::debug!("Using locale '{}'", resolved);
    resolved
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_posix_tag() {
        assert_eq!(normalize_tag("en_GB.UTF-8"), "en-GB");
        assert_eq!(normalize_tag("de_DE@euro"), "de-DE");
        assert_eq!(normalize_tag("fr"), "fr");
    }

    #[test]
    fn test_resolution_order() {
        assert_eq!(resolve_locale("en-GB"), "en-GB");
        assert_eq!(resolve_locale("en_gb.UTF-8"), "en-GB");
        assert_eq!(resolve_locale("de-AT"), "de");
        assert_eq!(resolve_locale("en-US"), "en");
        assert_eq!(resolve_locale("xx-YY"), FALLBACK_LOCALE);
        assert_eq!(resolve_locale(""), FALLBACK_LOCALE);
    }
}
