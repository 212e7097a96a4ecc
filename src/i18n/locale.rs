//! Product locales and locale resolution.

/// A supported product locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocaleInfo {
    /// BCP 47 language code (e.g., "en", "zh").
    pub code: &'static str,
    /// Native display name shown in the language picker.
    pub native_name: &'static str,
}

/// All product locales, in display order.
pub const LOCALES: &[LocaleInfo] = &[
    LocaleInfo {
        code: "en",
        native_name: "English",
    },
    LocaleInfo {
        code: "zh",
        native_name: "简体中文",
    },
    LocaleInfo {
        code: "es",
        native_name: "Español",
    },
    LocaleInfo {
        code: "pt",
        native_name: "Português",
    },
    LocaleInfo {
        code: "id",
        native_name: "Bahasa Indonesia",
    },
    LocaleInfo {
        code: "fr",
        native_name: "Français",
    },
    LocaleInfo {
        code: "ja",
        native_name: "日本語",
    },
    LocaleInfo {
        code: "ru",
        native_name: "Русский",
    },
    LocaleInfo {
        code: "de",
        native_name: "Deutsch",
    },
];

/// Default locale when nothing else is requested or resolvable.
pub const DEFAULT_LOCALE: &str = "en";

/// Whether a language code is one of the product locales.
pub fn is_supported(code: &str) -> bool {
    LOCALES.iter().any(|l| l.code == code)
}

/// Resolve the effective locale from an optional request.
///
/// A request like "pt-BR" or "pt_BR.UTF-8" resolves to its base language
/// when that language is a product locale. Unsupported or absent requests
/// fall back to [`DEFAULT_LOCALE`].
pub fn resolve_locale(requested: Option<&str>) -> &'static str {
    let Some(requested) = requested else {
        return DEFAULT_LOCALE;
    };

    let base = requested
        .split(['-', '_', '.'])
        .next()
        .unwrap_or(requested)
        .to_ascii_lowercase();

    LOCALES
        .iter()
        .find(|l| l.code == base)
        .map(|l| l.code)
        .unwrap_or(DEFAULT_LOCALE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_locale_is_supported() {
        assert!(is_supported(DEFAULT_LOCALE));
    }

    #[test]
    fn all_product_locales_resolve_to_themselves() {
        for locale in LOCALES {
            assert_eq!(resolve_locale(Some(locale.code)), locale.code);
        }
    }

    #[test]
    fn regional_variant_resolves_to_base_language() {
        assert_eq!(resolve_locale(Some("pt-BR")), "pt");
        assert_eq!(resolve_locale(Some("zh_CN.UTF-8")), "zh");
        assert_eq!(resolve_locale(Some("de_DE")), "de");
    }

    #[test]
    fn unsupported_request_falls_back_to_default() {
        assert_eq!(resolve_locale(Some("tlh")), DEFAULT_LOCALE);
        assert_eq!(resolve_locale(Some("")), DEFAULT_LOCALE);
    }

    #[test]
    fn absent_request_falls_back_to_default() {
        assert_eq!(resolve_locale(None), DEFAULT_LOCALE);
    }

    #[test]
    fn resolution_is_case_insensitive() {
        assert_eq!(resolve_locale(Some("JA")), "ja");
    }
}
