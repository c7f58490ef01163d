//! Registry of supported human languages and their fallbacks.

use std::fmt;

/// How fully a language is supported by the localization pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LanguageType {
    /// Fully translated.
    Standard,
    /// Translated for end users only.
    EndUser,
    /// Supported for data but not translated.
    Platform,
    /// Used for testing; never shown.
    Hidden,
}

use LanguageType::{EndUser, Hidden, Platform, Standard};

static LANGUAGES: &[(&str, LanguageType)] = &[
    ("en_US", Standard),
    ("de", Standard),
    ("es", Standard),
    ("fr", Standard),
    ("it", Standard),
    ("ja", Standard),
    ("sv", Standard),
    ("ko", Standard),
    ("zh_TW", Standard),
    ("zh_CN", Standard),
    ("pt_BR", Standard),
    ("nl_NL", Standard),
    ("da", Standard),
    ("th", Standard),
    ("fi", Standard),
    ("ru", Standard),
    ("es_MX", Standard),
    ("no", Standard),
    ("hu", EndUser),
    ("pl", EndUser),
    ("cs", EndUser),
    ("tr", EndUser),
    ("in", EndUser),
    ("ro", EndUser),
    ("vi", EndUser),
    ("uk", EndUser),
    ("iw", EndUser),
    ("el", EndUser),
    ("bg", EndUser),
    ("en_GB", EndUser),
    ("ar", EndUser),
    ("sk", EndUser),
    ("pt_PT", EndUser),
    ("hr", EndUser),
    ("sl", EndUser),
    ("ka", Platform),
    ("sr", Platform),
    ("sh", Platform),
    ("ro_MD", Platform),
    ("bs", Platform),
    ("mk", Platform),
    ("lv", Platform),
    ("lt", Platform),
    ("et", Platform),
    ("sq", Platform),
    ("sh_ME", Platform),
    ("mt", Platform),
    ("ga", Platform),
    ("eu", Platform),
    ("cy", Platform),
    ("is", Platform),
    ("ms", Platform),
    ("tl", Platform),
    ("lb", Platform),
    ("rm", Platform),
    ("hy", Platform),
    ("hi", Platform),
    ("ur", Platform),
    ("bn", Platform),
    ("ta", Platform),
    ("af", Platform),
    ("sw", Platform),
    ("zu", Platform),
    ("xh", Platform),
    ("te", Platform),
    ("ml", Platform),
    ("kn", Platform),
    ("mr", Platform),
    ("gu", Platform),
    ("pa", Platform),
    ("mi", Platform),
    ("my", Platform),
    ("fa", Platform),
    ("km", Platform),
    ("am", Platform),
    ("kk", Platform),
    ("ht", Platform),
    ("sm", Platform),
    ("haw", Platform),
    ("ca", Platform),
    ("kl", Platform),
    ("ji", Platform),
    ("hmn", Platform),
    ("ar_DZ", Platform),
    ("en_AU", Platform),
    ("en_IN", Platform),
    ("en_PH", Platform),
    ("en_CA", Platform),
    ("en_HK", Platform),
    ("en_IE", Platform),
    ("en_SG", Platform),
    ("en_ZA", Platform),
    ("fr_CA", Platform),
    ("de_AT", Platform),
    ("de_CH", Platform),
    ("fr_CH", Platform),
    ("it_CH", Platform),
    ("es_AR", Platform),
    ("ru_IL", Platform),
    ("zh_SG", Platform),
    ("zh_HK", Platform),
    ("eo", Hidden),
    ("en_IL", Hidden),
];

/// A registered language, identified by its locale string.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Language {
    locale: &'static str,
    kind: LanguageType,
}

impl Language {
    pub const ENGLISH: Language = Language { locale: "en_US", kind: Standard };

    /// Looks up a registered locale such as `en_US`, `iw` or `sh_ME`.
    pub fn from_locale(locale: &str) -> Option<Language> {
        LANGUAGES
            .iter()
            .find(|(code, _)| *code == locale)
            .map(|&(locale, kind)| Language { locale, kind })
    }

    /// Every registered language, in registry order.
    pub fn all() -> impl Iterator<Item = Language> {
        LANGUAGES.iter().map(|&(locale, kind)| Language { locale, kind })
    }

    pub fn locale(&self) -> &'static str {
        self.locale
    }

    /// The ISO language part of the locale (`en` for `en_GB`).
    pub fn language_code(&self) -> &'static str {
        self.locale.split_once('_').map_or(self.locale, |(lang, _)| lang)
    }

    pub fn country(&self) -> Option<&'static str> {
        self.locale.split_once('_').map(|(_, country)| country)
    }

    pub fn language_type(&self) -> LanguageType {
        self.kind
    }

    pub fn is_translated(&self) -> bool {
        matches!(self.kind, Standard | EndUser)
    }

    /// The language whose translations this one borrows, if any.
    pub fn translation_fallback(&self) -> Option<Language> {
        let lang = self.language_code();
        match lang {
            "haw" => return Language::from_locale("en_US"),
            "ht" => return Language::from_locale("fr"),
            _ => {}
        }
        let country = self.country()?;
        let target = match (lang, country) {
            ("zh", "TW" | "CN") => return None,
            ("zh", "HK") => "zh_TW",
            ("zh", _) => "zh_CN",
            ("en", "US") => return None,
            ("en", "GB" | "CA" | "IL") => "en_US",
            ("en", _) => "en_GB",
            ("pt", "BR") => return None,
            ("pt", _) => "pt_BR",
            ("nl", "NL") => return None,
            ("nl", _) => "nl_NL",
            (lang, _) => lang,
        };
        Language::from_locale(target)
    }

    /// The language to use for labels missing in this one.
    pub fn fallback_language(&self) -> Option<Language> {
        if *self == Language::ENGLISH {
            return None;
        }
        if self.language_code() == "ms" {
            return Language::from_locale("in");
        }
        self.translation_fallback().or(Some(Language::ENGLISH))
    }
}

impl fmt::Debug for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Language({})", self.locale)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.locale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lang(locale: &str) -> Language {
        Language::from_locale(locale).unwrap()
    }

    fn fallback(locale: &str) -> Option<&'static str> {
        lang(locale).translation_fallback().map(|l| l.locale())
    }

    #[test]
    fn locale_parts() {
        assert_eq!(lang("sh_ME").language_code(), "sh");
        assert_eq!(lang("sh_ME").country(), Some("ME"));
        assert_eq!(lang("haw").country(), None);
        assert!(Language::from_locale("xx_YY").is_none());
    }

    #[test]
    fn translated_flags() {
        assert!(lang("es_MX").is_translated());
        assert!(lang("iw").is_translated());
        assert!(!lang("eu").is_translated());
        assert!(!lang("eo").is_translated());
        assert_eq!(lang("en_IL").language_type(), LanguageType::Hidden);
    }

    #[test]
    fn translation_fallbacks() {
        assert_eq!(fallback("en_US"), None);
        assert_eq!(fallback("en_CA"), Some("en_US"));
        assert_eq!(fallback("en_GB"), Some("en_US"));
        assert_eq!(fallback("en_AU"), Some("en_GB"));
        assert_eq!(fallback("zh_HK"), Some("zh_TW"));
        assert_eq!(fallback("zh_SG"), Some("zh_CN"));
        assert_eq!(fallback("zh_TW"), None);
        assert_eq!(fallback("pt_PT"), Some("pt_BR"));
        assert_eq!(fallback("nl_NL"), None);
        assert_eq!(fallback("ro_MD"), Some("ro"));
        assert_eq!(fallback("de_CH"), Some("de"));
        assert_eq!(fallback("haw"), Some("en_US"));
        assert_eq!(fallback("ht"), Some("fr"));
        assert_eq!(fallback("de"), None);
    }

    #[test]
    fn general_fallbacks() {
        assert_eq!(Language::ENGLISH.fallback_language(), None);
        assert_eq!(lang("ms").fallback_language(), Some(lang("in")));
        assert_eq!(lang("fr_CA").fallback_language(), Some(lang("fr")));
        assert_eq!(lang("de").fallback_language(), Some(Language::ENGLISH));
    }

    #[test]
    fn registry_has_no_duplicates() {
        let all: Vec<_> = Language::all().map(|l| l.locale()).collect();
        for (i, locale) in all.iter().enumerate() {
            assert!(!all[i + 1..].contains(locale), "{locale} registered twice");
        }
    }
}
