//! Uninflected and lightly inflected languages, English included.

use declina_protocol::{
    LanguageArticle, LanguageCase, LanguageGender, LanguageNumber, LanguagePosition,
    LanguageStartsWith,
};

use super::{
    base, grid, starts_with_vowel, ArticleWord, Axis, FormLayout, Lookup, NounValidation,
    Selection, NUMBER_KEY, SG_PL,
};
use crate::config::DeclensionConfig;
use crate::form::{Dim, FormDims, KeyStyle};
use crate::language::Language;

/// Languages with no noun inflection at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SimpleKind {
    /// One form, no classifiers (Tagalog, and the fallback for unmapped languages).
    Plain,
    /// One form, counted with classifier words (Chinese, Japanese, Thai).
    Classifier,
    /// Singular and plural forms, with classifiers and capitalization.
    Vietnamese,
}

/// Platform languages whose grammar is only roughly modelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnsupportedLanguage {
    Irish,
    Welsh,
    Maltese,
}

/// Languages with singular and plural nouns and nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PluralNounLanguage {
    /// Indonesian and Malay.
    Indonesian,
    Esperanto,
}

const NUMBER_CASE_KEY: KeyStyle = KeyStyle::dashed(&[Dim::Number, Dim::Case]);
const NUMBER_STARTS_WITH_KEY: KeyStyle = KeyStyle::dashed(&[Dim::Number, Dim::StartsWith]);

const ARTICLES: &[LanguageArticle] =
    &[LanguageArticle::Zero, LanguageArticle::Indefinite, LanguageArticle::Definite];

pub(crate) fn simple_config(kind: SimpleKind) -> DeclensionConfig {
    let config = DeclensionConfig {
        is_inflected: false,
        has_capitalization: kind == SimpleKind::Vietnamese,
        has_classifiers: kind != SimpleKind::Plain,
        ..DeclensionConfig::default()
    };
    match kind {
        SimpleKind::Vietnamese => config,
        _ => config.without_plural(),
    }
}

pub(crate) fn simple_layout(kind: SimpleKind, config: &DeclensionConfig) -> FormLayout {
    match kind {
        SimpleKind::Vietnamese => FormLayout { other: Selection::All, ..plural_noun_layout(config) },
        _ => FormLayout::single(config),
    }
}

pub(crate) fn unsupported_config(lang: UnsupportedLanguage) -> DeclensionConfig {
    let config = DeclensionConfig {
        has_article: true,
        allowed_article_types: ARTICLES.to_vec(),
        default_adjective_position: LanguagePosition::Post,
        ..DeclensionConfig::default()
    }
    .with_genders(&[LanguageGender::Feminine, LanguageGender::Masculine], LanguageGender::Feminine);
    match lang {
        UnsupportedLanguage::Irish => {
            config.with_cases(&[LanguageCase::Nominative, LanguageCase::Genitive])
        }
        UnsupportedLanguage::Welsh | UnsupportedLanguage::Maltese => config,
    }
}

pub(crate) fn unsupported_layout(lang: UnsupportedLanguage, config: &DeclensionConfig) -> FormLayout {
    match lang {
        UnsupportedLanguage::Irish => {
            let nouns = grid(base(config), &[Axis::Number(SG_PL), Axis::Case(&config.required_cases)]);
            FormLayout {
                noun_lookup: Lookup::Lenient,
                noun_validation: NounValidation::DeriveFromNominative,
                ..FormLayout::nouns(nouns, NUMBER_CASE_KEY, config)
            }
            .with_simple_article(config)
        }
        UnsupportedLanguage::Welsh | UnsupportedLanguage::Maltese => {
            plural_noun_layout(config).with_simple_article(config)
        }
    }
}

pub(crate) fn plural_noun_config(lang: PluralNounLanguage) -> DeclensionConfig {
    match lang {
        PluralNounLanguage::Indonesian => DeclensionConfig::default(),
        PluralNounLanguage::Esperanto => DeclensionConfig {
            has_article: true,
            allowed_article_types: ARTICLES.to_vec(),
            ..DeclensionConfig::default()
        },
    }
}

/// Singular and plural nouns; "other" nouns need only the singular.
pub(crate) fn plural_noun_layout(config: &DeclensionConfig) -> FormLayout {
    let nouns = grid(base(config), &[Axis::Number(SG_PL)]);
    FormLayout {
        noun_lookup: Lookup::Lenient,
        noun_validation: NounValidation::Singular,
        ..FormLayout::nouns(nouns, NUMBER_KEY, config)
    }
}

pub(crate) fn plural_noun_family_layout(lang: PluralNounLanguage, config: &DeclensionConfig) -> FormLayout {
    match lang {
        PluralNounLanguage::Indonesian => plural_noun_layout(config),
        PluralNounLanguage::Esperanto => plural_noun_layout(config).with_simple_article(config),
    }
}

pub(crate) fn english_config() -> DeclensionConfig {
    DeclensionConfig {
        has_article: true,
        has_starts_with: true,
        allowed_article_types: ARTICLES.to_vec(),
        required_starts_with: vec![LanguageStartsWith::Consonant, LanguageStartsWith::Vowel],
        ..DeclensionConfig::default()
    }
}

pub(crate) fn english_layout(config: &DeclensionConfig) -> FormLayout {
    let nouns = grid(base(config), &[Axis::Number(SG_PL)]);
    let singular = base(config);
    let articles = vec![
        singular,
        singular.with_starts_with(LanguageStartsWith::Vowel),
        singular.with_number(LanguageNumber::Plural),
    ];
    FormLayout {
        noun_validation: NounValidation::Singular,
        articles,
        article_key: NUMBER_STARTS_WITH_KEY,
        ..FormLayout::nouns(nouns, NUMBER_KEY, config)
    }
}

pub(crate) fn english_article(dims: &FormDims, article: LanguageArticle) -> ArticleWord {
    match article {
        LanguageArticle::Indefinite if dims.number.is_plural() => ArticleWord::None,
        LanguageArticle::Indefinite if starts_with_vowel(dims) => ArticleWord::Word("An "),
        LanguageArticle::Indefinite => ArticleWord::Word("A "),
        LanguageArticle::Definite => ArticleWord::Word("The "),
        _ => ArticleWord::None,
    }
}

pub(crate) fn esperanto_article(article: LanguageArticle) -> ArticleWord {
    match article {
        LanguageArticle::Definite => ArticleWord::Word("La"),
        _ => ArticleWord::None,
    }
}

/// The generic counting word for languages that use classifiers.
pub(crate) fn default_classifier(language: Language) -> &'static str {
    match language.language_code() {
        "ja" => "つ",
        "zh" => match language.country() {
            Some("TW" | "HK") => "個",
            _ => "个",
        },
        "ko" => "개",
        "vi" => "cái",
        "bn" => "টা",
        "ms" | "in" => "buah",
        _ => "",
    }
}
