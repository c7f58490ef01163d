//! Hebrew, Arabic and Amharic.
//!
//! The definite article is a prefix written into the noun form, so nouns and
//! adjectives carry definite forms and the article word itself is only the
//! bare prefix.

use declina_protocol::{LanguageArticle, LanguageCase, LanguageGender, LanguagePossessive};

use super::{base, grid, ArticleWord, Axis, FormLayout, Lookup, NounValidation, Selection, SG_PL};
use crate::config::DeclensionConfig;
use crate::form::{Dim, FormDims, KeyStyle};

/// ה
pub const HEBREW_DEFINITE_PREFIX: &str = "\u{05d4}";
/// ال
pub const ARABIC_DEFINITE_PREFIX: &str = "\u{0627}\u{0644}";
/// ا, appended to indefinite accusatives.
pub const FINAL_ALIF: char = '\u{0627}';

use LanguageArticle::{Definite, Zero};
use LanguageCase::{Accusative, Genitive, Nominative};
use LanguageGender::{Feminine, Masculine};

const ARTICLES: &[LanguageArticle] = &[Zero, Definite];
const POSSESSIVES: &[LanguagePossessive] =
    &[LanguagePossessive::None, LanguagePossessive::First, LanguagePossessive::Second];

const NOUN_KEY: KeyStyle = KeyStyle::dashed(&[Dim::Number, Dim::Case, Dim::Possessive, Dim::Article]);
const ADJECTIVE_KEY: KeyStyle =
    KeyStyle::dashed(&[Dim::Gender, Dim::Number, Dim::Case, Dim::Article, Dim::Possessive]);

fn semitic_config() -> DeclensionConfig {
    DeclensionConfig {
        has_article: true,
        has_article_in_noun_form: true,
        has_subject_gender_in_verb_conjugation: true,
        allowed_article_types: ARTICLES.to_vec(),
        ..DeclensionConfig::default()
    }
    .with_genders(&[Feminine, Masculine], Feminine)
}

/// A possessive Semitic config: nouns decline in the nominative only, with
/// the listed extra cases allowed on request.
fn possessive_config(allowed_cases: &[LanguageCase]) -> DeclensionConfig {
    DeclensionConfig {
        has_possessive: true,
        has_possessive_in_adjective: true,
        required_possessives: POSSESSIVES.to_vec(),
        allowed_cases: allowed_cases.to_vec(),
        ..semitic_config()
    }
}

pub(crate) fn hebrew_config() -> DeclensionConfig {
    semitic_config()
}

pub(crate) fn arabic_config() -> DeclensionConfig {
    possessive_config(&[Nominative, Accusative])
}

pub(crate) fn amharic_config() -> DeclensionConfig {
    possessive_config(&[Nominative, Accusative, Genitive])
}

pub(crate) fn hebrew_layout(config: &DeclensionConfig) -> FormLayout {
    let nouns = grid(base(config), &[Axis::Article(ARTICLES), Axis::Number(SG_PL)]);
    let adjectives = grid(
        base(config),
        &[Axis::Article(ARTICLES), Axis::Number(SG_PL), Axis::Gender(&[Masculine, Feminine])],
    );
    FormLayout {
        noun_lookup: Lookup::StrictOn(&[Dim::Article]),
        noun_validation: NounValidation::Hebrew,
        adjectives,
        adjective_key: KeyStyle::dashed(&[Dim::Gender, Dim::Article, Dim::Number]),
        adjective_required: Selection::Where(FormDims::is_zero_article),
        ..FormLayout::nouns(nouns, KeyStyle::dashed(&[Dim::Number, Dim::Article]), config)
    }
    .with_simple_article(config)
}

fn possessive_layout(noun_cases: &[LanguageCase], config: &DeclensionConfig) -> FormLayout {
    let nouns = grid(
        base(config),
        &[
            Axis::Number(SG_PL),
            Axis::Case(noun_cases),
            Axis::Possessive(POSSESSIVES),
            Axis::Article(ARTICLES),
        ],
    );
    FormLayout {
        noun_lookup: Lookup::StrictOn(&[Dim::Article, Dim::Possessive]),
        entity: Selection::Where(FormDims::is_nominative),
        other: Selection::All,
        ..FormLayout::nouns(nouns, NOUN_KEY, config)
    }
    .with_simple_article(config)
}

fn possessive_adjectives(cases: &[LanguageCase], config: &DeclensionConfig) -> Vec<FormDims> {
    grid(
        base(config),
        &[
            Axis::Number(SG_PL),
            Axis::Gender(&[Feminine, Masculine]),
            Axis::Case(cases),
            Axis::Article(ARTICLES),
            Axis::Possessive(POSSESSIVES),
        ],
    )
}

fn singular_feminine_nominative_zero(dims: &FormDims) -> bool {
    !dims.number.is_plural()
        && dims.gender == Feminine
        && dims.is_nominative_zero()
        && dims.possessive == LanguagePossessive::None
}

/// Accusative nouns are registered so requests for them resolve, but their
/// values are always read from the matching nominative.
pub(crate) fn arabic_layout(config: &DeclensionConfig) -> FormLayout {
    FormLayout {
        noun_validation: NounValidation::Arabic,
        adjectives: possessive_adjectives(&[Nominative, Accusative], config),
        adjective_key: ADJECTIVE_KEY,
        adjective_required: Selection::Where(singular_feminine_nominative_zero),
        ..possessive_layout(&[Nominative, Accusative], config)
    }
}

pub(crate) fn amharic_layout(config: &DeclensionConfig) -> FormLayout {
    FormLayout {
        noun_validation: NounValidation::Amharic,
        adjectives: possessive_adjectives(&config.required_cases, config),
        adjective_key: ADJECTIVE_KEY,
        adjective_required: Selection::Where(singular_feminine_nominative_zero),
        ..possessive_layout(&config.allowed_cases, config)
    }
}

/// The article word is the bare definite prefix; every other article type is
/// already part of the noun.
pub(crate) fn article(prefix: &'static str, article: LanguageArticle) -> ArticleWord {
    match article {
        Definite => ArticleWord::Word(prefix),
        _ => ArticleWord::Word(""),
    }
}

/// Appends the final alif of an indefinite accusative when enabled.
///
/// Words ending in tāʾ marbūṭa (ة) or hamza (ء) never take it.
pub fn accusative_alif(value: &str, enabled: bool) -> String {
    match value.chars().last() {
        Some('\u{0629}' | '\u{0621}') | None => value.to_string(),
        Some(_) if enabled => format!("{value}{FINAL_ALIF}"),
        Some(_) => value.to_string(),
    }
}

/// Prefixes a definite adjective derived from a non-definite one.
pub(crate) fn derive_definite(prefix: &str, form: &FormDims, value: &str, source: &FormDims) -> String {
    if form.article == Definite && source.article != Definite {
        format!("{prefix}{value}")
    } else {
        value.to_string()
    }
}

/// Arabic adjective derivation: definite prefix, then the accusative alif
/// for indefinite accusatives. Possessed forms are left alone.
pub(crate) fn arabic_derive_adjective(form: &FormDims, value: &str, source: &FormDims, alif: bool) -> String {
    if form.possessive != LanguagePossessive::None {
        return value.to_string();
    }
    let value = derive_definite(ARABIC_DEFINITE_PREFIX, form, value, source);
    if form.case == Accusative && form.article != Definite {
        return accusative_alif(&value, alif);
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use declina_protocol::{LanguageNumber, LanguageStartsWith};

    #[test]
    fn hebrew_layout_order() {
        let config = hebrew_config();
        let layout = hebrew_layout(&config);
        let nouns: Vec<_> = layout.nouns.iter().map(|d| layout.noun_key.render(d)).collect();
        assert_eq!(nouns, vec!["0-n", "1-n", "0-d", "1-d"]);
        assert_eq!(layout.adjectives.len(), 8);
        assert_eq!(layout.adjective_required.pick(&layout.adjectives), vec![0, 1, 2, 3]);
        assert_eq!(config.default_gender, Feminine);
        assert!(config.has_subject_gender_in_verb_conjugation);
    }

    #[test]
    fn arabic_registers_accusatives() {
        let config = arabic_config();
        let layout = arabic_layout(&config);
        // 2 numbers x 2 cases x 3 possessives x 2 articles
        assert_eq!(layout.nouns.len(), 24);
        assert_eq!(layout.entity.pick(&layout.nouns).len(), 12);
        assert_eq!(layout.adjectives.len(), 48);
        assert_eq!(layout.adjective_required.pick(&layout.adjectives), vec![0]);
        assert_eq!(config.required_cases, vec![Nominative]);
    }

    #[test]
    fn amharic_layout_shape() {
        let config = amharic_config();
        let layout = amharic_layout(&config);
        assert_eq!(layout.nouns.len(), 36);
        assert_eq!(layout.adjectives.len(), 24);
    }

    #[test]
    fn alif_rule() {
        assert_eq!(accusative_alif("كتاب", false), "كتاب");
        assert_eq!(accusative_alif("كتاب", true), "كتابا");
        assert_eq!(accusative_alif("مدينة", true), "مدينة");
        assert_eq!(accusative_alif("سماء", true), "سماء");
        assert_eq!(accusative_alif("", true), "");
    }

    #[test]
    fn arabic_adjective_derivation() {
        let zero = FormDims::base(Feminine, LanguageStartsWith::Consonant);
        let def = zero.with_article(Definite);
        assert_eq!(arabic_derive_adjective(&def, "كبيرة", &zero, true), "الكبيرة");
        assert_eq!(arabic_derive_adjective(&def.with_case(Accusative), "كبير", &zero, true), "الكبير");
        assert_eq!(arabic_derive_adjective(&zero.with_case(Accusative), "كبير", &zero, true), "كبيرا");
        assert_eq!(arabic_derive_adjective(&zero.with_case(Accusative), "كبير", &zero, false), "كبير");
        let possessed = def.with_possessive(LanguagePossessive::First);
        assert_eq!(arabic_derive_adjective(&possessed, "كبيرتي", &zero, true), "كبيرتي");
        let plural = zero.with_number(LanguageNumber::Plural).with_article(Definite);
        assert_eq!(derive_definite(HEBREW_DEFINITE_PREFIX, &plural, "גדולות", &zero), "הגדולות");
        assert_eq!(derive_definite(HEBREW_DEFINITE_PREFIX, &plural, "הגדולות", &plural), "הגדולות");
    }
}
