//! Romance languages: number and gender agreement with article words.

use declina_protocol::{
    LanguageArticle, LanguageCase, LanguageGender, LanguageNumber, LanguagePosition,
    LanguageStartsWith,
};

use super::{
    base, grid, ArticleWord, Axis, FormLayout, Lookup, NounValidation,
    Selection, NUMBER_KEY, SG_PL,
};
use crate::config::DeclensionConfig;
use crate::form::{Dim, FormDims, KeyStyle};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RomanceLanguage {
    French,
    Romansh,
    Italian,
    Spanish,
    Portuguese,
    Catalan,
}

use LanguageGender::{Feminine, Masculine, Neuter};
use LanguageStartsWith::{Consonant, Special, Vowel};

const MASC_FEM: &[LanguageGender] = &[Masculine, Feminine];
const ARTICLES: &[LanguageArticle] =
    &[LanguageArticle::Zero, LanguageArticle::Indefinite, LanguageArticle::Definite];

impl RomanceLanguage {
    fn starts_with(self) -> &'static [LanguageStartsWith] {
        match self {
            RomanceLanguage::French | RomanceLanguage::Romansh | RomanceLanguage::Catalan => {
                &[Consonant, Vowel]
            }
            RomanceLanguage::Italian => &[Consonant, Vowel, Special],
            RomanceLanguage::Spanish | RomanceLanguage::Portuguese => &[Consonant],
        }
    }

    fn modifier_key(self) -> KeyStyle {
        match self {
            RomanceLanguage::Spanish | RomanceLanguage::Portuguese => {
                KeyStyle::dashed(&[Dim::Number, Dim::Gender])
            }
            RomanceLanguage::Catalan => KeyStyle::dashed(&[Dim::Number, Dim::StartsWith, Dim::Gender]),
            _ => KeyStyle::dashed(&[Dim::Number, Dim::Gender, Dim::StartsWith]),
        }
    }
}

fn romance_base() -> DeclensionConfig {
    DeclensionConfig {
        has_article: true,
        allowed_article_types: ARTICLES.to_vec(),
        default_adjective_position: LanguagePosition::Post,
        should_lowercase_entity_in_compound_nouns: true,
        ..DeclensionConfig::default()
    }
}

pub(crate) fn config(lang: RomanceLanguage) -> DeclensionConfig {
    let starts_with = lang.starts_with();
    DeclensionConfig {
        has_starts_with: starts_with.len() > 1,
        required_starts_with: starts_with.to_vec(),
        ..romance_base()
    }
    .with_genders(&[Feminine, Masculine], Feminine)
}

fn singular_feminine(dims: &FormDims) -> bool {
    dims.number == LanguageNumber::Singular && dims.gender == Feminine && dims.starts_with == Consonant
}

pub(crate) fn layout(lang: RomanceLanguage, config: &DeclensionConfig) -> FormLayout {
    let nouns = grid(base(config), &[Axis::Number(SG_PL)]);
    let modifiers = grid(
        base(config),
        &[Axis::StartsWith(lang.starts_with()), Axis::Number(SG_PL), Axis::Gender(MASC_FEM)],
    );
    FormLayout {
        other: Selection::All,
        noun_validation: NounValidation::Singular,
        adjectives: modifiers.clone(),
        adjective_key: lang.modifier_key(),
        adjective_lookup: Lookup::StrictOn(&[Dim::Case, Dim::Article, Dim::StartsWith]),
        articles: modifiers,
        article_key: lang.modifier_key(),
        adjective_required: Selection::Where(singular_feminine),
        article_required: Selection::Where(singular_feminine),
        ..FormLayout::nouns(nouns, NUMBER_KEY, config)
    }
}

/// Article words, indexed `[starts_with][number][masculine, feminine]`.
type ArticleTable = [[[&'static str; 2]; 2]; 3];

const fn uniform(table: [[&'static str; 2]; 2]) -> ArticleTable {
    [table, table, table]
}

const SPANISH_DEFINITE: ArticleTable = uniform([["El ", "La "], ["Los ", "Las "]]);
const SPANISH_INDEFINITE: ArticleTable = uniform([["Un ", "Una "], ["Unos ", "Unas "]]);
const PORTUGUESE_DEFINITE: ArticleTable = uniform([["O ", "A "], ["Os ", "As "]]);
const PORTUGUESE_INDEFINITE: ArticleTable = uniform([["Um ", "Uma "], ["Uns ", "Umas "]]);
const FRENCH_DEFINITE: ArticleTable = [
    [["le ", "la "], ["les ", "les "]],
    [["l'", "l'"], ["les ", "les "]],
    [["le ", "la "], ["les ", "les "]],
];
const FRENCH_INDEFINITE: ArticleTable = uniform([["un ", "une "], ["des ", "des "]]);
const ROMANSH_DEFINITE: ArticleTable = [
    [["il ", "la "], ["ils ", "las "]],
    [["l'", "l'"], ["ils ", "las "]],
    [["il ", "la "], ["ils ", "las "]],
];
const ROMANSH_INDEFINITE: ArticleTable = [
    [["in ", "ina "], ["", ""]],
    [["in'", "in'"], ["", ""]],
    [["in ", "ina "], ["", ""]],
];
const CATALAN_DEFINITE: ArticleTable = [
    [["el ", "la "], ["els ", "les "]],
    [["l'", "l'"], ["els ", "les "]],
    [["el ", "la "], ["els ", "les "]],
];
const CATALAN_INDEFINITE: ArticleTable = uniform([["un ", "una "], ["uns ", "unes "]]);
const ITALIAN_DEFINITE: ArticleTable = [
    [["Il ", "La "], ["I ", "Le "]],
    [["L'", "L'"], ["Gli ", "Le "]],
    [["Lo ", "La "], ["Gli ", "Le "]],
];
// Italian has no plural indefinite article.
const ITALIAN_INDEFINITE: ArticleTable = [
    [["Un ", "Una "], ["", ""]],
    [["Un ", "Un'"], ["", ""]],
    [["Uno ", "Una "], ["", ""]],
];

pub(crate) fn article(lang: RomanceLanguage, dims: &FormDims, article: LanguageArticle) -> ArticleWord {
    use RomanceLanguage::*;
    let table = match (lang, article) {
        (Spanish, LanguageArticle::Definite) => &SPANISH_DEFINITE,
        (Spanish, LanguageArticle::Indefinite) => &SPANISH_INDEFINITE,
        (Portuguese, LanguageArticle::Definite) => &PORTUGUESE_DEFINITE,
        (Portuguese, LanguageArticle::Indefinite) => &PORTUGUESE_INDEFINITE,
        (French, LanguageArticle::Definite) => &FRENCH_DEFINITE,
        (French, LanguageArticle::Indefinite) => &FRENCH_INDEFINITE,
        (Romansh, LanguageArticle::Definite) => &ROMANSH_DEFINITE,
        (Romansh, LanguageArticle::Indefinite) => &ROMANSH_INDEFINITE,
        (Catalan, LanguageArticle::Definite) => &CATALAN_DEFINITE,
        (Catalan, LanguageArticle::Indefinite) => &CATALAN_INDEFINITE,
        (Italian, LanguageArticle::Definite) => &ITALIAN_DEFINITE,
        (Italian, LanguageArticle::Indefinite) => &ITALIAN_INDEFINITE,
        _ => return ArticleWord::None,
    };
    let number = usize::from(dims.number.is_plural());
    let gender = usize::from(dims.gender != Masculine);
    let word = table[dims.starts_with.index()][number][gender];
    if lang == Italian && word.is_empty() {
        return ArticleWord::None;
    }
    ArticleWord::Word(word)
}

const ROMANIAN_CASES: &[LanguageCase] = &[LanguageCase::Nominative, LanguageCase::Dative];

pub(crate) fn romanian_config() -> DeclensionConfig {
    DeclensionConfig {
        has_article_in_noun_form: true,
        article_in_noun_form_auto_derived: true,
        required_noun_articles: vec![LanguageArticle::Zero, LanguageArticle::Definite],
        ..romance_base()
    }
    .with_cases(ROMANIAN_CASES)
    .with_genders(&[Feminine, Masculine, Neuter], Neuter)
}

fn singular_or_neuter(dims: &FormDims) -> bool {
    dims.number == LanguageNumber::Singular || dims.gender == Neuter
}

pub(crate) fn romanian_layout(config: &DeclensionConfig) -> FormLayout {
    let nouns = grid(
        base(config),
        &[
            Axis::Number(&config.allowed_numbers),
            Axis::Case(&config.required_cases),
            Axis::Article(&config.required_noun_articles),
        ],
    );
    let modifiers = grid(
        base(config),
        &[Axis::Case(ROMANIAN_CASES), Axis::Number(SG_PL), Axis::Gender(&[Neuter, Masculine, Feminine])],
    );
    let modifier_key = KeyStyle::dashed(&[Dim::Gender, Dim::Case, Dim::Number]);
    FormLayout {
        field: Selection::Where(FormDims::is_nominative_zero),
        noun_validation: NounValidation::EntitiesOnly,
        adjectives: modifiers.clone(),
        adjective_key: modifier_key,
        adjective_lookup: Lookup::StrictOn(&[Dim::Article]),
        adjective_required: Selection::All,
        articles: modifiers,
        article_key: modifier_key,
        article_required: Selection::Where(singular_or_neuter),
        ..FormLayout::nouns(nouns, KeyStyle::dashed(&[Dim::Number, Dim::Case, Dim::Article]), config)
    }
}

/// Romanian marks definiteness in the noun; only the indefinite article is a word.
pub(crate) fn romanian_article(dims: &FormDims, article: LanguageArticle) -> ArticleWord {
    if article != LanguageArticle::Indefinite {
        return ArticleWord::None;
    }
    let word = match (dims.case, dims.number.is_plural(), dims.gender) {
        (LanguageCase::Dative, true, _) => "unor ",
        (LanguageCase::Dative, false, Feminine) => "unei ",
        (LanguageCase::Dative, false, _) => "unui ",
        (_, true, _) => "nişte ",
        (_, false, Feminine) => "o ",
        (_, false, _) => "un ",
    };
    ArticleWord::Word(word)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(w: ArticleWord) -> Option<&'static str> {
        match w {
            ArticleWord::Word(w) => Some(w),
            _ => None,
        }
    }

    fn dims(number: LanguageNumber, gender: LanguageGender, sw: LanguageStartsWith) -> FormDims {
        FormDims::base(gender, sw).with_number(number)
    }

    #[test]
    fn italian_articles_follow_the_initial_sound() {
        use LanguageNumber::*;
        let it = RomanceLanguage::Italian;
        let def = |d| word(article(it, &d, LanguageArticle::Definite));
        let indef = |d| word(article(it, &d, LanguageArticle::Indefinite));
        assert_eq!(def(dims(Singular, Masculine, Consonant)), Some("Il "));
        assert_eq!(def(dims(Singular, Masculine, Special)), Some("Lo "));
        assert_eq!(def(dims(Plural, Masculine, Vowel)), Some("Gli "));
        assert_eq!(def(dims(Singular, Feminine, Vowel)), Some("L'"));
        assert_eq!(indef(dims(Singular, Feminine, Vowel)), Some("Un'"));
        assert_eq!(indef(dims(Singular, Masculine, Special)), Some("Uno "));
        assert_eq!(indef(dims(Plural, Feminine, Consonant)), None);
    }

    #[test]
    fn french_and_spanish_tables() {
        use LanguageNumber::*;
        let fr = |d, a| word(article(RomanceLanguage::French, &d, a));
        assert_eq!(fr(dims(Singular, Masculine, Vowel), LanguageArticle::Definite), Some("l'"));
        assert_eq!(fr(dims(Plural, Feminine, Consonant), LanguageArticle::Indefinite), Some("des "));
        let es = |d, a| word(article(RomanceLanguage::Spanish, &d, a));
        assert_eq!(es(dims(Plural, Masculine, Consonant), LanguageArticle::Definite), Some("Los "));
        assert_eq!(es(dims(Singular, Feminine, Consonant), LanguageArticle::Indefinite), Some("Una "));
        assert_eq!(es(dims(Singular, Feminine, Consonant), LanguageArticle::Partitive), None);
        let rm = |d, a| word(article(RomanceLanguage::Romansh, &d, a));
        assert_eq!(rm(dims(Plural, Feminine, Consonant), LanguageArticle::Indefinite), Some(""));
    }

    #[test]
    fn modifier_layout_per_language() {
        for (lang, count, key) in [
            (RomanceLanguage::Spanish, 4, "1-m"),
            (RomanceLanguage::French, 8, "1-m-c"),
            (RomanceLanguage::Catalan, 8, "1-c-m"),
            (RomanceLanguage::Italian, 12, "1-m-c"),
        ] {
            let config = config(lang);
            let layout = layout(lang, &config);
            assert_eq!(layout.adjectives.len(), count, "{lang:?}");
            assert_eq!(layout.adjective_key.render(&layout.adjectives[2]), key, "{lang:?}");
            assert_eq!(config.default_gender, Feminine);
        }
    }

    #[test]
    fn romanian_forms() {
        let config = romanian_config();
        let layout = romanian_layout(&config);
        assert_eq!(layout.nouns.len(), 8);
        assert_eq!(layout.adjectives.len(), 12);
        assert_eq!(Selection::Where(singular_or_neuter).pick(&layout.articles).len(), 8);
        assert_eq!(layout.noun_key.render(&layout.nouns[3]), "0-d-d");
        let dat = FormDims::base(Feminine, Consonant).with_case(LanguageCase::Dative);
        assert_eq!(word(romanian_article(&dat, LanguageArticle::Indefinite)), Some("unei "));
        assert_eq!(
            word(romanian_article(&dat.with_case(LanguageCase::Nominative).with_number(LanguageNumber::Plural), LanguageArticle::Indefinite)),
            Some("nişte ")
        );
    }
}
