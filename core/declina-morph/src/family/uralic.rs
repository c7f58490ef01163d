//! Finnish, Estonian and Hungarian: many cases, possessive suffixes, no gender.

use declina_protocol::{LanguageArticle, LanguageCase, LanguagePossessive, LanguageStartsWith};

use super::{
    base, grid, nominative_unpossessed, starts_with_vowel, ArticleWord, Axis, FormLayout, Lookup,
    ModifierValidation, Selection, SG_PL,
};
use crate::config::DeclensionConfig;
use crate::form::{Dim, FormDims, KeyStyle};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UralicLanguage {
    Finnish,
    Estonian,
    Hungarian,
}

use LanguageCase::*;

const FINNISH_CASES: &[LanguageCase] = &[
    Nominative, Genitive, Inessive, Elative, Illative, Adessive, Ablative, Allative, Essive, Translative, Partitive,
];
const ESTONIAN_CASES: &[LanguageCase] = &[
    Nominative, Genitive, Partitive, Illative, Inessive, Elative, Allative, Adessive, Ablative, Translative,
    Terminative, Essive, Abessive, Comitative,
];
const HUNGARIAN_CASES: &[LanguageCase] = &[
    Nominative, Accusative, Illative, Inessive, Elative, Sublative, Superessive, Delative, Allative, Ablative,
    Dative, Instrumental, Translative, Causalfinal, Essiveformal, Terminative, Distributive,
];
const POSSESSIVES: &[LanguagePossessive] =
    &[LanguagePossessive::None, LanguagePossessive::First, LanguagePossessive::Second];

const NOUN_KEY: KeyStyle = KeyStyle::dashed(&[Dim::Number, Dim::Case, Dim::Possessive]);
const ADJECTIVE_KEY: KeyStyle = KeyStyle::dashed(&[Dim::Number, Dim::Case]);
const ARTICLE_KEY: KeyStyle = KeyStyle::dashed(&[Dim::Number, Dim::StartsWith]);

pub(crate) fn config(lang: UralicLanguage) -> DeclensionConfig {
    match lang {
        UralicLanguage::Finnish => DeclensionConfig {
            has_possessive: true,
            required_possessives: POSSESSIVES.to_vec(),
            ..DeclensionConfig::default()
        }
        .with_cases(FINNISH_CASES),
        UralicLanguage::Estonian => DeclensionConfig::default().with_cases(ESTONIAN_CASES),
        UralicLanguage::Hungarian => DeclensionConfig {
            has_article: true,
            has_starts_with: true,
            has_possessive: true,
            allowed_article_types: vec![LanguageArticle::Zero, LanguageArticle::Indefinite, LanguageArticle::Definite],
            required_possessives: POSSESSIVES.to_vec(),
            required_starts_with: vec![LanguageStartsWith::Consonant, LanguageStartsWith::Vowel],
            ..DeclensionConfig::default()
        }
        .with_cases(HUNGARIAN_CASES),
    }
}

pub(crate) fn layout(lang: UralicLanguage, config: &DeclensionConfig) -> FormLayout {
    let nouns = grid(
        base(config),
        &[
            Axis::Number(SG_PL),
            Axis::Case(&config.required_cases),
            Axis::Possessive(&config.required_possessives),
        ],
    );
    let layout = FormLayout {
        noun_lookup: Lookup::StrictOn(&[Dim::Article, Dim::Possessive]),
        field: Selection::Where(nominative_unpossessed),
        ..FormLayout::nouns(nouns, NOUN_KEY, config)
    };
    match lang {
        UralicLanguage::Finnish | UralicLanguage::Estonian => FormLayout {
            adjectives: grid(base(config), &[Axis::Number(SG_PL), Axis::Case(&config.required_cases)]),
            adjective_key: ADJECTIVE_KEY,
            adjective_validation: ModifierValidation::FillAlways,
            ..layout
        },
        UralicLanguage::Hungarian => FormLayout {
            articles: grid(
                base(config),
                &[Axis::Number(SG_PL), Axis::StartsWith(&config.required_starts_with)],
            ),
            article_key: ARTICLE_KEY,
            article_validation: ModifierValidation::FillAlways,
            ..layout
        },
    }
}

pub(crate) fn hungarian_article(dims: &FormDims, article: LanguageArticle) -> ArticleWord {
    match article {
        LanguageArticle::Indefinite if dims.number.is_plural() => ArticleWord::None,
        LanguageArticle::Indefinite => ArticleWord::Word("Egy "),
        LanguageArticle::Definite if starts_with_vowel(dims) => ArticleWord::Word("Az "),
        LanguageArticle::Definite => ArticleWord::Word("A "),
        _ => ArticleWord::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use declina_protocol::{LanguageGender, LanguageNumber};

    #[test]
    fn finnish_layout_shape() {
        let config = config(UralicLanguage::Finnish);
        let layout = layout(UralicLanguage::Finnish, &config);
        // 2 numbers x 11 cases x 3 possessives
        assert_eq!(layout.nouns.len(), 66);
        assert_eq!(layout.field.pick(&layout.nouns), vec![0, 33]);
        assert_eq!(layout.adjectives.len(), 22);
        assert_eq!(layout.noun_key.render(&layout.nouns[1]), "0-n-f");
        assert!(!config.has_gender);
    }

    #[test]
    fn estonian_has_no_possessives() {
        let config = config(UralicLanguage::Estonian);
        let layout = layout(UralicLanguage::Estonian, &config);
        assert!(!config.has_possessive);
        assert_eq!(layout.nouns.len(), 28);
        assert!(config.allowed_cases.contains(&Comitative));
    }

    #[test]
    fn hungarian_articles() {
        let config = config(UralicLanguage::Hungarian);
        let layout = layout(UralicLanguage::Hungarian, &config);
        assert_eq!(layout.articles.len(), 4);
        assert_eq!(layout.adjectives.len(), 1);

        let consonant = FormDims::base(LanguageGender::Neuter, LanguageStartsWith::Consonant);
        let vowel = consonant.with_starts_with(LanguageStartsWith::Vowel);
        let word = |d: &FormDims, a| match hungarian_article(d, a) {
            ArticleWord::Word(w) => Some(w),
            _ => None,
        };
        assert_eq!(word(&consonant, LanguageArticle::Definite), Some("A "));
        assert_eq!(word(&vowel, LanguageArticle::Definite), Some("Az "));
        assert_eq!(word(&vowel, LanguageArticle::Indefinite), Some("Egy "));
        assert_eq!(word(&vowel.with_number(LanguageNumber::Plural), LanguageArticle::Indefinite), None);
    }
}
