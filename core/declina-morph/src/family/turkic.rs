//! Turkish and Kazakh: cases and possessive suffixes, no gender, and an
//! indefinite article only.

use declina_protocol::{LanguageArticle, LanguageCase, LanguagePossessive};

use super::{
    base, grid, nominative_unpossessed, ArticleWord, Axis, FormLayout, Lookup, NounValidation, Selection,
};
use crate::config::DeclensionConfig;
use crate::form::{Dim, FormDims, KeyStyle};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TurkicLanguage {
    Turkish,
    Kazakh,
}

use LanguageCase::{Ablative, Accusative, Dative, Genitive, Instrumental, Locative, Nominative};

const NOUN_KEY: KeyStyle = KeyStyle::dashed(&[Dim::Number, Dim::Case, Dim::Possessive]);

pub(crate) fn config(lang: TurkicLanguage) -> DeclensionConfig {
    let config = DeclensionConfig {
        has_article: true,
        has_possessive: true,
        allowed_article_types: vec![LanguageArticle::Zero, LanguageArticle::Indefinite],
        required_possessives: vec![LanguagePossessive::None, LanguagePossessive::First, LanguagePossessive::Second],
        ..DeclensionConfig::default()
    };
    match lang {
        TurkicLanguage::Turkish => {
            config.with_cases(&[Nominative, Accusative, Dative, Locative, Genitive, Ablative])
        }
        TurkicLanguage::Kazakh => {
            config.with_cases(&[Nominative, Accusative, Dative, Locative, Genitive, Ablative, Instrumental])
        }
    }
}

pub(crate) fn layout(config: &DeclensionConfig) -> FormLayout {
    let nouns = grid(
        base(config),
        &[
            Axis::Number(&config.allowed_numbers),
            Axis::Case(&config.required_cases),
            Axis::Possessive(&config.required_possessives),
        ],
    );
    FormLayout {
        noun_lookup: Lookup::StrictOn(&[Dim::Article, Dim::Possessive]),
        field: Selection::Where(nominative_unpossessed),
        noun_validation: NounValidation::Strict,
        ..FormLayout::nouns(nouns, NOUN_KEY, config)
    }
    .with_simple_article(config)
}

pub(crate) fn article(lang: TurkicLanguage, _dims: &FormDims, article: LanguageArticle) -> ArticleWord {
    match (lang, article) {
        (TurkicLanguage::Turkish, LanguageArticle::Indefinite) => ArticleWord::Word("Bir "),
        (TurkicLanguage::Kazakh, LanguageArticle::Indefinite) => ArticleWord::Word("Бір "),
        _ => ArticleWord::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use declina_protocol::{LanguageGender, LanguageStartsWith};

    #[test]
    fn turkish_layout_shape() {
        let config = config(TurkicLanguage::Turkish);
        let layout = layout(&config);
        // 2 numbers x 6 cases x 3 possessives
        assert_eq!(layout.nouns.len(), 36);
        assert_eq!(layout.field.pick(&layout.nouns), vec![0, 18]);
        assert_eq!(layout.articles.len(), 1);
        assert!(!config.allowed_article_types.contains(&LanguageArticle::Definite));
    }

    #[test]
    fn kazakh_adds_instrumental() {
        let config = config(TurkicLanguage::Kazakh);
        assert_eq!(layout(&config).nouns.len(), 42);
        assert!(config.required_cases.contains(&Instrumental));
    }

    #[test]
    fn indefinite_articles() {
        let dims = FormDims::base(LanguageGender::Neuter, LanguageStartsWith::Consonant);
        let word = |lang, a| match article(lang, &dims, a) {
            ArticleWord::Word(w) => Some(w),
            _ => None,
        };
        assert_eq!(word(TurkicLanguage::Turkish, LanguageArticle::Indefinite), Some("Bir "));
        assert_eq!(word(TurkicLanguage::Kazakh, LanguageArticle::Indefinite), Some("Бір "));
        assert_eq!(word(TurkicLanguage::Turkish, LanguageArticle::Definite), None);
    }
}
