//! Armenian: seven cases and a suffixed definite article, no gender.

use declina_protocol::{LanguageArticle, LanguageCase};

use super::{base, grid, Axis, FormLayout, Lookup, NounValidation, Selection, SG_PL};
use crate::config::DeclensionConfig;
use crate::form::{Dim, FormDims, KeyStyle};

use LanguageCase::{Ablative, Accusative, Dative, Genitive, Instrumental, Locative, Nominative};

const ARTICLES: &[LanguageArticle] = &[LanguageArticle::Zero, LanguageArticle::Definite];

pub(crate) fn config() -> DeclensionConfig {
    DeclensionConfig {
        has_article_in_noun_form: true,
        allowed_article_types: ARTICLES.to_vec(),
        required_noun_articles: ARTICLES.to_vec(),
        ..DeclensionConfig::default()
    }
    .with_cases(&[Nominative, Accusative, Dative, Locative, Genitive, Ablative, Instrumental])
}

/// The article lives in the noun, so there are no article forms at all.
pub(crate) fn layout(config: &DeclensionConfig) -> FormLayout {
    let nouns = grid(
        base(config),
        &[
            Axis::Number(SG_PL),
            Axis::Case(&config.required_cases),
            Axis::Article(ARTICLES),
        ],
    );
    FormLayout {
        noun_lookup: Lookup::StrictOn(&[Dim::Article]),
        field: Selection::Where(FormDims::is_nominative_zero),
        noun_validation: NounValidation::Strict,
        ..FormLayout::nouns(nouns, KeyStyle::dashed(&[Dim::Number, Dim::Case, Dim::Article]), config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn armenian_layout_shape() {
        let config = config();
        let layout = layout(&config);
        // 2 numbers x 7 cases x 2 articles
        assert_eq!(layout.nouns.len(), 28);
        assert_eq!(layout.field.pick(&layout.nouns), vec![0, 14]);
        assert_eq!(layout.other.pick(&layout.nouns), vec![0]);
        assert!(layout.articles.is_empty());
        assert_eq!(layout.adjectives.len(), 1);
        assert_eq!(layout.noun_key.render(&layout.nouns[1]), "0-n-d");
        assert!(!config.has_gender);
        assert!(!config.has_article);
    }
}
