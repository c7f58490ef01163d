//! Dravidian and Indo-Aryan languages of India.

use declina_protocol::{LanguageArticle, LanguageCase, LanguageGender};

use super::{base, grid, Axis, FormLayout, Lookup, ModifierValidation, NounValidation, Selection, SG_PL};
use crate::config::DeclensionConfig;
use crate::form::{Dim, FormDims, KeyStyle};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DravidianLanguage {
    Tamil,
    Telugu,
    Kannada,
    Malayalam,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndoAryanLanguage {
    Gujarati,
    Marathi,
    Punjabi,
}

use LanguageCase::{
    Ablative, Accusative, Dative, Genitive, Instrumental, Locative, Nominative, Objective, Vocative,
};
use LanguageGender::{Feminine, Masculine, Neuter};

const NOUN_KEY: KeyStyle = KeyStyle::dashed(&[Dim::Number, Dim::Case]);
const ADJECTIVE_KEY: KeyStyle = KeyStyle::dashed(&[Dim::Gender, Dim::Number, Dim::Case]);

impl DravidianLanguage {
    fn cases(self) -> &'static [LanguageCase] {
        match self {
            DravidianLanguage::Tamil => {
                &[Nominative, Genitive, Accusative, Dative, Ablative, Instrumental, Locative]
            }
            // ablative and instrumental have merged
            DravidianLanguage::Telugu => &[Nominative, Genitive, Accusative, Dative, Ablative, Locative],
            DravidianLanguage::Kannada => &[Nominative, Genitive, Accusative, Dative, Locative],
            DravidianLanguage::Malayalam => {
                &[Nominative, Genitive, Accusative, Dative, Instrumental, Locative]
            }
        }
    }
}

impl IndoAryanLanguage {
    fn cases(self) -> &'static [LanguageCase] {
        match self {
            IndoAryanLanguage::Gujarati => &[Nominative, Objective, Locative],
            IndoAryanLanguage::Marathi => {
                &[Nominative, Accusative, Instrumental, Dative, Ablative, Genitive, Locative]
            }
            IndoAryanLanguage::Punjabi => &[Nominative, Accusative, Instrumental, Ablative, Vocative],
        }
    }
}

pub(crate) fn dravidian_config(lang: DravidianLanguage) -> DeclensionConfig {
    DeclensionConfig::default()
        .with_cases(lang.cases())
        .with_genders(&[Neuter, Masculine, Feminine], Neuter)
}

/// Every noun form must be supplied; nothing is derived.
pub(crate) fn dravidian_layout(config: &DeclensionConfig) -> FormLayout {
    let nouns = grid(base(config), &[Axis::Number(SG_PL), Axis::Case(&config.required_cases)]);
    FormLayout {
        field: Selection::Where(FormDims::is_nominative),
        other: Selection::All,
        noun_validation: NounValidation::Strict,
        ..FormLayout::nouns(nouns, NOUN_KEY, config)
    }
}

pub(crate) fn indo_aryan_config(lang: IndoAryanLanguage) -> DeclensionConfig {
    DeclensionConfig::default()
        .with_cases(lang.cases())
        .with_genders(&[Neuter, Feminine, Masculine], Masculine)
}

pub(crate) fn indo_aryan_layout(config: &DeclensionConfig) -> FormLayout {
    let nouns = grid(base(config), &[Axis::Number(SG_PL), Axis::Case(&config.required_cases)]);
    let adjectives = grid(
        base(config),
        &[
            Axis::Number(SG_PL),
            Axis::Gender(&config.genders()),
            Axis::Case(&config.required_cases),
        ],
    );
    FormLayout {
        noun_lookup: Lookup::StrictOn(&[Dim::Possessive]),
        field: Selection::Where(FormDims::is_nominative),
        adjectives,
        adjective_key: ADJECTIVE_KEY,
        adjective_required: Selection::Where(singular_neuter_nominative),
        adjective_validation: ModifierValidation::FillAlways,
        ..FormLayout::nouns(nouns, NOUN_KEY, config)
    }
}

fn singular_neuter_nominative(dims: &FormDims) -> bool {
    !dims.number.is_plural() && dims.gender == Neuter && dims.case == Nominative
}

/// Hindi and Urdu decline in a direct and an oblique case, written here as
/// the nominative and the objective.
pub(crate) fn hindi_urdu_config() -> DeclensionConfig {
    DeclensionConfig::default()
        .with_cases(&[Nominative, Objective])
        .with_genders(&[Feminine, Masculine], Feminine)
}

pub(crate) fn hindi_urdu_layout(config: &DeclensionConfig) -> FormLayout {
    let nouns = grid(base(config), &[Axis::Number(SG_PL), Axis::Case(&[Nominative, Objective])]);
    let adjectives = grid(
        base(config),
        &[
            Axis::Case(&[Nominative, Objective]),
            Axis::Number(SG_PL),
            Axis::Gender(&[Masculine, Feminine]),
        ],
    );
    FormLayout {
        noun_lookup: Lookup::StrictOn(&[Dim::Article, Dim::Possessive]),
        other: Selection::All,
        noun_validation: NounValidation::DeriveFromNominative,
        adjectives,
        adjective_key: ADJECTIVE_KEY,
        adjective_lookup: Lookup::StrictOn(&[Dim::Article, Dim::StartsWith]),
        adjective_required: Selection::Where(singular_feminine_direct),
        ..FormLayout::nouns(nouns, NOUN_KEY, config)
    }
}

fn singular_feminine_direct(dims: &FormDims) -> bool {
    !dims.number.is_plural() && dims.gender == Feminine && dims.case == Nominative
}

/// Bengali writes its definite article as a suffix, so the noun carries it
/// and the article word has to come from the dictionary.
pub(crate) fn bengali_config() -> DeclensionConfig {
    DeclensionConfig {
        has_article: true,
        has_article_in_noun_form: true,
        allowed_article_types: vec![LanguageArticle::Zero, LanguageArticle::Definite],
        required_noun_articles: vec![LanguageArticle::Zero, LanguageArticle::Definite],
        ..DeclensionConfig::default()
    }
    .with_cases(&[Nominative, Objective, Genitive, Locative])
}

pub(crate) fn bengali_layout(config: &DeclensionConfig) -> FormLayout {
    let nouns = grid(
        base(config),
        &[
            Axis::Number(&config.allowed_numbers),
            Axis::Case(&config.required_cases),
            Axis::Article(&config.allowed_article_types),
        ],
    );
    FormLayout {
        noun_lookup: Lookup::StrictOn(&[Dim::Article]),
        field: Selection::Where(FormDims::is_nominative_zero),
        other: Selection::All,
        ..FormLayout::nouns(nouns, KeyStyle::dashed(&[Dim::Number, Dim::Case, Dim::Article]), config)
    }
    .with_simple_article(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dravidian_case_sets() {
        let ta = dravidian_config(DravidianLanguage::Tamil);
        assert_eq!(ta.required_cases.len(), 7);
        assert_eq!(ta.required_cases[0], Nominative);
        let kn = dravidian_config(DravidianLanguage::Kannada);
        assert!(!kn.required_cases.contains(&Ablative));
        assert_eq!(kn.default_gender, Neuter);

        let layout = dravidian_layout(&ta);
        assert_eq!(layout.nouns.len(), 14);
        assert_eq!(layout.field.pick(&layout.nouns), vec![0, 7]);
        assert_eq!(layout.other.pick(&layout.nouns).len(), 14);
        assert_eq!(layout.noun_validation, NounValidation::Strict);
        assert_eq!(layout.noun_key.render(&layout.nouns[9]), "1-g");
    }

    #[test]
    fn indo_aryan_adjectives() {
        let config = indo_aryan_config(IndoAryanLanguage::Gujarati);
        assert_eq!(config.default_gender, Masculine);
        let layout = indo_aryan_layout(&config);
        assert_eq!(layout.nouns.len(), 6);
        // 2 numbers x 3 genders x 3 cases
        assert_eq!(layout.adjectives.len(), 18);
        assert_eq!(layout.adjective_required.pick(&layout.adjectives), vec![0]);
        assert_eq!(layout.adjective_validation, ModifierValidation::FillAlways);
    }

    #[test]
    fn hindi_modifier_order() {
        let config = hindi_urdu_config();
        let layout = hindi_urdu_layout(&config);
        assert_eq!(layout.nouns.len(), 4);
        assert_eq!(layout.adjectives.len(), 8);
        let first = &layout.adjectives[0];
        assert_eq!((first.gender, first.number.is_plural(), first.case), (Masculine, false, Nominative));
        assert_eq!(layout.adjectives[4].case, Objective);
        assert_eq!(layout.adjective_required.pick(&layout.adjectives), vec![1]);
        assert_eq!(config.default_gender, Feminine);
    }

    #[test]
    fn bengali_nouns_carry_articles() {
        let config = bengali_config();
        let layout = bengali_layout(&config);
        // 2 numbers x 4 cases x 2 articles
        assert_eq!(layout.nouns.len(), 16);
        assert_eq!(layout.field.pick(&layout.nouns), vec![0, 8]);
        assert_eq!(layout.noun_key.render(&layout.nouns[1]), "0-n-d");
        assert_eq!(layout.articles.len(), 1);
        assert!(!config.has_gender);
    }
}
