//! Declension capabilities and factory settings.

use std::path::Path;

use declina_protocol::{
    LanguageArticle, LanguageCase, LanguageGender, LanguageNumber, LanguagePosition,
    LanguagePossessive, LanguageStartsWith,
};
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Everything a declension family declares about its form space.
///
/// Families start from [`DeclensionConfig::default`] and override the handful
/// of values that differ.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclensionConfig {
    pub has_gender: bool,
    pub has_plural: bool,
    pub has_starts_with: bool,
    pub has_starts_with_in_adjective: bool,
    pub has_ends_with: bool,
    pub has_auto_derived_starts_with: bool,
    pub has_article: bool,
    pub has_article_in_noun_form: bool,
    pub article_in_noun_form_auto_derived: bool,
    pub has_possessive: bool,
    pub has_possessive_in_adjective: bool,
    pub has_capitalization: bool,
    pub has_classifiers: bool,
    pub is_inflected: bool,
    pub move_noun_inflection_to_first_modifier: bool,
    pub should_lowercase_entity_in_compound_nouns: bool,
    pub has_subject_gender_in_verb_conjugation: bool,
    pub infer_noun_def_article_from_particle: bool,

    /// `None` for languages without grammatical gender.
    pub required_genders: Option<Vec<LanguageGender>>,
    pub required_cases: Vec<LanguageCase>,
    pub allowed_cases: Vec<LanguageCase>,
    pub allowed_numbers: Vec<LanguageNumber>,
    pub allowed_article_types: Vec<LanguageArticle>,
    pub required_noun_articles: Vec<LanguageArticle>,
    pub required_possessives: Vec<LanguagePossessive>,
    pub required_starts_with: Vec<LanguageStartsWith>,

    pub default_gender: LanguageGender,
    pub default_starts_with: LanguageStartsWith,
    pub default_case: LanguageCase,
    pub default_article: LanguageArticle,
    pub default_possessive: LanguagePossessive,
    pub default_adjective_position: LanguagePosition,
}

impl Default for DeclensionConfig {
    fn default() -> Self {
        Self {
            has_gender: false,
            has_plural: true,
            has_starts_with: false,
            has_starts_with_in_adjective: false,
            has_ends_with: false,
            has_auto_derived_starts_with: false,
            has_article: false,
            has_article_in_noun_form: false,
            article_in_noun_form_auto_derived: false,
            has_possessive: false,
            has_possessive_in_adjective: false,
            has_capitalization: true,
            has_classifiers: false,
            is_inflected: true,
            move_noun_inflection_to_first_modifier: false,
            should_lowercase_entity_in_compound_nouns: false,
            has_subject_gender_in_verb_conjugation: false,
            infer_noun_def_article_from_particle: false,
            required_genders: None,
            required_cases: vec![LanguageCase::Nominative],
            allowed_cases: vec![LanguageCase::Nominative],
            allowed_numbers: vec![LanguageNumber::Singular, LanguageNumber::Plural],
            allowed_article_types: Vec::new(),
            required_noun_articles: vec![LanguageArticle::Zero],
            required_possessives: vec![LanguagePossessive::None],
            required_starts_with: vec![LanguageStartsWith::Consonant],
            default_gender: LanguageGender::Neuter,
            default_starts_with: LanguageStartsWith::Consonant,
            default_case: LanguageCase::Nominative,
            default_article: LanguageArticle::Zero,
            default_possessive: LanguagePossessive::None,
            default_adjective_position: LanguagePosition::Pre,
        }
    }
}

impl DeclensionConfig {
    pub fn has_required_cases(&self) -> bool {
        self.required_cases.len() > 1
    }

    pub fn has_allowed_cases(&self) -> bool {
        self.allowed_cases.len() > 1
    }

    /// Sets the required cases and makes them the allowed cases too.
    pub fn with_cases(mut self, cases: &[LanguageCase]) -> Self {
        let mut cases = cases.to_vec();
        cases.sort_unstable();
        cases.dedup();
        self.allowed_cases = cases.clone();
        self.required_cases = cases;
        self
    }

    pub fn with_genders(mut self, genders: &[LanguageGender], default: LanguageGender) -> Self {
        self.has_gender = true;
        self.required_genders = Some(genders.to_vec());
        self.default_gender = default;
        self
    }

    pub fn without_plural(mut self) -> Self {
        self.has_plural = false;
        self.allowed_numbers = vec![LanguageNumber::Singular];
        self
    }

    /// Genders to enumerate forms over; the default gender alone when the
    /// language has none.
    pub fn genders(&self) -> Vec<LanguageGender> {
        match &self.required_genders {
            Some(genders) if self.has_gender => genders.clone(),
            _ => vec![self.default_gender],
        }
    }

    pub fn allows_gender(&self, gender: LanguageGender) -> bool {
        self.required_genders.as_ref().is_some_and(|g| g.contains(&gender))
    }
}

/// Factory settings, loadable from TOML.
///
/// ```toml
/// fail_on_missing = true
/// arabic_accusative_alif = false
/// languages = ["en_US", "de", "eu"]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FactoryConfig {
    /// Reject languages with no declension mapping instead of falling back to
    /// the uninflected declension.
    pub fail_on_missing: bool,
    /// Append the final alif to indefinite Arabic accusatives.
    pub arabic_accusative_alif: bool,
    /// Locales to build; empty builds every registered language.
    pub languages: Vec<String>,
}

impl FactoryConfig {
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }
}
