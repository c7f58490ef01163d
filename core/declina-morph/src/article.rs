//! Articles supplied by the dictionary, one word per article form.

use std::fmt;
use std::sync::Arc;

use declina_protocol::{FormOrdinal, LanguageArticle, LanguageNumber, TermType};
use log::{debug, info};

use crate::declension::DeclensionCore;
use crate::error::{DeclensionError, Result};
use crate::family::ModifierValidation;
use crate::form::ArticleForm;
use crate::language::Language;
use crate::values::FormValues;

#[derive(Clone)]
pub struct Article {
    language: Language,
    core: Arc<DeclensionCore>,
    name: String,
    article_type: LanguageArticle,
    values: FormValues,
}

impl fmt::Debug for Article {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Article")
            .field("language", &self.language)
            .field("name", &self.name)
            .field("article_type", &self.article_type)
            .field("values", &self.values.entries())
            .finish()
    }
}

impl PartialEq for Article {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.article_type == other.article_type
            && self.values.entries() == other.values.entries()
    }
}

impl Article {
    pub(crate) fn new(language: Language, core: Arc<DeclensionCore>, name: &str, article_type: LanguageArticle) -> Self {
        Self {
            language,
            core,
            name: name.to_string(),
            article_type,
            values: FormValues::default(),
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn article_type(&self) -> LanguageArticle {
        self.article_type
    }

    pub fn is_skinny(&self) -> bool {
        self.values.is_skinny()
    }

    pub fn string(&self, form: &ArticleForm) -> Option<&str> {
        form.ordinal().and_then(|ordinal| self.values.get(ordinal))
    }

    pub fn set_string(&mut self, value: impl Into<String>, form: &ArticleForm) -> Result<()> {
        debug_assert_eq!(form.term(), TermType::Article, "article values are set with article forms");
        let Some(ordinal) = form.ordinal() else {
            debug!("article {} ignores a value for unregistered form {form}", self.name);
            return Ok(());
        };
        if self.values.is_skinny() {
            return Err(DeclensionError::Frozen { name: self.name.clone() });
        }
        self.store(ordinal, value.into());
        Ok(())
    }

    fn store(&mut self, ordinal: FormOrdinal, value: String) {
        if !self.values.insert(ordinal, value) {
            debug!("article {} is compacted; dropped value for form {}", self.name, ordinal.get());
        }
    }

    fn default_form(&self) -> Option<ArticleForm> {
        let config = self.core.config();
        self.core.article_form(
            config.default_starts_with,
            config.default_gender,
            LanguageNumber::Singular,
            config.default_case,
        )
    }

    pub fn default_value(&self) -> Option<&str> {
        self.default_form().and_then(|form| self.string(&form))
    }

    pub fn all_defined_values(&self) -> Vec<(ArticleForm, &str)> {
        self.values
            .entries()
            .into_iter()
            .filter_map(|(ordinal, value)| Some((self.core.form(TermType::Article, ordinal)?, value)))
            .collect()
    }

    pub fn make_skinny(&mut self) {
        self.values.make_skinny();
    }

    pub fn clone_unskinny(&self) -> Article {
        Article { values: self.values.to_loading(), ..self.clone() }
    }

    fn neighbour_value(&self, form: &ArticleForm) -> Option<String> {
        let config = self.core.config();
        let dims = *form.dims();
        let mut candidates = Vec::with_capacity(4);
        if config.has_starts_with && dims.starts_with != config.default_starts_with {
            candidates.push(dims.with_starts_with(config.default_starts_with));
        }
        if config.has_gender && dims.gender != config.default_gender {
            candidates.push(dims.with_gender(config.default_gender));
        }
        if config.has_allowed_cases() && dims.case != config.default_case {
            candidates.push(dims.with_case(config.default_case));
        }
        if config.has_plural && dims.number != LanguageNumber::Singular {
            candidates.push(dims.with_number(LanguageNumber::Singular).with_case(config.default_case));
        }
        candidates.into_iter().find_map(|candidate| {
            let source = self.core.article_form(candidate.starts_with, candidate.gender, candidate.number, candidate.case)?;
            self.string(&source).map(str::to_string)
        })
    }

    /// Fills every missing form from a neighbouring form or the default
    /// value; fails when neither exists.
    pub fn validate(&mut self, name: &str) -> bool {
        let core = Arc::clone(&self.core);
        let layout = core.layout();
        if layout.article_validation == ModifierValidation::AnyValue {
            return !self.values.is_empty();
        }
        let fill_always = layout.article_validation == ModifierValidation::FillAlways;
        let required = layout.article_required.pick(&layout.articles);
        let default = self.default_value().map(str::to_string);

        for (index, form) in core.articles().iter().enumerate() {
            if self.string(form).is_some() {
                continue;
            }
            if required.contains(&index) {
                info!("article {name} is missing required form {form} in {}", self.language);
            }
            let Some(value) = self.neighbour_value(form).or_else(|| default.clone()) else {
                info!("article {name} has no value to fill {form} in {}", self.language);
                if fill_always {
                    continue;
                }
                return false;
            };
            if let Some(ordinal) = form.ordinal() {
                self.store(ordinal, value);
            }
        }
        true
    }
}

impl fmt::Display for Article {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Article-{}-'{}'", self.language.locale(), self.default_value().unwrap_or(&self.name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FactoryConfig;
    use crate::declension::{LanguageDeclension, StandardDeclension};
    use crate::family::Family;
    use declina_protocol::LanguageCase::Nominative;
    use declina_protocol::LanguageGender::{Feminine, Masculine};
    use declina_protocol::LanguageNumber::{Plural, Singular};
    use declina_protocol::LanguageStartsWith::{Consonant, Vowel};

    fn declension(locale: &str) -> StandardDeclension {
        let language = Language::from_locale(locale).unwrap();
        let family = Family::for_language(language.language_code(), &FactoryConfig::default()).unwrap();
        StandardDeclension::build(language, family).unwrap()
    }

    #[test]
    fn gaps_fill_from_neighbours() {
        let fr = declension("fr");
        let mut the = fr.create_article("the", LanguageArticle::Definite);
        let form = |sw, g, n| fr.article_form(sw, g, n, Nominative).unwrap();
        the.set_string("la ", &form(Consonant, Feminine, Singular)).unwrap();
        the.set_string("le ", &form(Consonant, Masculine, Singular)).unwrap();
        the.set_string("l'", &form(Vowel, Feminine, Singular)).unwrap();
        the.set_string("les ", &form(Consonant, Feminine, Plural)).unwrap();

        assert!(the.validate("the"));
        assert_eq!(the.string(&form(Vowel, Masculine, Singular)), Some("le "));
        assert_eq!(the.string(&form(Consonant, Masculine, Plural)), Some("les "));
        assert_eq!(the.string(&form(Vowel, Feminine, Plural)), Some("les "));
        assert_eq!(the.default_value(), Some("la "));
        assert_eq!(the.all_defined_values().len(), fr.article_forms().len());
    }

    #[test]
    fn empty_article_fails() {
        let es = declension("es");
        let mut a = es.create_article("a", LanguageArticle::Indefinite);
        assert!(!a.validate("a"));
        assert_eq!(a.article_type(), LanguageArticle::Indefinite);
        assert_eq!(a.to_string(), "Article-es-'a'");
    }

    #[test]
    fn compacted_articles_are_frozen() {
        let es = declension("es");
        let mut the = es.create_article("the", LanguageArticle::Definite);
        let form = es.article_form(Consonant, Feminine, Singular, Nominative).unwrap();
        the.set_string("la", &form).unwrap();
        the.make_skinny();
        assert!(the.is_skinny());
        assert!(matches!(the.set_string("el", &form), Err(DeclensionError::Frozen { .. })));
        assert_eq!(the.clone_unskinny(), the);
    }
}
