//! Adjectives: modifiers that agree with the noun they describe.

use std::fmt;
use std::sync::Arc;

use declina_protocol::{FormOrdinal, LanguageNumber, LanguagePosition, LanguageStartsWith, TermType};
use log::debug;

use crate::declension::DeclensionCore;
use crate::error::{DeclensionError, Result};
use crate::family::{semitic, slavic, Family, ModifierValidation};
use crate::form::{AdjectiveForm, FormDims};
use crate::language::Language;
use crate::values::FormValues;

#[derive(Clone)]
pub struct Adjective {
    language: Language,
    core: Arc<DeclensionCore>,
    name: String,
    starts_with: LanguageStartsWith,
    position: LanguagePosition,
    values: FormValues,
}

impl fmt::Debug for Adjective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Adjective")
            .field("language", &self.language)
            .field("name", &self.name)
            .field("starts_with", &self.starts_with)
            .field("position", &self.position)
            .field("values", &self.values.entries())
            .finish()
    }
}

impl PartialEq for Adjective {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.starts_with == other.starts_with
            && self.position == other.position
            && self.values.entries() == other.values.entries()
    }
}

impl Adjective {
    pub(crate) fn new(
        language: Language,
        core: Arc<DeclensionCore>,
        name: &str,
        starts_with: LanguageStartsWith,
        position: LanguagePosition,
    ) -> Self {
        Self {
            language,
            core,
            name: name.to_string(),
            starts_with,
            position,
            values: FormValues::default(),
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn starts_with(&self) -> LanguageStartsWith {
        self.starts_with
    }

    pub fn position(&self) -> LanguagePosition {
        self.position
    }

    pub fn is_skinny(&self) -> bool {
        self.values.is_skinny()
    }

    pub fn string(&self, form: &AdjectiveForm) -> Option<&str> {
        form.ordinal().and_then(|ordinal| self.values.get(ordinal))
    }

    /// Fails once the adjective has been compacted.
    pub fn set_string(&mut self, value: impl Into<String>, form: &AdjectiveForm) -> Result<()> {
        debug_assert_eq!(form.term(), TermType::Adjective, "adjective values are set with adjective forms");
        let Some(ordinal) = form.ordinal() else {
            debug!("adjective {} ignores a value for unregistered form {form}", self.name);
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
            debug!("adjective {} is compacted; dropped value for form {}", self.name, ordinal.get());
        }
    }

    fn default_form(&self) -> Option<AdjectiveForm> {
        let config = self.core.config();
        self.core.adjective_form(
            config.default_starts_with,
            config.default_gender,
            LanguageNumber::Singular,
            config.default_case,
            config.default_article,
            config.default_possessive,
        )
    }

    /// The value at the singular form with every other dimension at its
    /// default.
    pub fn default_value(&self) -> Option<&str> {
        self.default_form().and_then(|form| self.string(&form))
    }

    pub fn all_defined_values(&self) -> Vec<(AdjectiveForm, &str)> {
        self.values
            .entries()
            .into_iter()
            .filter_map(|(ordinal, value)| Some((self.core.form(TermType::Adjective, ordinal)?, value)))
            .collect()
    }

    pub fn make_skinny(&mut self) {
        self.values.make_skinny();
    }

    pub fn clone_unskinny(&self) -> Adjective {
        Adjective { values: self.values.to_loading(), ..self.clone() }
    }

    /// The closest stored value for a missing form, with the dimensions it
    /// was found at.
    ///
    /// Tries the default article, starts-with, case, possessive and gender in
    /// turn, then the other number at the default case.
    fn neighbour_value(&self, form: &AdjectiveForm) -> Option<(String, FormDims)> {
        let config = self.core.config();
        let dims = *form.dims();
        let mut candidates = Vec::with_capacity(6);
        if (config.has_article || config.has_article_in_noun_form) && dims.article != config.default_article {
            candidates.push(dims.with_article(config.default_article));
        }
        if config.has_starts_with && dims.starts_with != config.default_starts_with {
            candidates.push(dims.with_starts_with(config.default_starts_with));
        }
        if config.has_allowed_cases() && dims.case != config.default_case {
            candidates.push(dims.with_case(config.default_case));
        }
        if config.has_possessive_in_adjective && dims.possessive != config.default_possessive {
            candidates.push(dims.with_possessive(config.default_possessive));
        }
        if config.has_gender && dims.gender != config.default_gender {
            candidates.push(dims.with_gender(config.default_gender));
        }
        if config.has_plural && dims.number != LanguageNumber::Singular {
            let swapped = match dims.number {
                LanguageNumber::Plural => LanguageNumber::Singular,
                _ => LanguageNumber::Plural,
            };
            candidates.push(dims.with_number(swapped).with_case(config.default_case));
        }
        candidates.into_iter().find_map(|candidate| {
            let source = self.core.adjective_form_for(&candidate)?;
            let value = self.string(&source)?;
            Some((value.to_string(), *source.dims()))
        })
    }

    /// Adjusts a value borrowed from `source` for the form it fills.
    fn derive_default_string(&self, form: &FormDims, value: &str, source: &FormDims) -> String {
        match self.core.family() {
            Family::Hebrew => semitic::derive_definite(semitic::HEBREW_DEFINITE_PREFIX, form, value, source),
            Family::Arabic { accusative_alif } => semitic::arabic_derive_adjective(form, value, source, accusative_alif),
            Family::Bulgarian => slavic::bulgarian_derive_adjective(form, value, source),
            _ => value.to_string(),
        }
    }

    /// Fills every missing form from its neighbours or the default value.
    ///
    /// Missing required forms are logged, not rejected. Returns `false` when
    /// a gap cannot be filled, unless the family accepts adjectives as they
    /// come.
    pub fn validate(&mut self, name: &str) -> bool {
        let core = Arc::clone(&self.core);
        let layout = core.layout();
        if layout.adjective_validation == ModifierValidation::AnyValue {
            if self.values.is_empty() {
                debug!("adjective {name} has no values in {}", self.language);
                return false;
            }
            return true;
        }
        let fill_always = layout.adjective_validation == ModifierValidation::FillAlways;
        let required = layout.adjective_required.pick(&layout.adjectives);
        let default = self.default_form();

        for (index, form) in core.adjectives().iter().enumerate() {
            if self.string(form).is_some() {
                continue;
            }
            if required.contains(&index) {
                debug!("adjective {name} is missing required form {form} in {}", self.language);
            }
            let found = self.neighbour_value(form).or_else(|| {
                let default = default?;
                let value = self.string(&default)?;
                debug!("adjective {name} uses its default value for {form}");
                Some((value.to_string(), *default.dims()))
            });
            let Some((value, source)) = found else {
                debug!("adjective {name} has no value to fill {form} in {}", self.language);
                if fill_always {
                    continue;
                }
                return false;
            };
            let derived = self.derive_default_string(form.dims(), &value, &source);
            if let Some(ordinal) = form.ordinal() {
                self.store(ordinal, derived);
            }
        }
        true
    }
}

impl fmt::Display for Adjective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Adjective-{}-'{}'", self.language.locale(), self.default_value().unwrap_or(&self.name))
    }
}
