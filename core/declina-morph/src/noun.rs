//! Nouns and the values a dictionary supplies for them.
//!
//! A noun stores only the forms it was given. Reads apply the few derivations
//! a family performs on the fly (Basque suffixes, Bulgarian definite endings,
//! Arabic accusatives, separate article words), and [`Noun::validate`] fills
//! or rejects the gaps once loading is done.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use declina_protocol::{
    FormOrdinal, LanguageArticle, LanguageCase, LanguageGender, LanguageNumber, LanguagePossessive,
    LanguageStartsWith, NounType, StemFlags, TermType,
};
use log::{debug, info, warn};

use crate::declension::DeclensionCore;
use crate::error::{DeclensionError, Result};
use crate::family::{basque, greek_starts_with, korean, semitic, slavic, Family, GenderPolicy, NounValidation};
use crate::form::{FormDims, FormSlot, NounForm};
use crate::language::Language;
use crate::values::FormValues;

use LanguageArticle::{Definite, Indefinite, Zero};
use LanguageNumber::{Plural, Singular};

/// State derived from the base value when it is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StemState {
    None,
    Basque(StemFlags),
    Korean(LanguageStartsWith),
}

#[derive(Clone)]
pub struct Noun {
    language: Language,
    core: Arc<DeclensionCore>,
    name: String,
    plural_alias: Option<String>,
    noun_type: NounType,
    entity_name: Option<String>,
    gender: LanguageGender,
    starts_with: LanguageStartsWith,
    access: Option<String>,
    is_standard_field: bool,
    is_copied_from_default: bool,
    values: FormValues,
    stem: StemState,
}

impl fmt::Debug for Noun {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Noun")
            .field("language", &self.language)
            .field("name", &self.name)
            .field("noun_type", &self.noun_type)
            .field("gender", &self.gender)
            .field("starts_with", &self.starts_with)
            .field("values", &self.values.entries())
            .finish()
    }
}

/// Nouns are equal when their name, agreement and stored values are.
impl PartialEq for Noun {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.gender == other.gender
            && self.starts_with == other.starts_with
            && self.values.entries() == other.values.entries()
    }
}

impl Noun {
    pub(crate) fn new(
        language: Language,
        core: Arc<DeclensionCore>,
        name: &str,
        noun_type: NounType,
        gender: LanguageGender,
        starts_with: LanguageStartsWith,
    ) -> Self {
        Self {
            language,
            core,
            name: name.to_string(),
            plural_alias: None,
            noun_type,
            entity_name: None,
            gender,
            starts_with,
            access: None,
            is_standard_field: false,
            is_copied_from_default: false,
            values: FormValues::default(),
            stem: StemState::None,
        }
    }

    pub fn with_plural_alias(mut self, alias: impl Into<String>) -> Self {
        self.plural_alias = Some(alias.into());
        self
    }

    pub fn with_entity_name(mut self, entity: impl Into<String>) -> Self {
        self.entity_name = Some(entity.into());
        self
    }

    pub fn with_access(mut self, access: impl Into<String>) -> Self {
        self.access = Some(access.into());
        self
    }

    pub fn with_standard_field(mut self, standard: bool) -> Self {
        self.is_standard_field = standard;
        self
    }

    pub fn with_copied_from_default(mut self, copied: bool) -> Self {
        self.is_copied_from_default = copied;
        self
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn plural_alias(&self) -> Option<&str> {
        self.plural_alias.as_deref()
    }

    pub fn noun_type(&self) -> NounType {
        self.noun_type
    }

    pub fn entity_name(&self) -> Option<&str> {
        self.entity_name.as_deref()
    }

    pub fn gender(&self) -> LanguageGender {
        self.gender
    }

    pub fn starts_with(&self) -> LanguageStartsWith {
        self.starts_with
    }

    pub fn access(&self) -> Option<&str> {
        self.access.as_deref()
    }

    pub fn is_standard_field(&self) -> bool {
        self.is_standard_field
    }

    pub fn is_copied_from_default(&self) -> bool {
        self.is_copied_from_default
    }

    /// How the noun ends, for languages whose particles follow it.
    pub fn ends_with(&self) -> Option<LanguageStartsWith> {
        match self.stem {
            StemState::Korean(ends_with) => Some(ends_with),
            _ => None,
        }
    }

    /// The cached Basque stem classification.
    pub fn stem_flags(&self) -> Option<StemFlags> {
        match self.stem {
            StemState::Basque(flags) => Some(flags),
            _ => None,
        }
    }

    pub fn is_skinny(&self) -> bool {
        self.values.is_skinny()
    }

    fn family(&self) -> Family {
        self.core.family()
    }

    fn stored(&self, form: &NounForm) -> Option<&str> {
        form.ordinal().and_then(|ordinal| self.values.get(ordinal))
    }

    fn ordinal_of(&self, number: LanguageNumber, case: LanguageCase, possessive: LanguagePossessive, article: LanguageArticle) -> Option<FormOrdinal> {
        self.core.exact_noun_form(number, case, possessive, article)?.ordinal()
    }

    /// The value of a registered form, including values a family always
    /// derives from another stored form.
    pub fn exact_string(&self, form: &NounForm) -> Option<Cow<'_, str>> {
        debug_assert_eq!(form.term(), TermType::Noun, "noun values are read with noun forms");
        form.ordinal()?;
        match self.family() {
            Family::Bulgarian if form.article() == Definite => {
                let indefinite = self.ordinal_of(form.number(), LanguageCase::Nominative, LanguagePossessive::None, Zero)?;
                let value = self.values.get(indefinite)?;
                let dims = form.dims().with_gender(self.gender);
                Some(Cow::Owned(slavic::bulgarian_definite_noun(value, &dims)))
            }
            Family::Arabic { accusative_alif } if form.case() == LanguageCase::Accusative => {
                if let Some(value) = self.stored(form) {
                    return Some(Cow::Borrowed(value));
                }
                let nominative =
                    self.ordinal_of(form.number(), LanguageCase::Nominative, form.possessive(), form.article())?;
                let value = self.values.get(nominative)?;
                if form.article() == Definite {
                    Some(Cow::Borrowed(value))
                } else {
                    Some(Cow::Owned(semitic::accusative_alif(value, accusative_alif)))
                }
            }
            _ => self.stored(form).map(Cow::Borrowed),
        }
    }

    /// The value to display for `form`, or `None` when the noun has none.
    pub fn string(&self, form: &NounForm) -> Option<Cow<'_, str>> {
        match form.slot() {
            FormSlot::Legacy { base } => {
                let value = self.values.get(base)?;
                Some(self.with_article_word(value, form))
            }
            _ if self.family() == Family::Basque => self.basque_string(form),
            FormSlot::Dynamic => None,
            FormSlot::Registered(_) => self.exact_string(form),
        }
    }

    fn basque_string(&self, form: &NounForm) -> Option<Cow<'_, str>> {
        if let Some(value) = self.stored(form) {
            return Some(Cow::Borrowed(value));
        }
        let stem = self.default_string(false)?;
        let flags = match self.stem {
            StemState::Basque(flags) => flags,
            _ => basque::stem_flags(&stem.to_lowercase()),
        };
        Some(Cow::Owned(basque::render_with_flags(&stem, form.case(), form.number(), form.article(), flags)))
    }

    /// Prepends the article word a legacy form stands for.
    fn with_article_word<'a>(&self, value: &'a str, form: &NounForm) -> Cow<'a, str> {
        let dims = FormDims {
            gender: self.gender,
            starts_with: self.starts_with,
            ..*form.dims()
        };
        let family = self.family();
        let word = match family.default_article(self.language, &dims, form.article()) {
            Ok(Some(word)) if !word.is_empty() => word,
            Ok(_) => return Cow::Borrowed(value),
            Err(err) => {
                debug!("noun {} has no article word for {form}: {err}", self.name);
                return Cow::Borrowed(value);
            }
        };
        if family.spaces_legacy_article() {
            Cow::Owned(format!("{word} {value}"))
        } else {
            let lower = family.format_lowercase(value, form.article(), self.core.config());
            Cow::Owned(format!("{word}{lower}"))
        }
    }

    /// The nominative value for a number, falling back to the singular.
    pub fn default_string(&self, is_plural: bool) -> Option<Cow<'_, str>> {
        let number = if is_plural { Plural } else { Singular };
        let value = if self.family() == Family::Basque {
            let order: &[LanguageArticle] = if is_plural { &[Definite] } else { &[Indefinite, Zero, Definite] };
            order
                .iter()
                .map(|&article| basque::canonical_noun(number, article))
                .find_map(|i| self.values.get(FormOrdinal::new(i as u32)))
                .map(Cow::Borrowed)
        } else {
            let config = self.core.config();
            let form = self.core.approximate_noun_form(
                number,
                LanguageCase::Nominative,
                config.default_possessive,
                config.default_article,
            );
            self.string(&form)
        };
        if value.is_none() && is_plural {
            debug!("noun {} has no plural in {}", self.name, self.language);
            return self.default_string(false);
        }
        value
    }

    /// Stores a value for a registered form.
    ///
    /// Forms without an ordinal and forms the family always derives are
    /// ignored. Fails once the noun has been compacted.
    pub fn set_string(&mut self, value: impl Into<String>, form: &NounForm) -> Result<()> {
        debug_assert_eq!(form.term(), TermType::Noun, "noun values are set with noun forms");
        let Some(ordinal) = form.ordinal() else {
            debug!("noun {} ignores a value for unregistered form {form}", self.name);
            return Ok(());
        };
        if self.values.is_skinny() {
            return Err(DeclensionError::Frozen { name: self.name.clone() });
        }
        if self.family() == Family::Bulgarian && form.article() == Definite {
            debug!("noun {} derives its definite forms; ignoring {form}", self.name);
            return Ok(());
        }
        let value = value.into();
        self.update_stem(ordinal, &value);
        self.store(ordinal, value);
        if self.family() == Family::Basque {
            self.refresh_basque_stem();
        }
        Ok(())
    }

    fn store(&mut self, ordinal: FormOrdinal, value: String) {
        if !self.values.insert(ordinal, value) {
            debug!("noun {} is compacted; dropped value for form {}", self.name, ordinal.get());
        }
    }

    /// Basque stems classify the value the noun renders from.
    fn refresh_basque_stem(&mut self) {
        if let Some(flags) = self.default_string(false).map(|stem| basque::stem_flags(&stem.to_lowercase())) {
            self.stem = StemState::Basque(flags);
        }
    }

    fn update_stem(&mut self, ordinal: FormOrdinal, value: &str) {
        let base = ordinal.get() == 0;
        match self.family() {
            Family::Korean if base => self.stem = StemState::Korean(korean::ends_with(value)),
            Family::Greek if base => {
                self.starts_with = if greek_starts_with(&value.to_lowercase()) {
                    LanguageStartsWith::Special
                } else {
                    LanguageStartsWith::Consonant
                };
            }
            _ => {}
        }
    }

    /// Every stored value with its form, ordered by ordinal.
    pub fn all_defined_values(&self) -> Vec<(NounForm, &str)> {
        self.values
            .entries()
            .into_iter()
            .filter_map(|(ordinal, value)| Some((self.core.form(TermType::Noun, ordinal)?, value)))
            .collect()
    }

    /// Compacts the stored values; the noun is read-only afterwards.
    pub fn make_skinny(&mut self) {
        self.values.make_skinny();
    }

    /// A modifiable copy of a compacted noun.
    pub fn clone_unskinny(&self) -> Noun {
        Noun { values: self.values.to_loading(), ..self.clone() }
    }

    /// A modifiable copy with its agreement or some values replaced.
    ///
    /// The starts-with override is applied after the values, so it wins over
    /// any classification derived from them.
    pub fn clone_with(
        &self,
        gender: Option<LanguageGender>,
        starts_with: Option<LanguageStartsWith>,
        overrides: &[(NounForm, String)],
    ) -> Result<Noun> {
        let mut noun = self.clone_unskinny();
        if let Some(gender) = gender {
            noun.gender = gender;
        }
        for (form, value) in overrides {
            noun.set_string(value.clone(), form)?;
        }
        if let Some(starts_with) = starts_with {
            noun.starts_with = starts_with;
        }
        Ok(noun)
    }

    /// A value for `form` taken from a neighbouring form, never the form
    /// itself: possessive, then article, then case are dropped, then the
    /// number is swapped.
    pub fn close_but_no_cigar_string(&self, form: &NounForm) -> Option<String> {
        let core = &self.core;
        let config = core.config();
        let lookup = |number, case, possessive, article| {
            let base = core.exact_noun_form(number, case, possessive, article)?;
            self.string(&base).map(Cow::into_owned)
        };
        let (number, case, possessive, article) = (form.number(), form.case(), form.possessive(), form.article());

        let mut value = None;
        if possessive != config.default_possessive {
            value = lookup(number, case, config.default_possessive, article);
        }
        if value.is_none() && article != config.default_article {
            value = lookup(number, case, possessive, config.default_article);
        }
        if value.is_none() && config.has_allowed_cases() && case != config.default_case {
            value = lookup(number, config.default_case, possessive, article);
        }
        if value.is_none() && config.has_plural && number != Singular {
            let swapped = if number == Plural { Singular } else { Plural };
            value = lookup(swapped, case, possessive, article);
        }
        value
    }

    /// Checks the gender and the stored values, filling gaps where the
    /// family allows it. Both checks always run.
    pub fn validate(&mut self, name: &str) -> bool {
        let gender_ok = self.validate_gender(name);
        let values_ok = self.validate_values(name);
        gender_ok && values_ok
    }

    fn validate_gender(&mut self, name: &str) -> bool {
        let config = self.core.config();
        let default = config.default_gender;
        let reset = match self.family().gender_policy() {
            GenderPolicy::Accept => false,
            GenderPolicy::WarnNonNeuter => {
                if self.gender != LanguageGender::Neuter {
                    warn!("noun {name} has gender {} in {}, which has no gender", self.gender, self.language);
                }
                false
            }
            GenderPolicy::ResetInvalid => !config.allows_gender(self.gender),
            GenderPolicy::ResetNeuter => self.gender == LanguageGender::Neuter,
            GenderPolicy::ResetNonNeuter => self.gender != LanguageGender::Neuter,
        };
        if reset {
            info!("noun {name} has invalid gender {} in {}; using {default}", self.gender, self.language);
            self.gender = default;
        }
        true
    }

    fn validate_values(&mut self, name: &str) -> bool {
        match self.core.layout().noun_validation {
            NounValidation::Default => self.default_validate(name),
            NounValidation::EntitiesOnly => self.noun_type != NounType::Entity || self.default_validate(name),
            NounValidation::Strict => self.validate_field_forms(name),
            NounValidation::Singular => self.require_base(name),
            NounValidation::AnyValue => {
                if self.values.is_empty() {
                    info!("noun {name} has no values in {}", self.language);
                    return false;
                }
                true
            }
            NounValidation::Hebrew => self.validate_hebrew(name),
            NounValidation::DeriveFromNominative => self.validate_from_nominative(name),
            NounValidation::Arabic => self.validate_semitic(name, true),
            NounValidation::Amharic => self.validate_semitic(name, false),
        }
    }

    fn require_base(&self, name: &str) -> bool {
        if self.values.contains(FormOrdinal::new(0)) {
            return true;
        }
        info!("noun {name} has no singular form in {}", self.language);
        false
    }

    /// Entity nouns fill every gap from a neighbouring form; other nouns
    /// fail on a missing field form.
    fn default_validate(&mut self, name: &str) -> bool {
        let core = Arc::clone(&self.core);
        for form in core.nouns() {
            if self.string(form).is_some() {
                continue;
            }
            if self.noun_type == NounType::Entity {
                let Some(value) = self.close_but_no_cigar_string(form) else {
                    info!("noun {name} has no {form} form and no default could be found");
                    return false;
                };
                if let Some(ordinal) = form.ordinal() {
                    self.store(ordinal, value);
                }
            } else if core.is_field_form(form) {
                debug!("noun {name} has no {form} form");
                return false;
            }
        }
        true
    }

    fn validate_field_forms(&self, name: &str) -> bool {
        for form in self.core.field_forms() {
            if self.stored(&form).is_none() {
                info!("noun {name} has no {form} form in {}", self.language);
                return false;
            }
        }
        true
    }

    fn validate_hebrew(&mut self, name: &str) -> bool {
        let none = LanguagePossessive::None;
        let nominative = LanguageCase::Nominative;
        let (Some(sg), Some(pl), Some(sg_def), Some(pl_def)) = (
            self.ordinal_of(Singular, nominative, none, Zero),
            self.ordinal_of(Plural, nominative, none, Zero),
            self.ordinal_of(Singular, nominative, none, Definite),
            self.ordinal_of(Plural, nominative, none, Definite),
        ) else {
            return false;
        };
        let Some(singular) = self.values.get(sg).map(str::to_string) else {
            info!("noun {name} has no singular form");
            return false;
        };
        if self.noun_type == NounType::Entity {
            let prefix = self.family().definite_prefix();
            let plural = match self.values.get(pl) {
                Some(plural) => plural.to_string(),
                None => {
                    self.store(pl, singular.clone());
                    singular.clone()
                }
            };
            if !self.values.contains(sg_def) {
                self.store(sg_def, format!("{prefix}{singular}"));
            }
            if !self.values.contains(pl_def) {
                self.store(pl_def, format!("{prefix}{plural}"));
            }
        }
        true
    }

    /// Entity nouns take the plural from the singular and every other case
    /// from the nominative of the same number.
    fn validate_from_nominative(&mut self, name: &str) -> bool {
        let config = self.core.config();
        let (possessive, article) = (config.default_possessive, config.default_article);
        let nominative = LanguageCase::Nominative;
        let Some(sg) = self.ordinal_of(Singular, nominative, possessive, article) else {
            return false;
        };
        let Some(singular) = self.values.get(sg).map(str::to_string) else {
            info!("noun {name} has no singular form");
            return false;
        };
        if self.noun_type != NounType::Entity {
            return true;
        }
        if let Some(pl) = self.ordinal_of(Plural, nominative, possessive, article) {
            if !self.values.contains(pl) {
                self.store(pl, singular);
            }
        }
        let core = Arc::clone(&self.core);
        for form in core.nouns() {
            let Some(ordinal) = form.ordinal() else { continue };
            if self.values.contains(ordinal) || form.case() == nominative {
                continue;
            }
            let direct = self
                .ordinal_of(form.number(), nominative, form.possessive(), form.article())
                .and_then(|o| self.values.get(o))
                .map(str::to_string);
            if let Some(value) = direct {
                self.store(ordinal, value);
            }
        }
        true
    }

    /// Arabic and Amharic skip the accusatives. Arabic entities derive
    /// missing definite forms from the bare form; Amharic only checks that a
    /// neighbouring form exists.
    fn validate_semitic(&mut self, name: &str, derive: bool) -> bool {
        let core = Arc::clone(&self.core);
        let prefix = self.family().definite_prefix();
        for form in core.nouns() {
            let Some(ordinal) = form.ordinal() else { continue };
            if form.case() == LanguageCase::Accusative || self.values.contains(ordinal) {
                continue;
            }
            if self.noun_type == NounType::Entity {
                if derive && form.article() == Definite {
                    let bare = self
                        .ordinal_of(form.number(), form.case(), form.possessive(), Zero)
                        .and_then(|o| self.values.get(o))
                        .map(|value| format!("{prefix}{value}"));
                    if let Some(value) = bare {
                        self.store(ordinal, value);
                    }
                    continue;
                }
                let Some(value) = self.close_but_no_cigar_string(form) else {
                    info!("noun {name} has no {form} form and no default could be found");
                    return false;
                };
                if derive {
                    self.store(ordinal, value);
                }
            } else if core.is_field_form(form) {
                debug!("noun {name} has no {form} form");
                return false;
            }
        }
        true
    }
}

impl fmt::Display for Noun {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let base = self.values.get(FormOrdinal::new(0)).unwrap_or_default();
        write!(f, "Noun-{}-'{base}'", self.language.locale())
    }
}
