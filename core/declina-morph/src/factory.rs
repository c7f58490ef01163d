//! The registry of declensions, one per language.

use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use log::{debug, trace};

use crate::config::FactoryConfig;
use crate::declension::{DeclensionCore, ForwardingDeclension, LanguageDeclension, StandardDeclension};
use crate::error::{DeclensionError, Result};
use crate::family::Family;
use crate::language::Language;

/// Maps languages to their declensions.
///
/// Built once and read-only afterwards. Dialects that decline like their
/// fallback language are served by a [`ForwardingDeclension`] over the
/// fallback's instance, and languages of the same family share one
/// [`DeclensionCore`].
#[derive(Debug)]
pub struct DeclensionFactory {
    config: FactoryConfig,
    declensions: HashMap<Language, Arc<dyn LanguageDeclension>>,
}

/// Construction-time state; dropped once the registry is complete.
struct Builder<'a> {
    config: &'a FactoryConfig,
    cores: HashMap<Family, Arc<DeclensionCore>>,
    declensions: HashMap<Language, Arc<dyn LanguageDeclension>>,
}

impl Builder<'_> {
    fn family_of(&self, language: Language) -> Result<Family> {
        match Family::for_language(language.language_code(), self.config) {
            Some(family) => Ok(family),
            None if self.config.fail_on_missing => {
                Err(DeclensionError::UnsupportedLanguage(language.locale().to_string()))
            }
            None => {
                debug!("no declension mapped for {language}; using the uninflected declension");
                Ok(Family::UNINFLECTED)
            }
        }
    }

    fn core(&mut self, family: Family) -> Result<Arc<DeclensionCore>> {
        if let Some(core) = self.cores.get(&family) {
            return Ok(Arc::clone(core));
        }
        trace!("building declension core for {family:?}");
        let core = Arc::new(DeclensionCore::new(family)?);
        self.cores.insert(family, Arc::clone(&core));
        Ok(core)
    }

    fn build(&mut self, language: Language) -> Result<Arc<dyn LanguageDeclension>> {
        if let Some(declension) = self.declensions.get(&language) {
            return Ok(Arc::clone(declension));
        }
        let family = self.family_of(language)?;
        let forward_to = language
            .translation_fallback()
            .filter(|fallback| !language.is_translated() && *fallback != language)
            .filter(|fallback| self.family_of(*fallback).ok() == Some(family));

        let declension: Arc<dyn LanguageDeclension> = match forward_to {
            Some(fallback) => {
                let delegate = self.build(fallback)?;
                trace!("{language} forwards to the {fallback} declension");
                Arc::new(ForwardingDeclension::new(language, delegate))
            }
            None => {
                trace!("{language} gets its own declension");
                Arc::new(StandardDeclension::new(language, self.core(family)?))
            }
        };
        self.declensions.insert(language, Arc::clone(&declension));
        Ok(declension)
    }
}

impl DeclensionFactory {
    /// Builds every language the config names, or every registered language
    /// when it names none.
    pub fn new(config: FactoryConfig) -> Result<Self> {
        let languages: Vec<Language> = if config.languages.is_empty() {
            Language::all().collect()
        } else {
            config
                .languages
                .iter()
                .map(|locale| {
                    Language::from_locale(locale).ok_or_else(|| DeclensionError::UnknownLanguage(locale.clone()))
                })
                .collect::<Result<_>>()?
        };

        let mut builder = Builder {
            config: &config,
            cores: HashMap::new(),
            declensions: HashMap::new(),
        };
        for language in languages {
            builder.build(language)?;
        }
        let declensions = builder.declensions;
        debug!("declension factory holds {} languages", declensions.len());
        Ok(Self { config, declensions })
    }

    /// The process-wide factory over every registered language, built on
    /// first use.
    pub fn global() -> std::result::Result<&'static DeclensionFactory, &'static DeclensionError> {
        static GLOBAL: OnceLock<Result<DeclensionFactory>> = OnceLock::new();
        GLOBAL.get_or_init(|| DeclensionFactory::new(FactoryConfig::default())).as_ref()
    }

    pub fn config(&self) -> &FactoryConfig {
        &self.config
    }

    pub fn declension(&self, language: Language) -> Result<Arc<dyn LanguageDeclension>> {
        self.declensions
            .get(&language)
            .cloned()
            .ok_or_else(|| DeclensionError::UnsupportedLanguage(language.locale().to_string()))
    }

    pub fn declension_for_locale(&self, locale: &str) -> Result<Arc<dyn LanguageDeclension>> {
        let language = Language::from_locale(locale).ok_or_else(|| DeclensionError::UnknownLanguage(locale.to_string()))?;
        self.declension(language)
    }

    /// Every language with a declension, in no particular order.
    pub fn languages(&self) -> impl Iterator<Item = Language> + '_ {
        self.declensions.keys().copied()
    }
}
