//! Persistence of forms and word values.
//!
//! A form is persisted as its ordinal in the declension's form list; a word
//! as its name, agreement and the values it was given. Derived state such as
//! Basque stem flags is never written and is rebuilt when values are loaded.

use std::io::{self, Read, Write};

use declina_protocol::{
    FormOrdinal, FormRef, LanguageGender, LanguageStartsWith, NounType, StoredWord, TermType,
};
use log::debug;

use crate::adjective::Adjective;
use crate::article::Article;
use crate::declension::LanguageDeclension;
use crate::error::{DeclensionError, Result};
use crate::factory::DeclensionFactory;
use crate::form::GrammaticalForm;
use crate::noun::Noun;

/// Writes a form map as a count byte followed by `(ordinal, length, UTF-8)`
/// entries, with the length as a big-endian `u16`. At most 255 entries fit.
pub fn serialize_form_map<W: Write>(values: &[(GrammaticalForm, &str)], writer: &mut W) -> Result<()> {
    let entries: Vec<(FormOrdinal, &str)> = values
        .iter()
        .filter_map(|(form, value)| match form.ordinal() {
            Some(ordinal) => Some((ordinal, *value)),
            None => {
                debug!("skipping unregistered form {form} while serializing");
                None
            }
        })
        .collect();
    let count = u8::try_from(entries.len()).map_err(|_| DeclensionError::FormMapTooLarge(entries.len()))?;
    writer.write_all(&[count])?;
    for (ordinal, value) in entries {
        let length = u16::try_from(value.len())
            .map_err(|_| io::Error::new(io::ErrorKind::InvalidInput, "form value longer than 65535 bytes"))?;
        writer.write_all(&[ordinal.to_byte()?])?;
        writer.write_all(&length.to_be_bytes())?;
        writer.write_all(value.as_bytes())?;
    }
    Ok(())
}

/// Reads a form map written by [`serialize_form_map`], resolving each
/// ordinal against `declension`'s forms for `term`.
pub fn deserialize_form_map<R: Read>(
    reader: &mut R,
    declension: &dyn LanguageDeclension,
    term: TermType,
) -> Result<Vec<(GrammaticalForm, String)>> {
    let mut byte = [0u8; 1];
    reader.read_exact(&mut byte)?;
    let count = byte[0] as usize;
    let mut entries = Vec::with_capacity(count);
    for _ in 0..count {
        reader.read_exact(&mut byte)?;
        let form = declension.resolve_form(term, FormOrdinal::new(u32::from(byte[0])))?;
        let mut length = [0u8; 2];
        reader.read_exact(&mut length)?;
        let mut value = vec![0u8; usize::from(u16::from_be_bytes(length))];
        reader.read_exact(&mut value)?;
        let value = String::from_utf8(value).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        entries.push((form, value));
    }
    Ok(entries)
}

/// The persisted identity of a registered form.
pub fn form_ref(declension: &dyn LanguageDeclension, form: &GrammaticalForm) -> Option<FormRef> {
    Some(FormRef::new(declension.language().locale(), form.term(), form.ordinal()?))
}

pub trait FormRefExt {
    /// Maps a persisted reference back to its form.
    fn resolve(&self, factory: &DeclensionFactory) -> Result<GrammaticalForm>;
}

impl FormRefExt for FormRef {
    fn resolve(&self, factory: &DeclensionFactory) -> Result<GrammaticalForm> {
        factory.declension_for_locale(&self.language)?.resolve_form(self.term, self.ordinal)
    }
}

fn stored_values(values: Vec<(GrammaticalForm, &str)>) -> Vec<(FormOrdinal, String)> {
    values
        .into_iter()
        .filter_map(|(form, value)| Some((form.ordinal()?, value.to_string())))
        .collect()
}

impl Noun {
    pub fn to_stored(&self) -> StoredWord {
        StoredWord {
            name: self.name().to_string(),
            term: TermType::Noun,
            noun_type: Some(self.noun_type()),
            gender: self.gender(),
            starts_with: self.starts_with(),
            plural_alias: self.plural_alias().map(str::to_string),
            article: None,
            position: None,
            values: stored_values(self.all_defined_values()),
        }
    }

    /// Rebuilds a noun in `declension`; stem state follows from the values.
    pub fn from_stored(declension: &dyn LanguageDeclension, word: &StoredWord) -> Result<Noun> {
        debug_assert_eq!(word.term, TermType::Noun, "not a stored noun");
        let noun_type = word.noun_type.unwrap_or(NounType::Other);
        let mut noun = declension.create_noun(&word.name, noun_type, word.gender, word.starts_with);
        if let Some(alias) = &word.plural_alias {
            noun = noun.with_plural_alias(alias.clone());
        }
        for (ordinal, value) in &word.values {
            let form = declension.resolve_form(TermType::Noun, *ordinal)?;
            noun.set_string(value.clone(), &form)?;
        }
        Ok(noun)
    }
}

impl Adjective {
    pub fn to_stored(&self) -> StoredWord {
        StoredWord {
            name: self.name().to_string(),
            term: TermType::Adjective,
            noun_type: None,
            gender: LanguageGender::Neuter,
            starts_with: self.starts_with(),
            plural_alias: None,
            article: None,
            position: Some(self.position()),
            values: stored_values(self.all_defined_values()),
        }
    }

    pub fn from_stored(declension: &dyn LanguageDeclension, word: &StoredWord) -> Result<Adjective> {
        debug_assert_eq!(word.term, TermType::Adjective, "not a stored adjective");
        let position = word.position.unwrap_or(declension.config().default_adjective_position);
        let mut adjective = declension.create_adjective(&word.name, word.starts_with, position);
        for (ordinal, value) in &word.values {
            let form = declension.resolve_form(TermType::Adjective, *ordinal)?;
            adjective.set_string(value.clone(), &form)?;
        }
        Ok(adjective)
    }
}

impl Article {
    pub fn to_stored(&self) -> StoredWord {
        StoredWord {
            name: self.name().to_string(),
            term: TermType::Article,
            noun_type: None,
            gender: LanguageGender::Neuter,
            starts_with: LanguageStartsWith::Consonant,
            plural_alias: None,
            article: Some(self.article_type()),
            position: None,
            values: stored_values(self.all_defined_values()),
        }
    }

    pub fn from_stored(declension: &dyn LanguageDeclension, word: &StoredWord) -> Result<Article> {
        debug_assert_eq!(word.term, TermType::Article, "not a stored article");
        let article_type = word.article.unwrap_or(declension.config().default_article);
        let mut article = declension.create_article(&word.name, article_type);
        for (ordinal, value) in &word.values {
            let form = declension.resolve_form(TermType::Article, *ordinal)?;
            article.set_string(value.clone(), &form)?;
        }
        Ok(article)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FactoryConfig;
    use declina_protocol::LanguageArticle::{Definite, Indefinite, Zero};
    use declina_protocol::LanguageCase::{Ergative, Nominative};
    use declina_protocol::LanguageGender::{Feminine, Masculine};
    use declina_protocol::LanguageNumber::Singular;
    use declina_protocol::LanguagePosition;
    use declina_protocol::LanguagePossessive::None as NoPossessive;
    use std::io::Cursor;

    fn factory(locales: &[&str]) -> DeclensionFactory {
        let config = FactoryConfig {
            languages: locales.iter().map(|l| l.to_string()).collect(),
            ..FactoryConfig::default()
        };
        DeclensionFactory::new(config).unwrap()
    }

    #[test]
    fn form_map_round_trip() {
        let factory = factory(&["de"]);
        let de = factory.declension_for_locale("de").unwrap();
        let mut noun = de.create_noun("kunde", NounType::Entity, Masculine, LanguageStartsWith::Consonant);
        for (form, value) in de.all_noun_forms().iter().zip(["Kunde", "Kunden", "Kunden", "Kunden"]) {
            noun.set_string(value, form).unwrap();
        }

        let mut bytes = Vec::new();
        serialize_form_map(&noun.all_defined_values(), &mut bytes).unwrap();
        assert_eq!(bytes[0], 4);

        let read = deserialize_form_map(&mut Cursor::new(bytes), de.as_ref(), TermType::Noun).unwrap();
        let expected: Vec<(GrammaticalForm, String)> =
            noun.all_defined_values().into_iter().map(|(f, v)| (f, v.to_string())).collect();
        assert_eq!(read, expected);
    }

    #[test]
    fn out_of_range_ordinal_is_rejected() {
        let factory = factory(&["en_US"]);
        let en = factory.declension_for_locale("en_US").unwrap();
        let bytes = [1u8, 200, 0, 1, b'x'];
        let err = deserialize_form_map(&mut Cursor::new(bytes), en.as_ref(), TermType::Noun).unwrap_err();
        assert!(matches!(err, DeclensionError::FormNotInDeclension { ordinal, .. } if ordinal.get() == 200));

        let truncated = [2u8, 0, 0, 1, b'x'];
        assert!(matches!(
            deserialize_form_map(&mut Cursor::new(truncated), en.as_ref(), TermType::Noun),
            Err(DeclensionError::Io(_))
        ));
    }

    #[test]
    fn oversized_form_map_is_rejected() {
        let factory = factory(&["en_US"]);
        let en = factory.declension_for_locale("en_US").unwrap();
        let form = en.all_noun_forms()[0];
        let values = vec![(form, "x"); 256];
        let mut bytes = Vec::new();
        assert!(matches!(serialize_form_map(&values, &mut bytes), Err(DeclensionError::FormMapTooLarge(256))));
    }

    #[test]
    fn form_refs_resolve_through_the_factory() {
        let factory = factory(&["de", "en_CA"]);
        let de = factory.declension_for_locale("de").unwrap();
        let form = de.all_noun_forms()[3];
        let reference = form_ref(de.as_ref(), &form).unwrap();
        assert_eq!(reference.language, "de");
        assert_eq!(reference.resolve(&factory).unwrap(), form);

        let stale = FormRef::new("en_CA", TermType::Noun, FormOrdinal::new(99));
        assert!(matches!(stale.resolve(&factory), Err(DeclensionError::FormNotInDeclension { .. })));
    }

    #[test]
    fn stored_basque_noun_rebuilds_its_stem() {
        let factory = factory(&["eu"]);
        let eu = factory.declension_for_locale("eu").unwrap();
        let mut mendi = eu.create_noun("mendi", NounType::Entity, LanguageGender::Neuter, LanguageStartsWith::Consonant);
        mendi.set_string("mendi", &eu.all_noun_forms()[0]).unwrap();

        let stored = mendi.to_stored();
        assert_eq!(stored.values, vec![(FormOrdinal::new(0), "mendi".to_string())]);
        let loaded = Noun::from_stored(eu.as_ref(), &stored).unwrap();
        assert_eq!(loaded, mendi);
        assert_eq!(loaded.stem_flags(), mendi.stem_flags());
        let ergative = eu.approximate_noun_form(Singular, Ergative, NoPossessive, Indefinite);
        assert_eq!(loaded.string(&ergative).as_deref(), Some("mendik"));
    }

    #[test]
    fn stored_modifiers_round_trip() {
        let factory = factory(&["fr"]);
        let fr = factory.declension_for_locale("fr").unwrap();
        let mut vert = fr.create_adjective("vert", LanguageStartsWith::Consonant, LanguagePosition::Post);
        let form = fr
            .adjective_form(LanguageStartsWith::Consonant, Feminine, Singular, Nominative, Zero, NoPossessive)
            .unwrap();
        vert.set_string("verte", &form).unwrap();
        let stored = vert.to_stored();
        assert_eq!(stored.position, Some(LanguagePosition::Post));
        assert_eq!(Adjective::from_stored(fr.as_ref(), &stored).unwrap(), vert);

        let mut the = fr.create_article("the", Definite);
        let article_form = fr.article_form(LanguageStartsWith::Vowel, Feminine, Singular, Nominative).unwrap();
        the.set_string("l'", &article_form).unwrap();
        let stored = the.to_stored();
        assert_eq!(stored.article, Some(Definite));
        assert_eq!(Article::from_stored(fr.as_ref(), &stored).unwrap(), the);
    }
}
