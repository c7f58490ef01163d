//! Loads a JSON dictionary through the declension engine and compiles the
//! validated words into an rkyv [`DictionaryBlob`].

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

use anyhow::{anyhow, bail, Context, Result};
use declina_morph::{DeclensionFactory, GrammaticalForm, LanguageDeclension};
use declina_protocol::{
    parse_db_value, DictionaryBlob, DictionaryVersion, LanguageArticle, LanguageGender, LanguagePosition,
    LanguageStartsWith, NounType, StoredWord, TermType,
};
use log::{debug, info, warn};
use rkyv::ser::{serializers::AllocSerializer, Serializer};
use rkyv::AlignedVec;
use serde::Deserialize;

/// A dictionary as written by hand or exported from label files.
#[derive(Debug, Deserialize)]
pub struct SourceDictionary {
    pub version: u32,
    pub language: String,
    #[serde(default)]
    pub nouns: Vec<SourceWord>,
    #[serde(default)]
    pub adjectives: Vec<SourceWord>,
    #[serde(default)]
    pub articles: Vec<SourceWord>,
}

/// One word. Attributes are db-value tokens; `forms` maps form keys to
/// values.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceWord {
    pub name: String,
    pub gender: Option<String>,
    pub starts_with: Option<String>,
    #[serde(rename = "type")]
    pub noun_type: Option<String>,
    pub plural_alias: Option<String>,
    pub position: Option<String>,
    pub article: Option<String>,
    #[serde(default)]
    pub forms: BTreeMap<String, String>,
}

/// The outcome of compiling one dictionary.
#[derive(Debug)]
pub struct Report {
    pub blob: DictionaryBlob,
    /// `term:name` of every word that failed validation.
    pub rejected: Vec<String>,
}

impl Report {
    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty()
    }
}

pub fn load_source(path: &Path) -> Result<SourceDictionary> {
    let text = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
}

/// Form keys of one term type, for resolving the keys a dictionary uses.
struct FormIndex(HashMap<String, GrammaticalForm>);

impl FormIndex {
    fn new(forms: &[GrammaticalForm]) -> Self {
        Self(forms.iter().map(|form| (form.key(), *form)).collect())
    }

    fn get(&self, term: TermType, key: &str) -> Result<&GrammaticalForm> {
        self.0.get(key).ok_or_else(|| anyhow!("unknown {term} form key {key:?}"))
    }
}

fn parse_token<T>(
    dimension: &'static str,
    token: Option<&str>,
    parse: impl Fn(&str) -> Option<T>,
    default: T,
) -> Result<T> {
    match token {
        Some(token) => Ok(parse_db_value(dimension, token, parse)?),
        None => Ok(default),
    }
}

struct Compiler<'a> {
    declension: &'a dyn LanguageDeclension,
    nouns: FormIndex,
    adjectives: FormIndex,
    articles: FormIndex,
    words: Vec<StoredWord>,
    rejected: Vec<String>,
}

impl<'a> Compiler<'a> {
    fn new(declension: &'a dyn LanguageDeclension) -> Self {
        Self {
            declension,
            nouns: FormIndex::new(declension.all_noun_forms()),
            adjectives: FormIndex::new(declension.adjective_forms()),
            articles: FormIndex::new(declension.article_forms()),
            words: Vec::new(),
            rejected: Vec::new(),
        }
    }

    fn accept(&mut self, term: TermType, name: &str, valid: bool, stored: StoredWord) {
        if valid {
            self.words.push(stored);
        } else {
            warn!("rejected {term} {name}");
            self.rejected.push(format!("{term}:{name}"));
        }
    }

    fn noun(&mut self, word: &SourceWord) -> Result<()> {
        let config = self.declension.config();
        let gender = parse_token("gender", word.gender.as_deref(), LanguageGender::from_label_value, config.default_gender)?;
        let starts_with = parse_token(
            "startsWith",
            word.starts_with.as_deref(),
            LanguageStartsWith::from_db_value,
            config.default_starts_with,
        )?;
        let noun_type = parse_token("type", word.noun_type.as_deref(), NounType::from_db_value, NounType::Other)?;

        let mut noun = self.declension.create_noun(&word.name, noun_type, gender, starts_with);
        if let Some(alias) = &word.plural_alias {
            noun = noun.with_plural_alias(alias.clone());
        }
        for (key, value) in &word.forms {
            let form = self.nouns.get(TermType::Noun, key)?;
            noun.set_string(value.clone(), form)?;
        }
        let valid = noun.validate(&word.name);
        noun.make_skinny();
        self.accept(TermType::Noun, &word.name, valid, noun.to_stored());
        Ok(())
    }

    fn adjective(&mut self, word: &SourceWord) -> Result<()> {
        let config = self.declension.config();
        let starts_with = parse_token(
            "startsWith",
            word.starts_with.as_deref(),
            LanguageStartsWith::from_db_value,
            config.default_starts_with,
        )?;
        let position = parse_token(
            "position",
            word.position.as_deref(),
            LanguagePosition::from_db_value,
            config.default_adjective_position,
        )?;

        let mut adjective = self.declension.create_adjective(&word.name, starts_with, position);
        for (key, value) in &word.forms {
            let form = self.adjectives.get(TermType::Adjective, key)?;
            adjective.set_string(value.clone(), form)?;
        }
        let valid = adjective.validate(&word.name);
        adjective.make_skinny();
        self.accept(TermType::Adjective, &word.name, valid, adjective.to_stored());
        Ok(())
    }

    fn article(&mut self, word: &SourceWord) -> Result<()> {
        let config = self.declension.config();
        let article_type = parse_token(
            "article",
            word.article.as_deref(),
            LanguageArticle::from_db_value,
            config.default_article,
        )?;

        let mut article = self.declension.create_article(&word.name, article_type);
        for (key, value) in &word.forms {
            let form = self.articles.get(TermType::Article, key)?;
            article.set_string(value.clone(), form)?;
        }
        let valid = article.validate(&word.name);
        article.make_skinny();
        self.accept(TermType::Article, &word.name, valid, article.to_stored());
        Ok(())
    }
}

/// Loads and validates every word of `source`.
///
/// Malformed entries (unknown form keys or attribute tokens) are errors;
/// words that fail validation are listed in the report and left out of the
/// blob.
pub fn compile(source: &SourceDictionary, factory: &DeclensionFactory, language: Option<&str>) -> Result<Report> {
    let locale = language.unwrap_or(&source.language);
    let declension = factory
        .declension_for_locale(locale)
        .with_context(|| format!("no declension for {locale}"))?;
    info!(
        "compiling {} nouns, {} adjectives and {} articles for {locale}",
        source.nouns.len(),
        source.adjectives.len(),
        source.articles.len()
    );

    let mut compiler = Compiler::new(declension.as_ref());
    for word in &source.nouns {
        compiler.noun(word).with_context(|| format!("noun {}", word.name))?;
    }
    for word in &source.adjectives {
        compiler.adjective(word).with_context(|| format!("adjective {}", word.name))?;
    }
    for word in &source.articles {
        compiler.article(word).with_context(|| format!("article {}", word.name))?;
    }
    debug!("{} words accepted, {} rejected", compiler.words.len(), compiler.rejected.len());

    Ok(Report {
        blob: DictionaryBlob {
            version: DictionaryVersion::new(source.version),
            language: declension.language().locale().to_string(),
            words: compiler.words,
        },
        rejected: compiler.rejected,
    })
}

pub fn write_blob(blob: &DictionaryBlob, path: &Path) -> Result<usize> {
    let mut serializer = AllocSerializer::<1024>::default();
    serializer
        .serialize_value(blob)
        .map_err(|e| anyhow!("failed to archive dictionary: {e:?}"))?;
    let bytes = serializer.into_serializer().into_inner();
    fs::write(path, bytes.as_slice()).with_context(|| format!("writing {}", path.display()))?;
    Ok(bytes.len())
}

pub fn read_blob(path: &Path) -> Result<DictionaryBlob> {
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    if bytes.is_empty() {
        bail!("{} is empty", path.display());
    }
    let mut aligned = AlignedVec::with_capacity(bytes.len());
    aligned.extend_from_slice(&bytes);
    rkyv::from_bytes::<DictionaryBlob>(&aligned).map_err(|e| anyhow!("invalid dictionary blob {}: {e:?}", path.display()))
}
