use rkyv::{Archive, Deserialize, Serialize};
use crate::ids::{DictionaryVersion, FormOrdinal};
use crate::dimension::{
    LanguageArticle, LanguageGender, LanguagePosition, LanguageStartsWith, NounType, TermType,
};
use alloc::string::String;
use alloc::vec::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

/// Compact persisted identity of a grammatical form.
///
/// The ordinal indexes the declension's form list for `term`; the language
/// code selects the declension. Ordinals are stable for a given declension.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct FormRef {
    pub language: String,
    pub term: TermType,
    pub ordinal: FormOrdinal,
}

impl FormRef {
    pub fn new(language: impl Into<String>, term: TermType, ordinal: FormOrdinal) -> Self {
        Self { language: language.into(), term, ordinal }
    }
}

/// One dictionary word with only its explicitly supplied values.
#[derive(Debug, Clone, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct StoredWord {
    pub name: String,
    pub term: TermType,
    pub noun_type: Option<NounType>,
    pub gender: LanguageGender,
    pub starts_with: LanguageStartsWith,
    pub plural_alias: Option<String>,
    pub article: Option<LanguageArticle>,
    pub position: Option<LanguagePosition>,
    pub values: Vec<(FormOrdinal, String)>,
}

/// A compiled, validated dictionary for one language.
#[derive(Debug, Clone, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct DictionaryBlob {
    pub version: DictionaryVersion,
    pub language: String,
    pub words: Vec<StoredWord>,
}

impl DictionaryBlob {
    pub fn words_of(&self, term: TermType) -> impl Iterator<Item = &StoredWord> {
        self.words.iter().filter(move |w| w.term == term)
    }
}
