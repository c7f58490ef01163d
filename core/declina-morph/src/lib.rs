//! Declension rules for every supported language.
//!
//! A [`DeclensionFactory`] maps each [`Language`] to a [`LanguageDeclension`],
//! which enumerates the legal grammatical forms for nouns, adjectives and
//! articles and creates the word stores dictionaries fill in.

pub mod adjective;
pub mod article;
pub mod config;
pub mod declension;
pub mod error;
pub mod factory;
pub mod family;
pub mod form;
pub mod form_map;
pub mod language;
pub mod noun;
pub mod serialize;
pub mod values;

pub use adjective::Adjective;
pub use article::Article;
pub use config::{DeclensionConfig, FactoryConfig};
pub use declension::{DeclensionCore, ForwardingDeclension, LanguageDeclension, StandardDeclension};
pub use error::{DeclensionError, Result};
pub use factory::DeclensionFactory;
pub use family::Family;
pub use form::{AdjectiveForm, ArticleForm, FormDims, FormSlot, GrammaticalForm, NounForm};
pub use language::{Language, LanguageType};
pub use noun::Noun;
pub use serialize::{deserialize_form_map, form_ref, serialize_form_map, FormRefExt};
