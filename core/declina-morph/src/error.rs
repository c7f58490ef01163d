use declina_protocol::{FormOrdinal, LanguageArticle, ProtocolError, TermType};
use thiserror::Error;

/// Errors raised while building declensions or loading word data.
///
/// Missing forms are not errors; lookups return `None` for those.
#[derive(Debug, Error)]
pub enum DeclensionError {
    #[error("duplicate grammatical form {key}")]
    DuplicateForm { key: String },

    #[error("{language} has no default {article} article; the dictionary must supply one")]
    NoDefaultArticle { language: String, article: LanguageArticle },

    #[error("no declension is mapped for language {0}")]
    UnsupportedLanguage(String),

    #[error("unknown language {0}")]
    UnknownLanguage(String),

    #[error("{term} form {} is not part of the {language} declension", ordinal.get())]
    FormNotInDeclension { language: String, term: TermType, ordinal: FormOrdinal },

    #[error("word {name} was compacted and can no longer be modified")]
    Frozen { name: String },

    #[error("form map holds {0} values, more than the compact encoding allows")]
    FormMapTooLarge(usize),

    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    #[error("invalid factory configuration: {0}")]
    Config(#[from] toml::de::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, DeclensionError>;
