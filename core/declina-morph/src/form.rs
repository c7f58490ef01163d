//! Identity of one point in a declension's form space.

use std::fmt;

use declina_protocol::{
    FormOrdinal, LanguageArticle, LanguageCase, LanguageGender, LanguageNumber,
    LanguagePossessive, LanguageStartsWith, TermType,
};

/// The full dimension tuple of a form.
///
/// Dimensions a family does not inflect for hold the declension's fixed
/// default (usually nominative, zero article, no possessive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FormDims {
    pub number: LanguageNumber,
    pub case: LanguageCase,
    pub gender: LanguageGender,
    pub article: LanguageArticle,
    pub possessive: LanguagePossessive,
    pub starts_with: LanguageStartsWith,
}

impl FormDims {
    /// Singular, nominative, zero article, no possessive.
    pub const fn base(gender: LanguageGender, starts_with: LanguageStartsWith) -> Self {
        Self {
            number: LanguageNumber::Singular,
            case: LanguageCase::Nominative,
            gender,
            article: LanguageArticle::Zero,
            possessive: LanguagePossessive::None,
            starts_with,
        }
    }

    pub const fn with_number(mut self, number: LanguageNumber) -> Self {
        self.number = number;
        self
    }

    pub const fn with_case(mut self, case: LanguageCase) -> Self {
        self.case = case;
        self
    }

    pub const fn with_gender(mut self, gender: LanguageGender) -> Self {
        self.gender = gender;
        self
    }

    pub const fn with_article(mut self, article: LanguageArticle) -> Self {
        self.article = article;
        self
    }

    pub const fn with_possessive(mut self, possessive: LanguagePossessive) -> Self {
        self.possessive = possessive;
        self
    }

    pub const fn with_starts_with(mut self, starts_with: LanguageStartsWith) -> Self {
        self.starts_with = starts_with;
        self
    }

    pub fn is_nominative(&self) -> bool {
        self.case == LanguageCase::Nominative
    }

    pub fn is_nominative_zero(&self) -> bool {
        self.case == LanguageCase::Nominative && self.article == LanguageArticle::Zero
    }

    pub fn is_zero_article(&self) -> bool {
        self.article == LanguageArticle::Zero
    }
}

/// A single dimension, used to describe key layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dim {
    Number,
    Case,
    Gender,
    Article,
    Possessive,
    StartsWith,
}

impl Dim {
    pub const ALL: &'static [Dim] = &[
        Dim::Number,
        Dim::Case,
        Dim::Gender,
        Dim::Article,
        Dim::Possessive,
        Dim::StartsWith,
    ];

    /// Whether two tuples agree along this dimension.
    pub(crate) fn agrees(self, a: &FormDims, b: &FormDims) -> bool {
        match self {
            Dim::Number => a.number == b.number,
            Dim::Case => a.case == b.case,
            Dim::Gender => a.gender == b.gender,
            Dim::Article => a.article == b.article,
            Dim::Possessive => a.possessive == b.possessive,
            Dim::StartsWith => a.starts_with == b.starts_with,
        }
    }

    /// Copies this dimension's value from `from` into `to`.
    pub(crate) fn copy(self, from: &FormDims, to: &mut FormDims) {
        match self {
            Dim::Number => to.number = from.number,
            Dim::Case => to.case = from.case,
            Dim::Gender => to.gender = from.gender,
            Dim::Article => to.article = from.article,
            Dim::Possessive => to.possessive = from.possessive,
            Dim::StartsWith => to.starts_with = from.starts_with,
        }
    }

    fn db_value(self, dims: &FormDims) -> &'static str {
        match self {
            Dim::Number => dims.number.db_value(),
            Dim::Case => dims.case.db_value(),
            Dim::Gender => dims.gender.db_value(),
            Dim::Article => dims.article.db_value(),
            Dim::Possessive => dims.possessive.db_value(),
            Dim::StartsWith => dims.starts_with.db_value(),
        }
    }
}

/// Which dimensions make up a form's key, in order, and how they are joined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyStyle {
    parts: &'static [Dim],
    separator: char,
}

impl KeyStyle {
    pub const fn new(parts: &'static [Dim], separator: char) -> Self {
        Self { parts, separator }
    }

    pub const fn dashed(parts: &'static [Dim]) -> Self {
        Self::new(parts, '-')
    }

    pub fn render(&self, dims: &FormDims) -> String {
        let mut key = String::new();
        for (i, part) in self.parts.iter().enumerate() {
            if i > 0 {
                key.push(self.separator);
            }
            key.push_str(part.db_value(dims));
        }
        key
    }
}

/// Where a form lives relative to its declension's form list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormSlot {
    /// A member of the form list at this ordinal.
    Registered(FormOrdinal),
    /// A registered base form rendered with a separate article word.
    Legacy { base: FormOrdinal },
    /// A request tuple the family renders on the fly.
    Dynamic,
}

/// One grammatical form of a noun, adjective or article.
///
/// Forms are small values; two forms with equal dimensions in the same
/// declension compare equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GrammaticalForm {
    term: TermType,
    slot: FormSlot,
    dims: FormDims,
    key_style: KeyStyle,
}

pub type NounForm = GrammaticalForm;
pub type AdjectiveForm = GrammaticalForm;
pub type ArticleForm = GrammaticalForm;

impl GrammaticalForm {
    pub(crate) fn registered(term: TermType, ordinal: FormOrdinal, dims: FormDims, key_style: KeyStyle) -> Self {
        Self { term, slot: FormSlot::Registered(ordinal), dims, key_style }
    }

    pub(crate) fn legacy(base: &GrammaticalForm, article: LanguageArticle) -> Self {
        let base_ordinal = match base.slot {
            FormSlot::Registered(ordinal) | FormSlot::Legacy { base: ordinal } => ordinal,
            // Dynamic forms carry no base; keep them dynamic.
            FormSlot::Dynamic => return Self { dims: base.dims.with_article(article), ..*base },
        };
        Self {
            term: base.term,
            slot: FormSlot::Legacy { base: base_ordinal },
            dims: base.dims.with_article(article),
            key_style: base.key_style,
        }
    }

    pub(crate) fn dynamic(term: TermType, dims: FormDims, key_style: KeyStyle) -> Self {
        Self { term, slot: FormSlot::Dynamic, dims, key_style }
    }

    pub fn term(&self) -> TermType {
        self.term
    }

    pub fn slot(&self) -> FormSlot {
        self.slot
    }

    /// Ordinal for registered forms; `None` for legacy and dynamic forms.
    pub fn ordinal(&self) -> Option<FormOrdinal> {
        match self.slot {
            FormSlot::Registered(ordinal) => Some(ordinal),
            _ => None,
        }
    }

    /// Ordinal of the stored value backing this form, if any.
    pub fn storage_ordinal(&self) -> Option<FormOrdinal> {
        match self.slot {
            FormSlot::Registered(ordinal) | FormSlot::Legacy { base: ordinal } => Some(ordinal),
            FormSlot::Dynamic => None,
        }
    }

    pub fn is_legacy(&self) -> bool {
        matches!(self.slot, FormSlot::Legacy { .. })
    }

    pub fn dims(&self) -> &FormDims {
        &self.dims
    }

    pub fn number(&self) -> LanguageNumber {
        self.dims.number
    }

    pub fn case(&self) -> LanguageCase {
        self.dims.case
    }

    pub fn gender(&self) -> LanguageGender {
        self.dims.gender
    }

    pub fn article(&self) -> LanguageArticle {
        self.dims.article
    }

    pub fn possessive(&self) -> LanguagePossessive {
        self.dims.possessive
    }

    pub fn starts_with(&self) -> LanguageStartsWith {
        self.dims.starts_with
    }

    /// Deterministic key built from the dimensions' db values.
    pub fn key(&self) -> String {
        self.key_style.render(&self.dims)
    }
}

impl fmt::Display for GrammaticalForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.term.api_value(), self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NCA: KeyStyle = KeyStyle::dashed(&[Dim::Number, Dim::Case, Dim::Article]);

    #[test]
    fn key_joins_db_values_in_order() {
        let dims = FormDims::base(LanguageGender::Neuter, LanguageStartsWith::Consonant)
            .with_number(LanguageNumber::Plural)
            .with_case(LanguageCase::Genitive)
            .with_article(LanguageArticle::Definite);
        let form = GrammaticalForm::registered(TermType::Noun, FormOrdinal::new(3), dims, NCA);
        assert_eq!(form.key(), "1-g-d");

        let colon = KeyStyle::new(&[Dim::Number, Dim::Case], ':');
        assert_eq!(colon.render(&dims), "1:g");
    }

    #[test]
    fn legacy_form_keeps_base_storage() {
        let dims = FormDims::base(LanguageGender::Neuter, LanguageStartsWith::Consonant);
        let base = GrammaticalForm::registered(TermType::Noun, FormOrdinal::new(2), dims, NCA);
        let legacy = GrammaticalForm::legacy(&base, LanguageArticle::Definite);

        assert!(legacy.is_legacy());
        assert_eq!(legacy.ordinal(), None);
        assert_eq!(legacy.storage_ordinal(), Some(FormOrdinal::new(2)));
        assert_eq!(legacy.article(), LanguageArticle::Definite);
        assert_eq!(legacy.number(), base.number());
    }
}
