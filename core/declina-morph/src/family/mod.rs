//! Declension families.
//!
//! A family is a configuration value plus a handful of pure functions: which
//! dimension values are legal, the ordered form lists built from them, the
//! default article words, and the morphology used to derive missing forms.
//! Word stores dispatch on [`Family`] for the few places where a family
//! changes how values are stored or validated.

mod armenian;
pub mod basque;
mod germanic;
mod indic;
pub mod korean;
mod romance;
pub mod semitic;
mod simple;
pub mod slavic;
mod turkic;
mod uralic;

use declina_protocol::{
    LanguageArticle, LanguageCase, LanguageGender, LanguageNumber, LanguagePossessive,
    LanguageStartsWith,
};

use crate::config::{DeclensionConfig, FactoryConfig};
use crate::error::{DeclensionError, Result};
use crate::form::{Dim, FormDims, KeyStyle};
use crate::language::Language;

pub use germanic::{greek_starts_with, GermanicLanguage};
pub use indic::{DravidianLanguage, IndoAryanLanguage};
pub use romance::RomanceLanguage;
pub use simple::{PluralNounLanguage, SimpleKind, UnsupportedLanguage};
pub use slavic::SlavicLanguage;
pub use turkic::TurkicLanguage;
pub use uralic::UralicLanguage;

/// The rule set a language declines by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    Simple(SimpleKind),
    Unsupported(UnsupportedLanguage),
    PluralNoun(PluralNounLanguage),
    English,
    Romance(RomanceLanguage),
    Romanian,
    Germanic(GermanicLanguage),
    Greek,
    Slavic(SlavicLanguage),
    Bulgarian,
    Baltic,
    Uralic(UralicLanguage),
    Turkic(TurkicLanguage),
    Hebrew,
    Arabic { accusative_alif: bool },
    Amharic,
    Basque,
    Korean,
    Dravidian(DravidianLanguage),
    IndoAryan(IndoAryanLanguage),
    HindiUrdu,
    Bengali,
    Armenian,
}

impl Family {
    /// The uninflected family unmapped languages fall back to.
    pub const UNINFLECTED: Family = Family::Simple(SimpleKind::Plain);

    /// Maps an ISO language code (`de`, `iw`, `sh`) to its family.
    pub fn for_language(code: &str, config: &FactoryConfig) -> Option<Family> {
        use Family::*;
        let family = match code {
            "en" => English,
            "zh" | "ja" | "th" => Simple(SimpleKind::Classifier),
            "vi" => Simple(SimpleKind::Vietnamese),
            "tl" => Simple(SimpleKind::Plain),
            "ga" => Unsupported(UnsupportedLanguage::Irish),
            "cy" => Unsupported(UnsupportedLanguage::Welsh),
            "mt" => Unsupported(UnsupportedLanguage::Maltese),
            "in" | "ms" => PluralNoun(PluralNounLanguage::Indonesian),
            "eo" => PluralNoun(PluralNounLanguage::Esperanto),
            "fr" => Romance(RomanceLanguage::French),
            "rm" => Romance(RomanceLanguage::Romansh),
            "it" => Romance(RomanceLanguage::Italian),
            "es" => Romance(RomanceLanguage::Spanish),
            "pt" => Romance(RomanceLanguage::Portuguese),
            "ca" => Romance(RomanceLanguage::Catalan),
            "ro" => Romanian,
            "de" => Germanic(GermanicLanguage::German),
            "sv" => Germanic(GermanicLanguage::Swedish),
            "nl" => Germanic(GermanicLanguage::Dutch),
            "da" => Germanic(GermanicLanguage::Danish),
            "no" => Germanic(GermanicLanguage::Norwegian),
            "is" => Germanic(GermanicLanguage::Icelandic),
            "lb" => Germanic(GermanicLanguage::Luxembourgish),
            "ji" => Germanic(GermanicLanguage::Yiddish),
            "sq" => Germanic(GermanicLanguage::Albanian),
            "el" => Greek,
            "cs" => Slavic(SlavicLanguage::Czech),
            "pl" => Slavic(SlavicLanguage::Polish),
            "ru" => Slavic(SlavicLanguage::Russian),
            "uk" => Slavic(SlavicLanguage::Ukrainian),
            "sk" => Slavic(SlavicLanguage::Slovak),
            "sl" => Slavic(SlavicLanguage::Slovenian),
            "sr" | "sh" | "bs" | "hr" => Slavic(SlavicLanguage::SerboCroatian),
            "ka" => Slavic(SlavicLanguage::Georgian),
            "bg" | "mk" => Bulgarian,
            "lt" | "lv" => Baltic,
            "fi" => Uralic(UralicLanguage::Finnish),
            "et" => Uralic(UralicLanguage::Estonian),
            "hu" => Uralic(UralicLanguage::Hungarian),
            "tr" => Turkic(TurkicLanguage::Turkish),
            "kk" => Turkic(TurkicLanguage::Kazakh),
            "iw" => Hebrew,
            "ar" => Arabic { accusative_alif: config.arabic_accusative_alif },
            "am" => Amharic,
            "eu" => Basque,
            "ko" => Korean,
            "ta" => Dravidian(DravidianLanguage::Tamil),
            "te" => Dravidian(DravidianLanguage::Telugu),
            "kn" => Dravidian(DravidianLanguage::Kannada),
            "ml" => Dravidian(DravidianLanguage::Malayalam),
            "gu" => IndoAryan(IndoAryanLanguage::Gujarati),
            "mr" => IndoAryan(IndoAryanLanguage::Marathi),
            "pa" => IndoAryan(IndoAryanLanguage::Punjabi),
            "hi" | "ur" => HindiUrdu,
            "bn" => Bengali,
            "hy" => Armenian,
            _ => return None,
        };
        Some(family)
    }

    pub fn config(&self) -> DeclensionConfig {
        match *self {
            Family::Simple(kind) => simple::simple_config(kind),
            Family::Unsupported(lang) => simple::unsupported_config(lang),
            Family::PluralNoun(lang) => simple::plural_noun_config(lang),
            Family::English => simple::english_config(),
            Family::Romance(lang) => romance::config(lang),
            Family::Romanian => romance::romanian_config(),
            Family::Germanic(lang) => germanic::config(lang),
            Family::Greek => germanic::greek_config(),
            Family::Slavic(lang) => slavic::config(lang),
            Family::Bulgarian => slavic::bulgarian_config(),
            Family::Baltic => slavic::baltic_config(),
            Family::Uralic(lang) => uralic::config(lang),
            Family::Turkic(lang) => turkic::config(lang),
            Family::Hebrew => semitic::hebrew_config(),
            Family::Arabic { .. } => semitic::arabic_config(),
            Family::Amharic => semitic::amharic_config(),
            Family::Basque => basque::config(),
            Family::Korean => korean::config(),
            Family::Dravidian(lang) => indic::dravidian_config(lang),
            Family::IndoAryan(lang) => indic::indo_aryan_config(lang),
            Family::HindiUrdu => indic::hindi_urdu_config(),
            Family::Bengali => indic::bengali_config(),
            Family::Armenian => armenian::config(),
        }
    }

    /// The ordered form lists. Ordinals follow list order, so any change here
    /// invalidates persisted form references for the family.
    pub fn layout(&self, config: &DeclensionConfig) -> FormLayout {
        match *self {
            Family::Simple(kind) => simple::simple_layout(kind, config),
            Family::Unsupported(lang) => simple::unsupported_layout(lang, config),
            Family::PluralNoun(lang) => simple::plural_noun_family_layout(lang, config),
            Family::English => simple::english_layout(config),
            Family::Romance(lang) => romance::layout(lang, config),
            Family::Romanian => romance::romanian_layout(config),
            Family::Germanic(lang) => germanic::layout(lang, config),
            Family::Greek => germanic::greek_layout(config),
            Family::Slavic(lang) => slavic::layout(lang, config),
            Family::Bulgarian => slavic::bulgarian_layout(config),
            Family::Baltic => slavic::baltic_layout(config),
            Family::Uralic(lang) => uralic::layout(lang, config),
            Family::Turkic(_) => turkic::layout(config),
            Family::Hebrew => semitic::hebrew_layout(config),
            Family::Arabic { .. } => semitic::arabic_layout(config),
            Family::Amharic => semitic::amharic_layout(config),
            Family::Basque => basque::layout(config),
            Family::Korean => korean::layout(config),
            Family::Dravidian(_) => indic::dravidian_layout(config),
            Family::IndoAryan(_) => indic::indo_aryan_layout(config),
            Family::HindiUrdu => indic::hindi_urdu_layout(config),
            Family::Bengali => indic::bengali_layout(config),
            Family::Armenian => armenian::layout(config),
        }
    }

    /// The article word placed before a noun with the given agreement.
    ///
    /// `Ok(None)` means the language uses no word for this article here (the
    /// English plural indefinite, any zero article). Families whose articles
    /// must come from the dictionary answer `NoDefaultArticle`.
    pub fn default_article(
        &self,
        language: Language,
        dims: &FormDims,
        article: LanguageArticle,
    ) -> Result<Option<&'static str>> {
        if article == LanguageArticle::Zero {
            return Ok(None);
        }
        let word = match *self {
            Family::English => simple::english_article(dims, article),
            Family::Unsupported(_) => ArticleWord::Word(""),
            Family::PluralNoun(PluralNounLanguage::Esperanto) => simple::esperanto_article(article),
            Family::Romance(lang) => romance::article(lang, dims, article),
            Family::Romanian => romance::romanian_article(dims, article),
            Family::Germanic(lang) => germanic::article(lang, dims, article),
            Family::Greek => germanic::greek_article(dims, article),
            Family::Uralic(UralicLanguage::Hungarian) => uralic::hungarian_article(dims, article),
            Family::Turkic(lang) => turkic::article(lang, dims, article),
            Family::Hebrew | Family::Arabic { .. } | Family::Amharic => {
                semitic::article(self.definite_prefix(), article)
            }
            Family::Bengali => ArticleWord::FromDictionary,
            _ => ArticleWord::None,
        };
        match word {
            ArticleWord::Word(word) => Ok(Some(word)),
            ArticleWord::None => Ok(None),
            ArticleWord::FromDictionary => Err(DeclensionError::NoDefaultArticle {
                language: language.locale().to_string(),
                article,
            }),
        }
    }

    /// The definite prefix of the Semitic families; empty elsewhere.
    pub fn definite_prefix(&self) -> &'static str {
        match self {
            Family::Hebrew => semitic::HEBREW_DEFINITE_PREFIX,
            Family::Arabic { .. } => semitic::ARABIC_DEFINITE_PREFIX,
            _ => "",
        }
    }

    pub(crate) fn gender_policy(&self) -> GenderPolicy {
        match self {
            Family::Germanic(_)
            | Family::Greek
            | Family::Slavic(_)
            | Family::Baltic
            | Family::IndoAryan(_) => GenderPolicy::ResetInvalid,
            Family::Romance(_) => GenderPolicy::ResetNeuter,
            Family::Uralic(UralicLanguage::Finnish | UralicLanguage::Estonian) => {
                GenderPolicy::ResetNonNeuter
            }
            Family::PluralNoun(PluralNounLanguage::Indonesian)
            | Family::Uralic(UralicLanguage::Hungarian)
            | Family::Turkic(_)
            | Family::Armenian => GenderPolicy::WarnNonNeuter,
            _ => GenderPolicy::Accept,
        }
    }

    /// Whether a legacy article is joined to its noun with a space instead of
    /// being prepended to the lowercased noun.
    pub(crate) fn spaces_legacy_article(&self) -> bool {
        matches!(self, Family::Germanic(_) | Family::Greek | Family::PluralNoun(PluralNounLanguage::Esperanto))
    }

    /// Lowercases a noun for use after an article or inside a compound.
    pub fn format_lowercase(&self, value: &str, article: LanguageArticle, config: &DeclensionConfig) -> String {
        if !config.has_capitalization {
            return value.to_string();
        }
        match self {
            Family::Germanic(GermanicLanguage::German) => {
                if article == LanguageArticle::Zero {
                    return value.to_string();
                }
                let mut chars = value.chars();
                match chars.next() {
                    Some(first) => first.to_lowercase().chain(chars).collect(),
                    None => String::new(),
                }
            }
            _ => value.to_lowercase(),
        }
    }

    /// The counting classifier used when a noun supplies none.
    pub fn default_classifier(&self, language: Language) -> Option<&'static str> {
        match self {
            Family::Simple(SimpleKind::Classifier | SimpleKind::Vietnamese) | Family::Korean => {
                Some(simple::default_classifier(language))
            }
            _ => None,
        }
    }
}

/// A default article lookup result before it is tied to a language.
pub(crate) enum ArticleWord {
    Word(&'static str),
    None,
    FromDictionary,
}

/// What noun validation does with a gender the family does not use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum GenderPolicy {
    Accept,
    WarnNonNeuter,
    ResetInvalid,
    ResetNeuter,
    ResetNonNeuter,
}

/// How exact lookups treat dimensions a form list never varies along.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup {
    /// Every requested dimension must match a form.
    Strict,
    /// Dimensions that are constant across the list are ignored.
    Lenient,
    /// Lenient, except that the listed dimensions must match.
    StrictOn(&'static [Dim]),
}

impl Lookup {
    /// Whether a constant dimension may be substituted for the request.
    pub(crate) fn pins(&self, dim: Dim) -> bool {
        match self {
            Lookup::Strict => false,
            Lookup::Lenient => true,
            Lookup::StrictOn(strict) => !strict.contains(&dim),
        }
    }
}

/// How noun validation treats missing forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NounValidation {
    /// Entity nouns fill gaps from the closest stored form; other nouns must
    /// supply every field form.
    Default,
    /// Like `Default`, but nouns that are not entities always pass.
    EntitiesOnly,
    /// Every field form must be supplied; nothing is filled.
    Strict,
    /// Only the singular nominative is required.
    Singular,
    /// Any one stored value is enough.
    AnyValue,
    /// Hebrew: entity nouns derive the plural and the definite forms.
    Hebrew,
    /// Entity nouns derive the plural and the oblique or genitive forms from
    /// the nominatives (Hindi, Urdu, Irish).
    DeriveFromNominative,
    /// Arabic: entity nouns derive the definite forms; accusatives are skipped.
    Arabic,
    /// Amharic: accusatives are skipped and nothing is stored.
    Amharic,
}

/// How adjective and article validation treats missing forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModifierValidation {
    /// Fill every gap from a nearby form; fail only without any default value.
    Fill,
    /// Fill every gap, then accept the word regardless.
    FillAlways,
    /// Any one stored value is enough; nothing is filled.
    AnyValue,
}

/// A subset of the noun form list.
#[derive(Debug, Clone, Copy)]
pub enum Selection {
    All,
    First(usize),
    Where(fn(&FormDims) -> bool),
}

impl Selection {
    pub(crate) fn pick(&self, forms: &[FormDims]) -> Vec<usize> {
        match *self {
            Selection::All => (0..forms.len()).collect(),
            Selection::First(n) => (0..n.min(forms.len())).collect(),
            Selection::Where(keep) => {
                forms.iter().enumerate().filter(|(_, d)| keep(d)).map(|(i, _)| i).collect()
            }
        }
    }
}

/// The ordered form lists of one family, with their key layouts.
#[derive(Debug, Clone)]
pub struct FormLayout {
    pub nouns: Vec<FormDims>,
    pub noun_key: KeyStyle,
    pub noun_lookup: Lookup,
    pub entity: Selection,
    pub field: Selection,
    pub other: Selection,
    pub adjectives: Vec<FormDims>,
    pub adjective_key: KeyStyle,
    pub adjective_lookup: Lookup,
    pub articles: Vec<FormDims>,
    pub article_key: KeyStyle,
    pub article_lookup: Lookup,
    pub noun_validation: NounValidation,
    /// Forms whose absence is logged during modifier validation.
    pub adjective_required: Selection,
    pub adjective_validation: ModifierValidation,
    pub article_required: Selection,
    pub article_validation: ModifierValidation,
}

pub(crate) const NUMBER_KEY: KeyStyle = KeyStyle::dashed(&[Dim::Number]);

impl FormLayout {
    /// A layout with the given nouns, one invariant adjective and no article
    /// forms. Every noun is an entity and field form; "other" is the first.
    pub(crate) fn nouns(nouns: Vec<FormDims>, noun_key: KeyStyle, config: &DeclensionConfig) -> Self {
        Self {
            nouns,
            noun_key,
            noun_lookup: Lookup::Strict,
            entity: Selection::All,
            field: Selection::All,
            other: Selection::First(1),
            adjectives: vec![base(config)],
            adjective_key: NUMBER_KEY,
            adjective_lookup: Lookup::Lenient,
            articles: Vec::new(),
            article_key: NUMBER_KEY,
            article_lookup: Lookup::Lenient,
            noun_validation: NounValidation::Default,
            adjective_required: Selection::First(1),
            adjective_validation: ModifierValidation::Fill,
            article_required: Selection::First(1),
            article_validation: ModifierValidation::Fill,
        }
    }

    /// A layout with a single uninflected noun form.
    pub(crate) fn single(config: &DeclensionConfig) -> Self {
        Self {
            noun_lookup: Lookup::Lenient,
            noun_validation: NounValidation::Singular,
            ..Self::nouns(vec![base(config)], NUMBER_KEY, config)
        }
    }

    /// Adds one invariant article form.
    pub(crate) fn with_simple_article(mut self, config: &DeclensionConfig) -> Self {
        self.articles = vec![base(config)];
        self
    }
}

/// The singular nominative base for a family's forms.
pub(crate) fn base(config: &DeclensionConfig) -> FormDims {
    FormDims::base(config.default_gender, config.default_starts_with)
}

/// One axis of a form grid.
pub(crate) enum Axis<'a> {
    Number(&'a [LanguageNumber]),
    Case(&'a [LanguageCase]),
    Gender(&'a [LanguageGender]),
    Article(&'a [LanguageArticle]),
    Possessive(&'a [LanguagePossessive]),
    StartsWith(&'a [LanguageStartsWith]),
}

/// Cartesian product of the axes over `base`; the first axis is outermost.
pub(crate) fn grid(base: FormDims, axes: &[Axis<'_>]) -> Vec<FormDims> {
    let mut forms = vec![base];
    for axis in axes {
        forms = forms
            .into_iter()
            .flat_map(|dims| -> Vec<FormDims> {
                match axis {
                    Axis::Number(values) => values.iter().map(|&v| dims.with_number(v)).collect(),
                    Axis::Case(values) => values.iter().map(|&v| dims.with_case(v)).collect(),
                    Axis::Gender(values) => values.iter().map(|&v| dims.with_gender(v)).collect(),
                    Axis::Article(values) => values.iter().map(|&v| dims.with_article(v)).collect(),
                    Axis::Possessive(values) => {
                        values.iter().map(|&v| dims.with_possessive(v)).collect()
                    }
                    Axis::StartsWith(values) => {
                        values.iter().map(|&v| dims.with_starts_with(v)).collect()
                    }
                }
            })
            .collect();
    }
    forms
}

pub(crate) const SG_PL: &[LanguageNumber] = &[LanguageNumber::Singular, LanguageNumber::Plural];

/// Nominative without a possessive suffix; the field forms of possessive
/// languages.
pub(crate) fn nominative_unpossessed(dims: &FormDims) -> bool {
    dims.case == LanguageCase::Nominative && dims.possessive == LanguagePossessive::None
}

/// True when the form is for a vowel-initial word, for article elision.
pub(crate) fn starts_with_vowel(dims: &FormDims) -> bool {
    dims.starts_with == LanguageStartsWith::Vowel
}

#[cfg(test)]
mod tests {
    use super::*;
    use declina_protocol::LanguageCase::{Dative, Nominative};

    #[test]
    fn grid_is_outermost_first() {
        let base = FormDims::base(LanguageGender::Neuter, LanguageStartsWith::Consonant);
        let forms = grid(base, &[Axis::Number(SG_PL), Axis::Case(&[Nominative, Dative])]);
        let tuples: Vec<_> = forms.iter().map(|d| (d.number, d.case)).collect();
        assert_eq!(
            tuples,
            vec![
                (LanguageNumber::Singular, Nominative),
                (LanguageNumber::Singular, Dative),
                (LanguageNumber::Plural, Nominative),
                (LanguageNumber::Plural, Dative),
            ]
        );
    }

    #[test]
    fn selection_picks_indices() {
        let base = FormDims::base(LanguageGender::Neuter, LanguageStartsWith::Consonant);
        let forms = grid(base, &[Axis::Number(SG_PL), Axis::Case(&[Nominative, Dative])]);
        assert_eq!(Selection::All.pick(&forms).len(), 4);
        assert_eq!(Selection::First(1).pick(&forms), vec![0]);
        assert_eq!(Selection::First(9).pick(&forms).len(), 4);
        assert_eq!(Selection::Where(FormDims::is_nominative).pick(&forms), vec![0, 2]);
    }

    #[test]
    fn language_codes_map_to_families() {
        let config = FactoryConfig::default();
        assert_eq!(Family::for_language("sh", &config), Some(Family::Slavic(SlavicLanguage::SerboCroatian)));
        assert_eq!(Family::for_language("mk", &config), Some(Family::Bulgarian));
        assert_eq!(Family::for_language("ar", &config), Some(Family::Arabic { accusative_alif: false }));
        assert_eq!(Family::for_language("sw", &config), None);
        assert_eq!(Family::for_language("haw", &config), None);

        let alif = FactoryConfig { arabic_accusative_alif: true, ..FactoryConfig::default() };
        assert_eq!(Family::for_language("ar", &alif), Some(Family::Arabic { accusative_alif: true }));
    }

    #[test]
    fn zero_article_has_no_word() {
        let dims = FormDims::base(LanguageGender::Feminine, LanguageStartsWith::Vowel);
        let de = Family::Germanic(GermanicLanguage::Swedish);
        let sv = Language::from_locale("sv").unwrap();
        assert_eq!(de.default_article(sv, &dims, LanguageArticle::Zero).unwrap(), None);
        assert!(matches!(
            de.default_article(sv, &dims, LanguageArticle::Definite),
            Err(DeclensionError::NoDefaultArticle { .. })
        ));
    }
}
