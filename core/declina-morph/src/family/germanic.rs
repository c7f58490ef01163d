//! Germanic languages, plus Greek and Albanian which decline the same way.
//!
//! Nouns vary by number, case and (for the Nordic languages and Albanian)
//! a suffixed article. Adjectives agree in gender, number and case, and take
//! a separate weak form after a definite article.

use declina_protocol::{LanguageArticle, LanguageCase, LanguageGender, LanguagePosition, LanguageStartsWith};

use super::{base, grid, ArticleWord, Axis, FormLayout, ModifierValidation, Selection};
use crate::config::DeclensionConfig;
use crate::form::{Dim, FormDims, KeyStyle};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GermanicLanguage {
    German,
    Swedish,
    Dutch,
    Danish,
    Norwegian,
    Icelandic,
    Luxembourgish,
    Yiddish,
    Albanian,
}

use LanguageArticle::{Definite, Indefinite, Zero};
use LanguageCase::{Ablative, Accusative, Dative, Genitive, Nominative, Vocative};
use LanguageGender::{Feminine, Masculine, Neuter};

const ZERO: &[LanguageArticle] = &[Zero];
const ZERO_AND_DEFINITE: &[LanguageArticle] = &[Zero, Definite];
const ALL_ARTICLES: &[LanguageArticle] = &[Zero, Indefinite, Definite];
const THREE_GENDERS: &[LanguageGender] = &[Neuter, Feminine, Masculine];
const COMMON_GENDERS: &[LanguageGender] = &[Neuter, LanguageGender::COMMON];
const EUTER_GENDERS: &[LanguageGender] = &[Neuter, LanguageGender::EUTER];

struct Profile {
    cases: &'static [LanguageCase],
    genders: &'static [LanguageGender],
    noun_articles: &'static [LanguageArticle],
    adjective_articles: &'static [LanguageArticle],
    starts_with: &'static [LanguageStartsWith],
}

impl GermanicLanguage {
    fn profile(self) -> Profile {
        use GermanicLanguage::*;
        let (cases, genders, noun_articles, adjective_articles): (&'static [LanguageCase], _, _, _) =
            match self {
                German => (&[Nominative, Accusative, Genitive, Dative], THREE_GENDERS, ZERO, ZERO_AND_DEFINITE),
                Swedish => (&[Nominative], EUTER_GENDERS, ALL_ARTICLES, ZERO_AND_DEFINITE),
                Dutch => (&[Nominative], COMMON_GENDERS, ZERO, ZERO_AND_DEFINITE),
                Danish => (&[Nominative], COMMON_GENDERS, ALL_ARTICLES, ZERO_AND_DEFINITE),
                Norwegian => (&[Nominative], THREE_GENDERS, ALL_ARTICLES, ZERO_AND_DEFINITE),
                Icelandic => {
                    (&[Nominative, Accusative, Genitive, Dative], THREE_GENDERS, ZERO_AND_DEFINITE, ZERO_AND_DEFINITE)
                }
                Luxembourgish => (&[Nominative, Dative], THREE_GENDERS, ZERO, ZERO_AND_DEFINITE),
                Yiddish => (&[Nominative, Accusative, Dative], THREE_GENDERS, ZERO, ZERO_AND_DEFINITE),
                Albanian => {
                    (&[Nominative, Accusative, Genitive, Dative, Ablative], THREE_GENDERS, ALL_ARTICLES, ALL_ARTICLES)
                }
            };
        let starts_with: &'static [LanguageStartsWith] = match self {
            Yiddish => &[LanguageStartsWith::Consonant, LanguageStartsWith::Vowel],
            _ => &[LanguageStartsWith::Consonant],
        };
        Profile { cases, genders, noun_articles, adjective_articles, starts_with }
    }
}

fn profile_config(profile: &Profile) -> DeclensionConfig {
    DeclensionConfig {
        has_article: true,
        has_article_in_noun_form: profile.noun_articles.len() > 1,
        has_starts_with: profile.starts_with.len() > 1,
        allowed_article_types: ALL_ARTICLES.to_vec(),
        required_noun_articles: profile.noun_articles.to_vec(),
        required_starts_with: profile.starts_with.to_vec(),
        should_lowercase_entity_in_compound_nouns: true,
        ..DeclensionConfig::default()
    }
    .with_cases(profile.cases)
    .with_genders(profile.genders, Neuter)
}

pub(crate) fn config(lang: GermanicLanguage) -> DeclensionConfig {
    let config = profile_config(&lang.profile());
    match lang {
        GermanicLanguage::German => {
            DeclensionConfig { should_lowercase_entity_in_compound_nouns: false, ..config }
        }
        GermanicLanguage::Norwegian | GermanicLanguage::Icelandic => {
            DeclensionConfig { infer_noun_def_article_from_particle: true, ..config }
        }
        GermanicLanguage::Albanian => {
            DeclensionConfig { default_adjective_position: LanguagePosition::Post, ..config }
        }
        _ => config,
    }
}

fn profile_layout(profile: &Profile, config: &DeclensionConfig) -> FormLayout {
    let nouns = grid(
        base(config),
        &[
            Axis::Number(&config.allowed_numbers),
            Axis::Case(profile.cases),
            Axis::Article(profile.noun_articles),
        ],
    );
    let noun_key = if profile.noun_articles.len() > 1 {
        KeyStyle::dashed(&[Dim::Number, Dim::Case, Dim::Article])
    } else {
        KeyStyle::dashed(&[Dim::Number, Dim::Case])
    };
    let adjectives = grid(
        base(config),
        &[
            Axis::StartsWith(profile.starts_with),
            Axis::Number(&config.allowed_numbers),
            Axis::Gender(profile.genders),
            Axis::Article(profile.adjective_articles),
            Axis::Case(profile.cases),
        ],
    );
    let adjective_key = if config.has_starts_with {
        KeyStyle::dashed(&[Dim::Gender, Dim::Number, Dim::Case, Dim::Article, Dim::StartsWith])
    } else {
        KeyStyle::dashed(&[Dim::Gender, Dim::Number, Dim::Case, Dim::Article])
    };
    let articles = grid(
        base(config),
        &[
            Axis::StartsWith(profile.starts_with),
            Axis::Number(&config.allowed_numbers),
            Axis::Gender(profile.genders),
            Axis::Case(profile.cases),
        ],
    );
    FormLayout {
        field: Selection::Where(FormDims::is_nominative_zero),
        adjectives,
        adjective_key,
        adjective_validation: ModifierValidation::FillAlways,
        articles,
        article_key: KeyStyle::dashed(&[Dim::Gender, Dim::Number, Dim::Case, Dim::StartsWith]),
        article_validation: ModifierValidation::FillAlways,
        ..FormLayout::nouns(nouns, noun_key, config)
    }
}

pub(crate) fn layout(lang: GermanicLanguage, config: &DeclensionConfig) -> FormLayout {
    profile_layout(&lang.profile(), config)
}

fn gender_slot(gender: LanguageGender) -> usize {
    match gender {
        Feminine => 1,
        Masculine => 2,
        _ => 0,
    }
}

/// Definite article words indexed `[case][plural][neuter, feminine, masculine]`.
type DefiniteTable = [(LanguageCase, [[&'static str; 3]; 2])];
/// Indefinite singular article words indexed `[case][neuter, feminine, masculine]`.
type IndefiniteTable = [(LanguageCase, [&'static str; 3])];

const GERMAN_DEFINITE: &DefiniteTable = &[
    (Nominative, [["Das", "Die", "Der"], ["Die", "Die", "Die"]]),
    (Accusative, [["Das", "Die", "Den"], ["Die", "Die", "Die"]]),
    (Genitive, [["Des", "Der", "Des"], ["Der", "Der", "Der"]]),
    (Dative, [["Dem", "Der", "Dem"], ["Den", "Den", "Den"]]),
];
const GERMAN_INDEFINITE: &IndefiniteTable = &[
    (Nominative, ["Ein", "Eine", "Ein"]),
    (Accusative, ["Ein", "Eine", "Einen"]),
    (Genitive, ["Eines", "Einer", "Eines"]),
    (Dative, ["Einem", "Einer", "Einem"]),
];
const LUXEMBOURGISH_DEFINITE: &DefiniteTable = &[
    (Nominative, [["D'", "D'", "Den"], ["D'", "D'", "D'"]]),
    (Dative, [["Dem", "Der", "Dem"], ["Den", "Den", "Den"]]),
];
const LUXEMBOURGISH_INDEFINITE: &IndefiniteTable = &[
    (Nominative, ["En", "Eng", "En"]),
    (Dative, ["Engem", "Enger", "Engem"]),
];
const YIDDISH_DEFINITE: &IndefiniteTable = &[
    (Nominative, ["דאָס", "די", "דער"]),
    (Accusative, ["דאָס", "די", "דעם"]),
    (Dative, ["דעם", "דער", "דעם"]),
];
const GREEK_DEFINITE: &DefiniteTable = &[
    (Nominative, [["το", "η", "ο"], ["τα", "οι", "οι"]]),
    (Accusative, [["το", "τη", "το"], ["τα", "τις", "τους"]]),
    (Genitive, [["του", "της", "του"], ["των", "των", "των"]]),
];
const GREEK_INDEFINITE: &IndefiniteTable = &[
    (Nominative, ["ένα", "μία", "ένας"]),
    (Accusative, ["ένα", "μία", "ένα"]),
    (Genitive, ["ενός", "μιας", "ενός"]),
];

fn definite(table: &DefiniteTable, dims: &FormDims) -> ArticleWord {
    table
        .iter()
        .find(|(case, _)| *case == dims.case)
        .map_or(ArticleWord::None, |(_, words)| {
            ArticleWord::Word(words[usize::from(dims.number.is_plural())][gender_slot(dims.gender)])
        })
}

fn indefinite(table: &IndefiniteTable, dims: &FormDims) -> ArticleWord {
    if dims.number.is_plural() {
        return ArticleWord::None;
    }
    table
        .iter()
        .find(|(case, _)| *case == dims.case)
        .map_or(ArticleWord::None, |(_, words)| ArticleWord::Word(words[gender_slot(dims.gender)]))
}

pub(crate) fn article(lang: GermanicLanguage, dims: &FormDims, article: LanguageArticle) -> ArticleWord {
    use GermanicLanguage::*;
    match (lang, article) {
        (German, Definite) => definite(GERMAN_DEFINITE, dims),
        (German, Indefinite) => indefinite(GERMAN_INDEFINITE, dims),
        (Luxembourgish, Definite) => definite(LUXEMBOURGISH_DEFINITE, dims),
        (Luxembourgish, Indefinite) => indefinite(LUXEMBOURGISH_INDEFINITE, dims),
        (Dutch, Definite) if !dims.number.is_plural() && dims.gender == Neuter => ArticleWord::Word("Het"),
        (Dutch, Definite) => ArticleWord::Word("De"),
        (Dutch, Indefinite) if dims.number.is_plural() => ArticleWord::None,
        (Dutch, Indefinite) => ArticleWord::Word("Een"),
        (Yiddish, Definite) if dims.number.is_plural() => ArticleWord::Word("די"),
        (Yiddish, Definite) => indefinite(YIDDISH_DEFINITE, dims),
        (Yiddish, Indefinite) if dims.number.is_plural() => ArticleWord::None,
        (Yiddish, Indefinite) if dims.starts_with == LanguageStartsWith::Vowel => ArticleWord::Word("אַן"),
        (Yiddish, Indefinite) => ArticleWord::Word("אַ"),
        (German | Luxembourgish | Dutch | Yiddish, _) => ArticleWord::None,
        // Suffixed articles are part of the dictionary.
        (Swedish | Danish | Norwegian | Icelandic | Albanian, _) => ArticleWord::FromDictionary,
    }
}

const GREEK_STARTS_WITH: &[LanguageStartsWith] = &[LanguageStartsWith::Consonant, LanguageStartsWith::Special];

fn greek_profile() -> Profile {
    Profile {
        cases: &[Nominative, Accusative, Genitive, Vocative],
        genders: THREE_GENDERS,
        noun_articles: ZERO,
        adjective_articles: ZERO,
        starts_with: GREEK_STARTS_WITH,
    }
}

pub(crate) fn greek_config() -> DeclensionConfig {
    DeclensionConfig { has_auto_derived_starts_with: true, ..profile_config(&greek_profile()) }
}

pub(crate) fn greek_layout(config: &DeclensionConfig) -> FormLayout {
    profile_layout(&greek_profile(), config)
}

pub(crate) fn greek_article(dims: &FormDims, article: LanguageArticle) -> ArticleWord {
    let plosive_accusative = dims.starts_with == LanguageStartsWith::Special
        && dims.case == Accusative
        && !dims.number.is_plural();
    match article {
        Definite if plosive_accusative && dims.gender == Masculine => ArticleWord::Word("τον"),
        Definite if plosive_accusative && dims.gender == Feminine => ArticleWord::Word("την"),
        Definite if dims.case == Vocative => ArticleWord::Word(""),
        Definite => definite(GREEK_DEFINITE, dims),
        Indefinite if plosive_accusative && dims.gender == Masculine => ArticleWord::Word("έναν"),
        Indefinite => indefinite(GREEK_INDEFINITE, dims),
        _ => ArticleWord::None,
    }
}

// κ, π, τ, μπ, ντ, γκ, τσ, τζ, ξ, ψ
const PLOSIVES: &[&str] = &["κ", "π", "τ", "μπ", "ντ", "γκ", "τσ", "τζ", "ξ", "ψ"];

/// Whether a Greek word begins with a plosive, which changes the accusative
/// article before it.
pub fn greek_starts_with(value: &str) -> bool {
    PLOSIVES.iter().any(|p| value.starts_with(p))
}

#[cfg(test)]
mod tests {
    use super::*;
    use declina_protocol::LanguageNumber;

    fn word(w: ArticleWord) -> Option<&'static str> {
        match w {
            ArticleWord::Word(w) => Some(w),
            _ => None,
        }
    }

    fn dims(case: LanguageCase, gender: LanguageGender) -> FormDims {
        FormDims::base(gender, LanguageStartsWith::Consonant).with_case(case)
    }

    #[test]
    fn german_articles() {
        let de = |d, a| word(article(GermanicLanguage::German, &d, a));
        assert_eq!(de(dims(Accusative, Masculine), Definite), Some("Den"));
        assert_eq!(de(dims(Dative, Feminine).with_number(LanguageNumber::Plural), Definite), Some("Den"));
        assert_eq!(de(dims(Genitive, Feminine), Indefinite), Some("Einer"));
        assert_eq!(de(dims(Nominative, Neuter).with_number(LanguageNumber::Plural), Indefinite), None);
    }

    #[test]
    fn suffixed_articles_come_from_the_dictionary() {
        let sv = article(GermanicLanguage::Swedish, &dims(Nominative, Neuter), Definite);
        assert!(matches!(sv, ArticleWord::FromDictionary));
        let nl = article(GermanicLanguage::Dutch, &dims(Nominative, Neuter), Definite);
        assert_eq!(word(nl), Some("Het"));
    }

    #[test]
    fn german_layout_shape() {
        let config = config(GermanicLanguage::German);
        let layout = layout(GermanicLanguage::German, &config);
        assert_eq!(layout.nouns.len(), 8);
        assert_eq!(Selection::Where(FormDims::is_nominative_zero).pick(&layout.nouns), vec![0, 4]);
        // 2 numbers x 3 genders x 2 articles x 4 cases
        assert_eq!(layout.adjectives.len(), 48);
        assert_eq!(layout.articles.len(), 24);
        assert_eq!(layout.noun_key.render(&layout.nouns[5]), "1-a");
        assert_eq!(layout.adjective_key.render(&layout.adjectives[5]), "n-0-a-d");
        assert!(!config.should_lowercase_entity_in_compound_nouns);
        assert!(!config.has_article_in_noun_form);
    }

    #[test]
    fn swedish_nouns_carry_articles() {
        let config = config(GermanicLanguage::Swedish);
        let layout = layout(GermanicLanguage::Swedish, &config);
        assert!(config.has_article_in_noun_form);
        assert_eq!(layout.nouns.len(), 6);
        assert_eq!(layout.noun_key.render(&layout.nouns[2]), "0-n-d");
        assert_eq!(config.genders(), vec![Neuter, Feminine]);
    }

    #[test]
    fn greek_plosives() {
        assert!(greek_starts_with("ντουλάπα"));
        assert!(greek_starts_with("πόρτα"));
        assert!(!greek_starts_with("άνθρωπος"));
        let acc = FormDims::base(Masculine, LanguageStartsWith::Special).with_case(Accusative);
        assert_eq!(word(greek_article(&acc, Definite)), Some("τον"));
        assert_eq!(word(greek_article(&acc, Indefinite)), Some("έναν"));
        assert_eq!(word(greek_article(&acc.with_starts_with(LanguageStartsWith::Consonant), Definite)), Some("το"));
        assert_eq!(word(greek_article(&acc.with_case(Vocative), Definite)), Some(""));
    }
}
