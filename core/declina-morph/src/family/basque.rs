//! Basque.
//!
//! Only a sparse set of noun forms is stored. Any other request is rendered
//! from the bare stem by suffixing, with two sound rules applied in order:
//! a stem-final `a` is absorbed before a suffix beginning with `a` or `e`,
//! and a stem ending in `r` doubles it before a vowel-initial suffix.

use declina_protocol::{LanguageArticle, LanguageCase, LanguageNumber, LanguagePosition, StemFlags};

use super::{base, FormLayout, ModifierValidation, NounValidation, Selection};
use crate::config::DeclensionConfig;
use crate::form::{Dim, FormDims, KeyStyle};

use LanguageArticle::{Definite, Indefinite, Zero};
use LanguageCase::*;
use LanguageNumber::{Plural, Singular};

const NOUN_KEY: KeyStyle = KeyStyle::new(&[Dim::Number, Dim::Case, Dim::Article], ':');
const ADJECTIVE_KEY: KeyStyle = KeyStyle::new(&[Dim::Number, Dim::Case], ':');

/// The stored noun overrides, in ordinal order. The first is the bare stem.
const NOUN_OVERRIDES: &[(LanguageNumber, LanguageCase, LanguageArticle)] = &[
    (Singular, Nominative, Zero),
    (Singular, Nominative, Definite),
    (Plural, Nominative, Definite),
    (Plural, Ergative, Definite),
    (Plural, Dative, Definite),
    (Plural, Genitive, Definite),
    (Plural, Locative, Definite),
    (Plural, Inessive, Definite),
    (Plural, Allative, Definite),
    (Plural, Ablative, Definite),
    (Plural, Instrumental, Definite),
    (Plural, Comitative, Definite),
    (Plural, Benefactive, Definite),
    (Singular, Ergative, Definite),
    (Singular, Dative, Definite),
    (Singular, Genitive, Definite),
    (Singular, Nominative, Indefinite),
    (Singular, Ergative, Indefinite),
    (Singular, Dative, Indefinite),
    (Singular, Genitive, Indefinite),
];

const ADJECTIVE_CASES: &[LanguageCase] = &[
    Nominative, Ergative, Dative, Genitive, Locative, Inessive, Allative, Ablative, Instrumental, Comitative,
    Benefactive,
];

const ALLOWED_CASES: &[LanguageCase] = &[
    Nominative, Ergative, Dative, Genitive, Inessive, Allative, Ablative, Instrumental, Comitative, Benefactive,
    Partitive, Locative,
];

pub(crate) fn config() -> DeclensionConfig {
    let mut allowed_cases = ALLOWED_CASES.to_vec();
    allowed_cases.sort_unstable();
    DeclensionConfig {
        has_article_in_noun_form: true,
        article_in_noun_form_auto_derived: true,
        allowed_cases,
        allowed_article_types: vec![Zero, Indefinite, Definite],
        default_article: Indefinite,
        default_adjective_position: LanguagePosition::Post,
        ..DeclensionConfig::default()
    }
}

pub(crate) fn layout(config: &DeclensionConfig) -> FormLayout {
    let nouns = NOUN_OVERRIDES
        .iter()
        .map(|&(number, case, article)| base(config).with_number(number).with_case(case).with_article(article))
        .collect();
    let mut adjectives: Vec<FormDims> = ADJECTIVE_CASES
        .iter()
        .flat_map(|&case| {
            let singular = base(config).with_case(case);
            [singular, singular.with_number(Plural)]
        })
        .collect();
    adjectives.push(base(config).with_case(Partitive));
    FormLayout {
        other: Selection::All,
        noun_validation: NounValidation::AnyValue,
        adjectives,
        adjective_key: ADJECTIVE_KEY,
        adjective_validation: ModifierValidation::AnyValue,
        ..FormLayout::nouns(nouns, NOUN_KEY, config)
    }
}

fn override_index(number: LanguageNumber, case: LanguageCase, article: LanguageArticle) -> Option<usize> {
    NOUN_OVERRIDES.iter().position(|&o| o == (number, case, article))
}

/// The stored override a request reads from. Requests with no override of
/// their own read the bare stem.
pub(crate) fn noun_override(number: LanguageNumber, case: LanguageCase, article: LanguageArticle) -> usize {
    let number = if number.is_plural() { Plural } else { Singular };
    let article = if number == Plural { Definite } else { article };
    let index = match article {
        Definite | Indefinite => override_index(number, case, article),
        _ => None,
    };
    index.unwrap_or(0)
}

/// The adjective form for a case and number. Partitive has only a singular;
/// cases without a form fall back to the absolutive singular.
pub(crate) fn adjective_index(number: LanguageNumber, case: LanguageCase) -> usize {
    if case == Partitive {
        return ADJECTIVE_CASES.len() * 2;
    }
    ADJECTIVE_CASES
        .iter()
        .position(|&c| c == case)
        .map_or(0, |i| i * 2 + usize::from(number.is_plural()))
}

/// Noun requests that are answered by a fixed override rather than
/// rendered.
pub(crate) fn canonical_noun(number: LanguageNumber, article: LanguageArticle) -> usize {
    match (number.is_plural(), article) {
        (true, _) => 2,
        (false, Definite) => 1,
        (false, Indefinite) => 16,
        _ => 0,
    }
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

/// Classifies how a lowercased stem ends. A final `h` is looked through.
pub fn stem_flags(lower: &str) -> StemFlags {
    let mut chars = lower.chars().rev();
    let Some(last) = chars.next() else {
        return StemFlags::empty();
    };
    let mut flags = StemFlags::empty();
    let target = if last == 'h' {
        flags |= StemFlags::ENDS_WITH_H;
        chars.next().unwrap_or(last)
    } else {
        last
    };
    flags.set(StemFlags::ENDS_WITH_A, target == 'a');
    flags.set(StemFlags::ENDS_WITH_R, target == 'r');
    flags.set(StemFlags::ENDS_WITH_VOWEL, is_vowel(target));
    flags
}

/// Suffixes per case: indefinite after a vowel, after a consonant, definite
/// singular after a vowel, after a consonant, definite plural.
const SUFFIXES: &[(LanguageCase, [&str; 5])] = &[
    (Nominative, ["a", "a", "a", "a", "ak"]),
    (Ergative, ["k", "ek", "ak", "ak", "ek"]),
    (Dative, ["ri", "i", "ari", "ari", "ei"]),
    (Genitive, ["ren", "en", "aren", "aren", "en"]),
    (Locative, ["ko", "eko", "ko", "eko", "etako"]),
    (Inessive, ["tan", "etan", "an", "ean", "etan"]),
    (Allative, ["tara", "etara", "ra", "era", "etara"]),
    (Ablative, ["tatik", "etatik", "tik", "etik", "etatik"]),
    (Instrumental, ["z", "ez", "az", "az", "ez"]),
    (Comitative, ["rekin", "ekin", "arekin", "arekin", "ekin"]),
    (Benefactive, ["rentzat", "entzat", "arentzat", "arentzat", "entzat"]),
];

/// Stems whose final `r` never doubles.
const UR_WORDS: &[&str] = &["ur", "paper", "plater"];

fn choose_suffix(case: LanguageCase, indefinite: bool, plural: bool, vowel: bool) -> &'static str {
    if case == Partitive {
        return if vowel { "rik" } else { "ik" };
    }
    if case == Nominative && indefinite {
        return "";
    }
    let Some((_, choices)) = SUFFIXES.iter().find(|(c, _)| *c == case) else {
        return "";
    };
    let column = match (plural, indefinite, vowel) {
        (true, _, _) => 4,
        (false, true, true) => 0,
        (false, true, false) => 1,
        (false, false, true) => 2,
        (false, false, false) => 3,
    };
    choices[column]
}

fn is_indefinite(number: LanguageNumber, article: LanguageArticle) -> bool {
    number != Plural && matches!(article, Indefinite | Zero)
}

/// Renders a case form from the bare stem.
pub fn render_surface(base: &str, case: LanguageCase, number: LanguageNumber, article: LanguageArticle) -> String {
    render_with_flags(base, case, number, article, stem_flags(&base.to_lowercase()))
}

/// Renders a case form using stem flags computed when the stem was stored.
pub fn render_with_flags(
    base: &str,
    case: LanguageCase,
    number: LanguageNumber,
    article: LanguageArticle,
    flags: StemFlags,
) -> String {
    let indefinite = is_indefinite(number, article);
    if case == Nominative && indefinite {
        return base.to_string();
    }
    let suffix = choose_suffix(case, indefinite, number.is_plural(), flags.contains(StemFlags::ENDS_WITH_VOWEL));

    let absorb = flags.contains(StemFlags::ENDS_WITH_A) && suffix.starts_with(['a', 'e']);
    let stem = match base.char_indices().last() {
        Some((i, _)) if absorb => &base[..i],
        _ => base,
    };

    let lower = base.to_lowercase();
    let doubles = flags.contains(StemFlags::ENDS_WITH_R)
        && !UR_WORDS.contains(&lower.as_str())
        && suffix.starts_with(is_vowel);
    if doubles {
        format!("{stem}r{suffix}")
    } else {
        format!("{stem}{suffix}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_absolutive_is_the_stem() {
        assert_eq!(render_surface("etxe", Nominative, Singular, Indefinite), "etxe");
        assert_eq!(render_surface("etxe", Nominative, Singular, Zero), "etxe");
    }

    #[test]
    fn vowel_and_consonant_stems() {
        assert_eq!(render_surface("mendi", Ergative, Singular, Indefinite), "mendik");
        assert_eq!(render_surface("mendi", Ergative, Singular, Definite), "mendiak");
        assert_eq!(render_surface("mendi", Nominative, Plural, Definite), "mendiak");
        assert_eq!(render_surface("etxe", Inessive, Singular, Definite), "etxean");
        assert_eq!(render_surface("etxe", Inessive, Plural, Definite), "etxeetan");
        assert_eq!(render_surface("lan", Genitive, Singular, Indefinite), "lanen");
        assert_eq!(render_surface("mendi", Partitive, Singular, Indefinite), "mendirik");
        assert_eq!(render_surface("lan", Partitive, Singular, Indefinite), "lanik");
    }

    #[test]
    fn final_a_is_absorbed() {
        assert_eq!(render_surface("neska", Nominative, Singular, Definite), "neska");
        assert_eq!(render_surface("neska", Nominative, Plural, Definite), "neskak");
        assert_eq!(render_surface("neska", Ergative, Plural, Definite), "neskek");
        assert_eq!(render_surface("neska", Dative, Singular, Indefinite), "neskari");
    }

    #[test]
    fn final_r_doubles_except_listed_words() {
        assert_eq!(render_surface("txakur", Ergative, Singular, Definite), "txakurrak");
        assert_eq!(render_surface("txakur", Inessive, Singular, Indefinite), "txakurretan");
        assert_eq!(render_surface("ur", Ergative, Singular, Definite), "urak");
        assert_eq!(render_surface("paper", Dative, Plural, Definite), "paperei");
    }

    #[test]
    fn stem_flags_look_through_h() {
        assert_eq!(stem_flags("etxe"), StemFlags::ENDS_WITH_VOWEL);
        assert_eq!(stem_flags("neska"), StemFlags::ENDS_WITH_A | StemFlags::ENDS_WITH_VOWEL);
        assert_eq!(stem_flags("txakur"), StemFlags::ENDS_WITH_R);
        assert_eq!(stem_flags("bah"), StemFlags::ENDS_WITH_H | StemFlags::ENDS_WITH_A | StemFlags::ENDS_WITH_VOWEL);
        assert_eq!(stem_flags(""), StemFlags::empty());
    }

    #[test]
    fn override_lookup() {
        assert_eq!(noun_override(Singular, Nominative, Zero), 0);
        assert_eq!(noun_override(Plural, Ergative, Indefinite), 3);
        assert_eq!(noun_override(Singular, Dative, Definite), 14);
        assert_eq!(noun_override(Singular, Inessive, Definite), 0);
        assert_eq!(noun_override(Singular, Genitive, Indefinite), 19);
        assert_eq!(canonical_noun(Plural, Zero), 2);
        assert_eq!(canonical_noun(Singular, Indefinite), 16);
    }

    #[test]
    fn layout_shape() {
        let config = config();
        let layout = layout(&config);
        assert_eq!(layout.nouns.len(), 20);
        assert_eq!(layout.adjectives.len(), 23);
        assert_eq!(layout.noun_key.render(&layout.nouns[3]), "1:er:d");
        assert_eq!(adjective_index(Plural, Ergative), 3);
        assert_eq!(adjective_index(Plural, Partitive), 22);
        assert_eq!(adjective_index(Singular, Vocative), 0);
        assert_eq!(config.default_article, Indefinite);
        assert!(!config.has_article);
    }
}
