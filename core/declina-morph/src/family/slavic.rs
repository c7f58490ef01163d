//! Slavic languages with full case systems, Georgian, the Baltic languages,
//! and Bulgarian with its suffixed definite article.

use declina_protocol::{LanguageArticle, LanguageCase, LanguageGender, LanguageNumber};

use super::{base, grid, Axis, FormLayout, Lookup, Selection, SG_PL};
use crate::config::DeclensionConfig;
use crate::form::{Dim, FormDims, KeyStyle};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlavicLanguage {
    Czech,
    Polish,
    Russian,
    Ukrainian,
    Slovak,
    Slovenian,
    /// Serbian, Serbo-Croatian, Bosnian and Croatian.
    SerboCroatian,
    Georgian,
}

use LanguageCase::{
    Accusative, Adverbial, Dative, Ergative, Genitive, Instrumental, Locative, Nominative, Objective,
    Prepositional, Vocative,
};
use LanguageGender::{AnimateMasculine, Feminine, Masculine, Neuter};
use LanguageNumber::{Plural, Singular};

const CASES_WITH_VOCATIVE: &[LanguageCase] =
    &[Nominative, Accusative, Dative, Genitive, Instrumental, Locative, Vocative];
const CASES_NO_VOCATIVE: &[LanguageCase] = &[Nominative, Accusative, Dative, Genitive, Instrumental, Locative];
const RUSSIAN_CASES: &[LanguageCase] = &[Nominative, Accusative, Dative, Genitive, Instrumental, Prepositional];
const GEORGIAN_CASES: &[LanguageCase] = &[Nominative, Ergative, Dative, Genitive, Instrumental, Adverbial];

const ANIMATE_GENDERS: &[LanguageGender] = &[Neuter, Feminine, Masculine, AnimateMasculine];
const THREE_GENDERS: &[LanguageGender] = &[Neuter, Feminine, Masculine];

const NUMBER_CASE_KEY: KeyStyle = KeyStyle::dashed(&[Dim::Number, Dim::Case]);
const GENDER_NUMBER_CASE_KEY: KeyStyle = KeyStyle::dashed(&[Dim::Gender, Dim::Number, Dim::Case]);
const NUMBER_CASE_ARTICLE_KEY: KeyStyle = KeyStyle::dashed(&[Dim::Number, Dim::Case, Dim::Article]);
const GENDER_NUMBER_CASE_ARTICLE_KEY: KeyStyle =
    KeyStyle::dashed(&[Dim::Gender, Dim::Number, Dim::Case, Dim::Article]);

impl SlavicLanguage {
    fn cases(self) -> &'static [LanguageCase] {
        use SlavicLanguage::*;
        match self {
            Czech | Polish | Ukrainian | Slovenian => CASES_WITH_VOCATIVE,
            Slovak | SerboCroatian => CASES_NO_VOCATIVE,
            Russian => RUSSIAN_CASES,
            Georgian => GEORGIAN_CASES,
        }
    }

    fn genders(self) -> Option<&'static [LanguageGender]> {
        use SlavicLanguage::*;
        match self {
            Czech | Polish | Russian | Ukrainian | Slovak | Slovenian => Some(ANIMATE_GENDERS),
            SerboCroatian => Some(THREE_GENDERS),
            Georgian => None,
        }
    }

    /// Animate-masculine adjective forms, plural first.
    fn animate_forms(self) -> &'static [(LanguageNumber, LanguageCase)] {
        use SlavicLanguage::*;
        match self {
            Czech => &[(Plural, Nominative), (Plural, Vocative), (Singular, Accusative)],
            Polish | Slovak => &[(Plural, Nominative), (Plural, Accusative), (Singular, Accusative)],
            Russian | Ukrainian => &[(Plural, Accusative), (Singular, Accusative)],
            Slovenian => &[(Singular, Accusative)],
            SerboCroatian | Georgian => &[],
        }
    }
}

pub(crate) fn config(lang: SlavicLanguage) -> DeclensionConfig {
    let config = DeclensionConfig {
        should_lowercase_entity_in_compound_nouns: lang == SlavicLanguage::Russian,
        ..DeclensionConfig::default()
    }
    .with_cases(lang.cases());
    match lang.genders() {
        Some(genders) => config.with_genders(genders, Neuter),
        None => config,
    }
}

pub(crate) fn layout(lang: SlavicLanguage, config: &DeclensionConfig) -> FormLayout {
    let cases = &config.required_cases;
    let nouns = grid(base(config), &[Axis::Number(SG_PL), Axis::Case(cases)]);

    let inanimate: Vec<LanguageGender> =
        config.genders().into_iter().filter(|g| *g != AnimateMasculine).collect();
    let mut adjectives = grid(base(config), &[Axis::Number(SG_PL), Axis::Gender(&inanimate), Axis::Case(cases)]);
    adjectives.extend(lang.animate_forms().iter().map(|&(number, case)| {
        base(config).with_gender(AnimateMasculine).with_number(number).with_case(case)
    }));

    FormLayout {
        noun_lookup: Lookup::StrictOn(&[Dim::Article, Dim::Possessive]),
        field: Selection::Where(FormDims::is_nominative),
        adjectives,
        adjective_key: GENDER_NUMBER_CASE_KEY,
        adjective_lookup: Lookup::StrictOn(&[Dim::Article]),
        adjective_required: Selection::Where(singular_masculine_nominative),
        ..FormLayout::nouns(nouns, NUMBER_CASE_KEY, config)
    }
}

fn singular_masculine_nominative(dims: &FormDims) -> bool {
    dims.number == Singular && dims.gender == Masculine && dims.case == Nominative
}

pub(crate) fn baltic_config() -> DeclensionConfig {
    DeclensionConfig { allowed_article_types: vec![LanguageArticle::Zero], ..DeclensionConfig::default() }
        .with_cases(CASES_NO_VOCATIVE)
        .with_genders(&[Feminine, Masculine], Feminine)
}

pub(crate) fn baltic_layout(config: &DeclensionConfig) -> FormLayout {
    let cases = &config.required_cases;
    let nouns = grid(base(config), &[Axis::Number(SG_PL), Axis::Case(cases)]);
    let genders = config.genders();
    let adjectives = grid(
        base(config),
        &[
            Axis::Number(SG_PL),
            Axis::Gender(&genders),
            Axis::Case(cases),
            Axis::Article(&config.allowed_article_types),
        ],
    );
    FormLayout {
        noun_lookup: Lookup::StrictOn(&[Dim::Article, Dim::Possessive]),
        field: Selection::Where(FormDims::is_nominative),
        adjectives,
        adjective_key: GENDER_NUMBER_CASE_ARTICLE_KEY,
        adjective_required: Selection::Where(singular_feminine_nominative),
        ..FormLayout::nouns(nouns, NUMBER_CASE_KEY, config)
    }
}

fn singular_feminine_nominative(dims: &FormDims) -> bool {
    dims.number == Singular && dims.gender == Feminine && dims.case == Nominative
}

pub(crate) fn bulgarian_config() -> DeclensionConfig {
    DeclensionConfig {
        allowed_cases: vec![Nominative, Objective],
        allowed_article_types: vec![LanguageArticle::Zero, LanguageArticle::Definite],
        has_article_in_noun_form: true,
        article_in_noun_form_auto_derived: true,
        move_noun_inflection_to_first_modifier: true,
        ..DeclensionConfig::default()
    }
    .with_genders(&[Feminine, Masculine, Neuter], Neuter)
}

pub(crate) fn bulgarian_layout(config: &DeclensionConfig) -> FormLayout {
    use LanguageArticle::Definite;
    let sg = base(config);
    let pl = sg.with_number(Plural);
    let nouns = vec![
        sg,
        pl,
        sg.with_article(Definite),
        sg.with_case(Objective).with_article(Definite),
        pl.with_article(Definite),
    ];
    let m = sg.with_gender(Masculine);
    let f = sg.with_gender(Feminine);
    let n = sg.with_gender(Neuter);
    let adjectives = vec![
        m,
        f,
        n,
        pl.with_gender(Neuter),
        m.with_article(Definite),
        m.with_case(Objective).with_article(Definite),
        f.with_article(Definite),
        n.with_article(Definite),
        pl.with_gender(Neuter).with_article(Definite),
    ];
    FormLayout {
        entity: Selection::First(2),
        field: Selection::First(2),
        other: Selection::First(2),
        noun_validation: super::NounValidation::Singular,
        adjectives,
        adjective_key: GENDER_NUMBER_CASE_ARTICLE_KEY,
        adjective_required: Selection::Where(bulgarian_required_adjective),
        ..FormLayout::nouns(nouns, NUMBER_CASE_ARTICLE_KEY, config)
    }
}

/// The singular indefinite forms and the masculine definite subject form.
fn bulgarian_required_adjective(dims: &FormDims) -> bool {
    dims.number == Singular
        && dims.case == Nominative
        && (dims.article == LanguageArticle::Zero || dims.gender == Masculine)
}

fn ends_with_any(value: &str, endings: &[char]) -> bool {
    value.chars().last().is_some_and(|c| endings.contains(&c))
}

/// Attaches the Bulgarian definite suffix to an indefinite noun.
///
/// Only the indefinite singular and plural are stored; the definite forms are
/// always computed from them.
pub fn bulgarian_definite_noun(indefinite: &str, dims: &FormDims) -> String {
    if indefinite.is_empty() || dims.article != LanguageArticle::Definite {
        return indefinite.to_string();
    }
    if dims.number.is_plural() {
        let suffix = if ends_with_any(indefinite, &['а', 'я']) { "та" } else { "те" };
        return format!("{indefinite}{suffix}");
    }
    match dims.gender {
        Masculine | AnimateMasculine => {
            if ends_with_any(indefinite, &['а', 'я']) {
                return format!("{indefinite}та");
            }
            if ends_with_any(indefinite, &['о']) {
                return format!("{indefinite}то");
            }
            let (stem, soft) = match indefinite.strip_suffix(['й', 'Й']) {
                Some(stem) => (stem, true),
                None => (indefinite, false),
            };
            let suffix = match (dims.case == Objective, soft) {
                (true, true) => "я",
                (true, false) => "а",
                (false, true) => "ят",
                (false, false) => "ът",
            };
            format!("{stem}{suffix}")
        }
        Feminine => format!("{indefinite}та"),
        _ => format!("{indefinite}то"),
    }
}

/// Derives a missing Bulgarian adjective value from the value stored for
/// `source`, the closest form that has one.
pub(crate) fn bulgarian_derive_adjective(form: &FormDims, value: &str, source: &FormDims) -> String {
    if form.article == LanguageArticle::Definite && source.article != LanguageArticle::Definite {
        if form.number.is_plural() {
            return format!("{value}те");
        }
        return match form.gender {
            Feminine => format!("{value}та"),
            Neuter => format!("{value}то"),
            _ => value.to_string(),
        };
    }
    if form.case == Objective && form.article == LanguageArticle::Definite && form.gender == Masculine {
        // The short masculine form drops the т of the subject form.
        return match value.find(' ') {
            Some(space) => {
                let (head, tail) = value.split_at(space);
                format!("{}{tail}", head.strip_suffix('т').unwrap_or(head))
            }
            None => value.strip_suffix('т').unwrap_or(value).to_string(),
        };
    }
    value.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use declina_protocol::LanguageStartsWith;

    fn sg(gender: LanguageGender) -> FormDims {
        FormDims::base(gender, LanguageStartsWith::Consonant)
    }

    #[test]
    fn czech_adjectives_append_animate_forms() {
        let config = config(SlavicLanguage::Czech);
        let layout = layout(SlavicLanguage::Czech, &config);
        assert_eq!(layout.nouns.len(), 14);
        // 2 numbers x 3 genders x 7 cases, then the animate forms
        assert_eq!(layout.adjectives.len(), 42 + 3);
        let animate: Vec<_> = layout.adjectives[42..].iter().map(|d| (d.number, d.case)).collect();
        assert_eq!(animate, vec![(Plural, Nominative), (Plural, Vocative), (Singular, Accusative)]);
        assert!(layout.adjectives[42..].iter().all(|d| d.gender == AnimateMasculine));
        assert_eq!(Selection::Where(FormDims::is_nominative).pick(&layout.nouns), vec![0, 7]);
        assert_eq!(config.default_gender, Neuter);
    }

    #[test]
    fn serbian_and_georgian_genders() {
        let sr = config(SlavicLanguage::SerboCroatian);
        assert!(!sr.allows_gender(AnimateMasculine));
        assert_eq!(layout(SlavicLanguage::SerboCroatian, &sr).adjectives.len(), 36);

        let ka = config(SlavicLanguage::Georgian);
        assert!(!ka.has_gender);
        assert!(ka.allowed_cases.contains(&Ergative));
        assert_eq!(layout(SlavicLanguage::Georgian, &ka).adjectives.len(), 12);
    }

    #[test]
    fn russian_lowercases_compounds() {
        assert!(config(SlavicLanguage::Russian).should_lowercase_entity_in_compound_nouns);
        assert!(config(SlavicLanguage::Russian).allowed_cases.contains(&Prepositional));
        assert!(!config(SlavicLanguage::Polish).should_lowercase_entity_in_compound_nouns);
    }

    #[test]
    fn baltic_layout_shape() {
        let config = baltic_config();
        let layout = baltic_layout(&config);
        assert_eq!(config.default_gender, Feminine);
        assert_eq!(layout.nouns.len(), 12);
        assert_eq!(layout.adjectives.len(), 24);
        assert_eq!(layout.adjective_required.pick(&layout.adjectives), vec![0]);
    }

    #[test]
    fn bulgarian_layout_keys_are_unique() {
        let config = bulgarian_config();
        let layout = bulgarian_layout(&config);
        let mut keys: Vec<_> = layout.nouns.iter().map(|d| layout.noun_key.render(d)).collect();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), 5);
        assert_eq!(layout.noun_key.render(&layout.nouns[3]), "0-o-d");
        assert_eq!(layout.adjective_required.pick(&layout.adjectives), vec![0, 1, 2, 4]);
        assert!(config.move_noun_inflection_to_first_modifier);
    }

    #[test]
    fn bulgarian_noun_suffixes() {
        let def = |g| sg(g).with_article(LanguageArticle::Definite);
        assert_eq!(bulgarian_definite_noun("град", &def(Masculine)), "градът");
        assert_eq!(bulgarian_definite_noun("град", &def(Masculine).with_case(Objective)), "града");
        assert_eq!(bulgarian_definite_noun("край", &def(Masculine)), "краят");
        assert_eq!(bulgarian_definite_noun("край", &def(Masculine).with_case(Objective)), "края");
        assert_eq!(bulgarian_definite_noun("баща", &def(Masculine)), "бащата");
        assert_eq!(bulgarian_definite_noun("жена", &def(Feminine)), "жената");
        assert_eq!(bulgarian_definite_noun("село", &def(Neuter)), "селото");
        assert_eq!(bulgarian_definite_noun("градове", &def(Masculine).with_number(Plural)), "градовете");
        assert_eq!(bulgarian_definite_noun("села", &def(Neuter).with_number(Plural)), "селата");
        assert_eq!(bulgarian_definite_noun("", &def(Feminine)), "");
        assert_eq!(bulgarian_definite_noun("град", &sg(Masculine)), "град");
    }

    #[test]
    fn bulgarian_adjective_derivation() {
        let zero = sg(Feminine);
        let def = |d: FormDims| d.with_article(LanguageArticle::Definite);
        assert_eq!(bulgarian_derive_adjective(&def(sg(Feminine)), "нова", &zero), "новата");
        assert_eq!(bulgarian_derive_adjective(&def(sg(Neuter)), "ново", &zero), "новото");
        assert_eq!(bulgarian_derive_adjective(&def(sg(Neuter).with_number(Plural)), "нови", &zero), "новите");
        let obj = def(sg(Masculine)).with_case(Objective);
        assert_eq!(bulgarian_derive_adjective(&obj, "новият", &def(sg(Masculine))), "новия");
        assert_eq!(bulgarian_derive_adjective(&obj, "новият град", &def(sg(Masculine))), "новия град");
    }
}
