//! The per-language declension: form lists, lookups and word creation.
//!
//! A [`DeclensionCore`] is built once per family configuration and never
//! changes afterwards. Languages reach it through [`LanguageDeclension`],
//! either directly ([`StandardDeclension`]) or through a dialect proxy
//! ([`ForwardingDeclension`]) that only reports a different language.

use std::fmt;
use std::sync::Arc;

use declina_protocol::{
    FormOrdinal, LanguageArticle, LanguageCase, LanguageGender, LanguageNumber, LanguagePosition,
    LanguagePossessive, LanguageStartsWith, NounType, TermType,
};

use crate::adjective::Adjective;
use crate::article::Article;
use crate::config::DeclensionConfig;
use crate::error::{DeclensionError, Result};
use crate::family::{basque, Family, FormLayout, Lookup};
use crate::form::{AdjectiveForm, ArticleForm, Dim, FormDims, GrammaticalForm, KeyStyle, NounForm};
use crate::form_map::{ModifierFormMap, NounFormMap, PartitionedMap};
use crate::language::Language;
use crate::noun::Noun;

/// Dimensions that a form list never varies along, and the value it holds
/// for each. Requests are rewritten to those values before lookup.
#[derive(Debug, Clone)]
struct Pins {
    template: FormDims,
    dims: Vec<Dim>,
}

impl Pins {
    fn new(forms: &[FormDims], lookup: Lookup) -> Self {
        let Some(template) = forms.first().copied() else {
            return Self {
                template: FormDims::base(LanguageGender::Neuter, LanguageStartsWith::Consonant),
                dims: Vec::new(),
            };
        };
        let dims = Dim::ALL
            .iter()
            .copied()
            .filter(|&dim| lookup.pins(dim) && forms.iter().all(|f| dim.agrees(f, &template)))
            .collect();
        Self { template, dims }
    }

    fn apply(&self, mut request: FormDims) -> FormDims {
        for dim in &self.dims {
            dim.copy(&self.template, &mut request);
        }
        request
    }
}

fn register(term: TermType, dims: &[FormDims], key: KeyStyle) -> Vec<GrammaticalForm> {
    dims.iter()
        .enumerate()
        .map(|(i, d)| GrammaticalForm::registered(term, FormOrdinal::new(i as u32), *d, key))
        .collect()
}

/// Everything a family declares, materialized into form lists and maps.
pub struct DeclensionCore {
    family: Family,
    config: DeclensionConfig,
    layout: FormLayout,
    nouns: Vec<NounForm>,
    adjectives: Vec<AdjectiveForm>,
    articles: Vec<ArticleForm>,
    entity: Vec<FormOrdinal>,
    field: Vec<FormOrdinal>,
    other: Vec<FormOrdinal>,
    noun_map: PartitionedMap<NounFormMap>,
    adjective_map: PartitionedMap<ModifierFormMap>,
    article_map: PartitionedMap<ModifierFormMap>,
    noun_pins: Pins,
    adjective_pins: Pins,
    article_pins: Pins,
}

impl fmt::Debug for DeclensionCore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeclensionCore")
            .field("family", &self.family)
            .field("nouns", &self.nouns.len())
            .field("adjectives", &self.adjectives.len())
            .field("articles", &self.articles.len())
            .finish()
    }
}

impl DeclensionCore {
    /// Builds the form lists and maps of a family.
    ///
    /// Fails with [`DeclensionError::DuplicateForm`] when two forms of one
    /// term share a dimension tuple.
    pub fn new(family: Family) -> Result<Self> {
        let config = family.config();
        let layout = family.layout(&config);

        let nouns = register(TermType::Noun, &layout.nouns, layout.noun_key);
        let adjectives = register(TermType::Adjective, &layout.adjectives, layout.adjective_key);
        let articles = register(TermType::Article, &layout.articles, layout.article_key);

        let subset = |ordinals: Vec<usize>| ordinals.into_iter().map(|i| FormOrdinal::new(i as u32)).collect();
        let entity = subset(layout.entity.pick(&layout.nouns));
        let field = subset(layout.field.pick(&layout.nouns));
        let other = subset(layout.other.pick(&layout.nouns));

        Ok(Self {
            noun_map: PartitionedMap::nouns(&nouns)?,
            adjective_map: PartitionedMap::modifiers(&adjectives)?,
            article_map: PartitionedMap::modifiers(&articles)?,
            noun_pins: Pins::new(&layout.nouns, layout.noun_lookup),
            adjective_pins: Pins::new(&layout.adjectives, layout.adjective_lookup),
            article_pins: Pins::new(&layout.articles, layout.article_lookup),
            family,
            config,
            layout,
            nouns,
            adjectives,
            articles,
            entity,
            field,
            other,
        })
    }

    pub fn family(&self) -> Family {
        self.family
    }

    pub fn config(&self) -> &DeclensionConfig {
        &self.config
    }

    pub fn layout(&self) -> &FormLayout {
        &self.layout
    }

    pub fn nouns(&self) -> &[NounForm] {
        &self.nouns
    }

    pub fn adjectives(&self) -> &[AdjectiveForm] {
        &self.adjectives
    }

    pub fn articles(&self) -> &[ArticleForm] {
        &self.articles
    }

    fn subset(&self, ordinals: &[FormOrdinal]) -> Vec<NounForm> {
        ordinals.iter().map(|o| self.nouns[o.index()]).collect()
    }

    pub fn entity_forms(&self) -> Vec<NounForm> {
        self.subset(&self.entity)
    }

    pub fn field_forms(&self) -> Vec<NounForm> {
        self.subset(&self.field)
    }

    pub fn other_forms(&self) -> Vec<NounForm> {
        self.subset(&self.other)
    }

    pub fn is_field_form(&self, form: &NounForm) -> bool {
        form.ordinal().is_some_and(|o| self.field.contains(&o))
    }

    fn noun_request(
        &self,
        number: LanguageNumber,
        case: LanguageCase,
        possessive: LanguagePossessive,
        article: LanguageArticle,
    ) -> FormDims {
        FormDims::base(self.config.default_gender, self.config.default_starts_with)
            .with_number(number)
            .with_case(case)
            .with_possessive(possessive)
            .with_article(article)
    }

    pub fn exact_noun_form(
        &self,
        number: LanguageNumber,
        case: LanguageCase,
        possessive: LanguagePossessive,
        article: LanguageArticle,
    ) -> Option<NounForm> {
        if self.family == Family::Basque {
            return self.basque_noun_form(number, case, article);
        }
        let dims = self.noun_pins.apply(self.noun_request(number, case, possessive, article));
        let ordinal = self.noun_map.get(dims.number, dims.case, dims.possessive, dims.article)?;
        self.nouns.get(ordinal.index()).copied()
    }

    /// Basque registers only its overrides; any other allowed case is a
    /// dynamic form rendered from the stem.
    fn basque_noun_form(
        &self,
        number: LanguageNumber,
        case: LanguageCase,
        article: LanguageArticle,
    ) -> Option<NounForm> {
        if !self.config.allowed_cases.contains(&case) {
            return None;
        }
        let number = if number.is_plural() || number == LanguageNumber::Dual {
            LanguageNumber::Plural
        } else {
            LanguageNumber::Singular
        };
        let stored = self.nouns[basque::noun_override(number, case, article)];
        if stored.number() == number && stored.case() == case && stored.article() == article {
            return Some(stored);
        }
        let dims = self.noun_request(number, case, self.config.default_possessive, article);
        Some(GrammaticalForm::dynamic(TermType::Noun, dims, self.layout.noun_key))
    }

    pub fn approximate_noun_form(
        &self,
        number: LanguageNumber,
        case: LanguageCase,
        possessive: LanguagePossessive,
        article: LanguageArticle,
    ) -> NounForm {
        let config = &self.config;
        let exact = |n, c, p, a| self.exact_noun_form(n, c, p, a);
        if let Some(form) = exact(number, case, possessive, article) {
            return form;
        }
        if self.family == Family::Basque {
            if let Some(form) = exact(number, config.default_case, possessive, article) {
                return form;
            }
            return self.nouns[0];
        }

        if !config.has_article_in_noun_form && article != config.default_article {
            let base = self.approximate_noun_form(number, case, possessive, config.default_article);
            return if config.has_article { GrammaticalForm::legacy(&base, article) } else { base };
        }

        let try_possessive = if config.has_possessive { possessive } else { config.default_possessive };
        let try_number = if config.has_plural { number } else { LanguageNumber::Singular };
        let try_article = if config.has_article_in_noun_form { article } else { config.default_article };
        let try_case = if config.has_required_cases() { case } else { config.default_case };

        let (mut p, mut a, mut c) = (possessive, article, case);
        for (target_p, target_a, target_c) in [
            (try_possessive, try_article, try_case),
            (config.default_possessive, config.default_article, config.default_case),
        ] {
            if p != target_p {
                p = target_p;
                if let Some(form) = exact(try_number, c, p, a) {
                    return form;
                }
            }
            if a != target_a {
                a = target_a;
                if let Some(form) = exact(try_number, c, p, a) {
                    return form;
                }
            }
            if c != target_c {
                c = target_c;
                if let Some(form) = exact(try_number, c, p, a) {
                    return form;
                }
            }
        }

        if !number.is_plural() {
            if try_number != number {
                if let Some(form) = exact(try_number, c, p, a) {
                    return form;
                }
            }
            if number == LanguageNumber::Dual {
                if let Some(form) = exact(LanguageNumber::Plural, c, p, a) {
                    return form;
                }
            }
        }
        self.nouns[0]
    }

    #[allow(clippy::too_many_arguments)]
    pub fn adjective_form(
        &self,
        starts_with: LanguageStartsWith,
        gender: LanguageGender,
        number: LanguageNumber,
        case: LanguageCase,
        article: LanguageArticle,
        possessive: LanguagePossessive,
    ) -> Option<AdjectiveForm> {
        if self.family == Family::Basque {
            return self.adjectives.get(basque::adjective_index(number, case)).copied();
        }
        let request = FormDims {
            number,
            case,
            gender,
            article,
            possessive,
            starts_with,
        };
        let dims = self.adjective_pins.apply(request);
        let ordinal = self.adjective_map.get(
            dims.starts_with,
            dims.gender,
            dims.number,
            dims.case,
            dims.article,
            dims.possessive,
        )?;
        self.adjectives.get(ordinal.index()).copied()
    }

    pub(crate) fn adjective_form_for(&self, dims: &FormDims) -> Option<AdjectiveForm> {
        self.adjective_form(dims.starts_with, dims.gender, dims.number, dims.case, dims.article, dims.possessive)
    }

    pub fn approximate_adjective_form(
        &self,
        starts_with: LanguageStartsWith,
        gender: LanguageGender,
        number: LanguageNumber,
        case: LanguageCase,
        article: LanguageArticle,
        possessive: LanguagePossessive,
    ) -> AdjectiveForm {
        let config = &self.config;
        let mut dims = FormDims {
            number,
            case,
            gender,
            article,
            possessive,
            starts_with,
        };
        if let Some(form) = self.adjective_form_for(&dims) {
            return form;
        }

        let articles_exist = config.has_article || config.has_article_in_noun_form;
        let to_try = FormDims {
            starts_with: if config.has_starts_with { starts_with } else { config.default_starts_with },
            gender: if config.has_gender { gender } else { config.default_gender },
            number: if config.has_plural { number } else { LanguageNumber::Singular },
            article: if articles_exist && config.allowed_article_types.contains(&article) {
                article
            } else {
                config.default_article
            },
            case: if config.has_required_cases() { case } else { config.default_case },
            possessive: if config.has_possessive_in_adjective { possessive } else { config.default_possessive },
        };
        let defaults = FormDims {
            number,
            case: config.default_case,
            gender: config.default_gender,
            article: config.default_article,
            possessive: config.default_possessive,
            starts_with: config.default_starts_with,
        };
        const DROP_ORDER: [Dim; 5] = [Dim::Possessive, Dim::Article, Dim::StartsWith, Dim::Gender, Dim::Case];
        for target in [to_try, defaults] {
            for dim in DROP_ORDER {
                if !dim.agrees(&dims, &target) {
                    dim.copy(&target, &mut dims);
                    if let Some(form) = self.adjective_form_for(&dims) {
                        return form;
                    }
                }
            }
        }
        if dims.number != LanguageNumber::Singular {
            dims.number = LanguageNumber::Singular;
            if let Some(form) = self.adjective_form_for(&dims) {
                return form;
            }
        }
        self.adjectives[0]
    }

    /// Ignores number, gender and startsWith when the language lacks them.
    pub fn article_form(
        &self,
        starts_with: LanguageStartsWith,
        gender: LanguageGender,
        number: LanguageNumber,
        case: LanguageCase,
    ) -> Option<ArticleForm> {
        let config = &self.config;
        let request = FormDims::base(
            if config.has_gender { gender } else { config.default_gender },
            if config.has_starts_with { starts_with } else { config.default_starts_with },
        )
        .with_number(if config.has_plural { number } else { LanguageNumber::Singular })
        .with_case(case);
        let dims = self.article_pins.apply(request);
        let ordinal = self.article_map.get(
            dims.starts_with,
            dims.gender,
            dims.number,
            dims.case,
            dims.article,
            dims.possessive,
        )?;
        self.articles.get(ordinal.index()).copied()
    }

    pub fn approximate_article_form(
        &self,
        starts_with: LanguageStartsWith,
        gender: LanguageGender,
        number: LanguageNumber,
        case: LanguageCase,
    ) -> Option<ArticleForm> {
        self.article_form(starts_with, gender, number, case)
            .or_else(|| self.article_form(self.config.default_starts_with, gender, number, case))
            .or_else(|| self.articles.first().copied())
    }

    /// The form at `ordinal` in the list for `term`.
    pub fn form(&self, term: TermType, ordinal: FormOrdinal) -> Option<GrammaticalForm> {
        let forms = match term {
            TermType::Noun => &self.nouns,
            TermType::Adjective => &self.adjectives,
            TermType::Article => &self.articles,
        };
        forms.get(ordinal.index()).copied()
    }
}

/// A language's view of its declension.
///
/// Only [`language`](Self::language) and [`core`](Self::core) are required;
/// everything else reads the shared core.
pub trait LanguageDeclension: Send + Sync + fmt::Debug {
    fn language(&self) -> Language;

    fn core(&self) -> &Arc<DeclensionCore>;

    fn is_forwarding(&self) -> bool {
        false
    }

    fn family(&self) -> Family {
        self.core().family()
    }

    fn config(&self) -> &DeclensionConfig {
        self.core().config()
    }

    fn all_noun_forms(&self) -> &[NounForm] {
        self.core().nouns()
    }

    fn entity_forms(&self) -> Vec<NounForm> {
        self.core().entity_forms()
    }

    fn field_forms(&self) -> Vec<NounForm> {
        self.core().field_forms()
    }

    fn other_forms(&self) -> Vec<NounForm> {
        self.core().other_forms()
    }

    fn adjective_forms(&self) -> &[AdjectiveForm] {
        self.core().adjectives()
    }

    fn article_forms(&self) -> &[ArticleForm] {
        self.core().articles()
    }

    fn has_gender(&self) -> bool {
        self.config().has_gender
    }

    fn has_plural(&self) -> bool {
        self.config().has_plural
    }

    fn has_article(&self) -> bool {
        self.config().has_article
    }

    fn has_article_in_noun_form(&self) -> bool {
        self.config().has_article_in_noun_form
    }

    fn has_starts_with(&self) -> bool {
        self.config().has_starts_with
    }

    fn has_ends_with(&self) -> bool {
        self.config().has_ends_with
    }

    fn has_possessive(&self) -> bool {
        self.config().has_possessive
    }

    fn has_capitalization(&self) -> bool {
        self.config().has_capitalization
    }

    fn has_classifiers(&self) -> bool {
        self.config().has_classifiers
    }

    fn is_inflected(&self) -> bool {
        self.config().is_inflected
    }

    fn move_noun_inflection_to_first_modifier(&self) -> bool {
        self.config().move_noun_inflection_to_first_modifier
    }

    fn required_cases(&self) -> &[LanguageCase] {
        &self.config().required_cases
    }

    fn allowed_cases(&self) -> &[LanguageCase] {
        &self.config().allowed_cases
    }

    fn required_genders(&self) -> Option<&[LanguageGender]> {
        self.config().required_genders.as_deref()
    }

    fn default_gender(&self) -> LanguageGender {
        self.config().default_gender
    }

    fn default_article(&self) -> LanguageArticle {
        self.config().default_article
    }

    fn default_adjective_position(&self) -> LanguagePosition {
        self.config().default_adjective_position
    }

    fn exact_noun_form(
        &self,
        number: LanguageNumber,
        case: LanguageCase,
        possessive: LanguagePossessive,
        article: LanguageArticle,
    ) -> Option<NounForm> {
        self.core().exact_noun_form(number, case, possessive, article)
    }

    fn approximate_noun_form(
        &self,
        number: LanguageNumber,
        case: LanguageCase,
        possessive: LanguagePossessive,
        article: LanguageArticle,
    ) -> NounForm {
        self.core().approximate_noun_form(number, case, possessive, article)
    }

    /// The noun form for a number and case with no article or possessive.
    fn noun_form(&self, number: LanguageNumber, case: LanguageCase) -> NounForm {
        let config = self.config();
        self.approximate_noun_form(number, case, config.default_possessive, config.default_article)
    }

    fn noun_form_for_article(&self, number: LanguageNumber, article: LanguageArticle) -> NounForm {
        let config = self.config();
        self.approximate_noun_form(number, config.default_case, config.default_possessive, article)
    }

    fn adjective_form(
        &self,
        starts_with: LanguageStartsWith,
        gender: LanguageGender,
        number: LanguageNumber,
        case: LanguageCase,
        article: LanguageArticle,
        possessive: LanguagePossessive,
    ) -> Option<AdjectiveForm> {
        self.core().adjective_form(starts_with, gender, number, case, article, possessive)
    }

    fn approximate_adjective_form(
        &self,
        starts_with: LanguageStartsWith,
        gender: LanguageGender,
        number: LanguageNumber,
        case: LanguageCase,
        article: LanguageArticle,
        possessive: LanguagePossessive,
    ) -> AdjectiveForm {
        self.core().approximate_adjective_form(starts_with, gender, number, case, article, possessive)
    }

    fn article_form(
        &self,
        starts_with: LanguageStartsWith,
        gender: LanguageGender,
        number: LanguageNumber,
        case: LanguageCase,
    ) -> Option<ArticleForm> {
        self.core().article_form(starts_with, gender, number, case)
    }

    fn approximate_article_form(
        &self,
        starts_with: LanguageStartsWith,
        gender: LanguageGender,
        number: LanguageNumber,
        case: LanguageCase,
    ) -> Option<ArticleForm> {
        self.core().approximate_article_form(starts_with, gender, number, case)
    }

    /// The article word used with `form` when the dictionary defines none.
    fn default_article_string(&self, form: &ArticleForm, article: LanguageArticle) -> Result<Option<&'static str>> {
        self.family().default_article(self.language(), form.dims(), article)
    }

    /// How far a modifier may sit from its noun and still agree with it.
    fn max_distance_for_modifiers(&self) -> usize {
        if self.is_inflected() {
            0
        } else {
            5
        }
    }

    fn format_lowercase_noun_form(&self, value: &str, article: LanguageArticle) -> String {
        self.family().format_lowercase(value, article, self.config())
    }

    fn default_classifier(&self) -> Option<&'static str> {
        self.family().default_classifier(self.language())
    }

    fn create_noun(&self, name: &str, noun_type: NounType, gender: LanguageGender, starts_with: LanguageStartsWith) -> Noun {
        Noun::new(self.language(), Arc::clone(self.core()), name, noun_type, gender, starts_with)
    }

    fn create_adjective(&self, name: &str, starts_with: LanguageStartsWith, position: LanguagePosition) -> Adjective {
        Adjective::new(self.language(), Arc::clone(self.core()), name, starts_with, position)
    }

    fn create_article(&self, name: &str, article: LanguageArticle) -> Article {
        Article::new(self.language(), Arc::clone(self.core()), name, article)
    }

    /// Maps a persisted ordinal back to its form.
    fn resolve_form(&self, term: TermType, ordinal: FormOrdinal) -> Result<GrammaticalForm> {
        self.core().form(term, ordinal).ok_or_else(|| DeclensionError::FormNotInDeclension {
            language: self.language().locale().to_string(),
            term,
            ordinal,
        })
    }
}

/// The declension of one language.
#[derive(Debug, Clone)]
pub struct StandardDeclension {
    language: Language,
    core: Arc<DeclensionCore>,
}

impl StandardDeclension {
    pub fn new(language: Language, core: Arc<DeclensionCore>) -> Self {
        Self { language, core }
    }

    /// Builds the core for `family` and wraps it.
    pub fn build(language: Language, family: Family) -> Result<Self> {
        Ok(Self::new(language, Arc::new(DeclensionCore::new(family)?)))
    }
}

impl LanguageDeclension for StandardDeclension {
    fn language(&self) -> Language {
        self.language
    }

    fn core(&self) -> &Arc<DeclensionCore> {
        &self.core
    }
}

/// A dialect that shares another language's declension and reports its own
/// language.
#[derive(Debug, Clone)]
pub struct ForwardingDeclension {
    language: Language,
    delegate: Arc<dyn LanguageDeclension>,
}

impl ForwardingDeclension {
    pub fn new(language: Language, delegate: Arc<dyn LanguageDeclension>) -> Self {
        Self { language, delegate }
    }

    pub fn delegate(&self) -> &Arc<dyn LanguageDeclension> {
        &self.delegate
    }
}

impl LanguageDeclension for ForwardingDeclension {
    fn language(&self) -> Language {
        self.language
    }

    fn core(&self) -> &Arc<DeclensionCore> {
        self.delegate.core()
    }

    fn is_forwarding(&self) -> bool {
        true
    }
}
