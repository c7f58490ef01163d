//! Dense array-indexed lookup from dimension tuples to form ordinals.
//!
//! Maps are built once per declension and answer lookups with a bounds-checked
//! index. A miss is `None`; only construction can fail, on a duplicate tuple.

use declina_protocol::{
    FormOrdinal, LanguageArticle, LanguageCase, LanguageGender, LanguageNumber,
    LanguagePossessive, LanguageStartsWith,
};

use crate::error::{DeclensionError, Result};
use crate::form::GrammaticalForm;

fn number_slot(number: LanguageNumber) -> usize {
    number.index()
}

fn insert(slot: &mut Option<FormOrdinal>, form: &GrammaticalForm) -> Result<()> {
    let Some(ordinal) = form.ordinal() else {
        return Ok(());
    };
    if slot.is_some() {
        return Err(DeclensionError::DuplicateForm { key: form.key() });
    }
    *slot = Some(ordinal);
    Ok(())
}

/// Noun forms of one article/possessive partition, indexed `[number][case]`.
#[derive(Debug, Clone)]
pub struct NounFormMap {
    cases: usize,
    slots: Box<[Option<FormOrdinal>]>,
}

impl NounFormMap {
    pub fn from_forms<'a>(forms: impl IntoIterator<Item = &'a GrammaticalForm>) -> Result<Self> {
        let forms: Vec<&GrammaticalForm> = forms.into_iter().collect();
        let cases = forms.iter().map(|f| f.case().index() + 1).max().unwrap_or(1);
        let mut slots = vec![None; LanguageNumber::COUNT * cases].into_boxed_slice();
        for form in forms {
            let idx = number_slot(form.number()) * cases + form.case().index();
            insert(&mut slots[idx], form)?;
        }
        Ok(Self { cases, slots })
    }

    pub fn get(&self, number: LanguageNumber, case: LanguageCase) -> Option<FormOrdinal> {
        if case.index() >= self.cases {
            return None;
        }
        self.slots.get(number_slot(number) * self.cases + case.index()).copied().flatten()
    }
}

/// Adjective or article forms of one partition, indexed
/// `[number][gender][case][starts_with]`.
#[derive(Debug, Clone)]
pub struct ModifierFormMap {
    genders: usize,
    cases: usize,
    slots: Box<[Option<FormOrdinal>]>,
}

impl ModifierFormMap {
    pub fn from_forms<'a>(forms: impl IntoIterator<Item = &'a GrammaticalForm>) -> Result<Self> {
        let forms: Vec<&GrammaticalForm> = forms.into_iter().collect();
        let genders = forms.iter().map(|f| f.gender().index() + 1).max().unwrap_or(1);
        let cases = forms.iter().map(|f| f.case().index() + 1).max().unwrap_or(1);
        let per_number = genders * cases * LanguageStartsWith::COUNT;
        let mut slots = vec![None; LanguageNumber::COUNT * per_number].into_boxed_slice();
        let mut map = Self { genders, cases, slots: Box::default() };
        for form in forms {
            let idx = map.index(form.starts_with(), form.gender(), form.number(), form.case());
            if let Some(idx) = idx {
                insert(&mut slots[idx], form)?;
            }
        }
        map.slots = slots;
        Ok(map)
    }

    fn index(
        &self,
        starts_with: LanguageStartsWith,
        gender: LanguageGender,
        number: LanguageNumber,
        case: LanguageCase,
    ) -> Option<usize> {
        if gender.index() >= self.genders || case.index() >= self.cases {
            return None;
        }
        let per_number = self.genders * self.cases * LanguageStartsWith::COUNT;
        Some(
            number_slot(number) * per_number
                + (gender.index() * self.cases + case.index()) * LanguageStartsWith::COUNT
                + starts_with.index(),
        )
    }

    pub fn get(
        &self,
        starts_with: LanguageStartsWith,
        gender: LanguageGender,
        number: LanguageNumber,
        case: LanguageCase,
    ) -> Option<FormOrdinal> {
        let idx = self.index(starts_with, gender, number, case)?;
        self.slots.get(idx).copied().flatten()
    }
}

/// One map per (article, possessive) value, for dimensions applied
/// orthogonally to number, case and gender.
#[derive(Debug, Clone)]
pub struct PartitionedMap<M> {
    maps: Box<[Option<M>]>,
}

fn partition_index(article: LanguageArticle, possessive: LanguagePossessive) -> usize {
    article.index() * LanguagePossessive::COUNT + possessive.index()
}

impl<M> PartitionedMap<M> {
    fn build(
        forms: &[GrammaticalForm],
        build: impl Fn(Vec<&GrammaticalForm>) -> Result<M>,
    ) -> Result<Self> {
        let mut buckets: Vec<Vec<&GrammaticalForm>> =
            (0..LanguageArticle::COUNT * LanguagePossessive::COUNT).map(|_| Vec::new()).collect();
        for form in forms {
            buckets[partition_index(form.article(), form.possessive())].push(form);
        }
        let maps = buckets
            .into_iter()
            .map(|bucket| if bucket.is_empty() { Ok(None) } else { build(bucket).map(Some) })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { maps: maps.into_boxed_slice() })
    }

    pub fn partition(&self, article: LanguageArticle, possessive: LanguagePossessive) -> Option<&M> {
        self.maps.get(partition_index(article, possessive)).and_then(Option::as_ref)
    }
}

impl PartitionedMap<NounFormMap> {
    /// Builds one `[number][case]` map per article and possessive value.
    pub fn nouns(forms: &[GrammaticalForm]) -> Result<Self> {
        Self::build(forms, |bucket| NounFormMap::from_forms(bucket))
    }

    pub fn get(
        &self,
        number: LanguageNumber,
        case: LanguageCase,
        possessive: LanguagePossessive,
        article: LanguageArticle,
    ) -> Option<FormOrdinal> {
        self.partition(article, possessive)?.get(number, case)
    }
}

impl PartitionedMap<ModifierFormMap> {
    /// Builds one `[number][gender][case][starts_with]` map per article and
    /// possessive value.
    pub fn modifiers(forms: &[GrammaticalForm]) -> Result<Self> {
        Self::build(forms, |bucket| ModifierFormMap::from_forms(bucket))
    }

    #[allow(clippy::too_many_arguments)]
    pub fn get(
        &self,
        starts_with: LanguageStartsWith,
        gender: LanguageGender,
        number: LanguageNumber,
        case: LanguageCase,
        article: LanguageArticle,
        possessive: LanguagePossessive,
    ) -> Option<FormOrdinal> {
        self.partition(article, possessive)?.get(starts_with, gender, number, case)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::{Dim, FormDims, KeyStyle};
    use declina_protocol::TermType;

    const KEY: KeyStyle = KeyStyle::dashed(&[Dim::Number, Dim::Case, Dim::Article]);

    fn noun(ordinal: u32, dims: FormDims) -> GrammaticalForm {
        GrammaticalForm::registered(TermType::Noun, FormOrdinal::new(ordinal), dims, KEY)
    }

    fn base() -> FormDims {
        FormDims::base(LanguageGender::Neuter, LanguageStartsWith::Consonant)
    }

    #[test]
    fn noun_map_lookup_and_miss() {
        let forms = vec![
            noun(0, base()),
            noun(1, base().with_case(LanguageCase::Dative)),
            noun(2, base().with_number(LanguageNumber::Plural)),
        ];
        let map = NounFormMap::from_forms(&forms).unwrap();
        assert_eq!(map.get(LanguageNumber::Singular, LanguageCase::Dative), Some(FormOrdinal::new(1)));
        assert_eq!(map.get(LanguageNumber::Plural, LanguageCase::Nominative), Some(FormOrdinal::new(2)));
        assert_eq!(map.get(LanguageNumber::Plural, LanguageCase::Dative), None);
        assert_eq!(map.get(LanguageNumber::Dual, LanguageCase::Nominative), None);
        assert_eq!(map.get(LanguageNumber::Singular, LanguageCase::Benefactive), None);
    }

    #[test]
    fn duplicate_tuple_is_rejected() {
        let forms = vec![noun(0, base()), noun(1, base())];
        let err = NounFormMap::from_forms(&forms).unwrap_err();
        assert!(matches!(err, DeclensionError::DuplicateForm { ref key } if key == "0-n-n"));
    }

    #[test]
    fn partitions_split_by_article() {
        let forms = vec![noun(0, base()), noun(1, base().with_article(LanguageArticle::Definite))];
        let maps = PartitionedMap::nouns(&forms).unwrap();
        let get = |article| {
            maps.get(LanguageNumber::Singular, LanguageCase::Nominative, LanguagePossessive::None, article)
        };
        assert_eq!(get(LanguageArticle::Zero), Some(FormOrdinal::new(0)));
        assert_eq!(get(LanguageArticle::Definite), Some(FormOrdinal::new(1)));
        assert_eq!(get(LanguageArticle::Indefinite), None);
    }

    #[test]
    fn modifier_map_uses_starts_with() {
        let vowel = base().with_gender(LanguageGender::Feminine).with_starts_with(LanguageStartsWith::Vowel);
        let forms = vec![
            GrammaticalForm::registered(TermType::Adjective, FormOrdinal::new(0), base(), KEY),
            GrammaticalForm::registered(TermType::Adjective, FormOrdinal::new(1), vowel, KEY),
        ];
        let maps = PartitionedMap::modifiers(&forms).unwrap();
        let get = |sw, g| {
            maps.get(sw, g, LanguageNumber::Singular, LanguageCase::Nominative, LanguageArticle::Zero, LanguagePossessive::None)
        };
        assert_eq!(get(LanguageStartsWith::Vowel, LanguageGender::Feminine), Some(FormOrdinal::new(1)));
        assert_eq!(get(LanguageStartsWith::Consonant, LanguageGender::Feminine), None);
        assert_eq!(get(LanguageStartsWith::Consonant, LanguageGender::Masculine), None);
    }
}
