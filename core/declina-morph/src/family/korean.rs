//! Korean: one noun form, with case particles chosen by how the noun ends.

use declina_protocol::LanguageStartsWith;

use super::{base, grid, Axis, FormLayout};
use crate::config::DeclensionConfig;
use crate::form::{Dim, KeyStyle};

const PARTICLE_CONTEXTS: &[LanguageStartsWith] =
    &[LanguageStartsWith::Consonant, LanguageStartsWith::Vowel, LanguageStartsWith::Special];

pub(crate) fn config() -> DeclensionConfig {
    DeclensionConfig {
        has_ends_with: true,
        has_capitalization: false,
        has_classifiers: true,
        required_starts_with: PARTICLE_CONTEXTS.to_vec(),
        ..DeclensionConfig::default()
    }
    .without_plural()
}

/// Particle forms follow a consonant, a vowel, or the flap ㄹ.
pub(crate) fn layout(config: &DeclensionConfig) -> FormLayout {
    FormLayout {
        adjectives: grid(base(config), &[Axis::StartsWith(PARTICLE_CONTEXTS)]),
        adjective_key: KeyStyle::dashed(&[Dim::StartsWith]),
        ..FormLayout::single(config)
    }
}

const SYLLABLES: std::ops::RangeInclusive<u32> = 0xAC00..=0xD7A3;
const VOWEL_JAMO: std::ops::RangeInclusive<u32> = 0x1161..=0x11A2;
const FINAL_RIEUL: u32 = 0x11AF;
/// Index of ㄹ among the final consonants of a precomposed syllable.
const RIEUL_FINAL_INDEX: u32 = 8;

/// Classifies how a noun ends, which decides the particle that follows it.
pub fn ends_with(value: &str) -> LanguageStartsWith {
    let Some(last) = value.trim().chars().last() else {
        return LanguageStartsWith::Consonant;
    };
    let code = u32::from(last);
    if SYLLABLES.contains(&code) {
        match (code - 0xAC00) % 28 {
            0 => LanguageStartsWith::Vowel,
            RIEUL_FINAL_INDEX => LanguageStartsWith::Special,
            _ => LanguageStartsWith::Consonant,
        }
    } else if VOWEL_JAMO.contains(&code) {
        LanguageStartsWith::Vowel
    } else if code == FINAL_RIEUL {
        LanguageStartsWith::Special
    } else {
        LanguageStartsWith::Consonant
    }
}
