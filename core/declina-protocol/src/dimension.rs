use rkyv::{Archive, Deserialize, Serialize};

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

use bitflags::bitflags;

/// Declares a closed grammatical dimension.
///
/// Every value carries a persisted "db value" and an api name. Db values are
/// written into dictionaries and caches and must never be reassigned.
macro_rules! define_dimension {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($variant:ident = $disc:literal, $db:literal, $api:literal;)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Archive, Serialize, Deserialize)]
        #[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
        #[archive(check_bytes)]
        #[repr(u8)]
        pub enum $name {
            $($variant = $disc,)+
        }

        impl $name {
            /// Every value, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant,)+];

            /// Number of values; used to size dense lookup tables.
            pub const COUNT: usize = Self::ALL.len();

            pub const fn db_value(self) -> &'static str {
                match self {
                    $($name::$variant => $db,)+
                }
            }

            pub const fn api_value(self) -> &'static str {
                match self {
                    $($name::$variant => $api,)+
                }
            }

            /// Dense index of this value, stable with the discriminant order.
            pub const fn index(self) -> usize {
                self as usize
            }

            pub fn from_db_value(value: &str) -> Option<Self> {
                Self::ALL.iter().copied().find(|v| v.db_value() == value)
            }

            pub fn from_api_value(value: &str) -> Option<Self> {
                Self::ALL.iter().copied().find(|v| v.api_value() == value)
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(self.api_value())
            }
        }
    };
}

define_dimension! {
    /// Grammatical gender, including animacy and Bantu noun classes.
    LanguageGender {
        Neuter = 0, "n", "Neuter";
        Feminine = 1, "f", "Feminine";
        Masculine = 2, "m", "Masculine";
        AnimateMasculine = 3, "a", "AnimateMasculine";
        ClassI = 4, "1", "ClassI";
        ClassIII = 5, "3", "ClassIII";
        ClassV = 6, "5", "ClassV";
        ClassVII = 7, "7", "ClassVII";
        ClassIX = 8, "9", "ClassIX";
        ClassXI = 9, "U", "ClassXI";
        ClassXIV = 10, "B", "ClassXIV";
        ClassXV = 11, "S", "ClassXV";
        ClassXVI = 12, "P", "ClassXVI";
        ClassXVII = 13, "K", "ClassXVII";
        ClassXVIII = 14, "M", "ClassXVIII";
    }
}

impl LanguageGender {
    /// Dutch and Danish "common" gender shares the feminine slot.
    pub const COMMON: LanguageGender = LanguageGender::Feminine;
    /// Swedish "euter" gender shares the feminine slot.
    pub const EUTER: LanguageGender = LanguageGender::Feminine;

    /// Parses a label-file token: a db value or one of the historical aliases.
    pub fn from_label_value(value: &str) -> Option<Self> {
        match value {
            "c" | "e" => Some(LanguageGender::Feminine),
            "M-wa" | "I" => Some(LanguageGender::ClassI),
            "M-mi" | "III" => Some(LanguageGender::ClassIII),
            "Ma" | "V" => Some(LanguageGender::ClassV),
            "Ki-vi" | "VII" => Some(LanguageGender::ClassVII),
            "N" | "IX" => Some(LanguageGender::ClassIX),
            "XI" => Some(LanguageGender::ClassXI),
            "XIV" => Some(LanguageGender::ClassXIV),
            "XV" => Some(LanguageGender::ClassXV),
            "Pa" | "XVI" => Some(LanguageGender::ClassXVI),
            "Ku" | "XVII" => Some(LanguageGender::ClassXVII),
            "Mu" | "XVIII" => Some(LanguageGender::ClassXVIII),
            other => Self::from_db_value(other),
        }
    }
}

define_dimension! {
    LanguageNumber {
        Singular = 0, "0", "Singular";
        Plural = 1, "1", "Plural";
        Dual = 2, "2", "Dual";
    }
}

impl LanguageNumber {
    pub const fn is_plural(self) -> bool {
        matches!(self, LanguageNumber::Plural)
    }

    pub const fn is_default(self) -> bool {
        matches!(self, LanguageNumber::Singular)
    }
}

define_dimension! {
    LanguageCase {
        Nominative = 0, "n", "Nominative";
        Accusative = 1, "a", "Accusative";
        Genitive = 2, "g", "Genitive";
        Dative = 3, "d", "Dative";
        Inessive = 4, "ines", "Inessive";
        Elative = 5, "el", "Elative";
        Illative = 6, "il", "Illative";
        Adessive = 7, "ad", "Adessive";
        Ablative = 8, "abl", "Ablative";
        Allative = 9, "al", "Allative";
        Essive = 10, "es", "Essive";
        Translative = 11, "tra", "Translative";
        Partitive = 12, "par", "Partitive";
        Objective = 13, "o", "Objective";
        Subjective = 14, "s", "Subjective";
        Instrumental = 15, "in", "Instrumental";
        Prepositional = 16, "pr", "Prepositional";
        Locative = 17, "l", "Locative";
        Vocative = 18, "v", "Vocative";
        Sublative = 19, "sub", "Sublative";
        Superessive = 20, "sup", "Superessive";
        Delative = 21, "del", "Delative";
        Causalfinal = 22, "cf", "Causalfinal";
        Essiveformal = 23, "ef", "Essiveformal";
        // The api name keeps a historical misspelling.
        Terminative = 24, "t", "Termanative";
        Distributive = 25, "di", "Distributive";
        Ergative = 26, "er", "Ergative";
        Adverbial = 27, "adv", "Adverbial";
        Abessive = 28, "abe", "Abessive";
        Comitative = 29, "com", "Comitative";
        Benefactive = 30, "be", "Benefactive";
    }
}

define_dimension! {
    LanguageArticle {
        Zero = 0, "n", "None";
        Indefinite = 1, "i", "A";
        Definite = 2, "d", "The";
        Partitive = 3, "p", "Mass";
    }
}

define_dimension! {
    LanguagePossessive {
        None = 0, "n", "None";
        First = 1, "f", "FirstPerson";
        Second = 2, "s", "SecondPerson";
        FirstPlural = 3, "F", "FirstPersonPlural";
        SecondPlural = 4, "S", "SecondPersonPlural";
    }
}

define_dimension! {
    /// Phonological class of a word's first sound, or of the previous word's
    /// last sound for languages that inflect on "ends with".
    LanguageStartsWith {
        Consonant = 0, "c", "Consonant";
        Vowel = 1, "v", "Vowel";
        Special = 2, "s", "Special";
    }
}

define_dimension! {
    LanguagePosition {
        Pre = 0, "b", "Pre";
        Post = 1, "a", "Post";
    }
}

define_dimension! {
    /// How much of a noun's form space a dictionary must supply.
    NounType {
        Entity = 0, "entity", "Entity";
        Field = 1, "field", "Field";
        Other = 2, "other", "Other";
        AdjectiveDerived = 3, "adj", "AdjectiveDerived";
    }
}

define_dimension! {
    /// Kind of term a form belongs to; part of every persisted form reference.
    TermType {
        Noun = 0, "n", "Noun";
        Adjective = 1, "a", "Adjective";
        Article = 2, "d", "Article";
    }
}

bitflags! {
    /// Cached classification of a stem's ending, recomputed whenever the base
    /// form of a word is written. Never persisted on its own.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
    pub struct StemFlags: u8 {
        const ENDS_WITH_A = 1;
        const ENDS_WITH_R = 2;
        const ENDS_WITH_H = 4;
        const ENDS_WITH_VOWEL = 8;
    }
}

// rkyv support for StemFlags
impl Archive for StemFlags {
    type Archived = u8;
    type Resolver = ();

    unsafe fn resolve(&self, _pos: usize, _resolver: Self::Resolver, out: *mut Self::Archived) {
        out.write(self.bits());
    }
}

impl<S: rkyv::Fallible + ?Sized> Serialize<S> for StemFlags {
    fn serialize(&self, _serializer: &mut S) -> Result<Self::Resolver, S::Error> {
        Ok(())
    }
}

impl<D: rkyv::Fallible + ?Sized> Deserialize<StemFlags, D> for u8 {
    fn deserialize(&self, _deserializer: &mut D) -> Result<StemFlags, D::Error> {
        Ok(StemFlags::from_bits_truncate(*self))
    }
}
