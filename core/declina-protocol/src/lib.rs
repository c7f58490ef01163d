#![no_std] // Loaders and caches embed this crate without std

extern crate alloc;

// Enable std if the feature is active (for tests/tools)
#[cfg(feature = "std")]
extern crate std;

pub mod dimension;
pub mod error;
pub mod ids;
pub mod model;

// Re-export core types for convenience
pub use dimension::*;
pub use error::{parse_db_value, ProtocolError};
pub use ids::{DictionaryVersion, FormOrdinal};
pub use model::*;

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::String;
    use alloc::vec;
    use rkyv::{from_bytes, to_bytes};

    #[test]
    fn test_enum_serialization() {
        let original = LanguageCase::Ergative;

        let bytes = to_bytes::<_, 256>(&original).expect("Failed to serialize LanguageCase");
        let deserialized: LanguageCase = from_bytes(&bytes).expect("Failed to deserialize LanguageCase");

        assert_eq!(original, deserialized);
    }

    #[test]
    fn test_form_ref_serialization() {
        let original = FormRef::new("eu", TermType::Noun, FormOrdinal::new(7));

        let bytes = to_bytes::<_, 256>(&original).expect("Failed to serialize FormRef");
        let deserialized: FormRef = from_bytes(&bytes).expect("Failed to deserialize FormRef");

        assert_eq!(original, deserialized);
    }

    #[test]
    fn test_dictionary_blob_serialization() {
        let blob = DictionaryBlob {
            version: DictionaryVersion::new(3),
            language: String::from("iw"),
            words: vec![StoredWord {
                name: String::from("account"),
                term: TermType::Noun,
                noun_type: Some(NounType::Entity),
                gender: LanguageGender::Masculine,
                starts_with: LanguageStartsWith::Consonant,
                plural_alias: None,
                article: None,
                position: None,
                values: vec![(FormOrdinal::new(0), String::from("חשבון"))],
            }],
        };

        let bytes = to_bytes::<_, 1024>(&blob).expect("Failed to serialize DictionaryBlob");
        let deserialized: DictionaryBlob = from_bytes(&bytes).expect("Failed to deserialize DictionaryBlob");

        assert_eq!(blob, deserialized);
        assert_eq!(deserialized.words_of(TermType::Noun).count(), 1);
        assert_eq!(deserialized.words_of(TermType::Article).count(), 0);
    }

    #[test]
    fn test_stem_flags_archive_as_bits() {
        let flags = StemFlags::ENDS_WITH_A | StemFlags::ENDS_WITH_VOWEL;

        let bytes = to_bytes::<_, 16>(&flags).expect("Failed to serialize StemFlags");
        let deserialized: StemFlags = from_bytes(&bytes).expect("Failed to deserialize StemFlags");

        assert_eq!(flags, deserialized);
        assert_eq!(deserialized.bits(), 9);
    }

    #[test]
    fn test_id_layout() {
        // FormOrdinal(u32) should be exactly 4 bytes
        assert_eq!(core::mem::size_of::<FormOrdinal>(), 4);
        assert_eq!(core::mem::size_of::<StemFlags>(), 1);
        assert_eq!(core::mem::size_of::<LanguageCase>(), 1);
    }

    #[test]
    fn test_db_values_are_pinned() {
        // Persisted keys; changing any of these breaks stored dictionaries.
        assert_eq!(LanguageGender::Neuter.db_value(), "n");
        assert_eq!(LanguageGender::Feminine.db_value(), "f");
        assert_eq!(LanguageGender::Masculine.db_value(), "m");
        assert_eq!(LanguageGender::AnimateMasculine.db_value(), "a");
        assert_eq!(LanguageGender::ClassXI.db_value(), "U");
        assert_eq!(LanguageNumber::Singular.db_value(), "0");
        assert_eq!(LanguageNumber::Plural.db_value(), "1");
        assert_eq!(LanguageNumber::Dual.db_value(), "2");
        assert_eq!(LanguageCase::Nominative.db_value(), "n");
        assert_eq!(LanguageCase::Inessive.db_value(), "ines");
        assert_eq!(LanguageCase::Instrumental.db_value(), "in");
        assert_eq!(LanguageCase::Benefactive.db_value(), "be");
        assert_eq!(LanguageArticle::Zero.db_value(), "n");
        assert_eq!(LanguageArticle::Definite.db_value(), "d");
        assert_eq!(LanguagePossessive::FirstPlural.db_value(), "F");
        assert_eq!(LanguageStartsWith::Special.db_value(), "s");
        assert_eq!(LanguagePosition::Pre.db_value(), "b");
        assert_eq!(TermType::Article.db_value(), "d");
    }

    #[test]
    fn test_db_values_are_unique_per_dimension() {
        fn unique(values: &[&str]) -> bool {
            values.iter().enumerate().all(|(i, v)| !values[i + 1..].contains(v))
        }
        let cases: alloc::vec::Vec<_> = LanguageCase::ALL.iter().map(|c| c.db_value()).collect();
        let genders: alloc::vec::Vec<_> = LanguageGender::ALL.iter().map(|g| g.db_value()).collect();
        assert!(unique(&cases));
        assert!(unique(&genders));
    }

    #[test]
    fn test_label_value_aliases() {
        assert_eq!(LanguageGender::from_label_value("c"), Some(LanguageGender::Feminine));
        assert_eq!(LanguageGender::from_label_value("e"), Some(LanguageGender::EUTER));
        assert_eq!(LanguageGender::from_label_value("Ki-vi"), Some(LanguageGender::ClassVII));
        assert_eq!(LanguageGender::from_label_value("m"), Some(LanguageGender::Masculine));
        assert_eq!(LanguageGender::from_label_value("zz"), None);
        assert_eq!(LanguageCase::from_api_value("Termanative"), Some(LanguageCase::Terminative));
    }

    #[test]
    fn test_parse_db_value_names_dimension() {
        let err = parse_db_value("case", "zz", LanguageCase::from_db_value).unwrap_err();
        assert_eq!(
            err,
            ProtocolError::UnknownDbValue { dimension: "case", value: String::from("zz") }
        );
        assert_eq!(FormOrdinal::new(300).to_byte(), Err(ProtocolError::OrdinalOutOfRange(300)));
        assert_eq!(FormOrdinal::new(12).to_byte(), Ok(12));
    }
}
