use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use declina_compiler::{compile, load_source, read_blob, write_blob};
use declina_morph::{DeclensionFactory, FactoryConfig};
use declina_protocol::TermType;
use predicates::prelude::*;
use tempfile::TempDir;

const GERMAN: &str = r#"{
    "version": 3,
    "language": "de",
    "nouns": [
        { "name": "kunde", "type": "entity", "gender": "m", "forms": { "0-n": "Kunde", "1-n": "Kunden" } },
        { "name": "feld", "type": "field", "gender": "n", "forms": { "0-n": "Feld" } }
    ],
    "adjectives": [
        { "name": "neu", "forms": { "n-0-n-n": "neu" } }
    ],
    "articles": [
        { "name": "der", "article": "d", "forms": { "m-0-n-c": "der" } }
    ]
}"#;

fn write_json(dir: &TempDir, name: &str, json: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, json).unwrap();
    path
}

fn factory(locale: &str) -> DeclensionFactory {
    DeclensionFactory::new(FactoryConfig { languages: vec![locale.to_string()], ..FactoryConfig::default() }).unwrap()
}

fn german_without_field(dir: &TempDir) -> PathBuf {
    let json = GERMAN.replace(r#"{ "name": "feld", "type": "field", "gender": "n", "forms": { "0-n": "Feld" } }"#, "")
        .replace(r#""Kunden" } },"#, r#""Kunden" } }"#);
    write_json(dir, "clean.json", &json)
}

#[test]
fn compiles_valid_words_and_reports_the_rest() {
    let dir = TempDir::new().unwrap();
    let source = load_source(&write_json(&dir, "de.json", GERMAN)).unwrap();
    let report = compile(&source, &factory("de"), None).unwrap();

    assert_eq!(report.rejected, vec!["Noun:feld".to_string()]);
    assert!(!report.is_clean());
    assert_eq!(report.blob.language, "de");
    assert_eq!(report.blob.version.get(), 3);

    let kunde = report.blob.words_of(TermType::Noun).next().unwrap();
    assert_eq!(kunde.name, "kunde");
    assert_eq!(kunde.values.len(), 8);
    assert_eq!(report.blob.words_of(TermType::Adjective).count(), 1);
    assert_eq!(report.blob.words_of(TermType::Article).count(), 1);

    let output = dir.path().join("de.bin");
    let size = write_blob(&report.blob, &output).unwrap();
    assert!(size > 0);
    assert_eq!(read_blob(&output).unwrap(), report.blob);
}

#[test]
fn unknown_keys_and_tokens_are_errors() {
    let dir = TempDir::new().unwrap();
    let bad_key = GERMAN.replace("\"1-n\"", "\"9-x\"");
    let source = load_source(&write_json(&dir, "key.json", &bad_key)).unwrap();
    let err = compile(&source, &factory("de"), None).unwrap_err();
    let message = format!("{err:#}");
    assert!(message.contains("noun kunde"), "{message}");
    assert!(message.contains("9-x"), "{message}");

    let bad_gender = GERMAN.replace("\"gender\": \"m\"", "\"gender\": \"zz\"");
    let source = load_source(&write_json(&dir, "gender.json", &bad_gender)).unwrap();
    assert!(compile(&source, &factory("de"), None).is_err());
}

#[test]
fn language_override_selects_the_dialect() {
    let dir = TempDir::new().unwrap();
    let source = load_source(&german_without_field(&dir)).unwrap();
    let report = compile(&source, &factory("de_AT"), Some("de_AT")).unwrap();
    assert!(report.is_clean());
    assert_eq!(report.blob.language, "de_AT");
}

#[test]
fn empty_blob_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("empty.bin");
    fs::write(&path, b"").unwrap();
    assert!(read_blob(Path::new(&path)).is_err());
}

#[test]
fn cli_exits_non_zero_on_rejected_words() {
    let dir = TempDir::new().unwrap();
    let input = write_json(&dir, "de.json", GERMAN);
    Command::cargo_bin("declina-compiler")
        .unwrap()
        .arg("--input")
        .arg(&input)
        .arg("--check")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("feld"));
}

#[test]
fn cli_writes_the_blob() {
    let dir = TempDir::new().unwrap();
    let input = german_without_field(&dir);
    let output = dir.path().join("de.bin");
    Command::cargo_bin("declina-compiler")
        .unwrap()
        .arg("--input")
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .assert()
        .success();
    let blob = read_blob(&output).unwrap();
    assert_eq!(blob.words.len(), 3);
}
