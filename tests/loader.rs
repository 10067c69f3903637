//! Corpus Loading Integration Tests
//!
//! Built-in data merged with directory sources of JSON and YAML files.

use std::fs;

use soma::library::{load_corpus, BuiltinSource, CorpusSource, DirectorySource};
use soma::{dataset, Category};
use tempfile::TempDir;

const EXTRA_JSON: &str = r#"{
  "version": 1,
  "advocacy": [
    {
      "id": "extra-transport",
      "category": "navigation",
      "name": "Medical Transportation",
      "nameEs": "Transporte Médico",
      "description": "Getting a ride to appointments",
      "keyPoints": ["Medicaid often covers non-emergency rides"]
    }
  ]
}"#;

const EXTRA_YAML: &str = r#"
version: 1
advocacy:
  - id: extra-food
    category: financial-assistance
    name: Food Assistance
    nameEs: Asistencia Alimentaria
    description: Programs that help pay for groceries
topics:
  - id: topic-extra
    type: concept
    name: Health Literacy
    nameEs: Alfabetización en Salud
    levels:
      - level: 2
        summary: Understanding health information
        explanation: Being able to find and use health information
"#;

fn write(dir: &TempDir, name: &str, content: &str) {
    let path = dir.path().join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

#[tokio::test]
async fn test_directory_merges_after_builtin() {
    let dir = TempDir::new().unwrap();
    write(&dir, "a.json", EXTRA_JSON);
    write(&dir, "nested/b.yaml", EXTRA_YAML);
    write(&dir, "README.md", "not data");

    let directory = DirectorySource::new(dir.path());
    let sources: [&dyn CorpusSource; 2] = [&BuiltinSource, &directory];
    let corpus = load_corpus(&sources).await.unwrap();

    let builtin = dataset::builtin().unwrap();
    assert_eq!(corpus.advocacy.len(), builtin.advocacy.len() + 2);
    assert_eq!(corpus.topics.len(), builtin.topics.len() + 1);

    // Built-in first, then files in path order
    let ids: Vec<String> = corpus.advocacy.ids().map(|id| id.to_string()).collect();
    let n = builtin.advocacy.len();
    assert_eq!(&ids[n..], &["extra-transport", "extra-food"]);

    let food = corpus.advocacy.get_by_id("extra-food").unwrap();
    assert_eq!(food.category, Category::FinancialAssistance);
    assert_eq!(corpus.advocacy.search("TRANSPORTE").len(), 1);
    assert!(corpus.topics.get_by_id("topic-extra").is_some());
}

#[tokio::test]
async fn test_empty_or_missing_directory_is_builtin_only() {
    let dir = TempDir::new().unwrap();
    let empty = DirectorySource::new(dir.path());
    let missing = DirectorySource::new(dir.path().join("absent"));

    let sources: [&dyn CorpusSource; 3] = [&BuiltinSource, &empty, &missing];
    let corpus = load_corpus(&sources).await.unwrap();
    let builtin = dataset::builtin().unwrap();

    assert_eq!(corpus.advocacy.fingerprint(), builtin.advocacy.fingerprint());
    assert_eq!(corpus.topics.fingerprint(), builtin.topics.fingerprint());
}

#[tokio::test]
async fn test_duplicate_id_across_sources_is_rejected() {
    let dir = TempDir::new().unwrap();
    write(
        &dir,
        "dup.yaml",
        "advocacy:\n  - id: informed-consent\n    category: rights\n    \
         name: Consent\n    description: again\n",
    );

    let directory = DirectorySource::new(dir.path());
    let sources: [&dyn CorpusSource; 2] = [&BuiltinSource, &directory];
    let err = load_corpus(&sources).await.unwrap_err();
    let message = format!("{:#}", err);

    assert!(message.contains("duplicate record id: informed-consent"), "{}", message);
    assert!(message.contains(directory.name()), "{}", message);
}

#[tokio::test]
async fn test_id_shared_between_stores_is_rejected() {
    let dir = TempDir::new().unwrap();
    write(
        &dir,
        "clash.yaml",
        "topics:\n  - id: informed-consent\n    type: topic\n    name: Consent\n    levels: []\n",
    );

    let directory = DirectorySource::new(dir.path());
    let sources: [&dyn CorpusSource; 2] = [&BuiltinSource, &directory];
    let err = load_corpus(&sources).await.unwrap_err();
    assert!(format!("{:#}", err).contains("informed-consent"));
}

#[tokio::test]
async fn test_parse_error_names_file() {
    let dir = TempDir::new().unwrap();
    write(&dir, "broken.json", "{ \"advocacy\": [ { \"id\": 7 } ] ");

    let directory = DirectorySource::new(dir.path());
    let err = load_corpus(&[&directory as &dyn CorpusSource]).await.unwrap_err();
    let message = format!("{:#}", err);

    assert!(message.contains("broken.json"), "{}", message);
}

#[tokio::test]
async fn test_unknown_category_fails_to_load() {
    let dir = TempDir::new().unwrap();
    write(
        &dir,
        "bad.yaml",
        "advocacy:\n  - id: x\n    category: astrology\n    name: X\n    description: y\n",
    );

    let directory = DirectorySource::new(dir.path());
    assert!(load_corpus(&[&directory as &dyn CorpusSource]).await.is_err());
}

#[tokio::test]
async fn test_root_with_glob_characters_is_literal() {
    let dir = TempDir::new().unwrap();
    write(&dir, "corpus[v2]/a.json", EXTRA_JSON);

    let directory = DirectorySource::new(dir.path().join("corpus[v2]"));
    assert_eq!(directory.data_files().unwrap().len(), 1);

    let corpus = load_corpus(&[&directory as &dyn CorpusSource]).await.unwrap();
    assert_eq!(corpus.advocacy.len(), 1);
    assert!(corpus.advocacy.contains("extra-transport"));
}

#[tokio::test]
async fn test_uppercase_extensions_are_loaded() {
    let dir = TempDir::new().unwrap();
    write(&dir, "extra.YAML", EXTRA_YAML);
    write(&dir, "more.Json", EXTRA_JSON);

    let directory = DirectorySource::new(dir.path());
    let corpus = load_corpus(&[&directory as &dyn CorpusSource]).await.unwrap();

    assert_eq!(corpus.advocacy.len(), 2);
    assert!(corpus.advocacy.contains("extra-food"));
    assert!(corpus.advocacy.contains("extra-transport"));
    assert!(corpus.topics.contains("topic-extra"));
}
