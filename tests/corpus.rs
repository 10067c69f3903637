//! Built-in Dataset Integration Tests
//!
//! The shipped records must load, validate and be reachable by every query.

use std::collections::HashSet;

use soma::dataset;
use soma::domain::ExplanationLevel;
use soma::library::validate_corpus;
use soma::{Category, Language, Record};

#[test]
fn test_builtin_validates_without_errors() {
    let corpus = dataset::builtin().unwrap();
    let report = validate_corpus(corpus);

    let errors: Vec<_> = report.errors().collect();
    assert!(errors.is_empty(), "validation errors: {:#?}", errors);
    assert!(report.is_clean());
}

#[test]
fn test_builtin_is_built_once() {
    let first = dataset::builtin().unwrap();
    let second = dataset::builtin().unwrap();
    assert!(std::ptr::eq(first, second));
}

#[test]
fn test_ids_unique_across_builtin() {
    let corpus = dataset::builtin().unwrap();
    let mut seen = HashSet::new();

    for id in corpus.advocacy.ids().chain(corpus.topics.ids()) {
        assert!(seen.insert(id.as_str()), "duplicate id {}", id);
    }
    assert_eq!(seen.len(), corpus.len());
}

#[test]
fn test_every_advocacy_category_is_covered() {
    let corpus = dataset::builtin().unwrap();
    let in_use = corpus.advocacy.list_categories();

    for category in Category::ALL {
        assert!(in_use.contains(&category), "no entries in {}", category);
    }
}

#[test]
fn test_entries_are_bilingual() {
    let corpus = dataset::builtin().unwrap();

    for entry in &corpus.advocacy {
        assert!(!entry.name_es.is_empty(), "{} has no Spanish name", entry.id);
        assert_eq!(entry.localized_name(Language::En), entry.name);
        assert_eq!(entry.localized_name(Language::Es), entry.name_es);
    }
}

#[test]
fn test_topics_cover_all_levels() {
    let corpus = dataset::builtin().unwrap();
    assert!(!corpus.topics.is_empty());

    for topic in &corpus.topics {
        assert!(topic.missing_levels().is_empty(), "{} is missing levels", topic.id);
        for level in ExplanationLevel::ALL {
            assert!(topic.level(level).is_some());
        }
    }
}

#[test]
fn test_cross_references_resolve() {
    let corpus = dataset::builtin().unwrap();

    let refs = corpus
        .advocacy
        .iter()
        .flat_map(|e| e.cross_references())
        .chain(corpus.topics.iter().flat_map(|t| t.cross_references()));

    for target in refs {
        assert!(corpus.contains_id(target.as_str()), "dangling reference {}", target);
    }
}

#[test]
fn test_fingerprint_is_stable() {
    let corpus = dataset::builtin().unwrap();
    assert_eq!(corpus.advocacy.fingerprint(), corpus.advocacy.fingerprint());
    assert_eq!(corpus.advocacy.fingerprint().len(), 64);
    assert_ne!(corpus.advocacy.fingerprint(), corpus.topics.fingerprint());
}
