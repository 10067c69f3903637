//! Query Layer Integration Tests
//!
//! Properties of search, filtering, lookup and counting over a fixture
//! store and over the built-in dataset.

use std::collections::BTreeSet;

use soma::dataset;
use soma::{Category, ContentEntry, ContentStore, Record};

fn fixture() -> ContentStore<ContentEntry> {
    ContentStore::from_entries([
        ContentEntry::new(
            "a1",
            Category::Rights,
            "Right to Consent",
            "patients choose treatment",
        ),
        ContentEntry::new("a2", Category::Insurance, "Appeals", "fight a denial"),
        ContentEntry::new(
            "a3",
            Category::Rights,
            "Privacy",
            "control who sees records",
        ),
    ])
    .unwrap()
}

fn ids<T: Record>(results: &[&T]) -> Vec<String> {
    results.iter().map(|r| r.id().to_string()).collect()
}

#[test]
fn test_three_entry_scenario() {
    let store = fixture();

    assert_eq!(ids(&store.filter_by_category(Category::Rights)), vec!["a1", "a3"]);
    assert_eq!(store.count(Some(Category::Rights)), 2);
    assert_eq!(store.count(None), 3);
    assert_eq!(ids(&store.search("denial")), vec!["a2"]);
    assert_eq!(ids(&store.search("RIGHT")), vec!["a1"]);
    assert_eq!(store.get_by_id("a2").map(|e| e.name.as_str()), Some("Appeals"));
    assert!(store.get_by_id("zzz").is_none());
    assert_eq!(
        store.list_categories(),
        BTreeSet::from([Category::Rights, Category::Insurance])
    );
}

#[test]
fn test_search_is_deterministic() {
    let corpus = dataset::builtin().unwrap();

    for query in ["", "rights", "seguro", "interpreter", "nothing-matches-this"] {
        let first = ids(&corpus.advocacy.search(query));
        let second = ids(&corpus.advocacy.search(query));
        assert_eq!(first, second, "query {:?}", query);
    }
}

#[test]
fn test_search_finds_every_field_value() {
    let corpus = dataset::builtin().unwrap();

    for entry in &corpus.advocacy {
        for field in entry.text_fields().into_iter().filter(|f| !f.is_empty()) {
            let results = corpus.advocacy.search(field);
            assert!(
                results.iter().any(|r| r.id == entry.id),
                "{} not found by its own field {:?}",
                entry.id,
                field
            );
        }
    }

    for topic in &corpus.topics {
        let results = corpus.topics.search(&topic.name);
        assert!(results.iter().any(|r| r.id == topic.id));
    }
}

#[test]
fn test_search_is_case_insensitive() {
    let corpus = dataset::builtin().unwrap();

    let pairs = [("INSURANCE", "insurance"), ("DERECHOS", "derechos"), ("HiPaA", "hipaa")];
    for (upper, lower) in pairs {
        assert_eq!(
            ids(&corpus.advocacy.search(upper)),
            ids(&corpus.advocacy.search(lower))
        );
    }
}

#[test]
fn test_empty_query_matches_everything_in_order() {
    let store = fixture();
    assert_eq!(ids(&store.search("")), vec!["a1", "a2", "a3"]);

    let corpus = dataset::builtin().unwrap();
    let all: Vec<String> = corpus.advocacy.ids().map(|id| id.to_string()).collect();
    assert_eq!(ids(&corpus.advocacy.search("")), all);
}

#[test]
fn test_no_match_is_empty_not_error() {
    let store = fixture();
    assert!(store.search("zzz-no-such-text").is_empty());
    assert!(store.filter_by_category(Category::Legal).is_empty());
    assert!(store.filter_by_categories(&[]).is_empty());
    assert_eq!(store.count(Some(Category::Caregiving)), 0);
}

#[test]
fn test_filter_returns_only_requested_categories() {
    let corpus = dataset::builtin().unwrap();

    for category in Category::ALL {
        for entry in corpus.advocacy.filter_by_category(category) {
            assert_eq!(entry.category, category);
        }
    }

    let wanted = [Category::Legal, Category::Rights];
    let results = corpus.advocacy.filter_by_categories(&wanted);
    assert!(!results.is_empty());
    assert!(results.iter().all(|e| wanted.contains(&e.category)));

    // Store order, not argument order
    let positions: Vec<usize> = results
        .iter()
        .map(|e| corpus.advocacy.ids().position(|id| *id == e.id).unwrap())
        .collect();
    let mut sorted = positions.clone();
    sorted.sort();
    assert_eq!(positions, sorted);
}

#[test]
fn test_count_matches_filter() {
    let corpus = dataset::builtin().unwrap();

    for category in Category::ALL {
        assert_eq!(
            corpus.advocacy.count(Some(category)),
            corpus.advocacy.filter_by_category(category).len()
        );
    }
    assert_eq!(corpus.advocacy.count(None), corpus.advocacy.len());

    let summed: usize = corpus.advocacy.category_counts().values().sum();
    assert_eq!(summed, corpus.advocacy.len());
}

#[test]
fn test_lookup_round_trip() {
    let corpus = dataset::builtin().unwrap();

    for entry in &corpus.advocacy {
        let found = corpus.advocacy.get_by_id(entry.id.as_str()).unwrap();
        assert!(std::ptr::eq(found, entry));
    }
    for topic in &corpus.topics {
        assert_eq!(corpus.topics.get_by_id(topic.id.as_str()), Some(topic));
    }

    assert!(corpus.advocacy.get_by_id("nonexistent-id-xyz").is_none());
}

#[test]
fn test_listed_categories_are_in_use() {
    let corpus = dataset::builtin().unwrap();
    let listed = corpus.advocacy.list_categories();

    for category in &listed {
        assert!(corpus.advocacy.count(Some(*category)) > 0);
    }
    for entry in &corpus.advocacy {
        assert!(listed.contains(&entry.category));
    }

    let mut store = fixture();
    assert!(!store.list_categories().contains(&Category::Legal));
    store = ContentStore::default();
    assert!(store.list_categories().is_empty());
    assert_eq!(store.count(None), 0);
}

#[test]
fn test_store_is_shareable_across_threads() {
    let corpus = dataset::builtin().unwrap();

    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(move || corpus.advocacy.search("care").len()))
        .collect();

    let counts: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(counts.windows(2).all(|w| w[0] == w[1]));
}
