//! The two stores that make up a corpus.

use super::store::{ContentStore, StoreError};
use crate::domain::{ContentEntry, EducationalContent};

/// Advocacy entries and educational topics, both frozen
#[derive(Debug, Default)]
pub struct Corpus {
    pub advocacy: ContentStore<ContentEntry>,
    pub topics: ContentStore<EducationalContent>,
}

impl Corpus {
    /// Pair two stores; ids must be unique across both
    pub fn new(
        advocacy: ContentStore<ContentEntry>,
        topics: ContentStore<EducationalContent>,
    ) -> Result<Self, StoreError> {
        if let Some(id) = advocacy.ids().find(|id| topics.contains(id.as_str())) {
            return Err(StoreError::DuplicateId { id: id.clone() });
        }

        Ok(Self { advocacy, topics })
    }

    /// Whether either store holds a record with this id
    pub fn contains_id(&self, id: &str) -> bool {
        self.advocacy.contains(id) || self.topics.contains(id)
    }

    pub fn len(&self) -> usize {
        self.advocacy.len() + self.topics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.advocacy.is_empty() && self.topics.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Category, ContentKind};

    #[test]
    fn test_ids_unique_across_stores() {
        let advocacy = ContentStore::from_entries([ContentEntry::new(
            "shared",
            Category::Rights,
            "Rights",
            "text",
        )])
        .unwrap();
        let topics = ContentStore::from_entries([EducationalContent::new(
            "shared",
            ContentKind::Topic,
            "Rights",
            "Derechos",
        )])
        .unwrap();

        let err = Corpus::new(advocacy, topics).unwrap_err();
        assert_eq!(err, StoreError::DuplicateId { id: "shared".into() });
    }

    #[test]
    fn test_contains_id_checks_both_stores() {
        let advocacy = ContentStore::from_entries([ContentEntry::new(
            "a1",
            Category::Rights,
            "Rights",
            "text",
        )])
        .unwrap();
        let topics = ContentStore::from_entries([EducationalContent::new(
            "t1",
            ContentKind::Topic,
            "Rights",
            "Derechos",
        )])
        .unwrap();

        let corpus = Corpus::new(advocacy, topics).unwrap();
        assert!(corpus.contains_id("a1"));
        assert!(corpus.contains_id("t1"));
        assert!(!corpus.contains_id("zzz"));
        assert_eq!(corpus.len(), 2);
    }
}
