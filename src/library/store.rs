//! Frozen in-memory content store and its query layer.
//!
//! A store is assembled once through [`StoreBuilder`] and is read-only from
//! then on. Every query preserves insertion order, so identical inputs
//! against the same store always produce identical output.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use sha2::{Digest, Sha256};
use thiserror::Error;

use super::record::Record;
use crate::domain::EntryId;

/// Errors raised while assembling a store
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("duplicate record id: {id}")]
    DuplicateId { id: EntryId },
}

/// Accumulates records before the store is frozen
#[derive(Debug)]
pub struct StoreBuilder<T: Record> {
    entries: Vec<T>,
    index: HashMap<EntryId, usize>,
}

impl<T: Record> Default for StoreBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record> StoreBuilder<T> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Append a record, rejecting an id that is already present
    pub fn insert(&mut self, entry: T) -> Result<(), StoreError> {
        if self.index.contains_key(entry.id()) {
            return Err(StoreError::DuplicateId {
                id: entry.id().clone(),
            });
        }

        self.index.insert(entry.id().clone(), self.entries.len());
        self.entries.push(entry);
        Ok(())
    }

    pub fn extend(&mut self, entries: impl IntoIterator<Item = T>) -> Result<(), StoreError> {
        for entry in entries {
            self.insert(entry)?;
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Freeze the records and precompute their search blobs
    pub fn build(self) -> ContentStore<T> {
        let blobs = self.entries.iter().map(Record::search_blob).collect();
        ContentStore {
            entries: self.entries,
            index: self.index,
            blobs,
        }
    }
}

/// Read-only collection of records keyed by id
#[derive(Debug)]
pub struct ContentStore<T: Record> {
    entries: Vec<T>,
    index: HashMap<EntryId, usize>,
    /// Lower-cased search text, parallel to `entries`
    blobs: Vec<String>,
}

impl<T: Record> Default for ContentStore<T> {
    fn default() -> Self {
        StoreBuilder::new().build()
    }
}

impl<T: Record> ContentStore<T> {
    /// Build a store from records in iteration order
    pub fn from_entries(entries: impl IntoIterator<Item = T>) -> Result<Self, StoreError> {
        let mut builder = StoreBuilder::new();
        builder.extend(entries)?;
        Ok(builder.build())
    }

    /// Case-insensitive substring search over every text field.
    ///
    /// An empty query matches every record.
    pub fn search(&self, query: &str) -> Vec<&T> {
        let query_lower = query.to_lowercase();

        self.entries
            .iter()
            .zip(&self.blobs)
            .filter(|(_, blob)| blob.contains(&query_lower))
            .map(|(entry, _)| entry)
            .collect()
    }

    /// Records whose category is any of `categories`
    pub fn filter_by_categories(&self, categories: &[T::Category]) -> Vec<&T> {
        self.entries
            .iter()
            .filter(|entry| categories.contains(&entry.category()))
            .collect()
    }

    pub fn filter_by_category(&self, category: T::Category) -> Vec<&T> {
        self.filter_by_categories(std::slice::from_ref(&category))
    }

    pub fn get_by_id(&self, id: &str) -> Option<&T> {
        self.index.get(id).map(|&i| &self.entries[i])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Categories that at least one record currently uses
    pub fn list_categories(&self) -> BTreeSet<T::Category> {
        self.entries.iter().map(Record::category).collect()
    }

    /// Total size, or the size of one category
    pub fn count(&self, category: Option<T::Category>) -> usize {
        match category {
            None => self.len(),
            Some(c) => self.filter_by_category(c).len(),
        }
    }

    /// Number of records per category in use
    pub fn category_counts(&self) -> BTreeMap<T::Category, usize> {
        let mut counts = BTreeMap::new();
        for entry in &self.entries {
            *counts.entry(entry.category()).or_insert(0) += 1;
        }
        counts
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = &EntryId> {
        self.entries.iter().map(Record::id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// SHA256 over ids and search text, in store order
    pub fn fingerprint(&self) -> String {
        let mut hasher = Sha256::new();
        for (entry, blob) in self.entries.iter().zip(&self.blobs) {
            hasher.update(entry.id().as_str().as_bytes());
            hasher.update([0u8]);
            hasher.update(blob.as_bytes());
            hasher.update([0u8]);
        }
        hex::encode(hasher.finalize())
    }
}

impl<'a, T: Record> IntoIterator for &'a ContentStore<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
