//! The seam between record types and the store.

use std::fmt::{Debug, Display};
use std::hash::Hash;

use crate::domain::{Category, ContentEntry, ContentKind, EducationalContent, EntryId, Language};

/// Anything that can live in a [`ContentStore`](super::ContentStore)
pub trait Record {
    /// Closed classification used by `filter_by_category`
    type Category: Copy + Eq + Ord + Hash + Debug + Display;

    fn id(&self) -> &EntryId;

    fn category(&self) -> Self::Category;

    fn localized_name(&self, language: Language) -> &str;

    /// Every searchable text field, in declaration order
    fn text_fields(&self) -> Vec<&str>;

    /// Lower-cased, space-joined text fields
    fn search_blob(&self) -> String {
        self.text_fields().join(" ").to_lowercase()
    }

    fn cross_references(&self) -> Vec<&EntryId> {
        Vec::new()
    }
}

impl Record for ContentEntry {
    type Category = Category;

    fn id(&self) -> &EntryId {
        &self.id
    }

    fn category(&self) -> Category {
        self.category
    }

    fn localized_name(&self, language: Language) -> &str {
        ContentEntry::localized_name(self, language)
    }

    fn text_fields(&self) -> Vec<&str> {
        let mut fields = vec![
            self.name.as_str(),
            self.name_es.as_str(),
            self.description.as_str(),
            self.explanation.as_str(),
        ];
        fields.extend(self.key_points.iter().map(String::as_str));
        fields.extend(self.action_steps.iter().map(String::as_str));
        fields.extend(self.resources.iter().map(String::as_str));
        fields
    }

    fn cross_references(&self) -> Vec<&EntryId> {
        self.cross_references.iter().collect()
    }
}

impl Record for EducationalContent {
    type Category = ContentKind;

    fn id(&self) -> &EntryId {
        &self.id
    }

    fn category(&self) -> ContentKind {
        self.kind
    }

    fn localized_name(&self, language: Language) -> &str {
        EducationalContent::localized_name(self, language)
    }

    fn text_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str(), self.name_es.as_str()];
        fields.extend(self.alternate_names.iter().map(String::as_str));

        for level in &self.levels {
            fields.push(&level.summary);
            fields.push(&level.explanation);
            for term in &level.key_terms {
                fields.push(&term.term);
                fields.push(&term.definition);
            }
            fields.extend(level.analogies.iter().map(String::as_str));
            fields.extend(level.examples.iter().map(String::as_str));
            if let Some(notes) = &level.clinical_notes {
                fields.push(notes);
            }
            fields.extend(level.counseling_points.iter().map(String::as_str));
        }

        fields.extend(self.tags.topics.iter().map(String::as_str));
        fields.extend(self.tags.keywords.iter().map(String::as_str));
        fields
    }

    fn cross_references(&self) -> Vec<&EntryId> {
        self.cross_references.iter().map(|r| &r.target_id).collect()
    }
}
