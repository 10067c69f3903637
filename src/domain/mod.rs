//! Domain types for the content corpus.
//!
//! This module contains the record shapes:
//! - Category: closed set of advocacy subject areas
//! - ContentEntry: one patient-advocacy topic
//! - EducationalContent: a topic explained at five audience levels

pub mod category;
pub mod educational;
pub mod entry;
pub mod level;

// Re-export commonly used types
pub use category::{Category, ParseCategoryError};
pub use educational::{
    Citation, CitationKind, ClinicalRelevance, ContentKind, ContentStatus, ContentTags,
    CrossReference, EducationalContent, KeyTerm, LevelContent, Relationship,
};
pub use entry::{ContentEntry, EntryId, Language, ParseLanguageError};
pub use level::{ExplanationLevel, InvalidLevel};
